//! Placement settings for landmark anchors.
//!
//! Holds the user-tunable offsets applied when turning surveyed landmark
//! lines into anchors: the altitude drop below the camera, a fine
//! latitude/longitude nudge, and model scale factors. Settings persist as
//! TOML; a missing file means defaults.

pub mod error;
pub mod placement;

pub use error::ConfigError;
pub use placement::{
    DEFAULT_ALTITUDE_OFFSET_M, DEFAULT_CONTROL_STEP_DEG, DEFAULT_LENGTH_SCALE, Nudge,
    PlacementConfig,
};
