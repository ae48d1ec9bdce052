//! Landmark loading and anchor placement.
//!
//! Surveyed landmark lines arrive as CSV rows (length, bearing and three
//! coordinate pairs). Each row becomes a map polyline plus an anchor pose
//! whose yaw comes from the line's bearing and whose position and scale
//! follow the current [`PlacementConfig`].

pub mod anchor;
pub mod csv;
pub mod error;
pub mod geo;

pub use anchor::{AnchorPlacement, camera_anchor, place_all, place_line, polyline};
pub use csv::{LandmarkLine, load_landmark_csv, parse_landmark_csv};
pub use error::PlaceError;
pub use geo::{GeoPoint, GeoPose};

// Re-export so callers don't need the lower crates directly.
pub use landmark_bearing::{BearingError, Orientation4};
pub use landmark_config::PlacementConfig;
