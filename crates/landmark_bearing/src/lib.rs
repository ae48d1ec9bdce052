//! Bearing math for placing geospatial landmark anchors.
//!
//! This crate provides:
//! - Compass bearing → signed heading conversion
//! - Modular bearing subtraction on the 360 degree circle
//! - Yaw rotations for anchors derived from a landmark's survey bearing
//!
//! All functions are pure and validate their inputs eagerly: an
//! out-of-range bearing is reported as [`BearingError::InvalidArgument`],
//! never clamped.

pub mod bearing;
pub mod error;
pub mod orientation;
pub mod rotation;

pub use bearing::{FULL_CIRCLE_DEG, HALF_CIRCLE_DEG, bearing_with_subtract, heading_from_bearing};
pub use error::BearingError;
pub use orientation::Orientation4;
pub use rotation::{LINE_PERPENDICULAR_OFFSET_DEG, line_heading, yaw_rotation};
