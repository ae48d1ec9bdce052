//! Anchor yaw rotations from landmark bearings.
//!
//! Landmark line models are drawn perpendicular to their survey bearing, so
//! the bearing is first turned back by 90 deg and converted to a signed
//! heading. The heading then becomes a rotation about the vertical (Y) axis
//! of the anchor frame.

use std::f64::consts::PI;

use crate::bearing::{bearing_with_subtract, heading_from_bearing};
use crate::error::BearingError;
use crate::orientation::Orientation4;

/// Offset between a line's survey bearing and the model's facing direction.
pub const LINE_PERPENDICULAR_OFFSET_DEG: f64 = 90.0;

/// Heading of a line model surveyed along `bearing`.
///
/// Result lies in (-180, 180].
pub fn line_heading(bearing: f64) -> Result<f64, BearingError> {
    heading_from_bearing(bearing_with_subtract(bearing, LINE_PERPENDICULAR_OFFSET_DEG)?)
}

/// Unit quaternion rotating about +Y so that the model faces `heading_deg`.
///
/// Uses half-angle `(pi - heading) / 2`, which puts heading 180 at the
/// identity rotation.
pub fn yaw_rotation(heading_deg: f64) -> Orientation4 {
    let half = (PI - heading_deg.to_radians()) / 2.0;
    Orientation4::new(0.0, half.sin(), 0.0, half.cos())
}
