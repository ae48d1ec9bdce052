//! Compass bearing conversions.
//!
//! A bearing is measured in degrees clockwise from north and is accepted in
//! the closed range [0, 360]. Headings are the signed counterpart used by
//! the anchor API: bearings past 180 deg wrap to negative values.

use crate::error::BearingError;
use crate::orientation::Orientation4;

/// Degrees in a full circle.
pub const FULL_CIRCLE_DEG: f64 = 360.0;

/// Degrees in a half circle.
pub const HALF_CIRCLE_DEG: f64 = 180.0;

fn check_bearing(bearing: f64) -> Result<(), BearingError> {
    if bearing < 0.0 || bearing > FULL_CIRCLE_DEG {
        return Err(BearingError::InvalidArgument);
    }
    Ok(())
}

/// Convert a compass bearing in [0, 360] to a signed heading.
///
/// Bearings in [0, 180] are returned unchanged; bearings in (180, 360] map
/// to `bearing - 360`, i.e. into (-180, 0].
pub fn heading_from_bearing(bearing: f64) -> Result<f64, BearingError> {
    check_bearing(bearing)?;
    if bearing > HALF_CIRCLE_DEG {
        return Ok(-HALF_CIRCLE_DEG + (bearing - HALF_CIRCLE_DEG));
    }
    Ok(bearing)
}

/// Subtract `subtract` from `bearing` on the 360 deg circle.
///
/// Both inputs must lie in [0, 360]. A negative difference wraps by adding
/// 360; a non-negative one is returned as-is, so `360 - 0` stays 360.
pub fn bearing_with_subtract(bearing: f64, subtract: f64) -> Result<f64, BearingError> {
    check_bearing(bearing)?;
    check_bearing(subtract)?;
    let diff = bearing - subtract;
    if diff < 0.0 {
        return Ok(FULL_CIRCLE_DEG + diff);
    }
    Ok(diff)
}

/// Placeholder bearing → orientation conversion.
///
/// Only negative bearings are rejected. Inside the open interval (90, 270)
/// every component is `180 - bearing`; elsewhere the zero orientation is
/// returned. This is not a rotation quaternion; anchors use
/// [`crate::rotation::yaw_rotation`] instead.
#[cfg_attr(not(test), allow(dead_code))]
pub(crate) fn bearing_to_orientation(bearing: f64) -> Result<Orientation4, BearingError> {
    if bearing < 0.0 {
        return Err(BearingError::InvalidArgument);
    }
    if bearing > 90.0 && bearing < 270.0 {
        let t = -bearing + HALF_CIRCLE_DEG;
        return Ok(Orientation4::new(t, t, t, t));
    }
    Ok(Orientation4::ZERO)
}
