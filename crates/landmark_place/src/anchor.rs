//! Anchor poses for landmark lines.

use landmark_bearing::{Orientation4, line_heading, yaw_rotation};
use landmark_config::PlacementConfig;
use tracing::debug;

use crate::csv::LandmarkLine;
use crate::error::PlaceError;
use crate::geo::{GeoPoint, GeoPose};

/// Everything needed to create one geospatial anchor and scale its model.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct AnchorPlacement {
    /// Anchor position after the control offset.
    pub position: GeoPoint,
    /// Anchor altitude in meters.
    pub altitude_m: f64,
    /// Yaw rotation of the model.
    pub rotation: Orientation4,
    /// Signed heading the rotation was built from, in degrees.
    pub heading_deg: f64,
    /// Model scale `[x, y, z]`.
    pub scale: [f64; 3],
}

/// Place the model for one landmark line.
///
/// The model faces perpendicular to the survey bearing, sits
/// `altitude_offset_m` below the camera, and is stretched along X by the
/// line length.
pub fn place_line(
    line: &LandmarkLine,
    camera_altitude_m: f64,
    config: &PlacementConfig,
) -> Result<AnchorPlacement, PlaceError> {
    let heading_deg = line_heading(line.bearing)?;
    let placement = AnchorPlacement {
        position: line.anchor.offset(config.control_x, config.control_y),
        altitude_m: camera_altitude_m - config.altitude_offset_m,
        rotation: yaw_rotation(heading_deg),
        heading_deg,
        scale: [
            line.length * config.length_scale,
            config.model_scale_y,
            config.model_scale_z,
        ],
    };
    debug!(
        bearing = line.bearing,
        heading = heading_deg,
        lat = placement.position.latitude_deg,
        lon = placement.position.longitude_deg,
        "anchor placed"
    );
    Ok(placement)
}

/// Place every line, stopping at the first invalid bearing.
pub fn place_all(
    lines: &[LandmarkLine],
    camera_altitude_m: f64,
    config: &PlacementConfig,
) -> Result<Vec<AnchorPlacement>, PlaceError> {
    lines
        .iter()
        .map(|line| place_line(line, camera_altitude_m, config))
        .collect()
}

/// Map segment drawn for a line, start to end.
pub fn polyline(line: &LandmarkLine) -> [GeoPoint; 2] {
    [line.start, line.end]
}

/// Anchor directly at the camera, facing the camera heading.
///
/// No control offset is applied.
pub fn camera_anchor(camera: &GeoPose, config: &PlacementConfig) -> AnchorPlacement {
    AnchorPlacement {
        position: camera.point,
        altitude_m: camera.altitude_m - config.altitude_offset_m,
        rotation: yaw_rotation(camera.heading_deg),
        heading_deg: camera.heading_deg,
        scale: [1.0, config.model_scale_y, config.model_scale_z],
    }
}
