//! Geographic positions.

/// A point on the ellipsoid, in degrees.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct GeoPoint {
    /// Latitude in degrees, north positive.
    pub latitude_deg: f64,
    /// Longitude in degrees, east positive.
    pub longitude_deg: f64,
}

impl GeoPoint {
    pub fn new(latitude_deg: f64, longitude_deg: f64) -> Self {
        Self {
            latitude_deg,
            longitude_deg,
        }
    }

    /// Shift by a latitude/longitude delta in degrees.
    pub fn offset(self, d_lat: f64, d_lon: f64) -> Self {
        Self::new(self.latitude_deg + d_lat, self.longitude_deg + d_lon)
    }
}

/// Camera pose as reported by the geospatial tracker.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct GeoPose {
    pub point: GeoPoint,
    /// Altitude above the WGS84 ellipsoid in meters.
    pub altitude_m: f64,
    /// Signed heading in degrees, (-180, 180].
    pub heading_deg: f64,
}
