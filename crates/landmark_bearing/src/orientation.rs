//! Quaternion-shaped orientation value.

/// Four-component orientation `(qx, qy, qz, qw)`.
///
/// Conventionally a rotation quaternion, but nothing here normalizes or
/// validates the components.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Orientation4 {
    /// X component of the vector part.
    pub qx: f64,
    /// Y (vertical axis) component of the vector part.
    pub qy: f64,
    /// Z component of the vector part.
    pub qz: f64,
    /// Scalar part.
    pub qw: f64,
}

impl Orientation4 {
    /// All four components zero.
    pub const ZERO: Self = Self::new(0.0, 0.0, 0.0, 0.0);

    /// Build from components in `(x, y, z, w)` order.
    pub const fn new(qx: f64, qy: f64, qz: f64, qw: f64) -> Self {
        Self { qx, qy, qz, qw }
    }

    /// Euclidean length of the four components.
    pub fn norm(&self) -> f64 {
        (self.qx * self.qx + self.qy * self.qy + self.qz * self.qz + self.qw * self.qw).sqrt()
    }
}
