use crate::Vec3;

/// A ray in 3D space with an origin and a unit-length direction.
///
/// `Ray::new` normalizes the direction, so every consumer may assume the
/// stored direction has unit length. A zero-length direction is not a valid
/// input (normalizing it yields NaN components).
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct Ray {
    pub origin: Vec3,
    pub direction: Vec3,
}

impl Ray {
    /// Create a new ray. `direction` is normalized here.
    pub fn new(origin: Vec3, direction: Vec3) -> Self {
        Self {
            origin,
            direction: direction.normalize(),
        }
    }

    /// Get the point along the ray at parameter t.
    ///
    /// Returns: origin + t * direction
    pub fn at(&self, t: f32) -> Vec3 {
        self.origin + self.direction * t
    }
}
