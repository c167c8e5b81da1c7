use glam::Vec3;

/// A query ray. The direction does not need to be unit length.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Ray {
    pub origin: Vec3,
    pub direction: Vec3,
}

impl Ray {
    pub fn new(origin: Vec3, direction: Vec3) -> Ray {
        Ray { origin, direction }
    }

    /// Builds a secondary ray whose origin is nudged `epsilon` along `direction`.
    pub fn offset(origin: Vec3, direction: Vec3, epsilon: f32) -> Ray {
        Ray {
            origin: origin + direction * epsilon,
            direction,
        }
    }
}
