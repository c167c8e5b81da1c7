use glam::Vec3;

/// Offset applied to shadow ray origins before the occlusion query.
pub const SHADOW_EPSILON: f32 = 1e-6;

/// Offset applied to reflected ray origins before the bounce query.
pub const BOUNCE_EPSILON: f32 = 1e-4;

/// Mirrors `incoming` (pointing away from the surface) about `normal`.
///
/// Both vectors are expected to be unit length. Back-facing directions are
/// clamped, so a vector below the surface reflects to `-incoming`.
pub fn reflect(incoming: &Vec3, normal: &Vec3) -> Vec3 {
    let cos = incoming.dot(*normal).max(0.0);
    return (2.0 * cos * *normal - *incoming).normalize();
}
