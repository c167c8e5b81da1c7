use glam::Vec3;

pub const RED: Vec3 = Vec3::new(0.75, 0.15, 0.15);
pub const YELLOW: Vec3 = Vec3::new(0.75, 0.75, 0.15);
pub const GREEN: Vec3 = Vec3::new(0.15, 0.75, 0.15);
pub const CYAN: Vec3 = Vec3::new(0.15, 0.75, 0.75);
pub const BLUE: Vec3 = Vec3::new(0.15, 0.15, 0.75);
pub const PURPLE: Vec3 = Vec3::new(0.75, 0.15, 0.75);

/// Matte surface colours. Anything else is treated as a mirror-like surface
/// when triangles are built from a colour alone.
pub const MID_GRAY: Vec3 = Vec3::new(0.45, 0.45, 0.45);
pub const LIGHT_GRAY: Vec3 = Vec3::new(0.75, 0.75, 0.75);

/// Colour-match classification used by the box model.
///
/// Exact comparison is intentional: only the two reference grays are matte.
pub fn is_reflective_color(color: Vec3) -> bool {
    return color != MID_GRAY && color != LIGHT_GRAY;
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn grays_are_matte() {
        assert!(!is_reflective_color(MID_GRAY));
        assert!(!is_reflective_color(LIGHT_GRAY));
        assert!(!is_reflective_color(Vec3::splat(0.75)));
    }

    #[test]
    fn other_colors_reflect() {
        for c in [RED, YELLOW, GREEN, CYAN, BLUE, PURPLE, Vec3::splat(0.5)] {
            assert!(is_reflective_color(c));
        }
        // near misses still reflect
        assert!(is_reflective_color(Vec3::new(0.45, 0.45, 0.450001)));
    }
}
