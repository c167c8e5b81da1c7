use glam::Vec3;

use crate::{ray::Ray, triangle::Triangle};

/// Closest-hit record. `triangle_idx` indexes the slice the query ran against.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Intersection {
    pub pos: Vec3,
    pub distance: f32,
    pub triangle_idx: usize,
}

/**
 * Brute-force closest hit over every triangle.
 *
 * Candidates are ranked by Euclidean distance from the ray origin to the hit
 * point, not by the ray parameter. Equal distances are resolved with `<=`,
 * so the later triangle in slice order replaces an earlier one.
 */
pub fn closest_intersection(ray: &Ray, triangles: &[Triangle]) -> Option<Intersection> {
    let mut min_dist = f32::MAX;
    let mut closest: Option<Intersection> = None;

    for (idx, tri) in triangles.iter().enumerate() {
        let (pos, _) = match tri.intersect(ray) {
            Some(hit) => hit,
            None => continue,
        };

        let dist = ray.origin.distance(pos);
        if dist <= min_dist {
            min_dist = dist;
            closest = Some(Intersection {
                pos,
                distance: dist,
                triangle_idx: idx,
            });
        }
    }

    return closest;
}
