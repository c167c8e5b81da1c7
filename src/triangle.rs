use crate::material::is_reflective_color;
use crate::ray::Ray;
use glam::{Mat3, Vec3};

/// Solution of the ray/triangle system: ray parameter `t` and the
/// barycentric-like coordinates `u`, `v` along the two edges.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Barycentric {
    pub t: f32,
    pub u: f32,
    pub v: f32,
}

impl Barycentric {
    /// True when the solution lies inside the triangle and in front of the ray.
    pub fn is_hit(&self) -> bool {
        return 0.0 <= self.u && 0.0 <= self.v && self.u + self.v <= 1.0 && 0.0 <= self.t;
    }
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Triangle {
    pub v0: Vec3,
    pub v1: Vec3,
    pub v2: Vec3,
    pub color: Vec3,
    /// Stored as computed; callers normalize on use.
    pub normal: Vec3,
    pub reflective: bool,
}

impl Triangle {
    /// Builds a triangle whose reflectivity follows the colour-match rule.
    pub fn new(v0: Vec3, v1: Vec3, v2: Vec3, color: Vec3) -> Triangle {
        let mut tri = Triangle {
            v0,
            v1,
            v2,
            color,
            normal: Vec3::ZERO,
            reflective: is_reflective_color(color),
        };
        tri.compute_normal();
        return tri;
    }

    pub fn with_reflective(mut self, reflective: bool) -> Triangle {
        self.reflective = reflective;
        return self;
    }

    /// Recomputes the outward normal from the winding `cross(e2, e1)`.
    pub fn compute_normal(&mut self) {
        let e1 = self.v1 - self.v0;
        let e2 = self.v2 - self.v0;
        self.normal = e2.cross(e1).normalize_or_zero();
    }

    pub fn unit_normal(&self) -> Vec3 {
        return self.normal.normalize();
    }

    /**
     * Solves `[-d | e1 | e2] * (t, u, v) = origin - v0` by inverting the
     * system matrix. Singular systems (degenerate triangles, rays parallel
     * to the plane, zero directions) yield `None`.
     */
    pub fn solve(&self, ray: &Ray) -> Option<Barycentric> {
        let e1 = self.v1 - self.v0;
        let e2 = self.v2 - self.v0;
        let a = Mat3::from_cols(-ray.direction, e1, e2);

        let det = a.determinant();
        if det == 0.0 || !det.is_finite() {
            return None;
        }

        let x = a.inverse() * (ray.origin - self.v0);
        if !x.is_finite() {
            return None;
        }

        return Some(Barycentric {
            t: x.x,
            u: x.y,
            v: x.z,
        });
    }

    /// Returns the hit point and its coordinates if the ray hits this triangle.
    pub fn intersect(&self, ray: &Ray) -> Option<(Vec3, Barycentric)> {
        let b = self.solve(ray)?;
        if !b.is_hit() {
            return None;
        }
        return Some((self.point_at(b.u, b.v), b));
    }

    pub fn point_at(&self, u: f32, v: f32) -> Vec3 {
        return self.v0 + u * (self.v1 - self.v0) + v * (self.v2 - self.v0);
    }

    pub fn centroid(&self) -> Vec3 {
        return (self.v0 + self.v1 + self.v2) / 3.0;
    }
}
