use glam::Vec3;
use serde::{Deserialize, Serialize};

use crate::{
    intersection::{closest_intersection, Intersection},
    ray::Ray,
    triangle::Triangle,
    utils::SHADOW_EPSILON,
};

/// Serializable light description. Every colour is scaled by `intensity`.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct LightConfig {
    pub position: [f32; 3],
    pub intensity: f32,
    pub diffuse: [f32; 3],
    pub specular: [f32; 3],
    pub ambient: [f32; 3],
    pub shininess: f32,
}

impl Default for LightConfig {
    fn default() -> Self {
        LightConfig {
            position: [0.0, -0.3, -0.5],
            intensity: 1.0,
            diffuse: [1.0, 1.0, 1.0],
            specular: [0.8, 0.8, 0.8],
            ambient: [0.2, 0.2, 0.2],
            shininess: 2.0,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PointLight {
    pub position: Vec3,
    pub diffuse: Vec3,
    pub specular: Vec3,
    pub ambient: Vec3,
    pub shininess: f32,
    initial_position: Vec3,
}

impl PointLight {
    pub fn new(
        position: Vec3,
        diffuse: Vec3,
        specular: Vec3,
        ambient: Vec3,
        shininess: f32,
    ) -> PointLight {
        PointLight {
            position,
            diffuse,
            specular,
            ambient,
            shininess,
            initial_position: position,
        }
    }

    pub fn from_config(cfg: &LightConfig) -> PointLight {
        PointLight::new(
            Vec3::from_array(cfg.position),
            cfg.intensity * Vec3::from_array(cfg.diffuse),
            cfg.intensity * Vec3::from_array(cfg.specular),
            cfg.intensity * Vec3::from_array(cfg.ambient),
            cfg.shininess,
        )
    }

    pub fn translate(&mut self, delta: Vec3) {
        self.position += delta;
    }

    pub fn reset(&mut self) {
        self.position = self.initial_position;
    }

    /// True if another triangle sits between the hit point and the light.
    pub fn is_shadowed(&self, isect: &Intersection, triangles: &[Triangle]) -> bool {
        let to_light = (self.position - isect.pos).normalize();
        let dist = isect.pos.distance(self.position);

        let shadow_ray = Ray::offset(isect.pos, to_light, SHADOW_EPSILON);
        return match closest_intersection(&shadow_ray, triangles) {
            Some(blocker) => blocker.triangle_idx != isect.triangle_idx && blocker.distance < dist,
            None => false,
        };
    }

    /**
     * Phong diffuse + specular at a hit point, attenuated by the squared
     * distance to the light. Ambient is left to the caller.
     *
     * `eye` is the viewer used for the specular lobe; the renderer always
     * passes the camera position, including for bounce hits.
     */
    pub fn direct_light(&self, isect: &Intersection, triangles: &[Triangle], eye: Vec3) -> Vec3 {
        if self.is_shadowed(isect, triangles) {
            return Vec3::ZERO;
        }

        let n = triangles[isect.triangle_idx].unit_normal();
        let r = (self.position - isect.pos).normalize();
        let dist_sq = isect.pos.distance_squared(self.position);

        // specular
        let reflected = (2.0 * r.dot(n).max(0.0) * n - r).normalize();
        let view = (eye - isect.pos).normalize();
        let r_dot_v = reflected.dot(view).max(0.0);
        let specular = r_dot_v.powf(self.shininess) * self.specular / dist_sq;

        // diffuse
        let diffuse = n.dot(r).max(0.0) * self.diffuse / dist_sq;

        return specular + diffuse;
    }
}

impl Default for PointLight {
    fn default() -> Self {
        PointLight::from_config(&LightConfig::default())
    }
}
