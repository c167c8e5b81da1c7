use std::fs::File;
use std::io::BufReader;
use std::path::Path;

use glam::Vec3;
use serde::{Deserialize, Serialize};

use crate::{
    camera::{Camera, DEFAULT_MOVE_SPEED, DEFAULT_VIEWPORT, DEFAULT_YAW_STEP},
    error::Result,
    light::{LightConfig, PointLight},
    renderer::MAX_RECURSION,
};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ReflectionPolicy {
    /// Keep each triangle's own reflective flag.
    ColorMatch,
    /// Treat every surface as matte.
    Disabled,
}

/// Render settings loaded from JSON. Missing fields take the defaults of the
/// reference scene.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct RenderSettings {
    pub width: u32,
    pub height: u32,
    /// Defaults to the viewport height.
    pub focal_length: Option<f32>,
    pub max_depth: u32,
    pub camera_position: [f32; 3],
    pub move_speed: f32,
    pub yaw_step: f32,
    pub light: LightConfig,
    pub reflections: ReflectionPolicy,
}

impl Default for RenderSettings {
    fn default() -> Self {
        RenderSettings {
            width: DEFAULT_VIEWPORT,
            height: DEFAULT_VIEWPORT,
            focal_length: None,
            max_depth: MAX_RECURSION,
            camera_position: [0.0, 0.0, -3.0],
            move_speed: DEFAULT_MOVE_SPEED,
            yaw_step: DEFAULT_YAW_STEP,
            light: LightConfig::default(),
            reflections: ReflectionPolicy::ColorMatch,
        }
    }
}

impl RenderSettings {
    pub fn load<P: AsRef<Path>>(path: P) -> Result<RenderSettings> {
        let file = File::open(path)?;
        let settings = serde_json::from_reader(BufReader::new(file))?;
        Ok(settings)
    }

    pub fn camera(&self) -> Camera {
        let focal_length = self.focal_length.unwrap_or(self.height as f32);
        let pos = Vec3::from_array(self.camera_position);
        let mut camera = Camera::new(pos, focal_length, self.width, self.height);
        camera.move_speed = self.move_speed;
        camera.yaw_step = self.yaw_step;
        camera
    }

    pub fn light(&self) -> PointLight {
        PointLight::from_config(&self.light)
    }
}
