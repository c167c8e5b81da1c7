use crate::{camera::Camera, light::PointLight, triangle::Triangle};

/// Render context: immutable geometry plus the camera and light snapshot a
/// frame is rendered from.
///
/// Rendering only ever borrows a `Scene` immutably; camera and light are
/// changed between frames through `&mut Scene`.
#[derive(Debug, Clone)]
pub struct Scene {
    triangles: Vec<Triangle>,
    pub camera: Camera,
    pub light: PointLight,
}

impl Scene {
    pub fn new(triangles: Vec<Triangle>, camera: Camera, light: PointLight) -> Scene {
        Scene {
            triangles,
            camera,
            light,
        }
    }

    /// Triangle indices stay valid for the lifetime of the scene.
    pub fn triangles(&self) -> &[Triangle] {
        &self.triangles
    }

    pub fn triangle(&self, idx: usize) -> &Triangle {
        &self.triangles[idx]
    }

    /// Marks every triangle matte, disabling reflective bounces.
    pub fn disable_reflections(&mut self) {
        for tri in self.triangles.iter_mut() {
            tri.reflective = false;
        }
    }

    pub fn reset(&mut self) {
        self.camera.reset();
        self.light.reset();
    }
}
