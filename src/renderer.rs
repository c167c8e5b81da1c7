use std::path::Path;
use std::time::Instant;

use glam::Vec3;
use image::{Rgb, RgbImage};
use log::debug;
use rayon::prelude::*;

use crate::{
    intersection::{closest_intersection, Intersection},
    ray::Ray,
    error::Result,
    scene::Scene,
    utils::{reflect, BOUNCE_EPSILON},
};

/// Reflective bounces traced beyond the primary hit.
pub const MAX_RECURSION: u32 = 1;

const RESULT_NULL: Vec3 = Vec3::new(0.0, 0.0, 0.0);

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Raytracer {
    pub max_depth: u32,
}

impl Default for Raytracer {
    fn default() -> Self {
        Raytracer { max_depth: MAX_RECURSION }
    }
}

impl Raytracer {
    pub fn new(max_depth: u32) -> Raytracer {
        Raytracer { max_depth }
    }

    /// `(direct + ambient) * surface colour` at a hit.
    pub fn local_color(scene: &Scene, isect: &Intersection) -> Vec3 {
        let tris = scene.triangles();
        let direct = scene.light.direct_light(isect, tris, scene.camera.pos);
        return (direct + scene.light.ambient) * tris[isect.triangle_idx].color;
    }

    /**
     * Multiplies in up to `max_depth` mirror bounces, starting from `hit`
     * seen from `prev_pos`. Every bounce hit is shaded with its local colour
     * regardless of its own reflectivity; a miss ends the walk with the
     * colour gathered so far.
     */
    pub fn shade(&self, scene: &Scene, color: Vec3, prev_pos: Vec3, hit: Intersection) -> Vec3 {
        let mut color = color;
        let mut prev_pos = prev_pos;
        let mut current = hit;

        for _ in 0..self.max_depth {
            let d = (prev_pos - current.pos).normalize();
            let n = scene.triangle(current.triangle_idx).unit_normal();
            let r = reflect(&d, &n);

            let bounce = Ray::offset(current.pos, r, BOUNCE_EPSILON);
            let next = match closest_intersection(&bounce, scene.triangles()) {
                Some(next) => next,
                None => return color,
            };

            color *= Raytracer::local_color(scene, &next);
            prev_pos = current.pos;
            current = next;
        }

        return color;
    }

    pub fn trace(&self, scene: &Scene, ray: &Ray) -> Vec3 {
        let hit = match closest_intersection(ray, scene.triangles()) {
            Some(hit) => hit,
            None => return RESULT_NULL,
        };

        let color = Raytracer::local_color(scene, &hit);
        if !scene.triangle(hit.triangle_idx).reflective {
            return color;
        }
        return self.shade(scene, color, ray.origin, hit);
    }

    /// Linear colour for a pixel, or `None` outside the viewport.
    pub fn color_for_pixel(&self, scene: &Scene, x: u32, y: u32) -> Option<Vec3> {
        if !scene.camera.contains(x, y) {
            return None;
        }
        let ray = scene.camera.calc_ray(x as f32, y as f32);
        return Some(self.trace(scene, &ray));
    }

    /// Renders every pixel of the camera viewport, rows in parallel.
    pub fn render(&self, scene: &Scene) -> Frame {
        let width = scene.camera.viewport_w;
        let height = scene.camera.viewport_h;
        let start = Instant::now();

        let mut pixels = vec![RESULT_NULL; (width as usize) * (height as usize)];
        pixels
            .par_chunks_mut(width.max(1) as usize)
            .enumerate()
            .for_each(|(y, row)| {
                for (x, px) in row.iter_mut().enumerate() {
                    let ray = scene.camera.calc_ray(x as f32, y as f32);
                    *px = self.trace(scene, &ray);
                }
            });

        debug!("rendered {}x{} in {:?}", width, height, start.elapsed());
        Frame {
            width,
            height,
            pixels,
        }
    }
}

/// Quantises a linear colour to 8 bits per channel.
pub fn to_rgb8(color: Vec3) -> [u8; 3] {
    let q = |c: f32| (255.0 * c).clamp(0.0, 255.0).round() as u8;
    [q(color.x), q(color.y), q(color.z)]
}

/// Row-major buffer of linear colours.
#[derive(Debug, Clone, PartialEq)]
pub struct Frame {
    pub width: u32,
    pub height: u32,
    pub pixels: Vec<Vec3>,
}

impl Frame {
    pub fn get(&self, x: u32, y: u32) -> Option<Vec3> {
        if x >= self.width || y >= self.height {
            return None;
        }
        self.pixels.get((y * self.width + x) as usize).copied()
    }

    pub fn to_image(&self) -> RgbImage {
        RgbImage::from_fn(self.width, self.height, |x, y| {
            Rgb(to_rgb8(self.pixels[(y * self.width + x) as usize]))
        })
    }

    /// Writes the quantised frame; the format follows the file extension.
    pub fn save<P: AsRef<Path>>(&self, path: P) -> Result<()> {
        self.to_image().save(path)?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{
        camera::Camera,
        cornell,
        light::{LightConfig, PointLight},
        material::{LIGHT_GRAY, RED},
        triangle::Triangle,
    };

    fn box_scene() -> Scene {
        Scene::new(cornell::test_model(), Camera::default(), PointLight::default())
    }

    fn small_box_scene() -> Scene {
        let camera = Camera::new(Vec3::new(0.0, 0.0, -3.0), 24.0, 24, 24);
        Scene::new(cornell::test_model(), camera, PointLight::default())
    }

    #[test]
    fn quantisation_rounds_and_clamps() {
        assert_eq!(to_rgb8(Vec3::new(0.0, 1.0, 0.5)), [0, 255, 128]);
        assert_eq!(to_rgb8(Vec3::new(-0.3, 7.0, 0.499 / 255.0)), [0, 255, 0]);
        assert_eq!(to_rgb8(Vec3::splat(0.502 / 255.0 + 100.0 / 255.0)), [101, 101, 101]);
    }

    #[test]
    fn out_of_range_pixel_is_noop() {
        let scene = box_scene();
        let rt = Raytracer::default();
        assert!(rt.color_for_pixel(&scene, 524, 0).is_none());
        assert!(rt.color_for_pixel(&scene, 0, 524).is_none());
        assert!(rt.color_for_pixel(&scene, 523, 523).is_some());
    }

    #[test]
    fn miss_is_black() {
        let scene = Scene::new(Vec::new(), Camera::default(), PointLight::default());
        assert_eq!(Raytracer::default().color_for_pixel(&scene, 10, 10), Some(Vec3::ZERO));
    }

    #[test]
    fn matte_hit_gets_local_color_only() {
        let scene = box_scene();
        let rt = Raytracer::new(3);
        // upper centre pixel looks at the light-gray ceiling
        let ray = scene.camera.calc_ray(262.0, 100.0);
        let hit = closest_intersection(&ray, scene.triangles()).unwrap();
        assert_eq!(scene.triangle(hit.triangle_idx).color, LIGHT_GRAY);
        let expected = Raytracer::local_color(&scene, &hit);
        assert_eq!(rt.color_for_pixel(&scene, 262, 100), Some(expected));
    }

    #[test]
    fn depth_zero_equals_direct_shading() {
        let scene = box_scene();
        let rt = Raytracer::new(0);
        for (x, y) in [(60, 262), (470, 262), (200, 420), (380, 380)] {
            let ray = scene.camera.calc_ray(x as f32, y as f32);
            let hit = closest_intersection(&ray, scene.triangles()).unwrap();
            let expected = Raytracer::local_color(&scene, &hit);
            assert_eq!(rt.color_for_pixel(&scene, x, y), Some(expected));
        }
    }

    #[test]
    fn deeper_bounces_never_brighten() {
        // dim enough that every local colour stays below one
        let cfg = LightConfig {
            intensity: 0.05,
            ..LightConfig::default()
        };
        let light = PointLight::from_config(&cfg);
        let scene = Scene::new(cornell::test_model(), Camera::default(), light);
        let shallow = Raytracer::new(0);
        let deep = Raytracer::new(1);
        let deeper = Raytracer::new(3);
        for y in (0..524).step_by(37) {
            for x in (0..524).step_by(41) {
                let a = shallow.color_for_pixel(&scene, x, y).unwrap();
                let b = deep.color_for_pixel(&scene, x, y).unwrap();
                let c = deeper.color_for_pixel(&scene, x, y).unwrap();
                assert!(b.cmple(a + Vec3::splat(1e-6)).all(), "({x}, {y}): {b} > {a}");
                assert!(c.cmple(b + Vec3::splat(1e-6)).all(), "({x}, {y}): {c} > {b}");
                assert!(c.cmpge(Vec3::ZERO).all());
            }
        }
    }

    #[test]
    fn reflective_hit_multiplies_in_bounce() {
        // mirror floor under a matte ceiling; camera looks down at an angle
        let y_floor = 1.0;
        let floor = [
            Triangle::new(
                Vec3::new(-4.0, y_floor, -4.0),
                Vec3::new(4.0, y_floor, 4.0),
                Vec3::new(4.0, y_floor, -4.0),
                RED,
            ),
            Triangle::new(
                Vec3::new(-4.0, y_floor, -4.0),
                Vec3::new(-4.0, y_floor, 4.0),
                Vec3::new(4.0, y_floor, 4.0),
                RED,
            ),
        ];
        let ceiling = Triangle::new(
            Vec3::new(-4.0, -1.0, -4.0),
            Vec3::new(4.0, -1.0, 4.0),
            Vec3::new(-4.0, -1.0, 4.0),
            LIGHT_GRAY,
        );
        let mut tris = floor.to_vec();
        tris.push(ceiling);

        let camera = Camera::new(Vec3::new(0.0, 0.0, -1.0), 1.0, 2, 2);
        let light_pos = Vec3::new(0.0, -0.5, 0.0);
        let light = PointLight::new(light_pos, Vec3::ONE, Vec3::ZERO, Vec3::splat(0.2), 2.0);
        let scene = Scene::new(tris, camera, light);

        let ray = Ray::new(camera.pos, Vec3::new(0.0, 1.0, 1.0));
        let hit = closest_intersection(&ray, scene.triangles()).unwrap();
        assert!(hit.triangle_idx < 2);

        let base = Raytracer::local_color(&scene, &hit);
        let rt = Raytracer::default();
        let shaded = rt.trace(&scene, &ray);

        let bounce = Ray::offset(hit.pos, Vec3::new(0.0, -1.0, 1.0).normalize(), BOUNCE_EPSILON);
        let second = closest_intersection(&bounce, scene.triangles()).unwrap();
        assert_eq!(second.triangle_idx, 2);
        let expected = base * Raytracer::local_color(&scene, &second);
        assert!(shaded.abs_diff_eq(expected, 1e-5));

        let mut matte = scene.clone();
        matte.disable_reflections();
        assert_eq!(rt.trace(&matte, &ray), base);
    }

    #[test]
    fn bounce_miss_keeps_color() {
        let tri = Triangle::new(
            Vec3::new(-4.0, 1.0, -4.0),
            Vec3::new(4.0, 1.0, 4.0),
            Vec3::new(4.0, 1.0, -4.0),
            RED,
        );
        let camera = Camera::new(Vec3::new(0.0, 0.0, -1.0), 1.0, 2, 2);
        let scene = Scene::new(vec![tri], camera, PointLight::default());
        let ray = Ray::new(camera.pos, Vec3::new(0.5, 1.0, 1.0));
        let hit = closest_intersection(&ray, scene.triangles()).unwrap();
        let base = Raytracer::local_color(&scene, &hit);
        assert_eq!(Raytracer::new(4).trace(&scene, &ray), base);
    }

    #[test]
    fn parallel_render_matches_per_pixel_query() {
        let scene = small_box_scene();
        let rt = Raytracer::default();
        let frame = rt.render(&scene);
        assert_eq!(frame.pixels.len(), 24 * 24);
        for y in 0..24 {
            for x in 0..24 {
                assert_eq!(frame.get(x, y), rt.color_for_pixel(&scene, x, y));
            }
        }
        assert!(frame.get(24, 0).is_none());

        let img = frame.to_image();
        assert_eq!(img.dimensions(), (24, 24));
        assert_eq!(img.get_pixel(5, 7).0, to_rgb8(frame.get(5, 7).unwrap()));
    }

    #[test]
    fn save_writes_png_and_reports_image_errors() {
        let frame = Raytracer::default().render(&small_box_scene());
        let dir = std::env::temp_dir().join(format!("boxtracer-frame-{}", std::process::id()));
        std::fs::create_dir_all(&dir).unwrap();
        let path = dir.join("frame.png");

        frame.save(&path).unwrap();
        let read_back = image::open(&path).unwrap().to_rgb8();
        assert_eq!(read_back, frame.to_image());
        std::fs::remove_dir_all(&dir).ok();

        let err = frame.save(dir.join("missing").join("frame.png")).unwrap_err();
        assert!(matches!(err, crate::error::Error::Image(_)));
    }
}
