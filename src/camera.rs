use std::f32::consts::PI;

use glam::{Mat3, Vec3};

use crate::ray::Ray;

pub const DEFAULT_POSITION: Vec3 = Vec3::new(0.0, 0.0, -3.0);
pub const DEFAULT_VIEWPORT: u32 = 524;
pub const DEFAULT_MOVE_SPEED: f32 = 0.1;
pub const DEFAULT_YAW_STEP: f32 = PI / 60.0;

/// Pinhole camera with yaw-only rotation.
///
/// The world is y-down: pixel rows grow along +y and the camera looks along
/// the third column of `rot`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Camera {
    pub pos: Vec3,
    pub rot: Mat3,
    pub theta: f32,
    pub focal_length: f32,
    pub viewport_w: u32,
    pub viewport_h: u32,
    pub move_speed: f32,
    pub yaw_step: f32,
    initial_pos: Vec3,
}

impl Camera {
    pub fn new(pos: Vec3, focal_length: f32, viewport_w: u32, viewport_h: u32) -> Camera {
        Camera {
            pos,
            rot: Mat3::IDENTITY,
            theta: 0.0,
            focal_length,
            viewport_w,
            viewport_h,
            move_speed: DEFAULT_MOVE_SPEED,
            yaw_step: DEFAULT_YAW_STEP,
            initial_pos: pos,
        }
    }

    pub fn contains(&self, x: u32, y: u32) -> bool {
        return x < self.viewport_w && y < self.viewport_h;
    }

    /**
     * Primary ray through pixel (x, y). The camera-space direction is
     * `(x - w/2, y - h/2, f)` with integer halves, rotated into world space.
     */
    pub fn calc_ray(&self, x: f32, y: f32) -> Ray {
        let half_w = (self.viewport_w / 2) as f32;
        let half_h = (self.viewport_h / 2) as f32;
        let dir = Vec3::new(x - half_w, y - half_h, self.focal_length);
        return Ray::new(self.pos, self.rot * dir);
    }

    pub fn right(&self) -> Vec3 {
        self.rot.x_axis
    }

    pub fn down(&self) -> Vec3 {
        self.rot.y_axis
    }

    pub fn forward(&self) -> Vec3 {
        self.rot.z_axis
    }

    pub fn translate(&mut self, delta: Vec3) {
        self.pos += delta;
    }

    /// Adds `delta` to the yaw angle and patches the rotation matrix.
    pub fn yaw(&mut self, delta: f32) {
        self.set_theta(self.theta + delta);
    }

    /// Rewrites only the four entries touched by a rotation about y; the
    /// y row and column keep whatever they held, identity by construction.
    pub fn set_theta(&mut self, theta: f32) {
        self.theta = theta;
        let (s, c) = theta.sin_cos();
        self.rot.x_axis.x = c;
        self.rot.z_axis.z = c;
        self.rot.z_axis.x = -s;
        self.rot.x_axis.z = s;
    }

    pub fn reset(&mut self) {
        self.pos = self.initial_pos;
        self.rot = Mat3::IDENTITY;
        self.theta = 0.0;
    }
}

impl Default for Camera {
    fn default() -> Self {
        Camera::new(DEFAULT_POSITION, DEFAULT_VIEWPORT as f32, DEFAULT_VIEWPORT, DEFAULT_VIEWPORT)
    }
}
