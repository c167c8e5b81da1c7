//! Whitted-style raytracer for a closed triangle scene.
//!
//! Primary rays come from a yaw-only pinhole camera, hits are found by a
//! brute-force scan over the triangle list, and surfaces are lit with a
//! shadowed Phong point light plus a bounded number of mirror bounces.

pub mod camera;
pub mod config;
pub mod controls;
pub mod cornell;
pub mod error;
pub mod intersection;
pub mod light;
pub mod loader;
pub mod material;
pub mod ray;
pub mod renderer;
pub mod scene;
pub mod triangle;
pub mod utils;

pub use camera::Camera;
pub use config::{ReflectionPolicy, RenderSettings};
pub use controls::Command;
pub use error::{Error, Result};
pub use intersection::{closest_intersection, Intersection};
pub use light::{LightConfig, PointLight};
pub use ray::Ray;
pub use renderer::{to_rgb8, Frame, Raytracer, MAX_RECURSION};
pub use scene::Scene;
pub use triangle::Triangle;
