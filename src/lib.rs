//! Ray caster for spheres under a single point light: Phong shading, hard
//! shadows, one ray per pixel.

pub mod application;
pub mod camera;
pub mod intersection;
pub mod output;
pub mod ray;
pub mod renderer;
pub mod scene;
pub mod shading;
pub mod util;

pub use camera::{Camera, ViewPlane};
pub use intersection::{closest_hit, Hit, T_MAX};
pub use ray::Ray;
pub use renderer::{FrameBuffer, Projection, RenderSettings, Renderer, Resolution};
pub use scene::{Light, Material, Scene, Sphere};
