use std::time::Instant;

use crate::intersection::{self, T_MAX};
use crate::ray::Ray;
use crate::scene::Scene;
use crate::shading;
use crate::util::math;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Resolution {
    pub width: u32,
    pub height: u32,
}

impl Resolution {
    pub fn new(width: u32, height: u32) -> Self {
        debug_assert!(width > 0 && height > 0, "empty resolution {width}x{height}");
        Self { width, height }
    }

    pub fn pixel_count(&self) -> usize {
        self.width as usize * self.height as usize
    }
}

impl Default for Resolution {
    fn default() -> Self {
        Self::new(600, 600)
    }
}

/// Linear, unclamped colors for a whole frame. `(0, 0)` is the bottom-left
/// pixel.
#[derive(Debug, Clone, PartialEq)]
pub struct FrameBuffer {
    resolution: Resolution,
    pixels: Vec<glam::Vec3>,
    max: f32,
}

impl FrameBuffer {
    pub fn new(resolution: Resolution) -> Self {
        Self {
            resolution,
            pixels: vec![glam::Vec3::ZERO; resolution.pixel_count()],
            max: 1.0,
        }
    }

    pub fn resolution(&self) -> Resolution {
        self.resolution
    }

    pub fn width(&self) -> u32 {
        self.resolution.width
    }

    pub fn height(&self) -> u32 {
        self.resolution.height
    }

    /// Brightest channel stored so far, never below 1.0.
    pub fn max(&self) -> f32 {
        self.max
    }

    #[inline(always)]
    fn offset(&self, x: u32, y: u32) -> usize {
        assert!(
            x < self.resolution.width && y < self.resolution.height,
            "pixel ({x}, {y}) outside {}x{} frame",
            self.resolution.width,
            self.resolution.height
        );
        y as usize * self.resolution.width as usize + x as usize
    }

    pub fn pixel(&self, x: u32, y: u32) -> glam::Vec3 {
        self.pixels[self.offset(x, y)]
    }

    pub fn set_pixel(&mut self, x: u32, y: u32, color: glam::Vec3) {
        let offset = self.offset(x, y);
        self.pixels[offset] = color;
        self.max = self.max.max(math::max_channel(color));
    }

    /// Rows from the bottom up, each left to right.
    pub fn rows(&self) -> impl Iterator<Item = &[glam::Vec3]> {
        self.pixels.chunks(self.resolution.width as usize)
    }
}

/// How camera-space directions become world directions.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Projection {
    /// Used as-is; the camera looks down +z.
    #[default]
    Axis,
    /// Rotated into the camera's look-at basis.
    LookAt,
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RenderSettings {
    pub resolution: Resolution,
    /// Forward component of every primary ray direction.
    pub depth: f32,
    pub t_max: f32,
    pub background: glam::Vec3,
    pub projection: Projection,
}

impl Default for RenderSettings {
    fn default() -> Self {
        Self {
            resolution: Resolution::default(),
            depth: 16.0,
            t_max: T_MAX,
            background: glam::Vec3::ZERO,
            projection: Projection::Axis,
        }
    }
}

pub struct Renderer {
    settings: RenderSettings,
}

impl Renderer {
    pub fn new(settings: RenderSettings) -> Self {
        Self { settings }
    }

    pub fn settings(&self) -> &RenderSettings {
        &self.settings
    }

    /// Primary ray for pixel `(x, y)` in world space.
    pub fn primary_ray(&self, scene: &Scene, x: u32, y: u32) -> Ray {
        let camera = &scene.camera;
        let ray = camera.ray_for_pixel(x, y, self.settings.resolution, self.settings.depth);
        match self.settings.projection {
            Projection::Axis => ray,
            Projection::LookAt => Ray::new(ray.origin, camera.basis().to_world(ray.direction)),
        }
    }

    /// Color seen through pixel `(x, y)`, or `None` when the ray escapes.
    pub fn trace(&self, scene: &Scene, x: u32, y: u32) -> Option<glam::Vec3> {
        let ray = self.primary_ray(scene, x, y);
        let hit = intersection::closest_hit(&ray, &scene.spheres, 0.0, self.settings.t_max, None)?;

        let position = ray.at(hit.t);
        let view_direction = (scene.camera.position - position).normalize();
        Some(shading::shade(scene, hit.index, position, view_direction))
    }

    pub fn render(&self, scene: &Scene) -> FrameBuffer {
        let resolution = self.settings.resolution;
        tracing::info!(
            "rendering {} spheres at {}x{}",
            scene.spheres.len(),
            resolution.width,
            resolution.height
        );
        let start = Instant::now();

        let mut frame = FrameBuffer::new(resolution);
        let mut hits = 0usize;
        for y in 0..resolution.height {
            for x in 0..resolution.width {
                let color = match self.trace(scene, x, y) {
                    Some(color) => {
                        hits += 1;
                        color
                    }
                    None => self.settings.background,
                };
                frame.set_pixel(x, y, color);
            }
        }

        tracing::debug!("{} of {} primary rays hit", hits, resolution.pixel_count());
        tracing::info!(
            "frame done in {:.3}s, max channel {}",
            start.elapsed().as_secs_f32(),
            frame.max()
        );
        frame
    }
}
