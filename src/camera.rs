use crate::ray::Ray;
use crate::renderer::Resolution;

/// Orthonormal camera frame. `w` points from the eye towards the look-at
/// target, `u` to the right and `v` up.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Basis {
    pub u: glam::Vec3,
    pub v: glam::Vec3,
    pub w: glam::Vec3,
}

impl Basis {
    /// `target - eye` and `up` must not be parallel.
    pub fn look_at(eye: glam::Vec3, target: glam::Vec3, up: glam::Vec3) -> Self {
        let w = (target - eye).normalize();
        let u = up.cross(w).normalize();
        let v = w.cross(u);
        Self { u, v, w }
    }

    /// Camera space to world space.
    pub fn to_world(&self, direction: glam::Vec3) -> glam::Vec3 {
        self.u * direction.x + self.v * direction.y + self.w * direction.z
    }
}

/// Rectangle in camera space the primary rays are spread across. Only the
/// x/y extents take part in ray generation.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ViewPlane {
    pub bottom_left: glam::Vec3,
    pub top_right: glam::Vec3,
}

impl ViewPlane {
    pub fn new(bottom_left: glam::Vec3, top_right: glam::Vec3) -> Self {
        Self {
            bottom_left,
            top_right,
        }
    }

    /// Square plane at unit distance spanning `[-half_extent, half_extent]`.
    pub fn square(half_extent: f32) -> Self {
        Self::new(
            glam::Vec3::new(-half_extent, -half_extent, 1.0),
            glam::Vec3::new(half_extent, half_extent, 1.0),
        )
    }
}

impl Default for ViewPlane {
    fn default() -> Self {
        Self::square(1.0)
    }
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Camera {
    pub position: glam::Vec3,
    pub look_at: glam::Vec3,
    pub up: glam::Vec3,
    basis: Basis,
    view_plane: ViewPlane,
}

impl Camera {
    pub fn new(position: glam::Vec3, look_at: glam::Vec3, up: glam::Vec3, view_plane: ViewPlane) -> Self {
        Self {
            position,
            look_at,
            up,
            basis: Basis::look_at(position, look_at, up),
            view_plane,
        }
    }

    pub fn basis(&self) -> &Basis {
        &self.basis
    }

    pub fn view_plane(&self) -> &ViewPlane {
        &self.view_plane
    }

    /// Camera-space ray through the center of pixel `(x, y)`, with `y = 0` at
    /// the bottom of the view plane. `depth` is the forward component of every
    /// direction.
    pub fn ray_for_pixel(&self, x: u32, y: u32, resolution: Resolution, depth: f32) -> Ray {
        let l = self.view_plane.bottom_left.x;
        let r = self.view_plane.top_right.x;
        let b = self.view_plane.bottom_left.y;
        let t = self.view_plane.top_right.y;

        let direction = glam::Vec3::new(
            l + (r - l) * (x as f32 + 0.5) / resolution.width as f32,
            b + (t - b) * (y as f32 + 0.5) / resolution.height as f32,
            depth,
        );
        Ray::new(self.position, direction)
    }
}

impl Default for Camera {
    fn default() -> Self {
        Self::new(glam::Vec3::ZERO, glam::Vec3::Z, glam::Vec3::Y, ViewPlane::default())
    }
}
