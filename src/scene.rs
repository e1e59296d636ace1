use crate::camera::{Camera, ViewPlane};

/// Phong reflectance coefficients. On a [`Light`] the same fields are read as
/// intensities.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Material {
    pub diffuse: glam::Vec3,
    pub specular: glam::Vec3,
    pub ambient: glam::Vec3,
    /// Shininess exponent, `alpha >= 1`.
    pub alpha: f32,
}

impl Material {
    pub fn new(diffuse: glam::Vec3, specular: glam::Vec3, ambient: glam::Vec3, alpha: f32) -> Self {
        debug_assert!(alpha >= 1.0, "shininess must be at least 1, got {alpha}");
        Self {
            diffuse,
            specular,
            ambient,
            alpha,
        }
    }
}

impl Default for Material {
    fn default() -> Self {
        Self {
            diffuse: glam::Vec3::ONE,
            specular: glam::Vec3::ONE,
            ambient: glam::Vec3::ONE,
            alpha: 1.0,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Sphere {
    pub center: glam::Vec3,
    /// Must be positive.
    pub radius: f32,

    pub material: Material,
}

impl Sphere {
    pub fn new(center: glam::Vec3, radius: f32, material: Material) -> Self {
        debug_assert!(radius > 0.0, "sphere radius must be positive, got {radius}");
        Self {
            center,
            radius,
            material,
        }
    }

    /// Outward unit normal at a point on the surface.
    pub fn normal_at(&self, point: glam::Vec3) -> glam::Vec3 {
        (point - self.center).normalize()
    }
}

impl Default for Sphere {
    fn default() -> Self {
        Self {
            center: glam::Vec3::ZERO,
            radius: 0.5,
            material: Material::default(),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Light {
    pub position: glam::Vec3,
    pub material: Material,
}

impl Light {
    /// Light with every intensity set to one.
    pub fn white(position: glam::Vec3) -> Self {
        Self {
            position,
            material: Material::default(),
        }
    }
}

/// Everything a frame needs. Read-only once rendering starts; a sphere's
/// index in `spheres` is its identity for the whole render.
#[derive(Debug, Clone)]
pub struct Scene {
    pub spheres: Vec<Sphere>,
    pub light: Light,
    pub camera: Camera,
}

impl Scene {
    pub fn new(light: Light, camera: Camera) -> Self {
        Self {
            spheres: Vec::new(),
            light,
            camera,
        }
    }

    /// Appends a sphere and returns its index.
    pub fn add_sphere(&mut self, center: glam::Vec3, radius: f32, material: Material) -> usize {
        self.spheres.push(Sphere::new(center, radius, material));
        self.spheres.len() - 1
    }

    /// Three spheres clustered around z = 25, lit from above.
    pub fn demo() -> Self {
        let diffuse = Material::new(
            glam::Vec3::new(0.8, 0.0, 0.0),
            glam::Vec3::new(0.0, 0.2, 0.0),
            glam::Vec3::new(0.0, 0.0, 0.1),
            10.0,
        );
        let specular = Material::new(
            glam::Vec3::new(0.7, 0.0, 0.0),
            glam::Vec3::new(0.0, 0.0, 0.8),
            glam::Vec3::new(0.0, 0.1, 0.0),
            20.0,
        );
        let ambient = Material::new(
            glam::Vec3::new(0.8, 0.0, 0.0),
            glam::Vec3::new(0.0, 0.0, 0.2),
            glam::Vec3::new(0.4, 0.0, 0.4),
            1.0,
        );

        let camera = Camera::new(
            glam::Vec3::ZERO,
            glam::Vec3::new(0.0, 5.0, 25.0),
            glam::Vec3::Y,
            ViewPlane::default(),
        );
        let mut scene = Self::new(Light::white(glam::Vec3::new(0.0, 5.0, 10.0)), camera);
        scene.add_sphere(glam::Vec3::new(0.5, 0.0, 25.0), 0.6, diffuse);
        scene.add_sphere(glam::Vec3::new(0.0, 0.5, 23.0), 0.1, specular);
        scene.add_sphere(glam::Vec3::new(-0.5, -0.5, 25.0), 0.4, ambient);
        scene
    }
}
