#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Ray {
    pub origin: glam::Vec3,
    /// Not necessarily unit length. Must not be zero.
    pub direction: glam::Vec3,
}

impl Ray {
    pub fn new(origin: glam::Vec3, direction: glam::Vec3) -> Self {
        Self { origin, direction }
    }

    /// Ray from `from` towards `to`, direction left unnormalized.
    pub fn between(from: glam::Vec3, to: glam::Vec3) -> Self {
        Self::new(from, to - from)
    }

    /// Point at distance `t` along the normalized direction.
    pub fn at(&self, t: f32) -> glam::Vec3 {
        self.origin + self.direction.normalize() * t
    }
}
