//! Ray/sphere queries.
//!
//! Directions are normalized before solving, so every `t` handed in or out of
//! this module is a distance along the ray.

use crate::ray::Ray;
use crate::scene::Sphere;

/// Far end of the parametric range used for primary and shadow rays.
pub const T_MAX: f32 = 10000.0;

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Hit {
    /// Index of the sphere in the scene.
    pub index: usize,
    pub t: f32,
}

impl Sphere {
    /// Root of `|e + t·d - c|² = r²` lying strictly inside `(t0, t1)`, if any.
    ///
    /// The near root is taken when it is past `t0`, otherwise the far one.
    /// A tangent ray has a single repeated root.
    pub fn intersect(&self, ray: &Ray, t0: f32, t1: f32) -> Option<f32> {
        // (bx^2 + by^2 + bz^2)t^2 + (2(axbx + ayby + azbz))t + (ax^2 + ay^2 + az^2 - r^2) = 0
        // with a = e - c, b = d
        let d = ray.direction.normalize();
        let ec = ray.origin - self.center;

        let half_b = d.dot(ec);
        let a = d.dot(d);
        let discriminant = half_b * half_b - a * (ec.dot(ec) - self.radius * self.radius);
        if discriminant < 0.0 {
            return None;
        }

        let sqrt_discriminant = discriminant.sqrt();
        let negative_root = (-half_b - sqrt_discriminant) / a;
        let positive_root = (-half_b + sqrt_discriminant) / a;

        let t = if negative_root > t0 {
            negative_root
        } else {
            positive_root
        };
        (t > t0 && t < t1).then_some(t)
    }
}

/// Nearest sphere along `ray` within `(t0, t1)`, skipping `excluded`.
///
/// Spheres are scanned in index order and the range shrinks to the best hit so
/// far; of two spheres at the same distance the lower index wins.
pub fn closest_hit(
    ray: &Ray,
    spheres: &[Sphere],
    t0: f32,
    t1: f32,
    excluded: Option<usize>,
) -> Option<Hit> {
    let mut closest = None;
    let mut t1 = t1;

    for (index, sphere) in spheres.iter().enumerate() {
        if Some(index) == excluded {
            continue;
        }
        if let Some(t) = sphere.intersect(ray, t0, t1) {
            closest = Some(Hit { index, t });
            t1 = t;
        }
    }

    closest
}

/// Whether anything other than sphere `shaded` sits between `point` and
/// `light`.
pub fn in_shadow(point: glam::Vec3, light: glam::Vec3, spheres: &[Sphere], shaded: usize) -> bool {
    let feeler = Ray::between(point, light);
    closest_hit(&feeler, spheres, 0.0, T_MAX, Some(shaded)).is_some()
}
