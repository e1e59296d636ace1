//! Phong local illumination with hard shadows.

use crate::intersection;
use crate::scene::{Light, Material, Scene};
use crate::util::math;

/// Unit vectors describing the geometry at a shaded point.
#[derive(Debug, Clone, Copy)]
pub struct SurfaceFrame {
    pub normal: glam::Vec3,
    pub light_direction: glam::Vec3,
    pub view_direction: glam::Vec3,
}

/// Color of a point on `scene.spheres[index]` seen along `view_direction`
/// (unit vector from the point towards the eye).
pub fn shade(scene: &Scene, index: usize, point: glam::Vec3, view_direction: glam::Vec3) -> glam::Vec3 {
    let sphere = &scene.spheres[index];
    let frame = SurfaceFrame {
        normal: sphere.normal_at(point),
        light_direction: (scene.light.position - point).normalize(),
        view_direction,
    };
    let shadowed = intersection::in_shadow(point, scene.light.position, &scene.spheres, index);

    phong(&sphere.material, &scene.light, &frame, shadowed)
}

/// Sum of the ambient, diffuse and specular terms, per channel and unclamped.
/// A shadowed point only receives the ambient term.
pub fn phong(material: &Material, light: &Light, frame: &SurfaceFrame, shadowed: bool) -> glam::Vec3 {
    let ambient = light.material.ambient * material.ambient;
    if shadowed {
        return ambient;
    }

    let diffuse_component = frame.light_direction.dot(frame.normal);
    let reflection_component =
        math::reflection(frame.light_direction, frame.normal).dot(frame.view_direction);

    let diffuse = if diffuse_component > 0.0 {
        light.material.diffuse * material.diffuse * diffuse_component
    } else {
        glam::Vec3::ZERO
    };
    let specular = if reflection_component > 0.0 {
        light.material.specular * material.specular * reflection_component.powf(material.alpha)
    } else {
        glam::Vec3::ZERO
    };

    ambient + diffuse + specular
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::camera::Camera;
    use glam::Vec3;

    fn material() -> Material {
        Material::new(
            Vec3::new(0.8, 0.0, 0.0),
            Vec3::new(0.0, 0.2, 0.0),
            Vec3::new(0.0, 0.0, 0.1),
            10.0,
        )
    }

    fn head_on() -> SurfaceFrame {
        SurfaceFrame {
            normal: Vec3::Z,
            light_direction: Vec3::Z,
            view_direction: Vec3::Z,
        }
    }

    #[test]
    fn shadowed_point_gets_exactly_ambient() {
        let light = Light::white(Vec3::ZERO);
        let color = phong(&material(), &light, &head_on(), true);
        assert_eq!(color, Vec3::new(0.0, 0.0, 0.1));
    }

    #[test]
    fn head_on_light_adds_every_term() {
        let light = Light::white(Vec3::ZERO);
        let color = phong(&material(), &light, &head_on(), false);
        assert!((color - Vec3::new(0.8, 0.2, 0.1)).length() < 1e-5);
    }

    #[test]
    fn light_behind_surface_leaves_ambient() {
        let light = Light::white(Vec3::ZERO);
        let frame = SurfaceFrame {
            light_direction: -Vec3::Z,
            ..head_on()
        };
        let color = phong(&material(), &light, &frame, false);
        assert_eq!(color, Vec3::new(0.0, 0.0, 0.1));
    }

    #[test]
    fn specular_falls_off_with_shininess() {
        let light = Light::white(Vec3::ZERO);
        let frame = SurfaceFrame {
            view_direction: Vec3::new(0.0, 0.6, 0.8),
            ..head_on()
        };
        let color = phong(&material(), &light, &frame, false);
        let expected = 0.2 * 0.8f32.powf(10.0);
        assert!((color.y - expected).abs() < 1e-5);
        assert!((color.x - 0.8).abs() < 1e-5);
    }

    #[test]
    fn occluded_sphere_shades_ambient_only() {
        let mut scene = Scene::new(Light::white(Vec3::new(0.0, 10.0, 0.0)), Camera::default());
        let lit = scene.add_sphere(Vec3::ZERO, 1.0, material());
        scene.add_sphere(Vec3::new(0.0, 5.0, 0.0), 1.0, material());

        let top = Vec3::new(0.0, 1.0, 0.0);
        let color = shade(&scene, lit, top, Vec3::Y);
        assert_eq!(color, Vec3::new(0.0, 0.0, 0.1));

        scene.spheres.pop();
        let color = shade(&scene, lit, top, Vec3::Y);
        assert!((color - Vec3::new(0.8, 0.2, 0.1)).length() < 1e-5);
    }
}
