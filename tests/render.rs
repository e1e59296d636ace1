use glam::Vec3;
use sphere_caster::{
    application::{Application, OutputSettings},
    intersection, shading, Light, Material, RenderSettings, Renderer, Resolution, Scene,
};

#[test]
fn demo_scene_center_hits_and_corner_misses() {
    let scene = Scene::demo();
    let renderer = Renderer::new(RenderSettings::default());
    assert_eq!(renderer.settings().resolution, Resolution::new(600, 600));

    let center = renderer.primary_ray(&scene, 300, 300);
    let hit = intersection::closest_hit(&center, &scene.spheres, 0.0, intersection::T_MAX, None)
        .expect("center ray hits the cluster");
    assert_eq!(hit.index, 0);
    assert!(hit.t > 20.0 && hit.t < 26.0);
    assert!(renderer.trace(&scene, 300, 300).is_some());

    let corner = renderer.primary_ray(&scene, 0, 0);
    assert!(intersection::closest_hit(&corner, &scene.spheres, 0.0, intersection::T_MAX, None).is_none());

    let frame = renderer.render(&scene);
    let background = renderer.settings().background;
    assert_eq!(frame.pixel(0, 0), background);
    assert_ne!(frame.pixel(300, 300), background);
}

#[test]
fn rendering_is_deterministic() {
    let scene = Scene::demo();
    let renderer = Renderer::new(RenderSettings {
        resolution: Resolution::new(64, 48),
        ..RenderSettings::default()
    });
    let first = renderer.render(&scene);
    let second = renderer.render(&scene);
    assert_eq!(first, second);
}

#[test]
fn shadowed_pixels_are_ambient_only() {
    let material = Material::new(
        Vec3::new(0.8, 0.0, 0.0),
        Vec3::new(0.0, 0.2, 0.0),
        Vec3::new(0.0, 0.0, 0.1),
        10.0,
    );
    let mut scene = Scene::demo();
    scene.spheres.clear();
    scene.light = Light::white(Vec3::new(0.0, 0.0, 5.0));
    // blocker sits between the light and the back sphere, off the camera axis
    let back = scene.add_sphere(Vec3::new(0.0, 0.0, 25.0), 1.0, material);
    scene.add_sphere(Vec3::new(0.0, 0.0, 15.0), 0.2, material);

    let point = Vec3::new(0.0, 0.0, 24.0);
    assert!(intersection::in_shadow(point, scene.light.position, &scene.spheres, back));
    let color = shading::shade(&scene, back, point, Vec3::new(0.0, 0.0, -1.0));
    assert_eq!(color, Vec3::new(0.0, 0.0, 0.1));
}

#[test]
fn writes_targa_file() {
    let path = std::env::temp_dir().join("sphere_caster_render_test.tga");
    let settings = RenderSettings {
        resolution: Resolution::new(32, 16),
        ..RenderSettings::default()
    };
    let output = OutputSettings {
        path: path.clone(),
        ..OutputSettings::default()
    };
    Application::new(Scene::demo(), settings, &output)
        .unwrap()
        .run()
        .unwrap();

    let bytes = std::fs::read(&path).unwrap();
    assert_eq!(bytes.len(), 18 + 32 * 16 * 3);
    assert_eq!(&bytes[12..16], &[32, 0, 16, 0]);
    std::fs::remove_file(path).unwrap();
}

#[test]
fn writes_png_file() {
    let path = std::env::temp_dir().join("sphere_caster_render_test.png");
    let settings = RenderSettings {
        resolution: Resolution::new(20, 10),
        ..RenderSettings::default()
    };
    let output = OutputSettings {
        path: path.clone(),
        ..OutputSettings::default()
    };
    Application::new(Scene::demo(), settings, &output)
        .unwrap()
        .run()
        .unwrap();

    let bytes = std::fs::read(&path).unwrap();
    assert_eq!(&bytes[1..4], b"PNG");
    std::fs::remove_file(path).unwrap();
}
