//! Renders the classic two-sphere scene and saves it as a PNG.
//!
//! Two half-mirror spheres above a reflective gray floor, lit by a single
//! point light. The same scene ships as scenes/two_spheres.json.

use std::time::Instant;

use glint_renderer::{
    render, Camera, Light, Plane, RenderConfig, Scene, Shading, Sphere, Surface, Vec3,
};

fn main() -> anyhow::Result<()> {
    env_logger::init();

    println!("Glint Ray Tracer - Example Scene");
    println!("================================");

    let scene = build_scene();
    println!(
        "Scene has {} primitives, {} lights",
        scene.primitive_count(),
        scene.lights.len()
    );

    let camera = Camera::look_at(
        Vec3::new(0.0, 1.0, 5.0),
        Vec3::new(0.0, 1.0, 0.0),
        Vec3::Y,
        45.0,
    )?;

    let config = RenderConfig {
        shading: Shading::Phong,
        ..RenderConfig::default()
    };

    let width = 800;
    let height = 600;
    println!("Rendering {}x{}...", width, height);

    let start = Instant::now();
    let frame = render(&scene, &camera, width, height, &config);
    println!("Rendered in {:?}", start.elapsed());

    let filename = "output.png";
    let png = image::RgbImage::from_raw(width, height, frame.to_rgb8())
        .ok_or_else(|| anyhow::anyhow!("pixel buffer does not match image dimensions"))?;
    png.save(filename)?;
    println!("Saved to {}", filename);

    Ok(())
}

fn build_scene() -> Scene {
    let mut scene = Scene::new();

    scene.add_sphere(Sphere::new(
        Vec3::new(-1.0, 1.0, 0.0),
        1.0,
        Surface::new(Vec3::new(1.0, 0.0, 0.0), 0.5),
    ));
    scene.add_sphere(Sphere::new(
        Vec3::new(1.0, 1.0, 0.0),
        1.0,
        Surface::new(Vec3::new(0.0, 0.0, 1.0), 0.5),
    ));

    // Reflective floor at y = 0
    scene.add_plane(Plane::new(
        Vec3::ZERO,
        Vec3::Y,
        Surface::new(Vec3::new(0.8, 0.8, 0.8), 0.5),
    ));

    scene.add_light(Light::new(Vec3::new(2.0, 5.0, 3.0), Vec3::ONE));

    scene
}
