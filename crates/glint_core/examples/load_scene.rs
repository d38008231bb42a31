use std::env;

use glint_core::load_scene;

fn main() {
    env_logger::init();

    let args: Vec<String> = env::args().collect();
    if args.len() != 2 {
        eprintln!("Usage: {} <path-to-scene-json>", args[0]);
        eprintln!("Example: {} scenes/two_spheres.json", args[0]);
        std::process::exit(1);
    }

    let path = &args[1];
    println!("Loading scene: {}", path);

    match load_scene(path) {
        Ok(scene) => {
            println!("Successfully loaded scene!");
            println!("  Spheres: {}", scene.spheres.len());
            println!("  Planes:  {}", scene.planes.len());
            println!("  Lights:  {}", scene.lights.len());

            for (i, sphere) in scene.spheres.iter().enumerate() {
                println!(
                    "  Sphere {}: center {} radius {} color {}",
                    i, sphere.center, sphere.radius, sphere.surface.color
                );
            }
            for (i, plane) in scene.planes.iter().enumerate() {
                println!(
                    "  Plane {}: point {} normal {} color {}",
                    i, plane.point, plane.normal, plane.surface.color
                );
            }
            for (i, light) in scene.lights.iter().enumerate() {
                println!("  Light {}: position {} color {}", i, light.position, light.color);
            }
        }
        Err(e) => {
            eprintln!("Failed to load scene: {}", e);
            std::process::exit(1);
        }
    }
}
