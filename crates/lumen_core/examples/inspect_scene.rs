//! Example: Load and inspect a JSON scene description.
//!
//! Run with: cargo run --example inspect_scene -- scenes/two_spheres.json
//! Without an argument the built-in demo scene is printed as JSON.

use std::env;

use lumen_core::{demo_scene, load_scene, scene_to_json, Shape};

fn main() {
    env_logger::init();

    let args: Vec<String> = env::args().collect();

    if args.len() < 2 {
        println!("Usage: inspect_scene <path-to-scene.json>\n");
        println!("Demo scene:");
        match scene_to_json(&demo_scene()) {
            Ok(json) => println!("{}", json),
            Err(e) => eprintln!("Failed to serialize demo scene: {}", e),
        }
        return;
    }

    let path = &args[1];
    println!("Loading scene: {}", path);

    match load_scene(path) {
        Ok(scene) => {
            println!("\n=== Scene: {} ===", scene.name);
            println!("Objects: {}", scene.object_count());
            println!("Lights: {}", scene.light_count());

            println!("\n--- Objects ---");
            for (i, object) in scene.objects.iter().enumerate() {
                let geometry = match object.shape {
                    Shape::Sphere(s) => format!("center {:?}, radius {}", s.center, s.radius),
                    Shape::Room(r) => format!("min {:?}, max {:?}", r.min, r.max),
                };
                println!(
                    "  [{}] {} {} - color {:?}, specular {}",
                    i,
                    object.shape.kind(),
                    geometry,
                    object.material.color,
                    object.material.specular_strength
                );
            }

            println!("\n--- Lights ---");
            for (i, light) in scene.lights.iter().enumerate() {
                println!(
                    "  [{}] position {:?}, color {:?}, intensity {}",
                    i, light.position, light.color, light.intensity
                );
            }
        }
        Err(e) => {
            eprintln!("Error loading scene: {}", e);
            std::process::exit(1);
        }
    }
}
