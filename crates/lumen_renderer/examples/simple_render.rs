//! Simple ray tracer example.
//!
//! Builds a small scene by hand and saves it in PPM format.

use lumen_core::{Material, PointLight, Room, Sphere};
use lumen_renderer::{render, save_ppm, Background, Camera, Color, RenderConfig, Scene, Vec3};

fn main() {
    env_logger::init();

    println!("Lumen Ray Tracer - Simple Example");
    println!("=================================");

    let start = std::time::Instant::now();
    let scene = build_scene();
    println!("Scene built in {:?}", start.elapsed());

    let camera = Camera::new(800, 450);
    let config = RenderConfig {
        max_depth: 5,
        background: Background::Solid(Color::new(0.05, 0.05, 0.1)),
        seed: 0,
    };

    println!(
        "Rendering {}x{} @ depth {}...",
        camera.image_width, camera.image_height, config.max_depth
    );

    let start = std::time::Instant::now();
    let image = render(&camera, &scene, &config, &mut config.rng());
    println!("Rendered in {:?}", start.elapsed());

    let filename = "output.ppm";
    save_ppm(&image, filename).expect("Failed to save image");
    println!("Saved to {}", filename);
}

fn build_scene() -> Scene {
    let mut scene = Scene::new("simple");

    // Floor-only room: walls far away so most of the frame is floor and spheres
    scene.add_object(
        Room::new(Vec3::new(-50.0, -1.0, -60.0), Vec3::new(50.0, 40.0, 10.0)),
        Material::new(Color::new(0.5, 0.5, 0.5)),
    );

    scene.add_object(
        Sphere::new(Vec3::new(-2.2, 0.0, -6.0), 1.0),
        Material::new(Color::new(0.4, 0.2, 0.1)),
    );
    scene.add_object(
        Sphere::new(Vec3::new(0.0, 0.0, -6.0), 1.0),
        Material::new(Color::new(0.9, 0.9, 0.9)).with_specular(0.9),
    );
    scene.add_object(
        Sphere::new(Vec3::new(2.2, 0.0, -6.0), 1.0),
        Material::new(Color::new(0.7, 0.6, 0.5)).with_specular(0.4),
    );

    scene.add_light(PointLight::white(Vec3::new(0.0, 6.0, -2.0), 0.7));
    scene.add_light(PointLight::new(
        Vec3::new(-6.0, 3.0, 2.0),
        Color::new(0.6, 0.7, 1.0),
        0.4,
    ));

    println!("Created {} objects", scene.object_count());
    scene
}
