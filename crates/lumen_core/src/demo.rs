//! Built-in demo scene.

use lumen_math::Vec3;

use crate::light::PointLight;
use crate::material::{Color, Material};
use crate::room::Room;
use crate::scene::Scene;
use crate::sphere::Sphere;

/// A room holding four spheres of mixed reflectivity, lit by two lights.
///
/// Laid out for a camera at the origin looking down -Z.
pub fn demo_scene() -> Scene {
    let mut scene = Scene::new("demo");

    // Walls
    scene.add_object(
        Room::new(Vec3::new(-10.0, -6.0, -20.0), Vec3::new(10.0, 6.0, 5.0)),
        Material::new(Color::new(0.8, 0.8, 0.75)),
    );

    scene.add_object(
        Sphere::new(Vec3::new(0.0, -1.0, -8.0), 2.0),
        Material::new(Color::new(0.9, 0.2, 0.2))
            .with_specular(0.3)
            .with_shininess(64.0),
    );
    scene.add_object(
        Sphere::new(Vec3::new(-4.0, 0.0, -11.0), 1.5),
        Material::new(Color::new(0.2, 0.8, 0.3)).with_specular(0.6),
    );
    scene.add_object(
        Sphere::new(Vec3::new(3.5, -2.0, -6.0), 1.0),
        Material::new(Color::new(0.2, 0.3, 0.9)),
    );
    // Glass-like values are carried but not refracted
    scene.add_object(
        Sphere::new(Vec3::new(2.0, 2.5, -13.0), 2.5),
        Material::new(Color::new(0.9, 0.9, 0.9))
            .with_specular(0.8)
            .with_transparency(0.5, 1.5),
    );

    scene.add_light(PointLight::white(Vec3::new(-5.0, 5.0, -2.0), 0.6));
    scene.add_light(PointLight::new(
        Vec3::new(6.0, 4.0, -4.0),
        Color::new(1.0, 0.85, 0.7),
        0.5,
    ));

    log::debug!(
        "Built demo scene: {} objects, {} lights",
        scene.object_count(),
        scene.light_count()
    );

    scene
}
