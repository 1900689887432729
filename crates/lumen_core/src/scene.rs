//! Scene model: objects, lights, and the nearest-hit query.
//!
//! A scene is filled once (by hand, from the demo builder, or from a scene
//! description) and is read-only while it is being rendered.

use lumen_math::{Ray, Vec3};

use crate::light::PointLight;
use crate::material::Material;
use crate::shape::Shape;

/// A shape paired with the material it is shaded with.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SceneObject {
    pub shape: Shape,
    pub material: Material,
}

impl SceneObject {
    pub fn new(shape: impl Into<Shape>, material: Material) -> Self {
        Self {
            shape: shape.into(),
            material,
        }
    }
}

/// The closest intersection found for a ray.
#[derive(Debug, Clone, Copy)]
pub struct Hit<'a> {
    /// Object that was struck
    pub object: &'a SceneObject,
    /// Distance along the (unit) ray direction
    pub distance: f32,
    /// Surface normal reported by the shape
    pub normal: Vec3,
}

/// A complete scene: an ordered object list and a light list.
#[derive(Clone, Debug, Default)]
pub struct Scene {
    /// Objects in insertion order
    pub objects: Vec<SceneObject>,

    /// Point lights, all of which illuminate every hit
    pub lights: Vec<PointLight>,

    /// Scene name (usually from filename)
    pub name: String,
}

impl Scene {
    /// Create an empty scene.
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            ..Default::default()
        }
    }

    /// Add an object and return its index.
    pub fn add_object(&mut self, shape: impl Into<Shape>, material: Material) -> usize {
        let id = self.objects.len();
        self.objects.push(SceneObject::new(shape, material));
        id
    }

    /// Add a light and return its index.
    pub fn add_light(&mut self, light: PointLight) -> usize {
        let id = self.lights.len();
        self.lights.push(light);
        id
    }

    /// Get object count.
    pub fn object_count(&self) -> usize {
        self.objects.len()
    }

    /// Get light count.
    pub fn light_count(&self) -> usize {
        self.lights.len()
    }

    /// Find the closest object hit by `ray`.
    ///
    /// Every object is tested, in order, against the best distance found so
    /// far; a shape only reports a hit that is strictly nearer, so the
    /// surviving candidate is the global nearest.
    pub fn nearest_hit(&self, ray: &Ray) -> Option<Hit<'_>> {
        let mut closest: Option<Hit<'_>> = None;
        let mut closest_so_far = f32::INFINITY;

        for object in &self.objects {
            if let Some((distance, normal)) = object.shape.intersect(ray, closest_so_far) {
                closest_so_far = distance;
                closest = Some(Hit {
                    object,
                    distance,
                    normal,
                });
            }
        }

        closest
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{Color, Room, Sphere};

    fn red() -> Material {
        Material::new(Color::new(1.0, 0.0, 0.0))
    }

    fn blue() -> Material {
        Material::new(Color::new(0.0, 0.0, 1.0))
    }

    #[test]
    fn test_scene_creation() {
        let mut scene = Scene::new("test");

        let id = scene.add_object(Sphere::new(Vec3::ZERO, 1.0), red());
        assert_eq!(id, 0);
        scene.add_object(Room::new(Vec3::splat(-5.0), Vec3::splat(5.0)), blue());
        scene.add_light(PointLight::white(Vec3::new(0.0, 4.0, 0.0), 1.0));

        assert_eq!(scene.name, "test");
        assert_eq!(scene.object_count(), 2);
        assert_eq!(scene.light_count(), 1);
    }

    #[test]
    fn test_nearest_hit_empty_scene() {
        let scene = Scene::new("empty");
        let ray = Ray::new(Vec3::ZERO, Vec3::NEG_Z);
        assert!(scene.nearest_hit(&ray).is_none());
    }

    #[test]
    fn test_nearest_wins_regardless_of_order() {
        let near = Sphere::new(Vec3::new(0.0, 0.0, -4.0), 1.0);
        let far = Sphere::new(Vec3::new(0.0, 0.0, -5.0), 1.5);
        let ray = Ray::new(Vec3::ZERO, Vec3::NEG_Z);

        let mut near_first = Scene::new("near_first");
        near_first.add_object(near, red());
        near_first.add_object(far, blue());

        let mut far_first = Scene::new("far_first");
        far_first.add_object(far, blue());
        far_first.add_object(near, red());

        for scene in [&near_first, &far_first] {
            let hit = scene.nearest_hit(&ray).expect("ray should hit");
            assert!((hit.distance - 3.0).abs() < 1e-5, "{}", scene.name);
            assert_eq!(hit.object.material, red(), "{}", scene.name);
            assert!((hit.normal - Vec3::Z).length() < 1e-5);
        }
    }

    #[test]
    fn test_sphere_inside_room() {
        let mut scene = Scene::new("room");
        scene.add_object(Room::new(Vec3::splat(-10.0), Vec3::splat(10.0)), blue());
        scene.add_object(Sphere::new(Vec3::new(0.0, 0.0, -5.0), 1.0), red());

        // Toward the sphere
        let hit = scene.nearest_hit(&Ray::new(Vec3::ZERO, Vec3::NEG_Z)).unwrap();
        assert_eq!(hit.object.material, red());

        // Away from it, onto a wall
        let hit = scene.nearest_hit(&Ray::new(Vec3::ZERO, Vec3::Y)).unwrap();
        assert_eq!(hit.object.material, blue());
        assert_eq!(hit.distance, 10.0);
    }
}
