//! Sphere primitive.

use lumen_math::{Ray, Vec3};

/// A sphere given by center and radius.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Sphere {
    pub center: Vec3,
    pub radius: f32,
}

impl Sphere {
    /// Create a new sphere. The radius is expected to be positive.
    pub fn new(center: Vec3, radius: f32) -> Self {
        Self { center, radius }
    }

    /// Intersect a ray with the near side of the sphere.
    ///
    /// Returns `(t, normal)` when the near root lies in `(0, nearest)`.
    /// Tangent rays (discriminant exactly zero) are misses, and the far root
    /// is never considered, so a ray starting inside the sphere reports nothing.
    pub fn intersect(&self, ray: &Ray, nearest: f32) -> Option<(f32, Vec3)> {
        let oc = ray.origin() - self.center;
        let a = ray.direction().dot(ray.direction());
        let b = 2.0 * ray.direction().dot(oc);
        let c = oc.dot(oc) - self.radius * self.radius;

        let discriminant = b * b - 4.0 * a * c;
        if discriminant <= 0.0 {
            return None;
        }

        let t = (-b - discriminant.sqrt()) / (2.0 * a);
        if t <= 0.0 || t >= nearest {
            return None;
        }

        let normal = (ray.at(t) - self.center).normalize();
        Some((t, normal))
    }
}
