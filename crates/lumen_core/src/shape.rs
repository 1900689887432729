//! Closed set of intersectable primitives.

use lumen_math::{Ray, Vec3};

use crate::room::Room;
use crate::sphere::Sphere;

/// Geometry of a scene object.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Shape {
    Sphere(Sphere),
    Room(Room),
}

impl Shape {
    /// Intersect a ray, reporting only hits strictly nearer than `nearest`.
    ///
    /// Returns the hit distance along the ray and the surface normal.
    #[inline]
    pub fn intersect(&self, ray: &Ray, nearest: f32) -> Option<(f32, Vec3)> {
        match self {
            Shape::Sphere(sphere) => sphere.intersect(ray, nearest),
            Shape::Room(room) => room.intersect(ray, nearest),
        }
    }

    /// Short name used in logs.
    pub fn kind(&self) -> &'static str {
        match self {
            Shape::Sphere(_) => "sphere",
            Shape::Room(_) => "room",
        }
    }
}

impl From<Sphere> for Shape {
    fn from(sphere: Sphere) -> Self {
        Shape::Sphere(sphere)
    }
}

impl From<Room> for Shape {
    fn from(room: Room) -> Self {
        Shape::Room(room)
    }
}
