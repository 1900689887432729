//! Axis-aligned room: the inside of a box.

use lumen_math::{Ray, Vec3};

/// Normals looked up by the slab distance that produced the hit, in priority
/// order: near planes (x, y, z) first, then far planes (x, y, z).
const FACE_NORMALS: [Vec3; 6] = [
    Vec3::NEG_X, // left
    Vec3::NEG_Y, // bottom
    Vec3::NEG_Z, // front
    Vec3::X,     // right
    Vec3::Y,     // top
    Vec3::Z,     // back
];

/// An axis-aligned box whose walls are seen from the inside.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Room {
    pub min: Vec3,
    pub max: Vec3,
}

impl Room {
    /// Create a room from its two corners. `min` must be below `max` on every axis.
    pub fn new(min: Vec3, max: Vec3) -> Self {
        Self { min, max }
    }

    /// Center point of the room.
    pub fn center(&self) -> Vec3 {
        (self.min + self.max) * 0.5
    }

    /// Intersect a ray with the room using the slab method.
    ///
    /// A ray that starts outside reports the entry distance; a ray that
    /// starts inside reports the wall it runs into. The normal is chosen by
    /// the first slab distance (in `FACE_NORMALS` order) equal to the hit
    /// distance, so edge and corner hits resolve deterministically.
    pub fn intersect(&self, ray: &Ray, nearest: f32) -> Option<(f32, Vec3)> {
        let origin = ray.origin();
        let direction = ray.direction();

        let t_lo = (self.min - origin) / direction;
        let t_hi = (self.max - origin) / direction;
        let t1 = t_lo.min(t_hi);
        let t2 = t_lo.max(t_hi);

        let t_near = t1.max_element();
        let t_far = t2.min_element();

        if t_near > t_far || t_far < 0.0 {
            return None;
        }

        let t = if t_near > 0.0 { t_near } else { t_far };
        if t <= 0.0 || t >= nearest {
            return None;
        }

        let candidates = [t1.x, t1.y, t1.z, t2.x, t2.y, t2.z];
        let face = candidates.iter().position(|&c| c == t)?;
        Some((t, FACE_NORMALS[face]))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn room() -> Room {
        Room::new(Vec3::new(-2.0, -2.0, -2.0), Vec3::new(2.0, 2.0, 2.0))
    }

    #[test]
    fn test_room_center_toward_positive_x() {
        let room = room();
        let ray = Ray::new(room.center(), Vec3::X);

        let (t, normal) = room.intersect(&ray, f32::INFINITY).unwrap();

        assert_eq!(t, 2.0);
        assert_eq!(normal, Vec3::X);
    }

    #[test]
    fn test_room_interior_hits_are_far_classified() {
        // From inside, every wall is a far-plane hit, so the table always
        // yields the positive-axis entry of the struck axis
        let room = room();
        let cases = [
            (Vec3::NEG_X, Vec3::X),
            (Vec3::Y, Vec3::Y),
            (Vec3::NEG_Y, Vec3::Y),
            (Vec3::Z, Vec3::Z),
            (Vec3::NEG_Z, Vec3::Z),
        ];

        for (direction, expected) in cases {
            let ray = Ray::new(Vec3::ZERO, direction);
            let (t, normal) = room.intersect(&ray, f32::INFINITY).unwrap();
            assert_eq!(t, 2.0, "direction {:?}", direction);
            assert_eq!(normal, expected, "direction {:?}", direction);
        }
    }

    #[test]
    fn test_room_hit_from_outside() {
        let ray = Ray::new(Vec3::new(-5.0, 0.0, 0.0), Vec3::X);

        let (t, normal) = room().intersect(&ray, f32::INFINITY).unwrap();

        assert_eq!(t, 3.0);
        assert_eq!(normal, Vec3::NEG_X);
    }

    #[test]
    fn test_room_miss_from_outside() {
        // Parallel to the x slab, above the box
        let ray = Ray::new(Vec3::new(-5.0, 3.0, 0.0), Vec3::X);
        assert!(room().intersect(&ray, f32::INFINITY).is_none());

        // Box entirely behind the ray
        let ray = Ray::new(Vec3::new(5.0, 0.0, 0.0), Vec3::X);
        assert!(room().intersect(&ray, f32::INFINITY).is_none());
    }

    #[test]
    fn test_room_not_nearer() {
        let ray = Ray::new(Vec3::ZERO, Vec3::X);
        assert!(room().intersect(&ray, 1.5).is_none());
        assert!(room().intersect(&ray, 2.0).is_none());
    }

    #[test]
    fn test_room_corner_priority() {
        // All three far distances tie; the x face wins
        let ray = Ray::new(Vec3::ZERO, Vec3::new(1.0, 1.0, 1.0));

        let (_, normal) = room().intersect(&ray, f32::INFINITY).unwrap();

        assert_eq!(normal, Vec3::X);
    }
}
