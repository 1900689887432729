//! Pinhole camera for ray generation.
//!
//! The eye sits at the origin and looks down -Z with +Y up. The image plane
//! is at z = -1 and spans [-aspect, aspect] horizontally and [-1, 1]
//! vertically, so the vertical field of view is 90 degrees.

use lumen_math::{Ray, Vec3};

/// Camera for generating one ray through the center of each pixel.
#[derive(Debug, Clone, Copy)]
pub struct Camera {
    pub image_width: u32,
    pub image_height: u32,
    aspect: f32,
}

impl Camera {
    /// Create a camera for an image of the given size.
    pub fn new(image_width: u32, image_height: u32) -> Self {
        Self {
            image_width,
            image_height,
            aspect: image_width as f32 / image_height as f32,
        }
    }

    /// Width over height.
    pub fn aspect(&self) -> f32 {
        self.aspect
    }

    /// Generate the ray through the center of pixel (i, j).
    ///
    /// `j` counts rows from the top of the image.
    pub fn get_ray(&self, i: u32, j: u32) -> Ray {
        let x = (2.0 * (i as f32 + 0.5) / self.image_width as f32 - 1.0) * self.aspect;
        let y = 1.0 - 2.0 * (j as f32 + 0.5) / self.image_height as f32;
        Ray::new(Vec3::ZERO, Vec3::new(x, y, -1.0))
    }
}

impl Default for Camera {
    fn default() -> Self {
        Self::new(640, 480)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_camera_center_ray() {
        let camera = Camera::new(101, 101);
        let ray = camera.get_ray(50, 50);

        assert_eq!(ray.origin(), Vec3::ZERO);
        assert!((ray.direction() - Vec3::NEG_Z).length() < 1e-6);
    }

    #[test]
    fn test_camera_corners() {
        let camera = Camera::new(200, 100);
        assert_eq!(camera.aspect(), 2.0);

        // Top-left pixel points up and to the left
        let d = camera.get_ray(0, 0).direction();
        assert!(d.x < 0.0 && d.y > 0.0 && d.z < 0.0);

        // Bottom-right pixel points down and to the right
        let d = camera.get_ray(199, 99).direction();
        assert!(d.x > 0.0 && d.y < 0.0 && d.z < 0.0);
    }

    #[test]
    fn test_camera_screen_coordinates() {
        let camera = Camera::new(4, 2);
        let ray = camera.get_ray(0, 0);

        // x = (2 * 0.5 / 4 - 1) * 2 = -1.5, y = 1 - 2 * 0.5 / 2 = 0.5
        let expected = Vec3::new(-1.5, 0.5, -1.0).normalize();
        assert!((ray.direction() - expected).length() < 1e-6);
        assert!((ray.direction().length() - 1.0).abs() < 1e-6);
    }
}
