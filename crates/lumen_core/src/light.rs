//! Point lights.

use lumen_math::Vec3;

use crate::material::Color;

/// An isotropic point light.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PointLight {
    pub position: Vec3,
    pub color: Color,
    /// Scalar multiplier on `color`, expected to be non-negative
    pub intensity: f32,
}

impl PointLight {
    pub fn new(position: Vec3, color: Color, intensity: f32) -> Self {
        Self {
            position,
            color,
            intensity,
        }
    }

    /// A white light of the given intensity.
    pub fn white(position: Vec3, intensity: f32) -> Self {
        Self::new(position, Color::ONE, intensity)
    }

    /// Light color scaled by intensity.
    #[inline]
    pub fn radiance(&self) -> Color {
        self.color * self.intensity
    }
}
