//! Surface material carried by every scene object.

use lumen_math::Vec3;

/// Color type alias (RGB values typically 0-1, not enforced)
pub type Color = Vec3;

/// Shading parameters of a scene object.
///
/// Only `color` and `specular_strength` feed the tracer. `shininess`,
/// `transparency` and `refractive_index` are carried so scene descriptions
/// round-trip, but nothing reads them during a render.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Material {
    /// Base color (albedo), multiplied into every light's contribution
    pub color: Color,
    /// Weight of the mirror-reflected ray; 0 disables reflection entirely
    pub specular_strength: f32,
    /// Phong exponent of the object
    pub shininess: f32,
    /// Unused: no refraction is traced
    pub transparency: f32,
    /// Unused: no refraction is traced
    pub refractive_index: f32,
}

impl Default for Material {
    fn default() -> Self {
        Self {
            color: Color::new(0.5, 0.5, 0.5), // Grey default
            specular_strength: 0.0,
            shininess: 32.0,
            transparency: 0.0,
            refractive_index: 1.0,
        }
    }
}

impl Material {
    /// Create a matte material with the given base color.
    pub fn new(color: Color) -> Self {
        Self {
            color,
            ..Default::default()
        }
    }

    /// Set the reflection weight.
    pub fn with_specular(mut self, specular_strength: f32) -> Self {
        self.specular_strength = specular_strength;
        self
    }

    /// Set the Phong exponent.
    pub fn with_shininess(mut self, shininess: f32) -> Self {
        self.shininess = shininess;
        self
    }

    /// Set transparency and index of refraction.
    pub fn with_transparency(mut self, transparency: f32, refractive_index: f32) -> Self {
        self.transparency = transparency;
        self.refractive_index = refractive_index;
        self
    }

    /// Whether a hit on this material spawns a reflected ray.
    #[inline]
    pub fn is_reflective(&self) -> bool {
        self.specular_strength > 0.0
    }
}
