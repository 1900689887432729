//! Phong-style local illumination from a single point light.

use lumen_core::{Color, PointLight};
use lumen_math::{reflect, Vec3};

/// Exponent of the specular lobe.
///
/// Fixed for every surface; `Material::shininess` is not consulted.
pub const SPECULAR_EXPONENT: f32 = 32.0;

/// Diffuse + specular contribution of `light` at `point`.
///
/// `normal` and `view_dir` (from the point toward the eye) must be unit
/// vectors. No shadow test is made and the result is not clamped.
pub fn shade(point: Vec3, normal: Vec3, view_dir: Vec3, light: &PointLight) -> Color {
    let light_dir = (light.position - point).normalize();
    let radiance = light.radiance();

    let diffuse = normal.dot(light_dir).max(0.0) * radiance;

    let reflect_dir = reflect(-light_dir, normal);
    let specular = view_dir.dot(reflect_dir).max(0.0).powf(SPECULAR_EXPONENT) * radiance;

    diffuse + specular
}

#[cfg(test)]
mod tests {
    use super::*;

    fn approx_eq(a: Color, b: Color) -> bool {
        (a - b).length() < 1e-5
    }

    #[test]
    fn test_light_along_normal() {
        // Full diffuse, and the view sits on the mirror direction
        let light = PointLight::new(Vec3::new(0.0, 5.0, 0.0), Color::new(1.0, 0.5, 0.25), 2.0);
        let c = shade(Vec3::ZERO, Vec3::Y, Vec3::Y, &light);

        assert!(approx_eq(c, 2.0 * light.radiance()), "got {:?}", c);
    }

    #[test]
    fn test_light_behind_surface() {
        let light = PointLight::white(Vec3::new(0.0, -5.0, 0.0), 1.0);
        let c = shade(Vec3::ZERO, Vec3::Y, Vec3::Y, &light);

        assert_eq!(c, Color::ZERO);
    }

    #[test]
    fn test_oblique_light() {
        let light = PointLight::white(Vec3::new(3.0, 3.0, 0.0), 1.0);
        let cos = std::f32::consts::FRAC_1_SQRT_2;

        // Viewed along the mirror direction: specular peaks at 1
        let mirror = Vec3::new(-1.0, 1.0, 0.0).normalize();
        let c = shade(Vec3::ZERO, Vec3::Y, mirror, &light);
        assert!(approx_eq(c, Color::splat(cos + 1.0)), "got {:?}", c);

        // Viewed along the normal: specular is cos^32, nearly gone
        let c = shade(Vec3::ZERO, Vec3::Y, Vec3::Y, &light);
        assert!(approx_eq(c, Color::splat(cos + cos.powf(SPECULAR_EXPONENT))), "got {:?}", c);
    }

    #[test]
    fn test_zero_intensity() {
        let light = PointLight::white(Vec3::new(0.0, 5.0, 0.0), 0.0);
        assert_eq!(shade(Vec3::ZERO, Vec3::Y, Vec3::Y, &light), Color::ZERO);
    }

    #[test]
    fn test_not_clamped() {
        let light = PointLight::white(Vec3::new(0.0, 1.0, 0.0), 10.0);
        let c = shade(Vec3::ZERO, Vec3::Y, Vec3::Y, &light);
        assert!(c.x > 1.0);
    }
}
