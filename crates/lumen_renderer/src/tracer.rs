//! Recursive ray tracing.
//!
//! Each call finds the nearest hit, adds the local illumination of every
//! light tinted by the object's color, and follows one mirror-reflected ray
//! while the depth budget lasts.

use lumen_core::{Color, Scene};
use lumen_math::{reflect, Ray};
use rand::{Rng, RngCore};

use crate::lighting::shade;
use crate::renderer::RenderConfig;

/// Offset along the reflected direction that keeps a bounce from hitting
/// the surface it starts on.
pub const REFLECTION_EPSILON: f32 = 1e-3;

/// What a ray that escapes the scene sees.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub enum Background {
    /// A uniform random color per miss, drawn from the render's generator
    #[default]
    Starfield,
    /// A fixed color
    Solid(Color),
}

impl Background {
    /// Color returned for a miss.
    pub fn sample(&self, rng: &mut dyn RngCore) -> Color {
        match *self {
            Background::Starfield => Color::new(rng.gen(), rng.gen(), rng.gen()),
            Background::Solid(color) => color,
        }
    }
}

/// Compute the color seen along `ray` with `depth` levels of recursion left.
///
/// Depth 0 returns black without touching the scene. Reflection recursion
/// happens only for materials with a positive `specular_strength`.
pub fn trace(
    ray: &Ray,
    scene: &Scene,
    depth: u32,
    config: &RenderConfig,
    rng: &mut dyn RngCore,
) -> Color {
    if depth == 0 {
        return Color::ZERO;
    }

    let Some(hit) = scene.nearest_hit(ray) else {
        return config.background.sample(rng);
    };

    let material = &hit.object.material;
    let point = ray.at(hit.distance);
    let view_dir = -ray.direction();

    let mut color = Color::ZERO;
    for light in &scene.lights {
        color += shade(point, hit.normal, view_dir, light) * material.color;
    }

    if material.is_reflective() {
        let reflected = reflect(ray.direction(), hit.normal);
        let bounce = Ray::new(point + reflected * REFLECTION_EPSILON, reflected);
        color += material.specular_strength * trace(&bounce, scene, depth - 1, config, rng);
    }

    color
}
