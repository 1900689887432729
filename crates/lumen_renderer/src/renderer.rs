//! Render driver.
//!
//! Walks the pixel grid row by row, traces one camera ray per pixel and
//! stores the raw (unclamped) color in an [`ImageBuffer`].

use std::time::Instant;

use lumen_core::{Color, Scene};
use rand::rngs::StdRng;
use rand::{RngCore, SeedableRng};

use crate::camera::Camera;
use crate::tracer::{trace, Background};

/// Render configuration.
#[derive(Debug, Clone)]
pub struct RenderConfig {
    /// Recursion budget for each camera ray (1 = no reflections)
    pub max_depth: u32,
    /// What rays that leave the scene return
    pub background: Background,
    /// Seed of the generator that feeds the starfield
    pub seed: u64,
}

impl Default for RenderConfig {
    fn default() -> Self {
        Self {
            max_depth: 5,
            background: Background::Starfield,
            seed: 0,
        }
    }
}

impl RenderConfig {
    /// A generator seeded from `seed`; the same seed reproduces the image.
    pub fn rng(&self) -> StdRng {
        StdRng::seed_from_u64(self.seed)
    }
}

/// Render a single pixel.
pub fn render_pixel(
    camera: &Camera,
    scene: &Scene,
    x: u32,
    y: u32,
    config: &RenderConfig,
    rng: &mut dyn RngCore,
) -> Color {
    let ray = camera.get_ray(x, y);
    trace(&ray, scene, config.max_depth, config, rng)
}

/// Simple image buffer for storing render output.
#[derive(Debug, Clone)]
pub struct ImageBuffer {
    pub width: u32,
    pub height: u32,
    pub pixels: Vec<Color>,
}

impl ImageBuffer {
    /// Create a new image buffer filled with black.
    pub fn new(width: u32, height: u32) -> Self {
        Self {
            width,
            height,
            pixels: vec![Color::ZERO; (width * height) as usize],
        }
    }

    /// Get the pixel at (x, y).
    pub fn get(&self, x: u32, y: u32) -> Color {
        self.pixels[(y * self.width + x) as usize]
    }

    /// Set the pixel at (x, y).
    pub fn set(&mut self, x: u32, y: u32, color: Color) {
        self.pixels[(y * self.width + x) as usize] = color;
    }
}

/// Render the entire scene to an image buffer.
///
/// Single-threaded; pixels are traced in row-major order, all drawing from
/// the one generator passed in.
pub fn render(
    camera: &Camera,
    scene: &Scene,
    config: &RenderConfig,
    rng: &mut dyn RngCore,
) -> ImageBuffer {
    log::info!(
        "Rendering '{}' at {}x{}, depth {}, {} objects, {} lights",
        scene.name,
        camera.image_width,
        camera.image_height,
        config.max_depth,
        scene.object_count(),
        scene.light_count()
    );

    let start = Instant::now();
    let mut image = ImageBuffer::new(camera.image_width, camera.image_height);

    for y in 0..camera.image_height {
        for x in 0..camera.image_width {
            let color = render_pixel(camera, scene, x, y, config, rng);
            image.set(x, y, color);
        }
        log::trace!("Row {}/{} done", y + 1, camera.image_height);
    }

    log::info!("Rendered in {:?}", start.elapsed());
    image
}
