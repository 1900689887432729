//! Lumen Renderer - CPU Whitted-style ray tracing.
//!
//! One ray per pixel from a pinhole camera, Phong-style shading from point
//! lights, and recursive mirror reflection bounded by a depth budget.
//! Rays that escape the scene return a background color (a random
//! "starfield" by default).

mod camera;
mod lighting;
mod output;
mod renderer;
mod tracer;

pub use camera::Camera;
pub use lighting::{shade, SPECULAR_EXPONENT};
pub use output::{
    color_to_ppm, color_to_rgb8, save_image, save_png, save_ppm, write_ppm, OutputError,
};
pub use renderer::{render, render_pixel, ImageBuffer, RenderConfig};
pub use tracer::{trace, Background, REFLECTION_EPSILON};

/// Re-export scene and math types
pub use lumen_core::{Color, Scene};
pub use lumen_math::{Ray, Vec3};
