//! Writing rendered images to disk.
//!
//! PPM output keeps the raw pipeline values: each channel is scaled by 255
//! and truncated, with no clamping, so over-bright or negative channels land
//! in the file as out-of-range integers. PNG output has to fit bytes and
//! clamps to [0, 1] first.

use std::fs::File;
use std::io::{self, BufWriter, Write};
use std::path::Path;

use image::RgbImage;
use lumen_core::Color;
use thiserror::Error;

use crate::renderer::ImageBuffer;

/// Errors that can occur while saving an image.
#[derive(Error, Debug)]
pub enum OutputError {
    #[error("IO error: {0}")]
    Io(#[from] io::Error),

    #[error("Image encoding error: {0}")]
    Image(#[from] image::ImageError),

    #[error("Unsupported output format: {0}")]
    UnsupportedFormat(String),
}

/// Convert a color to PPM channel values: `(channel * 255) as i32`.
///
/// Not clamped. NaN channels become 0.
#[inline]
pub fn color_to_ppm(color: Color) -> [i32; 3] {
    [
        (color.x * 255.0) as i32,
        (color.y * 255.0) as i32,
        (color.z * 255.0) as i32,
    ]
}

/// Convert a color to 8-bit RGB, clamping each channel to [0, 1].
#[inline]
pub fn color_to_rgb8(color: Color) -> [u8; 3] {
    let c = color.clamp(Color::ZERO, Color::ONE);
    [
        (c.x * 255.0) as u8,
        (c.y * 255.0) as u8,
        (c.z * 255.0) as u8,
    ]
}

/// Write an image as plain-text PPM (P3).
pub fn write_ppm<W: Write>(image: &ImageBuffer, writer: &mut W) -> io::Result<()> {
    writeln!(writer, "P3")?;
    writeln!(writer, "{} {}", image.width, image.height)?;
    writeln!(writer, "255")?;

    for color in &image.pixels {
        let [r, g, b] = color_to_ppm(*color);
        writeln!(writer, "{} {} {}", r, g, b)?;
    }

    Ok(())
}

/// Save an image as plain-text PPM.
pub fn save_ppm<P: AsRef<Path>>(image: &ImageBuffer, path: P) -> io::Result<()> {
    let file = File::create(path)?;
    let mut writer = BufWriter::new(file);
    write_ppm(image, &mut writer)?;
    writer.flush()
}

/// Save an image as PNG.
pub fn save_png<P: AsRef<Path>>(image: &ImageBuffer, path: P) -> Result<(), OutputError> {
    let mut bytes = Vec::with_capacity(image.pixels.len() * 3);
    for color in &image.pixels {
        bytes.extend_from_slice(&color_to_rgb8(*color));
    }

    let png = RgbImage::from_raw(image.width, image.height, bytes).ok_or_else(|| {
        OutputError::UnsupportedFormat(format!(
            "buffer does not match {}x{}",
            image.width, image.height
        ))
    })?;
    png.save(path)?;
    Ok(())
}

/// Save an image, choosing the format from the file extension (`.ppm` or `.png`).
pub fn save_image<P: AsRef<Path>>(image: &ImageBuffer, path: P) -> Result<(), OutputError> {
    let path = path.as_ref();
    let extension = path
        .extension()
        .map(|e| e.to_string_lossy().to_ascii_lowercase())
        .unwrap_or_default();

    match extension.as_str() {
        "ppm" => save_ppm(image, path)?,
        "png" => save_png(image, path)?,
        other => return Err(OutputError::UnsupportedFormat(other.to_string())),
    }

    log::info!("Saved {}", path.display());
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_color_to_ppm_truncates() {
        assert_eq!(color_to_ppm(Color::new(0.0, 0.5, 1.0)), [0, 127, 255]);
        assert_eq!(color_to_ppm(Color::new(0.999, 0.004, 0.9999)), [254, 1, 254]);
    }

    #[test]
    fn test_color_to_ppm_out_of_range() {
        assert_eq!(color_to_ppm(Color::new(2.0, -0.5, 1.2)), [510, -127, 306]);
        assert_eq!(color_to_ppm(Color::new(f32::NAN, 0.0, 0.0))[0], 0);
    }

    #[test]
    fn test_color_to_rgb8_clamps() {
        assert_eq!(color_to_rgb8(Color::new(2.0, -0.5, 0.5)), [255, 0, 127]);
    }

    #[test]
    fn test_write_ppm() {
        let mut image = ImageBuffer::new(2, 1);
        image.set(0, 0, Color::new(1.0, 0.0, 0.5));
        image.set(1, 0, Color::new(1.5, -1.0, 0.0));

        let mut out = Vec::new();
        write_ppm(&image, &mut out).unwrap();

        let text = String::from_utf8(out).unwrap();
        assert_eq!(text, "P3\n2 1\n255\n255 0 127\n382 -255 0\n");
    }

    #[test]
    fn test_save_image_rejects_unknown_extension() {
        let image = ImageBuffer::new(1, 1);
        let path = std::env::temp_dir().join("lumen_output_test.bmpx");
        assert!(matches!(
            save_image(&image, &path),
            Err(OutputError::UnsupportedFormat(_))
        ));
    }

    #[test]
    fn test_save_ppm_and_png() {
        let mut image = ImageBuffer::new(3, 2);
        image.set(1, 1, Color::new(0.25, 0.5, 0.75));
        let dir = std::env::temp_dir();

        let ppm = dir.join("lumen_output_test.ppm");
        save_image(&image, &ppm).unwrap();
        let text = std::fs::read_to_string(&ppm).unwrap();
        assert!(text.starts_with("P3\n3 2\n255\n"));
        assert_eq!(text.lines().count(), 3 + 6);

        let png = dir.join("lumen_output_test.png");
        save_image(&image, &png).unwrap();
        let decoded = image::open(&png).unwrap().to_rgb8();
        assert_eq!(decoded.dimensions(), (3, 2));
        assert_eq!(decoded.get_pixel(1, 1).0, [63, 127, 191]);

        let _ = std::fs::remove_file(ppm);
        let _ = std::fs::remove_file(png);
    }
}
