//! PNG export of a rendered slice.

use anyhow::{Context, Result};
use std::path::Path;

use cube_core::SliceImage;

/// Write `image` upscaled by `scale` as an RGBA PNG.
pub fn write_png(image: &SliceImage, scale: u32, path: &Path) -> Result<()> {
    let size = image.scaled_size(scale)?;
    let pixels = image.upscale(scale)?;

    let buffer = image::RgbaImage::from_raw(size, size, pixels)
        .context("Upscaled slice does not match its declared size")?;

    buffer
        .save_with_format(path, image::ImageFormat::Png)
        .with_context(|| format!("Failed to write {}", path.display()))?;

    tracing::debug!("Wrote {}x{} PNG to {}", size, size, path.display());
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use cube_core::{ContrastEngine, Rgb};

    #[test]
    fn test_write_png_roundtrip() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("slice.png");

        let engine = ContrastEngine::new();
        let mask = engine.compute_slice(255, 3.0, Rgb::BLACK);
        let image = SliceImage::new(255, &mask);
        write_png(&image, 2, &path).unwrap();

        let loaded = image::open(&path).unwrap().to_rgba8();
        assert_eq!(loaded.dimensions(), (512, 512));
        // Pure red passes against black
        assert_eq!(loaded.get_pixel(0, 0).0, [255, 0, 0, 255]);
        assert_eq!(loaded.get_pixel(1, 1).0, [255, 0, 0, 255]);
        // Source pixel (255, 255) is white, also passing
        assert_eq!(loaded.get_pixel(511, 511).0, [255, 255, 255, 255]);
    }

    #[test]
    fn test_write_png_rejects_zero_scale() {
        let dir = tempfile::tempdir().unwrap();
        let image = SliceImage::new(0, &cube_core::Mask::filled(true));
        assert!(write_png(&image, 0, &dir.path().join("x.png")).is_err());
    }

    #[test]
    fn test_write_png_rejects_huge_scale() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("x.png");
        let image = SliceImage::new(0, &cube_core::Mask::filled(true));

        let err = write_png(&image, 16_777_216, &path).unwrap_err();
        assert!(err.to_string().contains("16777216"));
        assert!(!path.exists());
    }
}
