//! RGBA rendering of a slice with its mask as alpha.

use crate::config::{MAX_SCALE, SLICE_CELLS, SLICE_SIZE};
use crate::engine::Mask;
use crate::error::{CubeError, Result};

/// Bytes per RGBA pixel.
const CHANNELS: usize = 4;

/// A 256x256 RGBA8 image of one red slice.
///
/// Pixel `(x, y)` has color `(red, x, y)`; its alpha is 255 where the mask
/// passes and 0 where it fails.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SliceImage {
    red: u8,
    pixels: Vec<u8>,
}

impl SliceImage {
    /// Render the `red` slice with `mask` as alpha.
    pub fn new(red: u8, mask: &Mask) -> Self {
        let alpha = mask.to_alpha();
        let mut pixels = Vec::with_capacity(SLICE_CELLS * CHANNELS);
        for (i, &a) in alpha.iter().enumerate() {
            let (g, b) = ((i % SLICE_SIZE) as u8, (i / SLICE_SIZE) as u8);
            pixels.extend_from_slice(&[red, g, b, a]);
        }
        Self { red, pixels }
    }

    /// The fixed red value of this slice.
    pub fn red(&self) -> u8 {
        self.red
    }

    /// Width and height in pixels.
    pub fn size(&self) -> usize {
        SLICE_SIZE
    }

    /// Raw RGBA bytes, row-major.
    pub fn as_rgba(&self) -> &[u8] {
        &self.pixels
    }

    /// Raw `(R, G, B, alpha)` under pixel `(x, y)`, if inside the slice.
    pub fn pixel(&self, x: usize, y: usize) -> Option<[u8; 4]> {
        if x >= SLICE_SIZE || y >= SLICE_SIZE {
            return None;
        }
        let i = (y * SLICE_SIZE + x) * CHANNELS;
        Some([
            self.pixels[i],
            self.pixels[i + 1],
            self.pixels[i + 2],
            self.pixels[i + 3],
        ])
    }

    /// Side length in pixels after upscaling by `factor`.
    ///
    /// Fails when `factor` is 0 or above [`MAX_SCALE`].
    pub fn scaled_size(&self, factor: u32) -> Result<u32> {
        if factor == 0 || factor > MAX_SCALE {
            return Err(CubeError::InvalidScale {
                scale: factor,
                max: MAX_SCALE,
            });
        }
        (SLICE_SIZE as u32)
            .checked_mul(factor)
            .ok_or(CubeError::InvalidScale {
                scale: factor,
                max: MAX_SCALE,
            })
    }

    /// Upscale by nearest-neighbor replication.
    ///
    /// Returns the RGBA bytes of a `256 * factor` square image.
    pub fn upscale(&self, factor: u32) -> Result<Vec<u8>> {
        let out_size = self.scaled_size(factor)? as usize;
        let factor = factor as usize;

        let mut out = Vec::with_capacity(out_size * out_size * CHANNELS);
        for row in self.pixels.chunks_exact(SLICE_SIZE * CHANNELS) {
            let mut scaled_row = Vec::with_capacity(out_size * CHANNELS);
            for px in row.chunks_exact(CHANNELS) {
                for _ in 0..factor {
                    scaled_row.extend_from_slice(px);
                }
            }
            for _ in 0..factor {
                out.extend_from_slice(&scaled_row);
            }
        }
        Ok(out)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_pixel_layout() {
        let mask = Mask::from_fn(|g, b| g > b);
        let image = SliceImage::new(42, &mask);

        assert_eq!(image.as_rgba().len(), SLICE_CELLS * 4);
        assert_eq!(image.pixel(10, 3), Some([42, 10, 3, 255]));
        assert_eq!(image.pixel(3, 10), Some([42, 3, 10, 0]));
        assert_eq!(image.pixel(256, 0), None);
    }

    #[test]
    fn test_upscale_replicates_pixels() {
        let mask = Mask::from_fn(|g, _| g % 2 == 0);
        let image = SliceImage::new(7, &mask);
        let scaled = image.upscale(2).unwrap();

        let size = SLICE_SIZE * 2;
        assert_eq!(scaled.len(), size * size * 4);

        let at = |x: usize, y: usize| {
            let i = (y * size + x) * 4;
            [scaled[i], scaled[i + 1], scaled[i + 2], scaled[i + 3]]
        };
        // Source pixel (1, 1) covers output (2..4, 2..4)
        for (x, y) in [(2, 2), (3, 2), (2, 3), (3, 3)] {
            assert_eq!(at(x, y), [7, 1, 1, 0]);
        }
        assert_eq!(at(4, 2), [7, 2, 1, 255]);
    }

    #[test]
    fn test_upscale_identity_and_zero() {
        let image = SliceImage::new(0, &Mask::filled(true));
        assert_eq!(image.upscale(1).unwrap(), image.as_rgba());
        assert_eq!(
            image.upscale(0),
            Err(CubeError::InvalidScale { scale: 0, max: MAX_SCALE })
        );
    }

    #[test]
    fn test_upscale_rejects_huge_factor() {
        let image = SliceImage::new(0, &Mask::filled(true));
        for factor in [MAX_SCALE + 1, 65_536, 16_777_216, u32::MAX] {
            assert_eq!(
                image.upscale(factor),
                Err(CubeError::InvalidScale { scale: factor, max: MAX_SCALE })
            );
        }
        assert_eq!(image.scaled_size(MAX_SCALE), Ok(4096));
    }
}
