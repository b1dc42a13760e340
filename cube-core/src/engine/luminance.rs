//! sRGB linearization, relative luminance and contrast ratio.

use crate::config::{
    LUMINANCE_FLARE, SRGB_GAMMA, SRGB_LINEAR_SLOPE, SRGB_LINEAR_THRESHOLD, SRGB_OFFSET, WEIGHT_B,
    WEIGHT_G, WEIGHT_R,
};
use crate::model::Rgb;

/// Convert a gamma-encoded channel in [0, 1] to linear light.
#[inline]
pub fn srgb_to_linear(c: f64) -> f64 {
    if c <= SRGB_LINEAR_THRESHOLD {
        c / SRGB_LINEAR_SLOPE
    } else {
        ((c + SRGB_OFFSET) / (1.0 + SRGB_OFFSET)).powf(SRGB_GAMMA)
    }
}

/// Linear light of an 8-bit channel value.
#[inline]
pub fn channel_to_linear(value: u8) -> f64 {
    srgb_to_linear(value as f64 / 255.0)
}

/// Red contribution to relative luminance.
#[inline]
pub fn red_term(r: u8) -> f64 {
    WEIGHT_R * channel_to_linear(r)
}

/// Green plus blue contribution to relative luminance.
#[inline]
pub fn green_blue_term(g: u8, b: u8) -> f64 {
    WEIGHT_G * channel_to_linear(g) + WEIGHT_B * channel_to_linear(b)
}

/// WCAG relative luminance of a color, in [0, 1].
///
/// Summed as `green_blue_term + red_term` so that a color's luminance is
/// bit-identical to the value the slice table produces for the same cell.
pub fn relative_luminance(color: Rgb) -> f64 {
    green_blue_term(color.g, color.b) + red_term(color.r)
}

/// Contrast ratio between two luminances. Symmetric, always >= 1.
#[inline]
pub fn contrast_ratio_lum(l1: f64, l2: f64) -> f64 {
    let (lighter, darker) = if l1 >= l2 { (l1, l2) } else { (l2, l1) };
    (lighter + LUMINANCE_FLARE) / (darker + LUMINANCE_FLARE)
}

/// Contrast ratio between two colors.
pub fn contrast_ratio(a: Rgb, b: Rgb) -> f64 {
    contrast_ratio_lum(relative_luminance(a), relative_luminance(b))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_srgb_endpoints() {
        assert_eq!(srgb_to_linear(0.0), 0.0);
        assert!((srgb_to_linear(1.0) - 1.0).abs() < 1e-12);
    }

    #[test]
    fn test_srgb_monotonic() {
        let mut prev = srgb_to_linear(0.0);
        for i in 1..=10_000 {
            let v = srgb_to_linear(i as f64 / 10_000.0);
            assert!(v >= prev, "srgb decreased at {}", i);
            prev = v;
        }
    }

    #[test]
    fn test_srgb_segments() {
        // Linear segment
        assert!((srgb_to_linear(0.04045) - 0.04045 / 12.92).abs() < 1e-15);
        // Power segment, mid grey
        assert!((channel_to_linear(128) - 0.215861).abs() < 1e-6);
    }

    #[test]
    fn test_luminance_extremes() {
        assert_eq!(relative_luminance(Rgb::BLACK), 0.0);
        assert!((relative_luminance(Rgb::WHITE) - 1.0).abs() < 1e-9);
    }

    #[test]
    fn test_luminance_is_weighted_linear_light() {
        // Weights must be applied after linearization.
        let grey = Rgb::new(128, 128, 128);
        let lum = relative_luminance(grey);
        assert!((lum - 0.215861).abs() < 1e-6);
        assert!((lum - 128.0 / 255.0).abs() > 0.2);
    }

    #[test]
    fn test_contrast_identity_and_symmetry() {
        let c = Rgb::new(12, 200, 77);
        assert_eq!(contrast_ratio(c, c), 1.0);

        let other = Rgb::new(240, 10, 99);
        assert_eq!(contrast_ratio(c, other), contrast_ratio(other, c));
    }

    #[test]
    fn test_contrast_black_white() {
        let ratio = contrast_ratio(Rgb::BLACK, Rgb::WHITE);
        assert!((ratio - 21.0).abs() < 1e-9);
    }

    #[test]
    fn test_contrast_known_values() {
        // #767676 on white is the classic 4.54:1 grey
        let ratio = contrast_ratio(Rgb::new(0x76, 0x76, 0x76), Rgb::WHITE);
        assert!((ratio - 4.54).abs() < 0.01);

        let ratio = contrast_ratio(Rgb::new(255, 0, 0), Rgb::WHITE);
        assert!((ratio - 3.998).abs() < 0.01);
    }
}
