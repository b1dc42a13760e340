//! Configuration constants and settings for the contrast engine.

use crate::error::{CubeError, Result};
use crate::model::Rgb;
use serde::{Deserialize, Serialize};

/// WCAG luminance weight of the red channel.
pub const WEIGHT_R: f64 = 0.2126;

/// WCAG luminance weight of the green channel.
pub const WEIGHT_G: f64 = 0.7152;

/// WCAG luminance weight of the blue channel.
pub const WEIGHT_B: f64 = 0.0722;

/// Encoded values at or below this use the linear segment of the sRGB curve.
pub const SRGB_LINEAR_THRESHOLD: f64 = 0.04045;

/// Slope of the linear segment.
pub const SRGB_LINEAR_SLOPE: f64 = 12.92;

/// Offset of the power segment.
pub const SRGB_OFFSET: f64 = 0.055;

/// Exponent of the power segment.
pub const SRGB_GAMMA: f64 = 2.4;

/// Flare term added to both luminances in the contrast ratio.
pub const LUMINANCE_FLARE: f64 = 0.05;

/// Number of values per channel; a slice is `SLICE_SIZE x SLICE_SIZE`.
pub const SLICE_SIZE: usize = 256;

/// Number of cells in one slice.
pub const SLICE_CELLS: usize = SLICE_SIZE * SLICE_SIZE;

/// Largest possible contrast ratio (black against white).
pub const MAX_CONTRAST: f64 = 21.0;

/// Threshold used when none is given.
pub const DEFAULT_MIN_CONTRAST: f64 = 3.0;

/// Default nearest-neighbor scale for display and export.
pub const DEFAULT_SCALE: u32 = 2;

/// Largest nearest-neighbor scale accepted for export (a 4096x4096 image).
pub const MAX_SCALE: u32 = 16;

/// Maximum number of reference colors.
pub const MAX_REFERENCES: usize = 3;

/// Default reference colors: white, green, red.
pub const DEFAULT_REFERENCES: [Rgb; MAX_REFERENCES] = [
    Rgb::new(255, 255, 255),
    Rgb::new(0, 255, 0),
    Rgb::new(255, 0, 0),
];

/// WCAG 2.1 success criteria thresholds.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ContrastLevel {
    /// AA, large text (3:1).
    AaLarge,
    /// AA, normal text (4.5:1).
    Aa,
    /// AAA, large text (4.5:1).
    AaaLarge,
    /// AAA, normal text (7:1).
    Aaa,
}

impl ContrastLevel {
    /// All levels, in increasing strictness.
    pub const ALL: [ContrastLevel; 4] = [
        ContrastLevel::AaLarge,
        ContrastLevel::Aa,
        ContrastLevel::AaaLarge,
        ContrastLevel::Aaa,
    ];

    /// Minimum contrast ratio required by this level.
    pub fn min_contrast(&self) -> f64 {
        match self {
            ContrastLevel::AaLarge => 3.0,
            ContrastLevel::Aa | ContrastLevel::AaaLarge => 4.5,
            ContrastLevel::Aaa => 7.0,
        }
    }

    /// Parse a level name such as `aa`, `aa-large`, `aaa`.
    pub fn from_name(s: &str) -> Option<Self> {
        match s.trim().to_lowercase().replace('_', "-").as_str() {
            "aa-large" => Some(ContrastLevel::AaLarge),
            "aa" => Some(ContrastLevel::Aa),
            "aaa-large" => Some(ContrastLevel::AaaLarge),
            "aaa" => Some(ContrastLevel::Aaa),
            _ => None,
        }
    }
}

impl std::fmt::Display for ContrastLevel {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ContrastLevel::AaLarge => write!(f, "AA large"),
            ContrastLevel::Aa => write!(f, "AA"),
            ContrastLevel::AaaLarge => write!(f, "AAA large"),
            ContrastLevel::Aaa => write!(f, "AAA"),
        }
    }
}

/// Parse a contrast threshold typed by the user.
///
/// Negative values are accepted (they simply pass every cell); anything that
/// is not a finite number is rejected.
pub fn parse_threshold(input: &str) -> Result<f64> {
    match input.trim().parse::<f64>() {
        Ok(value) if value.is_finite() => Ok(value),
        _ => Err(CubeError::InvalidThreshold {
            input: input.to_string(),
        }),
    }
}

/// Parameters selecting one slice and its pass criterion.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct SliceParams {
    /// Fixed red channel value of the slice.
    pub red: u8,
    /// Minimum contrast ratio a cell must reach.
    pub min_contrast: f64,
}

impl Default for SliceParams {
    fn default() -> Self {
        Self {
            red: 0,
            min_contrast: DEFAULT_MIN_CONTRAST,
        }
    }
}

impl SliceParams {
    /// Create parameters for a red value and threshold.
    pub fn new(red: u8, min_contrast: f64) -> Self {
        Self { red, min_contrast }
    }

    /// Apply a threshold typed by the user.
    ///
    /// On failure the previous threshold stays in effect.
    pub fn apply_threshold_input(&mut self, input: &str) -> Result<f64> {
        match parse_threshold(input) {
            Ok(value) => {
                self.min_contrast = value;
                Ok(value)
            }
            Err(e) => {
                tracing::warn!("Ignoring threshold input: {}", e);
                Err(e)
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_weights_sum_to_one() {
        assert!((WEIGHT_R + WEIGHT_G + WEIGHT_B - 1.0).abs() < 1e-12);
    }

    #[test]
    fn test_parse_threshold() {
        assert_eq!(parse_threshold("4.5"), Ok(4.5));
        assert_eq!(parse_threshold(" 7 "), Ok(7.0));
        assert_eq!(parse_threshold("-1"), Ok(-1.0));
        assert!(parse_threshold("abc").is_err());
        assert!(parse_threshold("").is_err());
        assert!(parse_threshold("NaN").is_err());
        assert!(parse_threshold("inf").is_err());
    }

    #[test]
    fn test_rejected_threshold_keeps_previous() {
        let mut params = SliceParams::new(10, 4.5);
        assert!(params.apply_threshold_input("four").is_err());
        assert_eq!(params.min_contrast, 4.5);

        assert_eq!(params.apply_threshold_input("7.0"), Ok(7.0));
        assert_eq!(params.min_contrast, 7.0);
    }

    #[test]
    fn test_contrast_levels() {
        assert_eq!(ContrastLevel::from_name("AA"), Some(ContrastLevel::Aa));
        assert_eq!(
            ContrastLevel::from_name("aaa_large"),
            Some(ContrastLevel::AaaLarge)
        );
        assert_eq!(ContrastLevel::from_name("A"), None);
        assert_eq!(ContrastLevel::AaLarge.min_contrast(), 3.0);
        assert_eq!(ContrastLevel::Aaa.min_contrast(), 7.0);
    }
}
