//! Contrast engine: pass/fail masks over slices of the RGB cube.

mod luminance;
mod mask;

pub use luminance::{
    channel_to_linear, contrast_ratio, contrast_ratio_lum, green_blue_term, red_term,
    relative_luminance, srgb_to_linear,
};
pub use mask::{combine_masks, Mask, ALPHA_FAIL, ALPHA_PASS};

use serde::Serialize;

use crate::config::{SLICE_CELLS, SLICE_SIZE, WEIGHT_B, WEIGHT_G};
use crate::error::Result;
use crate::model::{ReferenceSet, Rgb};

/// Computes which colors of a red slice meet a contrast threshold.
///
/// The green/blue share of luminance does not depend on red or on the
/// reference color, so it is tabulated once in [`ContrastEngine::new`] and
/// only read afterwards.
#[derive(Clone)]
pub struct ContrastEngine {
    lum_gb: Box<[f64]>,
}

impl Default for ContrastEngine {
    fn default() -> Self {
        Self::new()
    }
}

impl std::fmt::Debug for ContrastEngine {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ContrastEngine")
            .field("cells", &self.lum_gb.len())
            .finish()
    }
}

impl ContrastEngine {
    /// Build the engine and its green/blue luminance table.
    pub fn new() -> Self {
        let linear: Vec<f64> = (0..=255u8).map(channel_to_linear).collect();

        let mut lum_gb = Vec::with_capacity(SLICE_CELLS);
        for b in 0..SLICE_SIZE {
            for g in 0..SLICE_SIZE {
                lum_gb.push(WEIGHT_G * linear[g] + WEIGHT_B * linear[b]);
            }
        }

        tracing::debug!("Built green/blue luminance table ({} cells)", lum_gb.len());

        Self {
            lum_gb: lum_gb.into_boxed_slice(),
        }
    }

    /// Green/blue luminance share of cell `(g, b)`.
    #[inline]
    pub fn lum_gb(&self, g: u8, b: u8) -> f64 {
        self.lum_gb[b as usize * SLICE_SIZE + g as usize]
    }

    /// Mask of the cells of the `red` slice whose contrast against
    /// `reference` is at least `min_contrast`.
    pub fn compute_slice(&self, red: u8, min_contrast: f64, reference: Rgb) -> Mask {
        debug_assert!(!min_contrast.is_nan(), "contrast threshold is NaN");

        let lum_r = red_term(red);
        let lum_ref = relative_luminance(reference);

        let mask = Mask::from_fn(|g, b| {
            contrast_ratio_lum(self.lum_gb(g, b) + lum_r, lum_ref) >= min_contrast
        });

        tracing::debug!(
            "Slice red={} reference={} min_contrast={}: {} passing",
            red,
            reference,
            min_contrast,
            mask.passing_count()
        );

        mask
    }

    /// Mask of the cells passing against every active reference color.
    pub fn compute_references(
        &self,
        red: u8,
        min_contrast: f64,
        references: &ReferenceSet,
    ) -> Result<Mask> {
        tracing::debug!(
            "Combining {} reference masks for red={}",
            references.active_count(),
            red
        );
        let masks: Vec<Mask> = references
            .active()
            .map(|color| self.compute_slice(red, min_contrast, color))
            .collect();
        combine_masks(&masks)
    }

    /// Luminance and contrast details for one cell of the `red` slice.
    pub fn probe(&self, red: u8, g: u8, b: u8, references: &ReferenceSet) -> CellProbe {
        let luminance = self.lum_gb(g, b) + red_term(red);
        let ratios = references
            .active()
            .map(|reference| ReferenceContrast {
                reference,
                ratio: contrast_ratio_lum(luminance, relative_luminance(reference)),
            })
            .collect();

        CellProbe {
            color: Rgb::new(red, g, b),
            luminance,
            ratios,
        }
    }
}

/// Contrast of one cell against one reference color.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct ReferenceContrast {
    pub reference: Rgb,
    pub ratio: f64,
}

/// Details of a single slice cell.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct CellProbe {
    /// The cell's color.
    pub color: Rgb,
    /// Relative luminance of the cell.
    pub luminance: f64,
    /// Contrast against each active reference, in slot order.
    pub ratios: Vec<ReferenceContrast>,
}

impl CellProbe {
    /// Whether the cell meets `min_contrast` against every reference.
    pub fn passes(&self, min_contrast: f64) -> bool {
        self.ratios.iter().all(|c| c.ratio >= min_contrast)
    }

    /// The lowest contrast across references.
    pub fn min_ratio(&self) -> Option<f64> {
        self.ratios.iter().map(|c| c.ratio).reduce(f64::min)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_table_matches_direct_formula() {
        let engine = ContrastEngine::new();
        for &(g, b) in &[(0u8, 0u8), (255, 255), (10, 200), (128, 64)] {
            assert_eq!(engine.lum_gb(g, b), green_blue_term(g, b));
        }
    }

    #[test]
    fn test_reference_in_slice_has_ratio_one() {
        let engine = ContrastEngine::new();
        let reference = Rgb::new(40, 90, 200);
        let probe = engine.probe(40, 90, 200, &ReferenceSet::single(reference));
        assert_eq!(probe.ratios[0].ratio, 1.0);

        let mask = engine.compute_slice(40, 1.0001, reference);
        assert!(!mask.get(90, 200));
    }

    #[test]
    fn test_negative_threshold_passes_everything() {
        let engine = ContrastEngine::new();
        assert!(engine.compute_slice(77, -3.0, Rgb::new(1, 2, 3)).is_all());
    }

    #[test]
    fn test_compute_references_single_matches_slice() {
        let engine = ContrastEngine::new();
        let set = ReferenceSet::single(Rgb::new(30, 30, 30));
        assert_eq!(
            engine.compute_references(200, 4.5, &set).unwrap(),
            engine.compute_slice(200, 4.5, Rgb::new(30, 30, 30))
        );
    }

    #[test]
    fn test_probe_min_ratio() {
        let engine = ContrastEngine::new();
        let set = ReferenceSet::from_colors(&[Rgb::WHITE, Rgb::BLACK]).unwrap();
        let probe = engine.probe(0, 0, 0, &set);

        assert_eq!(probe.color, Rgb::BLACK);
        assert_eq!(probe.ratios.len(), 2);
        assert_eq!(probe.min_ratio(), Some(1.0));
        assert!(!probe.passes(3.0));
        assert!(probe.passes(1.0));
    }
}
