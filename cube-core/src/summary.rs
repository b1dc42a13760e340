//! Serializable description of a computed slice.

use serde::Serialize;

use crate::config::SLICE_CELLS;
use crate::engine::Mask;
use crate::model::ReferenceSet;

/// Summary of one slice computation.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SliceSummary {
    /// Fixed red value.
    pub red: u8,
    /// Threshold the cells were checked against.
    pub min_contrast: f64,
    /// Active reference colors as `#rrggbb`.
    pub references: Vec<String>,
    /// Number of passing cells.
    pub passing: usize,
    /// Total number of cells.
    pub total: usize,
    /// Fraction of cells that pass, in [0, 1].
    pub fraction: f64,
}

impl SliceSummary {
    pub fn new(red: u8, min_contrast: f64, references: &ReferenceSet, mask: &Mask) -> Self {
        let passing = mask.passing_count();
        Self {
            red,
            min_contrast,
            references: references.active().map(|c| c.to_hex()).collect(),
            passing,
            total: SLICE_CELLS,
            fraction: passing as f64 / SLICE_CELLS as f64,
        }
    }
}

impl std::fmt::Display for SliceSummary {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "red={} min_contrast={} references=[{}] passing={}/{} ({:.1}%)",
            self.red,
            self.min_contrast,
            self.references.join(", "),
            self.passing,
            self.total,
            self.fraction * 100.0
        )
    }
}
