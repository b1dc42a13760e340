//! Pass/fail grid over one color slice.

use crate::config::{SLICE_CELLS, SLICE_SIZE};
use crate::error::{CubeError, Result};

/// Alpha value of a passing cell.
pub const ALPHA_PASS: u8 = 255;
/// Alpha value of a failing cell.
pub const ALPHA_FAIL: u8 = 0;

/// A 256x256 grid of pass/fail flags.
///
/// Rows are blue, columns are green: cell `(g, b)` lives at `b * 256 + g`,
/// which matches the pixel layout of the rendered slice.
#[derive(Clone, PartialEq, Eq)]
pub struct Mask {
    cells: Box<[bool]>,
}

impl std::fmt::Debug for Mask {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Mask")
            .field("passing", &self.passing_count())
            .field("total", &SLICE_CELLS)
            .finish()
    }
}

impl Mask {
    /// A mask with every cell set to `value`.
    pub fn filled(value: bool) -> Self {
        Self {
            cells: vec![value; SLICE_CELLS].into_boxed_slice(),
        }
    }

    /// Build a mask from a per-cell predicate over `(g, b)`.
    pub fn from_fn(mut f: impl FnMut(u8, u8) -> bool) -> Self {
        let mut cells = Vec::with_capacity(SLICE_CELLS);
        for b in 0..SLICE_SIZE {
            for g in 0..SLICE_SIZE {
                cells.push(f(g as u8, b as u8));
            }
        }
        Self {
            cells: cells.into_boxed_slice(),
        }
    }

    #[inline]
    fn index(g: u8, b: u8) -> usize {
        b as usize * SLICE_SIZE + g as usize
    }

    /// Whether cell `(g, b)` passes.
    #[inline]
    pub fn get(&self, g: u8, b: u8) -> bool {
        self.cells[Self::index(g, b)]
    }

    /// Cells in row-major order (blue rows, green columns).
    pub fn cells(&self) -> &[bool] {
        &self.cells
    }

    /// The whole alpha plane in row-major order: 255 where a cell passes, 0
    /// where it fails.
    pub fn to_alpha(&self) -> Vec<u8> {
        self.cells
            .iter()
            .map(|&pass| if pass { ALPHA_PASS } else { ALPHA_FAIL })
            .collect()
    }

    /// Number of passing cells.
    pub fn passing_count(&self) -> usize {
        self.cells.iter().filter(|&&pass| pass).count()
    }

    /// True if every cell passes.
    pub fn is_all(&self) -> bool {
        self.cells.iter().all(|&pass| pass)
    }

    /// True if no cell passes.
    pub fn is_none(&self) -> bool {
        !self.cells.iter().any(|&pass| pass)
    }

    /// Keep only the cells that also pass in `other`.
    pub fn intersect_with(&mut self, other: &Mask) {
        for (cell, &pass) in self.cells.iter_mut().zip(other.cells.iter()) {
            *cell &= pass;
        }
    }
}

/// Elementwise AND of all masks.
///
/// Returns [`CubeError::NoMasks`] when `masks` is empty.
pub fn combine_masks<'a, I>(masks: I) -> Result<Mask>
where
    I: IntoIterator<Item = &'a Mask>,
{
    let mut iter = masks.into_iter();
    let mut combined = iter.next().ok_or(CubeError::NoMasks)?.clone();
    for mask in iter {
        combined.intersect_with(mask);
    }
    Ok(combined)
}
