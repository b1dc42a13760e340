//! cube-core - WCAG contrast masks over slices of the RGB color cube.
//!
//! For a fixed red value, the 256x256 green/blue plane of the cube is checked
//! against one to three reference colors. A cell passes when its WCAG contrast
//! ratio against every active reference reaches the threshold.
//!
//! # Example
//!
//! ```
//! use cube_core::{ContrastEngine, Rgb};
//!
//! let engine = ContrastEngine::new();
//! let mask = engine.compute_slice(255, 3.0, Rgb::BLACK);
//! assert!(mask.get(0, 0)); // pure red on black is about 5.25:1
//! ```

pub mod config;
pub mod engine;
pub mod error;
pub mod model;
pub mod raster;
pub mod summary;

// Re-exports for convenience
pub use config::{ContrastLevel, SliceParams};
pub use engine::{
    combine_masks, contrast_ratio, relative_luminance, CellProbe, ContrastEngine, Mask,
};
pub use error::{CubeError, Result};
pub use model::{ReferenceSet, ReferenceSlot, Rgb};
pub use raster::SliceImage;
pub use summary::SliceSummary;

/// Compute and render one slice.
///
/// This is the full pipeline a front end runs on every parameter change:
/// 1. Build the combined mask for the active references
/// 2. Render the slice with the mask as alpha
/// 3. Summarize the result
pub fn render_slice(
    engine: &ContrastEngine,
    params: &SliceParams,
    references: &ReferenceSet,
) -> Result<(SliceImage, SliceSummary)> {
    let mask = engine.compute_references(params.red, params.min_contrast, references)?;
    let summary = SliceSummary::new(params.red, params.min_contrast, references, &mask);
    tracing::debug!("{}", summary);
    Ok((SliceImage::new(params.red, &mask), summary))
}
