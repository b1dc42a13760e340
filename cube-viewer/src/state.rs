//! Viewer state that does not depend on egui: parameters, references and the
//! last computed slice.

use cube_core::{
    render_slice, CellProbe, ContrastEngine, ContrastLevel, ReferenceSet, Rgb, SliceImage,
    SliceParams, SliceSummary,
};

/// Parameters, references and the slice computed from them.
pub struct ViewerState {
    engine: ContrastEngine,
    /// Red value and threshold in effect
    pub params: SliceParams,
    /// Contents of the threshold text field
    pub threshold_input: String,
    /// Reference colors and their toggles
    pub references: ReferenceSet,
    /// Last rendered slice
    image: Option<SliceImage>,
    /// Summary of the last rendered slice
    summary: Option<SliceSummary>,
    /// Raw RGBA of the last hovered cell
    hovered: Option<[u8; 4]>,
    /// Set whenever a parameter changes
    dirty: bool,
}

impl ViewerState {
    /// Create state for a starting red value and compute the first slice.
    pub fn new(red: u8) -> Self {
        let params = SliceParams {
            red,
            ..Default::default()
        };
        let mut state = Self {
            engine: ContrastEngine::new(),
            threshold_input: params.min_contrast.to_string(),
            params,
            references: ReferenceSet::default(),
            image: None,
            summary: None,
            hovered: None,
            dirty: true,
        };
        state.recompute_if_dirty();
        state
    }

    /// Change the red value.
    pub fn set_red(&mut self, red: u8) {
        if self.params.red != red {
            self.params.red = red;
            self.dirty = true;
        }
    }

    /// Step the red value by `delta`, saturating at 0 and 255.
    pub fn step_red(&mut self, delta: i16) {
        let red = (self.params.red as i16 + delta).clamp(0, 255) as u8;
        self.set_red(red);
    }

    /// Commit the threshold text field.
    ///
    /// Invalid text leaves the previous threshold in effect and restores the
    /// field to it.
    pub fn commit_threshold(&mut self) -> Result<f64, cube_core::CubeError> {
        match self.params.apply_threshold_input(&self.threshold_input) {
            Ok(value) => {
                self.dirty = true;
                Ok(value)
            }
            Err(e) => {
                self.threshold_input = self.params.min_contrast.to_string();
                Err(e)
            }
        }
    }

    /// Switch to a WCAG level preset.
    pub fn apply_level(&mut self, level: ContrastLevel) {
        self.params.min_contrast = level.min_contrast();
        self.threshold_input = self.params.min_contrast.to_string();
        self.dirty = true;
    }

    /// Replace a reference color.
    pub fn set_reference_color(&mut self, index: usize, color: Rgb) {
        match self.references.set_color(index, color) {
            Ok(()) => self.dirty = true,
            Err(e) => tracing::error!("{}", e),
        }
    }

    /// Toggle a secondary reference color.
    pub fn set_reference_enabled(&mut self, index: usize, enabled: bool) {
        match self.references.set_enabled(index, enabled) {
            Ok(()) => self.dirty = true,
            Err(e) => tracing::error!("{}", e),
        }
    }

    /// Recompute the slice if anything changed. Returns true if it did.
    pub fn recompute_if_dirty(&mut self) -> bool {
        if !self.dirty {
            return false;
        }
        self.dirty = false;

        match render_slice(&self.engine, &self.params, &self.references) {
            Ok((image, summary)) => {
                self.image = Some(image);
                self.summary = Some(summary);
                true
            }
            Err(e) => {
                tracing::error!("Failed to compute slice: {}", e);
                false
            }
        }
    }

    /// The last rendered slice.
    pub fn image(&self) -> Option<&SliceImage> {
        self.image.as_ref()
    }

    /// Summary of the last rendered slice.
    pub fn summary(&self) -> Option<&SliceSummary> {
        self.summary.as_ref()
    }

    /// Record the pointer over slice pixel `(x, y)`.
    pub fn hover(&mut self, x: usize, y: usize) {
        if let Some(pixel) = self.image.as_ref().and_then(|img| img.pixel(x, y)) {
            self.hovered = Some(pixel);
        }
    }

    /// Raw RGBA of the last hovered cell.
    pub fn hovered(&self) -> Option<[u8; 4]> {
        self.hovered
    }

    /// Contrast details for the last hovered cell.
    pub fn hovered_probe(&self) -> Option<CellProbe> {
        let [r, g, b, _] = self.hovered?;
        Some(self.engine.probe(r, g, b, &self.references))
    }
}
