//! Mapping between screen coordinates and slice pixels.

use egui::{Pos2, Rect, Vec2};

use cube_core::config::SLICE_SIZE;

/// Placement of the slice on screen.
#[derive(Debug, Clone, Copy)]
pub struct SliceView {
    /// Top-left corner of the slice on screen
    pub origin: Pos2,
    /// Screen pixels per slice pixel
    pub scale: f32,
}

impl Default for SliceView {
    fn default() -> Self {
        Self {
            origin: Pos2::ZERO,
            scale: cube_core::config::DEFAULT_SCALE as f32,
        }
    }
}

impl SliceView {
    /// Smallest display scale
    pub const MIN_SCALE: f32 = 1.0;
    /// Largest display scale
    pub const MAX_SCALE: f32 = 4.0;

    /// Side length of the displayed slice in screen pixels.
    pub fn display_size(&self) -> f32 {
        SLICE_SIZE as f32 * self.scale
    }

    /// Screen rectangle covered by the slice.
    pub fn rect(&self) -> Rect {
        Rect::from_min_size(self.origin, Vec2::splat(self.display_size()))
    }

    /// Slice pixel `(x, y)` under a screen position, if any.
    ///
    /// `x` is the green value and `y` the blue value of the cell.
    pub fn screen_to_cell(&self, screen_pos: Pos2) -> Option<(usize, usize)> {
        let local = (screen_pos - self.origin) / self.scale;
        if local.x < 0.0 || local.y < 0.0 {
            return None;
        }
        let (x, y) = (local.x as usize, local.y as usize);
        (x < SLICE_SIZE && y < SLICE_SIZE).then_some((x, y))
    }

    /// Screen rectangle of slice pixel `(x, y)`.
    pub fn cell_rect(&self, x: usize, y: usize) -> Rect {
        let min = self.origin + Vec2::new(x as f32, y as f32) * self.scale;
        Rect::from_min_size(min, Vec2::splat(self.scale))
    }

    /// Set the scale, clamped to the allowed range.
    pub fn set_scale(&mut self, scale: f32) {
        self.scale = scale.clamp(Self::MIN_SCALE, Self::MAX_SCALE);
    }
}
