//! Color palette and styling constants for the viewer.
//!
//! The slice itself carries all the color; the chrome stays neutral grey so
//! it does not bias the eye when judging contrast.

use egui::Color32;

// =============================================================================
// BACKGROUND
// =============================================================================
pub const CANVAS_BG: Color32 = Color32::from_rgb(32, 34, 37);

// =============================================================================
// SLICE
// =============================================================================
pub const SLICE_BORDER: Color32 = Color32::from_rgb(100, 105, 110);
pub const HOVER_OUTLINE: Color32 = Color32::from_rgb(240, 240, 240);

// =============================================================================
// TEXT
// =============================================================================
pub const DIM_TEXT: Color32 = Color32::from_rgb(140, 145, 150);
pub const PASS_TEXT: Color32 = Color32::from_rgb(110, 200, 120);
pub const FAIL_TEXT: Color32 = Color32::from_rgb(230, 100, 90);

// =============================================================================
// PREVIEW
// =============================================================================
/// Swatch color used until a cell has been hovered
pub const PREVIEW_DEFAULT: Color32 = Color32::from_rgb(0, 0, 0);
pub const PREVIEW_TEXT: &str = "Hello World";
pub const PREVIEW_FONT_SIZE: f32 = 16.0;

// =============================================================================
// STROKE WIDTHS
// =============================================================================
pub const SLICE_STROKE_WIDTH: f32 = 1.0;
pub const HOVER_STROKE_WIDTH: f32 = 1.5;
