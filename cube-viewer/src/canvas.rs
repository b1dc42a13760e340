//! Canvas rendering for the slice and the preview swatches.

use egui::{
    Color32, ColorImage, Context, FontId, Painter, Pos2, Rect, RichText, Stroke, TextureHandle,
    TextureOptions, Ui,
};

use cube_core::{Rgb, SliceImage};

use crate::theme;
use crate::transform::SliceView;

/// GPU texture holding the current slice.
///
/// Sampled with nearest filtering so each slice pixel is replicated as a
/// solid block at any display scale.
#[derive(Default)]
pub struct SliceTexture {
    handle: Option<TextureHandle>,
}

impl SliceTexture {
    /// Upload a new slice, replacing the previous one.
    pub fn update(&mut self, ctx: &Context, image: &SliceImage) {
        let size = image.size();
        let color_image = ColorImage::from_rgba_unmultiplied([size, size], image.as_rgba());

        match &mut self.handle {
            Some(handle) => handle.set(color_image, TextureOptions::NEAREST),
            None => {
                self.handle = Some(ctx.load_texture("slice", color_image, TextureOptions::NEAREST))
            }
        }
    }

    /// Draw the slice with failing cells transparent.
    pub fn paint(&self, painter: &Painter, view: &SliceView) {
        let rect = view.rect();
        if let Some(handle) = &self.handle {
            let uv = Rect::from_min_max(Pos2::ZERO, Pos2::new(1.0, 1.0));
            painter.image(handle.id(), rect, uv, Color32::WHITE);
        }
        painter.rect_stroke(
            rect.expand(theme::SLICE_STROKE_WIDTH),
            0.0,
            Stroke::new(theme::SLICE_STROKE_WIDTH, theme::SLICE_BORDER),
        );
    }
}

/// Outline the hovered cell.
pub fn paint_hover(painter: &Painter, view: &SliceView, x: usize, y: usize) {
    let rect = view.cell_rect(x, y).expand(theme::HOVER_STROKE_WIDTH);
    painter.rect_stroke(
        rect,
        0.0,
        Stroke::new(theme::HOVER_STROKE_WIDTH, theme::HOVER_OUTLINE),
    );
}

/// Convert a reference color for egui.
pub fn to_color32(color: Rgb) -> Color32 {
    Color32::from_rgb(color.r, color.g, color.b)
}

/// Two preview labels: `reference` text on `swatch`, and `swatch` text on
/// `reference`.
pub fn preview_pair(ui: &mut Ui, reference: Rgb, swatch: Color32) {
    let reference = to_color32(reference);
    let font = FontId::proportional(theme::PREVIEW_FONT_SIZE);

    ui.label(
        RichText::new(theme::PREVIEW_TEXT)
            .font(font.clone())
            .color(reference)
            .background_color(swatch),
    );
    ui.label(
        RichText::new(theme::PREVIEW_TEXT)
            .font(font)
            .color(swatch)
            .background_color(reference),
    );
}
