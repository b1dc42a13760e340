//! Main application state and eframe integration.

use egui::{CentralPanel, Context, Key, SidePanel, TopBottomPanel, Vec2};

use cube_core::{ContrastLevel, ReferenceSlot, Rgb};

use crate::canvas::{self, SliceTexture};
use crate::state::ViewerState;
use crate::theme;
use crate::transform::SliceView;

/// Main application state.
pub struct CubeApp {
    /// Parameters and the computed slice
    state: ViewerState,
    /// Uploaded slice texture
    texture: SliceTexture,
    /// Placement of the slice on screen
    view: SliceView,
    /// Slice pixel currently under the pointer
    hovered_cell: Option<(usize, usize)>,

    /// Status message
    status_message: String,
    /// Error message to display
    error_message: Option<String>,
    /// Show about dialog
    show_about_dialog: bool,
}

impl CubeApp {
    /// Create a new viewer application.
    pub fn new(cc: &eframe::CreationContext<'_>, initial_red: u8) -> Self {
        let state = ViewerState::new(initial_red);
        let mut texture = SliceTexture::default();
        if let Some(image) = state.image() {
            texture.update(&cc.egui_ctx, image);
        }

        let status_message = state
            .summary()
            .map(|s| s.to_string())
            .unwrap_or_default();

        Self {
            state,
            texture,
            view: SliceView::default(),
            hovered_cell: None,
            status_message,
            error_message: None,
            show_about_dialog: false,
        }
    }

    /// Recompute the slice after a parameter change and upload it.
    fn refresh(&mut self, ctx: &Context) {
        if !self.state.recompute_if_dirty() {
            return;
        }
        if let Some(image) = self.state.image() {
            self.texture.update(ctx, image);
        }
        if let Some(summary) = self.state.summary() {
            self.status_message = summary.to_string();
        }
    }

    /// Commit the threshold field.
    fn commit_threshold(&mut self) {
        match self.state.commit_threshold() {
            Ok(value) => tracing::info!("Contrast threshold set to {}", value),
            Err(e) => self.status_message = e.to_string(),
        }
    }

    /// Export the current slice to PNG.
    fn export_to_png(&mut self) {
        let Some(slice) = self.state.image() else {
            self.error_message = Some("Nothing to export".to_string());
            return;
        };

        let default_name = format!("slice_r{:03}.png", slice.red());
        let Some(save_path) = rfd::FileDialog::new()
            .add_filter("PNG Image", &["png"])
            .set_file_name(&default_name)
            .save_file()
        else {
            return;
        };

        let scale = self.view.scale.round().max(1.0) as u32;
        let result = slice
            .scaled_size(scale)
            .and_then(|size| slice.upscale(scale).map(|pixels| (size, pixels)))
            .map_err(|e| e.to_string())
            .and_then(|(size, pixels)| {
                image::RgbaImage::from_raw(size, size, pixels)
                    .ok_or_else(|| "Image buffer size mismatch".to_string())
            })
            .and_then(|img| img.save(&save_path).map_err(|e| e.to_string()));

        match result {
            Ok(()) => {
                self.status_message = format!("Exported to {}", save_path.display());
                tracing::info!("Exported PNG to {}", save_path.display());
            }
            Err(e) => {
                self.error_message = Some(format!("Failed to save PNG: {}", e));
                tracing::error!("Failed to save PNG: {}", e);
            }
        }
    }

    /// Render the menu bar.
    fn render_menu(&mut self, ctx: &Context) {
        TopBottomPanel::top("menu_bar").show(ctx, |ui| {
            egui::menu::bar(ui, |ui| {
                ui.menu_button("File", |ui| {
                    if ui.button("Export PNG... (Ctrl+E)").clicked() {
                        self.export_to_png();
                        ui.close_menu();
                    }
                    ui.separator();
                    if ui.button("Quit (Ctrl+Q)").clicked() {
                        ctx.send_viewport_cmd(egui::ViewportCommand::Close);
                    }
                });

                ui.menu_button("View", |ui| {
                    for scale in [1.0, 2.0, 3.0, 4.0] {
                        if ui.button(format!("{}x", scale)).clicked() {
                            self.view.set_scale(scale);
                            ui.close_menu();
                        }
                    }
                });

                ui.menu_button("Help", |ui| {
                    if ui.button("About").clicked() {
                        self.show_about_dialog = true;
                        ui.close_menu();
                    }
                });
            });
        });
    }

    /// Render the controls panel.
    fn render_controls(&mut self, ctx: &Context) {
        SidePanel::right("controls")
            .resizable(false)
            .min_width(420.0)
            .show(ctx, |ui| {
                ui.add_space(8.0);

                // Red slider
                ui.horizontal(|ui| {
                    ui.label("Red value:");
                    let mut red = self.state.params.red;
                    if ui.add(egui::Slider::new(&mut red, 0..=255)).changed() {
                        self.state.set_red(red);
                    }
                });

                // Threshold
                ui.horizontal(|ui| {
                    ui.label("Contrast ratio threshold:");
                    let response = ui.add(
                        egui::TextEdit::singleline(&mut self.state.threshold_input)
                            .desired_width(80.0),
                    );
                    if response.lost_focus() && ui.input(|i| i.key_pressed(Key::Enter)) {
                        self.commit_threshold();
                    }
                });

                ui.horizontal(|ui| {
                    for level in ContrastLevel::ALL {
                        let text = format!("{} ({})", level, level.min_contrast());
                        if ui.small_button(text).clicked() {
                            self.state.apply_level(level);
                        }
                    }
                });

                ui.separator();

                // Hover readout
                match self.state.hovered() {
                    Some([r, g, b, a]) => {
                        ui.label(format!("Hovered RGB: ({}, {}, {}, {})", r, g, b, a))
                    }
                    None => ui.colored_label(theme::DIM_TEXT, "Hovered RGB: "),
                };
                self.render_probe(ui);

                ui.separator();

                // Reference colors
                let swatch = self
                    .state
                    .hovered()
                    .map(|[r, g, b, _]| egui::Color32::from_rgb(r, g, b))
                    .unwrap_or(theme::PREVIEW_DEFAULT);

                egui::Grid::new("references_grid")
                    .num_columns(4)
                    .spacing([8.0, 6.0])
                    .show(ui, |ui| {
                        let slots = *self.state.references.slots();
                        for (index, slot) in slots.into_iter().enumerate() {
                            self.render_reference_row(ui, index, slot, swatch);
                            ui.end_row();
                        }
                    });
            });
    }

    /// One reference color row: picker, toggle and previews.
    fn render_reference_row(
        &mut self,
        ui: &mut egui::Ui,
        index: usize,
        slot: ReferenceSlot,
        swatch: egui::Color32,
    ) {
        let mut rgb = slot.color.to_array();
        ui.horizontal(|ui| {
            ui.label(format!("Color {}", index + 1));
            if ui.color_edit_button_srgb(&mut rgb).changed() {
                self.state.set_reference_color(index, Rgb::from(rgb));
            }
        });

        if index == 0 {
            ui.label("");
        } else {
            let mut enabled = slot.enabled;
            if ui.checkbox(&mut enabled, "").changed() {
                self.state.set_reference_enabled(index, enabled);
            }
        }

        canvas::preview_pair(ui, slot.color, swatch);
    }

    /// Contrast of the hovered cell against each active reference.
    fn render_probe(&self, ui: &mut egui::Ui) {
        let Some(probe) = self.state.hovered_probe() else {
            return;
        };
        let min_contrast = self.state.params.min_contrast;

        ui.label(format!("Luminance: {:.4}", probe.luminance));
        for contrast in &probe.ratios {
            let color = if contrast.ratio >= min_contrast {
                theme::PASS_TEXT
            } else {
                theme::FAIL_TEXT
            };
            ui.colored_label(
                color,
                format!("vs {}: {:.2}:1", contrast.reference, contrast.ratio),
            );
        }
    }

    /// Render the status bar.
    fn render_status_bar(&mut self, ctx: &Context) {
        TopBottomPanel::bottom("status_bar").show(ctx, |ui| {
            ui.horizontal(|ui| {
                ui.label(&self.status_message);
            });
        });
    }

    /// Render the slice canvas.
    fn render_canvas(&mut self, ctx: &Context) {
        CentralPanel::default()
            .frame(egui::Frame::none().fill(theme::CANVAS_BG))
            .show(ctx, |ui| {
                let size = Vec2::splat(self.view.display_size());
                let (rect, response) = ui.allocate_exact_size(size, egui::Sense::hover());
                self.view.origin = rect.min;

                let painter = ui.painter_at(rect.expand(4.0));
                self.texture.paint(&painter, &self.view);

                self.hovered_cell = response
                    .hover_pos()
                    .and_then(|pos| self.view.screen_to_cell(pos));

                if let Some((x, y)) = self.hovered_cell {
                    self.state.hover(x, y);
                    canvas::paint_hover(&painter, &self.view, x, y);
                }
            });
    }

    /// Handle keyboard shortcuts.
    fn handle_keyboard(&mut self, ctx: &Context) {
        let typing = ctx.wants_keyboard_input();
        let mut export = false;
        let mut quit = false;

        ctx.input(|i| {
            // Ctrl+Q: Quit
            if i.modifiers.ctrl && i.key_pressed(Key::Q) {
                quit = true;
            }

            // Ctrl+E: Export PNG
            if i.modifiers.ctrl && i.key_pressed(Key::E) {
                export = true;
            }

            // Left/Right: step red, Shift for larger steps
            if !typing {
                let step = if i.modifiers.shift { 16 } else { 1 };
                if i.key_pressed(Key::ArrowLeft) {
                    self.state.step_red(-step);
                }
                if i.key_pressed(Key::ArrowRight) {
                    self.state.step_red(step);
                }
            }

            // Escape: close dialogs
            if i.key_pressed(Key::Escape) {
                self.show_about_dialog = false;
                self.error_message = None;
            }
        });

        // Viewport commands and the file dialog must not run inside the input lock
        if quit {
            ctx.send_viewport_cmd(egui::ViewportCommand::Close);
        }
        if export {
            self.export_to_png();
        }
    }

    /// Show error dialog if there's an error.
    fn show_error_dialog(&mut self, ctx: &Context) {
        if let Some(error) = self.error_message.clone() {
            egui::Window::new("Error")
                .collapsible(false)
                .resizable(false)
                .anchor(egui::Align2::CENTER_CENTER, Vec2::ZERO)
                .show(ctx, |ui| {
                    ui.label(&error);
                    ui.separator();
                    if ui.button("OK").clicked() {
                        self.error_message = None;
                    }
                });
        }
    }

    /// Show about dialog.
    fn show_about(&mut self, ctx: &Context) {
        if !self.show_about_dialog {
            return;
        }

        egui::Window::new("About WCAG Cube Viewer")
            .collapsible(false)
            .resizable(false)
            .anchor(egui::Align2::CENTER_CENTER, Vec2::ZERO)
            .show(ctx, |ui| {
                ui.heading("WCAG Cube Viewer");
                ui.label(format!("Version {}", env!("CARGO_PKG_VERSION")));
                ui.separator();
                ui.label("Shows which colors of a red slice of the RGB cube");
                ui.label("reach the contrast threshold against the chosen colors.");
                ui.label("Failing colors are transparent.");
                ui.separator();
                if ui.button("Close").clicked() {
                    self.show_about_dialog = false;
                }
            });
    }
}

impl eframe::App for CubeApp {
    fn update(&mut self, ctx: &Context, _frame: &mut eframe::Frame) {
        self.handle_keyboard(ctx);
        self.render_menu(ctx);
        self.render_controls(ctx);
        // Recompute before the status bar and canvas read the slice
        self.refresh(ctx);
        self.render_status_bar(ctx);
        self.render_canvas(ctx);
        self.show_error_dialog(ctx);
        self.show_about(ctx);
    }
}
