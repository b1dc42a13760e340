//! WCAG Cube Viewer - interactive view of contrast-passing colors in the RGB cube.

mod app;
mod canvas;
mod state;
mod theme;
mod transform;

use app::CubeApp;

fn main() -> eframe::Result<()> {
    // Initialize logging
    tracing_subscriber::fmt()
        .with_max_level(tracing::Level::INFO)
        .init();

    // Optional starting red value
    let initial_red = match std::env::args().nth(1) {
        Some(arg) => arg.parse::<u8>().unwrap_or_else(|_| {
            tracing::warn!("Ignoring invalid red value '{}', expected 0-255", arg);
            0
        }),
        None => 0,
    };

    let options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_inner_size([1000.0, 620.0])
            .with_min_inner_size([900.0, 560.0])
            .with_title("WCAG color cube contrast tool"),
        ..Default::default()
    };

    eframe::run_native(
        "WCAG Cube Viewer",
        options,
        Box::new(move |cc| Ok(Box::new(CubeApp::new(cc, initial_red)))),
    )
}
