//! Entry point for the egui-based BreedLens UI.

use breedlens::config::{self, AppConfig};
use breedlens::egui_app::ui::{BreedLensApp, MIN_VIEWPORT_SIZE};
use breedlens::logging;
use eframe::egui;

fn main() -> Result<(), Box<dyn std::error::Error>> {
    if let Err(err) = logging::init() {
        eprintln!("Logging disabled: {err}");
    }

    let settings = match config::load_or_default() {
        Ok(settings) => settings,
        Err(err) => {
            tracing::warn!("Config unavailable ({err}); using defaults");
            AppConfig::default()
        }
    };

    let viewport = egui::ViewportBuilder::default()
        .with_inner_size(egui::vec2(520.0, 760.0))
        .with_min_inner_size(MIN_VIEWPORT_SIZE)
        .with_drag_and_drop(true);
    let native_options = eframe::NativeOptions {
        viewport,
        ..Default::default()
    };

    eframe::run_native(
        "BreedLens",
        native_options,
        Box::new(move |_cc| Ok(Box::new(BreedLensApp::new(settings)))),
    )?;
    Ok(())
}
