mod app;
mod color;
mod data;
mod state;
mod ui;

use std::path::Path;

use app::FuelBoardApp;
use eframe::egui;
use state::AppState;

/// Dataset the dashboard opens automatically when present in the working
/// directory.
const DEFAULT_DATASET: &str = "ship_fuel_efficiency.csv";

fn main() -> eframe::Result {
    env_logger::init();

    let mut state = AppState::default();
    let default_path = Path::new(DEFAULT_DATASET);
    if default_path.exists() {
        ui::panels::load_into_state(default_path, &mut state);
    } else {
        log::info!("{DEFAULT_DATASET} not found, waiting for File → Open…");
    }

    let options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_inner_size([1280.0, 820.0])
            .with_min_inner_size([700.0, 480.0]),
        ..Default::default()
    };

    eframe::run_native(
        "Fuel & CO₂ Dashboard",
        options,
        Box::new(|_cc| Ok(Box::new(FuelBoardApp::new(state)))),
    )
}
