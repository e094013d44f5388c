mod app;
mod color;
mod data;
mod predict;
mod state;
mod ui;

use app::OlympicLensApp;
use eframe::egui;
use state::AppState;

fn main() -> eframe::Result {
    env_logger::init();

    // Load once at startup if the conventional data directory is present;
    // otherwise the user picks a folder from the File menu.
    let mut state = AppState::default();
    let data_dir = state.data_dir.clone();
    if data_dir.join(data::loader::ATHLETES_FILE).exists() {
        match data::loader::load_dataset(&data_dir) {
            Ok(dataset) => {
                log::info!("Loaded {} participations from {}", dataset.len(), data_dir.display());
                state.set_dataset(dataset);
            }
            Err(e) => {
                log::error!("Failed to load dataset: {e:#}");
                state.status_message = Some(format!("Error: {e:#}"));
            }
        }
    }

    let options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_inner_size([1200.0, 800.0])
            .with_min_inner_size([600.0, 400.0]),
        ..Default::default()
    };

    eframe::run_native(
        "Olympic Lens – Historical Dashboard",
        options,
        Box::new(|_cc| Ok(Box::new(OlympicLensApp::new(state)))),
    )
}
