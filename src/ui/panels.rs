use eframe::egui::{self, Color32, RichText, Ui};

use crate::state::AppState;

// ---------------------------------------------------------------------------
// Left side panel – view toggles
// ---------------------------------------------------------------------------

/// Render the left menu panel: one checkbox per dashboard view.
pub fn side_panel(ui: &mut Ui, state: &mut AppState) {
    ui.heading("Menu");
    ui.separator();

    if state.dataset.is_none() {
        ui.label("No dataset loaded.");
        ui.label("File → Open data folder…");
        return;
    }

    let views = &mut state.views;
    ui.checkbox(&mut views.data_info, "Data Information");
    ui.checkbox(&mut views.gender, "Gender Representation");
    ui.checkbox(&mut views.yearly_totals, "Participants: Yearly Total");
    ui.checkbox(&mut views.country_totals, "Participants: Country Total");
    ui.checkbox(&mut views.medals_by_country, "Medals Won: Country");
    ui.checkbox(&mut views.medals_by_sport, "Medals Won: Sports");
    ui.separator();
    ui.checkbox(&mut views.prediction, "Medal Prediction");
}

// ---------------------------------------------------------------------------
// Top bar
// ---------------------------------------------------------------------------

/// Render the top menu / toolbar.
pub fn top_bar(ui: &mut Ui, state: &mut AppState) {
    egui::menu::bar(ui, |ui: &mut Ui| {
        ui.menu_button("File", |ui: &mut Ui| {
            if ui.button("Open data folder…").clicked() {
                open_folder_dialog(state);
                ui.close_menu();
            }
        });

        ui.separator();

        if let Some(ds) = &state.dataset {
            ui.label(format!(
                "{} participations, {} regions, {} sports",
                ds.len(),
                ds.regions.len(),
                ds.sports.len()
            ));
        }

        if let Some(msg) = &state.status_message {
            ui.separator();
            ui.label(RichText::new(msg).color(Color32::RED));
        }
    });
}

// ---------------------------------------------------------------------------
// Folder dialog
// ---------------------------------------------------------------------------

pub fn open_folder_dialog(state: &mut AppState) {
    let folder = rfd::FileDialog::new()
        .set_title("Open a folder containing athlete_events.csv and noc_regions.csv")
        .pick_folder();

    if let Some(dir) = folder {
        match crate::data::loader::load_dataset(&dir) {
            Ok(dataset) => {
                log::info!(
                    "Loaded {} participations from {}",
                    dataset.len(),
                    dir.display()
                );
                state.data_dir = dir;
                state.set_dataset(dataset);
            }
            Err(e) => {
                log::error!("Failed to load dataset: {e:#}");
                state.status_message = Some(format!("Error: {e:#}"));
            }
        }
    }
}
