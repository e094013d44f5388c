use std::path::PathBuf;

use crate::data::model::OlympicDataset;
use crate::predict::{MedalPredictor, Subject, MODEL_FILE};

// ---------------------------------------------------------------------------
// View toggles
// ---------------------------------------------------------------------------

/// Which dashboard views are enabled, one checkbox each.
#[derive(Debug, Clone, Copy, Default)]
pub struct ViewToggles {
    pub data_info: bool,
    pub gender: bool,
    pub yearly_totals: bool,
    pub country_totals: bool,
    pub medals_by_country: bool,
    pub medals_by_sport: bool,
    pub prediction: bool,
}

// ---------------------------------------------------------------------------
// Prediction form
// ---------------------------------------------------------------------------

/// Input state for one prediction subject plus its last result text.
#[derive(Debug, Clone)]
pub struct PredictionForm {
    pub sex: String,
    pub age: f64,
    pub height: f64,
    pub weight: f64,
    pub sport: String,
    pub region: String,
    pub result: Option<String>,
}

impl Default for PredictionForm {
    fn default() -> Self {
        Self {
            sex: "M".to_string(),
            age: 25.0,
            height: 175.0,
            weight: 70.0,
            sport: String::new(),
            region: String::new(),
            result: None,
        }
    }
}

impl PredictionForm {
    pub fn subject(&self) -> Subject {
        Subject {
            sex: self.sex.clone(),
            age: self.age,
            height: self.height,
            weight: self.weight,
            sport: self.sport.clone(),
            region: self.region.clone(),
        }
    }
}

// ---------------------------------------------------------------------------
// Application state
// ---------------------------------------------------------------------------

/// The full UI state, independent of rendering.
pub struct AppState {
    /// Loaded unified dataset (None until a data directory loads).
    pub dataset: Option<OlympicDataset>,

    /// Directory the dataset (and model artifact) were loaded from.
    pub data_dir: PathBuf,

    /// Per-view checkbox state.
    pub views: ViewToggles,

    /// Loaded model handle; None until the prediction view first needs it.
    pub predictor: Option<MedalPredictor>,

    /// Load failure for the model artifact; disables the prediction view
    /// only, the other views stay usable.
    pub predictor_error: Option<String>,

    /// The two independent prediction subjects.
    pub forms: [PredictionForm; 2],

    /// Status / error message shown in the UI.
    pub status_message: Option<String>,
}

impl Default for AppState {
    fn default() -> Self {
        Self {
            dataset: None,
            data_dir: PathBuf::from("Data"),
            views: ViewToggles::default(),
            predictor: None,
            predictor_error: None,
            forms: [PredictionForm::default(), PredictionForm::default()],
            status_message: None,
        }
    }
}

impl AppState {
    /// Ingest a newly loaded dataset and seed the prediction forms with the
    /// first available categorical values.
    pub fn set_dataset(&mut self, dataset: OlympicDataset) {
        for form in &mut self.forms {
            form.sport = dataset.sports.first().cloned().unwrap_or_default();
            form.region = dataset.regions.first().cloned().unwrap_or_default();
            form.result = None;
        }
        // A new data directory may carry a different artifact.
        self.predictor = None;
        self.predictor_error = None;
        self.dataset = Some(dataset);
        self.status_message = None;
    }

    /// Make sure the model artifact is loaded (or its failure recorded).
    /// Called lazily the first time the prediction view renders.
    pub fn ensure_predictor(&mut self) {
        if self.predictor.is_some() || self.predictor_error.is_some() {
            return;
        }
        let path = self.data_dir.join(MODEL_FILE);
        match MedalPredictor::load(&path) {
            Ok(predictor) => {
                log::info!("Loaded model artifact from {}", path.display());
                self.predictor = Some(predictor);
            }
            Err(e) => {
                log::error!("Failed to load model artifact: {e}");
                self.predictor_error = Some(e.to_string());
            }
        }
    }

    /// Run the model for one of the two subjects and store the result text.
    pub fn run_prediction(&mut self, form_idx: usize) {
        let Some(predictor) = &self.predictor else {
            return;
        };
        let subject = self.forms[form_idx].subject();
        self.forms[form_idx].result = Some(match predictor.predict(&subject) {
            Ok(label) => format!(
                "Predicted label {:.2} (≈ {})",
                label,
                crate::predict::medal_label(label)
            ),
            Err(e) => format!("Error: {e}"),
        });
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::data::model::{OlympicDataset, Participation, Sex};

    #[test]
    fn set_dataset_seeds_forms_and_resets_predictor_state() {
        let rec = Participation {
            id: 1,
            name: String::new(),
            sex: Some(Sex::Female),
            age: None,
            height: None,
            weight: None,
            team: String::new(),
            noc: "FRA".to_string(),
            games: None,
            year: Some(1996),
            season: "Summer".to_string(),
            city: String::new(),
            sport: "Fencing".to_string(),
            event: String::new(),
            medal: None,
            region: Some("France".to_string()),
            notes: None,
        };

        let mut state = AppState::default();
        state.predictor_error = Some("stale".to_string());
        state.set_dataset(OlympicDataset::from_records(vec![rec]));

        assert_eq!(state.forms[0].sport, "Fencing");
        assert_eq!(state.forms[1].region, "France");
        assert!(state.predictor_error.is_none());
        assert!(state.dataset.is_some());
    }
}
