use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};
use smartcore::linalg::basic::matrix::DenseMatrix;
use smartcore::linear::linear_regression::LinearRegression;
use thiserror::Error;

// ---------------------------------------------------------------------------
// Errors
// ---------------------------------------------------------------------------

#[derive(Debug, Error)]
pub enum PredictError {
    /// The serialized model artifact does not exist.  Only the prediction
    /// view is affected; the rest of the dashboard stays usable.
    #[error("model artifact not found: {0}")]
    ModelNotFound(PathBuf),
    #[error("reading model artifact: {0}")]
    Io(#[from] std::io::Error),
    #[error("parsing model artifact: {0}")]
    Artifact(#[from] serde_json::Error),
    /// A categorical level the model was never trained on.  Propagated
    /// as-is; there is no local fallback.
    #[error("unknown {column} level: '{value}'")]
    UnknownLevel { column: &'static str, value: String },
    #[error("model inference failed: {0}")]
    Inference(String),
}

// ---------------------------------------------------------------------------
// Model artifact
// ---------------------------------------------------------------------------

/// Default artifact file name inside the data directory.
pub const MODEL_FILE: &str = "medal_model.json";

/// The serialized form of the pre-trained regression model: the fitted
/// model plus the categorical vocabularies it was trained with, in the
/// encoding order used at training time.
#[derive(Debug, Serialize, Deserialize)]
pub struct ModelArtifact {
    pub sex_levels: Vec<String>,
    pub sport_levels: Vec<String>,
    pub region_levels: Vec<String>,
    pub model: LinearRegression<f64, f64, DenseMatrix<f64>, Vec<f64>>,
}

/// One prediction subject as entered in the form.
#[derive(Debug, Clone, PartialEq)]
pub struct Subject {
    pub sex: String,
    pub age: f64,
    pub height: f64,
    pub weight: f64,
    pub sport: String,
    pub region: String,
}

// ---------------------------------------------------------------------------
// Predictor
// ---------------------------------------------------------------------------

/// Pass-through adapter around the loaded model handle.  Holds no state of
/// its own beyond the artifact.
#[derive(Debug)]
pub struct MedalPredictor {
    artifact: ModelArtifact,
}

impl MedalPredictor {
    /// Load a previously trained artifact by path.
    pub fn load(path: &Path) -> Result<Self, PredictError> {
        if !path.exists() {
            return Err(PredictError::ModelNotFound(path.to_path_buf()));
        }
        let file = std::fs::File::open(path)?;
        let artifact: ModelArtifact = serde_json::from_reader(std::io::BufReader::new(file))?;
        Ok(MedalPredictor { artifact })
    }

    /// Predict the medal label for exactly one subject, returning the first
    /// prediction.  Deterministic for a fixed artifact.
    pub fn predict(&self, subject: &Subject) -> Result<f64, PredictError> {
        let row = [
            encode_level(&self.artifact.sex_levels, "sex", &subject.sex)?,
            subject.age,
            subject.height,
            subject.weight,
            encode_level(&self.artifact.sport_levels, "sport", &subject.sport)?,
            encode_level(&self.artifact.region_levels, "region", &subject.region)?,
        ];
        let features = DenseMatrix::from_2d_array(&[&row]);
        let predictions = self
            .artifact
            .model
            .predict(&features)
            .map_err(|e| PredictError::Inference(e.to_string()))?;
        predictions
            .first()
            .copied()
            .ok_or_else(|| PredictError::Inference("empty prediction".to_string()))
    }
}

fn encode_level(
    levels: &[String],
    column: &'static str,
    value: &str,
) -> Result<f64, PredictError> {
    levels
        .iter()
        .position(|l| l == value)
        .map(|i| i as f64)
        .ok_or_else(|| PredictError::UnknownLevel {
            column,
            value: value.to_string(),
        })
}

/// Informational mapping of the numeric label to a medal name.  The
/// 1 = gold / 2 = silver / 3 = bronze scale is asserted by the training
/// pipeline but never validated here, so treat the text as a hint.
pub fn medal_label(value: f64) -> &'static str {
    match value.round() as i64 {
        i64::MIN..=1 => "Gold",
        2 => "Silver",
        _ => "Bronze",
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use smartcore::linear::linear_regression::LinearRegressionParameters;
    use std::fs;

    fn tiny_artifact() -> ModelArtifact {
        // Six features per row: sex, age, height, weight, sport, region.
        let x = DenseMatrix::from_2d_array(&[
            &[0.0, 24.0, 170.0, 60.0, 0.0, 0.0],
            &[1.0, 25.0, 180.0, 75.0, 0.0, 1.0],
            &[0.0, 30.0, 165.0, 55.0, 1.0, 0.0],
            &[1.0, 28.0, 185.0, 80.0, 1.0, 1.0],
            &[0.0, 22.0, 175.0, 65.0, 0.0, 1.0],
            &[1.0, 35.0, 190.0, 90.0, 1.0, 0.0],
            &[0.0, 27.0, 160.0, 50.0, 1.0, 1.0],
            &[1.0, 21.0, 178.0, 70.0, 0.0, 0.0],
        ]);
        let y = vec![1.0, 2.0, 3.0, 1.0, 2.0, 3.0, 1.0, 2.0];
        let model =
            LinearRegression::fit(&x, &y, LinearRegressionParameters::default()).unwrap();
        ModelArtifact {
            sex_levels: vec!["F".to_string(), "M".to_string()],
            sport_levels: vec!["Judo".to_string(), "Fencing".to_string()],
            region_levels: vec!["Sweden".to_string(), "France".to_string()],
            model,
        }
    }

    fn subject() -> Subject {
        Subject {
            sex: "M".to_string(),
            age: 26.0,
            height: 182.0,
            weight: 78.0,
            sport: "Judo".to_string(),
            region: "France".to_string(),
        }
    }

    fn write_artifact(name: &str) -> std::path::PathBuf {
        let path = std::env::temp_dir()
            .join(format!("olympic-lens-{}-{}.json", name, std::process::id()));
        let json = serde_json::to_string(&tiny_artifact()).unwrap();
        fs::write(&path, json).unwrap();
        path
    }

    #[test]
    fn missing_artifact_is_model_not_found() {
        let path = std::env::temp_dir().join("olympic-lens-does-not-exist.json");
        match MedalPredictor::load(&path) {
            Err(PredictError::ModelNotFound(p)) => assert_eq!(p, path),
            other => panic!("expected ModelNotFound, got {other:?}"),
        }
    }

    #[test]
    fn predict_is_deterministic_for_a_fixed_artifact() {
        let path = write_artifact("deterministic");
        let predictor = MedalPredictor::load(&path).unwrap();
        let a = predictor.predict(&subject()).unwrap();
        let b = predictor.predict(&subject()).unwrap();
        assert_eq!(a, b);
        assert!(a.is_finite());
    }

    #[test]
    fn unseen_level_propagates_as_error() {
        let path = write_artifact("unseen");
        let predictor = MedalPredictor::load(&path).unwrap();
        let mut s = subject();
        s.sport = "Curling".to_string();
        match predictor.predict(&s) {
            Err(PredictError::UnknownLevel { column, value }) => {
                assert_eq!(column, "sport");
                assert_eq!(value, "Curling");
            }
            other => panic!("expected UnknownLevel, got {other:?}"),
        }
    }

    #[test]
    fn medal_label_follows_the_asserted_scale() {
        assert_eq!(medal_label(0.7), "Gold");
        assert_eq!(medal_label(2.1), "Silver");
        assert_eq!(medal_label(2.9), "Bronze");
        assert_eq!(medal_label(5.0), "Bronze");
    }
}
