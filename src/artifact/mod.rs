mod schema;

pub use schema::{ModelParams, ScalerParams};

use anyhow::{bail, Context, Result};
use chrono::{DateTime, Utc};
use std::fs;
use std::path::{Path, PathBuf};

use crate::profile::FEATURE_COUNT;
use crate::scoring::{train_fallback_model, ScoringModel};

pub const MODEL_FILE: &str = "model.json";
pub const SCALER_FILE: &str = "scaler.json";

/// Where the model answering predictions came from.
#[derive(Debug, Clone, PartialEq)]
pub enum ModelSource {
    Artifact {
        dir: PathBuf,
        trained_at: Option<DateTime<Utc>>,
    },
    SyntheticFallback,
}

impl ModelSource {
    pub fn describe(&self) -> String {
        match self {
            ModelSource::Artifact { dir, trained_at } => match trained_at {
                Some(at) => format!(
                    "loaded from {} (trained {})",
                    dir.display(),
                    at.format("%Y-%m-%d %H:%M UTC")
                ),
                None => format!("loaded from {}", dir.display()),
            },
            ModelSource::SyntheticFallback => "trained in-process on synthetic data".to_string(),
        }
    }
}

/// Default artifact directory (~/.config/scoreiq/)
pub fn get_artifact_dir() -> PathBuf {
    let home = dirs::home_dir().expect("Could not determine home directory");
    home.join(".config").join("scoreiq")
}

/// Load the two parameter blobs from `dir` and assemble a model.
///
/// # Errors
///
/// Returns an error if either file is missing, unparseable, or fails the
/// integrity checks (12 values per array, finite, nonzero scales).
pub fn load_model(dir: &Path) -> Result<(ScoringModel, Option<DateTime<Utc>>)> {
    let model_path = dir.join(MODEL_FILE);
    let scaler_path = dir.join(SCALER_FILE);

    let model_content = fs::read_to_string(&model_path)
        .with_context(|| format!("Failed to read model parameters at {}", model_path.display()))?;
    let params: ModelParams = serde_json::from_str(&model_content)
        .with_context(|| format!("Failed to parse model parameters at {}", model_path.display()))?;

    let scaler_content = fs::read_to_string(&scaler_path).with_context(|| {
        format!("Failed to read scaler parameters at {}", scaler_path.display())
    })?;
    let scaler: ScalerParams = serde_json::from_str(&scaler_content).with_context(|| {
        format!("Failed to parse scaler parameters at {}", scaler_path.display())
    })?;

    let coefficients = checked_array(&params.coefficients, "coefficients")?;
    let mean = checked_array(&scaler.mean, "scaler mean")?;
    let scale = checked_array(&scaler.scale, "scaler scale")?;
    if !params.intercept.is_finite() {
        bail!("intercept must be finite, got {}", params.intercept);
    }
    if let Some(zero) = scale.iter().position(|s| *s == 0.0) {
        bail!("scaler scale[{}] is zero; predictions would divide by zero", zero);
    }

    Ok((
        ScoringModel {
            coefficients,
            intercept: params.intercept,
            mean,
            scale,
        },
        params.trained_at,
    ))
}

fn checked_array(values: &[f64], what: &str) -> Result<[f64; FEATURE_COUNT]> {
    if values.len() != FEATURE_COUNT {
        bail!(
            "{} must have exactly {} entries, got {}",
            what,
            FEATURE_COUNT,
            values.len()
        );
    }
    if let Some(bad) = values.iter().position(|v| !v.is_finite()) {
        bail!("{}[{}] must be finite", what, bad);
    }
    let mut array = [0.0; FEATURE_COUNT];
    array.copy_from_slice(values);
    Ok(array)
}

/// Load persisted parameters, or fall back to synthetic training.
///
/// A missing or unreadable artifact is never fatal; the reason is reported on
/// stderr when `verbose` is set and the process continues with the fallback.
pub fn load_or_train(dir: Option<PathBuf>, verbose: bool) -> Result<(ScoringModel, ModelSource)> {
    let dir = dir.unwrap_or_else(get_artifact_dir);

    match load_model(&dir) {
        Ok((model, trained_at)) => {
            if verbose {
                eprintln!("Loaded model parameters from {}", dir.display());
            }
            Ok((model, ModelSource::Artifact { dir, trained_at }))
        }
        Err(e) => {
            if verbose {
                eprintln!("No usable model artifact ({e:#}); training fallback model");
            }
            let model = train_fallback_model()?;
            Ok((model, ModelSource::SyntheticFallback))
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    fn write_artifacts(dir: &Path, coefficients: &[f64], mean: &[f64], scale: &[f64]) {
        let params = ModelParams {
            coefficients: coefficients.to_vec(),
            intercept: 65.0,
            algorithm: Some("ridge".to_string()),
            alpha: Some(1.0),
            trained_at: None,
        };
        let scaler = ScalerParams {
            mean: mean.to_vec(),
            scale: scale.to_vec(),
        };
        fs::write(dir.join(MODEL_FILE), serde_json::to_string(&params).unwrap()).unwrap();
        fs::write(dir.join(SCALER_FILE), serde_json::to_string(&scaler).unwrap()).unwrap();
    }

    #[test]
    fn loads_well_formed_artifacts() {
        let tmp = TempDir::new().unwrap();
        write_artifacts(tmp.path(), &[0.5; 12], &[10.0; 12], &[2.0; 12]);

        let (model, trained_at) = load_model(tmp.path()).unwrap();
        assert_eq!(model.intercept, 65.0);
        assert_eq!(model.coefficients, [0.5; 12]);
        assert_eq!(model.scale, [2.0; 12]);
        assert!(trained_at.is_none());
    }

    #[test]
    fn rejects_short_coefficient_arrays() {
        let tmp = TempDir::new().unwrap();
        write_artifacts(tmp.path(), &[0.5; 11], &[10.0; 12], &[2.0; 12]);
        let err = load_model(tmp.path()).unwrap_err();
        assert!(format!("{err:#}").contains("coefficients"));
    }

    #[test]
    fn rejects_zero_scales() {
        let tmp = TempDir::new().unwrap();
        let mut scale = [2.0; 12];
        scale[3] = 0.0;
        write_artifacts(tmp.path(), &[0.5; 12], &[10.0; 12], &scale);
        let err = load_model(tmp.path()).unwrap_err();
        assert!(format!("{err:#}").contains("zero"));
    }

    #[test]
    fn rejects_missing_files() {
        let tmp = TempDir::new().unwrap();
        assert!(load_model(tmp.path()).is_err());
    }

    #[test]
    fn rejects_corrupt_json() {
        let tmp = TempDir::new().unwrap();
        fs::write(tmp.path().join(MODEL_FILE), "{not json").unwrap();
        fs::write(tmp.path().join(SCALER_FILE), "{}").unwrap();
        assert!(load_model(tmp.path()).is_err());
    }

    #[test]
    fn falls_back_to_training_when_artifact_is_absent() {
        let tmp = TempDir::new().unwrap();
        let (model, source) = load_or_train(Some(tmp.path().to_path_buf()), false).unwrap();
        assert_eq!(source, ModelSource::SyntheticFallback);
        // fallback model must be usable immediately
        let score = model.predict(&crate::profile::StudentProfile::default().to_features());
        assert!((40.0..=100.0).contains(&score));
    }

    #[test]
    fn prefers_artifact_when_present() {
        let tmp = TempDir::new().unwrap();
        write_artifacts(tmp.path(), &[0.0; 12], &[0.0; 12], &[1.0; 12]);
        let (model, source) = load_or_train(Some(tmp.path().to_path_buf()), false).unwrap();
        assert!(matches!(source, ModelSource::Artifact { .. }));
        assert_eq!(model.intercept, 65.0);
    }
}
