use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Persisted linear-model blob (`model.json`).
#[derive(Debug, Clone, Deserialize, Serialize, PartialEq)]
pub struct ModelParams {
    pub coefficients: Vec<f64>,
    pub intercept: f64,

    /// Fitting algorithm, informational only.
    #[serde(default)]
    pub algorithm: Option<String>,

    /// L2 penalty used for the fit, informational only.
    #[serde(default)]
    pub alpha: Option<f64>,

    /// When the parameters were fitted.
    #[serde(default)]
    pub trained_at: Option<DateTime<Utc>>,
}

/// Persisted standardization blob (`scaler.json`).
#[derive(Debug, Clone, Deserialize, Serialize, PartialEq)]
pub struct ScalerParams {
    pub mean: Vec<f64>,
    pub scale: Vec<f64>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn model_params_parse_without_optional_metadata() {
        let json = r#"{"coefficients": [1.0, 2.0], "intercept": 55.5}"#;
        let params: ModelParams = serde_json::from_str(json).unwrap();
        assert_eq!(params.coefficients, vec![1.0, 2.0]);
        assert_eq!(params.intercept, 55.5);
        assert!(params.algorithm.is_none());
        assert!(params.trained_at.is_none());
    }

    #[test]
    fn model_params_round_trip() {
        let params = ModelParams {
            coefficients: vec![0.5; 12],
            intercept: 68.2,
            algorithm: Some("ridge".to_string()),
            alpha: Some(1.0),
            trained_at: Some(Utc::now()),
        };
        let json = serde_json::to_string(&params).unwrap();
        let parsed: ModelParams = serde_json::from_str(&json).unwrap();
        assert_eq!(params, parsed);
    }

    #[test]
    fn scaler_params_round_trip() {
        let params = ScalerParams {
            mean: vec![22.5; 12],
            scale: vec![12.7; 12],
        };
        let json = serde_json::to_string(&params).unwrap();
        let parsed: ScalerParams = serde_json::from_str(&json).unwrap();
        assert_eq!(params, parsed);
    }
}
