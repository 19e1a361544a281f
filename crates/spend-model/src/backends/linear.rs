//! JSON linear model backend.

use std::path::Path;

use serde::{Deserialize, Serialize};
use spend_core::constants::FEATURE_COUNT;
use spend_core::errors::LoadError;
use spend_core::{CustomerRecord, SpendPredictor, SpendResult};
use tracing::debug;

/// On-disk layout of a linear spend model.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LinearArtifact {
    #[serde(default)]
    pub name: Option<String>,
    pub intercept: f64,
    /// One weight per feature column, in canonical order.
    pub coefficients: Vec<f64>,
}

/// `intercept + Σ coefficients[i] * features[i]`.
#[derive(Debug, Clone)]
pub struct LinearPredictor {
    intercept: f64,
    coefficients: [f64; FEATURE_COUNT],
    model_name: String,
}

impl LinearPredictor {
    /// Read and validate a JSON linear model.
    pub fn load(path: &Path) -> Result<Self, LoadError> {
        let display = path.display().to_string();
        if !path.exists() {
            return Err(LoadError::ModelNotFound { path: display });
        }
        let bytes = std::fs::read(path).map_err(|e| LoadError::Unreadable {
            path: display.clone(),
            reason: e.to_string(),
        })?;
        let artifact: LinearArtifact =
            serde_json::from_slice(&bytes).map_err(|e| LoadError::InvalidArtifact {
                path: display.clone(),
                reason: e.to_string(),
            })?;

        let fallback_name = path
            .file_stem()
            .and_then(|s| s.to_str())
            .unwrap_or("linear-model");
        let predictor = Self::from_artifact(artifact, fallback_name).map_err(|reason| {
            LoadError::InvalidArtifact {
                path: display,
                reason,
            }
        })?;

        debug!(model = %predictor.model_name, "linear model loaded");
        Ok(predictor)
    }

    /// Validate an in-memory artifact.
    pub fn from_artifact(artifact: LinearArtifact, fallback_name: &str) -> Result<Self, String> {
        let coefficients: [f64; FEATURE_COUNT] =
            artifact.coefficients.as_slice().try_into().map_err(|_| {
                format!(
                    "expected {FEATURE_COUNT} coefficients, got {}",
                    artifact.coefficients.len()
                )
            })?;
        if !artifact.intercept.is_finite() {
            return Err("intercept is not finite".to_string());
        }
        if let Some(i) = coefficients.iter().position(|c| !c.is_finite()) {
            return Err(format!("coefficient {i} is not finite"));
        }
        Ok(Self {
            intercept: artifact.intercept,
            coefficients,
            model_name: artifact.name.unwrap_or_else(|| fallback_name.to_string()),
        })
    }
}

impl SpendPredictor for LinearPredictor {
    fn predict(&self, record: &CustomerRecord) -> SpendResult<f64> {
        let features = record.features();
        let dot: f64 = self
            .coefficients
            .iter()
            .zip(features.iter())
            .map(|(c, x)| c * f64::from(*x))
            .sum();
        Ok(self.intercept + dot)
    }

    fn name(&self) -> &str {
        &self.model_name
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn artifact(coefficients: Vec<f64>) -> LinearArtifact {
        LinearArtifact {
            name: None,
            intercept: 10.0,
            coefficients,
        }
    }

    #[test]
    fn intercept_only_model_ignores_features() {
        let model = LinearPredictor::from_artifact(artifact(vec![0.0; 18]), "m").unwrap();
        assert_eq!(model.predict(&CustomerRecord::default()).unwrap(), 10.0);
        assert_eq!(model.name(), "m");
    }

    #[test]
    fn weights_apply_to_matching_columns() {
        let mut weights = vec![0.0; 18];
        weights[0] = 0.1; // total_spend
        weights[17] = -50.0; // is_cold_start
        let model = LinearPredictor::from_artifact(artifact(weights), "m").unwrap();
        let prediction = model.predict(&CustomerRecord::default()).unwrap();
        assert!((prediction - (10.0 + 520.05)).abs() < 1e-3);
    }

    #[test]
    fn wrong_coefficient_count_is_rejected() {
        let err = LinearPredictor::from_artifact(artifact(vec![1.0; 17]), "m").unwrap_err();
        assert!(err.contains("expected 18 coefficients, got 17"));
    }
}
