//! PredictionService: one record in, one formatted amount out.

use std::sync::Arc;

use serde::Serialize;
use spend_core::errors::PredictionError;
use spend_core::{format_currency, prediction_span, CustomerRecord, SpendPredictor, SpendResult};
use tracing::debug;

/// A model output ready to display.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Prediction {
    /// Raw model output.
    pub prediction: f64,
    /// `₹ 1,234.50`.
    pub formatted: String,
}

/// Wraps the shared predictor with output checks and formatting.
#[derive(Clone)]
pub struct PredictionService {
    predictor: Arc<dyn SpendPredictor>,
}

impl PredictionService {
    pub fn new(predictor: Arc<dyn SpendPredictor>) -> Self {
        Self { predictor }
    }

    pub fn model_name(&self) -> &str {
        self.predictor.name()
    }

    /// Run the model once for `record`.
    ///
    /// # Errors
    /// Propagates predictor failures; a NaN or infinite output becomes
    /// `PredictionError::NonFiniteOutput`.
    pub fn predict(&self, record: &CustomerRecord) -> SpendResult<Prediction> {
        let span = prediction_span!(self.predictor.name());
        let _enter = span.enter();

        let value = self.predictor.predict(record)?;
        if !value.is_finite() {
            return Err(PredictionError::NonFiniteOutput { value }.into());
        }
        debug!(prediction = value, "prediction complete");
        Ok(Prediction {
            prediction: value,
            formatted: format_currency(value),
        })
    }
}

impl std::fmt::Debug for PredictionService {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("PredictionService")
            .field("model", &self.predictor.name())
            .finish()
    }
}
