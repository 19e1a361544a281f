//! ONNX Runtime backend.
//!
//! Loads an ONNX graph via the `ort` crate (v2) and feeds it the record's
//! feature vector as a single `[1, 18]` f32 tensor.

use std::any::Any;
use std::panic::{self, AssertUnwindSafe};
use std::path::Path;
use std::sync::Mutex;

use ort::session::Session;
use ort::value::Tensor;
use spend_core::constants::FEATURE_COUNT;
use spend_core::errors::{LoadError, PredictionError};
use spend_core::{CustomerRecord, SpendPredictor, SpendResult};
use tracing::debug;

/// ONNX-based spend model.
pub struct OnnxPredictor {
    /// `Session::run` needs `&mut self`; the Mutex lets requests share it.
    session: Mutex<Session>,
    model_name: String,
}

impl OnnxPredictor {
    /// Load an ONNX model from `path`.
    ///
    /// # Errors
    /// Returns `LoadError::ModelNotFound` if the file is absent,
    /// `LoadError::Unreadable` if the ONNX Runtime library cannot be loaded
    /// and `LoadError::InvalidArtifact` if ONNX Runtime rejects the graph.
    pub fn load(path: &Path, intra_threads: usize) -> Result<Self, LoadError> {
        let display = path.display().to_string();
        if !path.exists() {
            return Err(LoadError::ModelNotFound { path: display });
        }

        // With `load-dynamic`, ort panics on first use when the runtime
        // dylib cannot be opened.
        let session = panic::catch_unwind(AssertUnwindSafe(|| {
            build_session(path, intra_threads, &display)
        }))
        .map_err(|payload| LoadError::Unreadable {
            path: display.clone(),
            reason: format!("ONNX Runtime unavailable: {}", panic_message(payload.as_ref())),
        })??;

        let model_name = path
            .file_stem()
            .and_then(|s| s.to_str())
            .unwrap_or("onnx-model")
            .to_string();

        debug!(model = %model_name, threads = intra_threads, "ONNX model loaded");

        Ok(Self {
            session: Mutex::new(session),
            model_name,
        })
    }

    fn infer(&self, features: [f32; FEATURE_COUNT]) -> Result<f64, PredictionError> {
        let input = Tensor::from_array((vec![1i64, FEATURE_COUNT as i64], features.to_vec()))
            .map_err(|e| PredictionError::InferenceFailed {
                reason: format!("tensor creation error: {e}"),
            })?;

        let mut session = self
            .session
            .lock()
            .map_err(|e| PredictionError::InferenceFailed {
                reason: format!("session lock poisoned: {e}"),
            })?;

        let outputs = session
            .run(ort::inputs![input])
            .map_err(|e| PredictionError::InferenceFailed {
                reason: e.to_string(),
            })?;

        let (_name, output) = outputs.iter().next().ok_or(PredictionError::EmptyOutput)?;

        // Regressors exported from float pipelines emit f32; some emit f64.
        let value = match output.try_extract_tensor::<f32>() {
            Ok((_shape, data)) => data.first().map(|v| f64::from(*v)),
            Err(_) => {
                let (_shape, data) = output.try_extract_tensor::<f64>().map_err(|e| {
                    PredictionError::InferenceFailed {
                        reason: format!("tensor extraction failed: {e}"),
                    }
                })?;
                data.first().copied()
            }
        };

        value.ok_or(PredictionError::EmptyOutput)
    }
}

fn build_session(path: &Path, intra_threads: usize, display: &str) -> Result<Session, LoadError> {
    Session::builder()
        .map_err(|e| invalid(display, e))?
        .with_intra_threads(intra_threads)
        .map_err(|e| invalid(display, e))?
        .commit_from_file(path)
        .map_err(|e| invalid(display, e))
}

fn panic_message(payload: &(dyn Any + Send)) -> &str {
    payload
        .downcast_ref::<String>()
        .map(String::as_str)
        .or_else(|| payload.downcast_ref::<&str>().copied())
        .unwrap_or("runtime initialization panicked")
}

fn invalid(path: &str, err: impl std::fmt::Display) -> LoadError {
    LoadError::InvalidArtifact {
        path: path.to_string(),
        reason: err.to_string(),
    }
}

impl SpendPredictor for OnnxPredictor {
    fn predict(&self, record: &CustomerRecord) -> SpendResult<f64> {
        Ok(self.infer(record.features())?)
    }

    fn name(&self) -> &str {
        &self.model_name
    }
}
