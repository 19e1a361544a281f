//! Predictor backends, one per artifact format.

mod linear;
mod onnx;

use std::path::Path;
use std::sync::Arc;

use spend_core::config::ModelConfig;
use spend_core::{SpendPredictor, SpendResult};

use crate::format::ArtifactFormat;

pub use linear::{LinearArtifact, LinearPredictor};
pub use onnx::OnnxPredictor;

/// Deserialize the artifact at `path` with the backend for `format`.
pub fn open(
    format: ArtifactFormat,
    path: &Path,
    config: &ModelConfig,
) -> SpendResult<Arc<dyn SpendPredictor>> {
    match format {
        ArtifactFormat::Onnx => Ok(Arc::new(OnnxPredictor::load(path, config.intra_threads)?)),
        ArtifactFormat::Linear => Ok(Arc::new(LinearPredictor::load(path)?)),
    }
}
