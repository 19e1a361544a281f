//! # spend-model
//!
//! Loads the spend model artifact once per process and hands out a
//! shared [`SpendPredictor`](spend_core::SpendPredictor).
//!
//! Two artifact formats are supported: ONNX graphs run through ONNX
//! Runtime, and a plain JSON linear model.

pub mod backends;
pub mod format;
pub mod loader;

pub use backends::{LinearPredictor, OnnxPredictor};
pub use format::ArtifactFormat;
pub use loader::ModelLoader;
