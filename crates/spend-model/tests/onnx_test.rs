//! ONNX backend tests.
//!
//! Load failures must surface as `LoadError` whether or not the ONNX Runtime
//! library is installed. The inference tests run the checked-in fixtures:
//!
//! - `linear_regressor.onnx`: `features[1,18] x W[18,1] + 10`, with weight
//!   1.0 on `total_spend` and 2.0 on `is_cold_start`, f32 output `[1,1]`.
//! - `linear_regressor_f64.onnx`: the same graph followed by a cast to f64.
//!
//! They need the runtime dylib, so they are ignored by default:
//! `ORT_DYLIB_PATH=/path/to/libonnxruntime.so cargo test -- --ignored`.

use std::path::PathBuf;

use spend_core::config::ModelConfig;
use spend_core::errors::LoadError;
use spend_core::{ColdStart, CustomerRecord, SpendError};
use spend_model::{ModelLoader, OnnxPredictor};

fn fixture(name: &str) -> PathBuf {
    PathBuf::from(env!("CARGO_MANIFEST_DIR"))
        .join("tests")
        .join("fixtures")
        .join(name)
}

fn onnx_loader(path: PathBuf) -> ModelLoader {
    ModelLoader::new(ModelConfig {
        path: path.to_string_lossy().into_owned(),
        ..ModelConfig::default()
    })
}

fn load_err(loader: &ModelLoader) -> SpendError {
    match loader.load() {
        Ok(model) => panic!("expected load failure, got model {}", model.name()),
        Err(e) => e,
    }
}

fn record() -> CustomerRecord {
    CustomerRecord {
        total_spend: 1234.5,
        is_cold_start: ColdStart::Yes,
        ..CustomerRecord::default()
    }
}

// ═══════════════════════════════════════════════════════════════════════════
// LOAD FAILURES
// ═══════════════════════════════════════════════════════════════════════════

#[test]
fn corrupt_onnx_artifact_is_a_load_error() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("best_customer_spend_model.onnx");
    std::fs::write(&path, b"\x80\x04\x95 not an onnx graph").unwrap();
    let loader = onnx_loader(path);

    // Unreadable without a runtime library, InvalidArtifact with one.
    let err = load_err(&loader);
    assert!(
        matches!(
            err,
            SpendError::Load(LoadError::Unreadable { .. } | LoadError::InvalidArtifact { .. })
        ),
        "unexpected error: {err}"
    );
    assert!(!loader.is_loaded());
}

#[test]
fn onnx_backend_reports_missing_file() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("absent.onnx");
    assert!(matches!(
        OnnxPredictor::load(&path, 1),
        Err(LoadError::ModelNotFound { .. })
    ));
}

#[test]
fn failed_onnx_load_can_be_retried() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("model.onnx");
    std::fs::write(&path, b"garbage").unwrap();
    let loader = onnx_loader(path);

    load_err(&loader);
    load_err(&loader);
    assert_eq!(loader.load_count(), 2);
}

// ═══════════════════════════════════════════════════════════════════════════
// INFERENCE
// ═══════════════════════════════════════════════════════════════════════════

#[test]
#[ignore = "requires the ONNX Runtime shared library (set ORT_DYLIB_PATH)"]
fn f32_regressor_predicts_weighted_sum() {
    let loader = onnx_loader(fixture("linear_regressor.onnx"));
    let model = loader.load().unwrap();

    assert_eq!(model.name(), "linear_regressor");
    let prediction = model.predict(&record()).unwrap();
    assert!((prediction - 1246.5).abs() < 1e-3, "got {prediction}");
}

#[test]
#[ignore = "requires the ONNX Runtime shared library (set ORT_DYLIB_PATH)"]
fn f64_regressor_output_is_extracted() {
    let model = OnnxPredictor::load(&fixture("linear_regressor_f64.onnx"), 1).unwrap();

    let prediction = spend_core::SpendPredictor::predict(&model, &record()).unwrap();
    assert!((prediction - 1246.5).abs() < 1e-3, "got {prediction}");

    let baseline = spend_core::SpendPredictor::predict(&model, &CustomerRecord::default()).unwrap();
    let expected = CustomerRecord::default().total_spend + 10.0;
    assert!((baseline - expected).abs() < 1e-2, "got {baseline}");
}
