//! ModelLoader: reads the model artifact once and caches the predictor.
//!
//! The cache is a `OnceLock` checked lock-free on every call. The first
//! caller takes the init guard, re-checks, deserializes, and publishes;
//! concurrent first callers wait on the guard and then see the cached
//! value. A failed load publishes nothing.

use std::path::{Path, PathBuf};
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::{Arc, Mutex, OnceLock, PoisonError};
use std::time::Instant;

use spend_core::config::ModelConfig;
use spend_core::errors::LoadError;
use spend_core::{model_load_span, SpendPredictor, SpendResult};
use tracing::{error, info};

use crate::backends;
use crate::format::ArtifactFormat;

/// Load-once holder for the process's spend model.
pub struct ModelLoader {
    config: ModelConfig,
    cached: OnceLock<Arc<dyn SpendPredictor>>,
    init_guard: Mutex<()>,
    loads: AtomicUsize,
}

impl ModelLoader {
    pub fn new(config: ModelConfig) -> Self {
        Self {
            config,
            cached: OnceLock::new(),
            init_guard: Mutex::new(()),
            loads: AtomicUsize::new(0),
        }
    }

    /// Return the cached predictor, deserializing the artifact on first use.
    ///
    /// # Errors
    /// Returns `LoadError` if the artifact is missing, unreadable, or not a
    /// valid model. Nothing is cached in that case.
    pub fn load(&self) -> SpendResult<Arc<dyn SpendPredictor>> {
        if let Some(model) = self.cached.get() {
            return Ok(Arc::clone(model));
        }

        let _guard = self
            .init_guard
            .lock()
            .unwrap_or_else(PoisonError::into_inner);
        if let Some(model) = self.cached.get() {
            return Ok(Arc::clone(model));
        }

        let model = self.deserialize()?;
        // Only the guard holder sets the cell, so this cannot already be full.
        let _ = self.cached.set(Arc::clone(&model));
        Ok(model)
    }

    /// Whether a predictor has been cached.
    pub fn is_loaded(&self) -> bool {
        self.cached.get().is_some()
    }

    /// How many times the artifact has been deserialized, including failures.
    pub fn load_count(&self) -> usize {
        self.loads.load(Ordering::SeqCst)
    }

    fn deserialize(&self) -> SpendResult<Arc<dyn SpendPredictor>> {
        self.loads.fetch_add(1, Ordering::SeqCst);
        let path = PathBuf::from(&self.config.path);
        let span = model_load_span!(path.display(), self.config.format);
        let _enter = span.enter();

        let started = Instant::now();
        let result = self.open_artifact(&path);

        match result {
            Ok((format, model)) => {
                info!(
                    model = model.name(),
                    format = %format,
                    elapsed_ms = started.elapsed().as_millis() as u64,
                    "model loaded"
                );
                Ok(model)
            }
            Err(e) => {
                error!(error = %e, "model load failed");
                Err(e)
            }
        }
    }

    fn open_artifact(&self, path: &Path) -> SpendResult<(ArtifactFormat, Arc<dyn SpendPredictor>)> {
        if !path.exists() {
            return Err(LoadError::ModelNotFound {
                path: path.display().to_string(),
            }
            .into());
        }
        let format = ArtifactFormat::resolve(&self.config.format, path)?;
        let model = backends::open(format, path, &self.config)?;
        Ok((format, model))
    }
}

impl std::fmt::Debug for ModelLoader {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ModelLoader")
            .field("path", &self.config.path)
            .field("format", &self.config.format)
            .field("loaded", &self.is_loaded())
            .field("loads", &self.load_count())
            .finish()
    }
}
