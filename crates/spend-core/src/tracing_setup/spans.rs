//! Span definitions per operation: model load, request, prediction.

/// Create a model-load span.
#[macro_export]
macro_rules! model_load_span {
    ($path:expr, $format:expr) => {
        tracing::info_span!("spend.model_load", path = %$path, format = %$format)
    };
}

/// Create a request span.
#[macro_export]
macro_rules! request_span {
    ($method:expr, $path:expr) => {
        tracing::info_span!("spend.request", method = %$method, path = %$path)
    };
}

/// Create a prediction span.
#[macro_export]
macro_rules! prediction_span {
    ($model:expr) => {
        tracing::debug_span!("spend.predict", model = %$model)
    };
}
