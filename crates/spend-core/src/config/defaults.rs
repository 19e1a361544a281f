// Single source of truth for all default values.

// --- Model ---
pub const DEFAULT_MODEL_PATH: &str = "best_customer_spend_model.onnx";
pub const DEFAULT_MODEL_FORMAT: &str = "auto";
pub const DEFAULT_INTRA_THREADS: usize = 1;

// --- Server ---
pub const DEFAULT_BIND_ADDR: &str = "127.0.0.1:8501";
pub const DEFAULT_READ_TIMEOUT_MS: u64 = 5_000;
pub const DEFAULT_MAX_BODY_BYTES: usize = 65_536; // 64 KiB

// --- Observability ---
pub const DEFAULT_LOG_LEVEL: &str = "info";
pub const DEFAULT_JSON_LOGS: bool = false;
