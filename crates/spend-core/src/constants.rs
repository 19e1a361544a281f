/// Service version.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Number of columns in a customer record.
pub const FEATURE_COUNT: usize = 18;

/// Currency symbol prefixed to every rendered amount.
pub const CURRENCY_SYMBOL: &str = "₹";

/// Config file looked up in the working directory.
pub const CONFIG_FILENAME: &str = "spend-forecast.toml";

/// Environment variable overriding the configured log filter.
pub const LOG_ENV_VAR: &str = "SPEND_LOG";

/// Page copy.
pub const PAGE_TITLE: &str = "Customer Spend Prediction (Next 30 Days)";
pub const PAGE_DESCRIPTION: &str = "Enter customer details below to predict next 30 days spend.";
pub const SUBMIT_LABEL: &str = "Predict Spend";
pub const RESULT_LABEL: &str = "Predicted Spend (Next 30 Days)";
