//! # spend-core
//!
//! Foundation crate for the spend forecasting service.
//! Defines the customer record, errors, config, the predictor trait,
//! currency formatting and tracing setup. Every other crate in the
//! workspace depends on this.

pub mod config;
pub mod constants;
pub mod errors;
pub mod format;
pub mod record;
pub mod tracing_setup;
pub mod traits;

// Re-export the most commonly used types at the crate root.
pub use config::SpendConfig;
pub use errors::{SpendError, SpendResult};
pub use format::format_currency;
pub use record::{ColdStart, CustomerRecord, CustomerSegment, DominantCategory, FormFields, LoyaltyStatus};
pub use traits::SpendPredictor;
