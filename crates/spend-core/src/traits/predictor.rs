use crate::errors::SpendResult;
use crate::record::CustomerRecord;

/// A loaded spend model.
///
/// Implementations are shared read-only across requests, so `predict`
/// takes `&self`.
pub trait SpendPredictor: Send + Sync {
    /// Predict next-30-day spend for one customer.
    fn predict(&self, record: &CustomerRecord) -> SpendResult<f64>;

    /// Human-readable model name.
    fn name(&self) -> &str;
}
