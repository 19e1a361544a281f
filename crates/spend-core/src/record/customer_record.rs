use serde::{Deserialize, Serialize};

use super::choices::{Choice, ColdStart, CustomerSegment, DominantCategory, LoyaltyStatus};
use super::form_fields::FormFields;
use crate::constants::FEATURE_COUNT;
use crate::errors::FieldError;

/// One customer, as submitted for a single prediction.
///
/// Built fresh per submission and dropped once the result is rendered.
/// Every field is typed; categorical fields can only hold their declared
/// options. Numeric fields carry no range checks, so negative amounts pass
/// through to the model unchanged.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct CustomerRecord {
    pub total_spend: f64,
    pub total_transactions: i64,
    pub avg_order_value: f64,
    pub recency_days: i64,
    pub tenure_days: i64,
    pub spend_last_30d: f64,
    pub tx_last_30d: i64,
    pub spend_last_60d: f64,
    pub tx_last_60d: i64,
    pub spend_last_90d: f64,
    pub tx_last_90d: i64,
    pub unique_products: i64,
    pub unique_categories: i64,
    pub dominant_category: DominantCategory,
    pub segment_id: CustomerSegment,
    pub loyalty_status: LoyaltyStatus,
    pub total_loyalty_points: i64,
    pub is_cold_start: ColdStart,
}

impl Default for CustomerRecord {
    /// The example customer the form starts from.
    fn default() -> Self {
        Self {
            total_spend: 5200.50,
            total_transactions: 45,
            avg_order_value: 115.50,
            recency_days: 4,
            tenure_days: 730,
            spend_last_30d: 450.00,
            tx_last_30d: 4,
            spend_last_60d: 950.00,
            tx_last_60d: 9,
            spend_last_90d: 1400.00,
            tx_last_90d: 12,
            unique_products: 20,
            unique_categories: 5,
            dominant_category: DominantCategory::default(),
            segment_id: CustomerSegment::default(),
            loyalty_status: LoyaltyStatus::default(),
            total_loyalty_points: 2500,
            is_cold_start: ColdStart::default(),
        }
    }
}

impl CustomerRecord {
    /// Numeric model input in canonical column order.
    ///
    /// Categorical columns are ordinal-encoded by option position.
    pub fn features(&self) -> [f32; FEATURE_COUNT] {
        [
            self.total_spend as f32,
            self.total_transactions as f32,
            self.avg_order_value as f32,
            self.recency_days as f32,
            self.tenure_days as f32,
            self.spend_last_30d as f32,
            self.tx_last_30d as f32,
            self.spend_last_60d as f32,
            self.tx_last_60d as f32,
            self.spend_last_90d as f32,
            self.tx_last_90d as f32,
            self.unique_products as f32,
            self.unique_categories as f32,
            self.dominant_category.index() as f32,
            self.segment_id.index() as f32,
            self.loyalty_status.index() as f32,
            self.total_loyalty_points as f32,
            self.is_cold_start.index() as f32,
        ]
    }

    /// Form values that reproduce this record, used to pre-fill the form.
    pub fn to_form_fields(&self) -> FormFields {
        let mut fields = FormFields::new();
        fields.insert("total_spend", format_amount(self.total_spend));
        fields.insert("total_transactions", self.total_transactions.to_string());
        fields.insert("avg_order_value", format_amount(self.avg_order_value));
        fields.insert("recency_days", self.recency_days.to_string());
        fields.insert("tenure_days", self.tenure_days.to_string());
        fields.insert("spend_last_30d", format_amount(self.spend_last_30d));
        fields.insert("tx_last_30d", self.tx_last_30d.to_string());
        fields.insert("spend_last_60d", format_amount(self.spend_last_60d));
        fields.insert("tx_last_60d", self.tx_last_60d.to_string());
        fields.insert("spend_last_90d", format_amount(self.spend_last_90d));
        fields.insert("tx_last_90d", self.tx_last_90d.to_string());
        fields.insert("unique_products", self.unique_products.to_string());
        fields.insert("unique_categories", self.unique_categories.to_string());
        fields.insert(DominantCategory::FIELD, self.dominant_category.label());
        fields.insert(CustomerSegment::FIELD, self.segment_id.label());
        fields.insert(LoyaltyStatus::FIELD, self.loyalty_status.label());
        fields.insert("total_loyalty_points", self.total_loyalty_points.to_string());
        fields.insert(ColdStart::FIELD, self.is_cold_start.label());
        fields
    }
}

impl TryFrom<&FormFields> for CustomerRecord {
    type Error = FieldError;

    /// Build a record from submitted form values, rejecting the first
    /// missing or malformed field.
    fn try_from(form: &FormFields) -> Result<Self, Self::Error> {
        Ok(Self {
            total_spend: form.float("total_spend")?,
            total_transactions: form.integer("total_transactions")?,
            avg_order_value: form.float("avg_order_value")?,
            recency_days: form.integer("recency_days")?,
            tenure_days: form.integer("tenure_days")?,
            spend_last_30d: form.float("spend_last_30d")?,
            tx_last_30d: form.integer("tx_last_30d")?,
            spend_last_60d: form.float("spend_last_60d")?,
            tx_last_60d: form.integer("tx_last_60d")?,
            spend_last_90d: form.float("spend_last_90d")?,
            tx_last_90d: form.integer("tx_last_90d")?,
            unique_products: form.integer("unique_products")?,
            unique_categories: form.integer("unique_categories")?,
            dominant_category: form.choice()?,
            segment_id: form.choice()?,
            loyalty_status: form.choice()?,
            total_loyalty_points: form.integer("total_loyalty_points")?,
            is_cold_start: form.choice()?,
        })
    }
}

/// Two-decimal rendering for amount inputs, matching their 0.01 step.
fn format_amount(value: f64) -> String {
    format!("{value:.2}")
}
