//! Column layout of a customer record, shared by the form renderer,
//! the form parser and the feature encoder.

use super::choices::{Choice, ColdStart, CustomerSegment, DominantCategory, LoyaltyStatus};

/// Input kind of one record column.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum FieldKind {
    /// Decimal amount, stepped by `step` in the form.
    Float { step: f64 },
    /// Whole number, stepped by 1.
    Integer,
    /// Closed option set, rendered as a selector.
    Choice { options: &'static [&'static str] },
}

/// One column of the record.
#[derive(Debug, Clone, Copy)]
pub struct FieldSpec {
    /// snake_case column name, used as the form field name and JSON key.
    pub name: &'static str,
    /// Human-readable label.
    pub label: &'static str,
    pub kind: FieldKind,
}

const AMOUNT: FieldKind = FieldKind::Float { step: 0.01 };

/// Every column, in canonical model order.
pub const FIELDS: [FieldSpec; 18] = [
    FieldSpec { name: "total_spend", label: "Total Spend", kind: AMOUNT },
    FieldSpec { name: "total_transactions", label: "Total Transactions", kind: FieldKind::Integer },
    FieldSpec { name: "avg_order_value", label: "Avg Order Value", kind: AMOUNT },
    FieldSpec { name: "recency_days", label: "Recency Days", kind: FieldKind::Integer },
    FieldSpec { name: "tenure_days", label: "Tenure Days", kind: FieldKind::Integer },
    FieldSpec { name: "spend_last_30d", label: "Spend Last 30 Days", kind: AMOUNT },
    FieldSpec { name: "tx_last_30d", label: "Transactions Last 30 Days", kind: FieldKind::Integer },
    FieldSpec { name: "spend_last_60d", label: "Spend Last 60 Days", kind: AMOUNT },
    FieldSpec { name: "tx_last_60d", label: "Transactions Last 60 Days", kind: FieldKind::Integer },
    FieldSpec { name: "spend_last_90d", label: "Spend Last 90 Days", kind: AMOUNT },
    FieldSpec { name: "tx_last_90d", label: "Transactions Last 90 Days", kind: FieldKind::Integer },
    FieldSpec { name: "unique_products", label: "Unique Products", kind: FieldKind::Integer },
    FieldSpec { name: "unique_categories", label: "Unique Categories", kind: FieldKind::Integer },
    FieldSpec {
        name: DominantCategory::FIELD,
        label: "Dominant Category",
        kind: FieldKind::Choice { options: DominantCategory::LABELS },
    },
    FieldSpec {
        name: CustomerSegment::FIELD,
        label: "Customer Segment",
        kind: FieldKind::Choice { options: CustomerSegment::LABELS },
    },
    FieldSpec {
        name: LoyaltyStatus::FIELD,
        label: "Loyalty Status",
        kind: FieldKind::Choice { options: LoyaltyStatus::LABELS },
    },
    FieldSpec { name: "total_loyalty_points", label: "Total Loyalty Points", kind: FieldKind::Integer },
    FieldSpec {
        name: ColdStart::FIELD,
        label: "Cold Start Customer",
        kind: FieldKind::Choice { options: ColdStart::LABELS },
    },
];

/// Look up a column by name.
pub fn field(name: &str) -> Option<&'static FieldSpec> {
    FIELDS.iter().find(|f| f.name == name)
}
