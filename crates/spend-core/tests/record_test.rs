use proptest::prelude::*;
use spend_core::record::{Choice, FieldKind, FIELDS};
use spend_core::{
    ColdStart, CustomerRecord, CustomerSegment, DominantCategory, FormFields, LoyaltyStatus,
};

#[test]
fn schema_has_eighteen_unique_columns() {
    assert_eq!(FIELDS.len(), 18);
    let mut names: Vec<_> = FIELDS.iter().map(|f| f.name).collect();
    names.sort_unstable();
    names.dedup();
    assert_eq!(names.len(), 18);
}

#[test]
fn schema_choices_match_enums() {
    let options = |name: &str| match spend_core::record::schema::field(name).unwrap().kind {
        FieldKind::Choice { options } => options.to_vec(),
        other => panic!("{name} is {other:?}"),
    };
    assert_eq!(
        options("dominant_category"),
        ["Electronics", "Fashion", "Grocery", "Home", "Other"]
    );
    assert_eq!(options("segment_id"), ["VIP", "Regular", "Occasional"]);
    assert_eq!(options("loyalty_status"), ["Gold", "Silver", "Bronze", "None"]);
    assert_eq!(options("is_cold_start"), ["0", "1"]);
}

#[test]
fn default_record_matches_documented_example() {
    let r = CustomerRecord::default();
    assert_eq!(r.total_spend, 5200.50);
    assert_eq!(r.total_transactions, 45);
    assert_eq!(r.avg_order_value, 115.50);
    assert_eq!(r.recency_days, 4);
    assert_eq!(r.tenure_days, 730);
    assert_eq!(r.spend_last_30d, 450.0);
    assert_eq!(r.tx_last_30d, 4);
    assert_eq!(r.spend_last_60d, 950.0);
    assert_eq!(r.tx_last_60d, 9);
    assert_eq!(r.spend_last_90d, 1400.0);
    assert_eq!(r.tx_last_90d, 12);
    assert_eq!(r.unique_products, 20);
    assert_eq!(r.unique_categories, 5);
    assert_eq!(r.dominant_category, DominantCategory::Electronics);
    assert_eq!(r.segment_id, CustomerSegment::Vip);
    assert_eq!(r.loyalty_status, LoyaltyStatus::Gold);
    assert_eq!(r.total_loyalty_points, 2500);
    assert_eq!(r.is_cold_start, ColdStart::No);
}

#[test]
fn json_uses_display_labels() {
    let json = serde_json::to_value(CustomerRecord {
        loyalty_status: LoyaltyStatus::Unenrolled,
        is_cold_start: ColdStart::Yes,
        ..CustomerRecord::default()
    })
    .unwrap();
    assert_eq!(json["segment_id"], "VIP");
    assert_eq!(json["loyalty_status"], "None");
    assert_eq!(json["is_cold_start"], 1);
}

#[test]
fn json_rejects_cold_start_outside_zero_one() {
    let mut json = serde_json::to_value(CustomerRecord::default()).unwrap();
    json["is_cold_start"] = 2.into();
    assert!(serde_json::from_value::<CustomerRecord>(json).is_err());
}

#[test]
fn json_rejects_unknown_columns() {
    let mut json = serde_json::to_value(CustomerRecord::default()).unwrap();
    json["lifetime_value"] = 1.0.into();
    assert!(serde_json::from_value::<CustomerRecord>(json).is_err());
}

fn with(field: &str, value: &str) -> FormFields {
    let mut form = CustomerRecord::default().to_form_fields();
    form.insert(field, value);
    form
}

#[test]
fn integer_columns_reject_decimals() {
    let err = CustomerRecord::try_from(&with("total_transactions", "4.5")).unwrap_err();
    assert_eq!(err.field(), "total_transactions");
}

#[test]
fn float_columns_reject_text() {
    let err = CustomerRecord::try_from(&with("avg_order_value", "lots")).unwrap_err();
    assert_eq!(err.field(), "avg_order_value");
}

proptest! {
    #[test]
    fn categorical_columns_only_accept_declared_options(value in "[A-Za-z0-9 ]{0,12}") {
        let cases: [(&str, &[&str]); 4] = [
            (DominantCategory::FIELD, DominantCategory::LABELS),
            (CustomerSegment::FIELD, CustomerSegment::LABELS),
            (LoyaltyStatus::FIELD, LoyaltyStatus::LABELS),
            (ColdStart::FIELD, ColdStart::LABELS),
        ];
        for (field, allowed) in cases {
            let result = CustomerRecord::try_from(&with(field, &value));
            let trimmed = value.trim();
            if allowed.contains(&trimmed) {
                prop_assert!(result.is_ok());
            } else {
                prop_assert!(result.is_err());
            }
        }
    }

    #[test]
    fn chosen_options_survive_construction(
        cat in 0usize..5, seg in 0usize..3, loyalty in 0usize..4, cold in 0usize..2,
    ) {
        let mut form = CustomerRecord::default().to_form_fields();
        form.insert(DominantCategory::FIELD, DominantCategory::LABELS[cat]);
        form.insert(CustomerSegment::FIELD, CustomerSegment::LABELS[seg]);
        form.insert(LoyaltyStatus::FIELD, LoyaltyStatus::LABELS[loyalty]);
        form.insert(ColdStart::FIELD, ColdStart::LABELS[cold]);
        let record = CustomerRecord::try_from(&form).unwrap();
        prop_assert_eq!(record.dominant_category.index(), cat);
        prop_assert_eq!(record.segment_id.index(), seg);
        prop_assert_eq!(record.loyalty_status.index(), loyalty);
        prop_assert_eq!(record.is_cold_start.index(), cold);
    }
}
