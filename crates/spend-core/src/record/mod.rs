//! The Prediction Request Record and its construction from form input.

mod choices;
mod customer_record;
mod form_fields;
pub mod schema;

pub use choices::{Choice, ColdStart, CustomerSegment, DominantCategory, LoyaltyStatus};
pub use customer_record::CustomerRecord;
pub use form_fields::FormFields;
pub use schema::{FieldKind, FieldSpec, FIELDS};
