//! Record types and bounded text
//!
//! Defines the four record shapes stored by the desk and the bounded text
//! value that enforces their field budgets.

pub mod text;
pub mod types;

pub use text::BoundedText;
pub use types::{
    BATCH_MAX, CATEGORY_MAX, CONDITION_MAX, ID_MAX, IntakeRecord, InventoryRecord, NAME_MAX,
    RotationRecord, SUBJECT_MAX, SUPPLY_TYPE_MAX, TAG_MAX, TriageRecord,
};
