//! Record types held by the four stores
//!
//! Each record is a fixed-shape tuple of bounded text and integer fields. The
//! byte budgets below are part of the on-disk contract.

use serde::{Deserialize, Serialize};

use super::text::BoundedText;

/// Patient identifier budget (e.g. `P0028`)
pub const ID_MAX: usize = 15;
/// Patient name budget
pub const NAME_MAX: usize = 49;
/// Condition budget (e.g. `Flu`, `Checkup`)
pub const CONDITION_MAX: usize = 29;
/// Supply type budget; the type is also the keyed-removal key
pub const SUPPLY_TYPE_MAX: usize = 29;
/// Supply batch budget
pub const BATCH_MAX: usize = 19;
/// Emergency subject (patient name) budget
pub const SUBJECT_MAX: usize = 49;
/// Emergency category budget
pub const CATEGORY_MAX: usize = 39;
/// Ambulance plate/tag budget
pub const TAG_MAX: usize = 15;

/// A patient waiting in the intake queue.
///
/// The id is an opaque external identifier; uniqueness is not checked.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct IntakeRecord {
    pub id: BoundedText<ID_MAX>,
    pub name: BoundedText<NAME_MAX>,
    pub condition: BoundedText<CONDITION_MAX>,
}

impl IntakeRecord {
    pub fn new(id: &str, name: &str, condition: &str) -> Self {
        Self {
            id: BoundedText::new(id),
            name: BoundedText::new(name),
            condition: BoundedText::new(condition),
        }
    }
}

/// A batch of supplies on the inventory stack
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct InventoryRecord {
    /// Supply type, matched by keyed removal
    #[serde(rename = "type")]
    pub kind: BoundedText<SUPPLY_TYPE_MAX>,
    /// Units in the batch. Non-negative by convention; the stack does not check it.
    pub quantity: i32,
    pub batch: BoundedText<BATCH_MAX>,
}

impl InventoryRecord {
    pub fn new(kind: &str, quantity: i32, batch: &str) -> Self {
        Self {
            kind: BoundedText::new(kind),
            quantity,
            batch: BoundedText::new(batch),
        }
    }
}

/// An emergency case awaiting triage
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TriageRecord {
    pub subject: BoundedText<SUBJECT_MAX>,
    pub category: BoundedText<CATEGORY_MAX>,
    /// Higher is more urgent
    pub priority: i32,
}

impl TriageRecord {
    pub fn new(subject: &str, category: &str, priority: i32) -> Self {
        Self {
            subject: BoundedText::new(subject),
            category: BoundedText::new(category),
            priority,
        }
    }
}

/// An ambulance on the duty rotation
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RotationRecord {
    pub tag: BoundedText<TAG_MAX>,
}

impl RotationRecord {
    pub fn new(tag: &str) -> Self {
        Self {
            tag: BoundedText::new(tag),
        }
    }
}
