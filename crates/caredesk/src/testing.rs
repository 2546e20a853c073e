//! Record fixtures shared by unit and integration tests

use crate::config::Config;
use crate::record::{IntakeRecord, InventoryRecord, RotationRecord, TriageRecord};
use std::path::Path;

/// A patient with placeholder name and condition
pub fn patient(id: &str) -> IntakeRecord {
    IntakeRecord::new(id, &format!("Patient {id}"), "Observation")
}

/// A ten-unit batch of `kind`
pub fn supply(kind: &str, batch: &str) -> InventoryRecord {
    InventoryRecord::new(kind, 10, batch)
}

pub fn emergency(subject: &str, priority: i32) -> TriageRecord {
    TriageRecord::new(subject, "General", priority)
}

pub fn ambulance(tag: &str) -> RotationRecord {
    RotationRecord::new(tag)
}

/// Default settings with every store under `data_dir`
pub fn config_in(data_dir: &Path) -> Config {
    let mut config = Config::default();
    config.storage.data_dir = data_dir.to_path_buf();
    config
}
