//! Bounded containers backing the four roles
//!
//! Each container has a fixed capacity checked on every insert. A failed
//! insert or removal returns a [`StoreError`](crate::error::StoreError) and
//! leaves the container unchanged.

pub mod intake;
pub mod inventory;
mod ring;
pub mod rotation;
pub mod triage;

pub use intake::{DEFAULT_INTAKE_CAPACITY, IntakeQueue};
pub use inventory::{DEFAULT_INVENTORY_CAPACITY, InventoryStack};
pub use rotation::{DEFAULT_ROTATION_CAPACITY, RotationQueue};
pub use triage::{DEFAULT_TRIAGE_CAPACITY, TriageHeap};
