//! The desk: one owned store per role
//!
//! A [`Desk`] restores the four stores once when opened and then applies one
//! operation at a time, saving the touched store after every successful
//! mutation. Nothing here is global; the caller owns the desk.

use std::fmt;
use std::path::Path;

use crate::config::Config;
use crate::error::{CaredeskError, Result, StoreError};
use crate::persist::{Persisted, RestoreReport, TextStore};
use crate::record::{IntakeRecord, InventoryRecord, RotationRecord, TriageRecord};
use crate::store::{IntakeQueue, InventoryStack, RotationQueue, TriageHeap};

/// The four operational roles
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Role {
    /// Patient admission (FIFO queue)
    Intake,
    /// Medical supplies (LIFO stack)
    Inventory,
    /// Emergency cases (max-heap)
    Triage,
    /// Ambulance duty rotation (circular queue)
    Rotation,
}

impl Role {
    pub const ALL: [Role; 4] = [Role::Intake, Role::Inventory, Role::Triage, Role::Rotation];

    pub fn as_str(&self) -> &'static str {
        match self {
            Role::Intake => "intake",
            Role::Inventory => "inventory",
            Role::Triage => "triage",
            Role::Rotation => "rotation",
        }
    }
}

impl fmt::Display for Role {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Result of a mutation that was applied in memory.
///
/// The mutation is never rolled back; `saved` says whether the store file
/// caught up with it.
#[derive(Debug)]
#[must_use]
pub struct Applied<T> {
    pub value: T,
    pub saved: Result<()>,
}

impl<T> Applied<T> {
    /// Collapse into the value, or the save error if the save failed
    pub fn into_result(self) -> Result<T> {
        self.saved.map(|()| self.value)
    }
}

/// A blank leading line marks a record boundary on disk, so a record whose
/// first field is empty cannot be saved and read back.
fn require_leading(value: &str, field: &'static str) -> std::result::Result<(), StoreError> {
    if value.is_empty() {
        return Err(StoreError::Blank { field });
    }
    Ok(())
}

/// A container together with the text store that backs it
#[derive(Debug)]
pub struct Station<C> {
    container: C,
    store: TextStore,
}

impl<C: Persisted> Station<C> {
    /// Restore `container` from `store` and pair them up
    pub fn open(mut container: C, store: TextStore) -> (Self, RestoreReport) {
        let report = store.restore(&mut container);
        (Self { container, store }, report)
    }

    pub fn get(&self) -> &C {
        &self.container
    }

    pub fn path(&self) -> &Path {
        self.store.path()
    }

    /// Run `op`, then save if it succeeded.
    ///
    /// A failed `op` has not mutated anything, so nothing is saved.
    pub fn apply<T>(
        &mut self,
        op: impl FnOnce(&mut C) -> std::result::Result<T, StoreError>,
    ) -> std::result::Result<Applied<T>, StoreError> {
        let value = op(&mut self.container)?;
        let saved = self.store.save(&self.container);
        Ok(Applied { value, saved })
    }
}

/// Restore reports from opening a desk, one per role
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct OpenReport {
    pub intake: RestoreReport,
    pub inventory: RestoreReport,
    pub triage: RestoreReport,
    pub rotation: RestoreReport,
}

impl OpenReport {
    pub fn for_role(&self, role: Role) -> RestoreReport {
        match role {
            Role::Intake => self.intake,
            Role::Inventory => self.inventory,
            Role::Triage => self.triage,
            Role::Rotation => self.rotation,
        }
    }
}

/// The four role stores, owned together
#[derive(Debug)]
pub struct Desk {
    intake: Station<IntakeQueue>,
    inventory: Station<InventoryStack>,
    triage: Station<TriageHeap>,
    rotation: Station<RotationQueue>,
}

impl Desk {
    /// Build every store from `config` and restore it from disk
    pub fn open(config: &Config) -> Result<(Self, OpenReport)> {
        config.validate()?;
        let storage = &config.storage;
        let capacity = &config.capacity;

        let (intake, intake_report) = Station::open(
            IntakeQueue::new(capacity.intake),
            TextStore::new(storage.path_for(Role::Intake), Role::Intake.as_str()),
        );
        let (inventory, inventory_report) = Station::open(
            InventoryStack::new(capacity.inventory),
            TextStore::new(storage.path_for(Role::Inventory), Role::Inventory.as_str()),
        );
        let (triage, triage_report) = Station::open(
            TriageHeap::new(capacity.triage),
            TextStore::new(storage.path_for(Role::Triage), Role::Triage.as_str()),
        );
        let (rotation, rotation_report) = Station::open(
            RotationQueue::new(capacity.rotation),
            TextStore::new(storage.path_for(Role::Rotation), Role::Rotation.as_str()),
        );

        let desk = Self {
            intake,
            inventory,
            triage,
            rotation,
        };
        let report = OpenReport {
            intake: intake_report,
            inventory: inventory_report,
            triage: triage_report,
            rotation: rotation_report,
        };
        Ok((desk, report))
    }

    pub fn intake(&self) -> &IntakeQueue {
        self.intake.get()
    }

    pub fn inventory(&self) -> &InventoryStack {
        self.inventory.get()
    }

    pub fn triage(&self) -> &TriageHeap {
        self.triage.get()
    }

    pub fn rotation(&self) -> &RotationQueue {
        self.rotation.get()
    }

    /// Store file backing a role
    pub fn path(&self, role: Role) -> &Path {
        match role {
            Role::Intake => self.intake.path(),
            Role::Inventory => self.inventory.path(),
            Role::Triage => self.triage.path(),
            Role::Rotation => self.rotation.path(),
        }
    }

    /// `(len, capacity)` for a role
    pub fn usage(&self, role: Role) -> (usize, usize) {
        match role {
            Role::Intake => (self.intake().len(), self.intake().capacity()),
            Role::Inventory => (self.inventory().len(), self.inventory().capacity()),
            Role::Triage => (self.triage().len(), self.triage().capacity()),
            Role::Rotation => (self.rotation().len(), self.rotation().capacity()),
        }
    }

    /// Admit a patient at the back of the intake queue
    pub fn admit_patient(
        &mut self,
        record: IntakeRecord,
    ) -> std::result::Result<Applied<()>, StoreError> {
        require_leading(&record.id, "patient id")?;
        self.intake.apply(|q| q.enqueue(record))
    }

    /// Discharge the earliest admitted patient
    pub fn discharge_patient(&mut self) -> std::result::Result<Applied<IntakeRecord>, StoreError> {
        self.intake.apply(IntakeQueue::dequeue)
    }

    /// Record a supply batch on top of the stack
    pub fn add_supply(
        &mut self,
        record: InventoryRecord,
    ) -> std::result::Result<Applied<()>, StoreError> {
        require_leading(&record.kind, "supply type")?;
        self.inventory.apply(|s| s.push(record))
    }

    /// Use the most recently added batch of a supply type
    pub fn use_supply(
        &mut self,
        kind: &str,
    ) -> std::result::Result<Applied<InventoryRecord>, StoreError> {
        self.inventory.apply(|s| s.remove_most_recent_by_key(kind))
    }

    /// Use the most recently added batch regardless of type
    pub fn use_last_supply(&mut self) -> std::result::Result<Applied<InventoryRecord>, StoreError> {
        self.inventory.apply(InventoryStack::pop_top)
    }

    /// Log an emergency case
    pub fn log_emergency(
        &mut self,
        record: TriageRecord,
    ) -> std::result::Result<Applied<()>, StoreError> {
        require_leading(&record.subject, "patient name")?;
        self.triage.apply(|h| h.insert(record))
    }

    /// Take the most critical pending case
    pub fn process_most_critical(
        &mut self,
    ) -> std::result::Result<Applied<TriageRecord>, StoreError> {
        self.triage.apply(|h| h.extract_max().ok_or(StoreError::Empty))
    }

    /// Put an ambulance on the rotation
    pub fn register_ambulance(
        &mut self,
        record: RotationRecord,
    ) -> std::result::Result<Applied<()>, StoreError> {
        require_leading(&record.tag, "ambulance tag")?;
        self.rotation.apply(|q| q.enqueue(record))
    }

    /// Advance the rotation by one shift and return the unit now up next.
    ///
    /// Fails with [`StoreError::Empty`] when no ambulance is registered.
    pub fn rotate_shift(&mut self) -> std::result::Result<Applied<RotationRecord>, StoreError> {
        self.rotation.apply(|q| {
            q.rotate_once();
            q.front().cloned().ok_or(StoreError::Empty)
        })
    }
}
