//! Intake queue: bounded FIFO of waiting patients

use crate::error::StoreError;
use crate::persist::Persisted;
use crate::record::IntakeRecord;

use super::ring::Ring;

/// Default number of patients the intake queue holds
pub const DEFAULT_INTAKE_CAPACITY: usize = 100;

/// Bounded first-in-first-out queue ordered by arrival.
///
/// Enqueue and dequeue are O(1). Both leave the queue untouched when they fail.
#[derive(Debug, Clone)]
pub struct IntakeQueue {
    ring: Ring<IntakeRecord>,
}

impl IntakeQueue {
    pub fn new(capacity: usize) -> Self {
        Self {
            ring: Ring::new(capacity),
        }
    }

    /// Admit a record at the back of the queue
    pub fn enqueue(&mut self, record: IntakeRecord) -> Result<(), StoreError> {
        self.ring.push_back(record)
    }

    /// Remove the longest-waiting record
    pub fn dequeue(&mut self) -> Result<IntakeRecord, StoreError> {
        self.ring.pop_front()
    }

    /// The record that the next dequeue would return
    pub fn front(&self) -> Option<&IntakeRecord> {
        self.ring.front()
    }

    /// Records in arrival order
    pub fn iter(&self) -> impl Iterator<Item = &IntakeRecord> + '_ {
        self.ring.iter()
    }

    pub fn len(&self) -> usize {
        self.ring.len()
    }

    pub fn is_empty(&self) -> bool {
        self.ring.is_empty()
    }

    pub fn is_full(&self) -> bool {
        self.ring.is_full()
    }

    pub fn capacity(&self) -> usize {
        self.ring.capacity()
    }

    pub fn clear(&mut self) {
        self.ring.clear();
    }
}

impl Default for IntakeQueue {
    fn default() -> Self {
        Self::new(DEFAULT_INTAKE_CAPACITY)
    }
}

impl Persisted for IntakeQueue {
    type Record = IntakeRecord;

    fn records(&self) -> impl Iterator<Item = &IntakeRecord> {
        self.iter()
    }

    fn clear(&mut self) {
        IntakeQueue::clear(self);
    }

    fn restore_one(&mut self, record: IntakeRecord) -> Result<(), StoreError> {
        self.enqueue(record)
    }
}
