//! Text persistence for the role stores
//!
//! Every container writes its records to a line-oriented text file and reads
//! them back through its normal insert operation. See [`lines`] for the
//! record layouts and [`file`] for the on-disk store.

pub mod file;
pub mod lines;

pub use file::{TextStore, read_records, write_records};
pub use lines::{LineCursor, LineRecord};

use crate::error::StoreError;

/// A container that can be written to and rebuilt from a text store.
pub trait Persisted {
    type Record: LineRecord;

    /// Records in on-disk order (the container's traversal order)
    fn records(&self) -> impl Iterator<Item = &Self::Record>;

    fn clear(&mut self);

    /// Insert one restored record through the container's normal insert
    fn restore_one(&mut self, record: Self::Record) -> Result<(), StoreError>;
}

/// Why a restore stopped reading
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RestoreStop {
    /// Every record in the file was read
    EndOfInput,
    /// No backing file; the store starts empty
    Missing,
    /// The file could not be opened or a read failed part way
    Unreadable,
    /// The record starting at this 1-based line is incomplete or has a bad integer
    Malformed { line: usize },
    /// The container filled up before the file ended
    CapacityReached,
}

/// Outcome of a restore. Restores never fail; they report how far they got.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RestoreReport {
    pub restored: usize,
    pub stop: RestoreStop,
}

impl RestoreReport {
    /// True when the whole file was consumed, or there was no file
    pub fn is_complete(&self) -> bool {
        matches!(self.stop, RestoreStop::EndOfInput | RestoreStop::Missing)
    }
}
