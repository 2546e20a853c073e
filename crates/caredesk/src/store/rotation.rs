//! Rotation queue: bounded FIFO with round-robin rotation
//!
//! Holds the ambulances on duty. The head is the unit that is next up;
//! rotating moves it to the back so every unit takes its turn.

use crate::error::StoreError;
use crate::persist::Persisted;
use crate::record::RotationRecord;

use super::ring::Ring;

/// Default number of units on the rotation
pub const DEFAULT_ROTATION_CAPACITY: usize = 20;

#[derive(Debug, Clone)]
pub struct RotationQueue {
    ring: Ring<RotationRecord>,
}

impl RotationQueue {
    pub fn new(capacity: usize) -> Self {
        Self {
            ring: Ring::new(capacity),
        }
    }

    pub fn enqueue(&mut self, record: RotationRecord) -> Result<(), StoreError> {
        self.ring.push_back(record)
    }

    pub fn dequeue(&mut self) -> Result<RotationRecord, StoreError> {
        self.ring.pop_front()
    }

    /// Move the front unit to the back. No-op when fewer than two are held.
    ///
    /// Calling this `len()` times restores the original order.
    pub fn rotate_once(&mut self) {
        self.ring.rotate();
    }

    /// The unit that is next up
    pub fn front(&self) -> Option<&RotationRecord> {
        self.ring.front()
    }

    /// Units from head to tail
    pub fn iter(&self) -> impl Iterator<Item = &RotationRecord> + '_ {
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

impl Default for RotationQueue {
    fn default() -> Self {
        Self::new(DEFAULT_ROTATION_CAPACITY)
    }
}

impl Persisted for RotationQueue {
    type Record = RotationRecord;

    fn records(&self) -> impl Iterator<Item = &RotationRecord> {
        self.iter()
    }

    fn clear(&mut self) {
        RotationQueue::clear(self);
    }

    fn restore_one(&mut self, record: RotationRecord) -> Result<(), StoreError> {
        self.enqueue(record)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn queue_of(tags: &[&str], capacity: usize) -> RotationQueue {
        let mut queue = RotationQueue::new(capacity);
        for tag in tags {
            queue.enqueue(RotationRecord::new(tag)).unwrap();
        }
        queue
    }

    fn tags(queue: &RotationQueue) -> Vec<String> {
        queue.iter().map(|r| r.tag.to_string()).collect()
    }

    #[test]
    fn test_rotate_moves_front_to_back() {
        let mut queue = queue_of(&["A", "B", "C"], 5);
        queue.rotate_once();
        assert_eq!(tags(&queue), vec!["B", "C", "A"]);
        assert_eq!(queue.front().map(|r| r.tag.as_str()), Some("B"));
    }

    #[test]
    fn test_rotating_len_times_is_identity() {
        for capacity in [4, 5, 9] {
            let mut queue = queue_of(&["A", "B", "C", "D"], capacity);
            for _ in 0..queue.len() {
                queue.rotate_once();
            }
            assert_eq!(tags(&queue), vec!["A", "B", "C", "D"]);
        }
    }

    #[test]
    fn test_rotate_is_noop_for_zero_or_one() {
        let mut empty = RotationQueue::new(3);
        empty.rotate_once();
        assert!(empty.is_empty());

        let mut single = queue_of(&["A"], 3);
        single.rotate_once();
        assert_eq!(tags(&single), vec!["A"]);
    }

    #[test]
    fn test_rotate_never_changes_count() {
        let mut queue = queue_of(&["A", "B", "C"], 3);
        queue.rotate_once();
        queue.rotate_once();
        assert_eq!(queue.len(), 3);
        assert!(queue.is_full());
    }

    #[test]
    fn test_enqueue_after_rotation_appends_at_tail() {
        let mut queue = queue_of(&["A", "B", "C"], 4);
        queue.rotate_once();
        queue.enqueue(RotationRecord::new("D")).unwrap();
        assert_eq!(tags(&queue), vec!["B", "C", "A", "D"]);
        assert_eq!(
            queue.enqueue(RotationRecord::new("E")),
            Err(StoreError::Full { capacity: 4 })
        );
    }

    #[test]
    fn test_dequeue_takes_current_front() {
        let mut queue = queue_of(&["A", "B"], 2);
        queue.rotate_once();
        assert_eq!(queue.dequeue().unwrap().tag, "B");
        assert_eq!(queue.dequeue().unwrap().tag, "A");
        assert_eq!(queue.dequeue(), Err(StoreError::Empty));
    }
}
