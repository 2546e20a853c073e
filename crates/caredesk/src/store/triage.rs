//! Triage heap: bounded binary max-heap of emergency cases
//!
//! Positions are 1-indexed: the root is position 1 and position `i` has
//! children `2i` and `2i + 1`. Every parent's priority is at least that of
//! its children, so the most urgent case is always at the root.
//!
//! Equal priorities are not ordered by arrival. Sift-up stops on a tie, and
//! sift-down checks the left child before the right, replacing the candidate
//! only on a strictly greater priority, so a tie between children goes left.

use crate::error::StoreError;
use crate::persist::Persisted;
use crate::record::TriageRecord;

/// Default number of pending cases
pub const DEFAULT_TRIAGE_CAPACITY: usize = 100;

#[derive(Debug, Clone)]
pub struct TriageHeap {
    /// Position `p` lives at index `p - 1`
    slots: Vec<TriageRecord>,
    capacity: usize,
}

impl TriageHeap {
    pub fn new(capacity: usize) -> Self {
        Self {
            slots: Vec::with_capacity(capacity),
            capacity,
        }
    }

    /// Add a case and sift it up toward the root
    pub fn insert(&mut self, record: TriageRecord) -> Result<(), StoreError> {
        if self.is_full() {
            return Err(StoreError::Full {
                capacity: self.capacity,
            });
        }
        self.slots.push(record);
        self.sift_up(self.slots.len());
        Ok(())
    }

    /// The most urgent case, or `None` when empty
    pub fn peek_max(&self) -> Option<&TriageRecord> {
        self.slots.first()
    }

    /// Remove and return the most urgent case. Does nothing when empty.
    pub fn extract_max(&mut self) -> Option<TriageRecord> {
        let last = self.slots.pop()?;
        if self.slots.is_empty() {
            return Some(last);
        }
        let max = std::mem::replace(&mut self.slots[0], last);
        self.sift_down(1);
        Some(max)
    }

    /// Cases in heap-array order (positions 1..=len). Only the first is
    /// guaranteed to be the maximum; the rest are not sorted.
    pub fn iter(&self) -> impl Iterator<Item = &TriageRecord> + '_ {
        self.slots.iter()
    }

    pub fn len(&self) -> usize {
        self.slots.len()
    }

    pub fn is_empty(&self) -> bool {
        self.slots.is_empty()
    }

    pub fn is_full(&self) -> bool {
        self.slots.len() >= self.capacity
    }

    pub fn capacity(&self) -> usize {
        self.capacity
    }

    pub fn clear(&mut self) {
        self.slots.clear();
    }

    fn priority_at(&self, pos: usize) -> i32 {
        self.slots[pos - 1].priority
    }

    fn swap_positions(&mut self, a: usize, b: usize) {
        self.slots.swap(a - 1, b - 1);
    }

    fn sift_up(&mut self, mut pos: usize) {
        while pos > 1 && self.priority_at(pos) > self.priority_at(pos / 2) {
            self.swap_positions(pos, pos / 2);
            pos /= 2;
        }
    }

    fn sift_down(&mut self, mut pos: usize) {
        let size = self.slots.len();
        loop {
            let left = 2 * pos;
            let right = 2 * pos + 1;
            let mut largest = pos;

            if left <= size && self.priority_at(left) > self.priority_at(largest) {
                largest = left;
            }
            if right <= size && self.priority_at(right) > self.priority_at(largest) {
                largest = right;
            }
            if largest == pos {
                break;
            }

            self.swap_positions(pos, largest);
            pos = largest;
        }
    }
}

impl Default for TriageHeap {
    fn default() -> Self {
        Self::new(DEFAULT_TRIAGE_CAPACITY)
    }
}

impl Persisted for TriageHeap {
    type Record = TriageRecord;

    fn records(&self) -> impl Iterator<Item = &TriageRecord> {
        self.iter()
    }

    fn clear(&mut self) {
        TriageHeap::clear(self);
    }

    /// Goes through `insert`, so the heap shape is rebuilt from file order.
    fn restore_one(&mut self, record: TriageRecord) -> Result<(), StoreError> {
        self.insert(record)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn case(subject: &str, priority: i32) -> TriageRecord {
        TriageRecord::new(subject, "General", priority)
    }

    fn heap_of(priorities: &[i32]) -> TriageHeap {
        let mut heap = TriageHeap::new(32);
        for (i, p) in priorities.iter().enumerate() {
            heap.insert(case(&format!("case-{i}"), *p)).unwrap();
        }
        heap
    }

    fn priorities(heap: &TriageHeap) -> Vec<i32> {
        heap.iter().map(|r| r.priority).collect()
    }

    fn assert_heap_property(heap: &TriageHeap) {
        let p = priorities(heap);
        for pos in 2..=p.len() {
            assert!(
                p[pos / 2 - 1] >= p[pos - 1],
                "parent at {} ({}) below child at {} ({})",
                pos / 2,
                p[pos / 2 - 1],
                pos,
                p[pos - 1]
            );
        }
    }

    #[test]
    fn test_peek_and_extract_on_empty() {
        let mut heap = TriageHeap::new(4);
        assert!(heap.peek_max().is_none());
        assert!(heap.extract_max().is_none());
        assert!(heap.is_empty());
    }

    #[test]
    fn test_insert_sifts_up_to_root() {
        let heap = heap_of(&[3, 5, 9]);
        assert_eq!(heap.peek_max().unwrap().priority, 9);
        assert_eq!(priorities(&heap), vec![9, 3, 5]);
    }

    #[test]
    fn test_tie_does_not_sift_past_equal_parent() {
        let heap = heap_of(&[7, 7]);
        assert_eq!(heap.peek_max().unwrap().subject, "case-0");
    }

    #[test]
    fn test_extract_max_with_duplicates() {
        let mut heap = heap_of(&[5, 9, 3, 9]);
        assert_eq!(heap.extract_max().unwrap().priority, 9);

        let mut rest = priorities(&heap);
        rest.sort_unstable();
        assert_eq!(rest, vec![3, 5, 9]);
        assert_heap_property(&heap);
    }

    #[test]
    fn test_sift_down_prefers_left_child_on_tie() {
        // Array [10, 8, 8, 1]: extracting 10 moves 1 to the root; both
        // children are 8 and the left one is promoted.
        let mut heap = TriageHeap::new(8);
        heap.insert(case("root", 10)).unwrap();
        heap.insert(case("left", 8)).unwrap();
        heap.insert(case("right", 8)).unwrap();
        heap.insert(case("leaf", 1)).unwrap();

        heap.extract_max().unwrap();
        let subjects: Vec<_> = heap.iter().map(|r| r.subject.to_string()).collect();
        assert_eq!(subjects, vec!["left", "leaf", "right"]);
    }

    #[test]
    fn test_extraction_yields_non_increasing_priorities() {
        let mut heap = heap_of(&[4, 1, 8, 8, 2, 10, 0, -3, 6, 7, 7]);
        let mut previous = i32::MAX;
        while let Some(case) = heap.extract_max() {
            assert!(case.priority <= previous);
            previous = case.priority;
            assert_heap_property(&heap);
        }
    }

    #[test]
    fn test_max_property_under_mixed_operations() {
        let mut heap = TriageHeap::new(16);
        let script = [5, 1, -1, 12, 3, -1, -1, 7, 7, 2, -1, 9, 0, -1];
        for (i, step) in script.iter().enumerate() {
            if *step < 0 {
                heap.extract_max();
            } else {
                heap.insert(case(&format!("c{i}"), *step)).unwrap();
            }
            assert_heap_property(&heap);
            if let Some(max) = heap.peek_max() {
                assert!(heap.iter().all(|r| r.priority <= max.priority));
            }
        }
    }

    #[test]
    fn test_insert_on_full_is_rejected() {
        let mut heap = TriageHeap::new(2);
        heap.insert(case("a", 1)).unwrap();
        heap.insert(case("b", 2)).unwrap();
        assert_eq!(
            heap.insert(case("c", 99)),
            Err(StoreError::Full { capacity: 2 })
        );
        assert_eq!(heap.peek_max().unwrap().subject, "b");
        assert_eq!(heap.len(), 2);
    }
}
