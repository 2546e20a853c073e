//! Inventory stack: bounded LIFO of supply batches
//!
//! Besides plain push/pop, a batch can be taken by supply type. The most
//! recently pushed batch of that type is extracted and every batch above it
//! slides down one slot, so the remaining batches keep their relative order.

use crate::error::StoreError;
use crate::persist::Persisted;
use crate::record::{BoundedText, InventoryRecord, SUPPLY_TYPE_MAX};

/// Default number of batches the stack holds
pub const DEFAULT_INVENTORY_CAPACITY: usize = 100;

#[derive(Debug, Clone)]
pub struct InventoryStack {
    /// Bottom at index 0, top at the end
    items: Vec<InventoryRecord>,
    capacity: usize,
}

impl InventoryStack {
    pub fn new(capacity: usize) -> Self {
        Self {
            items: Vec::with_capacity(capacity),
            capacity,
        }
    }

    /// Push a batch onto the top
    pub fn push(&mut self, record: InventoryRecord) -> Result<(), StoreError> {
        if self.is_full() {
            return Err(StoreError::Full {
                capacity: self.capacity,
            });
        }
        self.items.push(record);
        Ok(())
    }

    /// Take the most recently pushed batch
    pub fn pop_top(&mut self) -> Result<InventoryRecord, StoreError> {
        self.items.pop().ok_or(StoreError::Empty)
    }

    pub fn peek_top(&self) -> Option<&InventoryRecord> {
        self.items.last()
    }

    /// Take the most recently pushed batch whose type matches `key`.
    ///
    /// The key is clipped to the type budget before comparing, so a caller
    /// passing the long form of a stored (truncated) type still matches.
    /// Costs O(distance from top).
    pub fn remove_most_recent_by_key(&mut self, key: &str) -> Result<InventoryRecord, StoreError> {
        let key = BoundedText::<SUPPLY_TYPE_MAX>::new(key);
        let idx = self
            .items
            .iter()
            .rposition(|item| item.kind == key)
            .ok_or_else(|| StoreError::NotFound {
                key: key.to_string(),
            })?;
        Ok(self.items.remove(idx))
    }

    /// Each supply type held, once, in order of first appearance from the bottom
    pub fn distinct_keys(&self) -> Vec<&str> {
        let mut keys: Vec<&str> = Vec::new();
        for item in &self.items {
            if !keys.contains(&item.kind.as_str()) {
                keys.push(item.kind.as_str());
            }
        }
        keys
    }

    /// Batches from bottom to top (push order)
    pub fn iter(&self) -> impl DoubleEndedIterator<Item = &InventoryRecord> + '_ {
        self.items.iter()
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    pub fn is_full(&self) -> bool {
        self.items.len() >= self.capacity
    }

    pub fn capacity(&self) -> usize {
        self.capacity
    }

    pub fn clear(&mut self) {
        self.items.clear();
    }
}

impl Default for InventoryStack {
    fn default() -> Self {
        Self::new(DEFAULT_INVENTORY_CAPACITY)
    }
}

impl Persisted for InventoryStack {
    type Record = InventoryRecord;

    fn records(&self) -> impl Iterator<Item = &InventoryRecord> {
        self.iter()
    }

    fn clear(&mut self) {
        InventoryStack::clear(self);
    }

    fn restore_one(&mut self, record: InventoryRecord) -> Result<(), StoreError> {
        self.push(record)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn batches(stack: &InventoryStack) -> Vec<String> {
        stack.iter().map(|r| r.batch.to_string()).collect()
    }

    #[test]
    fn test_pop_top_is_lifo() {
        let mut stack = InventoryStack::new(5);
        for (i, batch) in ["B1", "B2", "B3"].iter().enumerate() {
            stack
                .push(InventoryRecord::new("Gauze", i as i32 + 1, batch))
                .unwrap();
        }

        assert_eq!(stack.pop_top().unwrap().batch, "B3");
        assert_eq!(stack.pop_top().unwrap().batch, "B2");
        assert_eq!(stack.pop_top().unwrap().batch, "B1");
        assert_eq!(stack.pop_top(), Err(StoreError::Empty));
    }

    #[test]
    fn test_push_on_full_is_rejected() {
        let mut stack = InventoryStack::new(1);
        stack.push(InventoryRecord::new("Gauze", 1, "B1")).unwrap();
        assert_eq!(
            stack.push(InventoryRecord::new("Saline", 1, "B2")),
            Err(StoreError::Full { capacity: 1 })
        );
        assert_eq!(batches(&stack), vec!["B1"]);
    }

    #[test]
    fn test_keyed_removal_takes_most_recent_and_keeps_order() {
        let mut stack = InventoryStack::new(10);
        stack.push(InventoryRecord::new("Mask", 10, "X1")).unwrap();
        stack.push(InventoryRecord::new("Gloves", 20, "X2")).unwrap();
        stack.push(InventoryRecord::new("Mask", 30, "X3")).unwrap();

        let removed = stack.remove_most_recent_by_key("Mask").unwrap();
        assert_eq!(removed.batch, "X3");
        assert_eq!(batches(&stack), vec!["X1", "X2"]);
    }

    #[test]
    fn test_keyed_removal_from_middle_shifts_upper_batches_down() {
        let mut stack = InventoryStack::new(10);
        stack.push(InventoryRecord::new("Mask", 1, "X1")).unwrap();
        stack.push(InventoryRecord::new("Saline", 2, "X2")).unwrap();
        stack.push(InventoryRecord::new("Gloves", 3, "X3")).unwrap();
        stack.push(InventoryRecord::new("Gauze", 4, "X4")).unwrap();

        let removed = stack.remove_most_recent_by_key("Saline").unwrap();
        assert_eq!(removed.quantity, 2);
        assert_eq!(batches(&stack), vec!["X1", "X3", "X4"]);
        assert_eq!(stack.peek_top().unwrap().batch, "X4");
    }

    #[test]
    fn test_keyed_removal_not_found_leaves_stack_unchanged() {
        let mut stack = InventoryStack::new(10);
        stack.push(InventoryRecord::new("Mask", 1, "X1")).unwrap();

        assert_eq!(
            stack.remove_most_recent_by_key("Bandage"),
            Err(StoreError::NotFound {
                key: "Bandage".to_string()
            })
        );
        assert_eq!(batches(&stack), vec!["X1"]);
    }

    #[test]
    fn test_keyed_removal_on_empty_stack_is_not_found() {
        let mut stack = InventoryStack::new(3);
        assert!(matches!(
            stack.remove_most_recent_by_key("Mask"),
            Err(StoreError::NotFound { .. })
        ));
    }

    #[test]
    fn test_keyed_removal_matches_truncated_key() {
        let long_type = "Sterile surgical gloves, size M, powder free";
        let mut stack = InventoryStack::new(3);
        stack.push(InventoryRecord::new(long_type, 5, "G1")).unwrap();

        // Stored type is clipped to the budget; the long key still matches
        assert_eq!(stack.peek_top().unwrap().kind.len(), SUPPLY_TYPE_MAX);
        let removed = stack.remove_most_recent_by_key(long_type).unwrap();
        assert_eq!(removed.batch, "G1");
        assert!(stack.is_empty());
    }

    #[test]
    fn test_distinct_keys_in_first_appearance_order() {
        let mut stack = InventoryStack::new(10);
        for kind in ["Mask", "Gloves", "Mask", "Saline", "Gloves"] {
            stack.push(InventoryRecord::new(kind, 1, "B")).unwrap();
        }
        assert_eq!(stack.distinct_keys(), vec!["Mask", "Gloves", "Saline"]);
    }
}
