//! Fixed-capacity circular buffer
//!
//! Shared by the intake and rotation queues. A head/tail index pair walks a
//! fixed slot array; a separate count tells "full" from "empty" when the two
//! indices meet.

use crate::error::StoreError;

#[derive(Debug, Clone)]
pub(crate) struct Ring<T> {
    slots: Vec<Option<T>>,
    head: usize,
    tail: usize,
    count: usize,
}

impl<T> Ring<T> {
    pub(crate) fn new(capacity: usize) -> Self {
        Self {
            slots: std::iter::repeat_with(|| None).take(capacity).collect(),
            head: 0,
            tail: 0,
            count: 0,
        }
    }

    pub(crate) fn capacity(&self) -> usize {
        self.slots.len()
    }

    pub(crate) fn len(&self) -> usize {
        self.count
    }

    pub(crate) fn is_empty(&self) -> bool {
        self.count == 0
    }

    pub(crate) fn is_full(&self) -> bool {
        self.count == self.capacity()
    }

    pub(crate) fn clear(&mut self) {
        self.slots.iter_mut().for_each(|slot| *slot = None);
        self.head = 0;
        self.tail = 0;
        self.count = 0;
    }

    pub(crate) fn push_back(&mut self, item: T) -> Result<(), StoreError> {
        if self.is_full() {
            return Err(StoreError::Full {
                capacity: self.capacity(),
            });
        }
        self.slots[self.tail] = Some(item);
        self.tail = self.advance(self.tail);
        self.count += 1;
        Ok(())
    }

    pub(crate) fn pop_front(&mut self) -> Result<T, StoreError> {
        if self.is_empty() {
            return Err(StoreError::Empty);
        }
        let item = self.slots[self.head].take().ok_or(StoreError::Empty)?;
        self.head = self.advance(self.head);
        self.count -= 1;
        Ok(item)
    }

    pub(crate) fn front(&self) -> Option<&T> {
        if self.is_empty() {
            return None;
        }
        self.slots[self.head].as_ref()
    }

    /// Move the front element to the back. No-op with fewer than two elements.
    ///
    /// When the ring is full head and tail share a slot, so the element is
    /// taken and put back in place while both indices advance.
    pub(crate) fn rotate(&mut self) {
        if self.count <= 1 {
            return;
        }
        let front = self.slots[self.head].take();
        self.slots[self.tail] = front;
        self.head = self.advance(self.head);
        self.tail = self.advance(self.tail);
    }

    /// Elements in arrival order, starting from head.
    pub(crate) fn iter(&self) -> impl Iterator<Item = &T> + '_ {
        (0..self.count).filter_map(move |offset| {
            let idx = (self.head + offset) % self.capacity();
            self.slots[idx].as_ref()
        })
    }

    fn advance(&self, idx: usize) -> usize {
        (idx + 1) % self.capacity()
    }
}
