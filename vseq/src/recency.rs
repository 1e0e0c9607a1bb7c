use alloc::collections::VecDeque;

/// A fixed-capacity most-recent-first buffer.
///
/// `push` inserts at the front and evicts from the back once `capacity` is reached. Entries
/// are not deduplicated: reading the same entity repeatedly fills several slots with it,
/// which keeps frequently re-read entities alive longer than one-off reads. With a capacity
/// of `0` nothing is retained.
#[derive(Clone, Debug)]
pub struct RecencyBuffer<T> {
    entries: VecDeque<T>,
    capacity: usize,
}

impl<T> RecencyBuffer<T> {
    pub fn new(capacity: usize) -> Self {
        Self {
            entries: VecDeque::with_capacity(capacity),
            capacity,
        }
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn capacity(&self) -> usize {
        self.capacity
    }

    /// Changes the capacity, dropping the oldest entries if the buffer is now too long.
    pub fn set_capacity(&mut self, capacity: usize) {
        self.capacity = capacity;
        self.entries.truncate(capacity);
    }

    /// Records `item` as the most recent entry. Returns the evicted oldest entry, if any.
    pub fn push(&mut self, item: T) -> Option<T> {
        if self.capacity == 0 {
            return Some(item);
        }
        let evicted = if self.entries.len() >= self.capacity {
            self.entries.pop_back()
        } else {
            None
        };
        self.entries.push_front(item);
        debug_assert!(self.entries.len() <= self.capacity);
        evicted
    }

    pub fn most_recent(&self) -> Option<&T> {
        self.entries.front()
    }

    pub fn oldest(&self) -> Option<&T> {
        self.entries.back()
    }

    /// Iterates from most to least recent.
    pub fn iter(&self) -> alloc::collections::vec_deque::Iter<'_, T> {
        self.entries.iter()
    }

    pub fn clear(&mut self) {
        self.entries.clear();
    }
}
