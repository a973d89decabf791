//! # Bounded History
//!
//! Most-recent-first buffer with a hard capacity. New entries go to the
//! front; once the buffer is full the oldest entry falls off the back.
//!
//! ## Design
//!
//! Backed by a `VecDeque`, so insertion and eviction are O(1) instead of
//! re-slicing an array on every insert.
//!
//! ## Example
//!
//! ```rust
//! use steward_monitor::BoundedHistory;
//!
//! let mut history = BoundedHistory::new(2);
//! history.push("a");
//! history.push("b");
//! let evicted = history.push("c");
//!
//! assert_eq!(evicted, Some("a"));
//! assert_eq!(history.iter().copied().collect::<Vec<_>>(), vec!["c", "b"]);
//! ```

use std::collections::VecDeque;

/// Capacity used by the store for both signals and decisions.
pub const DEFAULT_HISTORY_CAPACITY: usize = 50;

/// A capped, most-recent-first buffer.
#[derive(Debug, Clone)]
pub struct BoundedHistory<T> {
    entries: VecDeque<T>,
    capacity: usize,
}

impl<T> BoundedHistory<T> {
    /// Creates an empty history holding at most `capacity` entries.
    #[must_use]
    pub fn new(capacity: usize) -> Self {
        Self {
            entries: VecDeque::with_capacity(capacity),
            capacity,
        }
    }

    /// Pushes an entry to the front, returning the evicted oldest entry
    /// when the capacity is exceeded.
    pub fn push(&mut self, entry: T) -> Option<T> {
        self.entries.push_front(entry);
        if self.entries.len() > self.capacity {
            self.entries.pop_back()
        } else {
            None
        }
    }

    /// Removes and returns the first entry matching `pred`.
    pub fn remove_first<F>(&mut self, pred: F) -> Option<T>
    where
        F: FnMut(&T) -> bool,
    {
        let index = self.entries.iter().position(pred)?;
        self.entries.remove(index)
    }

    /// Iterates from most recent to oldest.
    pub fn iter(&self) -> impl Iterator<Item = &T> {
        self.entries.iter()
    }

    /// Returns the entries as one slice, most recent first.
    pub fn make_contiguous(&mut self) -> &[T] {
        self.entries.make_contiguous()
    }

    /// Returns the most recent entry.
    #[inline]
    #[must_use]
    pub fn latest(&self) -> Option<&T> {
        self.entries.front()
    }

    /// Number of entries held.
    #[inline]
    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Returns true when nothing is held.
    #[inline]
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Maximum number of entries held.
    #[inline]
    #[must_use]
    pub const fn capacity(&self) -> usize {
        self.capacity
    }

    /// Drops every entry.
    pub fn clear(&mut self) {
        self.entries.clear();
    }
}

impl<T> Default for BoundedHistory<T> {
    fn default() -> Self {
        Self::new(DEFAULT_HISTORY_CAPACITY)
    }
}
