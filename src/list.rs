//! Recency list.
//!
//! A doubly linked list over arena indices ordering all live entries from
//! most recently used (head) to least recently used (tail). The list owns
//! the capacity bound and the entry count; the engine pops the tail when an
//! insert of a brand-new key finds the list full, so the count never
//! exceeds the capacity.
//!
//! `insert_head`, `remove`, and `pop_tail` each handle the empty,
//! single-element, and general cases, keeping `head` and `tail` consistent
//! throughout.

use core::num::NonZeroUsize;

use crate::arena::EntryArena;

/// MRU→LRU ordering over arena entries with a fixed capacity.
pub(crate) struct RecencyList {
    /// Maximum number of entries the list may hold.
    cap: NonZeroUsize,
    /// Current number of entries.
    len: usize,
    /// Most recently used entry.
    head: Option<usize>,
    /// Least recently used entry.
    tail: Option<usize>,
}

impl RecencyList {
    /// Creates an empty list bounded by `cap`.
    pub(crate) fn new(cap: NonZeroUsize) -> Self {
        RecencyList {
            cap,
            len: 0,
            head: None,
            tail: None,
        }
    }

    /// Current number of entries.
    pub(crate) fn len(&self) -> usize {
        self.len
    }

    /// Returns true if the list holds no entries.
    pub(crate) fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// Returns true if the list is at capacity.
    pub(crate) fn is_full(&self) -> bool {
        self.len == self.cap.get()
    }

    /// The most recently used entry, if any.
    pub(crate) fn head(&self) -> Option<usize> {
        self.head
    }

    /// The least recently used entry, if any.
    #[cfg(test)]
    pub(crate) fn tail(&self) -> Option<usize> {
        self.tail
    }

    /// Links the entry at `idx` in as the new head.
    ///
    /// The entry must be unlinked (fresh from the arena or just removed).
    pub(crate) fn insert_head(&mut self, arena: &mut EntryArena, idx: usize) {
        let old_head = self.head;
        match arena.get_mut(idx) {
            Some(entry) => {
                entry.lru_prev = None;
                entry.lru_next = old_head;
            }
            None => return,
        }

        match old_head {
            Some(head_idx) => {
                if let Some(head_entry) = arena.get_mut(head_idx) {
                    head_entry.lru_prev = Some(idx);
                }
            }
            // Empty list: the new entry is both head and tail.
            None => self.tail = Some(idx),
        }
        self.head = Some(idx);
        self.len += 1;
    }

    /// Unlinks the entry at `idx`, fixing up `head`/`tail` as needed.
    pub(crate) fn remove(&mut self, arena: &mut EntryArena, idx: usize) {
        if self.is_empty() {
            return;
        }
        let (prev, next) = match arena.get(idx) {
            Some(entry) => (entry.lru_prev, entry.lru_next),
            None => return,
        };

        match prev {
            Some(prev_idx) => {
                if let Some(prev_entry) = arena.get_mut(prev_idx) {
                    prev_entry.lru_next = next;
                }
            }
            // Removing the head.
            None => self.head = next,
        }
        match next {
            Some(next_idx) => {
                if let Some(next_entry) = arena.get_mut(next_idx) {
                    next_entry.lru_prev = prev;
                }
            }
            // Removing the tail.
            None => self.tail = prev,
        }
        if let Some(entry) = arena.get_mut(idx) {
            entry.lru_prev = None;
            entry.lru_next = None;
        }
        self.len -= 1;
    }

    /// Moves the entry at `idx` to the head.
    pub(crate) fn move_to_head(&mut self, arena: &mut EntryArena, idx: usize) {
        if self.head == Some(idx) {
            return;
        }
        self.remove(arena, idx);
        self.insert_head(arena, idx);
    }

    /// Unlinks and returns the current tail — the LRU victim.
    pub(crate) fn pop_tail(&mut self, arena: &mut EntryArena) -> Option<usize> {
        let tail = self.tail?;
        self.remove(arena, tail);
        Some(tail)
    }

    /// Forgets every entry. The arena owns the storage; clearing the list
    /// only resets the ordering state.
    pub(crate) fn clear(&mut self) {
        self.head = None;
        self.tail = None;
        self.len = 0;
    }
}

impl core::fmt::Debug for RecencyList {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.debug_struct("RecencyList")
            .field("capacity", &self.cap)
            .field("length", &self.len)
            .finish()
    }
}
