//! LRU cache engine.
//!
//! [`LruCore`] composes the entry arena, the hash index, and the recency
//! list into the single-owner cache algorithm. All structural state lives
//! here; the public [`LruKvCache`](crate::LruKvCache) wraps an `LruCore`
//! in the structural lock and layers the per-entry value locking on top.
//!
//! # Algorithm
//!
//! - `touch` resolves a key through the index and promotes the entry to the
//!   head of the recency list: O(1) average.
//! - `insert` links a brand-new key into both structures, first evicting
//!   the recency-list tail when the cache is full. Exactly one entry is
//!   evicted per over-capacity insert, and only inserts of unseen keys
//!   evict; updates and lookups never do.
//! - `remove` unlinks a key from both structures and releases its slot.
//!
//! Every method upholds the structural invariants: index and list reach
//! the same entries, each entry is in exactly one bucket chain and one
//! list position, keys are unique, and the entry count never exceeds the
//! capacity.

use crate::arena::EntryArena;
use crate::config::CacheConfig;
use crate::entry::{Entry, ValueCell};
use crate::error::Result;
use crate::index::HashIndex;
use crate::list::RecencyList;

/// The cache engine: arena + index + recency list under one owner.
pub(crate) struct LruCore {
    config: CacheConfig,
    arena: EntryArena,
    index: HashIndex,
    list: RecencyList,
}

impl LruCore {
    /// Builds an engine with all storage for `config.capacity` entries
    /// allocated up front.
    pub(crate) fn new(config: CacheConfig) -> Result<Self> {
        Ok(LruCore {
            config,
            arena: EntryArena::with_capacity(config.capacity)?,
            index: HashIndex::with_buckets(config.capacity)?,
            list: RecencyList::new(config.capacity),
        })
    }

    /// Maximum number of entries.
    pub(crate) fn capacity(&self) -> usize {
        self.config.capacity.get()
    }

    /// Current number of entries.
    pub(crate) fn len(&self) -> usize {
        self.list.len()
    }

    /// Returns true if the cache holds no entries.
    pub(crate) fn is_empty(&self) -> bool {
        self.list.is_empty()
    }

    /// Looks up `key`, promotes its entry to most recently used, and hands
    /// back the value cell.
    ///
    /// Shared by `get` and the update path of `set`: both promote under
    /// the structural lock and touch the value only through the cell.
    pub(crate) fn touch(&mut self, key: &str) -> Option<ValueCell> {
        let idx = self.index.lookup(&self.arena, key)?;
        self.list.move_to_head(&mut self.arena, idx);
        self.arena.get(idx).map(Entry::value_cell)
    }

    /// Inserts a brand-new key at the head, evicting the least recently
    /// used entry when the cache is full.
    ///
    /// The caller has already established, inside the same critical
    /// section, that `key` is absent.
    pub(crate) fn insert(&mut self, key: String, value: String) {
        if self.list.is_full() {
            self.evict_lru();
        }
        if let Some(idx) = self.arena.alloc(Entry::new(key, value)) {
            self.index.insert(&mut self.arena, idx);
            self.list.insert_head(&mut self.arena, idx);
        }
    }

    /// Evicts the current tail: unlinks it from the list and the index and
    /// releases its arena slot. One call frees exactly one entry.
    fn evict_lru(&mut self) {
        if let Some(tail) = self.list.pop_tail(&mut self.arena) {
            self.index.unlink(&mut self.arena, tail);
            self.arena.release(tail);
        }
    }

    /// Removes `key` from both structures, returning its value cell.
    pub(crate) fn remove(&mut self, key: &str) -> Option<ValueCell> {
        let idx = self.index.remove(&mut self.arena, key)?;
        self.list.remove(&mut self.arena, idx);
        self.arena.release(idx).map(Entry::into_value_cell)
    }

    /// Drops every entry and resets both structures.
    pub(crate) fn clear(&mut self) {
        self.index.clear();
        self.list.clear();
        self.arena.clear();
    }

    /// Snapshot of `(key, value)` pairs from most to least recently used.
    ///
    /// Runs under the structural lock; value cells are locked one at a
    /// time in structural → entry order.
    pub(crate) fn entries(&self) -> Vec<(String, String)> {
        let mut pairs = Vec::with_capacity(self.len());
        let mut cursor = self.list.head();
        while let Some(idx) = cursor {
            match self.arena.get(idx) {
                Some(entry) => {
                    let value = entry.value_cell().lock().clone();
                    pairs.push((entry.key().to_string(), value));
                    cursor = entry.lru_next;
                }
                None => break,
            }
        }
        pairs
    }

    /// Validates the structural invariants; test builds only.
    #[cfg(test)]
    pub(crate) fn assert_invariants(&self) {
        use std::collections::HashSet;

        // Walk the recency list forward, checking back-links and
        // collecting membership.
        let mut seen = HashSet::new();
        let mut cursor = self.list.head();
        let mut prev: Option<usize> = None;
        while let Some(idx) = cursor {
            let entry = self.arena.get(idx).expect("list reaches a live slot");
            assert_eq!(entry.lru_prev, prev, "back-link consistent");
            assert!(seen.insert(idx), "entry appears once in the list");
            prev = cursor;
            cursor = entry.lru_next;
        }
        assert_eq!(self.list.tail(), prev, "tail is the last reachable entry");

        // Same population from the list, the counter, the arena, and the
        // bucket chains.
        assert_eq!(seen.len(), self.list.len());
        assert_eq!(seen.len(), self.arena.len());
        assert_eq!(seen.len(), self.index.reachable_len(&self.arena));

        // Capacity bound and key uniqueness; every listed entry resolves
        // through the index to itself.
        assert!(self.list.len() <= self.capacity());
        let mut keys = HashSet::new();
        for &idx in &seen {
            let entry = self.arena.get(idx).expect("live slot");
            assert!(keys.insert(entry.key().to_string()), "keys are unique");
            assert_eq!(
                self.index.lookup(&self.arena, entry.key()),
                Some(idx),
                "index resolves each key to its entry"
            );
        }
    }
}

impl core::fmt::Debug for LruCore {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.debug_struct("LruCore")
            .field("capacity", &self.config.capacity)
            .field("len", &self.list.len())
            .finish()
    }
}
