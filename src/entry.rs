//! Cache entry type.
//!
//! An [`Entry`] is the unit of storage: a bounded key, an independently
//! locked value cell, and two link pairs threading the entry through the
//! hash-bucket chain and the recency list. Links are arena indices rather
//! than pointers; an entry is addressed by its slot index for as long as it
//! lives, and it is released only after it has been unlinked from both
//! structures.

use std::sync::Arc;

use parking_lot::Mutex;

/// Shared handle to an entry's value, protected by its own lock.
///
/// `get` and value-overwriting `set` clone this handle out of the
/// structural-lock critical section and then lock only the cell, so value
/// copies never hold up index or list mutation. The cell outlives eviction
/// while any reader still holds a handle.
pub(crate) type ValueCell = Arc<Mutex<String>>;

/// A cache entry: key, locked value cell, and the two link pairs.
pub(crate) struct Entry {
    /// The key, unique across the cache.
    key: String,
    /// The value, behind the per-entry lock.
    value: ValueCell,
    /// Previous entry in this entry's bucket chain.
    pub(crate) hash_prev: Option<usize>,
    /// Next entry in this entry's bucket chain.
    pub(crate) hash_next: Option<usize>,
    /// Previous (more recently used) entry in the recency list.
    pub(crate) lru_prev: Option<usize>,
    /// Next (less recently used) entry in the recency list.
    pub(crate) lru_next: Option<usize>,
}

impl Entry {
    /// Creates an unlinked entry holding `key` and `value`.
    pub(crate) fn new(key: String, value: String) -> Self {
        Entry {
            key,
            value: Arc::new(Mutex::new(value)),
            hash_prev: None,
            hash_next: None,
            lru_prev: None,
            lru_next: None,
        }
    }

    /// The entry's key.
    pub(crate) fn key(&self) -> &str {
        &self.key
    }

    /// Clones out a handle to the value cell.
    pub(crate) fn value_cell(&self) -> ValueCell {
        Arc::clone(&self.value)
    }

    /// Consumes the entry, yielding its value cell.
    pub(crate) fn into_value_cell(self) -> ValueCell {
        self.value
    }
}

impl core::fmt::Debug for Entry {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.debug_struct("Entry")
            .field("key", &self.key)
            .field("hash_prev", &self.hash_prev)
            .field("hash_next", &self.hash_next)
            .field("lru_prev", &self.lru_prev)
            .field("lru_next", &self.lru_next)
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_entry_is_unlinked() {
        let entry = Entry::new("key".to_string(), "value".to_string());
        assert_eq!(entry.key(), "key");
        assert!(entry.hash_prev.is_none());
        assert!(entry.hash_next.is_none());
        assert!(entry.lru_prev.is_none());
        assert!(entry.lru_next.is_none());
    }

    #[test]
    fn test_value_cell_is_shared() {
        let entry = Entry::new("key".to_string(), "before".to_string());
        let cell = entry.value_cell();
        *cell.lock() = "after".to_string();
        assert_eq!(entry.value.lock().as_str(), "after");
    }

    #[test]
    fn test_cell_outlives_entry() {
        let entry = Entry::new("key".to_string(), "value".to_string());
        let cell = entry.value_cell();
        drop(entry);
        assert_eq!(cell.lock().as_str(), "value");
    }
}
