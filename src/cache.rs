//! Thread-safe LRU key/value cache.
//!
//! [`LruKvCache`] is the public face of the crate: a fixed-capacity
//! key/value store shared by reference across threads. One structural lock
//! guards the index, the recency list, and the entry count; each entry's
//! value has its own lock.
//!
//! # Locking discipline
//!
//! Every operation that changes structure — insert, remove, promotion,
//! eviction — holds the structural lock for the whole logical operation,
//! scoped to a single [`parking_lot::Mutex`] guard, so no other thread can
//! observe a half-spliced list or a key registered in only one structure.
//!
//! Value bytes move under the entry lock alone: `get` clones the value
//! cell handle inside the structural section and copies the string after
//! releasing it, and `set` on an existing key overwrites the same way.
//! Two threads working on different keys contend on the structural lock
//! only for the pointer updates, not for the value copies.
//!
//! Lock order is always structural lock first, then at most one entry
//! lock; no path acquires the structural lock while holding an entry
//! lock, so the pair cannot deadlock.
//!
//! # Example
//!
//! ```
//! use lru_kv::LruKvCache;
//! use std::sync::Arc;
//! use std::thread;
//!
//! let cache = Arc::new(LruKvCache::new(128).unwrap());
//!
//! let handles: Vec<_> = (0..4)
//!     .map(|t| {
//!         let cache = Arc::clone(&cache);
//!         thread::spawn(move || {
//!             for i in 0..100 {
//!                 let key = format!("key_{}_{}", t, i);
//!                 cache.set(&key, "payload").unwrap();
//!                 assert_eq!(cache.get(&key).as_deref(), Some("payload"));
//!             }
//!         })
//!     })
//!     .collect();
//!
//! for handle in handles {
//!     handle.join().unwrap();
//! }
//! assert!(cache.len() <= 128);
//! ```

use parking_lot::Mutex;

use crate::config::{self, CacheConfig};
use crate::error::Result;
use crate::lru::LruCore;

/// A fixed-capacity, thread-safe LRU key/value cache.
///
/// Created with a positive capacity that never changes. When an insert of
/// an unseen key finds the cache full, the least recently used entry is
/// evicted; updates and lookups only re-promote. Keys are bounded by
/// [`MAX_KEY_LEN`](crate::MAX_KEY_LEN) bytes and values by
/// [`MAX_VALUE_LEN`](crate::MAX_VALUE_LEN) bytes; over-bound inputs are
/// rejected, never truncated.
///
/// The cache is destroyed by dropping it: `Drop` releases every entry and
/// the bucket storage. Ownership makes use-after-destroy and
/// double-destroy unrepresentable.
///
/// # Examples
///
/// ```
/// use lru_kv::LruKvCache;
///
/// let cache = LruKvCache::new(2).unwrap();
/// cache.set("apple", "1").unwrap();
/// cache.set("banana", "2").unwrap();
///
/// // Accessing "apple" makes it most recently used.
/// assert_eq!(cache.get("apple").as_deref(), Some("1"));
///
/// // Inserting past capacity evicts the least recently used key.
/// cache.set("cherry", "3").unwrap();
/// assert_eq!(cache.get("banana"), None);
/// assert_eq!(cache.get("apple").as_deref(), Some("1"));
/// assert_eq!(cache.get("cherry").as_deref(), Some("3"));
/// ```
pub struct LruKvCache {
    core: Mutex<LruCore>,
}

impl LruKvCache {
    /// Creates a cache holding at most `capacity` entries.
    ///
    /// # Errors
    ///
    /// [`CacheError::ZeroCapacity`](crate::CacheError::ZeroCapacity) if
    /// `capacity` is zero;
    /// [`CacheError::AllocationFailed`](crate::CacheError::AllocationFailed)
    /// if the bucket array or entry arena cannot be allocated. Nothing is
    /// allocated before validation, and no partially built cache escapes.
    pub fn new(capacity: usize) -> Result<Self> {
        Self::with_config(CacheConfig::new(capacity)?)
    }

    /// Creates a cache from an existing configuration.
    pub fn with_config(config: CacheConfig) -> Result<Self> {
        Ok(LruKvCache {
            core: Mutex::new(LruCore::new(config)?),
        })
    }

    /// Maximum number of entries the cache can hold.
    pub fn capacity(&self) -> usize {
        self.core.lock().capacity()
    }

    /// Current number of entries.
    pub fn len(&self) -> usize {
        self.core.lock().len()
    }

    /// Returns true if the cache holds no entries.
    pub fn is_empty(&self) -> bool {
        self.core.lock().is_empty()
    }

    /// Stores `value` under `key`.
    ///
    /// An existing key is overwritten in place and promoted to most
    /// recently used; the entry count does not change and nothing is
    /// evicted. An unseen key is inserted at the most-recently-used
    /// position, evicting the least recently used entry if the cache is
    /// full.
    ///
    /// # Errors
    ///
    /// [`CacheError::KeyTooLong`](crate::CacheError::KeyTooLong) or
    /// [`CacheError::ValueTooLong`](crate::CacheError::ValueTooLong) when
    /// an input exceeds its bound; the cache is left untouched.
    pub fn set(&self, key: &str, value: &str) -> Result<()> {
        config::check_key(key)?;
        config::check_value(value)?;

        let existing = {
            let mut core = self.core.lock();
            match core.touch(key) {
                Some(cell) => Some(cell),
                None => {
                    core.insert(key.to_owned(), value.to_owned());
                    None
                }
            }
        };
        // Overwrite outside the structural section, holding only the
        // entry lock.
        if let Some(cell) = existing {
            *cell.lock() = value.to_owned();
        }
        Ok(())
    }

    /// Returns a copy of the value stored under `key`, promoting the entry
    /// to most recently used. `None` if the key is absent.
    ///
    /// The returned string is an owned copy taken under the entry lock, so
    /// a concurrent `set` on the same key can never produce a torn read;
    /// the caller sees one writer's bytes in full.
    pub fn get(&self, key: &str) -> Option<String> {
        let cell = self.core.lock().touch(key)?;
        let value = cell.lock().clone();
        Some(value)
    }

    /// Removes `key`, returning its value if it was present.
    pub fn remove(&self, key: &str) -> Option<String> {
        let cell = self.core.lock().remove(key)?;
        let value = cell.lock().clone();
        Some(value)
    }

    /// Removes every entry. The capacity is unchanged.
    pub fn clear(&self) {
        self.core.lock().clear();
    }

    /// Returns `(key, value)` pairs from most to least recently used.
    ///
    /// The snapshot is taken in one structural section, so it reflects a
    /// single consistent state of the cache.
    pub fn entries(&self) -> Vec<(String, String)> {
        self.core.lock().entries()
    }
}

impl core::fmt::Debug for LruKvCache {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        let core = self.core.lock();
        f.debug_struct("LruKvCache")
            .field("capacity", &core.capacity())
            .field("len", &core.len())
            .finish()
    }
}
