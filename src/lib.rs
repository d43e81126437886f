#![doc = include_str!("../README.md")]
//!
//! ---
//!
//! # Code Reference
//!
//! ## Operations
//!
//! | Operation | Effect | Cost |
//! |-----------|--------|------|
//! | [`LruKvCache::new`] | validate capacity, allocate buckets + arena | O(capacity) |
//! | [`LruKvCache::set`] | insert or overwrite + promote, evicting at capacity | O(1) average |
//! | [`LruKvCache::get`] | owned copy of the value + promote | O(1) average |
//! | [`LruKvCache::remove`] | unlink one key | O(1) average |
//! | drop | release every entry and all storage | O(capacity) |
//!
//! ## Quick Example
//!
//! ```rust
//! use lru_kv::LruKvCache;
//!
//! let cache = LruKvCache::new(2).unwrap();
//! cache.set("a", "1").unwrap();
//! cache.set("b", "2").unwrap();
//! cache.get("a");            // "a" becomes most recently used
//! cache.set("c", "3").unwrap();   // "b" evicted (least recently used)
//! assert!(cache.get("b").is_none());
//! ```
//!
//! ## Structure
//!
//! ```text
//! ┌──────────────────────────────────────────────────────────────┐
//! │                        LruKvCache                            │
//! │  ┌────────────────────────────────────────────────────────┐  │
//! │  │ structural Mutex                                       │  │
//! │  │                                                        │  │
//! │  │  HashIndex            RecencyList        EntryArena    │  │
//! │  │  [b0] ─▶ e3           head ─▶ e1         [e0] [e1]     │  │
//! │  │  [b1] ─▶ e0 ─▶ e1     ...                [e2] [e3]     │  │
//! │  │  [b2]                 tail ─▶ e2                       │  │
//! │  └────────────────────────────────────────────────────────┘  │
//! │        each entry: value behind its own Mutex                │
//! └──────────────────────────────────────────────────────────────┘
//! ```
//!
//! Both link structures address entries by arena index; an entry leaves
//! the arena only after it has been unlinked from its bucket chain and
//! from the recency list.

/// Entry arena.
///
/// One slab of entry slots addressed by stable indices, with a free list.
/// The bucket chains and the recency list both link entries by index into
/// this arena.
pub(crate) mod arena;

/// Thread-safe cache facade.
///
/// The public [`LruKvCache`] type: structural lock around the engine,
/// per-entry value locks for copies and overwrites.
pub mod cache;

/// Cache configuration.
///
/// Capacity validation and the key/value byte bounds.
pub mod config;

/// Cache entry type.
///
/// Key, independently locked value cell, and the two link pairs.
pub(crate) mod entry;

/// Error types.
pub mod error;

/// Hash index.
///
/// Bucket-chained table with as many buckets as the cache has capacity;
/// polynomial rolling hash reduced modulo the bucket count.
pub(crate) mod index;

/// Recency list.
///
/// Doubly linked MRU→LRU ordering over arena indices; surfaces the tail
/// as the eviction victim.
pub(crate) mod list;

/// LRU cache engine.
///
/// Composes arena, index, and list; owns eviction.
pub(crate) mod lru;

pub use cache::LruKvCache;
pub use config::{CacheConfig, MAX_KEY_LEN, MAX_VALUE_LEN};
pub use error::{CacheError, Result};
