//! Allocation Accounting Tests
//!
//! Dropping a cache must release every entry, the bucket array, and the
//! arena. This test instruments the global allocator and checks that a
//! full create→populate→drop cycle returns every allocation it made.
//!
//! Kept in its own test binary so no sibling test thread allocates while
//! the region is being measured.

use lru_kv::LruKvCache;
use stats_alloc::{Region, StatsAlloc, INSTRUMENTED_SYSTEM};
use std::alloc::System;

#[global_allocator]
static GLOBAL: &StatsAlloc<System> = &INSTRUMENTED_SYSTEM;

fn exercise(capacity: usize, inserts: usize) {
    let cache = LruKvCache::new(capacity).unwrap();
    for i in 0..inserts {
        let key = format!("key_{}", i);
        cache.set(&key, &format!("value_{}", i)).unwrap();
    }
    // Mix in promotions, updates, and removals so every release path runs.
    for i in 0..inserts / 2 {
        let key = format!("key_{}", i);
        let _ = cache.get(&key);
        let _ = cache.set(&key, "rewritten");
        if i % 3 == 0 {
            let _ = cache.remove(&key);
        }
    }
    drop(cache);
}

#[test]
fn test_drop_releases_every_allocation() {
    // First cycle warms lazy process-wide state (lock internals, TLS).
    exercise(16, 64);

    let region = Region::new(GLOBAL);
    exercise(64, 256);
    let stats = region.change();

    assert_eq!(
        stats.allocations, stats.deallocations,
        "create→populate→drop must free every allocation: {:?}",
        stats
    );
}
