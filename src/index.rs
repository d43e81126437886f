//! Hash index mapping keys to arena slots.
//!
//! The index is a bucket array whose length equals the cache capacity; a
//! key hashes to a bucket with a polynomial rolling hash and collisions
//! chain through the entries' `hash_prev`/`hash_next` links. Tying the
//! bucket count to the capacity keeps the average chain short at any fill
//! level; small capacities collide more but stay correct.
//!
//! New entries are pushed to the head of their chain. Lookup walks the
//! chain comparing full keys. Removal splices the entry out, with the
//! head-of-chain, interior, and tail-of-chain cases handled separately.

use core::num::NonZeroUsize;

use crate::arena::EntryArena;
use crate::error::Result;

/// Multiplier seed for the rolling hash.
const HASH_A: u32 = 63689;
/// Multiplier carry for the rolling hash.
const HASH_B: u32 = 378551;

/// Bucket-chained hash table keyed by entry keys, storing arena indices.
pub(crate) struct HashIndex {
    buckets: Box<[Option<usize>]>,
}

impl HashIndex {
    /// Allocates a bucket array of exactly `capacity` chain heads.
    pub(crate) fn with_buckets(capacity: NonZeroUsize) -> Result<Self> {
        let cap = capacity.get();
        let mut buckets = Vec::new();
        buckets.try_reserve_exact(cap)?;
        buckets.resize_with(cap, || None);
        Ok(HashIndex {
            buckets: buckets.into_boxed_slice(),
        })
    }

    /// Reduces `key` to a bucket position.
    ///
    /// Polynomial rolling hash over the key bytes with wrapping
    /// arithmetic, reduced modulo the bucket count. The bucket count is
    /// positive by construction, so the reduction is always defined.
    fn bucket_of(&self, key: &str) -> usize {
        let mut hash: u32 = 0;
        let mut a: u32 = HASH_A;
        for &byte in key.as_bytes() {
            hash = hash.wrapping_mul(a).wrapping_add(u32::from(byte));
            a = a.wrapping_mul(HASH_B);
        }
        hash as usize % self.buckets.len()
    }

    /// Finds the arena index holding `key`, if present.
    pub(crate) fn lookup(&self, arena: &EntryArena, key: &str) -> Option<usize> {
        let mut cursor = self.buckets[self.bucket_of(key)];
        while let Some(idx) = cursor {
            let entry = arena.get(idx)?;
            if entry.key() == key {
                return Some(idx);
            }
            cursor = entry.hash_next;
        }
        None
    }

    /// Pushes the entry at `idx` onto the head of its key's chain.
    ///
    /// The key must not already be present; uniqueness is the caller's
    /// invariant (checked under the same critical section).
    pub(crate) fn insert(&mut self, arena: &mut EntryArena, idx: usize) {
        let Some(entry) = arena.get(idx) else { return };
        let bucket = self.bucket_of(entry.key());
        let old_head = self.buckets[bucket];

        if let Some(entry) = arena.get_mut(idx) {
            entry.hash_prev = None;
            entry.hash_next = old_head;
        }
        if let Some(head) = old_head {
            if let Some(head_entry) = arena.get_mut(head) {
                head_entry.hash_prev = Some(idx);
            }
        }
        self.buckets[bucket] = Some(idx);
    }

    /// Removes `key` from the index, returning the arena index it mapped to.
    pub(crate) fn remove(&mut self, arena: &mut EntryArena, key: &str) -> Option<usize> {
        let idx = self.lookup(arena, key)?;
        self.unlink(arena, idx);
        Some(idx)
    }

    /// Splices the entry at `idx` out of its chain.
    pub(crate) fn unlink(&mut self, arena: &mut EntryArena, idx: usize) {
        let (bucket, prev, next) = match arena.get(idx) {
            Some(entry) => (self.bucket_of(entry.key()), entry.hash_prev, entry.hash_next),
            None => return,
        };

        match prev {
            // Interior or tail of chain.
            Some(prev_idx) => {
                if let Some(prev_entry) = arena.get_mut(prev_idx) {
                    prev_entry.hash_next = next;
                }
            }
            // Head of chain: the bucket itself points at the successor.
            None => self.buckets[bucket] = next,
        }
        if let Some(next_idx) = next {
            if let Some(next_entry) = arena.get_mut(next_idx) {
                next_entry.hash_prev = prev;
            }
        }
        if let Some(entry) = arena.get_mut(idx) {
            entry.hash_prev = None;
            entry.hash_next = None;
        }
    }

    /// Empties every bucket.
    pub(crate) fn clear(&mut self) {
        for bucket in self.buckets.iter_mut() {
            *bucket = None;
        }
    }

    /// Number of entries reachable by walking every chain.
    #[cfg(test)]
    pub(crate) fn reachable_len(&self, arena: &EntryArena) -> usize {
        let mut count = 0;
        for bucket in self.buckets.iter() {
            let mut cursor = *bucket;
            while let Some(idx) = cursor {
                count += 1;
                cursor = arena.get(idx).and_then(|e| e.hash_next);
            }
        }
        count
    }
}

impl core::fmt::Debug for HashIndex {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.debug_struct("HashIndex")
            .field("buckets", &self.buckets.len())
            .finish()
    }
}
