//! Entry arena.
//!
//! All entries live in one slab of slots addressed by stable `usize`
//! indices; the bucket chains and the recency list link entries by index
//! into this arena. Index links cannot dangle the way raw node pointers
//! can: a released slot is simply `None` until the free list hands it out
//! again, and both owning structures unlink an entry before its slot is
//! released.
//!
//! The arena holds exactly `capacity` slots, allocated once at creation.
//! The cache evicts before inserting when full, so `alloc` never needs to
//! grow the slab.

use core::num::NonZeroUsize;

use crate::entry::Entry;
use crate::error::Result;

/// Fixed-size slab of entry slots with a free list.
pub(crate) struct EntryArena {
    slots: Vec<Option<Entry>>,
    free: Vec<usize>,
}

impl EntryArena {
    /// Allocates an arena of exactly `capacity` empty slots.
    ///
    /// Both backing vectors are reserved fallibly so creation-time memory
    /// exhaustion reaches the caller as an error instead of aborting.
    pub(crate) fn with_capacity(capacity: NonZeroUsize) -> Result<Self> {
        let cap = capacity.get();
        let mut slots = Vec::new();
        slots.try_reserve_exact(cap)?;
        let mut free = Vec::new();
        free.try_reserve_exact(cap)?;

        slots.resize_with(cap, || None);
        // Reversed so the first allocations hand out low indices.
        free.extend((0..cap).rev());

        Ok(EntryArena { slots, free })
    }

    /// Number of live entries.
    pub(crate) fn len(&self) -> usize {
        self.slots.len() - self.free.len()
    }

    /// Places `entry` into a free slot and returns its index, or `None`
    /// when every slot is occupied.
    pub(crate) fn alloc(&mut self, entry: Entry) -> Option<usize> {
        let idx = self.free.pop()?;
        debug_assert!(self.slots[idx].is_none());
        self.slots[idx] = Some(entry);
        Some(idx)
    }

    /// Removes the entry at `idx` and returns it, releasing the slot.
    pub(crate) fn release(&mut self, idx: usize) -> Option<Entry> {
        let entry = self.slots.get_mut(idx)?.take()?;
        self.free.push(idx);
        Some(entry)
    }

    /// Borrows the entry at `idx`.
    pub(crate) fn get(&self, idx: usize) -> Option<&Entry> {
        self.slots.get(idx)?.as_ref()
    }

    /// Mutably borrows the entry at `idx`.
    pub(crate) fn get_mut(&mut self, idx: usize) -> Option<&mut Entry> {
        self.slots.get_mut(idx)?.as_mut()
    }

    /// Drops every entry and returns all slots to the free list.
    pub(crate) fn clear(&mut self) {
        let cap = self.slots.len();
        for slot in &mut self.slots {
            *slot = None;
        }
        self.free.clear();
        self.free.extend((0..cap).rev());
    }
}

impl core::fmt::Debug for EntryArena {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.debug_struct("EntryArena")
            .field("slots", &self.slots.len())
            .field("live", &self.len())
            .finish()
    }
}
