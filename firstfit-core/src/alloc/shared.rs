//! ## firstfit-core::alloc::shared
//! **Coarse-grained locking around a single arena**
//!
//! The arena mutates its free list and allocation table in several steps and
//! has no internal synchronization. `SharedArena` makes every operation one
//! critical section, so concurrent callers never observe a half-applied
//! allocate or free.

use std::sync::Arc;

use parking_lot::Mutex;

use super::align::Alignment;
use super::arena::Arena;
use super::region::AllocatedRegion;
use super::snapshot::Snapshot;
use super::stats::ArenaStats;
use crate::error::{AllocError, FreeError};

/// Cloneable handle to one arena shared between threads.
#[derive(Debug, Clone, Default)]
pub struct SharedArena {
    inner: Arc<Mutex<Arena>>,
}

impl SharedArena {
    pub fn new(arena: Arena) -> Self {
        Self {
            inner: Arc::new(Mutex::new(arena)),
        }
    }

    pub fn with_alignment(alignment: Alignment) -> Self {
        Self::new(Arena::with_alignment(alignment))
    }

    pub fn init(&self, capacity: usize) {
        self.inner.lock().init(capacity)
    }

    pub fn allocate(&self, id: &str, requested: usize) -> Result<AllocatedRegion, AllocError> {
        self.inner.lock().allocate(id, requested)
    }

    pub fn free(&self, id: &str) -> Result<(), FreeError> {
        self.inner.lock().free(id)
    }

    /// Runs `f` over a snapshot while holding the lock.
    pub fn with_snapshot<R>(&self, f: impl FnOnce(Snapshot<'_>) -> R) -> R {
        let arena = self.inner.lock();
        f(arena.snapshot())
    }

    pub fn stats(&self) -> ArenaStats {
        self.inner.lock().stats()
    }

    /// Runs `f` with exclusive access to the arena.
    pub fn with_arena<R>(&self, f: impl FnOnce(&mut Arena) -> R) -> R {
        f(&mut self.inner.lock())
    }
}
