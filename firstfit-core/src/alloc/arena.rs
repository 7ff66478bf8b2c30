//! ## firstfit-core::alloc::arena
//! **First-fit arena over a simulated address space**
//!
//! The arena owns the whole address space `[0, capacity)`. At every point in
//! time the free list and the allocation table partition that space exactly:
//! no gaps, no overlaps, and no two free regions touching.
//!
//! ```text
//!   init(100); allocate("a", 10); allocate("b", 30)
//!
//!   0          12                       44                          100
//!   ┌──────────┬────────────────────────┬─────────────────────────────┐
//!   │    a     │           b            │            FREE             │
//!   └──────────┴────────────────────────┴─────────────────────────────┘
//!   10 -> 12 bytes and 30 -> 32 bytes after rounding to 4
//! ```

use std::collections::HashMap;

use tracing::{debug, info};

use super::align::Alignment;
use super::free_list::FreeList;
use super::region::{AllocatedRegion, FreeRegion, Region};
use super::snapshot::Snapshot;
use super::stats::ArenaStats;
use crate::error::{AllocError, FreeError, InvariantViolation};

#[derive(Debug, Clone, Default)]
pub struct Arena {
    capacity: usize,
    alignment: Alignment,
    free: FreeList,
    allocated: HashMap<String, AllocatedRegion>,
}

impl Arena {
    /// Creates an empty arena with the default alignment. Call
    /// [`Arena::init`] to give it an address space.
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_alignment(alignment: Alignment) -> Self {
        Self {
            alignment,
            ..Self::default()
        }
    }

    /// Resets the arena to a single free region spanning `[0, capacity)` and
    /// drops every allocation. This is the only way to change the capacity.
    pub fn init(&mut self, capacity: usize) {
        self.capacity = capacity;
        self.free.reset(capacity);
        self.allocated.clear();
        info!(capacity, alignment = self.alignment.get(), "arena initialized");
        self.debug_verify();
    }

    /// Reserves `requested` bytes, rounded up to the alignment, from the
    /// lowest-addressed free region large enough to hold them.
    ///
    /// On failure the arena is left untouched.
    pub fn allocate(&mut self, id: &str, requested: usize) -> Result<AllocatedRegion, AllocError> {
        if self.allocated.contains_key(id) {
            debug!(id, "allocation rejected: duplicate id");
            return Err(AllocError::DuplicateId(id.to_string()));
        }
        if requested == 0 {
            debug!(id, "allocation rejected: zero size");
            return Err(AllocError::InvalidSize);
        }

        let size = self
            .alignment
            .align_up(requested)
            .ok_or(AllocError::OutOfMemory(requested))?;

        let Some(index) = self.free.first_fit(size) else {
            debug!(id, size, "allocation rejected: out of memory");
            return Err(AllocError::OutOfMemory(size));
        };

        let start = self.free.carve(index, size);
        let region = Region::new(start, size);
        self.allocated.insert(id.to_string(), region);
        debug!(id, start, size, requested, "allocated");

        self.debug_verify();
        Ok(region)
    }

    /// Returns the region held by `id` to the free list, merging it with any
    /// free neighbours.
    pub fn free(&mut self, id: &str) -> Result<(), FreeError> {
        let region = self.allocated.remove(id).ok_or_else(|| {
            debug!(id, "free rejected: unknown id");
            FreeError::NotFound(id.to_string())
        })?;

        let merges = self.free.release(region);
        debug!(id, start = region.start, size = region.size, "freed");
        if merges > 0 {
            debug!(merges, free_regions = self.free.len(), "coalesced free regions");
        }

        self.debug_verify();
        Ok(())
    }

    /// Address-ordered view of every free and allocated region.
    pub fn snapshot(&self) -> Snapshot<'_> {
        Snapshot::new(
            self.free.as_slice(),
            self.allocated.iter().map(|(id, region)| (id.as_str(), region)),
        )
    }

    pub fn stats(&self) -> ArenaStats {
        let free_bytes = self.free.total();
        ArenaStats {
            capacity: self.capacity,
            alignment: self.alignment.get(),
            free_bytes,
            allocated_bytes: self.capacity - free_bytes,
            free_regions: self.free.len(),
            allocations: self.allocated.len(),
            largest_free: self.free.largest(),
        }
    }

    /// Checks that the free list is sorted and fully coalesced, and that free
    /// and allocated regions tile `[0, capacity)` exactly.
    pub fn verify(&self) -> Result<(), InvariantViolation> {
        for pair in self.free.as_slice().windows(2) {
            let (prev, next) = (&pair[0], &pair[1]);
            if prev.start >= next.start {
                return Err(InvariantViolation::Unordered { start: next.start });
            }
            if prev.touches(next) {
                return Err(InvariantViolation::Adjacent { at: next.start });
            }
        }

        let mut regions: Vec<&Region> = self.free.iter().chain(self.allocated.values()).collect();
        regions.sort_unstable_by_key(|r| r.start);

        let mut covered = 0;
        for region in regions {
            if region.size == 0 {
                return Err(InvariantViolation::EmptyRegion { start: region.start });
            }
            if region.start < covered {
                return Err(InvariantViolation::Overlap { at: region.start });
            }
            if region.start > covered {
                return Err(InvariantViolation::Gap {
                    expected: covered,
                    found: region.start,
                });
            }
            covered = region.end();
        }

        if covered != self.capacity {
            return Err(InvariantViolation::Coverage {
                covered,
                capacity: self.capacity,
            });
        }
        Ok(())
    }

    #[inline]
    fn debug_verify(&self) {
        debug_assert_eq!(self.verify(), Ok(()));
    }

    pub fn get(&self, id: &str) -> Option<&AllocatedRegion> {
        self.allocated.get(id)
    }

    pub fn free_regions(&self) -> &[FreeRegion] {
        self.free.as_slice()
    }

    pub fn allocations(&self) -> impl Iterator<Item = (&str, &AllocatedRegion)> {
        self.allocated.iter().map(|(id, region)| (id.as_str(), region))
    }

    pub fn capacity(&self) -> usize {
        self.capacity
    }

    pub fn alignment(&self) -> Alignment {
        self.alignment
    }
}
