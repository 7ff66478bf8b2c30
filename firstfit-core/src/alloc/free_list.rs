//! ## firstfit-core::alloc::free_list
//! **Address-ordered free region list**
//!
//! Free space is kept in a `Vec` sorted by start address. Allocation scans it
//! front to back and carves from the low end of the first region that fits.
//! Releasing a range splices it in at its sorted position and merges it with
//! any neighbour it touches, so the list never holds two adjacent regions.
//!
//! ```text
//!   before free(b):  [0-12: FREE] [12-24: b] [24-36: FREE] [36-100: c]
//!   insert:          [0-12] [12-24] [24-36]          (three touching ranges)
//!   merge backward:  [0-24] [24-36]
//!   merge forward:   [0-36]
//! ```

use super::region::FreeRegion;

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FreeList {
    regions: Vec<FreeRegion>,
}

impl FreeList {
    pub fn new() -> Self {
        Self::default()
    }

    #[cfg(test)]
    pub(crate) fn from_regions(regions: Vec<FreeRegion>) -> Self {
        Self { regions }
    }

    /// Replaces the list with a single region spanning `[0, capacity)`.
    /// A zero capacity leaves the list empty.
    pub fn reset(&mut self, capacity: usize) {
        self.regions.clear();
        if capacity > 0 {
            self.regions.push(FreeRegion::new(0, capacity));
        }
    }

    /// Index of the lowest-addressed region that can hold `size` bytes.
    pub fn first_fit(&self, size: usize) -> Option<usize> {
        self.regions.iter().position(|region| region.size >= size)
    }

    /// Takes `size` bytes from the front of the region at `index` and returns
    /// their start address. The caller must have obtained `index` from
    /// [`FreeList::first_fit`] with the same `size`.
    pub fn carve(&mut self, index: usize, size: usize) -> usize {
        let region = &mut self.regions[index];
        let start = region.start;
        debug_assert!(region.size >= size);

        if region.size == size {
            self.regions.remove(index);
        } else {
            // Shrinking from the front keeps the remainder in place and can
            // never make it touch its neighbours.
            region.start += size;
            region.size -= size;
        }
        start
    }

    /// Returns a range to the free list and coalesces it with its neighbours.
    ///
    /// Returns the number of merges performed.
    pub fn release(&mut self, region: FreeRegion) -> usize {
        let index = self
            .regions
            .binary_search_by_key(&region.start, |r| r.start)
            .unwrap_or_else(|i| i);
        self.regions.insert(index, region);
        self.coalesce_at(index)
    }

    fn coalesce_at(&mut self, mut index: usize) -> usize {
        let mut merges = 0;

        while index > 0 && self.regions[index - 1].touches(&self.regions[index]) {
            let current = self.regions.remove(index);
            index -= 1;
            self.regions[index].size += current.size;
            merges += 1;
        }

        while index + 1 < self.regions.len() && self.regions[index].touches(&self.regions[index + 1]) {
            let next = self.regions.remove(index + 1);
            self.regions[index].size += next.size;
            merges += 1;
        }

        merges
    }

    pub fn as_slice(&self) -> &[FreeRegion] {
        &self.regions
    }

    pub fn iter(&self) -> std::slice::Iter<'_, FreeRegion> {
        self.regions.iter()
    }

    pub fn len(&self) -> usize {
        self.regions.len()
    }

    pub fn is_empty(&self) -> bool {
        self.regions.is_empty()
    }

    pub fn total(&self) -> usize {
        self.regions.iter().map(|r| r.size).sum()
    }

    pub fn largest(&self) -> usize {
        self.regions.iter().map(|r| r.size).max().unwrap_or(0)
    }
}
