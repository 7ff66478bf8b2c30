//! ## firstfit-core::alloc::stats
//! **Arena usage statistics**
//!
//! Point-in-time figures derived from the free list and the allocation
//! table. Produced by [`crate::alloc::Arena::stats`]; holds no references into
//! the arena, so it can be handed to telemetry after the arena moves on.

use std::fmt;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct ArenaStats {
    pub capacity: usize,
    pub alignment: usize,
    pub free_bytes: usize,
    pub allocated_bytes: usize,
    pub free_regions: usize,
    pub allocations: usize,
    /// Size of the largest single free region.
    pub largest_free: usize,
}

impl ArenaStats {
    /// Share of free space that cannot be served by one request, in `[0, 1]`.
    ///
    /// Zero when all free bytes sit in a single region or nothing is free.
    pub fn fragmentation(&self) -> f64 {
        if self.free_bytes == 0 {
            return 0.0;
        }
        1.0 - self.largest_free as f64 / self.free_bytes as f64
    }

    /// Share of the capacity currently allocated, in `[0, 1]`.
    pub fn utilization(&self) -> f64 {
        if self.capacity == 0 {
            return 0.0;
        }
        self.allocated_bytes as f64 / self.capacity as f64
    }
}

impl fmt::Display for ArenaStats {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "capacity={} alignment={} allocated={} ({} blocks) free={} ({} regions, largest {}) fragmentation={:.1}%",
            self.capacity,
            self.alignment,
            self.allocated_bytes,
            self.allocations,
            self.free_bytes,
            self.free_regions,
            self.largest_free,
            self.fragmentation() * 100.0
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn fragmentation_of_single_region_is_zero() {
        let stats = ArenaStats {
            capacity: 100,
            free_bytes: 60,
            largest_free: 60,
            ..Default::default()
        };
        assert_eq!(stats.fragmentation(), 0.0);
    }

    #[test]
    fn fragmentation_of_split_free_space() {
        let stats = ArenaStats {
            capacity: 100,
            free_bytes: 40,
            largest_free: 10,
            free_regions: 4,
            ..Default::default()
        };
        assert!((stats.fragmentation() - 0.75).abs() < f64::EPSILON);
    }

    #[test]
    fn empty_arena_ratios() {
        let stats = ArenaStats::default();
        assert_eq!(stats.fragmentation(), 0.0);
        assert_eq!(stats.utilization(), 0.0);
    }

    #[test]
    fn display_mentions_fragmentation() {
        let stats = ArenaStats {
            capacity: 100,
            alignment: 4,
            free_bytes: 40,
            allocated_bytes: 60,
            free_regions: 2,
            allocations: 3,
            largest_free: 20,
        };
        assert_eq!(
            stats.to_string(),
            "capacity=100 alignment=4 allocated=60 (3 blocks) free=40 (2 regions, largest 20) fragmentation=50.0%"
        );
    }
}
