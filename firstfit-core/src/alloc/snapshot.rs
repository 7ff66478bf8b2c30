//! Read-only, address-ordered view of the arena.
//!
//! A [`Snapshot`] walks the free list and the live allocations in lockstep,
//! yielding one [`Segment`] per region from address 0 up to the capacity.

use std::iter::Peekable;
use std::slice;
use std::vec;

use super::region::{AllocatedRegion, FreeRegion};

/// One labeled range of the address space.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Segment<'a> {
    Free { start: usize, end: usize },
    Allocated { start: usize, end: usize, id: &'a str },
}

impl<'a> Segment<'a> {
    pub fn start(&self) -> usize {
        match *self {
            Segment::Free { start, .. } | Segment::Allocated { start, .. } => start,
        }
    }

    pub fn end(&self) -> usize {
        match *self {
            Segment::Free { end, .. } | Segment::Allocated { end, .. } => end,
        }
    }

    pub fn len(&self) -> usize {
        self.end() - self.start()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    pub fn is_free(&self) -> bool {
        matches!(self, Segment::Free { .. })
    }

    /// The allocation identifier, if this segment is allocated.
    pub fn id(&self) -> Option<&'a str> {
        match *self {
            Segment::Allocated { id, .. } => Some(id),
            Segment::Free { .. } => None,
        }
    }
}

/// Lazy merge of the free list and the allocation table, sorted by start.
pub struct Snapshot<'a> {
    free: Peekable<slice::Iter<'a, FreeRegion>>,
    allocated: Peekable<vec::IntoIter<(&'a str, &'a AllocatedRegion)>>,
}

impl<'a> Snapshot<'a> {
    pub(crate) fn new<I>(free: &'a [FreeRegion], allocations: I) -> Self
    where
        I: IntoIterator<Item = (&'a str, &'a AllocatedRegion)>,
    {
        let mut allocated: Vec<_> = allocations.into_iter().collect();
        allocated.sort_unstable_by_key(|(_, region)| region.start);
        Self {
            free: free.iter().peekable(),
            allocated: allocated.into_iter().peekable(),
        }
    }
}

impl<'a> Iterator for Snapshot<'a> {
    type Item = Segment<'a>;

    fn next(&mut self) -> Option<Self::Item> {
        let take_free = match (self.free.peek(), self.allocated.peek()) {
            (None, None) => return None,
            (Some(_), None) => true,
            (None, Some(_)) => false,
            (Some(free), Some((_, alloc))) => free.start < alloc.start,
        };

        if take_free {
            self.free.next().map(|region| Segment::Free {
                start: region.start,
                end: region.end(),
            })
        } else {
            self.allocated.next().map(|(id, region)| Segment::Allocated {
                start: region.start,
                end: region.end(),
                id,
            })
        }
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let len = self.free.len() + self.allocated.len();
        (len, Some(len))
    }
}

impl ExactSizeIterator for Snapshot<'_> {}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::alloc::region::Region;

    #[test]
    fn segment_lengths_sum_to_capacity() {
        let free = [Region::new(0, 8), Region::new(20, 12)];
        let held = Region::new(8, 12);
        let segments: Vec<_> = Snapshot::new(&free, [("a", &held)]).collect();

        let lengths: Vec<_> = segments.iter().map(Segment::len).collect();
        assert_eq!(lengths, vec![8, 12, 12]);
        assert!(segments.iter().all(|s| !s.is_empty()));
        assert_eq!(segments[1].id(), Some("a"));
    }

    #[test]
    fn degenerate_segment_is_empty() {
        let segment = Segment::Free { start: 4, end: 4 };
        assert_eq!(segment.len(), 0);
        assert!(segment.is_empty());
    }
}
