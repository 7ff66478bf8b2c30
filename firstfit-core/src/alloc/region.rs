//! Byte ranges tracked by the arena.

use std::fmt;

/// A half-open byte range `[start, start + size)`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Region {
    pub start: usize,
    pub size: usize,
}

/// A range in the free list. Never empty, never adjacent to another free region.
pub type FreeRegion = Region;

/// A range handed out by [`crate::alloc::Arena::allocate`]. `size` is the
/// aligned size actually reserved.
pub type AllocatedRegion = Region;

impl Region {
    #[inline]
    pub const fn new(start: usize, size: usize) -> Self {
        Self { start, size }
    }

    #[inline]
    pub const fn end(&self) -> usize {
        self.start + self.size
    }

    /// True when `self` ends exactly where `next` begins.
    #[inline]
    pub const fn touches(&self, next: &Region) -> bool {
        self.end() == next.start
    }
}

impl fmt::Display for Region {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}-{}", self.start, self.end())
    }
}
