//! ## firstfit-core::alloc::align
//! **Size rounding policy**
//!
//! Every request is rounded up to a multiple of the arena's alignment before
//! the free list is searched. This is the only place an allocation grows past
//! what the caller asked for.

use crate::error::AlignmentError;

/// Alignment used when none is configured.
pub const DEFAULT_ALIGNMENT: usize = 4;

/// A validated power-of-two alignment unit.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Alignment(usize);

impl Alignment {
    pub fn new(value: usize) -> Result<Self, AlignmentError> {
        if value.is_power_of_two() {
            Ok(Self(value))
        } else {
            Err(AlignmentError(value))
        }
    }

    #[inline]
    pub fn get(self) -> usize {
        self.0
    }

    /// Rounds `size` up to the next multiple of the alignment.
    ///
    /// Returns `None` when the rounded value does not fit in a `usize`.
    #[inline]
    pub fn align_up(self, size: usize) -> Option<usize> {
        let mask = self.0 - 1;
        size.checked_add(mask).map(|v| v & !mask)
    }

    #[inline]
    pub fn is_aligned(self, size: usize) -> bool {
        size & (self.0 - 1) == 0
    }
}

impl Default for Alignment {
    fn default() -> Self {
        Self(DEFAULT_ALIGNMENT)
    }
}
