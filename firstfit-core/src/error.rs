//! Error types returned by the arena.
//!
//! Every error is non-fatal: a failed operation leaves the arena exactly as it
//! was before the call.

use thiserror::Error;

/// Reasons an allocation request can be rejected.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum AllocError {
    #[error("ID '{0}' already allocated")]
    DuplicateId(String),

    #[error("cannot allocate {0} bytes")]
    OutOfMemory(usize),

    #[error("requested size must be positive")]
    InvalidSize,
}

/// Reasons a free request can be rejected.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum FreeError {
    #[error("ID '{0}' not found")]
    NotFound(String),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
#[error("alignment must be a non-zero power of two, got {0}")]
pub struct AlignmentError(pub usize);

/// A broken bookkeeping invariant, reported by [`crate::alloc::Arena::verify`].
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum InvariantViolation {
    #[error("empty region at {start}")]
    EmptyRegion { start: usize },

    #[error("free regions out of order at {start}")]
    Unordered { start: usize },

    #[error("free regions adjacent at {at}")]
    Adjacent { at: usize },

    #[error("gap in coverage: expected {expected}, found region at {found}")]
    Gap { expected: usize, found: usize },

    #[error("regions overlap at {at}")]
    Overlap { at: usize },

    #[error("coverage ends at {covered}, capacity is {capacity}")]
    Coverage { covered: usize, capacity: usize },
}
