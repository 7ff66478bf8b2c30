//! # firstfit-core
//!
//! Single-arena, first-fit dynamic memory allocator over a simulated linear
//! address space.
//!
//! The arena tracks which byte ranges are free and which are allocated,
//! services allocation and deallocation requests by identifier, and keeps the
//! free space defragmented by merging adjacent free regions.
//!
//! ### Key Submodules:
//! - `alloc`: Arena, free list, alignment policy, snapshots and statistics
//! - `error`: Allocation, free and invariant errors
//!
//! ```
//! use firstfit_core::prelude::*;
//!
//! let mut arena = Arena::new();
//! arena.init(100);
//! let region = arena.allocate("x", 30).unwrap();
//! assert_eq!((region.start, region.size), (0, 32));
//! arena.free("x").unwrap();
//! assert_eq!(arena.free_regions(), &[Region::new(0, 100)]);
//! ```

pub mod alloc;
pub mod error;

pub mod prelude {
    pub use crate::alloc::*;
    pub use crate::error::*;
}

pub use alloc::{Arena, SharedArena};
pub use error::{AllocError, FreeError};
