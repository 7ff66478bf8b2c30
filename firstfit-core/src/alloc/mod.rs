//! ## firstfit-core::alloc
//! **First-fit free-list allocator over a simulated address space**
//!
//! ### Key Submodules:
//! - `align/`: Size rounding policy
//! - `free_list/`: Address-ordered free regions with coalescing
//! - `arena/`: The allocator itself (`init`, `allocate`, `free`, `snapshot`)
//! - `snapshot/`: Lazy, address-ordered view of free and allocated regions
//! - `stats/`: Usage and fragmentation figures
//! - `shared/`: Mutex-guarded handle for concurrent callers

pub mod align;
pub mod arena;
pub mod free_list;
pub mod region;
pub mod shared;
pub mod snapshot;
pub mod stats;

pub use align::{Alignment, DEFAULT_ALIGNMENT};
pub use arena::Arena;
pub use region::{AllocatedRegion, FreeRegion, Region};
pub use shared::SharedArena;
pub use snapshot::{Segment, Snapshot};
pub use stats::ArenaStats;
