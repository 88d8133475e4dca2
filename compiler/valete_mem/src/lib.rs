//! Memory-management substrate for the Valete compiler.
//!
//! Two independent, leaf-level components:
//!
//! - [`Arena`]: a bump allocator that hands out byte regions from a chain
//!   of blocks, growing the chain on demand and releasing everything in one
//!   teardown. Compiler-lifetime data (staged sources, and eventually tokens
//!   and AST nodes) lives here.
//! - [`RefList`]: a growable ordered list of borrowed references, searched
//!   by identity rather than content. The driver uses it to keep input paths
//!   in command-line order without copying them.
//!
//! The two compose but do not depend on each other. Both assume exclusive
//! single-owner access (`&mut self` for mutation); callers needing shared
//! access add their own synchronization.
//!
//! # Error policy
//!
//! Running out of memory aborts the process, and violating a documented
//! precondition (zero list capacity, out-of-range index, foreign handle)
//! panics. Neither component returns recoverable errors: they serve trusted
//! in-process callers for whom a broken precondition is a bug, not an event
//! to handle. Recoverable `Result`s belong to the I/O layer above.

pub mod arena;
pub mod ref_list;

pub use arena::{Arena, ArenaRef};
pub use ref_list::RefList;
