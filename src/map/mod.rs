//! The reference map and its thread-safe wrapper
//!
//! `table` holds the paired lookup tables that make the bijection
//! unbreakable from outside; `refmap` is the public single-owner map;
//! `shared` wraps it for concurrent callers.

mod table;

pub mod refmap;
pub mod shared;

// Re-export commonly used items
pub use refmap::AccessReferenceMap;
pub use shared::SharedReferenceMap;
