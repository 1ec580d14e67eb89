//! Core types and error handling for the access reference map
//!
//! This module contains the indirect reference token type and the
//! crate-wide error type used throughout the system.

pub mod error;
pub mod types;

// Re-export commonly used items
pub use error::{RefMapError, Result};
pub use types::IndirectRef;
