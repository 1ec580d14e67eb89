//! Access Refmap - a bidirectional access reference map
//!
//! An access reference map substitutes randomly generated "indirect"
//! tokens for sensitive "direct" identifiers (database keys, file paths,
//! internal object IDs) so that untrusted clients never see the real
//! identifiers. A client holding only indirect tokens cannot guess,
//! enumerate, or infer the direct references behind them, which closes the
//! Insecure Direct Object Reference (IDOR) vulnerability class.
//!
//! # Core Features
//!
//! - **Unguessable tokens**: indirect references are drawn from the OS
//!   cryptographically secure random source
//! - **Bijection by construction**: both lookup directions live behind one
//!   internal type with paired insert/remove, so the tables can never drift
//! - **Idempotent add**: re-adding a mapped direct reference returns its
//!   existing token unchanged
//! - **Configurable tokens**: hex, base64, or ascii85 encoding at a chosen
//!   byte width, fixed at construction
//! - **Thread-safe wrapper**: [`SharedReferenceMap`] serializes concurrent
//!   access behind a single lock
//!
//! The map is purely in-memory and makes no authorization decisions:
//! translating an indirect token back to a direct reference says nothing
//! about whether the caller may act on it. That check stays with the
//! application.
//!
//! # Example Usage
//!
//! ```rust
//! use access_refmap::AccessReferenceMap;
//!
//! let mut map = AccessReferenceMap::new();
//!
//! // Expose a token instead of the raw database key
//! let token = map.add_direct_reference("user:42".to_string())?;
//! assert_eq!(token.len(), 32); // 16 random bytes, hex encoded
//!
//! // Resolve an incoming token back to the real identifier
//! assert_eq!(
//!     map.get_direct_reference(token.as_str()),
//!     Some(&"user:42".to_string())
//! );
//!
//! // Unknown tokens resolve to nothing, with no hint why
//! assert_eq!(map.get_direct_reference("forged-token"), None);
//! # Ok::<(), access_refmap::RefMapError>(())
//! ```

pub mod config;
pub mod core;
pub mod map;
pub mod token;

// Re-export commonly used types
pub use crate::core::{
    error::{RefMapError, Result},
    types::IndirectRef,
};

pub use config::{Encoding, MapConfig};

pub use map::{AccessReferenceMap, SharedReferenceMap};

pub use token::TokenGenerator;

/// Current version of the crate
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
