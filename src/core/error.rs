//! Error types for the access reference map

use thiserror::Error;

/// Main error type for reference map operations
#[derive(Error, Debug)]
pub enum RefMapError {
    /// Configuration errors
    #[error("Invalid token width: {width} (must be at least 1 byte)")]
    InvalidWidth { width: usize },

    #[error("Unsupported encoding: {name}")]
    UnsupportedEncoding { name: String },

    /// Token generation errors
    #[error("Secure random source failed: {reason}")]
    RandomSource { reason: String },

    #[error("Token generation exhausted {attempts} attempts without finding an unused reference")]
    TokenRetriesExhausted { attempts: usize },
}

impl RefMapError {
    /// Create a new invalid width error
    pub fn invalid_width(width: usize) -> Self {
        Self::InvalidWidth { width }
    }

    /// Create a new unsupported encoding error
    pub fn unsupported_encoding(name: impl Into<String>) -> Self {
        Self::UnsupportedEncoding { name: name.into() }
    }

    /// Create a new random source failure error
    pub fn random_source(reason: impl Into<String>) -> Self {
        Self::RandomSource {
            reason: reason.into(),
        }
    }

    /// Create a new retry exhaustion error
    pub fn token_retries_exhausted(attempts: usize) -> Self {
        Self::TokenRetriesExhausted { attempts }
    }
}

/// Result type alias for reference map operations
pub type Result<T> = std::result::Result<T, RefMapError>;
