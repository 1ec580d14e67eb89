//! Construction-time configuration for the access reference map
//!
//! Defaults are resolved once when a map is built; there is no process-wide
//! mutable default state.

use crate::core::error::{RefMapError, Result};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Default number of random bytes per generated token
pub const DEFAULT_WIDTH: usize = 16;

/// Text encoding applied to generated random token bytes
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Encoding {
    /// Lowercase hexadecimal, 2 characters per byte (default)
    #[default]
    Hex,
    /// Standard base64 alphabet with padding
    Base64,
    /// Ascii85, a compact ASCII-safe rendering of raw bytes
    Ascii85,
}

impl Encoding {
    /// Canonical lowercase name of the encoding
    pub fn name(&self) -> &'static str {
        match self {
            Encoding::Hex => "hex",
            Encoding::Base64 => "base64",
            Encoding::Ascii85 => "ascii85",
        }
    }
}

impl fmt::Display for Encoding {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.name())
    }
}

impl FromStr for Encoding {
    type Err = RefMapError;

    fn from_str(s: &str) -> Result<Self> {
        match s {
            "hex" => Ok(Encoding::Hex),
            "base64" => Ok(Encoding::Base64),
            "ascii85" => Ok(Encoding::Ascii85),
            other => Err(RefMapError::unsupported_encoding(other)),
        }
    }
}

/// Immutable configuration for an access reference map
///
/// Built once and handed to the map constructor; the map validates it and
/// never changes it afterwards.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct MapConfig {
    /// Encoding applied to generated token bytes
    pub encoding: Encoding,
    /// Number of random bytes to draw per token, before encoding
    pub width: usize,
}

impl Default for MapConfig {
    fn default() -> Self {
        MapConfig {
            encoding: Encoding::default(),
            width: DEFAULT_WIDTH,
        }
    }
}

impl MapConfig {
    /// Create a configuration with explicit encoding and width
    pub fn new(encoding: Encoding, width: usize) -> Self {
        MapConfig { encoding, width }
    }

    /// Override the encoding, keeping the remaining defaults
    pub fn with_encoding(mut self, encoding: Encoding) -> Self {
        self.encoding = encoding;
        self
    }

    /// Override the token width, keeping the remaining defaults
    pub fn with_width(mut self, width: usize) -> Self {
        self.width = width;
        self
    }

    /// Validate the configuration, failing fast on unusable values
    pub fn validate(&self) -> Result<()> {
        if self.width == 0 {
            return Err(RefMapError::invalid_width(self.width));
        }
        Ok(())
    }
}
