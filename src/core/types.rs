//! Core data types for the access reference map

use serde::{Deserialize, Serialize};
use std::borrow::Borrow;
use std::fmt;

/// An indirect reference: an opaque, randomly generated token that stands in
/// for a sensitive direct identifier.
///
/// The inner string is the encoded form of `width` cryptographically secure
/// random bytes. Indirect references are safe to expose to untrusted clients
/// (URLs, API payloads); holding one reveals nothing about the direct
/// identifier it maps to.
#[derive(Clone, PartialEq, Eq, Hash)]
pub struct IndirectRef(String);

impl IndirectRef {
    /// Wrap an already-encoded token
    pub fn new(token: impl Into<String>) -> Self {
        IndirectRef(token.into())
    }

    /// Get the token text
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Consume the reference, returning the token text
    pub fn into_string(self) -> String {
        self.0
    }

    /// Length of the encoded token in characters
    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl fmt::Display for IndirectRef {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl fmt::Debug for IndirectRef {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "IndirectRef({})", self.0)
    }
}

impl From<String> for IndirectRef {
    fn from(token: String) -> Self {
        IndirectRef(token)
    }
}

impl From<&str> for IndirectRef {
    fn from(token: &str) -> Self {
        IndirectRef(token.to_owned())
    }
}

// Lets string-keyed hash maps be queried with a bare &str
impl Borrow<str> for IndirectRef {
    fn borrow(&self) -> &str {
        &self.0
    }
}

impl AsRef<str> for IndirectRef {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl PartialEq<str> for IndirectRef {
    fn eq(&self, other: &str) -> bool {
        self.0 == other
    }
}

impl PartialEq<&str> for IndirectRef {
    fn eq(&self, other: &&str) -> bool {
        self.0 == *other
    }
}

// Serialize as the bare token string rather than a wrapped struct
impl Serialize for IndirectRef {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        serializer.serialize_str(&self.0)
    }
}

impl<'de> Deserialize<'de> for IndirectRef {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        let token = String::deserialize(deserializer)?;
        Ok(IndirectRef(token))
    }
}
