//! Secure token generation
//!
//! Tokens are drawn from the operating system's cryptographically secure
//! random source. A general-purpose PRNG is not acceptable here: the whole
//! security argument of the reference map rests on indirect references being
//! unguessable.

use crate::config::{Encoding, MapConfig};
use crate::core::error::{RefMapError, Result};
use crate::core::types::IndirectRef;
use base64::engine::general_purpose::STANDARD as BASE64;
use base64::Engine as _;

/// Generator for indirect reference tokens
///
/// Stateless apart from its configuration; each call draws fresh bytes from
/// the OS random source, so concurrent generators never reuse a byte
/// sequence.
#[derive(Debug, Clone, Copy)]
pub struct TokenGenerator {
    encoding: Encoding,
    width: usize,
}

impl TokenGenerator {
    /// Create a generator from a validated configuration
    pub fn new(config: MapConfig) -> Self {
        TokenGenerator {
            encoding: config.encoding,
            width: config.width,
        }
    }

    /// The encoding applied to generated bytes
    pub fn encoding(&self) -> Encoding {
        self.encoding
    }

    /// The number of random bytes drawn per token
    pub fn width(&self) -> usize {
        self.width
    }

    /// Generate a fresh token: `width` secure random bytes rendered in the
    /// configured encoding
    pub fn generate(&self) -> Result<IndirectRef> {
        let mut bytes = vec![0u8; self.width];
        getrandom::getrandom(&mut bytes)
            .map_err(|e| RefMapError::random_source(e.to_string()))?;
        Ok(IndirectRef::new(encode(&bytes, self.encoding)))
    }
}

/// Render raw bytes in the given encoding
pub fn encode(bytes: &[u8], encoding: Encoding) -> String {
    match encoding {
        Encoding::Hex => hex::encode(bytes),
        Encoding::Base64 => BASE64.encode(bytes),
        Encoding::Ascii85 => ascii85::encode(bytes),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;
    use std::collections::HashSet;

    #[test]
    fn test_hex_token_shape() {
        let generator = TokenGenerator::new(MapConfig::default());
        let token = generator.generate().unwrap();

        // width 16, hex => 32 lowercase hex characters
        assert_eq!(token.len(), 32);
        assert!(token
            .as_str()
            .chars()
            .all(|c| c.is_ascii_hexdigit() && !c.is_ascii_uppercase()));
    }

    #[rstest]
    #[case(Encoding::Hex, 1, 2)]
    #[case(Encoding::Hex, 16, 32)]
    #[case(Encoding::Hex, 64, 128)]
    #[case(Encoding::Base64, 3, 4)]
    #[case(Encoding::Base64, 16, 24)]
    #[case(Encoding::Base64, 32, 44)]
    fn test_encoded_lengths(
        #[case] encoding: Encoding,
        #[case] width: usize,
        #[case] expected_len: usize,
    ) {
        let generator = TokenGenerator::new(MapConfig::new(encoding, width));
        let token = generator.generate().unwrap();
        assert_eq!(token.len(), expected_len);
    }

    #[test]
    fn test_base64_token_alphabet() {
        let generator = TokenGenerator::new(MapConfig::new(Encoding::Base64, 16));
        let token = generator.generate().unwrap();
        assert!(token
            .as_str()
            .chars()
            .all(|c| c.is_ascii_alphanumeric() || c == '+' || c == '/' || c == '='));
    }

    #[test]
    fn test_ascii85_token_is_ascii_safe() {
        let generator = TokenGenerator::new(MapConfig::new(Encoding::Ascii85, 16));
        let token = generator.generate().unwrap();
        assert!(!token.is_empty());
        assert!(token.as_str().chars().all(|c| c.is_ascii_graphic()));
    }

    #[test]
    fn test_tokens_are_distinct() {
        let generator = TokenGenerator::new(MapConfig::default());
        let tokens: HashSet<String> = (0..1000)
            .map(|_| generator.generate().unwrap().into_string())
            .collect();

        // 16 random bytes per token; any collision here means the random
        // source is broken
        assert_eq!(tokens.len(), 1000);
    }

    #[test]
    fn test_encode_known_bytes() {
        let bytes = [0xde, 0xad, 0xbe, 0xef];
        assert_eq!(encode(&bytes, Encoding::Hex), "deadbeef");
        assert_eq!(encode(&bytes, Encoding::Base64), "3q2+7w==");
    }
}
