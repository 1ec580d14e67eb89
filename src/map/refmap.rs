//! The access reference map
//!
//! Owns the bijection between direct and indirect references and generates
//! new indirect tokens on demand. Direct references are caller-supplied and
//! never leave the process through this type; clients only ever see the
//! random indirect tokens.

use crate::config::MapConfig;
use crate::core::error::{RefMapError, Result};
use crate::core::types::IndirectRef;
use crate::map::table::BiTable;
use crate::token::TokenGenerator;
use std::hash::Hash;
use tracing::{debug, trace};

/// Redraw attempts before a token collision is treated as a fatal error.
/// At any sane width a single collision is already vanishingly unlikely;
/// exhausting the cap means the random source is broken.
const MAX_TOKEN_RETRIES: usize = 8;

/// Bidirectional map between sensitive direct identifiers and randomly
/// generated indirect reference tokens.
///
/// The map is a single-owner, in-memory structure: mutating operations take
/// `&mut self` and there is no internal locking. Wrap it in
/// [`SharedReferenceMap`](crate::map::SharedReferenceMap) when concurrent
/// callers need access.
///
/// `D` is the caller's direct reference type, commonly `String`.
#[derive(Debug, Clone)]
pub struct AccessReferenceMap<D> {
    table: BiTable<D>,
    generator: TokenGenerator,
    config: MapConfig,
}

impl<D> AccessReferenceMap<D>
where
    D: Eq + Hash + Clone,
{
    /// Create a map with the default configuration (hex encoding, 16-byte
    /// tokens)
    pub fn new() -> Self {
        let config = MapConfig::default();
        AccessReferenceMap {
            table: BiTable::new(),
            generator: TokenGenerator::new(config),
            config,
        }
    }

    /// Create a map with an explicit configuration, failing fast if the
    /// configuration is unusable
    pub fn with_config(config: MapConfig) -> Result<Self> {
        config.validate()?;
        Ok(AccessReferenceMap {
            table: BiTable::new(),
            generator: TokenGenerator::new(config),
            config,
        })
    }

    /// The configuration this map was built with
    pub fn config(&self) -> &MapConfig {
        &self.config
    }

    /// Generate a fresh indirect token without touching map state
    pub fn generate_token(&self) -> Result<IndirectRef> {
        self.generator.generate()
    }

    /// Add a direct reference, returning its indirect token.
    ///
    /// Idempotent: a direct reference that is already mapped returns its
    /// existing token with no state change and no new token drawn.
    pub fn add_direct_reference(&mut self, direct: D) -> Result<IndirectRef> {
        if let Some(existing) = self.table.indirect_for(&direct) {
            return Ok(existing.clone());
        }

        let indirect = self.unused_token()?;
        self.table.insert(direct, indirect.clone());
        trace!(size = self.table.len(), "added direct reference");
        Ok(indirect)
    }

    /// Remove a direct reference, deleting both directions of the mapping.
    ///
    /// Returns the indirect token that was removed, or `None` if `direct`
    /// was not mapped. An absent target is an expected outcome, not an
    /// error; a second removal of the same reference returns `None`.
    pub fn remove_direct_reference(&mut self, direct: &D) -> Option<IndirectRef> {
        let removed = self.table.remove_direct(direct);
        if removed.is_some() {
            trace!(size = self.table.len(), "removed direct reference");
        }
        removed
    }

    /// Replace the entire map contents with fresh mappings for `directs`.
    ///
    /// Every previously issued indirect token becomes invalid. Duplicate
    /// entries in the input collapse to a single mapping.
    pub fn update<I>(&mut self, directs: I) -> Result<()>
    where
        I: IntoIterator<Item = D>,
    {
        self.table.clear();
        for direct in directs {
            self.add_direct_reference(direct)?;
        }
        debug!(size = self.table.len(), "replaced reference map contents");
        Ok(())
    }

    /// Look up the direct reference behind an indirect token.
    ///
    /// Pure lookup; never mutates state. An unknown token, whether
    /// malformed, stale, or minted by another map, is indistinguishable
    /// from one that was simply never issued.
    pub fn get_direct_reference(&self, indirect: &str) -> Option<&D> {
        self.table.direct_for(indirect)
    }

    /// Look up the indirect token for a direct reference, if one is mapped
    pub fn get_indirect_reference(&self, direct: &D) -> Option<&IndirectRef> {
        self.table.indirect_for(direct)
    }

    /// Iterate over the currently mapped direct references, in unspecified
    /// order
    pub fn direct_references(&self) -> impl Iterator<Item = &D> {
        self.table.direct_keys()
    }

    /// Number of mappings currently held
    pub fn len(&self) -> usize {
        self.table.len()
    }

    pub fn is_empty(&self) -> bool {
        self.table.is_empty()
    }

    /// Draw tokens until one not already in use appears, within the retry
    /// cap
    fn unused_token(&self) -> Result<IndirectRef> {
        for _ in 0..MAX_TOKEN_RETRIES {
            let token = self.generator.generate()?;
            if !self.table.contains_indirect(token.as_str()) {
                return Ok(token);
            }
            debug!("indirect token collision, redrawing");
        }
        Err(RefMapError::token_retries_exhausted(MAX_TOKEN_RETRIES))
    }
}

impl<D> Default for AccessReferenceMap<D>
where
    D: Eq + Hash + Clone,
{
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::Encoding;

    #[test]
    fn test_add_is_idempotent() {
        let mut map = AccessReferenceMap::new();
        let first = map.add_direct_reference("user:1".to_string()).unwrap();
        let second = map.add_direct_reference("user:1".to_string()).unwrap();

        assert_eq!(first, second);
        assert_eq!(map.len(), 1);
    }

    #[test]
    fn test_round_trip() {
        let mut map = AccessReferenceMap::new();
        let token = map.add_direct_reference("user:1".to_string()).unwrap();

        assert_eq!(
            map.get_direct_reference(token.as_str()),
            Some(&"user:1".to_string())
        );
        assert_eq!(
            map.get_indirect_reference(&"user:1".to_string()),
            Some(&token)
        );
    }

    #[test]
    fn test_remove_clears_both_directions() {
        let mut map = AccessReferenceMap::new();
        let token = map.add_direct_reference("user:1".to_string()).unwrap();

        let removed = map.remove_direct_reference(&"user:1".to_string());
        assert_eq!(removed, Some(token.clone()));

        assert!(map.get_indirect_reference(&"user:1".to_string()).is_none());
        assert!(map.get_direct_reference(token.as_str()).is_none());
        assert!(map.is_empty());
    }

    #[test]
    fn test_remove_twice_returns_none() {
        let mut map = AccessReferenceMap::new();
        map.add_direct_reference("user:1".to_string()).unwrap();

        assert!(map.remove_direct_reference(&"user:1".to_string()).is_some());
        assert!(map.remove_direct_reference(&"user:1".to_string()).is_none());
    }

    #[test]
    fn test_remove_unknown_returns_none() {
        let mut map: AccessReferenceMap<String> = AccessReferenceMap::new();
        assert!(map.remove_direct_reference(&"never-added".to_string()).is_none());
    }

    #[test]
    fn test_update_replaces_all_mappings() {
        let mut map = AccessReferenceMap::new();
        let old_token = map.add_direct_reference("user:1".to_string()).unwrap();

        map.update(vec!["user:1".to_string(), "user:2".to_string()])
            .unwrap();

        assert_eq!(map.len(), 2);
        // old token was invalidated even though "user:1" is still mapped
        assert!(map.get_direct_reference(old_token.as_str()).is_none());
        assert!(map.get_indirect_reference(&"user:1".to_string()).is_some());
        assert!(map.get_indirect_reference(&"user:2".to_string()).is_some());
    }

    #[test]
    fn test_update_collapses_duplicates() {
        let mut map = AccessReferenceMap::new();
        map.update(vec![
            "user:1".to_string(),
            "user:1".to_string(),
            "user:1".to_string(),
        ])
        .unwrap();

        assert_eq!(map.len(), 1);
    }

    #[test]
    fn test_unknown_token_is_opaque() {
        let mut map = AccessReferenceMap::new();
        map.add_direct_reference("user:1".to_string()).unwrap();

        // a token this map never issued looks exactly like a removed one
        let foreign = map.generate_token().unwrap();
        assert!(map.get_direct_reference(foreign.as_str()).is_none());
    }

    #[test]
    fn test_generate_token_has_no_side_effects() {
        let map: AccessReferenceMap<String> = AccessReferenceMap::new();
        map.generate_token().unwrap();
        map.generate_token().unwrap();
        assert!(map.is_empty());
    }

    #[test]
    fn test_invalid_config_rejected_at_construction() {
        let result: Result<AccessReferenceMap<String>> =
            AccessReferenceMap::with_config(MapConfig::default().with_width(0));
        assert!(matches!(result, Err(RefMapError::InvalidWidth { .. })));
    }

    #[test]
    fn test_iterator_reflects_current_state() {
        let mut map = AccessReferenceMap::new();
        map.update(vec!["a".to_string(), "b".to_string(), "c".to_string()])
            .unwrap();

        let mut seen: Vec<&String> = map.direct_references().collect();
        seen.sort();
        assert_eq!(seen, ["a", "b", "c"]);

        map.remove_direct_reference(&"b".to_string());
        let mut seen: Vec<&String> = map.direct_references().collect();
        seen.sort();
        assert_eq!(seen, ["a", "c"]);
    }

    #[test]
    fn test_non_string_direct_references() {
        let mut map: AccessReferenceMap<u64> = AccessReferenceMap::new();
        let token = map.add_direct_reference(42).unwrap();

        assert_eq!(map.get_direct_reference(token.as_str()), Some(&42));
        assert_eq!(map.remove_direct_reference(&42), Some(token));
    }

    #[test]
    fn test_configured_encoding_flows_into_tokens() {
        let mut map =
            AccessReferenceMap::with_config(MapConfig::new(Encoding::Base64, 9)).unwrap();
        let token = map.add_direct_reference("user:1".to_string()).unwrap();

        // 9 bytes => 12 base64 characters, no padding
        assert_eq!(token.len(), 12);
    }
}
