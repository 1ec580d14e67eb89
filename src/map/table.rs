//! Paired lookup tables for the reference bijection
//!
//! Both directions of the mapping live behind one type that only exposes
//! paired insert/remove/clear, so the bijection invariant holds by
//! construction. Nothing outside this module can update one table without
//! the other.

use crate::core::types::IndirectRef;
use std::collections::HashMap;
use std::hash::Hash;

/// The two synchronized lookup tables behind an access reference map
#[derive(Debug, Clone)]
pub(crate) struct BiTable<D> {
    direct_to_indirect: HashMap<D, IndirectRef>,
    indirect_to_direct: HashMap<IndirectRef, D>,
}

impl<D> BiTable<D>
where
    D: Eq + Hash + Clone,
{
    pub fn new() -> Self {
        BiTable {
            direct_to_indirect: HashMap::new(),
            indirect_to_direct: HashMap::new(),
        }
    }

    /// Insert a pair into both tables.
    ///
    /// Callers must have checked that neither key is already present; the
    /// map's add path guarantees this via the idempotence check and the
    /// collision redraw.
    pub fn insert(&mut self, direct: D, indirect: IndirectRef) {
        debug_assert!(!self.direct_to_indirect.contains_key(&direct));
        debug_assert!(!self.indirect_to_direct.contains_key(&indirect));

        self.indirect_to_direct
            .insert(indirect.clone(), direct.clone());
        self.direct_to_indirect.insert(direct, indirect);
    }

    /// Remove the pair keyed by `direct` from both tables, returning the
    /// indirect reference that was removed
    pub fn remove_direct(&mut self, direct: &D) -> Option<IndirectRef> {
        let indirect = self.direct_to_indirect.remove(direct)?;
        self.indirect_to_direct.remove(indirect.as_str());
        Some(indirect)
    }

    pub fn indirect_for(&self, direct: &D) -> Option<&IndirectRef> {
        self.direct_to_indirect.get(direct)
    }

    pub fn direct_for(&self, indirect: &str) -> Option<&D> {
        self.indirect_to_direct.get(indirect)
    }

    pub fn contains_indirect(&self, indirect: &str) -> bool {
        self.indirect_to_direct.contains_key(indirect)
    }

    pub fn clear(&mut self) {
        self.direct_to_indirect.clear();
        self.indirect_to_direct.clear();
    }

    pub fn len(&self) -> usize {
        debug_assert_eq!(
            self.direct_to_indirect.len(),
            self.indirect_to_direct.len()
        );
        self.direct_to_indirect.len()
    }

    pub fn is_empty(&self) -> bool {
        self.direct_to_indirect.is_empty()
    }

    pub fn direct_keys(&self) -> impl Iterator<Item = &D> {
        self.direct_to_indirect.keys()
    }
}
