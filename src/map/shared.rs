//! Lock-wrapped reference map for concurrent callers
//!
//! The plain [`AccessReferenceMap`] is single-owner by design. When several
//! threads need to resolve or mutate the same map, this handle serializes
//! every operation behind one `parking_lot::RwLock`, so callers cannot get
//! the locking discipline wrong.

use crate::config::MapConfig;
use crate::core::error::Result;
use crate::core::types::IndirectRef;
use crate::map::refmap::AccessReferenceMap;
use parking_lot::RwLock;
use std::hash::Hash;
use std::sync::Arc;

/// Cloneable, thread-safe handle to an access reference map
///
/// Clones share the same underlying map. Lookups return owned values
/// because references cannot outlive the lock guard.
#[derive(Debug)]
pub struct SharedReferenceMap<D> {
    inner: Arc<RwLock<AccessReferenceMap<D>>>,
}

impl<D> Clone for SharedReferenceMap<D> {
    fn clone(&self) -> Self {
        SharedReferenceMap {
            inner: Arc::clone(&self.inner),
        }
    }
}

impl<D> SharedReferenceMap<D>
where
    D: Eq + Hash + Clone,
{
    /// Create a shared map with the default configuration
    pub fn new() -> Self {
        SharedReferenceMap {
            inner: Arc::new(RwLock::new(AccessReferenceMap::new())),
        }
    }

    /// Create a shared map with an explicit configuration
    pub fn with_config(config: MapConfig) -> Result<Self> {
        Ok(SharedReferenceMap {
            inner: Arc::new(RwLock::new(AccessReferenceMap::with_config(config)?)),
        })
    }

    /// Wrap an existing map, taking ownership of it
    pub fn from_map(map: AccessReferenceMap<D>) -> Self {
        SharedReferenceMap {
            inner: Arc::new(RwLock::new(map)),
        }
    }

    pub fn add_direct_reference(&self, direct: D) -> Result<IndirectRef> {
        self.inner.write().add_direct_reference(direct)
    }

    pub fn remove_direct_reference(&self, direct: &D) -> Option<IndirectRef> {
        self.inner.write().remove_direct_reference(direct)
    }

    pub fn update<I>(&self, directs: I) -> Result<()>
    where
        I: IntoIterator<Item = D>,
    {
        self.inner.write().update(directs)
    }

    pub fn get_direct_reference(&self, indirect: &str) -> Option<D> {
        self.inner.read().get_direct_reference(indirect).cloned()
    }

    pub fn get_indirect_reference(&self, direct: &D) -> Option<IndirectRef> {
        self.inner.read().get_indirect_reference(direct).cloned()
    }

    /// Snapshot of the currently mapped direct references, in unspecified
    /// order
    pub fn direct_references(&self) -> Vec<D> {
        self.inner.read().direct_references().cloned().collect()
    }

    pub fn generate_token(&self) -> Result<IndirectRef> {
        self.inner.read().generate_token()
    }

    pub fn len(&self) -> usize {
        self.inner.read().len()
    }

    pub fn is_empty(&self) -> bool {
        self.inner.read().is_empty()
    }
}

impl<D> Default for SharedReferenceMap<D>
where
    D: Eq + Hash + Clone,
{
    fn default() -> Self {
        Self::new()
    }
}
