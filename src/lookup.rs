//! Shared read-only reference-data maps.

use std::collections::BTreeMap;
use std::sync::Arc;

/// An immutable id-to-entity map shared across form instances.
///
/// Reference data (countries, divisions, contacts) is queried from the store
/// once and injected into each form factory, so individual forms never hit
/// the store themselves. Cloning is cheap (the underlying map is shared), and
/// iteration order is ascending by id, which keeps every derived candidate
/// list deterministic.
#[derive(Debug, Clone)]
pub struct LookupMap<V> {
    inner: Arc<BTreeMap<u64, V>>,
}

impl<V> LookupMap<V> {
    /// Wraps an already-built map.
    pub fn new(entries: BTreeMap<u64, V>) -> Self {
        Self {
            inner: Arc::new(entries),
        }
    }

    /// Returns the entity with the given id, if present.
    pub fn get(&self, id: u64) -> Option<&V> {
        self.inner.get(&id)
    }

    /// Returns `true` if an entity with the given id exists.
    pub fn contains(&self, id: u64) -> bool {
        self.inner.contains_key(&id)
    }

    /// Iterates entries in ascending id order.
    pub fn iter(&self) -> impl Iterator<Item = (u64, &V)> {
        self.inner.iter().map(|(id, v)| (*id, v))
    }

    /// Iterates values in ascending id order.
    pub fn values(&self) -> impl Iterator<Item = &V> {
        self.inner.values()
    }

    /// Returns the number of entries.
    pub fn len(&self) -> usize {
        self.inner.len()
    }

    /// Returns `true` if the map has no entries.
    pub fn is_empty(&self) -> bool {
        self.inner.is_empty()
    }
}

impl<V> Default for LookupMap<V> {
    fn default() -> Self {
        Self::new(BTreeMap::new())
    }
}

impl<V> FromIterator<(u64, V)> for LookupMap<V> {
    fn from_iter<I: IntoIterator<Item = (u64, V)>>(iter: I) -> Self {
        Self::new(iter.into_iter().collect())
    }
}
