//! Keyed child mappings.
//!
//! A [`ChildMapping`] associates each [`ChildKey`] with a child while
//! carrying render order explicitly as a separate key list. Lookup goes
//! through the hash map; iteration always follows the key list, so order
//! never depends on how the hash map happens to store its entries.

use rustc_hash::FxHashMap;

use crate::child::Keyed;
use crate::error::{Result, TransitionError};
use crate::key::{ChildKey, KeyBounds};

/// Ordered key → child association.
#[derive(Clone, Debug)]
pub struct ChildMapping<K, P> {
    /// Render order
    order: Vec<ChildKey<K>>,
    /// Children by key
    entries: FxHashMap<ChildKey<K>, P>,
}

impl<K: KeyBounds, P> ChildMapping<K, P> {
    /// Create an empty mapping
    pub fn new() -> Self {
        Self {
            order: Vec::new(),
            entries: FxHashMap::default(),
        }
    }

    /// Create an empty mapping with room for `capacity` children
    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            order: Vec::with_capacity(capacity),
            entries: FxHashMap::with_capacity_and_hasher(capacity, Default::default()),
        }
    }

    /// Append a child at the end of the order.
    ///
    /// Fails without modifying the mapping if the key is already present.
    pub fn insert(&mut self, key: ChildKey<K>, child: P) -> Result<()> {
        if self.entries.contains_key(&key) {
            return Err(TransitionError::DuplicateKey {
                key: format!("{:?}", key),
            });
        }
        self.order.push(key.clone());
        self.entries.insert(key, child);
        Ok(())
    }

    /// Remove a child, keeping the order of the rest.
    pub fn remove(&mut self, key: &ChildKey<K>) -> Option<P> {
        let child = self.entries.remove(key)?;
        self.order.retain(|k| k != key);
        Some(child)
    }

    pub fn get(&self, key: &ChildKey<K>) -> Option<&P> {
        self.entries.get(key)
    }

    pub fn get_mut(&mut self, key: &ChildKey<K>) -> Option<&mut P> {
        self.entries.get_mut(key)
    }

    pub fn contains_key(&self, key: &ChildKey<K>) -> bool {
        self.entries.contains_key(key)
    }

    pub fn len(&self) -> usize {
        self.order.len()
    }

    pub fn is_empty(&self) -> bool {
        self.order.is_empty()
    }

    /// Keys in render order
    pub fn keys(&self) -> &[ChildKey<K>] {
        &self.order
    }

    /// Children in render order
    pub fn values(&self) -> impl Iterator<Item = &P> + '_ {
        self.order.iter().filter_map(|k| self.entries.get(k))
    }

    /// (key, child) pairs in render order
    pub fn iter(&self) -> impl Iterator<Item = (&ChildKey<K>, &P)> + '_ {
        self.order
            .iter()
            .filter_map(|k| self.entries.get(k).map(|child| (k, child)))
    }

    /// Consume the mapping into (key, child) pairs in render order
    pub fn into_entries(self) -> Vec<(ChildKey<K>, P)> {
        let Self { order, mut entries } = self;
        order
            .into_iter()
            .filter_map(|k| entries.remove(&k).map(|child| (k, child)))
            .collect()
    }
}

impl<K: KeyBounds, P> Default for ChildMapping<K, P> {
    fn default() -> Self {
        Self::new()
    }
}

impl<K: KeyBounds, P: PartialEq> PartialEq for ChildMapping<K, P> {
    fn eq(&self, other: &Self) -> bool {
        self.order == other.order && self.entries == other.entries
    }
}

/// Build a mapping from an ordered list of children.
///
/// Children without an explicit key are identified by their index.
/// Fails if two children resolve to the same key.
pub fn child_mapping<P, I>(children: I) -> Result<ChildMapping<P::Key, P>>
where
    P: Keyed,
    I: IntoIterator<Item = P>,
{
    child_mapping_with(children, |child, _| child)
}

/// Build a mapping, passing every child through `transform` with its resolved key.
pub fn child_mapping_with<P, I, F>(children: I, mut transform: F) -> Result<ChildMapping<P::Key, P>>
where
    P: Keyed,
    I: IntoIterator<Item = P>,
    F: FnMut(P, &ChildKey<P::Key>) -> P,
{
    let children = children.into_iter();
    let mut mapping = ChildMapping::with_capacity(children.size_hint().0);

    for (index, child) in children.enumerate() {
        let key = ChildKey::resolve(child.key(), index);
        if key.is_positional() {
            tracing::warn!(
                index,
                "transition child has no key; falling back to its position, which breaks on reorder"
            );
        }
        if mapping.contains_key(&key) {
            return Err(TransitionError::DuplicateKey {
                key: format!("{:?}", key),
            });
        }
        let child = transform(child, &key);
        mapping.insert(key, child)?;
    }

    Ok(mapping)
}
