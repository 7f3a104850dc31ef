//! Insertion-ordered associative map with get-or-insert-default access

use crate::collections::Sequence;
use hashbrown::HashMap;
use std::hash::Hash;

/// Key -> value map whose traversal order is the order keys were first seen
///
/// Entries live in a `Sequence`; a hash index maps each key to its slot.
/// Slots are never moved, so iteration order is stable for the lifetime of
/// the map. There is no removal.
///
/// Not meant to be mutated from several threads at once: each instance has a
/// single owner (a worker while aggregating, the driver while merging).
#[derive(Clone, Debug)]
pub struct AssocMap<K, V> {
    index: HashMap<K, usize>,
    entries: Sequence<(K, V)>,
}

impl<K, V> Default for AssocMap<K, V> {
    fn default() -> Self {
        Self {
            index: HashMap::new(),
            entries: Sequence::new(),
        }
    }
}

impl<K, V> AssocMap<K, V>
where
    K: Hash + Eq + Clone,
{
    pub fn new() -> Self {
        Self::default()
    }

    /// Return the value for `key`, inserting `V::default()` first if absent
    pub fn get_or_insert_default(&mut self, key: K) -> &mut V
    where
        V: Default,
    {
        let slot = match self.index.get(&key) {
            Some(&slot) => slot,
            None => {
                let slot = self.entries.len();
                self.entries.push((key.clone(), V::default()));
                self.index.insert(key, slot);
                slot
            }
        };
        &mut self.entries[slot].1
    }

    pub fn get(&self, key: &K) -> Option<&V> {
        self.index.get(key).map(|&slot| &self.entries[slot].1)
    }

    pub fn contains_key(&self, key: &K) -> bool {
        self.index.contains_key(key)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Traverse all entries in first-insertion order
    pub fn iter(&self) -> impl Iterator<Item = (&K, &V)> + '_ {
        self.entries.iter().map(|(k, v)| (k, v))
    }

    pub fn keys(&self) -> impl Iterator<Item = &K> + '_ {
        self.entries.iter().map(|(k, _)| k)
    }
}

impl<K, V> IntoIterator for AssocMap<K, V> {
    type Item = (K, V);
    type IntoIter = std::vec::IntoIter<(K, V)>;

    fn into_iter(self) -> Self::IntoIter {
        self.entries.into_iter()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[derive(Debug, Default, Clone, PartialEq)]
    struct Counter {
        hits: u32,
    }

    #[test]
    fn test_default_on_first_access() {
        let mut map: AssocMap<i64, Counter> = AssocMap::new();
        assert_eq!(*map.get_or_insert_default(7), Counter { hits: 0 });
        assert_eq!(map.len(), 1);
    }

    #[test]
    fn test_second_access_keeps_value() {
        let mut map: AssocMap<i64, Counter> = AssocMap::new();
        map.get_or_insert_default(7).hits += 5;
        map.get_or_insert_default(7).hits += 1;

        assert_eq!(map.get(&7), Some(&Counter { hits: 6 }));
        assert_eq!(map.len(), 1);
    }

    #[test]
    fn test_iteration_order_is_stable() {
        let mut map: AssocMap<i64, Counter> = AssocMap::new();
        for key in [30, 10, 20] {
            map.get_or_insert_default(key);
        }
        let before: Vec<i64> = map.keys().copied().collect();

        // Mutating and inserting more keys must not reorder existing ones
        map.get_or_insert_default(10).hits = 99;
        for key in 100..200 {
            map.get_or_insert_default(key);
        }
        let after: Vec<i64> = map.keys().copied().take(3).collect();

        assert_eq!(before, vec![30, 10, 20]);
        assert_eq!(after, before);
        assert_eq!(map.iter().nth(1), Some((&10, &Counter { hits: 99 })));
    }

    #[test]
    fn test_iteration_is_restartable() {
        let mut map: AssocMap<&str, u32> = AssocMap::new();
        *map.get_or_insert_default("a") += 1;
        *map.get_or_insert_default("b") += 2;

        let first: Vec<_> = map.iter().collect();
        let second: Vec<_> = map.iter().collect();
        assert_eq!(first, second);
        assert_eq!(first.len(), 2);
    }

    #[test]
    fn test_missing_key() {
        let map: AssocMap<i64, u32> = AssocMap::new();
        assert!(map.get(&1).is_none());
        assert!(!map.contains_key(&1));
        assert!(map.is_empty());
    }
}
