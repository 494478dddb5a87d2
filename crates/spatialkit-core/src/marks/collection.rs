//! Keyed mark storage.

use super::{Mark, MarkKey, MarkSource};
use indexmap::IndexMap;
use indexmap::map;
use std::hash::Hash;

/// Marks keyed by identity.
///
/// Iterates in insertion order. Replacing a mark keeps its position; removing
/// one keeps the order of the rest.
#[derive(Debug, Clone)]
pub struct Marks<K> {
    marks: IndexMap<K, Mark>,
}

impl<K> Default for Marks<K> {
    fn default() -> Self {
        Self {
            marks: IndexMap::new(),
        }
    }
}

impl<K: Eq + Hash> Marks<K> {
    pub fn new() -> Self {
        Self::default()
    }

    /// Insert or replace a mark, returning the previous one.
    pub fn insert(&mut self, key: K, mark: Mark) -> Option<Mark> {
        self.marks.insert(key, mark)
    }

    pub fn get(&self, key: &K) -> Option<&Mark> {
        self.marks.get(key)
    }

    /// Edit an existing mark in place. Returns false if `key` is absent.
    pub fn update(&mut self, key: &K, edit: impl FnOnce(&mut Mark)) -> bool {
        match self.marks.get_mut(key) {
            Some(mark) => {
                edit(mark);
                true
            }
            None => false,
        }
    }

    pub fn remove(&mut self, key: &K) -> Option<Mark> {
        self.marks.shift_remove(key)
    }

    pub fn contains(&self, key: &K) -> bool {
        self.marks.contains_key(key)
    }

    pub fn len(&self) -> usize {
        self.marks.len()
    }

    pub fn is_empty(&self) -> bool {
        self.marks.is_empty()
    }

    pub fn clear(&mut self) {
        self.marks.clear();
    }

    pub fn iter(&self) -> map::Iter<'_, K, Mark> {
        self.marks.iter()
    }

    pub fn keys(&self) -> map::Keys<'_, K, Mark> {
        self.marks.keys()
    }

    /// Remove every mark matching `predicate`, returning how many went.
    pub fn remove_where(&mut self, mut predicate: impl FnMut(&K, &Mark) -> bool) -> usize {
        let before = self.marks.len();
        self.marks.retain(|key, mark| !predicate(key, mark));
        before - self.marks.len()
    }

    /// Marks in render order: ascending by maximum depth, ties in
    /// insertion order.
    pub fn sorted(&self) -> Vec<(&K, &Mark)> {
        let mut sorted: Vec<_> = self.marks.iter().collect();
        sorted.sort_by(|(_, a), (_, b)| a.depth_order(b));
        sorted
    }
}

impl Marks<MarkKey> {
    /// Remove every mark placed by `source`.
    pub fn remove_source(&mut self, source: MarkSource) -> usize {
        self.remove_where(|key, _| key.source() == source)
    }
}

impl<K: Eq + Hash> PartialEq for Marks<K> {
    fn eq(&self, other: &Self) -> bool {
        self.marks == other.marks
    }
}

impl<K: Eq + Hash> FromIterator<(K, Mark)> for Marks<K> {
    fn from_iter<I: IntoIterator<Item = (K, Mark)>>(iter: I) -> Self {
        Self {
            marks: iter.into_iter().collect(),
        }
    }
}

impl<K: Eq + Hash> Extend<(K, Mark)> for Marks<K> {
    fn extend<I: IntoIterator<Item = (K, Mark)>>(&mut self, iter: I) {
        self.marks.extend(iter);
    }
}

impl<'a, K> IntoIterator for &'a Marks<K> {
    type Item = (&'a K, &'a Mark);
    type IntoIter = map::Iter<'a, K, Mark>;

    fn into_iter(self) -> Self::IntoIter {
        self.marks.iter()
    }
}
