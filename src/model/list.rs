// SPDX-FileCopyrightText: 2026 Ontic Contributors
// SPDX-License-Identifier: MIT

use std::cmp::Ordering;

/// Anything stored in a [`ModelList`]: exposes the id string the list
/// keys on.
pub trait Keyed {
    fn key(&self) -> &str;
}

/// An insertion-ordered collection unique by id.
///
/// `insert` and `remove` are the only mutators of membership. Lookups for
/// absent ids return `None`, never an error. Lists in this graph are
/// small (fields of one definition, attributes of one node), so lookups
/// scan in order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ModelList<T> {
    entries: Vec<T>,
}

impl<T> Default for ModelList<T> {
    fn default() -> Self {
        Self {
            entries: Vec::new(),
        }
    }
}

impl<T: Keyed> ModelList<T> {
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds the entry, or replaces the existing entry with the same id in
    /// place (insertion position is preserved on replace).
    pub fn insert(&mut self, entry: T) {
        match self.position(entry.key()) {
            Some(index) => self.entries[index] = entry,
            None => self.entries.push(entry),
        }
    }

    /// Removes and returns the entry with the given id, if present.
    pub fn remove(&mut self, id: &str) -> Option<T> {
        let index = self.position(id)?;
        Some(self.entries.remove(index))
    }

    pub fn get(&self, id: &str) -> Option<&T> {
        self.position(id).map(|index| &self.entries[index])
    }

    pub fn get_mut(&mut self, id: &str) -> Option<&mut T> {
        let index = self.position(id)?;
        Some(&mut self.entries[index])
    }

    pub fn contains(&self, id: &str) -> bool {
        self.position(id).is_some()
    }

    pub fn position(&self, id: &str) -> Option<usize> {
        self.entries.iter().position(|entry| entry.key() == id)
    }

    /// Entries in insertion order.
    pub fn models(&self) -> impl Iterator<Item = &T> {
        self.entries.iter()
    }

    pub fn models_mut(&mut self) -> impl Iterator<Item = &mut T> {
        self.entries.iter_mut()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Stable sort used by presentation ordering policies (e.g. inherited
    /// entries after owned ones, then by order attribute).
    pub fn sort_by<F>(&mut self, compare: F)
    where
        F: FnMut(&T, &T) -> Ordering,
    {
        self.entries.sort_by(compare);
    }

    pub fn retain<F>(&mut self, keep: F)
    where
        F: FnMut(&T) -> bool,
    {
        self.entries.retain(keep);
    }
}

impl<'a, T: Keyed> IntoIterator for &'a ModelList<T> {
    type Item = &'a T;
    type IntoIter = std::slice::Iter<'a, T>;

    fn into_iter(self) -> Self::IntoIter {
        self.entries.iter()
    }
}

impl<T: Keyed> FromIterator<T> for ModelList<T> {
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        let mut list = Self::new();
        for entry in iter {
            list.insert(entry);
        }
        list
    }
}
