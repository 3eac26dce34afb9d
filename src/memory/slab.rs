use std::{
    iter::FusedIterator,
    marker::PhantomData,
    ops::{Index, IndexMut},
};

use crate::memory::EntityIndex;

/// A slab arena that manages fixed-sized objects.
///
/// Slots are either live or tombstoned. Insertion reuses the lowest-index
/// tombstone before growing the buffer, and the backing buffer never shrinks
/// on removal. The index of a live slot is stable until the slot is removed.
#[derive(Debug, Clone)]
pub struct Slab<K, V> {
    data: Vec<Entry<V>>,

    /// Lower bound on the index of the first tombstone, so that insertion
    /// does not rescan slots that are known to be full.
    free: usize,
    len: usize,
    phantom: PhantomData<K>,
}

impl<K, V> Slab<K, V>
where
    K: EntityIndex,
{
    /// Creates an empty [`Slab<K, V>`].
    pub fn new() -> Self {
        Self {
            data: Vec::new(),
            free: 0,
            len: 0,
            phantom: PhantomData,
        }
    }

    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            data: Vec::with_capacity(capacity),
            free: 0,
            len: 0,
            phantom: PhantomData,
        }
    }

    /// Returns the number of stored values.
    pub fn len(&self) -> usize {
        self.len
    }

    /// Returns whether there is no stored value.
    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// Returns an upper bound on a valid index in this slab.
    ///
    /// Every index at or past this bound is tombstone-free territory that has
    /// never been occupied.
    pub fn upper_bound(&self) -> usize {
        self.data.len()
    }

    pub fn contains(&self, key: K) -> bool {
        matches!(self.data.get(key.index()), Some(Entry::Full(_)))
    }

    pub fn insert(&mut self, value: V) -> K {
        let reused = (self.free..self.data.len())
            .find(|index| matches!(self.data[*index], Entry::Free));

        let index = match reused {
            Some(index) => {
                self.data[index] = Entry::Full(value);
                index
            }
            None => {
                self.data.push(Entry::Full(value));
                self.data.len() - 1
            }
        };

        // The scan stopped at the lowest tombstone, so everything at or
        // below `index` is now full.
        self.free = index + 1;
        self.len += 1;

        K::new(index)
    }

    pub fn remove(&mut self, key: K) -> Option<V> {
        let index = key.index();
        let entry = self.data.get_mut(index)?;

        match std::mem::replace(entry, Entry::Free) {
            Entry::Free => None,
            Entry::Full(value) => {
                self.free = self.free.min(index);
                self.len -= 1;
                Some(value)
            }
        }
    }

    pub fn get(&self, key: K) -> Option<&V> {
        match self.data.get(key.index()) {
            Some(Entry::Full(value)) => Some(value),
            _ => None,
        }
    }

    pub fn get_mut(&mut self, key: K) -> Option<&mut V> {
        match self.data.get_mut(key.index()) {
            Some(Entry::Full(value)) => Some(value),
            _ => None,
        }
    }

    /// Returns the index of the first live slot at or after `position`.
    ///
    /// Cursors use this to skip tombstones when starting or advancing.
    pub fn next_live(&self, position: usize) -> Option<usize> {
        (position..self.data.len()).find(|i| matches!(self.data[*i], Entry::Full(_)))
    }

    pub fn clear(&mut self) {
        self.data.clear();
        self.free = 0;
        self.len = 0;
    }

    pub fn iter(&self) -> Iter<'_, K, V> {
        Iter::new(self)
    }

    pub fn iter_mut(&mut self) -> IterMut<'_, K, V> {
        IterMut::new(self)
    }
}

/// Equality is position-sensitive: two slabs compare equal when they have the
/// same upper bound, slot `i` is live in one iff it is live in the other, and
/// corresponding live values are equal. Only the tombstone pattern matters,
/// not the order in which the tombstones were created.
impl<K, V> PartialEq for Slab<K, V>
where
    V: PartialEq,
{
    fn eq(&self, other: &Self) -> bool {
        self.data.len() == other.data.len()
            && self
                .data
                .iter()
                .zip(&other.data)
                .all(|(a, b)| match (a, b) {
                    (Entry::Free, Entry::Free) => true,
                    (Entry::Full(a), Entry::Full(b)) => a == b,
                    _ => false,
                })
    }
}

impl<K, V> Eq for Slab<K, V> where V: Eq {}

impl<K, V> Index<K> for Slab<K, V>
where
    K: EntityIndex,
{
    type Output = V;

    fn index(&self, key: K) -> &Self::Output {
        self.get(key).expect("invalid key")
    }
}

impl<K, V> IndexMut<K> for Slab<K, V>
where
    K: EntityIndex,
{
    fn index_mut(&mut self, key: K) -> &mut Self::Output {
        self.get_mut(key).expect("invalid key")
    }
}

impl<K, V> Default for Slab<K, V>
where
    K: EntityIndex,
{
    fn default() -> Self {
        Self::new()
    }
}

#[derive(Debug, Clone)]
enum Entry<V> {
    Free,
    Full(V),
}

pub struct Iter<'a, K, V> {
    entries: std::iter::Enumerate<std::slice::Iter<'a, Entry<V>>>,
    len: usize,
    phantom: PhantomData<K>,
}

impl<'a, K, V> Iter<'a, K, V> {
    fn new(slab: &'a Slab<K, V>) -> Self {
        Self {
            entries: slab.data.iter().enumerate(),
            len: slab.len,
            phantom: PhantomData,
        }
    }
}

impl<'a, K, V> Iterator for Iter<'a, K, V>
where
    K: EntityIndex,
{
    type Item = (K, &'a V);

    fn next(&mut self) -> Option<Self::Item> {
        for (index, entry) in self.entries.by_ref() {
            if let Entry::Full(value) = entry {
                self.len -= 1;
                let key = K::new(index);
                return Some((key, value));
            }
        }

        None
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        (self.len, Some(self.len))
    }
}

impl<'a, K, V> ExactSizeIterator for Iter<'a, K, V>
where
    K: EntityIndex,
{
    fn len(&self) -> usize {
        self.len
    }
}

impl<'a, K, V> FusedIterator for Iter<'a, K, V> where K: EntityIndex {}

impl<'a, K, V> IntoIterator for &'a Slab<K, V>
where
    K: EntityIndex,
{
    type Item = (K, &'a V);
    type IntoIter = Iter<'a, K, V>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

pub struct IterMut<'a, K, V> {
    entries: std::iter::Enumerate<std::slice::IterMut<'a, Entry<V>>>,
    len: usize,
    phantom: PhantomData<K>,
}

impl<'a, K, V> IterMut<'a, K, V> {
    fn new(slab: &'a mut Slab<K, V>) -> Self {
        Self {
            entries: slab.data.iter_mut().enumerate(),
            len: slab.len,
            phantom: PhantomData,
        }
    }
}

impl<'a, K, V> Iterator for IterMut<'a, K, V>
where
    K: EntityIndex,
{
    type Item = (K, &'a mut V);

    fn next(&mut self) -> Option<Self::Item> {
        for (index, entry) in self.entries.by_ref() {
            if let Entry::Full(value) = entry {
                self.len -= 1;
                let key = K::new(index);
                return Some((key, value));
            }
        }

        None
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        (self.len, Some(self.len))
    }
}

impl<'a, K, V> ExactSizeIterator for IterMut<'a, K, V>
where
    K: EntityIndex,
{
    fn len(&self) -> usize {
        self.len
    }
}

impl<'a, K, V> FusedIterator for IterMut<'a, K, V> where K: EntityIndex {}

impl<'a, K, V> IntoIterator for &'a mut Slab<K, V>
where
    K: EntityIndex,
{
    type Item = (K, &'a mut V);
    type IntoIter = IterMut<'a, K, V>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter_mut()
    }
}
