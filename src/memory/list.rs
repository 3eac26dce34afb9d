use smallvec::SmallVec;

use crate::memory::EntityIndex;

/// A growable ordered list of entity indices.
///
/// Backs the per-vertex neighbour lists and doubles as a FIFO work queue for
/// graph traversal. The list itself enforces no uniqueness; callers that need
/// set semantics check [`contains`] before pushing.
///
/// [`contains`]: IndexList::contains
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct IndexList<V: EntityIndex> {
    items: SmallVec<[V; 4]>,
}

impl<V> IndexList<V>
where
    V: EntityIndex,
{
    /// Creates an empty [`IndexList<V>`].
    pub fn new() -> Self {
        Self {
            items: SmallVec::new(),
        }
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Appends an index at the end of the list.
    pub fn push(&mut self, value: V) {
        self.items.push(value);
    }

    /// Removes and returns the first index of the list.
    pub fn pop_front(&mut self) -> Option<V> {
        if self.items.is_empty() {
            None
        } else {
            Some(self.items.remove(0))
        }
    }

    /// Removes the first occurrence of `value`, preserving the order of the
    /// remaining items. Returns whether an occurrence was found.
    pub fn remove_value(&mut self, value: V) -> bool {
        match self.items.iter().position(|item| *item == value) {
            Some(position) => {
                self.items.remove(position);
                true
            }
            None => false,
        }
    }

    /// Returns whether `value` occurs in the list. Linear scan.
    pub fn contains(&self, value: V) -> bool {
        self.items.contains(&value)
    }

    pub fn clear(&mut self) {
        self.items.clear();
    }

    pub fn as_slice(&self) -> &[V] {
        &self.items
    }

    pub fn iter(&self) -> impl Iterator<Item = V> + '_ {
        self.items.iter().copied()
    }
}

impl<V> FromIterator<V> for IndexList<V>
where
    V: EntityIndex,
{
    fn from_iter<I: IntoIterator<Item = V>>(iter: I) -> Self {
        Self {
            items: iter.into_iter().collect(),
        }
    }
}

#[cfg(test)]
mod test {
    use super::*;
    use crate::VertexIndex;

    fn ix(index: usize) -> VertexIndex {
        VertexIndex::new(index)
    }

    #[test]
    fn push_pop_is_fifo() {
        let mut list = IndexList::new();
        list.push(ix(3));
        list.push(ix(1));
        list.push(ix(2));

        assert_eq!(list.pop_front(), Some(ix(3)));
        assert_eq!(list.pop_front(), Some(ix(1)));
        assert_eq!(list.pop_front(), Some(ix(2)));
        assert_eq!(list.pop_front(), None);
    }

    #[test]
    fn remove_value_takes_first_occurrence() {
        let mut list: IndexList<VertexIndex> = [1, 2, 1, 3].into_iter().map(ix).collect();

        assert!(list.remove_value(ix(1)));
        assert_eq!(list.as_slice(), [ix(2), ix(1), ix(3)]);

        assert!(list.remove_value(ix(1)));
        assert_eq!(list.as_slice(), [ix(2), ix(3)]);

        assert!(!list.remove_value(ix(1)));
    }

    #[test]
    fn contains_scans_all() {
        let mut list = IndexList::new();
        assert!(!list.contains(ix(0)));
        list.push(ix(0));
        list.push(ix(5));
        assert!(list.contains(ix(5)));
        assert!(!list.contains(ix(4)));
    }
}
