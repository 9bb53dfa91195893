//! Selection model - an insertion-ordered set of tile indices
//!
//! Membership tests treat the selection as a set, but operations that lay
//! tiles out left to right (row fit) rely on the order in which tiles were
//! selected, so the members are kept in insertion order.

use serde::{Deserialize, Serialize};

/// The set of selected tile indices, in selection order
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Selection {
    indices: Vec<usize>,
}

impl Selection {
    /// Create an empty selection
    pub fn new() -> Self {
        Self::default()
    }

    /// Build a selection from indices, keeping the first occurrence of each
    pub fn from_indices(indices: impl IntoIterator<Item = usize>) -> Self {
        let mut selection = Self::new();
        for index in indices {
            selection.insert(index);
        }
        selection
    }

    /// Select every index of a collection of `len` tiles, in collection order
    pub fn all(len: usize) -> Self {
        Self {
            indices: (0..len).collect(),
        }
    }

    pub fn contains(&self, index: usize) -> bool {
        self.indices.contains(&index)
    }

    pub fn len(&self) -> usize {
        self.indices.len()
    }

    pub fn is_empty(&self) -> bool {
        self.indices.is_empty()
    }

    /// Selected indices in selection order
    pub fn indices(&self) -> &[usize] {
        &self.indices
    }

    pub fn iter(&self) -> impl Iterator<Item = usize> + '_ {
        self.indices.iter().copied()
    }

    /// First selected index, which anchors row placement
    pub fn first(&self) -> Option<usize> {
        self.indices.first().copied()
    }

    /// Append `index` if absent. Returns whether it was added.
    pub fn insert(&mut self, index: usize) -> bool {
        if self.contains(index) {
            return false;
        }
        self.indices.push(index);
        true
    }

    /// Remove `index` if present. Returns whether it was removed.
    pub fn remove(&mut self, index: usize) -> bool {
        let before = self.indices.len();
        self.indices.retain(|&i| i != index);
        self.indices.len() != before
    }

    /// Add if absent, remove if present. Returns whether `index` is now selected.
    pub fn toggle(&mut self, index: usize) -> bool {
        if self.remove(index) {
            false
        } else {
            self.indices.push(index);
            true
        }
    }

    pub fn clear(&mut self) {
        self.indices.clear();
    }

    /// Re-map the selection after the tile at `removed` left the collection.
    ///
    /// `removed` is dropped and every greater index shifts down by one; the
    /// relative order of the survivors is unchanged.
    pub fn reindex_after_removal(&mut self, removed: usize) {
        self.indices.retain(|&i| i != removed);
        for index in &mut self.indices {
            if *index > removed {
                *index -= 1;
            }
        }
    }
}

impl FromIterator<usize> for Selection {
    fn from_iter<T: IntoIterator<Item = usize>>(iter: T) -> Self {
        Self::from_indices(iter)
    }
}
