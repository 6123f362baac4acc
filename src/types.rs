//! Core record types returned by the clustering engine.

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// A cluster's representative value plus its membership bookkeeping.
///
/// `indexes` holds 0-based positions into the data sequence that was
/// clustered, in the order the items were assigned during the last
/// completed iteration. `count` always equals `indexes.len()`.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Centroid<T> {
    /// Current representative value.
    pub value: T,
    /// Number of data items assigned to this centroid.
    pub count: usize,
    /// Original positions of the assigned items.
    pub indexes: Vec<usize>,
}

impl<T> Centroid<T> {
    /// Create a centroid with no assigned items.
    #[inline]
    pub fn new(value: T) -> Self {
        Self {
            value,
            count: 0,
            indexes: Vec::new(),
        }
    }

    /// Return true if no items are assigned.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.count == 0
    }

    /// Record that the item at `index` belongs to this centroid.
    #[inline]
    pub(crate) fn assign(&mut self, index: usize) {
        self.count += 1;
        self.indexes.push(index);
    }

    /// Drop all assignments, keeping the index buffer's capacity.
    #[inline]
    pub(crate) fn reset(&mut self) {
        self.count = 0;
        self.indexes.clear();
    }
}
