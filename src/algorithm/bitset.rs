use bitvec::prelude::*;
use std::fmt;

/// Fixed-size bitset over dense 0-based ids
///
/// Tracks used tile ids during search and rare symbol handles for the border
/// rule. Provides O(1) membership testing and in-place updates.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct IdBitset {
    bits: BitVec,
}

impl IdBitset {
    /// Create a bitset with no members
    pub fn new(capacity: usize) -> Self {
        Self {
            bits: bitvec![0; capacity],
        }
    }

    /// Insert an id; ids beyond the capacity are ignored
    pub fn insert(&mut self, id: usize) {
        if id < self.bits.len() {
            self.bits.set(id, true);
        }
    }

    /// Remove an id
    pub fn remove(&mut self, id: usize) {
        if id < self.bits.len() {
            self.bits.set(id, false);
        }
    }

    /// Test membership
    pub fn contains(&self, id: usize) -> bool {
        self.bits.get(id).as_deref() == Some(&true)
    }

    /// Test if no ids are present
    pub fn is_empty(&self) -> bool {
        self.bits.not_any()
    }

    /// Count members
    pub fn count(&self) -> usize {
        self.bits.count_ones()
    }

    /// Iterate over ids not in the set, ascending
    pub fn iter_absent(&self) -> impl Iterator<Item = usize> + '_ {
        self.bits.iter_zeros()
    }

    /// Extract all members as a vector, ascending
    pub fn to_vec(&self) -> Vec<usize> {
        self.bits.iter_ones().collect()
    }
}

impl fmt::Display for IdBitset {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "IdBitset({} ids: {:?})", self.count(), self.to_vec())
    }
}
