use bitvec::prelude::*;
use std::fmt;

/// Fixed-size bitset of tile indices consistent with a cell's surroundings
///
/// Uses 0-based indexing, matching positions in the tileset. Membership
/// and set size are all that matter downstream; iteration order is by index.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct CandidateSet {
    bits: BitVec,
}

impl CandidateSet {
    /// Create a set with no tiles present
    pub fn new(tile_count: usize) -> Self {
        Self {
            bits: bitvec![0; tile_count],
        }
    }

    /// Create a set containing every tile of the tileset
    pub fn full(tile_count: usize) -> Self {
        Self {
            bits: bitvec![1; tile_count],
        }
    }

    /// Number of tiles the set can hold
    pub fn capacity(&self) -> usize {
        self.bits.len()
    }

    /// Insert a tile index, ignoring indices beyond the capacity
    pub fn insert(&mut self, tile: usize) {
        if tile < self.bits.len() {
            self.bits.set(tile, true);
        }
    }

    /// Test tile membership
    pub fn contains(&self, tile: usize) -> bool {
        self.bits.get(tile).as_deref() == Some(&true)
    }

    /// Intersect this set with another in-place
    pub fn intersect_with(&mut self, other: &Self) {
        self.bits &= &other.bits;
    }

    /// Create a new set containing the intersection
    #[must_use]
    pub fn intersection(&self, other: &Self) -> Self {
        let mut result = self.clone();
        result.intersect_with(other);
        result
    }

    /// Test if no tiles are present
    pub fn is_empty(&self) -> bool {
        self.bits.not_any()
    }

    /// Count tiles in the set; this is the cell's entropy
    pub fn count(&self) -> usize {
        self.bits.count_ones()
    }

    /// The `n`-th member in index order
    pub fn nth(&self, n: usize) -> Option<usize> {
        self.bits.iter_ones().nth(n)
    }

    /// Iterate over member indices in ascending order
    pub fn iter(&self) -> impl Iterator<Item = usize> + '_ {
        self.bits.iter_ones()
    }

    /// Extract all tile indices as a vector
    pub fn to_vec(&self) -> Vec<usize> {
        self.bits.iter_ones().collect()
    }
}

impl fmt::Display for CandidateSet {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "CandidateSet({} tiles: {:?})",
            self.count(),
            self.to_vec()
        )
    }
}
