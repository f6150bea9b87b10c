//! Per-cell candidate sets derived from resolved neighbors
//!
//! Candidates are recomputed from scratch every round. Information therefore
//! travels one resolved layer per round; there is no incremental domain
//! propagation between rounds.

use crate::algorithm::bitset::CandidateSet;
use crate::algorithm::rules::AdjacencyRules;
use crate::spatial::grid::Grid;
use ndarray::Array2;

/// Tiles consistent with every resolved orthogonal neighbor of `position`
///
/// Returns `None` for resolved cells and positions outside the grid.
/// Unresolved neighbors impose no constraint, so an isolated cell gets the
/// full tileset.
pub fn candidates_at(
    grid: &Grid,
    rules: &AdjacencyRules,
    position: [usize; 2],
) -> Option<CandidateSet> {
    if grid.cell(position)?.is_resolved() {
        return None;
    }

    let mut candidates = CandidateSet::full(rules.tile_count());
    for (direction, neighbor_position) in grid.neighbors(position) {
        let Some(neighbor) = grid.tile_at(neighbor_position) else {
            continue;
        };
        match rules.allowed(direction, neighbor) {
            Some(allowed) => candidates.intersect_with(allowed),
            // A neighbor resolved to a tile the rules don't know admits nothing
            None => return Some(CandidateSet::new(rules.tile_count())),
        }
        if candidates.is_empty() {
            break;
        }
    }

    Some(candidates)
}

/// Candidate sets for every cell of a grid in one round
#[derive(Debug, Clone)]
pub struct CandidateMap {
    sets: Array2<Option<CandidateSet>>,
}

impl CandidateMap {
    /// Candidate set at a position; `None` for resolved cells
    pub fn get(&self, position: [usize; 2]) -> Option<&CandidateSet> {
        self.sets.get(position).and_then(Option::as_ref)
    }

    /// Candidate count at a position; `None` for resolved cells
    pub fn count(&self, position: [usize; 2]) -> Option<usize> {
        self.get(position).map(CandidateSet::count)
    }

    /// Unresolved positions with their sets, in row-major order
    pub fn unresolved(&self) -> impl Iterator<Item = ([usize; 2], &CandidateSet)> {
        self.sets
            .indexed_iter()
            .filter_map(|((row, col), set)| Some(([row, col], set.as_ref()?)))
    }

    /// Smallest candidate count of at least one among unresolved cells
    pub fn min_nonzero_count(&self) -> Option<usize> {
        self.unresolved()
            .map(|(_, set)| set.count())
            .filter(|&count| count > 0)
            .min()
    }

    /// Unresolved cells with no candidate left
    pub fn contradictions(&self) -> Vec<[usize; 2]> {
        self.unresolved()
            .filter(|(_, set)| set.is_empty())
            .map(|(position, _)| position)
            .collect()
    }

    /// Whether any unresolved cell has become unsatisfiable
    pub fn has_contradiction(&self) -> bool {
        self.unresolved().any(|(_, set)| set.is_empty())
    }

    /// Candidate count per cell, 0 for resolved cells
    pub fn entropy(&self) -> Array2<usize> {
        self.sets
            .map(|set| set.as_ref().map_or(0, CandidateSet::count))
    }
}

/// Compute candidate sets for every cell against the current grid
pub fn compute_candidates(grid: &Grid, rules: &AdjacencyRules) -> CandidateMap {
    let width = grid.width();
    let sets = Array2::from_shape_fn((width, width), |(row, col)| {
        candidates_at(grid, rules, [row, col])
    });
    CandidateMap { sets }
}
