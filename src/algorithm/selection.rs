use crate::{
    algorithm::{
        bitset::CandidateSet,
        candidates::{CandidateMap, candidates_at},
        rules::AdjacencyRules,
    },
    spatial::grid::Grid,
};
use rand::{Rng, SeedableRng, rngs::StdRng};

/// Injectable random source for seed placement and tie-breaking
///
/// Wraps any [`Rng`]; tests pass a seeded generator to make every choice
/// reproducible.
pub struct RandomSelector<R: Rng = StdRng> {
    rng: R,
}

impl RandomSelector<StdRng> {
    /// Create a deterministic random selector
    pub fn from_seed(seed: u64) -> Self {
        Self {
            rng: StdRng::seed_from_u64(seed),
        }
    }

    /// Create a selector seeded from the operating system
    pub fn from_entropy() -> Self {
        Self {
            rng: StdRng::from_os_rng(),
        }
    }
}

impl<R: Rng> RandomSelector<R> {
    /// Wrap an existing random source
    pub const fn new(rng: R) -> Self {
        Self { rng }
    }

    /// Uniform index below `len`; 0 for empty ranges
    pub fn index(&mut self, len: usize) -> usize {
        if len == 0 {
            return 0;
        }
        self.rng.random_range(0..len)
    }

    /// Uniform position in a `width`×`width` grid
    pub fn position(&mut self, width: usize) -> [usize; 2] {
        [self.index(width), self.index(width)]
    }

    /// Uniform member of a candidate set
    ///
    /// A singleton resolves without drawing from the random source.
    pub fn pick(&mut self, candidates: &CandidateSet) -> Option<usize> {
        match candidates.count() {
            0 => None,
            1 => candidates.nth(0),
            count => {
                let n = self.index(count);
                candidates.nth(n)
            }
        }
    }
}

/// Which of the cells tied at the minimum count get resolved each round
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SelectionPolicy {
    /// Resolve every cell tied at the minimum in one pass
    #[default]
    AllTied,
    /// Resolve one uniformly chosen cell among those tied at the minimum
    SingleCell,
}

/// A single tile assignment made during collapse
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Placement {
    /// Grid position `[row, col]`
    pub position: [usize; 2],
    /// Assigned tileset index
    pub tile: usize,
}

/// Outcome of one collapse pass
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Collapse {
    /// Minimum nonzero candidate count this round
    pub k_min: usize,
    /// Cells resolved this round, in row-major order
    pub placements: Vec<Placement>,
    /// Tied cells left unresolved because a neighbor placed earlier in the
    /// same pass ruled out all of their candidates
    pub deferred: usize,
}

/// Resolve the lowest-entropy cells of the grid
///
/// Finds `k_min`, the smallest candidate count of at least one among
/// unresolved cells; cells with zero candidates are never chosen. Cells at
/// `k_min` are visited in row-major order. Each one picks uniformly from its
/// round set narrowed by the neighbors placed earlier in the same pass, so
/// tied cells that touch each other always agree on their shared edge. A
/// cell whose narrowed set is empty stays unresolved and is counted in
/// [`Collapse::deferred`]; the next round sees it as a contradiction.
///
/// Returns `None` when no cell can be resolved, leaving the grid untouched.
pub fn collapse_lowest_entropy<R: Rng>(
    grid: &mut Grid,
    candidates: &CandidateMap,
    rules: &AdjacencyRules,
    policy: SelectionPolicy,
    selector: &mut RandomSelector<R>,
) -> Option<Collapse> {
    let k_min = candidates.min_nonzero_count()?;

    let mut tied: Vec<([usize; 2], &CandidateSet)> = candidates
        .unresolved()
        .filter(|(_, set)| set.count() == k_min)
        .collect();

    if policy == SelectionPolicy::SingleCell && tied.len() > 1 {
        let chosen = selector.index(tied.len());
        tied = tied.get(chosen).copied().into_iter().collect();
    }

    let mut placements = Vec::with_capacity(tied.len());
    let mut deferred = 0;
    for (position, set) in tied {
        // The live set only differs from the round set where a tied
        // neighbor was resolved earlier in this loop
        let narrowed = candidates_at(grid, rules, position).map_or_else(
            || CandidateSet::new(set.capacity()),
            |live| live.intersection(set),
        );

        let Some(tile) = selector.pick(&narrowed) else {
            deferred += 1;
            continue;
        };
        if grid.resolve(position, tile) {
            placements.push(Placement { position, tile });
        }
    }

    Some(Collapse {
        k_min,
        placements,
        deferred,
    })
}
