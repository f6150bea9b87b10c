//! Precomputed adjacency table for a tileset and edge rule

use crate::algorithm::bitset::CandidateSet;
use crate::spatial::tiles::{Direction, EdgeRule, Tileset};

/// For every direction and neighbor tile, the tiles allowed beside it
///
/// `allowed(d, n)` holds every tile `t` with `rule.compatible(t, n, d)`,
/// i.e. the tiles that may occupy a cell whose neighbor on side `d` is
/// resolved to `n`. Built once per generator; candidate computation is then
/// a chain of bitset intersections.
#[derive(Debug, Clone)]
pub struct AdjacencyRules {
    allowed: [Vec<CandidateSet>; 4],
    tile_count: usize,
}

impl AdjacencyRules {
    /// Evaluate the rule for every ordered tile pair in every direction
    pub fn build<E: EdgeRule + ?Sized>(tileset: &Tileset, rule: &E) -> Self {
        let tile_count = tileset.len();
        let allowed = Direction::ALL.map(|direction| {
            tileset
                .tiles()
                .iter()
                .map(|neighbor| {
                    let mut set = CandidateSet::new(tile_count);
                    for (index, tile) in tileset.tiles().iter().enumerate() {
                        if rule.compatible(tile, neighbor, direction) {
                            set.insert(index);
                        }
                    }
                    set
                })
                .collect::<Vec<_>>()
        });

        Self {
            allowed,
            tile_count,
        }
    }

    /// Number of tiles in the underlying tileset
    pub const fn tile_count(&self) -> usize {
        self.tile_count
    }

    /// Tiles that may have `neighbor` on their `direction` side
    pub fn allowed(&self, direction: Direction, neighbor: usize) -> Option<&CandidateSet> {
        self.allowed
            .get(direction.index())
            .and_then(|sets| sets.get(neighbor))
    }

    /// Whether `tile` may have `neighbor` on its `direction` side
    pub fn permits(&self, tile: usize, neighbor: usize, direction: Direction) -> bool {
        self.allowed(direction, neighbor)
            .is_some_and(|set| set.contains(tile))
    }
}
