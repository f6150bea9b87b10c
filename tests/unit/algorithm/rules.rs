//! Tests for the precomputed adjacency table

#[cfg(test)]
mod tests {
    use tilecollapse::algorithm::bitset::CandidateSet;
    use tilecollapse::algorithm::rules::AdjacencyRules;
    use tilecollapse::io::presets::Preset;
    use tilecollapse::spatial::tiles::{Direction, EdgeMatch, EdgeRule, Tile};

    const EMPTY: usize = 0;
    const FULL: usize = 1;
    const RIGHT: usize = 2;
    const LEFT: usize = 3;

    fn path_rules() -> AdjacencyRules {
        let tileset = Preset::Paths.tileset().expect("preset is valid");
        AdjacencyRules::build(&tileset, &EdgeMatch)
    }

    // Tests that tiles right of the "full" piece need a path on their left edge
    // Verified by looking up the right side instead of the left
    #[test]
    fn test_allowed_beside_full_tile() {
        let rules = path_rules();
        let allowed = rules
            .allowed(Direction::Left, FULL)
            .expect("full tile is known");
        assert_eq!(allowed.to_vec(), vec![1, 3, 6, 8]);
    }

    // Tests that each side of the "full" piece admits the four matching tiles
    // Verified by dropping the vertical directions from the table
    #[test]
    fn test_every_side_of_full_tile_admits_four() {
        let rules = path_rules();
        for direction in Direction::ALL {
            let count = rules.allowed(direction, FULL).map(CandidateSet::count);
            assert_eq!(count, Some(4), "side {direction}");
        }
    }

    // Tests that six tiles have a blank bottom edge
    // Verified by treating blank edges as incompatible
    #[test]
    fn test_allowed_beside_empty_tile() {
        let rules = path_rules();
        let count = rules.allowed(Direction::Up, 0).map(CandidateSet::count);
        assert_eq!(count, Some(6));
    }

    // Tests that a tile's edge is compared with the facing edge of its neighbor
    // Verified by comparing an edge with the same side of the neighbor
    #[test]
    fn test_permits_uses_opposite_edges() {
        let rules = path_rules();
        // "right" piece has its arm on the right edge, "left" piece on the left edge
        assert!(rules.permits(RIGHT, LEFT, Direction::Right));
        assert!(rules.permits(LEFT, RIGHT, Direction::Left));
        // The arm of "right" meets the blank left edge of "empty"
        assert!(!rules.permits(RIGHT, EMPTY, Direction::Right));
        assert!(!rules.permits(EMPTY, RIGHT, Direction::Left));
    }

    // Tests that two blank edges match each other
    // Verified by requiring a path on both sides of every pair
    #[test]
    fn test_blank_edges_are_compatible() {
        let rules = path_rules();
        // Back to back, "left" and "right" touch along two empty edges
        assert!(rules.permits(LEFT, RIGHT, Direction::Right));
        assert!(rules.permits(RIGHT, LEFT, Direction::Left));
        assert!(rules.permits(EMPTY, EMPTY, Direction::Down));
    }

    // Tests that the table agrees with the edge rule for all pairs and directions
    // Verified by building the table with a transposed index
    #[test]
    fn test_table_matches_rule_for_every_pair() {
        let tileset = Preset::TwoTone.tileset().expect("preset is valid");
        let rules = AdjacencyRules::build(&tileset, &EdgeMatch);
        assert_eq!(rules.tile_count(), tileset.len());

        for (t, tile) in tileset.tiles().iter().enumerate() {
            for (n, neighbor) in tileset.tiles().iter().enumerate() {
                for direction in Direction::ALL {
                    assert_eq!(
                        rules.permits(t, n, direction),
                        EdgeMatch.compatible(tile, neighbor, direction)
                    );
                }
            }
        }
    }

    // Tests that lookups past the tileset find nothing
    // Verified by wrapping neighbor indices around the tileset
    #[test]
    fn test_unknown_neighbor_has_no_entry() {
        let rules = path_rules();
        assert!(rules.allowed(Direction::Down, 10).is_none());
        assert!(!rules.permits(0, 10, Direction::Down));
    }

    struct Never;

    impl EdgeRule for Never {
        fn compatible(&self, _tile: &Tile, _neighbor: &Tile, _direction: Direction) -> bool {
            false
        }
    }

    // Tests that a custom edge rule replaces exact matching
    // Verified by always building with exact edge matching
    #[test]
    fn test_custom_rule() {
        let tileset = Preset::Paths.tileset().expect("preset is valid");
        let rules = AdjacencyRules::build(&tileset, &Never);
        for direction in Direction::ALL {
            assert!(rules.allowed(direction, 0).is_some_and(CandidateSet::is_empty));
        }
    }
}
