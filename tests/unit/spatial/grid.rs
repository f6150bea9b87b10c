//! Tests for grid cell state, neighbors and tile composition

#[cfg(test)]
mod tests {
    use tilecollapse::io::presets::Preset;
    use tilecollapse::spatial::grid::{Cell, Grid};
    use tilecollapse::spatial::tiles::Direction;

    // Tests that a new grid has no resolved cell
    // Verified by seeding the top-left cell by default
    #[test]
    fn test_new_grid_is_unresolved() {
        let grid = Grid::new(4);
        assert_eq!(grid.width(), 4);
        assert_eq!(grid.cell_count(), 16);
        assert_eq!(grid.resolved_count(), 0);
        assert!(!grid.is_converged());
        assert_eq!(grid.cell([3, 3]), Some(Cell::Unresolved));
        assert_eq!(grid.cell([4, 0]), None);
    }

    // Tests that a seeded grid resolves exactly the seed cell
    // Verified by swapping row and column of the seed
    #[test]
    fn test_seeded_grid() {
        let grid = Grid::seeded(5, [1, 3], 7);
        assert_eq!(grid.resolved_count(), 1);
        assert_eq!(grid.tile_at([1, 3]), Some(7));
        assert!(grid.is_resolved([1, 3]));
        assert!(!grid.is_resolved([3, 1]));
    }

    // Tests that a resolved cell keeps its first tile
    // Verified by letting resolve overwrite resolved cells
    #[test]
    fn test_resolve_is_one_way() {
        let mut grid = Grid::new(2);
        assert!(grid.resolve([0, 1], 3));
        assert!(!grid.resolve([0, 1], 4));
        assert_eq!(grid.tile_at([0, 1]), Some(3));
        assert!(!grid.resolve([2, 0], 1));
    }

    // Tests that neighbors stop at the grid boundary
    // Verified by wrapping neighbors around the edges
    #[test]
    fn test_neighbors_of_corner_and_center() {
        let grid = Grid::new(3);
        let corner: Vec<_> = grid.neighbors([0, 0]).collect();
        assert_eq!(
            corner,
            vec![(Direction::Down, [1, 0]), (Direction::Right, [0, 1])]
        );
        assert_eq!(grid.neighbors([1, 1]).count(), 4);
    }

    // Tests that positions run along rows first
    // Verified by iterating columns first
    #[test]
    fn test_positions_are_row_major() {
        let grid = Grid::new(2);
        let positions: Vec<_> = grid.positions().collect();
        assert_eq!(positions, vec![[0, 0], [0, 1], [1, 0], [1, 1]]);
    }

    // Tests that the tile array needs every cell resolved
    // Verified by filling unresolved cells with tile 0
    #[test]
    fn test_tiles_only_when_converged() {
        let mut grid = Grid::new(2);
        assert!(grid.tiles().is_none());
        for (tile, position) in grid.positions().collect::<Vec<_>>().into_iter().enumerate() {
            grid.resolve(position, tile);
        }
        assert!(grid.is_converged());
        let tiles = grid.tiles().expect("grid is converged");
        assert_eq!(tiles[[1, 0]], 2);
    }

    // Tests expansion of each cell into its 3x3 pattern
    // Verified by placing patterns transposed
    #[test]
    fn test_compose_expands_patterns() {
        let tileset = Preset::Paths.tileset().expect("preset is valid");
        let grid = Grid::seeded(2, [0, 1], 1);
        let pixels = grid.compose(&tileset);

        assert_eq!(pixels.dim(), (6, 6));
        // Center and arms of the full piece in the top-right cell
        assert_eq!(pixels[[1, 4]], Some(1));
        assert_eq!(pixels[[0, 4]], Some(1));
        assert_eq!(pixels[[0, 3]], Some(0));
        // Unresolved cells
        assert_eq!(pixels[[0, 0]], None);
        assert_eq!(pixels[[5, 5]], None);
    }

    // Tests the cell state helpers
    // Verified by defaulting cells to a resolved tile
    #[test]
    fn test_cell_accessors() {
        assert!(Cell::Resolved(2).is_resolved());
        assert_eq!(Cell::Resolved(2).tile(), Some(2));
        assert_eq!(Cell::Unresolved.tile(), None);
        assert_eq!(Cell::default(), Cell::Unresolved);
    }
}
