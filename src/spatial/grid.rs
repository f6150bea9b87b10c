//! Square grid of resolved and unresolved cells
//!
//! A grid lives for exactly one attempt. Cells only ever move from
//! unresolved to resolved; a restart builds a new grid instead of clearing
//! this one.

use crate::spatial::tiles::{Direction, Tileset};
use ndarray::Array2;

/// State of one grid position
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Cell {
    /// No tile assigned yet
    #[default]
    Unresolved,
    /// Collapsed to the tileset entry with this index
    Resolved(usize),
}

impl Cell {
    /// Whether a tile has been assigned
    pub const fn is_resolved(self) -> bool {
        matches!(self, Self::Resolved(_))
    }

    /// Assigned tile index, if any
    pub const fn tile(self) -> Option<usize> {
        match self {
            Self::Resolved(tile) => Some(tile),
            Self::Unresolved => None,
        }
    }
}

/// WIDTH×WIDTH arrangement of cells, indexed `[row, col]`
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Grid {
    cells: Array2<Cell>,
}

impl Grid {
    /// Create a grid with every cell unresolved
    pub fn new(width: usize) -> Self {
        Self {
            cells: Array2::from_elem((width, width), Cell::Unresolved),
        }
    }

    /// Create a grid whose only resolved cell is `position`, holding `tile`
    pub fn seeded(width: usize, position: [usize; 2], tile: usize) -> Self {
        let mut grid = Self::new(width);
        grid.resolve(position, tile);
        grid
    }

    /// Edge length of the grid
    pub fn width(&self) -> usize {
        self.cells.nrows()
    }

    /// Total number of cells
    pub fn cell_count(&self) -> usize {
        self.cells.len()
    }

    /// Read-only view of all cells
    pub const fn cells(&self) -> &Array2<Cell> {
        &self.cells
    }

    /// Cell at the given position, `None` outside the grid
    pub fn cell(&self, position: [usize; 2]) -> Option<Cell> {
        self.cells.get(position).copied()
    }

    /// Tile index at the given position if it is resolved
    pub fn tile_at(&self, position: [usize; 2]) -> Option<usize> {
        self.cell(position).and_then(Cell::tile)
    }

    /// Whether the given position holds a resolved cell
    pub fn is_resolved(&self, position: [usize; 2]) -> bool {
        self.cell(position).is_some_and(Cell::is_resolved)
    }

    /// Resolve an unresolved cell to `tile`
    ///
    /// Returns false and leaves the grid untouched when the position is
    /// outside the grid or already resolved.
    pub fn resolve(&mut self, position: [usize; 2], tile: usize) -> bool {
        match self.cells.get_mut(position) {
            Some(cell) if !cell.is_resolved() => {
                *cell = Cell::Resolved(tile);
                true
            }
            _ => false,
        }
    }

    /// Existing orthogonal neighbors, paired with the side they lie on
    pub fn neighbors(&self, position: [usize; 2]) -> impl Iterator<Item = (Direction, [usize; 2])> {
        let width = self.width();
        Direction::ALL
            .into_iter()
            .filter_map(move |direction| Some((direction, direction.step(position, width)?)))
    }

    /// All positions in row-major order
    pub fn positions(&self) -> impl Iterator<Item = [usize; 2]> {
        let width = self.width();
        (0..width).flat_map(move |row| (0..width).map(move |col| [row, col]))
    }

    /// Number of resolved cells
    pub fn resolved_count(&self) -> usize {
        self.cells.iter().filter(|cell| cell.is_resolved()).count()
    }

    /// Whether every cell is resolved
    pub fn is_converged(&self) -> bool {
        self.cells.iter().all(|cell| cell.is_resolved())
    }

    /// Tile indices of a fully resolved grid
    pub fn tiles(&self) -> Option<Array2<usize>> {
        if !self.is_converged() {
            return None;
        }
        Some(self.cells.mapv(|cell| cell.tile().unwrap_or(0)))
    }

    /// Expand every cell into its tile pattern
    ///
    /// The result is `width * tile_size` on each side. Unresolved cells, and
    /// cells whose index is missing from the tileset, come out as `None`.
    pub fn compose(&self, tileset: &Tileset) -> Array2<Option<u8>> {
        let n = tileset.tile_size();
        let side = self.width() * n;
        Array2::from_shape_fn((side, side), |(row, col)| {
            let tile = self.tile_at([row / n, col / n])?;
            tileset.get(tile)?.value(row % n, col % n)
        })
    }
}
