//! Tile patterns, edge compatibility and tileset validation
//!
//! A tile is a fixed square matrix of small category values. Two tiles may
//! sit side by side when the border cells they would share are equal. Tiles
//! are never rotated or reflected; every tileset entry is one orientation.

use crate::io::error::{Result, invalid_tileset};
use ndarray::{Array2, ArrayView1};
use std::fmt;

/// Side of a cell, and the direction towards the neighbor on that side
///
/// Rows grow downward and columns grow to the right.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Direction {
    /// Towards row - 1
    Up,
    /// Towards row + 1
    Down,
    /// Towards column - 1
    Left,
    /// Towards column + 1
    Right,
}

impl Direction {
    /// All four directions in table order
    pub const ALL: [Self; 4] = [Self::Up, Self::Down, Self::Left, Self::Right];

    /// The side facing back from the neighbor
    pub const fn opposite(self) -> Self {
        match self {
            Self::Up => Self::Down,
            Self::Down => Self::Up,
            Self::Left => Self::Right,
            Self::Right => Self::Left,
        }
    }

    /// Position in [`Direction::ALL`]
    pub const fn index(self) -> usize {
        match self {
            Self::Up => 0,
            Self::Down => 1,
            Self::Left => 2,
            Self::Right => 3,
        }
    }

    /// Step the given position one cell this way, if it stays inside `width`
    pub const fn step(self, position: [usize; 2], width: usize) -> Option<[usize; 2]> {
        let [row, col] = position;
        match self {
            Self::Up if row > 0 => Some([row - 1, col]),
            Self::Down if row + 1 < width => Some([row + 1, col]),
            Self::Left if col > 0 => Some([row, col - 1]),
            Self::Right if col + 1 < width => Some([row, col + 1]),
            _ => None,
        }
    }
}

impl fmt::Display for Direction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Self::Up => "up",
            Self::Down => "down",
            Self::Left => "left",
            Self::Right => "right",
        };
        f.write_str(name)
    }
}

/// Immutable square pattern of category values
///
/// Equality is by value, so two tiles with identical matrices are
/// interchangeable for adjacency purposes.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Tile {
    cells: Array2<u8>,
}

impl Tile {
    /// Build a tile from a matrix of category values
    ///
    /// # Errors
    ///
    /// Returns an error if the matrix is empty or not square
    pub fn new(cells: Array2<u8>) -> Result<Self> {
        let (rows, cols) = cells.dim();
        if rows == 0 || cols == 0 {
            return Err(invalid_tileset(&"tile has no cells"));
        }
        if rows != cols {
            return Err(invalid_tileset(&format!(
                "tile must be square, got {rows}x{cols}"
            )));
        }
        Ok(Self { cells })
    }

    /// Build a tile from fixed-size row literals
    ///
    /// # Errors
    ///
    /// Returns an error if `N` is zero
    pub fn from_rows<const N: usize>(rows: [[u8; N]; N]) -> Result<Self> {
        Self::new(Array2::from(rows.to_vec()))
    }

    /// Edge length of the tile
    pub fn size(&self) -> usize {
        self.cells.nrows()
    }

    /// Category value at the given cell
    pub fn value(&self, row: usize, col: usize) -> Option<u8> {
        self.cells.get([row, col]).copied()
    }

    /// Read-only view of the whole pattern
    pub const fn cells(&self) -> &Array2<u8> {
        &self.cells
    }

    /// Border cells on the given side, ordered left-to-right or top-to-bottom
    pub fn edge(&self, side: Direction) -> ArrayView1<'_, u8> {
        let last = self.size() - 1;
        match side {
            Direction::Up => self.cells.row(0),
            Direction::Down => self.cells.row(last),
            Direction::Left => self.cells.column(0),
            Direction::Right => self.cells.column(last),
        }
    }
}

/// Adjacency relation between two tiles sharing an edge
///
/// Implementations must be symmetric: `compatible(a, b, Right)` has to
/// equal `compatible(b, a, Left)`, and likewise for `Up`/`Down`. The
/// generator relies on this but never checks it; see
/// [`Tileset::asymmetric_pairs`].
pub trait EdgeRule {
    /// Whether `neighbor` may sit on the `direction` side of `tile`
    fn compatible(&self, tile: &Tile, neighbor: &Tile, direction: Direction) -> bool;
}

/// Exact equality of the shared border cells
#[derive(Debug, Clone, Copy, Default)]
pub struct EdgeMatch;

impl EdgeRule for EdgeMatch {
    fn compatible(&self, tile: &Tile, neighbor: &Tile, direction: Direction) -> bool {
        tile.edge(direction) == neighbor.edge(direction.opposite())
    }
}

/// A pair of tiles on which an [`EdgeRule`] disagrees with itself
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct AsymmetricPair {
    /// Index of the first tile
    pub tile: usize,
    /// Index of the tile placed on `direction` side of the first
    pub neighbor: usize,
    /// Side that was checked
    pub direction: Direction,
}

/// Fixed, ordered collection of equally sized tiles
///
/// Index 0 is conventionally the empty tile. One entry is designated as the
/// seed tile that starts every attempt.
#[derive(Debug, Clone)]
pub struct Tileset {
    tiles: Vec<Tile>,
    seed_index: usize,
}

impl Tileset {
    /// Validate and build a tileset
    ///
    /// # Errors
    ///
    /// Returns an error if:
    /// - The tile list is empty
    /// - Tiles have different sizes
    /// - `seed_index` is outside the tile list
    pub fn new(tiles: Vec<Tile>, seed_index: usize) -> Result<Self> {
        let Some(first) = tiles.first() else {
            return Err(invalid_tileset(&"tileset is empty"));
        };
        let size = first.size();

        if let Some((index, tile)) = tiles
            .iter()
            .enumerate()
            .find(|(_, tile)| tile.size() != size)
        {
            return Err(invalid_tileset(&format!(
                "tile {index} is {0}x{0}, expected {size}x{size}",
                tile.size()
            )));
        }

        if seed_index >= tiles.len() {
            return Err(invalid_tileset(&format!(
                "seed tile index {seed_index} is out of range for {} tiles",
                tiles.len()
            )));
        }

        Ok(Self { tiles, seed_index })
    }

    /// Number of tiles
    pub const fn len(&self) -> usize {
        self.tiles.len()
    }

    /// Always false for a validated tileset
    pub const fn is_empty(&self) -> bool {
        self.tiles.is_empty()
    }

    /// Tile at the given index
    pub fn get(&self, index: usize) -> Option<&Tile> {
        self.tiles.get(index)
    }

    /// All tiles in index order
    pub fn tiles(&self) -> &[Tile] {
        &self.tiles
    }

    /// Index of the tile every attempt is seeded with
    pub const fn seed_index(&self) -> usize {
        self.seed_index
    }

    /// Edge length shared by every tile
    pub fn tile_size(&self) -> usize {
        self.tiles.first().map_or(0, Tile::size)
    }

    /// Largest category value used by any tile
    pub fn max_value(&self) -> u8 {
        self.tiles
            .iter()
            .filter_map(|tile| tile.cells().iter().max().copied())
            .max()
            .unwrap_or(0)
    }

    /// Find every pair the rule treats differently from each side
    ///
    /// Checks `Right` against `Left` and `Down` against `Up`; an empty
    /// result means the rule is direction-consistent on this tileset.
    pub fn asymmetric_pairs<E: EdgeRule + ?Sized>(&self, rule: &E) -> Vec<AsymmetricPair> {
        let mut pairs = Vec::new();
        for (i, a) in self.tiles.iter().enumerate() {
            for (j, b) in self.tiles.iter().enumerate() {
                for direction in [Direction::Right, Direction::Down] {
                    if rule.compatible(a, b, direction)
                        != rule.compatible(b, a, direction.opposite())
                    {
                        pairs.push(AsymmetricPair {
                            tile: i,
                            neighbor: j,
                            direction,
                        });
                    }
                }
            }
        }
        pairs
    }
}
