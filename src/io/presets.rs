//! Built-in tilesets of 3×3 path pieces

use crate::io::configuration::{SEED_TILE_INDEX, TILE_SIZE};
use crate::io::error::Result;
use crate::spatial::tiles::{Tile, Tileset};
use clap::ValueEnum;

/// Row-major category values of one built-in tile
pub type Pattern = [[u8; TILE_SIZE]; TILE_SIZE];

/// Path pieces for category value `v`: full, arms and corners
const fn path_pieces(v: u8) -> [(&'static str, Pattern); 9] {
    [
        ("full", [[0, v, 0], [v, v, v], [0, v, 0]]),
        ("right", [[0, 0, 0], [0, v, v], [0, 0, 0]]),
        ("left", [[0, 0, 0], [v, v, 0], [0, 0, 0]]),
        ("up", [[0, v, 0], [0, v, 0], [0, 0, 0]]),
        ("down", [[0, 0, 0], [0, v, 0], [0, v, 0]]),
        ("up_left", [[0, v, 0], [v, v, 0], [0, 0, 0]]),
        ("up_right", [[0, v, 0], [0, v, v], [0, 0, 0]]),
        ("down_left", [[0, 0, 0], [v, v, 0], [0, v, 0]]),
        ("down_right", [[0, 0, 0], [0, v, v], [0, v, 0]]),
    ]
}

const EMPTY: (&str, Pattern) = ("empty", [[0; TILE_SIZE]; TILE_SIZE]);

/// Tilesets shipped with the binary
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, ValueEnum)]
pub enum Preset {
    /// Empty tile plus one style of path pieces (10 tiles)
    #[default]
    Paths,
    /// Empty tile plus two independent path styles (19 tiles)
    TwoTone,
}

impl Preset {
    /// Names and patterns in tileset order
    pub fn patterns(self) -> Vec<(&'static str, Pattern)> {
        let mut patterns = vec![EMPTY];
        patterns.extend(path_pieces(1));
        if self == Self::TwoTone {
            patterns.extend(path_pieces(2));
        }
        patterns
    }

    /// Tile names in tileset order
    pub fn names(self) -> Vec<&'static str> {
        self.patterns().into_iter().map(|(name, _)| name).collect()
    }

    /// Build the validated tileset; the seed is the first "full" tile
    ///
    /// # Errors
    ///
    /// Returns an error if tileset validation fails
    pub fn tileset(self) -> Result<Tileset> {
        let tiles = self
            .patterns()
            .into_iter()
            .map(|(_, pattern)| Tile::from_rows(pattern))
            .collect::<Result<Vec<_>>>()?;
        Tileset::new(tiles, SEED_TILE_INDEX)
    }
}
