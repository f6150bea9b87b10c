//! Spatial data structures for tiles and grids
//!
//! This module contains:
//! - Tile patterns, edge compatibility and tileset validation
//! - Grid state for a single attempt

/// Grid state management for one attempt
pub mod grid;
/// Tile patterns and adjacency rules
pub mod tiles;

pub use grid::Grid;
