//! Edge-matched tile grid generation by lowest-entropy collapse
//!
//! Every round recomputes, for each unresolved cell, the tiles compatible
//! with its resolved neighbors, then resolves all cells tied at the smallest
//! nonzero candidate count. An attempt that stalls is thrown away and the
//! grid is reseeded from scratch; there is no backtracking.

#![forbid(unsafe_code)]

/// Candidate computation, collapse selection and the round/restart loop
pub mod algorithm;
/// Input/output operations, configuration and error handling
pub mod io;
/// Tile, tileset and grid data structures
pub mod spatial;

pub use io::error::{AlgorithmError, Result};
