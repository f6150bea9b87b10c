/// Fixed-size bitset of candidate tile indices
pub mod bitset;
/// Per-cell candidate computation from resolved neighbors
pub mod candidates;
/// Round loop, convergence detection and full-grid restarts
pub mod executor;
/// Precomputed adjacency table for a tileset
pub mod rules;
/// Lowest-entropy collapse and random tie-breaking
pub mod selection;
