//! Input/output surfaces around the generator core

/// Command-line interface and run orchestration
pub mod cli;
/// Constants and runtime defaults
pub mod configuration;
/// Error types
pub mod error;
/// PNG export
pub mod image;
/// Tracing subscriber setup
pub mod logging;
/// Built-in tilesets
pub mod presets;
/// Terminal progress display
pub mod progress;
/// Console rendering
pub mod render;
/// Round capture and GIF export
pub mod visualization;
