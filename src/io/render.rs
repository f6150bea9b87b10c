//! Console rendering of composed grids and entropy maps

use crate::io::configuration::{EMPTY_GLYPH, PRIMARY_GLYPH, SECONDARY_GLYPH, UNRESOLVED_GLYPH};
use crate::spatial::grid::Grid;
use crate::spatial::tiles::Tileset;
use ndarray::Array2;

/// Console glyph for a category value, `None` meaning not yet resolved
pub const fn glyph(value: Option<u8>) -> char {
    match value {
        None => UNRESOLVED_GLYPH,
        Some(0) => EMPTY_GLYPH,
        Some(1) => PRIMARY_GLYPH,
        Some(_) => SECONDARY_GLYPH,
    }
}

/// Draw a category matrix one text line per pixel row
pub fn render_pixels(pixels: &Array2<Option<u8>>) -> String {
    let mut out = String::with_capacity(pixels.len() * 4 + pixels.nrows());
    for row in pixels.rows() {
        out.extend(row.iter().map(|&value| glyph(value)));
        out.push('\n');
    }
    out
}

/// Draw a grid by expanding every cell into its tile pattern
///
/// Unresolved cells are drawn with the unresolved glyph, so partial grids
/// can be shown between rounds.
pub fn render_grid(grid: &Grid, tileset: &Tileset) -> String {
    render_pixels(&grid.compose(tileset))
}

/// Draw candidate counts per cell, right-aligned in equal columns
pub fn render_entropy(entropy: &Array2<usize>) -> String {
    let cell_width = entropy
        .iter()
        .max()
        .map_or(1, |max| max.to_string().len());

    let mut out = String::new();
    for row in entropy.rows() {
        let line = row
            .iter()
            .map(|count| format!("{count:>cell_width$}"))
            .collect::<Vec<_>>()
            .join(" ");
        out.push_str(&line);
        out.push('\n');
    }
    out
}
