//! PNG export of composed tile grids

use crate::algorithm::executor::Solution;
use crate::io::configuration::UNRESOLVED_COLOR;
use crate::io::error::{AlgorithmError, Result, encode_failure, io_failure};
use crate::spatial::tiles::Tileset;
use image::{Rgba, RgbaImage};
use ndarray::Array2;
use std::path::Path;

/// Palette color for a category value; unresolved pixels get a neutral tone
///
/// # Errors
///
/// Returns an error if the value has no palette entry
pub fn color_for(value: Option<u8>, palette: &[[u8; 4]]) -> Result<Rgba<u8>> {
    let Some(value) = value else {
        return Ok(Rgba(UNRESOLVED_COLOR));
    };
    palette
        .get(usize::from(value))
        .copied()
        .map(Rgba)
        .ok_or(AlgorithmError::MissingColor {
            value,
            palette_len: palette.len(),
        })
}

/// Paint a category matrix, blowing each value up to `scale`×`scale` pixels
///
/// # Errors
///
/// Returns an error if a value has no palette entry
pub fn render_image(
    pixels: &Array2<Option<u8>>,
    palette: &[[u8; 4]],
    scale: u32,
) -> Result<RgbaImage> {
    let scale = scale.max(1);
    let (rows, cols) = pixels.dim();
    let mut img = RgbaImage::new(cols as u32 * scale, rows as u32 * scale);

    for ((row, col), &value) in pixels.indexed_iter() {
        let color = color_for(value, palette)?;
        for dy in 0..scale {
            for dx in 0..scale {
                img.put_pixel(col as u32 * scale + dx, row as u32 * scale + dy, color);
            }
        }
    }

    Ok(img)
}

/// Export a resolved grid as a PNG image
///
/// # Errors
///
/// Returns an error if:
/// - A category value is out of bounds for the palette
/// - The parent directory cannot be created
/// - The image cannot be saved to the specified path
pub fn export_solution_as_png(
    solution: &Solution,
    tileset: &Tileset,
    palette: &[[u8; 4]],
    scale: u32,
    output_path: &Path,
) -> Result<()> {
    let img = render_image(&solution.grid.compose(tileset), palette, scale)?;

    if let Some(parent) = output_path.parent() {
        std::fs::create_dir_all(parent).map_err(io_failure(parent, "create directory"))?;
    }

    img.save(output_path).map_err(encode_failure(output_path))?;

    Ok(())
}
