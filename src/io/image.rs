//! PNG export of a tiling, one colour block per board cell

use crate::io::configuration::{EMPTY_CELL_COLOR, piece_color};
use crate::io::error::{CoverError, Result};
use crate::spatial::tiling::{EMPTY_CELL, Tiling};
use image::{ImageBuffer, Rgba, RgbaImage};
use std::path::Path;

/// Paint a tiling into an image, `cell_pixels` square pixels per board cell
///
/// Uncovered cells stay transparent.
///
/// # Errors
///
/// Returns an error if a piece has no colour in the palette
pub fn render_tiling(
    tiling: &Tiling,
    rows: usize,
    cols: usize,
    cell_pixels: u32,
) -> Result<RgbaImage> {
    let board = tiling.board(rows, cols);
    let width = cols as u32 * cell_pixels;
    let height = rows as u32 * cell_pixels;

    let mut img = ImageBuffer::from_pixel(width, height, Rgba(EMPTY_CELL_COLOR));

    for ((row, col), &name) in board.indexed_iter() {
        if name == EMPTY_CELL {
            continue;
        }
        let color = piece_color(name).ok_or(CoverError::UnknownPiece { name })?;

        let left = col as u32 * cell_pixels;
        let top = row as u32 * cell_pixels;
        for y in top..top + cell_pixels {
            for x in left..left + cell_pixels {
                img.put_pixel(x, y, Rgba(color));
            }
        }
    }

    Ok(img)
}

/// Export a tiling as a PNG image
///
/// # Errors
///
/// Returns an error if:
/// - A piece has no colour in the palette
/// - The parent directory cannot be created
/// - The image cannot be saved to the specified path
pub fn export_tiling_as_png(
    tiling: &Tiling,
    rows: usize,
    cols: usize,
    cell_pixels: u32,
    output_path: &Path,
) -> Result<()> {
    let img = render_tiling(tiling, rows, cols, cell_pixels)?;

    if let Some(parent) = output_path.parent() {
        std::fs::create_dir_all(parent).map_err(|e| CoverError::FileSystem {
            path: parent.to_path_buf(),
            operation: "create directory",
            source: e,
        })?;
    }

    img.save(output_path)
        .map_err(|e| CoverError::ImageExport {
            path: output_path.to_path_buf(),
            source: e,
        })?;

    Ok(())
}
