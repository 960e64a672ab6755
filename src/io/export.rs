//! JSON persistence of tiling collections

use crate::io::configuration::tilings_file_name;
use crate::io::error::{CoverError, Result};
use crate::spatial::tiling::Tiling;
use std::fs::File;
use std::io::{BufReader, BufWriter, Write};
use std::path::{Path, PathBuf};

/// Path of the tilings file of a `rows` x `cols` board inside `dir`
pub fn tilings_path(dir: &Path, rows: usize, cols: usize) -> PathBuf {
    dir.join(tilings_file_name(rows, cols))
}

/// Write tilings as a JSON array, creating parent directories as needed
///
/// # Errors
///
/// Returns an error if the directory or file cannot be created, or if
/// encoding fails
pub fn save_tilings(path: &Path, tilings: &[Tiling]) -> Result<()> {
    if let Some(parent) = path.parent() {
        std::fs::create_dir_all(parent).map_err(|e| CoverError::FileSystem {
            path: parent.to_path_buf(),
            operation: "create directory",
            source: e,
        })?;
    }

    let file = File::create(path).map_err(|e| CoverError::FileSystem {
        path: path.to_path_buf(),
        operation: "create file",
        source: e,
    })?;
    let mut writer = BufWriter::new(file);
    serde_json::to_writer(&mut writer, tilings).map_err(|e| CoverError::Serialization {
        path: path.to_path_buf(),
        source: e,
    })?;
    writer.flush().map_err(|e| CoverError::FileSystem {
        path: path.to_path_buf(),
        operation: "write",
        source: e,
    })?;

    log::debug!("saved {} tilings to {}", tilings.len(), path.display());
    Ok(())
}

/// Read a JSON array of tilings written by [`save_tilings`]
///
/// # Errors
///
/// Returns an error if the file cannot be opened or does not hold tilings
pub fn load_tilings(path: &Path) -> Result<Vec<Tiling>> {
    let file = File::open(path).map_err(|e| CoverError::FileSystem {
        path: path.to_path_buf(),
        operation: "open file",
        source: e,
    })?;
    serde_json::from_reader(BufReader::new(file)).map_err(|e| CoverError::Serialization {
        path: path.to_path_buf(),
        source: e,
    })
}
