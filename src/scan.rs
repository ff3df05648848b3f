//! Artwork discovery.
//!
//! Stage 1 of the gallery pipeline. Reads every YAML file in the data
//! directory into an [`Artwork`] record.
//!
//! ## Directory Structure
//!
//! ```text
//! data/                    # Data directory
//! ├── config.toml          # Site configuration (optional, not an artwork)
//! ├── 010-sunset.yml       # One artwork per file
//! ├── 020-harbour.yaml     # Both extensions are recognized
//! ├── notes.txt            # Ignored
//! └── .draft.yml           # Hidden files are ignored
//! ```
//!
//! Files are read in byte-wise file name order, so a numeric prefix controls
//! the position of an artwork in the grid.
//!
//! ## Validation
//!
//! Loading is all-or-nothing: a single malformed file fails the whole scan.

use crate::types::{Artwork, ArtworkFile};
use std::fs;
use std::path::{Path, PathBuf};
use thiserror::Error;

#[derive(Error, Debug)]
pub enum ScanError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
    #[error("Data directory not found: {0}")]
    NotFound(PathBuf),
    #[error("Cannot read artwork file {path}: {source}")]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("Malformed artwork file {path}: {source}")]
    Malformed {
        path: PathBuf,
        #[source]
        source: serde_yaml::Error,
    },
}

const DATA_EXTENSIONS: &[&str] = &["yml", "yaml"];

/// Load every artwork in `dir`, in file name order.
pub fn scan(dir: &Path) -> Result<Vec<Artwork>, ScanError> {
    if !dir.is_dir() {
        return Err(ScanError::NotFound(dir.to_path_buf()));
    }

    collect_data_files(dir)?
        .iter()
        .map(|path| load_artwork(path))
        .collect()
}

fn collect_data_files(dir: &Path) -> Result<Vec<PathBuf>, ScanError> {
    let mut files = Vec::new();
    for entry in fs::read_dir(dir)? {
        let path = entry?.path();
        if is_data_file(&path) {
            files.push(path);
        }
    }
    files.sort();
    Ok(files)
}

fn is_data_file(path: &Path) -> bool {
    if !path.is_file() {
        return false;
    }
    let hidden = path
        .file_name()
        .map(|n| n.to_string_lossy().starts_with('.'))
        .unwrap_or(true);
    if hidden {
        return false;
    }
    path.extension()
        .map(|e| {
            DATA_EXTENSIONS
                .iter()
                .any(|ext| e.eq_ignore_ascii_case(ext))
        })
        .unwrap_or(false)
}

/// Parse a single artwork file.
pub fn load_artwork(path: &Path) -> Result<Artwork, ScanError> {
    let content = fs::read_to_string(path).map_err(|source| ScanError::Read {
        path: path.to_path_buf(),
        source,
    })?;
    let file: ArtworkFile =
        serde_yaml::from_str(&content).map_err(|source| ScanError::Malformed {
            path: path.to_path_buf(),
            source,
        })?;
    let source = path
        .file_name()
        .map(|n| n.to_string_lossy().into_owned())
        .unwrap_or_default();
    Ok(file.into_artwork(source))
}
