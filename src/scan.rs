//! Input enumeration.
//!
//! Collects the screenshots to crop from the input directory:
//!
//! ```text
//! input/
//! ├── IMG_0001.jpg      # picked up
//! ├── result.png        # picked up
//! ├── notes.txt         # picked up (fails to decode later)
//! ├── README            # skipped: no extension
//! ├── .DS_Store         # skipped: hidden
//! └── old/              # skipped: directories are not descended into
//!     └── IMG_0000.jpg
//! ```
//!
//! Any file with an extension is a candidate; whether it really is an image
//! is left to the decoder. Entries come back sorted by file name so repeated
//! runs process files in the same order on every platform.

use std::path::{Path, PathBuf};
use thiserror::Error;
use walkdir::WalkDir;

#[derive(Error, Debug)]
pub enum ScanError {
    #[error("Failed to list input directory: {0}")]
    Walk(#[from] walkdir::Error),
    #[error("Input directory not found: {0}")]
    MissingDirectory(PathBuf),
}

/// List candidate screenshots directly inside `input_dir`.
pub fn scan(input_dir: &Path) -> Result<Vec<PathBuf>, ScanError> {
    if !input_dir.is_dir() {
        return Err(ScanError::MissingDirectory(input_dir.to_path_buf()));
    }

    let mut files = Vec::new();
    for entry in WalkDir::new(input_dir)
        .min_depth(1)
        .max_depth(1)
        .follow_links(true)
        .sort_by_file_name()
    {
        let entry = entry?;
        if entry.file_type().is_file() && is_candidate(entry.path()) {
            files.push(entry.into_path());
        }
    }
    Ok(files)
}

fn is_candidate(path: &Path) -> bool {
    let Some(name) = path.file_name() else {
        return false;
    };
    !name.to_string_lossy().starts_with('.') && path.extension().is_some()
}
