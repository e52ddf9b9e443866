//! Output file naming.
//!
//! Every cropped screenshot is written as PNG under the source file's stem,
//! whatever the source extension was:
//!
//! - `IMG_0001.jpg` → `IMG_0001.png`
//! - `result.2024-05-01.jpeg` → `result.2024-05-01.png` (only the last
//!   extension is replaced)
//! - `shot.PNG` → `shot.png`

use std::ffi::OsString;
use std::path::{Path, PathBuf};

/// Extension of every file this tool writes.
pub const OUTPUT_EXTENSION: &str = "png";

/// File name for the cropped copy of `source`, or `None` if `source` has no
/// file name (e.g. `/` or `..`).
pub fn output_file_name(source: &Path) -> Option<OsString> {
    let stem = source.file_stem()?;
    let mut name = stem.to_os_string();
    name.push(".");
    name.push(OUTPUT_EXTENSION);
    Some(name)
}

/// Full output path for `source` inside `output_dir`.
pub fn output_path(output_dir: &Path, source: &Path) -> Option<PathBuf> {
    output_file_name(source).map(|name| output_dir.join(name))
}
