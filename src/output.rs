//! CLI output formatting.
//!
//! # Output Format
//!
//! Two lines per cropped file, the second being the crop bounds as computed
//! (fractional for centered portrait screenshots), then the output path:
//!
//! ```text
//! input/shot.jpg : 1920x1080 default
//! (29, 24, 1385, 1054)
//!     → output/shot.png
//! input/tablet.png : 1000x2000 vertically
//! (15, 731.75, 721, 1267.75)
//!     → output/tablet.png
//! ==> Done: 2 cropped
//! ```
//!
//! # Architecture
//!
//! `format_*` functions return `Vec<String>` and are pure; `print_*`
//! wrappers write to stdout.

use crate::batch::{BatchEvent, Manifest};

/// Format a single batch progress event as display lines.
pub fn format_batch_event(event: &BatchEvent) -> Vec<String> {
    match event {
        BatchEvent::FileClassified {
            path,
            width,
            height,
            class,
        } => vec![format!(
            "{} : {}x{} {}",
            path.display(),
            width,
            height,
            class
        )],
        BatchEvent::RectComputed { raw } => vec![raw.to_string()],
        BatchEvent::FileWritten { output } => {
            vec![format!("    \u{2192} {}", output.display())]
        }
        BatchEvent::FileFailed { path, message } => vec![
            format!("{} : skipped", path.display()),
            format!("    {}", message),
        ],
    }
}

/// Format the completion line for a finished run.
pub fn format_summary(manifest: &Manifest) -> Vec<String> {
    let cropped = manifest.files.len();
    match manifest.failures.len() {
        0 => vec![format!("==> Done: {} cropped", cropped)],
        failed => vec![format!("==> Done: {} cropped, {} failed", cropped, failed)],
    }
}

/// Print the completion line to stdout.
pub fn print_summary(manifest: &Manifest) {
    for line in format_summary(manifest) {
        println!("{}", line);
    }
}
