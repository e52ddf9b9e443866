//! The batch converter: crop every screenshot in a directory.
//!
//! For each file found by [`scan`](crate::scan::scan), in order:
//!
//! 1. Read the dimensions and classify the aspect ratio
//! 2. Plan the crop rectangle ([`plan_crop`])
//! 3. Crop and write `<stem>.png` into the output directory
//!
//! Files are handled one at a time; each is fully written before the next
//! is opened. Progress is reported through an optional channel of
//! [`BatchEvent`]s so the caller decides how (and whether) to print.
//!
//! ## Failure Handling
//!
//! By default the first failure aborts the run; files already written stay
//! in the output directory. With [`BatchOptions::keep_going`] a file that
//! cannot be decoded, cropped or named is recorded in
//! [`Manifest::failures`] and the batch moves on. Failures outside a single
//! file (missing directories, listing errors, writes into the output
//! directory) always abort.
//!
//! ## Manifest
//!
//! [`run`] returns a [`Manifest`] describing what was written. It can be
//! saved as JSON with [`write_manifest`]:
//!
//! ```text
//! {
//!   "input_dir": "input",
//!   "output_dir": "output",
//!   "files": [
//!     {
//!       "source": "input/shot.jpg",
//!       "output": "output/shot.png",
//!       "width": 1920,
//!       "height": 1080,
//!       "class": "default",
//!       "rect": { "x0": 29, "y0": 24, "x1": 1385, "y1": 1054 }
//!     }
//!   ]
//! }
//! ```

use crate::geometry::{AspectClass, RawRect, Rect};
use crate::imaging::{
    BackendError, ImageBackend, RustBackend, apply_plan, get_dimensions, plan_crop,
};
use crate::naming;
use crate::scan::{self, ScanError};
use serde::Serialize;
use std::path::{Path, PathBuf};
use std::sync::mpsc::Sender;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum BatchError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
    #[error(transparent)]
    Scan(#[from] ScanError),
    #[error("Image processing failed: {0}")]
    Imaging(#[from] BackendError),
    #[error("Cannot derive an output file name for {0}")]
    Naming(PathBuf),
    #[error("Output directory not found: {0}")]
    MissingOutputDirectory(PathBuf),
}

impl BatchError {
    /// Whether the error concerns a single file rather than the whole run.
    ///
    /// Output write failures point at the output directory, so they are
    /// never per-file.
    fn is_per_file(&self) -> bool {
        match self {
            BatchError::Imaging(e) => !e.is_write(),
            BatchError::Naming(_) => true,
            _ => false,
        }
    }
}

/// Switches for the optional behaviors; the default matches a plain run.
#[derive(Debug, Clone, Copy, Default)]
pub struct BatchOptions {
    /// Create the output directory instead of failing when it is missing.
    pub create_output: bool,
    /// Record per-file failures and continue instead of aborting.
    pub keep_going: bool,
}

/// Progress event sent while the batch runs.
#[derive(Debug, Clone, PartialEq)]
pub enum BatchEvent {
    /// Dimensions were read and the aspect ratio classified.
    FileClassified {
        path: PathBuf,
        width: u32,
        height: u32,
        class: AspectClass,
    },
    /// The crop bounds were computed (before pixel snapping).
    RectComputed { raw: RawRect },
    /// The cropped PNG was written.
    FileWritten { output: PathBuf },
    /// The file was skipped under `keep_going`.
    FileFailed { path: PathBuf, message: String },
}

/// Record of one batch run.
#[derive(Debug, Serialize)]
pub struct Manifest {
    pub input_dir: String,
    pub output_dir: String,
    pub files: Vec<CroppedFile>,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub failures: Vec<FailedFile>,
}

#[derive(Debug, Serialize)]
pub struct CroppedFile {
    pub source: String,
    pub output: String,
    pub width: u32,
    pub height: u32,
    pub class: AspectClass,
    /// Pixel bounds actually cropped.
    pub rect: Rect,
}

#[derive(Debug, Serialize)]
pub struct FailedFile {
    pub source: String,
    pub error: String,
}

/// Crop every screenshot in `input_dir` into `output_dir` with the
/// production backend.
pub fn run(
    input_dir: &Path,
    output_dir: &Path,
    options: BatchOptions,
    progress: Option<Sender<BatchEvent>>,
) -> Result<Manifest, BatchError> {
    let backend = RustBackend::new();
    run_with_backend(&backend, input_dir, output_dir, options, progress)
}

/// Run the batch using a specific backend (allows testing with mock).
pub fn run_with_backend(
    backend: &impl ImageBackend,
    input_dir: &Path,
    output_dir: &Path,
    options: BatchOptions,
    progress: Option<Sender<BatchEvent>>,
) -> Result<Manifest, BatchError> {
    prepare_output_dir(output_dir, options.create_output)?;
    let sources = scan::scan(input_dir)?;

    let mut manifest = Manifest {
        input_dir: input_dir.display().to_string(),
        output_dir: output_dir.display().to_string(),
        files: Vec::new(),
        failures: Vec::new(),
    };

    for source in &sources {
        match crop_file(backend, source, output_dir, progress.as_ref()) {
            Ok(cropped) => manifest.files.push(cropped),
            Err(e) if options.keep_going && e.is_per_file() => {
                let message = e.to_string();
                emit(
                    progress.as_ref(),
                    BatchEvent::FileFailed {
                        path: source.clone(),
                        message: message.clone(),
                    },
                );
                manifest.failures.push(FailedFile {
                    source: source.display().to_string(),
                    error: message,
                });
            }
            Err(e) => return Err(e),
        }
    }

    Ok(manifest)
}

/// Save a run manifest as pretty-printed JSON.
pub fn write_manifest(manifest: &Manifest, path: &Path) -> Result<(), BatchError> {
    let json = serde_json::to_string_pretty(manifest)?;
    std::fs::write(path, json)?;
    Ok(())
}

fn prepare_output_dir(output_dir: &Path, create: bool) -> Result<(), BatchError> {
    if output_dir.is_dir() {
        return Ok(());
    }
    if create {
        std::fs::create_dir_all(output_dir)?;
        Ok(())
    } else {
        Err(BatchError::MissingOutputDirectory(output_dir.to_path_buf()))
    }
}

fn crop_file(
    backend: &impl ImageBackend,
    source: &Path,
    output_dir: &Path,
    progress: Option<&Sender<BatchEvent>>,
) -> Result<CroppedFile, BatchError> {
    let output = naming::output_path(output_dir, source)
        .ok_or_else(|| BatchError::Naming(source.to_path_buf()))?;

    let dimensions = get_dimensions(backend, source)?;
    let plan = plan_crop(dimensions);
    emit(
        progress,
        BatchEvent::FileClassified {
            path: source.to_path_buf(),
            width: dimensions.width,
            height: dimensions.height,
            class: plan.class,
        },
    );
    emit(progress, BatchEvent::RectComputed { raw: plan.raw });

    apply_plan(backend, source, &output, &plan)?;
    emit(
        progress,
        BatchEvent::FileWritten {
            output: output.clone(),
        },
    );

    Ok(CroppedFile {
        source: source.display().to_string(),
        output: output.display().to_string(),
        width: dimensions.width,
        height: dimensions.height,
        class: plan.class,
        rect: plan.rect,
    })
}

fn emit(progress: Option<&Sender<BatchEvent>>, event: BatchEvent) {
    if let Some(tx) = progress {
        // A closed receiver only means nobody is listening any more.
        tx.send(event).ok();
    }
}
