//! Parameter types for image operations.
//!
//! These describe *what* to do, not *how*. [`operations`](super::operations)
//! decides the rectangle, the [`backend`](super::backend) does the pixel
//! work, so the backend can be mocked without touching the geometry.

use crate::geometry::Rect;
use std::path::PathBuf;

/// Full specification for a crop: source, PNG output path, pixel bounds.
#[derive(Debug, Clone, PartialEq)]
pub struct CropParams {
    pub source: PathBuf,
    pub output: PathBuf,
    pub rect: Rect,
}
