//! High-level image operations.
//!
//! These functions combine the pure geometry with backend execution: they
//! read dimensions, decide the crop, and hand the rectangle to the backend.

use super::backend::{BackendError, Dimensions, ImageBackend};
use super::params::CropParams;
use crate::geometry::{self, AspectClass, RawRect, Rect};
use std::path::Path;

/// Result type for image operations.
pub type Result<T> = std::result::Result<T, BackendError>;

/// Get image dimensions using the backend.
pub fn get_dimensions(backend: &impl ImageBackend, path: &Path) -> Result<Dimensions> {
    backend.identify(path)
}

/// Everything decided about one screenshot before any pixels move.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CropPlan {
    pub dimensions: Dimensions,
    pub class: AspectClass,
    /// Bounds as computed, possibly fractional after vertical centering.
    pub raw: RawRect,
    /// Bounds snapped to the pixel grid; what actually gets cropped.
    pub rect: Rect,
}

/// Plan the crop for a screenshot of the given dimensions.
pub fn plan_crop(dimensions: Dimensions) -> CropPlan {
    let Dimensions { width, height } = dimensions;
    let class = geometry::classify(width, height);
    let raw = geometry::crop_rect(width, height, class);
    CropPlan {
        dimensions,
        class,
        raw,
        rect: raw.to_pixels(width, height),
    }
}

/// Execute a plan: crop `source` and write the PNG to `output`.
pub fn apply_plan(
    backend: &impl ImageBackend,
    source: &Path,
    output: &Path,
    plan: &CropPlan,
) -> Result<()> {
    backend.crop(&CropParams {
        source: source.to_path_buf(),
        output: output.to_path_buf(),
        rect: plan.rect,
    })
}
