//! Crop geometry for result screenshots.
//!
//! The result panel was measured on a 1334×750 canvas. Its position and size
//! are stored as fractions of that canvas so the same rectangle can be
//! projected onto any 16:9 screenshot. Screenshots that are not 16:9 are
//! mapped onto a virtual 16:9 area first:
//!
//! ```text
//! default       16:9 (±0.01)    rect computed on (width, height)
//! horizontally  wider than 16:9 rect computed on (height * 16/9, height),
//!                               surplus width on the right is dropped
//! vertically    taller than 16:9 rect computed on (width, width / (16/9)),
//!                               then shifted down by the centering offset
//! ```
//!
//! Everything here is pure and testable without any I/O or images.

use serde::Serialize;
use std::fmt;

/// Aspect ratio the game UI is laid out against.
pub const REFERENCE_RATIO: f64 = 16.0 / 9.0;

/// Maximum distance from [`REFERENCE_RATIO`] still treated as 16:9.
pub const RATIO_TOLERANCE: f64 = 0.01;

/// Result panel position and size as fractions of the 1334×750 canvas.
const RECT_X_PER: f64 = 20.0 / 1334.0;
const RECT_Y_PER: f64 = 17.0 / 750.0;
const RECT_W_PER: f64 = 942.0 / 1334.0;
const RECT_H_PER: f64 = 715.0 / 750.0;

/// How a screenshot's aspect ratio relates to [`REFERENCE_RATIO`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum AspectClass {
    /// Within [`RATIO_TOLERANCE`] of 16:9.
    Default,
    /// Wider than 16:9.
    Horizontally,
    /// Taller than 16:9.
    Vertically,
}

impl AspectClass {
    pub fn as_str(self) -> &'static str {
        match self {
            AspectClass::Default => "default",
            AspectClass::Horizontally => "horizontally",
            AspectClass::Vertically => "vertically",
        }
    }
}

impl fmt::Display for AspectClass {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Integer pixel bounds `(x0, y0, x1, y1)`, end-exclusive.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Rect {
    pub x0: u32,
    pub y0: u32,
    pub x1: u32,
    pub y1: u32,
}

impl Rect {
    pub fn width(&self) -> u32 {
        self.x1.saturating_sub(self.x0)
    }

    pub fn height(&self) -> u32 {
        self.y1.saturating_sub(self.y0)
    }
}

impl fmt::Display for Rect {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {}, {}, {})", self.x0, self.y0, self.x1, self.y1)
    }
}

/// Crop bounds before snapping to the pixel grid.
///
/// Only the vertical centering offset can make these fractional.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RawRect {
    pub x0: f64,
    pub y0: f64,
    pub x1: f64,
    pub y1: f64,
}

impl RawRect {
    /// Snap every bound to the nearest pixel, ties to even, and clamp into
    /// `width` × `height`.
    pub fn to_pixels(self, width: u32, height: u32) -> Rect {
        let snap = |v: f64, max: u32| round_half_even(v).clamp(0.0, max as f64) as u32;
        Rect {
            x0: snap(self.x0, width),
            y0: snap(self.y0, height),
            x1: snap(self.x1, width),
            y1: snap(self.y1, height),
        }
    }
}

impl From<Rect> for RawRect {
    fn from(r: Rect) -> Self {
        Self {
            x0: r.x0 as f64,
            y0: r.y0 as f64,
            x1: r.x1 as f64,
            y1: r.y1 as f64,
        }
    }
}

impl fmt::Display for RawRect {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {}, {}, {})", self.x0, self.y0, self.x1, self.y1)
    }
}

fn round_half_even(v: f64) -> f64 {
    v.round_ties_even()
}

/// Classify a screenshot by comparing `width / height` against 16:9.
///
/// A zero height is classified as [`AspectClass::Horizontally`] (infinite
/// ratio); callers reject empty images before getting here.
pub fn classify(width: u32, height: u32) -> AspectClass {
    let ratio = width as f64 / height as f64;
    if (REFERENCE_RATIO - ratio).abs() < RATIO_TOLERANCE {
        AspectClass::Default
    } else if ratio > REFERENCE_RATIO {
        AspectClass::Horizontally
    } else {
        AspectClass::Vertically
    }
}

/// Project the result panel onto a 16:9 area of `width` × `height`.
///
/// Each of X, Y, W, H is rounded on its own (ties to even) before the end
/// coordinates are summed, so `x1 = X + W` rather than `round(x + w)`.
///
/// # Examples
/// ```
/// # use result_crop::geometry::{reference_rect, Rect};
/// assert_eq!(
///     reference_rect(1920.0, 1080.0),
///     Rect { x0: 29, y0: 24, x1: 1385, y1: 1054 }
/// );
/// ```
pub fn reference_rect(width: f64, height: f64) -> Rect {
    let px = |v: f64, per: f64| round_half_even(v * per).max(0.0) as u32;
    let x = px(width, RECT_X_PER);
    let y = px(height, RECT_Y_PER);
    let w = px(width, RECT_W_PER);
    let h = px(height, RECT_H_PER);
    Rect {
        x0: x,
        y0: y,
        x1: x + w,
        y1: y + h,
    }
}

/// Compute the crop bounds for a screenshot of `width` × `height`.
pub fn crop_rect(width: u32, height: u32, class: AspectClass) -> RawRect {
    let (w, h) = (width as f64, height as f64);
    match class {
        AspectClass::Default => reference_rect(w, h).into(),
        AspectClass::Horizontally => reference_rect(h * REFERENCE_RATIO, h).into(),
        AspectClass::Vertically => {
            let virtual_height = w / REFERENCE_RATIO;
            let offset = (h - virtual_height) / 2.0;
            let rect = RawRect::from(reference_rect(w, virtual_height));
            RawRect {
                y0: rect.y0 + offset,
                y1: rect.y1 + offset,
                ..rect
            }
        }
    }
}
