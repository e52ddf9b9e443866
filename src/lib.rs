//! # Result Crop
//!
//! Batch-crops screenshots of a game's result screen down to the result
//! panel, for screenshots taken on devices with any aspect ratio.
//!
//! # Pipeline
//!
//! ```text
//! input/*.*  →  identify  →  classify (16:9 / wider / taller)
//!            →  crop rect  →  crop  →  output/<stem>.png
//! ```
//!
//! Files are processed strictly one after another. The first failure aborts
//! the run unless per-file isolation is requested.
//!
//! # Module Map
//!
//! | Module | Role |
//! |--------|------|
//! | [`geometry`] | Pure crop arithmetic: aspect classification and the panel rectangle |
//! | [`imaging`] | Backend trait, `image`-crate backend, and plan/apply operations |
//! | [`scan`] | Lists candidate files in the input directory |
//! | [`naming`] | `<stem>.png` output naming |
//! | [`batch`] | The per-file loop, progress events, and the JSON run manifest |
//! | [`output`] | CLI output formatting |
//!
//! # Layout Model
//!
//! The game lays its UI out for 16:9. On wider screens the extra width goes
//! to the right of the result panel; on taller screens the 16:9 area is
//! centered vertically. So the panel is always found by projecting a fixed
//! rectangle, measured once on a 1334×750 capture, onto the screenshot's
//! virtual 16:9 area. See [`geometry`] for the details.

pub mod batch;
pub mod geometry;
pub mod imaging;
pub mod naming;
pub mod output;
pub mod scan;
