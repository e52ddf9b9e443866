//! Image handling: identify, crop, encode PNG.
//!
//! | Operation | Crate / function |
//! |---|---|
//! | **Identify** | `image::ImageReader::into_dimensions` |
//! | **Crop** | `DynamicImage::crop_imm` |
//! | **Encode** | `PngEncoder` |
//!
//! The module is split into:
//! - **Parameters**: Data structures describing image operations
//! - **Backend**: [`ImageBackend`] trait + [`RustBackend`]
//! - **Operations**: High-level functions combining geometry + backend
//!
//! The crop geometry itself lives in [`crate::geometry`].

pub mod backend;
pub mod operations;
mod params;
pub mod rust_backend;

pub use backend::{BackendError, Dimensions, ImageBackend};
pub use operations::{CropPlan, apply_plan, get_dimensions, plan_crop};
pub use params::CropParams;
pub use rust_backend::RustBackend;
