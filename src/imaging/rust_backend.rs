//! Pure Rust backend on top of the `image` crate.
//!
//! ## Crate mapping
//!
//! | Operation | Crate / function |
//! |---|---|
//! | Identify | `image::ImageReader::into_dimensions` (header only) |
//! | Decode (JPEG, PNG, TIFF, WebP, BMP, GIF) | `image::ImageReader::decode` |
//! | Crop | `image::DynamicImage::crop_imm` |
//! | Encode → PNG | `image::codecs::png::PngEncoder` |
//!
//! Formats are detected from file content, so a PNG saved as `.jpg` (common
//! with screenshot share sheets) still decodes.

use super::backend::{BackendError, Dimensions, ImageBackend};
use super::params::CropParams;
use image::codecs::png::PngEncoder;
use image::{DynamicImage, ImageError, ImageReader};
use std::io::Write;
use std::path::Path;

/// Backend using the `image` crate ecosystem.
///
/// See the [module docs](self) for the crate-to-operation mapping.
pub struct RustBackend;

impl RustBackend {
    pub fn new() -> Self {
        Self
    }
}

impl Default for RustBackend {
    fn default() -> Self {
        Self::new()
    }
}

fn decode_error(path: &Path, err: impl std::fmt::Display) -> BackendError {
    BackendError::Decode {
        path: path.to_path_buf(),
        message: err.to_string(),
    }
}

type FileReader = ImageReader<std::io::BufReader<std::fs::File>>;

fn open_reader(path: &Path) -> Result<FileReader, BackendError> {
    ImageReader::open(path)
        .map_err(BackendError::Io)?
        .with_guessed_format()
        .map_err(BackendError::Io)
}

/// Load and decode an image from disk.
fn load_image(path: &Path) -> Result<DynamicImage, BackendError> {
    open_reader(path)?.decode().map_err(|e| decode_error(path, e))
}

fn write_error(path: &Path, source: std::io::Error) -> BackendError {
    BackendError::Write {
        path: path.to_path_buf(),
        source,
    }
}

/// Encode and save as PNG.
///
/// The writer is flushed explicitly; `BufWriter` drops its flush error.
fn save_png(img: &DynamicImage, path: &Path) -> Result<(), BackendError> {
    let file = std::fs::File::create(path).map_err(|e| write_error(path, e))?;
    let mut writer = std::io::BufWriter::new(file);
    img.write_with_encoder(PngEncoder::new(&mut writer))
        .map_err(|e| match e {
            ImageError::IoError(io) => write_error(path, io),
            other => BackendError::Encode {
                path: path.to_path_buf(),
                message: other.to_string(),
            },
        })?;
    writer.flush().map_err(|e| write_error(path, e))
}

impl ImageBackend for RustBackend {
    fn identify(&self, path: &Path) -> Result<Dimensions, BackendError> {
        let (width, height) = open_reader(path)?
            .into_dimensions()
            .map_err(|e| decode_error(path, e))?;
        if width == 0 || height == 0 {
            return Err(BackendError::EmptyImage(path.to_path_buf()));
        }
        Ok(Dimensions { width, height })
    }

    fn crop(&self, params: &CropParams) -> Result<(), BackendError> {
        let rect = params.rect;
        if rect.width() == 0 || rect.height() == 0 {
            return Err(BackendError::Encode {
                path: params.output.clone(),
                message: format!("crop rectangle {rect} is empty"),
            });
        }
        let img = load_image(&params.source)?;
        let cropped = img.crop_imm(rect.x0, rect.y0, rect.width(), rect.height());
        save_png(&cropped, &params.output)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::geometry::Rect;
    use image::{ImageEncoder, RgbImage};

    fn gradient(width: u32, height: u32) -> RgbImage {
        RgbImage::from_fn(width, height, |x, y| {
            image::Rgb([(x % 256) as u8, (y % 256) as u8, 128])
        })
    }

    /// Create a small valid PNG file with the given dimensions.
    fn create_test_png(path: &Path, width: u32, height: u32) {
        gradient(width, height)
            .save_with_format(path, image::ImageFormat::Png)
            .unwrap();
    }

    /// Create a small valid JPEG file with the given dimensions.
    fn create_test_jpeg(path: &Path, width: u32, height: u32) {
        let img = gradient(width, height);
        let file = std::fs::File::create(path).unwrap();
        let writer = std::io::BufWriter::new(file);
        image::codecs::jpeg::JpegEncoder::new(writer)
            .write_image(img.as_raw(), width, height, image::ExtendedColorType::Rgb8)
            .unwrap();
    }

    #[test]
    fn identify_synthetic_jpeg() {
        let tmp = tempfile::TempDir::new().unwrap();
        let path = tmp.path().join("test.jpg");
        create_test_jpeg(&path, 200, 150);

        let dims = RustBackend::new().identify(&path).unwrap();
        assert_eq!(dims.width, 200);
        assert_eq!(dims.height, 150);
    }

    #[test]
    fn identify_detects_format_from_content() {
        let tmp = tempfile::TempDir::new().unwrap();
        let path = tmp.path().join("screenshot.dat");
        create_test_png(&path, 64, 36);

        let dims = RustBackend::new().identify(&path).unwrap();
        assert_eq!(
            dims,
            Dimensions {
                width: 64,
                height: 36
            }
        );
    }

    #[test]
    fn identify_nonexistent_file_errors() {
        let result = RustBackend::new().identify(Path::new("/nonexistent/image.jpg"));
        assert!(matches!(result, Err(BackendError::Io(_))));
    }

    #[test]
    fn identify_non_image_errors() {
        let tmp = tempfile::TempDir::new().unwrap();
        let path = tmp.path().join("notes.txt");
        std::fs::write(&path, "not an image").unwrap();

        let result = RustBackend::new().identify(&path);
        assert!(matches!(result, Err(BackendError::Decode { .. })));
    }

    #[test]
    fn crop_writes_png_with_rect_pixels() {
        let tmp = tempfile::TempDir::new().unwrap();
        let source = tmp.path().join("shot.png");
        create_test_png(&source, 1920, 1080);
        let output = tmp.path().join("out.png");

        RustBackend::new()
            .crop(&CropParams {
                source,
                output: output.clone(),
                rect: Rect {
                    x0: 29,
                    y0: 24,
                    x1: 1385,
                    y1: 1054,
                },
            })
            .unwrap();

        let result = image::open(&output).unwrap().to_rgb8();
        assert_eq!(result.dimensions(), (1356, 1030));
        assert_eq!(result.get_pixel(0, 0), &image::Rgb([29, 24, 128]));
        assert_eq!(
            result.get_pixel(1355, 1029),
            &image::Rgb([((29 + 1355) % 256) as u8, ((24 + 1029) % 256) as u8, 128])
        );
    }

    #[test]
    fn crop_output_is_png_even_from_jpeg() {
        let tmp = tempfile::TempDir::new().unwrap();
        let source = tmp.path().join("shot.jpg");
        create_test_jpeg(&source, 320, 180);
        let output = tmp.path().join("shot.png");

        RustBackend::new()
            .crop(&CropParams {
                source,
                output: output.clone(),
                rect: Rect {
                    x0: 5,
                    y0: 4,
                    x1: 231,
                    y1: 176,
                },
            })
            .unwrap();

        let bytes = std::fs::read(&output).unwrap();
        assert_eq!(image::guess_format(&bytes).unwrap(), image::ImageFormat::Png);
    }

    #[test]
    fn crop_empty_rect_errors() {
        let tmp = tempfile::TempDir::new().unwrap();
        let source = tmp.path().join("shot.png");
        create_test_png(&source, 10, 10);

        let result = RustBackend::new().crop(&CropParams {
            source,
            output: tmp.path().join("out.png"),
            rect: Rect {
                x0: 5,
                y0: 5,
                x1: 5,
                y1: 9,
            },
        });
        assert!(matches!(result, Err(BackendError::Encode { .. })));
    }

    #[test]
    fn crop_missing_output_dir_errors() {
        let tmp = tempfile::TempDir::new().unwrap();
        let source = tmp.path().join("shot.png");
        create_test_png(&source, 10, 10);

        let result = RustBackend::new().crop(&CropParams {
            source,
            output: tmp.path().join("missing/out.png"),
            rect: Rect {
                x0: 0,
                y0: 0,
                x1: 5,
                y1: 5,
            },
        });
        assert!(matches!(result, Err(BackendError::Write { .. })));
    }

    #[cfg(target_os = "linux")]
    #[test]
    fn crop_into_full_device_errors() {
        let tmp = tempfile::TempDir::new().unwrap();
        let source = tmp.path().join("shot.png");
        create_test_png(&source, 64, 36);

        let result = RustBackend::new().crop(&CropParams {
            source,
            output: "/dev/full".into(),
            rect: Rect {
                x0: 1,
                y0: 1,
                x1: 40,
                y1: 30,
            },
        });
        assert!(
            matches!(result, Err(BackendError::Write { .. })),
            "expected write error, got {result:?}"
        );
    }
}
