//! Image backend trait and shared types.
//!
//! The [`ImageBackend`] trait defines the two operations the batch needs:
//! identify (read dimensions) and crop (decode, cut, encode PNG).
//!
//! The production implementation is
//! [`RustBackend`](super::rust_backend::RustBackend), built on the `image`
//! crate. Tests swap in a recording mock.

use super::params::CropParams;
use std::path::{Path, PathBuf};
use thiserror::Error;

#[derive(Error, Debug)]
pub enum BackendError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
    #[error("Failed to decode {path}: {message}")]
    Decode { path: PathBuf, message: String },
    #[error("Failed to encode {path}: {message}")]
    Encode { path: PathBuf, message: String },
    #[error("Image has no pixels: {0}")]
    EmptyImage(PathBuf),
    /// Writing the output file failed. Unlike the other variants this is
    /// about the output directory, not the screenshot being cropped.
    #[error("Failed to write {path}: {source}")]
    Write {
        path: PathBuf,
        source: std::io::Error,
    },
}

impl BackendError {
    /// Whether the error is tied to the output side rather than the input file.
    pub fn is_write(&self) -> bool {
        matches!(self, BackendError::Write { .. })
    }
}

/// Result of an identify operation.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Dimensions {
    pub width: u32,
    pub height: u32,
}

/// Trait for image backends.
pub trait ImageBackend {
    /// Get image dimensions.
    fn identify(&self, path: &Path) -> Result<Dimensions, BackendError>;

    /// Cut `params.rect` out of `params.source` and write it to
    /// `params.output` as PNG.
    fn crop(&self, params: &CropParams) -> Result<(), BackendError>;
}

#[cfg(test)]
pub mod tests {
    use super::*;
    use crate::geometry::Rect;
    use std::sync::Mutex;

    /// Mock backend that records operations without executing them.
    ///
    /// Dimensions are handed out in push order; a `None` entry makes the
    /// matching identify call fail like an undecodable file. With
    /// `fail_writes` every crop fails as if the output were unwritable.
    #[derive(Default)]
    pub struct MockBackend {
        pub identify_results: Mutex<Vec<Option<Dimensions>>>,
        pub operations: Mutex<Vec<RecordedOp>>,
        pub fail_writes: bool,
    }

    #[derive(Debug, Clone, PartialEq)]
    pub enum RecordedOp {
        Identify(String),
        Crop {
            source: String,
            output: String,
            rect: Rect,
        },
    }

    impl MockBackend {
        pub fn new() -> Self {
            Self::default()
        }

        pub fn with_dimensions(dims: Vec<Dimensions>) -> Self {
            Self::with_results(dims.into_iter().map(Some).collect())
        }

        pub fn with_results(mut results: Vec<Option<Dimensions>>) -> Self {
            results.reverse();
            Self {
                identify_results: Mutex::new(results),
                operations: Mutex::new(Vec::new()),
                fail_writes: false,
            }
        }

        pub fn with_failing_writes(dims: Vec<Dimensions>) -> Self {
            Self {
                fail_writes: true,
                ..Self::with_dimensions(dims)
            }
        }

        pub fn get_operations(&self) -> Vec<RecordedOp> {
            self.operations.lock().unwrap().clone()
        }
    }

    impl ImageBackend for MockBackend {
        fn identify(&self, path: &Path) -> Result<Dimensions, BackendError> {
            self.operations
                .lock()
                .unwrap()
                .push(RecordedOp::Identify(path.to_string_lossy().to_string()));

            self.identify_results
                .lock()
                .unwrap()
                .pop()
                .flatten()
                .ok_or_else(|| BackendError::Decode {
                    path: path.to_path_buf(),
                    message: "No mock dimensions".to_string(),
                })
        }

        fn crop(&self, params: &CropParams) -> Result<(), BackendError> {
            self.operations.lock().unwrap().push(RecordedOp::Crop {
                source: params.source.to_string_lossy().to_string(),
                output: params.output.to_string_lossy().to_string(),
                rect: params.rect,
            });
            if self.fail_writes {
                return Err(BackendError::Write {
                    path: params.output.clone(),
                    source: std::io::Error::from(std::io::ErrorKind::PermissionDenied),
                });
            }
            Ok(())
        }
    }

    #[test]
    fn mock_records_identify() {
        let backend = MockBackend::with_dimensions(vec![Dimensions {
            width: 800,
            height: 600,
        }]);

        let result = backend.identify(Path::new("/test/image.jpg")).unwrap();
        assert_eq!(result.width, 800);
        assert_eq!(result.height, 600);

        let ops = backend.get_operations();
        assert_eq!(ops.len(), 1);
        assert!(matches!(&ops[0], RecordedOp::Identify(p) if p == "/test/image.jpg"));
    }

    #[test]
    fn mock_hands_out_dimensions_in_order() {
        let backend = MockBackend::with_results(vec![
            Some(Dimensions {
                width: 1,
                height: 2,
            }),
            None,
        ]);

        assert_eq!(
            backend.identify(Path::new("a.png")).unwrap(),
            Dimensions {
                width: 1,
                height: 2
            }
        );
        assert!(backend.identify(Path::new("b.png")).is_err());
        assert!(backend.identify(Path::new("c.png")).is_err());
    }

    #[test]
    fn only_write_errors_are_output_side() {
        let write = BackendError::Write {
            path: "out.png".into(),
            source: std::io::Error::from(std::io::ErrorKind::PermissionDenied),
        };
        assert!(write.is_write());
        assert!(!BackendError::EmptyImage("in.png".into()).is_write());
        let missing_source = std::io::Error::from(std::io::ErrorKind::NotFound);
        assert!(!BackendError::Io(missing_source).is_write());
    }

    #[test]
    fn mock_records_crop() {
        let backend = MockBackend::new();
        let rect = Rect {
            x0: 1,
            y0: 2,
            x1: 3,
            y1: 4,
        };

        backend
            .crop(&CropParams {
                source: "/source.jpg".into(),
                output: "/out/source.png".into(),
                rect,
            })
            .unwrap();

        let ops = backend.get_operations();
        assert_eq!(ops.len(), 1);
        assert!(matches!(
            &ops[0],
            RecordedOp::Crop { output, rect: r, .. } if output == "/out/source.png" && *r == rect
        ));
    }
}
