//! Loading and saving images with typed, path-carrying errors.
//!
//! Format support is whatever the `image` crate was compiled with; the
//! `supported_*_extensions` functions expose that capability set so
//! callers (and error messages) can name it.

use std::path::{Path, PathBuf};

use image::{DynamicImage, GenericImageView, ImageFormat, ImageReader};
use thiserror::Error;
use tracing::debug;

/// Errors from image file operations. Every variant names the offending
/// path so callers can report it without extra bookkeeping.
#[derive(Debug, Error)]
pub enum ImageFileError {
    /// The file does not exist.
    #[error("image file does not exist: {}", path.display())]
    NotFound { path: PathBuf },

    /// The file exists but is not a recognizable image.
    #[error("file is not a valid image: {}", path.display())]
    Unrecognized {
        path: PathBuf,
        #[source]
        source: image::ImageError,
    },

    /// The target extension maps to no writable format.
    #[error("unsupported image format for {} (supported extensions: {supported})", path.display())]
    UnsupportedFormat { path: PathBuf, supported: String },

    /// The target directory does not exist.
    #[error("directory does not exist: {}", dir.display())]
    MissingDirectory { dir: PathBuf },

    /// Encoding failed after the format checks passed.
    #[error("failed to encode image to {}", path.display())]
    Encode {
        path: PathBuf,
        #[source]
        source: image::ImageError,
    },

    /// Any other I/O failure.
    #[error("i/o error on {}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

/// Load and decode an image from disk.
///
/// The format is sniffed from the file content, not the extension.
pub fn load_image(path: impl AsRef<Path>) -> Result<DynamicImage, ImageFileError> {
    let path = path.as_ref();

    if !path.exists() {
        return Err(ImageFileError::NotFound {
            path: path.to_path_buf(),
        });
    }

    let reader = ImageReader::open(path)
        .and_then(|r| r.with_guessed_format())
        .map_err(|source| ImageFileError::Io {
            path: path.to_path_buf(),
            source,
        })?;

    let image = reader
        .decode()
        .map_err(|source| ImageFileError::Unrecognized {
            path: path.to_path_buf(),
            source,
        })?;

    debug!(
        "loaded image {} ({}x{})",
        path.display(),
        image.width(),
        image.height()
    );
    Ok(image)
}

/// Encode an image to disk, picking the format from the file extension.
pub fn save_image(image: &DynamicImage, path: impl AsRef<Path>) -> Result<(), ImageFileError> {
    let path = path.as_ref();

    if let Some(dir) = path.parent() {
        if !dir.as_os_str().is_empty() && !dir.is_dir() {
            return Err(ImageFileError::MissingDirectory {
                dir: dir.to_path_buf(),
            });
        }
    }

    let format = ImageFormat::from_path(path).ok().filter(|f| f.writing_enabled());
    if format.is_none() {
        return Err(ImageFileError::UnsupportedFormat {
            path: path.to_path_buf(),
            supported: supported_save_extensions().join(", "),
        });
    }

    image.save(path).map_err(|source| match source {
        image::ImageError::IoError(source) => ImageFileError::Io {
            path: path.to_path_buf(),
            source,
        },
        source => ImageFileError::Encode {
            path: path.to_path_buf(),
            source,
        },
    })?;

    debug!("saved image to {}", path.display());
    Ok(())
}

/// File extensions the compiled-in decoders can read.
pub fn supported_load_extensions() -> Vec<&'static str> {
    ImageFormat::all()
        .filter(|format| format.reading_enabled())
        .flat_map(|format| format.extensions_str().iter().copied())
        .collect()
}

/// File extensions the compiled-in encoders can write.
pub fn supported_save_extensions() -> Vec<&'static str> {
    ImageFormat::all()
        .filter(|format| format.writing_enabled())
        .flat_map(|format| format.extensions_str().iter().copied())
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_load_missing_file_reports_the_path() {
        let err = load_image("no/such/image.png").unwrap_err();
        match err {
            ImageFileError::NotFound { path } => {
                assert_eq!(path, PathBuf::from("no/such/image.png"));
            }
            other => panic!("expected NotFound, got {other:?}"),
        }
    }

    #[test]
    fn test_load_rejects_non_image_content() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("fake.png");
        std::fs::write(&path, b"definitely not a png").unwrap();

        let err = load_image(&path).unwrap_err();
        assert!(matches!(err, ImageFileError::Unrecognized { .. }));
    }

    #[test]
    fn test_save_then_load_round_trips() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("out.png");

        let image = DynamicImage::new_rgb8(3, 2);
        save_image(&image, &path).unwrap();

        let back = load_image(&path).unwrap();
        assert_eq!((back.width(), back.height()), (3, 2));
    }

    #[test]
    fn test_save_rejects_unknown_extension() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("out.notaformat");

        let image = DynamicImage::new_rgb8(3, 2);
        let err = save_image(&image, &path).unwrap_err();
        match err {
            ImageFileError::UnsupportedFormat { supported, .. } => {
                assert!(supported.contains("png"));
            }
            other => panic!("expected UnsupportedFormat, got {other:?}"),
        }
    }

    #[test]
    fn test_save_rejects_missing_directory() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("missing").join("out.png");

        let image = DynamicImage::new_rgb8(3, 2);
        let err = save_image(&image, &path).unwrap_err();
        assert!(matches!(err, ImageFileError::MissingDirectory { .. }));
    }

    #[test]
    fn test_supported_extensions_include_the_basics() {
        assert!(supported_load_extensions().contains(&"png"));
        assert!(supported_save_extensions().contains(&"png"));
        assert!(supported_load_extensions().contains(&"jpg"));
    }
}
