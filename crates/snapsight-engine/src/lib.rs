//! Image text extraction and face detection engine.
//!
//! This crate orchestrates three external capabilities behind narrow
//! traits so each can be swapped for a test double: image processing (the
//! `image`/`imageproc` crates), OCR (the `ocrs` engine), and cascade face
//! detection (the `rustface` models). The control flow this crate adds on
//! top is the binarization threshold sweep in [`ocr::TextExtractor`] and
//! the aggregation of detections across classifier models in
//! [`face::FaceDetector`].

pub mod face;
pub mod imaging;
pub mod ocr;
pub mod util;

pub use face::{ClassifierError, ClassifierLoader, FaceDetector, FaceModel, SeetaModelLoader};
pub use imaging::{ImageFileError, ImageOps, ImageProcessor};
pub use ocr::{
    DictionaryError, DictionaryLookup, OcrError, OcrsRecognizer, TextExtractor, TextRecognizer,
    WordListDictionary, BINARIZE_THRESHOLDS,
};

use std::path::PathBuf;

/// Environment variable overriding the resources directory.
pub const RESOURCES_DIR_ENV: &str = "SNAPSIGHT_RESOURCES_DIR";

/// Resolve the resources directory holding the bundled dictionary and
/// model files.
///
/// Honors `SNAPSIGHT_RESOURCES_DIR` when set; otherwise resources are
/// expected as a sibling of the executable's `bin` directory
/// (`bin/../resources`), falling back to `./resources` for development.
pub fn resources_dir() -> PathBuf {
    if let Ok(dir) = std::env::var(RESOURCES_DIR_ENV) {
        return PathBuf::from(dir);
    }

    std::env::current_exe()
        .ok()
        .and_then(|exe| {
            exe.parent() // bin/
                .and_then(|p| p.parent()) // install root
                .map(|p| p.join("resources"))
        })
        .filter(|dir| dir.is_dir())
        .unwrap_or_else(|| PathBuf::from("resources"))
}

/// Default dictionary word list under the resources directory.
pub fn default_dictionary_file() -> PathBuf {
    resources_dir().join("words_alpha.txt")
}

/// Default face classifier model files under the resources directory.
pub fn default_face_model_files() -> Vec<PathBuf> {
    vec![resources_dir().join("seeta_fd_frontal_v1.0.bin")]
}

/// Default directory holding the OCR detection and recognition models.
pub fn default_ocr_models_dir() -> PathBuf {
    resources_dir().join("models")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_file_names() {
        assert!(default_dictionary_file().ends_with("words_alpha.txt"));
        assert!(default_ocr_models_dir().ends_with("models"));
    }

    #[test]
    fn test_default_model_list_is_not_empty() {
        assert!(!default_face_model_files().is_empty());
    }
}
