//! OCR backend wrapper using the ocrs library.

use std::path::{Path, PathBuf};

use image::{DynamicImage, GrayImage};
use ocrs::{ImageSource, OcrEngine, OcrEngineParams};
use rten::Model;
use thiserror::Error;
use tracing::{debug, trace};

/// File name of the text detection model.
const DETECTION_MODEL: &str = "text-detection.rten";

/// File name of the text recognition model.
const RECOGNITION_MODEL: &str = "text-recognition.rten";

/// OCR backend failures.
#[derive(Debug, Error)]
pub enum OcrError {
    /// The models directory does not hold both `.rten` models.
    #[error("OCR models not found in {} (expected text-detection.rten and text-recognition.rten)", dir.display())]
    ModelsNotFound { dir: PathBuf },

    /// A model file exists but could not be loaded.
    #[error("failed to load OCR model {}", path.display())]
    ModelLoad {
        path: PathBuf,
        #[source]
        source: rten::ModelLoadError,
    },

    /// The OCR engine itself failed.
    #[error("OCR engine failure: {0}")]
    Engine(anyhow::Error),
}

/// Text recognition capability.
///
/// Implementations are black boxes: output may be empty, and neither
/// determinism nor latency is guaranteed.
pub trait TextRecognizer {
    /// Recognize text in a bitmap, returning the raw transcription.
    fn recognize(&self, image: &GrayImage) -> Result<String, OcrError>;
}

/// Production [`TextRecognizer`] backed by the ocrs engine.
pub struct OcrsRecognizer {
    engine: OcrEngine,
}

impl OcrsRecognizer {
    /// Create a recognizer by loading models from the given directory.
    pub fn new(models_dir: &Path) -> Result<Self, OcrError> {
        let detection_path = models_dir.join(DETECTION_MODEL);
        let recognition_path = models_dir.join(RECOGNITION_MODEL);

        debug!("loading OCR detection model from {:?}", detection_path);
        let detection_model = Model::load_file(&detection_path).map_err(|source| {
            OcrError::ModelLoad {
                path: detection_path.clone(),
                source,
            }
        })?;

        debug!("loading OCR recognition model from {:?}", recognition_path);
        let recognition_model = Model::load_file(&recognition_path).map_err(|source| {
            OcrError::ModelLoad {
                path: recognition_path.clone(),
                source,
            }
        })?;

        let engine = OcrEngine::new(OcrEngineParams {
            detection_model: Some(detection_model),
            recognition_model: Some(recognition_model),
            ..Default::default()
        })
        .map_err(OcrError::Engine)?;

        debug!("OCR engine initialized");
        Ok(Self { engine })
    }

    /// Create a recognizer from the default models directory.
    pub fn with_default_models() -> Result<Self, OcrError> {
        let models_dir = find_models_dir()?;
        Self::new(&models_dir)
    }
}

impl TextRecognizer for OcrsRecognizer {
    fn recognize(&self, image: &GrayImage) -> Result<String, OcrError> {
        // ocrs expects packed RGB input.
        let rgb = DynamicImage::ImageLuma8(image.clone()).into_rgb8();
        let (width, height) = (rgb.width(), rgb.height());

        let source = ImageSource::from_bytes(rgb.as_raw(), (width, height))
            .map_err(|e| OcrError::Engine(e.into()))?;

        let input = self.engine.prepare_input(source).map_err(OcrError::Engine)?;

        let word_rects = self.engine.detect_words(&input).map_err(OcrError::Engine)?;
        trace!("detected {} word regions", word_rects.len());

        let line_rects = self.engine.find_text_lines(&input, &word_rects);
        let line_texts = self
            .engine
            .recognize_text(&input, &line_rects)
            .map_err(OcrError::Engine)?;

        let lines: Vec<String> = line_texts
            .iter()
            .flatten()
            .map(|line| line.to_string())
            .filter(|line| !line.trim().is_empty())
            .collect();

        trace!("recognized {} text lines", lines.len());
        Ok(lines.join("\n"))
    }
}

/// Find the directory holding the OCR models.
///
/// Models live under `models/` in the resources directory; both files
/// must be present.
pub fn find_models_dir() -> Result<PathBuf, OcrError> {
    let models_dir = crate::default_ocr_models_dir();

    let detection = models_dir.join(DETECTION_MODEL);
    let recognition = models_dir.join(RECOGNITION_MODEL);

    if detection.exists() && recognition.exists() {
        debug!("found OCR models directory at {:?}", models_dir);
        return Ok(models_dir);
    }

    Err(OcrError::ModelsNotFound { dir: models_dir })
}
