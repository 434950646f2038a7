//! Loading cascade classifier models for face detection.

use std::path::PathBuf;

use image::GrayImage;
use rustface::ImageData;
use snapsight_types::{DetectionParams, FaceRegion};
use thiserror::Error;
use tracing::debug;

use crate::util::file_sha256;

/// Errors raised while loading classifier model files.
#[derive(Debug, Error)]
pub enum ClassifierError {
    /// A configured model file does not exist.
    #[error("classifier model file not found: {}", path.display())]
    ModelNotFound { path: PathBuf },

    /// A model file exists but could not be parsed.
    #[error("failed to load classifier model {}", path.display())]
    ModelLoad {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

/// One loaded classifier model.
///
/// Detectors keep internal scratch state, hence `&mut self`.
pub trait FaceModel {
    /// Detect face regions in a grayscale image.
    fn detect(&mut self, gray: &GrayImage, params: &DetectionParams) -> Vec<FaceRegion>;
}

/// Loader producing the classifier models a [`super::FaceDetector`] runs.
pub trait ClassifierLoader {
    /// Load every configured model, failing on the first unusable file.
    fn load(&self) -> Result<Vec<Box<dyn FaceModel>>, ClassifierError>;
}

/// Production loader for SeetaFace cascade model files (`.bin`).
pub struct SeetaModelLoader {
    model_files: Vec<PathBuf>,
}

impl SeetaModelLoader {
    /// Loader over an explicit list of model files.
    pub fn new(model_files: Vec<PathBuf>) -> Self {
        Self { model_files }
    }

    /// Loader over the default frontal-face model under the resources
    /// directory.
    pub fn with_default_models() -> Self {
        Self::new(crate::default_face_model_files())
    }

    /// The model files this loader reads.
    pub fn model_files(&self) -> &[PathBuf] {
        &self.model_files
    }
}

impl ClassifierLoader for SeetaModelLoader {
    fn load(&self) -> Result<Vec<Box<dyn FaceModel>>, ClassifierError> {
        let mut models: Vec<Box<dyn FaceModel>> = Vec::with_capacity(self.model_files.len());

        for file in &self.model_files {
            if !file.exists() {
                return Err(ClassifierError::ModelNotFound { path: file.clone() });
            }

            if let Ok(digest) = file_sha256(file) {
                debug!("loading classifier model {} (sha256 {})", file.display(), digest);
            }

            let detector = rustface::create_detector(&file.to_string_lossy()).map_err(
                |source| ClassifierError::ModelLoad {
                    path: file.clone(),
                    source,
                },
            )?;

            models.push(Box::new(SeetaModel { detector }));
        }

        Ok(models)
    }
}

/// A rustface detector behind the [`FaceModel`] trait.
struct SeetaModel {
    detector: Box<dyn rustface::Detector>,
}

impl FaceModel for SeetaModel {
    fn detect(&mut self, gray: &GrayImage, params: &DetectionParams) -> Vec<FaceRegion> {
        self.detector.set_min_face_size(params.min_face_size);
        self.detector.set_score_thresh(params.score_threshold);
        self.detector
            .set_pyramid_scale_factor(params.pyramid_scale_factor);
        self.detector
            .set_slide_window_step(params.slide_window_step, params.slide_window_step);

        let mut image = ImageData::new(gray.as_raw(), gray.width(), gray.height());
        self.detector
            .detect(&mut image)
            .into_iter()
            .map(|face| {
                let bbox = face.bbox();
                FaceRegion::new(bbox.x(), bbox.y(), bbox.width(), bbox.height())
            })
            .collect()
    }
}
