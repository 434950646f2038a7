//! Face detection across multiple classifier models.

use image::{DynamicImage, RgbaImage};
use snapsight_types::{DetectionParams, FaceDetectionResult, FaceRegion};
use tracing::debug;

use crate::face::loader::{ClassifierError, ClassifierLoader, FaceModel};
use crate::imaging::ops;

/// Runs every loaded classifier model over an image and aggregates the
/// detected regions.
///
/// Classifiers are loaded lazily on the first detection pass, so a
/// misconfigured model file surfaces as an error from [`detect_faces`]
/// rather than from construction.
///
/// [`detect_faces`]: FaceDetector::detect_faces
pub struct FaceDetector<L> {
    loader: L,
    models: Option<Vec<Box<dyn FaceModel>>>,
}

impl<L: ClassifierLoader> FaceDetector<L> {
    /// Build a detector over the given classifier loader.
    pub fn new(loader: L) -> Self {
        Self {
            loader,
            models: None,
        }
    }

    /// Detect faces, concatenating the regions every classifier model
    /// reports.
    pub fn detect_faces(
        &mut self,
        image: &DynamicImage,
        params: DetectionParams,
    ) -> Result<FaceDetectionResult, ClassifierError> {
        if self.models.is_none() {
            let loaded = self.loader.load()?;
            debug!("loaded {} classifier model(s)", loaded.len());
            self.models = Some(loaded);
        }

        let gray = ops::grayscale(image);

        let mut regions = Vec::new();
        if let Some(models) = self.models.as_mut() {
            for model in models.iter_mut() {
                regions.extend(model.detect(&gray, &params));
            }
        }

        debug!("detected {} face region(s)", regions.len());
        Ok(FaceDetectionResult::new(regions, params))
    }

    /// Crop one image per detected region.
    pub fn face_images(&self, image: &DynamicImage, regions: &[FaceRegion]) -> Vec<DynamicImage> {
        ops::crop_regions(image, regions)
    }

    /// Return a copy of the image with the detected regions outlined.
    pub fn highlight_faces(&self, image: &DynamicImage, regions: &[FaceRegion]) -> RgbaImage {
        ops::draw_rectangles(image, regions)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use image::{GenericImageView, GrayImage};
    use std::cell::Cell;
    use std::rc::Rc;

    /// Model double reporting a fixed region list.
    struct FixedModel {
        regions: Vec<FaceRegion>,
        calls: Rc<Cell<u32>>,
    }

    impl FaceModel for FixedModel {
        fn detect(&mut self, _gray: &GrayImage, _params: &DetectionParams) -> Vec<FaceRegion> {
            self.calls.set(self.calls.get() + 1);
            self.regions.clone()
        }
    }

    /// Loader double handing out a set of fixed models, counting loads.
    struct StubLoader {
        per_model_regions: Vec<Vec<FaceRegion>>,
        loads: Rc<Cell<u32>>,
        detect_calls: Rc<Cell<u32>>,
    }

    impl StubLoader {
        fn new(per_model_regions: Vec<Vec<FaceRegion>>) -> Self {
            Self {
                per_model_regions,
                loads: Rc::new(Cell::new(0)),
                detect_calls: Rc::new(Cell::new(0)),
            }
        }
    }

    impl ClassifierLoader for StubLoader {
        fn load(&self) -> Result<Vec<Box<dyn FaceModel>>, ClassifierError> {
            self.loads.set(self.loads.get() + 1);
            Ok(self
                .per_model_regions
                .iter()
                .cloned()
                .map(|regions| {
                    Box::new(FixedModel {
                        regions,
                        calls: Rc::clone(&self.detect_calls),
                    }) as Box<dyn FaceModel>
                })
                .collect())
        }
    }

    /// Loader double that always fails.
    struct BrokenLoader;

    impl ClassifierLoader for BrokenLoader {
        fn load(&self) -> Result<Vec<Box<dyn FaceModel>>, ClassifierError> {
            Err(ClassifierError::ModelNotFound {
                path: "missing.bin".into(),
            })
        }
    }

    fn test_image() -> DynamicImage {
        DynamicImage::new_rgb8(32, 32)
    }

    #[test]
    fn test_regions_are_concatenated_across_models() {
        let first = vec![FaceRegion::new(0, 0, 4, 4)];
        let second = vec![FaceRegion::new(8, 8, 4, 4), FaceRegion::new(16, 16, 4, 4)];
        let loader = StubLoader::new(vec![first, second]);
        let mut detector = FaceDetector::new(loader);

        let result = detector
            .detect_faces(&test_image(), DetectionParams::default())
            .unwrap();

        assert_eq!(result.len(), 3);
        assert_eq!(result.regions[0], FaceRegion::new(0, 0, 4, 4));
        assert_eq!(result.regions[2], FaceRegion::new(16, 16, 4, 4));
    }

    #[test]
    fn test_classifiers_load_once_across_passes() {
        let loader = StubLoader::new(vec![vec![FaceRegion::new(0, 0, 4, 4)]]);
        let loads = Rc::clone(&loader.loads);
        let detect_calls = Rc::clone(&loader.detect_calls);
        let mut detector = FaceDetector::new(loader);

        detector
            .detect_faces(&test_image(), DetectionParams::default())
            .unwrap();
        detector
            .detect_faces(&test_image(), DetectionParams::default())
            .unwrap();

        assert_eq!(loads.get(), 1);
        assert_eq!(detect_calls.get(), 2);
    }

    #[test]
    fn test_loader_failure_surfaces_from_detect_faces() {
        let mut detector = FaceDetector::new(BrokenLoader);

        let err = detector
            .detect_faces(&test_image(), DetectionParams::default())
            .unwrap_err();
        assert!(matches!(err, ClassifierError::ModelNotFound { .. }));
    }

    #[test]
    fn test_result_carries_the_params_used() {
        let loader = StubLoader::new(vec![vec![]]);
        let mut detector = FaceDetector::new(loader);

        let params = DetectionParams {
            min_face_size: 40,
            ..DetectionParams::default()
        };
        let result = detector.detect_faces(&test_image(), params).unwrap();

        assert!(result.is_empty());
        assert_eq!(result.params.min_face_size, 40);
    }

    #[test]
    fn test_face_images_crops_each_region() {
        let detector = FaceDetector::new(BrokenLoader);
        let regions = [FaceRegion::new(0, 0, 8, 8), FaceRegion::new(10, 10, 6, 4)];

        let crops = detector.face_images(&test_image(), &regions);

        assert_eq!(crops.len(), 2);
        assert_eq!((crops[1].width(), crops[1].height()), (6, 4));
    }
}
