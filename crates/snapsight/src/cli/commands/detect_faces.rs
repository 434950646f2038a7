//! Detect-faces command implementation.

use anyhow::Context;
use image::DynamicImage;
use snapsight_engine::imaging::{load_image, save_image};
use snapsight_engine::{FaceDetector, SeetaModelLoader};
use snapsight_types::DetectionParams;

use crate::cli::DetectFacesArgs;
use crate::output::Output;

pub fn run(args: DetectFacesArgs, output: &Output) -> anyhow::Result<()> {
    let image = load_image(&args.image)?;

    let loader = if args.models.is_empty() {
        SeetaModelLoader::with_default_models()
    } else {
        SeetaModelLoader::new(args.models.clone())
    };
    let mut detector = FaceDetector::new(loader);

    let params = DetectionParams {
        min_face_size: args.min_face_size,
        score_threshold: args.score_threshold,
        ..DetectionParams::default()
    };
    let result = detector.detect_faces(&image, params)?;

    if let Some(path) = &args.highlight {
        let highlighted = detector.highlight_faces(&image, &result.regions);
        save_image(&DynamicImage::ImageRgba8(highlighted), path)?;
    }

    if let Some(dir) = &args.faces_dir {
        for (index, face) in detector
            .face_images(&image, &result.regions)
            .into_iter()
            .enumerate()
        {
            let path = dir.join(format!("face_{index}.png"));
            save_image(&face, &path)
                .with_context(|| format!("failed to save face crop {index}"))?;
        }
    }

    output
        .print_faces(&result)
        .context("failed to print face detection result")
}
