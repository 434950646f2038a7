//! Face detection result types.

use serde::{Deserialize, Serialize};

/// Bounding box of a detected face.
///
/// `x`/`y` can be negative when a detection window extends past the top
/// or left edge of the image; consumers clamp when cropping.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct FaceRegion {
    /// Left edge X coordinate.
    pub x: i32,
    /// Top edge Y coordinate.
    pub y: i32,
    /// Width of the bounding box.
    pub width: u32,
    /// Height of the bounding box.
    pub height: u32,
}

impl FaceRegion {
    /// Create a region from its corner and size.
    pub fn new(x: i32, y: i32, width: u32, height: u32) -> Self {
        Self {
            x,
            y,
            width,
            height,
        }
    }

    /// X coordinate one past the right edge.
    pub fn right(&self) -> i32 {
        self.x + self.width as i32
    }

    /// Y coordinate one past the bottom edge.
    pub fn bottom(&self) -> i32 {
        self.y + self.height as i32
    }
}

/// Knobs forwarded to the classifier backend for a detection pass.
///
/// Defaults follow the backend's recommended settings for frontal face
/// models.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct DetectionParams {
    /// Smallest face size, in pixels, the detector will report.
    pub min_face_size: u32,

    /// Minimum classifier score for a window to count as a face.
    pub score_threshold: f64,

    /// Scale step between levels of the detection image pyramid.
    pub pyramid_scale_factor: f32,

    /// Step, in pixels, of the sliding detection window.
    pub slide_window_step: u32,
}

impl Default for DetectionParams {
    fn default() -> Self {
        Self {
            min_face_size: 20,
            score_threshold: 2.0,
            pyramid_scale_factor: 0.8,
            slide_window_step: 4,
        }
    }
}

/// Face regions aggregated across every loaded classifier model, plus the
/// parameters the pass ran with.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FaceDetectionResult {
    /// All detected regions, in classifier order.
    pub regions: Vec<FaceRegion>,

    /// Parameters used for this pass.
    pub params: DetectionParams,
}

impl FaceDetectionResult {
    /// Bundle detected regions with the parameters that produced them.
    pub fn new(regions: Vec<FaceRegion>, params: DetectionParams) -> Self {
        Self { regions, params }
    }

    /// Number of detected faces.
    pub fn len(&self) -> usize {
        self.regions.len()
    }

    /// Whether no faces were detected.
    pub fn is_empty(&self) -> bool {
        self.regions.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_region_edges() {
        let region = FaceRegion::new(10, 20, 30, 40);
        assert_eq!(region.right(), 40);
        assert_eq!(region.bottom(), 60);
    }

    #[test]
    fn test_region_edges_with_negative_origin() {
        let region = FaceRegion::new(-5, -3, 10, 10);
        assert_eq!(region.right(), 5);
        assert_eq!(region.bottom(), 7);
    }

    #[test]
    fn test_detection_result_serializes() {
        let result = FaceDetectionResult::new(
            vec![FaceRegion::new(1, 2, 3, 4)],
            DetectionParams::default(),
        );

        let json = serde_json::to_string(&result).unwrap();
        assert!(json.contains("\"regions\""));
        assert!(json.contains("\"min_face_size\":20"));

        let back: FaceDetectionResult = serde_json::from_str(&json).unwrap();
        assert_eq!(back, result);
    }
}
