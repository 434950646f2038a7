//! Shared result types for the snapsight workspace.
//!
//! These are the records the engine hands back to callers: OCR extraction
//! results with their ranking score, and face detection results with the
//! parameters used to produce them.

pub mod extraction;
pub mod faces;

pub use extraction::{ExtractionResult, Score};
pub use faces::{DetectionParams, FaceDetectionResult, FaceRegion};
