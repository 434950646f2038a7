//! Output formatting for CLI results.

use snapsight_types::{ExtractionResult, FaceDetectionResult};

/// Output formatter.
pub struct Output {
    json: bool,
}

impl Output {
    /// Create a new output formatter.
    pub fn new(json: bool) -> Self {
        Self { json }
    }

    /// Print a text extraction result.
    pub fn print_extraction(&self, result: &ExtractionResult) -> anyhow::Result<()> {
        if self.json {
            println!("{}", serde_json::to_string(result)?);
        } else if result.score.word_count == 0 {
            println!("No dictionary words recognized (threshold {})", result.threshold);
        } else {
            println!(
                "Recognized {} dictionary word(s) ({} characters) at threshold {}:",
                result.score.word_count, result.score.total_length, result.threshold
            );
            println!("{}", result.text);
        }
        Ok(())
    }

    /// Print a face detection result.
    pub fn print_faces(&self, result: &FaceDetectionResult) -> anyhow::Result<()> {
        if self.json {
            println!("{}", serde_json::to_string(result)?);
        } else if result.is_empty() {
            println!("No faces detected");
        } else {
            println!("Detected {} face(s):", result.len());
            for region in &result.regions {
                println!(
                    "  ({}, {}) size {}x{}",
                    region.x, region.y, region.width, region.height
                );
            }
        }
        Ok(())
    }

    /// Print the supported load/save extension lists.
    pub fn print_formats(&self, load: &[&str], save: &[&str]) -> anyhow::Result<()> {
        if self.json {
            let value = serde_json::json!({ "load": load, "save": save });
            println!("{}", serde_json::to_string(&value)?);
        } else {
            println!("Load: {}", load.join(", "));
            println!("Save: {}", save.join(", "));
        }
        Ok(())
    }
}
