//! Text extraction result types.

use serde::{Deserialize, Serialize};

/// Ranking of an OCR transcription against a reference dictionary.
///
/// Ordering is lexicographic: `word_count` is compared first and
/// `total_length` breaks ties. The derived `Ord` relies on the field
/// order below, so do not reorder the fields.
#[derive(
    Debug, Clone, Copy, Default, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize,
)]
pub struct Score {
    /// Number of whitespace-separated tokens found in the dictionary.
    pub word_count: u32,

    /// Total character length of the matched tokens.
    pub total_length: u32,
}

impl Score {
    /// Create a score from its two components.
    pub fn new(word_count: u32, total_length: u32) -> Self {
        Self {
            word_count,
            total_length,
        }
    }
}

/// Outcome of a threshold-sweep text extraction.
///
/// Created once at the end of the sweep and never mutated afterwards.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ExtractionResult {
    /// Transcription produced at the winning threshold. Empty when no
    /// threshold produced a dictionary-matched word.
    pub text: String,

    /// Score of `text` against the dictionary.
    pub score: Score,

    /// Binarization cutoff that produced `text`.
    pub threshold: u8,
}
