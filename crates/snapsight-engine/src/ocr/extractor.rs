//! Threshold-optimized text extraction.
//!
//! OCR quality on low-contrast input depends heavily on the binarization
//! cutoff, so the extractor sweeps a fixed set of cutoffs and keeps the
//! transcription with the most dictionary-recognized words. Grayscale
//! conversion is threshold-independent and happens once, before the sweep.

use image::DynamicImage;
use snapsight_types::{ExtractionResult, Score};
use tracing::{trace, warn};

use crate::imaging::ImageOps;
use crate::ocr::dictionary::DictionaryLookup;
use crate::ocr::engine::TextRecognizer;

/// Binarization cutoffs swept during extraction: 32 to 224 inclusive in
/// steps of 32. The set and its order are part of the output contract.
pub const BINARIZE_THRESHOLDS: [u8; 7] = [32, 64, 96, 128, 160, 192, 224];

/// Text extractor that sweeps binarization thresholds and keeps the
/// best-scoring OCR transcription.
pub struct TextExtractor<P, R, D> {
    ops: P,
    recognizer: R,
    dictionary: D,
}

impl<P, R, D> TextExtractor<P, R, D>
where
    P: ImageOps,
    R: TextRecognizer,
    D: DictionaryLookup,
{
    /// Build an extractor from its three collaborators.
    pub fn new(ops: P, recognizer: R, dictionary: D) -> Self {
        Self {
            ops,
            recognizer,
            dictionary,
        }
    }

    /// Extract text from an image, optimizing the binarization threshold
    /// for dictionary-word yield.
    ///
    /// Each cutoff in [`BINARIZE_THRESHOLDS`] is tried in ascending order;
    /// a strictly better [`Score`] replaces the running best, so ties keep
    /// the lowest threshold. If no threshold yields a recognized word the
    /// result is empty text, score (0, 0), and the first threshold.
    ///
    /// A recognizer failure at one threshold counts as score (0, 0) for
    /// that threshold and the sweep continues; the failure is logged at
    /// warn level. The caller's image is never mutated.
    pub fn extract_text(&self, image: &DynamicImage) -> ExtractionResult {
        let grayscale = self.ops.grayscale(image);

        let mut best_score = Score::default();
        let mut best_threshold = BINARIZE_THRESHOLDS[0];
        let mut best_text = String::new();

        for &threshold in BINARIZE_THRESHOLDS.iter() {
            let binarized = self.ops.binarize(&grayscale, threshold);

            let text = match self.recognizer.recognize(&binarized) {
                Ok(text) => text,
                Err(e) => {
                    warn!("OCR failed at threshold {}: {}", threshold, e);
                    continue;
                }
            };

            let score = self.score_text(&text);
            trace!(
                "threshold {}: {} dictionary words, length {}",
                threshold,
                score.word_count,
                score.total_length
            );

            if score > best_score {
                best_score = score;
                best_threshold = threshold;
                best_text = text;
            }
        }

        ExtractionResult {
            text: best_text,
            score: best_score,
            threshold: best_threshold,
        }
    }

    /// Score a transcription: one point per whitespace-separated token the
    /// dictionary recognizes (after lowercasing), plus the total character
    /// length of those tokens as the tiebreaker component.
    fn score_text(&self, text: &str) -> Score {
        let mut score = Score::default();

        for token in text.split_whitespace() {
            let word = token.to_lowercase();
            if self.dictionary.contains(&word) {
                score.word_count += 1;
                score.total_length += word.chars().count() as u32;
            }
        }

        score
    }
}
