//! Text recognition: dictionary, OCR backend, and the threshold sweep.

pub mod dictionary;
pub mod engine;
pub mod extractor;

pub use dictionary::{DictionaryError, DictionaryLookup, WordListDictionary};
pub use engine::{find_models_dir, OcrError, OcrsRecognizer, TextRecognizer};
pub use extractor::{TextExtractor, BINARIZE_THRESHOLDS};
