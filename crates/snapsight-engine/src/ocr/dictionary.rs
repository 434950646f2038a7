//! Dictionary of reference words used to rank OCR output.

use std::collections::HashSet;
use std::path::{Path, PathBuf};

use thiserror::Error;
use tracing::debug;

/// Error raised when the word list cannot be read.
#[derive(Debug, Error)]
#[error("failed to read dictionary file {}", path.display())]
pub struct DictionaryError {
    path: PathBuf,
    #[source]
    source: std::io::Error,
}

impl DictionaryError {
    /// Path of the dictionary file that could not be read.
    pub fn path(&self) -> &Path {
        &self.path
    }
}

/// Membership test against a fixed vocabulary.
///
/// Callers pass pre-lowercased words; the lookup itself does no
/// normalization.
pub trait DictionaryLookup {
    /// Whether `word` belongs to the vocabulary.
    fn contains(&self, word: &str) -> bool;
}

/// Dictionary backed by a newline-separated word list, loaded once at
/// construction.
#[derive(Debug, Clone)]
pub struct WordListDictionary {
    words: HashSet<String>,
    path: PathBuf,
}

impl WordListDictionary {
    /// Load a word list from the given file.
    pub fn load(path: impl Into<PathBuf>) -> Result<Self, DictionaryError> {
        let path = path.into();
        let data = std::fs::read_to_string(&path).map_err(|source| DictionaryError {
            path: path.clone(),
            source,
        })?;

        let words: HashSet<String> = data
            .lines()
            .map(str::trim)
            .filter(|word| !word.is_empty())
            .map(str::to_string)
            .collect();

        debug!("loaded {} dictionary words from {}", words.len(), path.display());
        Ok(Self { words, path })
    }

    /// Load the default word list under the resources directory.
    pub fn load_default() -> Result<Self, DictionaryError> {
        Self::load(crate::default_dictionary_file())
    }

    /// Path of the word list this dictionary was loaded from.
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Number of words in the vocabulary.
    pub fn len(&self) -> usize {
        self.words.len()
    }

    /// Whether the vocabulary is empty.
    pub fn is_empty(&self) -> bool {
        self.words.is_empty()
    }
}

impl DictionaryLookup for WordListDictionary {
    fn contains(&self, word: &str) -> bool {
        self.words.contains(word)
    }
}
