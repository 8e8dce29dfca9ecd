// WHY: value types shared by segmentation, aggregation and reporting.
// Words are derived from the raw sentence on demand and cached.

use std::fmt;
use std::sync::OnceLock;

use serde::Serialize;

pub mod normalization;
pub mod segmenter;

pub use normalization::{clean_sentence, clean_sentence_into, normalize_words};
pub use segmenter::SentenceSegmenter;

/// One normalized token: never blank, first character uppercased
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize)]
#[serde(transparent)]
pub struct Word(String);

impl Word {
    /// Wrap an already normalized token.
    ///
    /// # Panics
    /// Panics if `text` is blank; a blank word is a caller bug.
    pub fn new(text: impl Into<String>) -> Self {
        let text = text.into();
        assert!(!text.trim().is_empty(), "Word must not be blank");
        Self(text)
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Length in characters, as counted by the stats calculator
    pub fn char_len(&self) -> usize {
        self.0.chars().count()
    }

    pub fn into_string(self) -> String {
        self.0
    }
}

impl fmt::Display for Word {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl AsRef<str> for Word {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

/// One cleaned logical sentence
#[derive(Debug, Clone)]
pub struct Sentence {
    raw_content: String,
    words: OnceLock<Vec<Word>>,
}

impl Sentence {
    pub fn new(raw_content: impl Into<String>) -> Self {
        Self {
            raw_content: raw_content.into(),
            words: OnceLock::new(),
        }
    }

    /// Cleaned sentence text exactly as the segmenter produced it
    pub fn raw(&self) -> &str {
        &self.raw_content
    }

    /// Length of the raw text in characters
    pub fn char_len(&self) -> usize {
        self.raw_content.chars().count()
    }

    /// Normalized words in order of appearance, computed on first access
    pub fn words(&self) -> &[Word] {
        self.words.get_or_init(|| normalize_words(&self.raw_content))
    }

    /// Normalized words joined by single spaces
    pub fn normalized_text(&self) -> String {
        self.words()
            .iter()
            .map(Word::as_str)
            .collect::<Vec<_>>()
            .join(" ")
    }
}

impl PartialEq for Sentence {
    fn eq(&self, other: &Self) -> bool {
        self.raw_content == other.raw_content
    }
}

impl Eq for Sentence {}

impl fmt::Display for Sentence {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.raw_content)
    }
}

impl From<&str> for Sentence {
    fn from(raw: &str) -> Self {
        Self::new(raw)
    }
}
