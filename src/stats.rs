// WHY: the aggregation step of the pipeline; pure, no I/O, never fails

use serde::Serialize;
use std::collections::BTreeMap;
use tracing::debug;

use crate::config::{AnalysisConfig, DEFAULT_BYTES_PER_CHAR};
use crate::sentence::Sentence;

/// Immutable statistics snapshot for a set of sentences
///
/// `word_meeting_rate` sums to `word_count` and has `unique_word_count` keys.
#[derive(Serialize, Debug, Clone, Default, PartialEq, Eq)]
pub struct TextStats {
    word_count: usize,
    char_count: usize,
    unique_word_count: usize,
    word_meeting_rate: BTreeMap<String, usize>,
    memory_used: usize,
}

impl TextStats {
    /// Total word occurrences across all sentences
    pub fn word_count(&self) -> usize {
        self.word_count
    }

    /// Sum of normalized word lengths in characters (separators excluded)
    pub fn char_count(&self) -> usize {
        self.char_count
    }

    pub fn unique_word_count(&self) -> usize {
        self.unique_word_count
    }

    /// Normalized word -> occurrence count
    pub fn word_meeting_rate(&self) -> &BTreeMap<String, usize> {
        &self.word_meeting_rate
    }

    /// Estimated bytes held by the raw sentence text
    pub fn memory_used(&self) -> usize {
        self.memory_used
    }

    /// Occurrences of one normalized word, 0 when absent
    pub fn frequency(&self, word: &str) -> usize {
        self.word_meeting_rate.get(word).copied().unwrap_or(0)
    }

    pub fn is_empty(&self) -> bool {
        self.word_count == 0
    }

    /// `char_count / word_count`, 0 for an empty snapshot
    pub fn average_word_length(&self) -> f64 {
        if self.word_count == 0 {
            0.0
        } else {
            self.char_count as f64 / self.word_count as f64
        }
    }

    /// Share of all word occurrences taken by `count`, in percent
    pub fn percentage_of_total(&self, count: usize) -> f64 {
        if self.word_count == 0 {
            0.0
        } else {
            count as f64 / self.word_count as f64 * 100.0
        }
    }

    /// Combine two snapshots by adding counts key-wise.
    ///
    /// Associative and commutative, so per-sentence snapshots can be
    /// reduced in any grouping and give the same result as one pass.
    pub fn merge(mut self, other: &TextStats) -> TextStats {
        self.word_count += other.word_count;
        self.char_count += other.char_count;
        self.memory_used += other.memory_used;
        for (word, count) in &other.word_meeting_rate {
            *self.word_meeting_rate.entry(word.clone()).or_insert(0) += count;
        }
        self.unique_word_count = self.word_meeting_rate.len();
        self
    }
}

/// Stats Aggregator
#[derive(Debug, Clone)]
pub struct StatsCalculator {
    bytes_per_char: usize,
}

impl Default for StatsCalculator {
    fn default() -> Self {
        Self {
            bytes_per_char: DEFAULT_BYTES_PER_CHAR,
        }
    }
}

impl StatsCalculator {
    pub fn new(config: &AnalysisConfig) -> Self {
        Self {
            bytes_per_char: config.bytes_per_char,
        }
    }

    pub fn bytes_per_char(&self) -> usize {
        self.bytes_per_char
    }

    /// Aggregate word, character and frequency statistics over `sentences`
    pub fn calculate(&self, sentences: &[Sentence]) -> TextStats {
        let mut word_count = 0;
        let mut char_count = 0;
        let mut word_meeting_rate: BTreeMap<String, usize> = BTreeMap::new();

        for word in sentences.iter().flat_map(|sentence| sentence.words()) {
            word_count += 1;
            char_count += word.char_len();
            *word_meeting_rate.entry(word.as_str().to_string()).or_insert(0) += 1;
        }

        let memory_used = sentences
            .iter()
            .map(|sentence| sentence.char_len() * self.bytes_per_char)
            .sum();

        debug!(
            "Calculated stats: {} sentences, {} words, {} unique",
            sentences.len(),
            word_count,
            word_meeting_rate.len()
        );

        TextStats {
            word_count,
            char_count,
            unique_word_count: word_meeting_rate.len(),
            word_meeting_rate,
            memory_used,
        }
    }
}
