// WHY: regex-automata boundary search; the regex crates have no lookbehind,
// so the terminal punctuation is re-attached to the left segment by offset

use anyhow::Result;
use regex_automata::meta::Regex;
use tracing::debug;

use super::normalization::clean_sentence_into;
use super::Sentence;

/// Configuration for sentence boundary detection rules
#[derive(Debug, Clone)]
pub struct SegmenterRules {
    /// Characters that end a sentence when followed by whitespace
    pub end_punctuation: Vec<char>,
}

impl Default for SegmenterRules {
    fn default() -> Self {
        Self {
            end_punctuation: vec!['.', '!', '?'],
        }
    }
}

impl SegmenterRules {
    /// Boundary pattern: one terminal character followed by a whitespace run
    fn boundary_pattern(&self) -> String {
        let mut class = String::new();
        for &ch in &self.end_punctuation {
            if ch.is_ascii_punctuation() {
                class.push('\\');
            }
            class.push(ch);
        }
        format!(r"[{class}]\s+")
    }
}

/// Sentence Segmenter: splits raw text into cleaned sentences
#[derive(Debug, Clone)]
pub struct SentenceSegmenter {
    boundary: Regex,
}

impl SentenceSegmenter {
    /// Create segmenter with custom rules
    pub fn new(rules: SegmenterRules) -> Result<Self> {
        if rules.end_punctuation.is_empty() {
            anyhow::bail!("Segmenter rules need at least one end punctuation character");
        }

        let pattern = rules.boundary_pattern();
        let boundary = Regex::new(&pattern)?;
        debug!("Compiled sentence boundary pattern: {}", pattern);

        Ok(Self { boundary })
    }

    /// Create segmenter splitting on `.`, `!` and `?`
    pub fn with_default_rules() -> Result<Self> {
        Self::new(SegmenterRules::default())
    }

    /// Split `text` into sentences.
    ///
    /// Blank input yields an empty vector. Segments that are blank after
    /// cleanup are dropped, so runs like "..." or "?!" never produce empty
    /// sentences.
    pub fn parse(&self, text: &str) -> Vec<Sentence> {
        let mut sentences = Vec::new();
        if text.trim().is_empty() {
            return sentences;
        }

        let mut buffer = String::new();
        let mut segment_start = 0;

        for boundary in self.boundary.find_iter(text) {
            // the punctuation belongs to the left segment, the whitespace is consumed
            let punct_len = text[boundary.start()..]
                .chars()
                .next()
                .map_or(1, char::len_utf8);
            let segment_end = boundary.start() + punct_len;

            push_cleaned(&text[segment_start..segment_end], &mut buffer, &mut sentences);
            segment_start = boundary.end();
        }
        push_cleaned(&text[segment_start..], &mut buffer, &mut sentences);

        debug!("Segmented {} chars into {} sentences", text.len(), sentences.len());
        sentences
    }
}

fn push_cleaned(segment: &str, buffer: &mut String, sentences: &mut Vec<Sentence>) {
    clean_sentence_into(segment, buffer);
    if !buffer.is_empty() {
        sentences.push(Sentence::new(buffer.as_str()));
    }
}
