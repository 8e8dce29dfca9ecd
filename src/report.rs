//! Report Formatter: renders a [`TextStats`] snapshot as plain text or Markdown.
//!
//! Word rankings sort by occurrence count descending and break ties by the
//! normalized word in ascending order, so every mode renders the same output
//! for the same input.

use clap::ValueEnum;
use serde::{Deserialize, Serialize};
use std::fmt;

use crate::config::ReportConfig;
use crate::sentence::Sentence;
use crate::stats::TextStats;

const BYTES_PER_KB: f64 = 1024.0;

/// Report layout
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize, ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum ReportMode {
    /// Headline numbers and the top words
    #[default]
    Summary,
    /// Every word with its share of the total, plus averages
    Full,
    /// Markdown document with statistics, sentences and the unique word list
    Markdown,
}

impl ReportMode {
    /// File extension used for saved reports
    pub fn extension(self) -> &'static str {
        match self {
            ReportMode::Summary | ReportMode::Full => "txt",
            ReportMode::Markdown => "md",
        }
    }
}

impl fmt::Display for ReportMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            ReportMode::Summary => "summary",
            ReportMode::Full => "full",
            ReportMode::Markdown => "markdown",
        };
        f.write_str(name)
    }
}

/// All frequency entries, most frequent first, ties in ascending word order
pub fn ranked_words(stats: &TextStats) -> Vec<(&str, usize)> {
    let mut entries: Vec<(&str, usize)> = stats
        .word_meeting_rate()
        .iter()
        .map(|(word, &count)| (word.as_str(), count))
        .collect();
    entries.sort_by(|a, b| b.1.cmp(&a.1).then_with(|| a.0.cmp(b.0)));
    entries
}

/// The `limit` highest ranked words
pub fn top_words(stats: &TextStats, limit: usize) -> Vec<(&str, usize)> {
    let mut entries = ranked_words(stats);
    entries.truncate(limit);
    entries
}

/// Unique words in ascending order
pub fn unique_words_sorted(stats: &TextStats) -> Vec<&str> {
    let mut words: Vec<&str> = stats.word_meeting_rate().keys().map(String::as_str).collect();
    words.sort_unstable();
    words
}

#[derive(Debug, Clone, Default)]
pub struct ReportFormatter {
    config: ReportConfig,
}

impl ReportFormatter {
    pub fn new(config: ReportConfig) -> Self {
        Self { config }
    }

    pub fn config(&self) -> &ReportConfig {
        &self.config
    }

    /// Render `stats` in the given mode.
    ///
    /// `sentences` adds sentence metrics to full and markdown output and the
    /// sentence list to markdown output; summary mode ignores it.
    pub fn format(&self, stats: &TextStats, mode: ReportMode, sentences: Option<&[Sentence]>) -> String {
        match mode {
            ReportMode::Summary => self.format_summary(stats),
            ReportMode::Full => self.format_full(stats, sentences),
            ReportMode::Markdown => self.format_markdown(stats, sentences),
        }
    }

    fn format_summary(&self, stats: &TextStats) -> String {
        let separator = "=".repeat(self.config.separator_width);
        let top = top_words(stats, self.config.top_n);
        let rows: Vec<(String, String)> = top
            .iter()
            .map(|(word, count)| (word.to_string(), count.to_string()))
            .collect();

        let mut lines = vec![
            separator.clone(),
            centered("TEXT STATISTICS", self.config.separator_width),
            separator.clone(),
            String::new(),
            "SUMMARY:".to_string(),
            format!("   • Words: {}", stats.word_count()),
            format!("   • Characters: {}", stats.char_count()),
            format!("   • Unique words: {}", stats.unique_word_count()),
            format!("   • Memory used: {} KB", kilobytes(stats.memory_used())),
            String::new(),
            format!("TOP {} MOST FREQUENT WORDS:", self.config.top_n),
        ];
        lines.push(render_table(
            ("WORD", "COUNT"),
            &rows,
            self.config.summary_min_word_width,
            self.config.count_column_width,
        ));
        lines.push(String::new());
        lines.push(separator);

        lines.join("\n")
    }

    fn format_full(&self, stats: &TextStats, sentences: Option<&[Sentence]>) -> String {
        let separator = "=".repeat(self.config.full_separator_width);
        let rows: Vec<(String, String)> = ranked_words(stats)
            .iter()
            .map(|(word, count)| {
                let share = format!("{} ({:.1}%)", count, stats.percentage_of_total(*count));
                (word.to_string(), share)
            })
            .collect();

        let mut lines = vec![
            separator.clone(),
            centered("FULL TEXT STATISTICS", self.config.full_separator_width),
            separator.clone(),
            String::new(),
            "SUMMARY:".to_string(),
            format!("   • Total words: {}", stats.word_count()),
            format!("   • Characters: {}", stats.char_count()),
            format!("   • Unique words: {}", stats.unique_word_count()),
            format!("   • Memory used: {} KB", kilobytes(stats.memory_used())),
            format!(
                "   • Average word length: {:.1} characters",
                stats.average_word_length()
            ),
        ];
        if let Some(sentences) = sentences {
            lines.push(format!("   • Sentences: {}", sentences.len()));
            lines.push(format!(
                "   • Average sentence length: {:.1} words",
                average_sentence_length(stats, sentences)
            ));
        }
        lines.push(String::new());
        lines.push(format!(
            "WORD FREQUENCY ({} unique words):",
            stats.unique_word_count()
        ));
        lines.push(render_table(
            ("WORD", "FREQUENCY"),
            &rows,
            self.config.full_min_word_width,
            self.config.full_count_column_width,
        ));

        if let Some(sentences) = sentences {
            lines.push(String::new());
            lines.push("NORMALIZED TEXT:".to_string());
            if sentences.is_empty() {
                lines.push("   No sentences".to_string());
            }
            for sentence in sentences {
                lines.push(format!("   {}", sentence.normalized_text()));
            }
        }

        lines.push(String::new());
        lines.push(separator);
        lines.join("\n")
    }

    fn format_markdown(&self, stats: &TextStats, sentences: Option<&[Sentence]>) -> String {
        let mut lines = vec![
            "# Text Analysis".to_string(),
            String::new(),
            "## Document Statistics".to_string(),
            String::new(),
        ];

        if let Some(sentences) = sentences {
            lines.push(format!("- **Sentences:** {}", sentences.len()));
        }
        lines.push(format!("- **Words:** {}", stats.word_count()));
        lines.push(format!("- **Unique words:** {}", stats.unique_word_count()));
        lines.push(format!("- **Characters:** {}", stats.char_count()));
        lines.push(format!("- **Memory used:** {} KB", kilobytes(stats.memory_used())));
        lines.push(format!(
            "- **Average word length:** {:.1} characters",
            stats.average_word_length()
        ));
        if let Some(sentences) = sentences {
            lines.push(format!(
                "- **Average sentence length:** {:.1} words",
                average_sentence_length(stats, sentences)
            ));
        }

        lines.push(String::new());
        lines.push(format!("### Word Frequency (top {})", self.config.top_n));
        lines.push(String::new());
        let top = top_words(stats, self.config.top_n);
        if top.is_empty() {
            lines.push("_No words found._".to_string());
        } else {
            lines.push("| # | Word | Count |".to_string());
            lines.push("|---:|------|------:|".to_string());
            for (rank, (word, count)) in top.iter().enumerate() {
                lines.push(format!("| {} | `{}` | {} |", rank + 1, word, count));
            }
        }

        lines.push(String::new());
        lines.push("## Content".to_string());
        lines.push(String::new());
        match sentences {
            Some(sentences) if !sentences.is_empty() => {
                for (index, sentence) in sentences.iter().enumerate() {
                    lines.push(format!("{}. {}", index + 1, sentence.raw()));
                }
            }
            _ => lines.push("_No sentences._".to_string()),
        }

        lines.push(String::new());
        lines.push("## Unique Words".to_string());
        lines.push(String::new());
        let unique = unique_words_sorted(stats);
        if unique.is_empty() {
            lines.push("_No words found._".to_string());
        } else {
            lines.push(wrap_word_list(&unique, self.config.words_per_line));
        }

        lines.join("\n")
    }
}

/// Comma separated, backtick quoted words with a line break every
/// `words_per_line` words
pub fn wrap_word_list(words: &[&str], words_per_line: usize) -> String {
    words
        .chunks(words_per_line.max(1))
        .map(|chunk| {
            chunk
                .iter()
                .map(|word| format!("`{word}`"))
                .collect::<Vec<_>>()
                .join(", ")
        })
        .collect::<Vec<_>>()
        .join(",\n")
}

fn average_sentence_length(stats: &TextStats, sentences: &[Sentence]) -> f64 {
    if sentences.is_empty() {
        0.0
    } else {
        stats.word_count() as f64 / sentences.len() as f64
    }
}

fn kilobytes(bytes: usize) -> String {
    format!("{:.2}", bytes as f64 / BYTES_PER_KB)
}

fn centered(title: &str, width: usize) -> String {
    format!("{title:^width$}").trim_end().to_string()
}

/// Boxed two-column table; column widths grow to fit the widest cell.
///
/// Widths are counted in chars, not terminal display columns, so
/// double-width (CJK) words push the right border out of line.
fn render_table(
    header: (&str, &str),
    rows: &[(String, String)],
    min_word_width: usize,
    min_count_width: usize,
) -> String {
    if rows.is_empty() {
        return "   No word data".to_string();
    }

    let longest_word = rows
        .iter()
        .map(|(word, _)| word.chars().count())
        .chain(std::iter::once(header.0.chars().count()))
        .max()
        .unwrap_or(0);
    let longest_count = rows
        .iter()
        .map(|(_, count)| count.chars().count())
        .chain(std::iter::once(header.1.chars().count()))
        .max()
        .unwrap_or(0);

    let word_width = longest_word.max(min_word_width) + 2;
    let count_width = (longest_count + 2).max(min_count_width);
    let word_rule = "─".repeat(word_width);
    let count_rule = "─".repeat(count_width);

    let mut lines = Vec::with_capacity(rows.len() + 4);
    lines.push(format!("   ┌{word_rule}┬{count_rule}┐"));
    lines.push(table_row(header.0, header.1, word_width, count_width));
    lines.push(format!("   ├{word_rule}┼{count_rule}┤"));
    for (word, count) in rows {
        lines.push(table_row(word, count, word_width, count_width));
    }
    lines.push(format!("   └{word_rule}┴{count_rule}┘"));
    lines.join("\n")
}

fn table_row(word: &str, count: &str, word_width: usize, count_width: usize) -> String {
    let word_pad = word_width - 1;
    let count_pad = count_width - 1;
    format!("   │ {word:<word_pad$}│ {count:<count_pad$}│")
}
