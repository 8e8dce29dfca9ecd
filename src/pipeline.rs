// WHY: explicit wiring of the collaborators around the pure core:
// source -> segmenter -> calculator -> formatter -> sink

use anyhow::Result;
use serde::Serialize;
use std::path::Path;
use std::time::Instant;
use tracing::{info, warn};

use crate::config::AppConfig;
use crate::reader::TextSource;
use crate::report::{ReportFormatter, ReportMode};
use crate::sentence::{Sentence, SentenceSegmenter};
use crate::sink::ReportSink;
use crate::stats::{StatsCalculator, TextStats};

/// Per-run statistics written by `--stats-out`
#[derive(Serialize, Debug, Clone)]
pub struct RunStats {
    /// Input file path or interactive source label
    pub source: String,
    /// Number of characters read
    pub chars_processed: u64,
    /// Number of sentences detected
    pub sentences_detected: u64,
    /// Wall time for read, analysis, formatting and save
    pub processing_time_ms: u64,
    /// Throughput in characters per second
    pub chars_per_sec: f64,
    /// Processing status (success, failed)
    pub status: String,
    /// Error message if reading or saving failed
    pub error: Option<String>,
    /// Where the report was saved; `None` when not requested or the save failed
    pub destination: Option<String>,
    pub stats: TextStats,
}

/// Sentences plus their aggregate statistics
#[derive(Debug, Clone)]
pub struct Analysis {
    pub sentences: Vec<Sentence>,
    pub stats: TextStats,
}

/// Result of a full pipeline run
#[derive(Debug, Clone)]
pub struct PipelineOutput {
    pub report: String,
    pub analysis: Analysis,
    pub run_stats: RunStats,
}

pub struct TextPipeline {
    segmenter: SentenceSegmenter,
    calculator: StatsCalculator,
    formatter: ReportFormatter,
    fail_fast: bool,
}

impl TextPipeline {
    pub fn new(config: &AppConfig) -> Result<Self> {
        Ok(Self {
            segmenter: SentenceSegmenter::with_default_rules()?,
            calculator: StatsCalculator::new(&config.analysis),
            formatter: ReportFormatter::new(config.report.clone()),
            fail_fast: config.reader.fail_fast,
        })
    }

    pub fn with_default_config() -> Result<Self> {
        Self::new(&AppConfig::default())
    }

    /// Segment and aggregate `text`; pure, never fails
    pub fn analyze(&self, text: &str) -> Analysis {
        let sentences = self.segmenter.parse(text);
        let stats = self.calculator.calculate(&sentences);
        Analysis { sentences, stats }
    }

    pub fn render(&self, analysis: &Analysis, mode: ReportMode) -> String {
        self.formatter
            .format(&analysis.stats, mode, Some(analysis.sentences.as_slice()))
    }

    /// Read from `source`, analyze, render in `mode`, and save to
    /// `destination` through `sink` when one is given.
    ///
    /// Read and save failures are recorded in the returned [`RunStats`];
    /// with `fail_fast` they become errors instead.
    pub async fn run<S, K>(
        &self,
        source: &mut S,
        locator: &str,
        mode: ReportMode,
        sink: &K,
        destination: Option<&Path>,
    ) -> Result<PipelineOutput>
    where
        S: TextSource,
        K: ReportSink,
    {
        let start_time = Instant::now();

        let (text, read_stats) = source.read(locator).await;
        let mut error = read_stats.read_error.clone();
        if let Some(ref read_error) = error {
            if self.fail_fast {
                anyhow::bail!("{}", read_error);
            }
            warn!("Continuing with empty text after read failure: {}", read_error);
        }

        let analysis = self.analyze(&text);
        let report = self.render(&analysis, mode);

        let mut saved_to = None;
        if let Some(destination) = destination {
            let save_stats = sink.save(&report, destination).await;
            match save_stats.save_error {
                Some(save_error) if self.fail_fast => anyhow::bail!("{}", save_error),
                Some(save_error) => {
                    error.get_or_insert(save_error);
                }
                None => saved_to = Some(save_stats.destination),
            }
        }

        let elapsed = start_time.elapsed();
        let chars_processed = text.chars().count() as u64;
        let secs = elapsed.as_secs_f64();
        let run_stats = RunStats {
            source: read_stats.source,
            chars_processed,
            sentences_detected: analysis.sentences.len() as u64,
            processing_time_ms: elapsed.as_millis() as u64,
            chars_per_sec: if secs > 0.0 { chars_processed as f64 / secs } else { 0.0 },
            status: if error.is_none() { "success" } else { "failed" }.to_string(),
            error,
            destination: saved_to,
            stats: analysis.stats.clone(),
        };

        info!(
            "Processed {}: {} sentences, {} words, {} unique",
            run_stats.source,
            run_stats.sentences_detected,
            analysis.stats.word_count(),
            analysis.stats.unique_word_count()
        );

        Ok(PipelineOutput {
            report,
            analysis,
            run_stats,
        })
    }
}

/// Write run statistics as pretty JSON, creating parent directories
pub async fn write_run_stats(path: &Path, run_stats: &RunStats) -> Result<()> {
    let content = serde_json::to_string_pretty(run_stats)?;

    if let Some(parent) = path.parent() {
        if !parent.as_os_str().is_empty() {
            tokio::fs::create_dir_all(parent).await?;
        }
    }

    tokio::fs::write(path, content).await?;
    Ok(())
}
