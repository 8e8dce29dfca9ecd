//! Configuration for analysis, report layout and text reading.
//!
//! Every section has a `Default` and deserializes with `#[serde(default)]`,
//! so a TOML file only needs the keys it wants to change:
//!
//! ```toml
//! [analysis]
//! bytes_per_char = 4
//!
//! [report]
//! top_n = 20
//! words_per_line = 8
//! ```

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::path::Path;
use tracing::debug;

/// Storage cost of one character in a UTF-16 backed string
pub const DEFAULT_BYTES_PER_CHAR: usize = 2;

/// Top-level configuration loaded from an optional TOML file
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct AppConfig {
    pub analysis: AnalysisConfig,
    pub report: ReportConfig,
    pub reader: ReaderConfig,
}

impl AppConfig {
    /// Load configuration from a TOML file
    pub async fn load<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();
        let content = tokio::fs::read_to_string(path)
            .await
            .with_context(|| format!("Failed to read config file {}", path.display()))?;
        let config = Self::from_toml_str(&content)
            .with_context(|| format!("Invalid config file {}", path.display()))?;
        debug!(?config, "Loaded configuration from {}", path.display());
        Ok(config)
    }

    pub fn from_toml_str(content: &str) -> Result<Self> {
        Ok(toml::from_str(content)?)
    }

    /// Load from `path` when given, otherwise use defaults
    pub async fn load_or_default<P: AsRef<Path>>(path: Option<P>) -> Result<Self> {
        match path {
            Some(path) => Self::load(path).await,
            None => Ok(Self::default()),
        }
    }
}

/// Settings for the stats calculator
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct AnalysisConfig {
    /// Bytes charged per raw sentence character in the memory estimate
    pub bytes_per_char: usize,
}

impl Default for AnalysisConfig {
    fn default() -> Self {
        Self {
            bytes_per_char: DEFAULT_BYTES_PER_CHAR,
        }
    }
}

/// Layout settings for the report formatter
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ReportConfig {
    /// Rows in the summary and markdown top-word tables
    pub top_n: usize,
    /// Word column floor in summary mode
    pub summary_min_word_width: usize,
    /// Word column floor in full mode
    pub full_min_word_width: usize,
    /// Count column floor in summary mode
    pub count_column_width: usize,
    /// Count column floor in full mode (count plus percentage)
    pub full_count_column_width: usize,
    /// Unique words per line in the markdown listing
    pub words_per_line: usize,
    pub separator_width: usize,
    pub full_separator_width: usize,
}

impl Default for ReportConfig {
    fn default() -> Self {
        Self {
            top_n: 10,
            summary_min_word_width: 8,
            full_min_word_width: 12,
            count_column_width: 8,
            full_count_column_width: 10,
            words_per_line: 5,
            separator_width: 50,
            full_separator_width: 60,
        }
    }
}

/// Configuration for file reading behavior
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ReaderConfig {
    /// Buffer size for async reading (default: 8KB)
    pub buffer_size: usize,
    /// Read files through a memory map instead of buffered async I/O
    pub use_mmap: bool,
    /// Turn read/save failures into pipeline errors
    pub fail_fast: bool,
}

impl Default for ReaderConfig {
    fn default() -> Self {
        Self {
            buffer_size: 8192,
            use_mmap: false,
            fail_fast: false,
        }
    }
}
