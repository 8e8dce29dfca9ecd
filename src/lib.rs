pub mod config;
pub mod pipeline;
pub mod reader;
pub mod report;
pub mod sentence;
pub mod sink;
pub mod stats;

// Re-export main types for convenient access
pub use sentence::{Sentence, SentenceSegmenter, Word};
pub use stats::{StatsCalculator, TextStats};
pub use report::{ReportFormatter, ReportMode};

pub use config::{AppConfig, DEFAULT_BYTES_PER_CHAR};
pub use pipeline::{Analysis, RunStats, TextPipeline};
pub use reader::{ConsoleTextSource, FileTextSource, TextSource};
pub use sink::{FileReportSink, ReportSink};
