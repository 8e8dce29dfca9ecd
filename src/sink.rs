// WHY: Report Sink collaborator; write failures are logged and reported
// through SaveStats, never propagated

use std::path::{Path, PathBuf};
use tokio::io::{AsyncWriteExt, BufWriter};
use tracing::{info, warn};

use crate::report::ReportMode;

/// Outcome of one report write
#[derive(Debug, Clone, Default)]
pub struct SaveStats {
    pub destination: String,
    pub bytes_written: u64,
    pub duration_ms: u64,
    pub save_error: Option<String>,
}

impl SaveStats {
    pub fn is_success(&self) -> bool {
        self.save_error.is_none()
    }
}

/// Report Sink collaborator
#[allow(async_fn_in_trait)]
pub trait ReportSink {
    async fn save(&self, formatted_text: &str, destination: &Path) -> SaveStats;
}

/// Writes reports as UTF-8 files with a trailing newline
#[derive(Debug, Clone, Default)]
pub struct FileReportSink;

impl FileReportSink {
    pub fn new() -> Self {
        Self
    }

    async fn write_report(formatted_text: &str, destination: &Path) -> std::io::Result<u64> {
        if let Some(parent) = destination.parent() {
            if !parent.as_os_str().is_empty() {
                tokio::fs::create_dir_all(parent).await?;
            }
        }

        let file = tokio::fs::File::create(destination).await?;
        let mut writer = BufWriter::new(file);

        writer.write_all(formatted_text.as_bytes()).await?;
        let mut written = formatted_text.len() as u64;
        if !formatted_text.ends_with('\n') {
            writer.write_all(b"\n").await?;
            written += 1;
        }

        writer.flush().await?;
        Ok(written)
    }
}

impl ReportSink for FileReportSink {
    async fn save(&self, formatted_text: &str, destination: &Path) -> SaveStats {
        let start_time = std::time::Instant::now();
        let mut stats = SaveStats {
            destination: destination.display().to_string(),
            ..Default::default()
        };

        match Self::write_report(formatted_text, destination).await {
            Ok(written) => {
                stats.bytes_written = written;
                info!("Saved report to {} ({} bytes)", destination.display(), written);
            }
            Err(e) => {
                let error_msg = format!("Failed to save report to {}: {}", destination.display(), e);
                warn!("{}", error_msg);
                stats.save_error = Some(error_msg);
            }
        }

        stats.duration_ms = start_time.elapsed().as_millis() as u64;
        stats
    }
}

/// Report path next to the source: `<stem>_report.txt` or `<stem>_report.md`
pub fn report_path_for(source_path: &Path, mode: ReportMode) -> PathBuf {
    let mut report_path = source_path.to_path_buf();
    let file_stem = report_path
        .file_stem()
        .and_then(|s| s.to_str())
        .unwrap_or("text");
    report_path.set_file_name(format!("{file_stem}_report.{}", mode.extension()));
    report_path
}
