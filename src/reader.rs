use std::io;
use std::path::Path;
use tokio::fs::File;
use tokio::io::{AsyncBufRead, AsyncBufReadExt, AsyncReadExt, BufReader, Stdin};
use tracing::{debug, info, warn};

use crate::config::ReaderConfig;

/// Statistics for one text read
#[derive(Debug, Clone, Default)]
pub struct ReadStats {
    /// File path, or "<stdin>" style label for interactive input
    pub source: String,
    pub lines_read: u64,
    pub bytes_read: u64,
    pub duration_ms: u64,
    pub read_error: Option<String>,
}

impl ReadStats {
    pub fn is_success(&self) -> bool {
        self.read_error.is_none()
    }
}

/// Text Source collaborator.
///
/// `locator` is a file path for file sources and the terminator line for
/// interactive sources. Failures never escape: the text comes back empty
/// and the cause is recorded in [`ReadStats::read_error`].
#[allow(async_fn_in_trait)]
pub trait TextSource {
    async fn read(&mut self, locator: &str) -> (String, ReadStats);
}

/// Reads whole UTF-8 files, buffered async or memory mapped
#[derive(Debug, Clone, Default)]
pub struct FileTextSource {
    config: ReaderConfig,
}

impl FileTextSource {
    pub fn new(config: ReaderConfig) -> Self {
        Self { config }
    }

    /// Read the file at `file_path`; empty text plus `read_error` on failure
    pub async fn read_path<P: AsRef<Path>>(&self, file_path: P) -> (String, ReadStats) {
        let path = file_path.as_ref();
        let start_time = std::time::Instant::now();

        debug!("Starting read of file: {}", path.display());

        let is_dir = tokio::fs::metadata(path).await.is_ok_and(|m| m.is_dir());
        let result = if is_dir {
            Err(io::Error::new(io::ErrorKind::InvalidInput, "path is a directory"))
        } else if self.config.use_mmap {
            read_mmap(path).await
        } else {
            self.read_buffered(path).await
        };

        let mut stats = ReadStats {
            source: path.display().to_string(),
            ..Default::default()
        };

        let content = match result {
            Ok(content) => content,
            Err(e) => {
                let error_msg = if e.kind() == io::ErrorKind::NotFound {
                    format!("File does not exist: {}", path.display())
                } else {
                    format!("Failed to read file {}: {}", path.display(), e)
                };
                warn!("{}", error_msg);
                stats.duration_ms = start_time.elapsed().as_millis() as u64;
                stats.read_error = Some(error_msg);
                return (String::new(), stats);
            }
        };

        stats.lines_read = content.lines().count() as u64;
        stats.bytes_read = content.len() as u64;
        stats.duration_ms = start_time.elapsed().as_millis() as u64;

        info!(
            "Successfully read {}: {} lines, {} bytes in {}ms",
            path.display(),
            stats.lines_read,
            stats.bytes_read,
            stats.duration_ms
        );

        (content, stats)
    }

    async fn read_buffered(&self, path: &Path) -> io::Result<String> {
        let file = File::open(path).await?;
        let mut reader = BufReader::with_capacity(self.config.buffer_size.max(1), file);
        let mut content = String::new();
        // invalid UTF-8 surfaces as InvalidData
        reader.read_to_string(&mut content).await?;
        Ok(content)
    }
}

async fn read_mmap(path: &Path) -> io::Result<String> {
    let path = path.to_path_buf();
    tokio::task::spawn_blocking(move || {
        let file = std::fs::File::open(&path)?;
        if file.metadata()?.len() == 0 {
            return Ok(String::new());
        }
        // SAFETY: the map is dropped before returning; the file is only read
        let mmap = unsafe { memmap2::Mmap::map(&file)? };
        std::str::from_utf8(&mmap)
            .map(str::to_owned)
            .map_err(|e| io::Error::new(io::ErrorKind::InvalidData, e))
    })
    .await
    .map_err(io::Error::other)?
}

impl TextSource for FileTextSource {
    async fn read(&mut self, locator: &str) -> (String, ReadStats) {
        self.read_path(locator).await
    }
}

/// Interactive source: accumulates lines until a terminator line or EOF
pub struct ConsoleTextSource<R> {
    reader: R,
    label: String,
}

impl ConsoleTextSource<BufReader<Stdin>> {
    /// Console source over the process stdin
    pub fn stdin() -> Self {
        Self::new(BufReader::new(tokio::io::stdin()), "<stdin>")
    }
}

impl<R: AsyncBufRead + Unpin> ConsoleTextSource<R> {
    pub fn new(reader: R, label: impl Into<String>) -> Self {
        Self {
            reader,
            label: label.into(),
        }
    }

    /// Read lines until one equals `terminator` (not included) or input ends.
    /// Every accepted line is followed by `\n` in the result.
    pub async fn read_interactive(&mut self, terminator: &str) -> (String, ReadStats) {
        let start_time = std::time::Instant::now();
        let mut stats = ReadStats {
            source: self.label.clone(),
            ..Default::default()
        };
        let mut text = String::new();
        let mut line = String::new();

        loop {
            line.clear();
            match self.reader.read_line(&mut line).await {
                Ok(0) => break,
                Ok(_) => {
                    let content = line.trim_end_matches(|c| c == '\n' || c == '\r');
                    if content == terminator {
                        debug!("Terminator line reached on {}", self.label);
                        break;
                    }
                    text.push_str(content);
                    text.push('\n');
                    stats.lines_read += 1;
                }
                Err(e) => {
                    let error_msg = format!(
                        "Failed to read from {} at line {}: {}",
                        self.label,
                        stats.lines_read + 1,
                        e
                    );
                    warn!("{}", error_msg);
                    stats.read_error = Some(error_msg);
                    text.clear();
                    break;
                }
            }
        }

        stats.bytes_read = text.len() as u64;
        stats.duration_ms = start_time.elapsed().as_millis() as u64;
        (text, stats)
    }
}

impl<R: AsyncBufRead + Unpin> TextSource for ConsoleTextSource<R> {
    async fn read(&mut self, locator: &str) -> (String, ReadStats) {
        self.read_interactive(locator).await
    }
}

/// Convenience function for reading a single file with default configuration
pub async fn read_file_async<P: AsRef<Path>>(file_path: P) -> String {
    FileTextSource::default().read_path(file_path).await.0
}
