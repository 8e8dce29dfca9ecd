use anyhow::Result;
use clap::Parser;
use std::io::IsTerminal;
use std::path::PathBuf;
use tracing::{info, Level};

use sentstat::config::AppConfig;
use sentstat::pipeline::{write_run_stats, PipelineOutput, TextPipeline};
use sentstat::reader::{ConsoleTextSource, FileTextSource};
use sentstat::report::ReportMode;
use sentstat::sink::{report_path_for, FileReportSink};

#[derive(Parser, Debug)]
#[command(name = "sentstat")]
#[command(about = "Sentence and word frequency statistics for free-form text")]
#[command(version)]
struct Args {
    /// Text file to analyze; reads interactively from stdin when omitted
    input: Option<PathBuf>,

    /// Report layout
    #[arg(long, value_enum, default_value_t = ReportMode::Summary)]
    mode: ReportMode,

    /// Save the report to this path instead of printing it
    #[arg(long)]
    out: Option<PathBuf>,

    /// Save the report next to INPUT as <stem>_report.txt / .md
    #[arg(long, requires = "input", conflicts_with = "out")]
    save: bool,

    /// Line that ends interactive input
    #[arg(long, default_value = "")]
    terminator: String,

    /// TOML configuration file
    #[arg(long)]
    config: Option<PathBuf>,

    /// Write run statistics as JSON to this path
    #[arg(long)]
    stats_out: Option<PathBuf>,

    /// Rows in the top-word tables
    #[arg(long)]
    top_n: Option<usize>,

    /// Unique words per line in markdown output
    #[arg(long)]
    words_per_line: Option<usize>,

    /// Use memory-mapped I/O instead of async buffered
    #[arg(long)]
    use_mmap: bool,

    /// Abort when the input cannot be read or the report cannot be saved
    #[arg(long)]
    fail_fast: bool,

    /// Log at debug level
    #[arg(long)]
    verbose: bool,
}

impl Args {
    fn apply_overrides(&self, config: &mut AppConfig) {
        if let Some(top_n) = self.top_n {
            config.report.top_n = top_n;
        }
        if let Some(words_per_line) = self.words_per_line {
            config.report.words_per_line = words_per_line;
        }
        if self.use_mmap {
            config.reader.use_mmap = true;
        }
        if self.fail_fast {
            config.reader.fail_fast = true;
        }
    }
}

#[tokio::main]
async fn main() -> Result<()> {
    let args = Args::parse();

    // stdout carries the report, logs go to stderr
    tracing_subscriber::fmt()
        .with_target(false)
        .with_max_level(if args.verbose { Level::DEBUG } else { Level::INFO })
        .with_writer(std::io::stderr)
        .json()
        .init();

    info!(?args, "Parsed CLI arguments");

    let mut config = AppConfig::load_or_default(args.config.as_ref()).await?;
    args.apply_overrides(&mut config);

    let destination = match (&args.out, &args.input) {
        (Some(out), _) => Some(out.clone()),
        (None, Some(input)) if args.save => Some(report_path_for(input, args.mode)),
        _ => None,
    };

    let pipeline = TextPipeline::new(&config)?;
    let sink = FileReportSink::new();

    let output: PipelineOutput = match args.input {
        Some(ref input) => {
            let mut source = FileTextSource::new(config.reader.clone());
            let locator = input.to_string_lossy();
            pipeline
                .run(&mut source, &locator, args.mode, &sink, destination.as_deref())
                .await?
        }
        None => {
            if std::io::stdin().is_terminal() {
                let end = if args.terminator.is_empty() {
                    "an empty line".to_string()
                } else {
                    format!("a line containing only '{}'", args.terminator)
                };
                eprintln!("Enter the text to analyze, finish with {end}:");
            }
            let mut source = ConsoleTextSource::stdin();
            pipeline
                .run(&mut source, &args.terminator, args.mode, &sink, destination.as_deref())
                .await?
        }
    };

    match output.run_stats.destination {
        Some(ref path) => println!("Report saved to {path}"),
        None => println!("{}", output.report),
    }

    if let Some(ref stats_out) = args.stats_out {
        write_run_stats(stats_out, &output.run_stats).await?;
        info!("Run statistics written to {}", stats_out.display());
    }

    if let Some(ref error) = output.run_stats.error {
        info!("Run finished with error: {}", error);
    }

    Ok(())
}
