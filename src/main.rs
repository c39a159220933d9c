//! CLI entry point for dircnt

use std::path::PathBuf;
use std::process::ExitCode;

use clap::Parser;
use dircnt::walker::PATH_MAX;
use dircnt::{
    ClassifyStrategy, OutputFormat, StderrReporter, WalkError, Walker, WalkerConfig, print_totals,
};
use tracing::debug;
use tracing_subscriber::EnvFilter;

/// Counting limit reached
const EXIT_REACHED_LIMIT: u8 = 1;
/// Composed path exceeded the path-length ceiling
const EXIT_PATH_TOO_LONG: u8 = 3;
/// Totals could not be written to stdout
const EXIT_OUTPUT_FAILED: u8 = 4;

#[derive(Parser, Debug)]
#[command(name = "dircnt")]
#[command(about = "Count files and directories beneath a path")]
#[command(version)]
struct Args {
    /// Directory to count
    #[arg(default_value = ".")]
    path: PathBuf,

    /// Also sum file and directory sizes (implies a metadata lookup per entry)
    #[arg(short, long)]
    size: bool,

    /// Classify every entry with a metadata lookup instead of the listing's type hint
    #[arg(long = "prefer-stat")]
    prefer_stat: bool,

    /// Output totals as JSON
    #[arg(long = "json")]
    json: bool,

    /// Longest child path allowed before the walk is aborted
    #[arg(long = "max-path-len", value_name = "BYTES", default_value_t = PATH_MAX)]
    max_path_len: usize,

    /// Stop with exit status 1 once either count reaches N
    #[arg(long = "limit", value_name = "N")]
    limit: Option<u64>,

    /// Trace the traversal on stderr
    #[arg(short, long)]
    verbose: bool,
}

fn setup_logging(verbose: bool) {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| {
        if verbose {
            EnvFilter::new("dircnt=debug")
        } else {
            EnvFilter::new("dircnt=warn")
        }
    });

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .init();
}

fn main() -> ExitCode {
    let args = Args::parse();
    setup_logging(args.verbose);

    let strategy = if args.prefer_stat {
        ClassifyStrategy::Metadata
    } else {
        ClassifyStrategy::FastHint
    };
    let config = WalkerConfig {
        count_sizes: args.size,
        strategy,
        max_path_len: args.max_path_len,
        limit: args.limit,
    };
    if config.needs_metadata() {
        debug!("using metadata lookups for every entry");
    } else {
        debug!("using directory listing type hints");
    }

    let walker = Walker::new(config);
    let totals = match walker.count(&args.path, &mut StderrReporter) {
        Ok(totals) => totals,
        Err(e) => {
            eprintln!("dircnt: {}", e);
            return match e {
                WalkError::LimitReached { .. } => ExitCode::from(EXIT_REACHED_LIMIT),
                WalkError::PathTooLong { .. } => ExitCode::from(EXIT_PATH_TOO_LONG),
                // Recoverable errors are reported, never returned
                _ => ExitCode::FAILURE,
            };
        }
    };

    let format = if args.json {
        OutputFormat::Json
    } else {
        OutputFormat::Tab
    };
    if let Err(e) = print_totals(&args.path, &totals, format) {
        eprintln!("dircnt: error writing output: {}", e);
        return ExitCode::from(EXIT_OUTPUT_FAILED);
    }

    ExitCode::SUCCESS
}
