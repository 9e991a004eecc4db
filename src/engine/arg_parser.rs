use clap::{ArgAction, Parser};
use std::path::PathBuf;

use crate::utils::size::parse_size;

/// Directory statistics grouped by file type.
#[derive(Clone, Debug, Parser)]
#[command(name = "extstat", version)]
#[command(about = "Count files and bytes per file type under a directory.")]
#[command(
    after_help = "Example:\n  extstat -a -e node_modules -t .cpp -t .h -s 1K -S 1M -o results.csv /path/to/dir"
)]
pub struct Cli {
    /// Directory to analyze.
    #[arg(value_name = "DIR")]
    pub dir: PathBuf,

    /// Include hidden files (dotfiles and .git) in the per-type table.
    #[arg(long, short = 'a')]
    pub all: bool,

    /// Directory to exclude (can be used multiple times).
    #[arg(long, short = 'e', value_name = "DIR", action = ArgAction::Append)]
    pub exclude: Vec<PathBuf>,

    /// File type to include, e.g. .cpp (can be used multiple times). "" means no extension.
    #[arg(long = "type", short = 't', value_name = "EXT", action = ArgAction::Append)]
    pub types: Vec<String>,

    /// Minimum file size (e.g. 10K, 1M, 1.5G).
    #[arg(long, short = 's', value_name = "SIZE", value_parser = parse_size)]
    pub min_size: Option<u64>,

    /// Maximum file size (e.g. 100M, 2G).
    #[arg(long, short = 'S', value_name = "SIZE", value_parser = parse_size)]
    pub max_size: Option<u64>,

    /// Worker threads. Default: available parallelism.
    #[arg(long, short = 'j', value_name = "N", value_parser = clap::value_parser!(u32).range(1..))]
    pub threads: Option<u32>,

    /// Export results to a CSV file.
    #[arg(long, short = 'o', value_name = "FILE")]
    pub output: Option<PathBuf>,

    /// Add a human-readable size column to the CSV export.
    #[arg(long)]
    pub human: bool,

    /// Print results as JSON instead of a table.
    #[arg(long)]
    pub json: bool,

    /// Verbose output: debug logs, live file counter, list of skipped paths.
    #[arg(long, short = 'v')]
    pub verbose: bool,
}
