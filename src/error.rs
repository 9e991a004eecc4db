//! Error types for the analysis run.
//!
//! Only fatal conditions live here. Per-entry problems (a directory that cannot be listed, a file
//! that cannot be stat'ed) are logged and counted by the walk, never surfaced as a `TallyError`.

use std::path::PathBuf;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum TallyError {
    /// Size threshold with `min > max`.
    #[error("Invalid size threshold: min size ({min}) must be less than or equal to max size ({max})")]
    InvalidThreshold { min: u64, max: u64 },

    /// Human-readable size string that could not be parsed.
    #[error("Invalid size '{input}': {reason}")]
    InvalidSize { input: String, reason: String },

    #[error("Invalid thread count: must be at least 1")]
    InvalidParallelism,

    /// Target path missing or not a directory.
    #[error("Invalid directory: {}", .0.display())]
    NotADirectory(PathBuf),

    /// The top-level target could not be listed. Nested directories only produce warnings.
    #[error("Cannot read directory {}: {source}", path.display())]
    RootUnreadable {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Cannot start walk threads: {0}")]
    ThreadPool(#[from] rayon::ThreadPoolBuildError),

    #[error("{0} overflow")]
    Overflow(&'static str),

    #[error("Analysis cancelled by user")]
    Cancelled,
}
