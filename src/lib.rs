//! extstat: file counts and byte totals per file type for a directory tree.
//!
//! The walk fans out across subdirectories on a fixed-size thread pool and records into one
//! shared store; the result is returned as an [`AggregateSnapshot`] once the whole tree is done.

pub mod aggregate;
pub mod classify;
pub mod engine;
pub mod error;
pub mod filter;
pub mod pipeline;
pub mod report;
pub mod types;
pub mod utils;

/// Re-export types for API
pub use classify::classify;
pub use error::TallyError;
pub use types::*;

use log::debug;
use std::path::Path;

/// Analyze `root` with `config` and return the final snapshot.
///
/// Fails before walking if `root` is not a directory, and during the walk only on counter
/// overflow or when `root` itself cannot be listed. Unreadable entries below `root` are logged
/// and skipped.
///
/// ```ignore
/// let mut config = extstat::FilterConfig::new();
/// config.set_parallelism(4)?;
/// config.add_included_type(".rs");
/// let snapshot = extstat::analyze_dir(std::path::Path::new("."), &config)?;
/// println!("{} files, {} bytes", snapshot.total_files, snapshot.total_bytes);
/// ```
pub fn analyze_dir(root: &Path, config: &FilterConfig) -> Result<AggregateSnapshot, TallyError> {
    analyze_dir_with_opts(root, config, &RunOpts::default())
}

/// [`analyze_dir`] with a progress counter and/or a cancel flag.
pub fn analyze_dir_with_opts(
    root: &Path,
    config: &FilterConfig,
    opts: &RunOpts,
) -> Result<AggregateSnapshot, TallyError> {
    debug!(
        "{} CONFIG:{:#?}",
        env!("CARGO_PKG_NAME").to_string().to_uppercase(),
        config
    );
    pipeline::run_walk(root, config, opts)
}
