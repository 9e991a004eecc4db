use std::path::PathBuf;
use std::sync::{Mutex, PoisonError};

/// Log how many entries the walk skipped; list them when verbose.
/// Call after the walk has joined.
pub fn report_skipped_paths(skipped_paths: &Mutex<Vec<(PathBuf, String)>>, verbose: bool) {
    let skipped = skipped_paths.lock().unwrap_or_else(PoisonError::into_inner);
    if skipped.is_empty() {
        return;
    }
    log::warn!(
        "Skipped {} entries due to permission errors or access issues",
        skipped.len()
    );
    if verbose {
        for (p, msg) in skipped.iter() {
            eprintln!("  skipped: {} ({})", p.display(), msg);
        }
    }
}
