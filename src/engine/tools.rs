//! Path helpers for the walk.

use std::io;
use std::path::{Path, PathBuf};
use walkdir::WalkDir;

use crate::error::TallyError;

/// Check that `path` exists and is a directory, and return its real path.
pub fn resolve_target_dir(path: &Path) -> Result<PathBuf, TallyError> {
    if !path.is_dir() {
        return Err(TallyError::NotADirectory(path.to_path_buf()));
    }
    path.canonicalize()
        .map_err(|_| TallyError::NotADirectory(path.to_path_buf()))
}

/// Real path when it resolves, the path as given otherwise.
pub fn canonical_or_raw(path: &Path) -> PathBuf {
    path.canonicalize().unwrap_or_else(|_| path.to_path_buf())
}

/// Recursive sum of regular file sizes under `dir`. Links are not followed.
///
/// Entries that cannot be read are passed to `on_skip` and left out of the sum. A total that
/// does not fit in a `u64` is an error.
pub fn dir_size<F>(dir: &Path, mut on_skip: F) -> Result<u64, TallyError>
where
    F: FnMut(&Path, &io::Error),
{
    let mut total = 0u64;
    for entry in WalkDir::new(dir).follow_links(false) {
        let entry = match entry {
            Ok(e) => e,
            Err(err) => {
                let path = err.path().unwrap_or(dir).to_path_buf();
                on_skip(&path, &io::Error::from(err));
                continue;
            }
        };
        if !entry.file_type().is_file() {
            continue;
        }
        let len = match entry.metadata() {
            Ok(meta) => meta.len(),
            Err(err) => {
                on_skip(entry.path(), &io::Error::from(err));
                continue;
            }
        };
        total = total
            .checked_add(len)
            .ok_or(TallyError::Overflow(".git size"))?;
    }
    Ok(total)
}
