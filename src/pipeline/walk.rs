//! Directory walk: claim, list, filter, record files, then recurse into children.
//!
//! Each call handles one directory. Children run inline, or as concurrent tasks on the current
//! rayon pool when [`should_fan_out`] allows it. A call returns only after every child has
//! returned, so the top-level call returning means the store is final.

use log::debug;
use rayon::prelude::*;
use std::fs;
use std::path::{Path, PathBuf};

use crate::classify::{classify, is_hidden};
use crate::engine::parallel::should_fan_out;
use crate::engine::tools::dir_size;
use crate::error::TallyError;
use crate::utils::config::Labels;

use super::context::WalkContext;

/// Immediate children of one directory that passed the exclusion check, split by kind.
#[derive(Debug, Default)]
pub struct Listing {
    pub files: Vec<PathBuf>,
    pub subdirs: Vec<PathBuf>,
    pub git_dirs: Vec<PathBuf>,
}

/// Walk the target directory. Failing to list it is fatal; everything below only warns.
pub fn walk_root(ctx: &WalkContext, root: &Path) -> Result<(), TallyError> {
    ctx.check_cancelled()?;
    ctx.visited.claim(root);
    let listing = list_dir(ctx, root).map_err(|source| TallyError::RootUnreadable {
        path: root.to_path_buf(),
        source,
    })?;
    dispatch(ctx, listing)
}

/// Walk one nested directory.
pub fn walk_dir(ctx: &WalkContext, dir: &Path) -> Result<(), TallyError> {
    ctx.check_cancelled()?;
    if !ctx.visited.claim(dir) {
        debug!("Already visited: {}", dir.display());
        return Ok(());
    }
    match list_dir(ctx, dir) {
        Ok(listing) => dispatch(ctx, listing),
        Err(err) => {
            ctx.skip(dir, &err);
            Ok(())
        }
    }
}

/// Read the entries of `dir`. Only the open itself can fail; a bad entry is skipped.
///
/// Entry types come from the directory entry, so links are never followed. Symlinks, sockets,
/// fifos and devices are dropped here without a warning.
pub fn list_dir(ctx: &WalkContext, dir: &Path) -> std::io::Result<Listing> {
    let mut listing = Listing::default();
    for entry in fs::read_dir(dir)? {
        let entry = match entry {
            Ok(e) => e,
            Err(err) => {
                ctx.skip(dir, &err);
                continue;
            }
        };
        let path = entry.path();
        if ctx.filters.is_excluded(&path) {
            continue;
        }
        let file_type = match entry.file_type() {
            Ok(t) => t,
            Err(err) => {
                ctx.skip(&path, &err);
                continue;
            }
        };
        if file_type.is_dir() {
            if entry.file_name() == Labels::GIT_DIR {
                listing.git_dirs.push(path);
            } else {
                listing.subdirs.push(path);
            }
        } else if file_type.is_file() {
            listing.files.push(path);
        }
    }
    Ok(listing)
}

fn dispatch(ctx: &WalkContext, listing: Listing) -> Result<(), TallyError> {
    for file in &listing.files {
        record_file(ctx, file)?;
    }
    for git_dir in &listing.git_dirs {
        let size = dir_size(git_dir, |path, err| ctx.skip(path, err))?;
        ctx.store.record_git_dir(size)?;
        ctx.file_recorded();
    }

    if should_fan_out(ctx.parallelism, listing.subdirs.len()) {
        listing
            .subdirs
            .par_iter()
            .try_for_each(|dir| walk_dir(ctx, dir))
    } else {
        listing
            .subdirs
            .iter()
            .try_for_each(|dir| walk_dir(ctx, dir))
    }
}

/// Stat, filter and record one regular file. Stat errors skip the file.
fn record_file(ctx: &WalkContext, path: &Path) -> Result<(), TallyError> {
    let size = match fs::metadata(path) {
        Ok(meta) => meta.len(),
        Err(err) => {
            ctx.skip(path, &err);
            return Ok(());
        }
    };
    if !ctx.filters.in_size_range(size) {
        return Ok(());
    }
    let label = classify(path);
    if !ctx.filters.is_included_type(&label) {
        return Ok(());
    }
    ctx.store.record(&label, size, is_hidden(path))?;
    ctx.file_recorded();
    Ok(())
}
