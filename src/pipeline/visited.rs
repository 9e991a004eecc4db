//! Directories already claimed in this run.

use std::collections::HashSet;
use std::path::{Path, PathBuf};
use std::sync::{Mutex, PoisonError};

use crate::engine::tools::canonical_or_raw;

#[derive(Debug, Default)]
pub struct VisitedSet {
    dirs: Mutex<HashSet<PathBuf>>,
}

impl VisitedSet {
    pub fn new() -> Self {
        Self::default()
    }

    /// Claim `dir` for processing. Returns false if it (or another spelling of the same real
    /// path) was claimed before. Lookup and insert happen under one lock.
    pub fn claim(&self, dir: &Path) -> bool {
        let key = canonical_or_raw(dir);
        self.dirs
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .insert(key)
    }

    pub fn len(&self) -> usize {
        self.dirs.lock().unwrap_or_else(PoisonError::into_inner).len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}
