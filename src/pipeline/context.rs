//! Walk context: everything the walk tasks share for one run.

use log::warn;
use std::path::{Path, PathBuf};
use std::sync::atomic::{AtomicBool, AtomicUsize, Ordering};
use std::sync::{Arc, Mutex, PoisonError};

use crate::aggregate::AggregateStore;
use crate::engine::progress::{ProgressBar, report_progress_batched};
use crate::error::TallyError;
use crate::filter::FilterSet;
use crate::utils::config::ProgressConsts;

use super::visited::VisitedSet;

/// Shared state borrowed by every walk task. Filters and parallelism are fixed for the run;
/// the store, visited set and skipped list are the mutable parts.
pub struct WalkContext {
    pub filters: FilterSet,
    pub store: AggregateStore,
    pub visited: VisitedSet,
    pub parallelism: usize,
    pub cancel_flag: Option<Arc<AtomicBool>>,
    pub skipped_paths: Mutex<Vec<(PathBuf, String)>>,
    pub progress: Option<ProgressBar>,
    pub files_done: AtomicUsize,
}

impl WalkContext {
    pub fn new(
        filters: FilterSet,
        store: AggregateStore,
        parallelism: usize,
        cancel_flag: Option<Arc<AtomicBool>>,
        progress: Option<ProgressBar>,
    ) -> Self {
        Self {
            filters,
            store,
            visited: VisitedSet::new(),
            parallelism,
            cancel_flag,
            skipped_paths: Mutex::new(Vec::new()),
            progress,
            files_done: AtomicUsize::new(0),
        }
    }

    pub fn check_cancelled(&self) -> Result<(), TallyError> {
        match &self.cancel_flag {
            Some(flag) if flag.load(Ordering::Relaxed) => Err(TallyError::Cancelled),
            _ => Ok(()),
        }
    }

    /// Log an unreadable entry and remember it for the end-of-run summary.
    pub fn skip(&self, path: &Path, err: &std::io::Error) {
        warn!("Cannot access {}: {}", path.display(), err);
        self.skipped_paths
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .push((path.to_path_buf(), err.to_string()));
    }

    pub fn file_recorded(&self) {
        report_progress_batched(
            self.progress.as_ref(),
            &self.files_done,
            ProgressConsts::PROGRESS_UPDATE_BATCH_SIZE,
        );
    }

    pub fn skipped_count(&self) -> usize {
        self.skipped_paths
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .len()
    }
}
