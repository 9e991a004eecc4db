//! Public types for the extstat API: filter configuration and the aggregate snapshot.

use serde::Serialize;
use std::collections::{BTreeSet, HashMap};
use std::path::PathBuf;
use std::sync::Arc;
use std::sync::atomic::AtomicBool;

use crate::error::TallyError;
use crate::utils::config::Labels;

/// Inclusive file size range. Can only be built with `min <= max`.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct SizeThreshold {
    min_size: u64,
    max_size: u64,
}

impl Default for SizeThreshold {
    fn default() -> Self {
        Self {
            min_size: 0,
            max_size: u64::MAX,
        }
    }
}

impl SizeThreshold {
    pub fn new(min_size: u64, max_size: u64) -> Result<Self, TallyError> {
        if min_size > max_size {
            return Err(TallyError::InvalidThreshold {
                min: min_size,
                max: max_size,
            });
        }
        Ok(Self { min_size, max_size })
    }

    pub fn min_size(&self) -> u64 {
        self.min_size
    }

    pub fn max_size(&self) -> u64 {
        self.max_size
    }

    /// True when `min_size <= size <= max_size`.
    pub fn contains(&self, size: u64) -> bool {
        size >= self.min_size && size <= self.max_size
    }
}

/// Filters and tuning for one run. Read-only once the walk starts.
#[derive(Clone, Debug)]
pub struct FilterConfig {
    /// Directories skipped entirely (with everything below them).
    pub excluded_paths: BTreeSet<PathBuf>,
    /// Type labels to count. Empty means all types.
    pub included_types: BTreeSet<String>,
    pub size_threshold: SizeThreshold,
    /// Count dotfiles (and `.git`) in the per-type table instead of the hidden totals.
    pub show_hidden: bool,
    parallelism: usize,
}

impl Default for FilterConfig {
    fn default() -> Self {
        Self {
            excluded_paths: BTreeSet::new(),
            included_types: BTreeSet::new(),
            size_threshold: SizeThreshold::default(),
            show_hidden: false,
            parallelism: 1,
        }
    }
}

impl FilterConfig {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn parallelism(&self) -> usize {
        self.parallelism
    }

    /// Set the worker count. Zero is rejected.
    pub fn set_parallelism(&mut self, parallelism: usize) -> Result<(), TallyError> {
        if parallelism == 0 {
            return Err(TallyError::InvalidParallelism);
        }
        self.parallelism = parallelism;
        Ok(())
    }

    pub fn set_size_threshold(&mut self, threshold: SizeThreshold) {
        self.size_threshold = threshold;
    }

    pub fn add_excluded_path(&mut self, path: impl Into<PathBuf>) {
        self.excluded_paths.insert(path.into());
    }

    /// Add a type label to the inclusion set.
    ///
    /// Accepts `.rs`, `rs` or `RS` for the same label; bracketed labels such as `[dotfile]` are kept
    /// as given and the empty string means `[no extension]`.
    pub fn add_included_type(&mut self, label: &str) {
        self.included_types.insert(normalize_type_label(label));
    }
}

fn normalize_type_label(label: &str) -> String {
    if label.is_empty() {
        return Labels::NO_EXTENSION.to_string();
    }
    if label.starts_with('[') {
        return label.to_string();
    }
    let lower = label.to_ascii_lowercase();
    if lower.starts_with('.') {
        lower
    } else {
        format!(".{lower}")
    }
}

/// Run options that are not filters.
#[derive(Clone, Debug, Default)]
pub struct RunOpts {
    /// Show a live file counter and list skipped paths at the end.
    pub verbose: bool,
    /// When set to true from another thread, the walk stops and the run fails with `Cancelled`.
    pub cancel_flag: Option<Arc<AtomicBool>>,
}

/// Count and byte total for one type label.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize)]
pub struct TypeStat {
    pub count: u64,
    pub total_size: u64,
}

/// Final, read-only result of a run.
///
/// `total_bytes` includes hidden bytes; `total_files` does not include hidden files.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize)]
pub struct AggregateSnapshot {
    pub per_type: HashMap<String, TypeStat>,
    pub total_files: u64,
    pub total_bytes: u64,
    pub hidden_files: u64,
    pub hidden_bytes: u64,
}

impl AggregateSnapshot {
    /// Per-type rows, largest total size first. Ties are broken by label so output is stable.
    pub fn sorted_by_size(&self) -> Vec<(&str, TypeStat)> {
        let mut rows: Vec<(&str, TypeStat)> = self
            .per_type
            .iter()
            .map(|(label, stat)| (label.as_str(), *stat))
            .collect();
        rows.sort_by(|a, b| b.1.total_size.cmp(&a.1.total_size).then(a.0.cmp(b.0)));
        rows
    }
}
