//! Shared counters for one run.
//!
//! Every walk task records into the same [`AggregateStore`] through `&self`. Per-type stats sit
//! behind one mutex; the four global totals are atomics updated with checked adds, so an
//! overflow is reported instead of wrapping.

use std::collections::HashMap;
use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::{Mutex, PoisonError};

use crate::error::TallyError;
use crate::types::{AggregateSnapshot, TypeStat};
use crate::utils::config::Labels;

impl TypeStat {
    /// Add one file of `size` bytes. Leaves the stat untouched on overflow.
    pub fn update(&mut self, size: u64) -> Result<(), TallyError> {
        let count = self
            .count
            .checked_add(1)
            .ok_or(TallyError::Overflow("File count"))?;
        let total_size = self
            .total_size
            .checked_add(size)
            .ok_or(TallyError::Overflow("Total size"))?;
        self.count = count;
        self.total_size = total_size;
        Ok(())
    }
}

#[derive(Debug)]
pub struct AggregateStore {
    show_hidden: bool,
    per_type: Mutex<HashMap<String, TypeStat>>,
    total_files: AtomicU64,
    total_bytes: AtomicU64,
    hidden_files: AtomicU64,
    hidden_bytes: AtomicU64,
}

fn checked_increment(
    counter: &AtomicU64,
    amount: u64,
    what: &'static str,
) -> Result<(), TallyError> {
    counter
        .fetch_update(Ordering::Relaxed, Ordering::Relaxed, |v| v.checked_add(amount))
        .map(|_| ())
        .map_err(|_| TallyError::Overflow(what))
}

impl AggregateStore {
    pub fn new(show_hidden: bool) -> Self {
        Self {
            show_hidden,
            per_type: Mutex::new(HashMap::new()),
            total_files: AtomicU64::new(0),
            total_bytes: AtomicU64::new(0),
            hidden_files: AtomicU64::new(0),
            hidden_bytes: AtomicU64::new(0),
        }
    }

    /// Count one file.
    ///
    /// Hidden files go to the hidden totals unless hidden files are shown, in which case they are
    /// counted like any other file. Bytes always go to `total_bytes`.
    pub fn record(&self, label: &str, size: u64, is_hidden: bool) -> Result<(), TallyError> {
        if is_hidden && !self.show_hidden {
            checked_increment(&self.hidden_files, 1, "Hidden file count")?;
            checked_increment(&self.hidden_bytes, size, "Hidden size")?;
        } else {
            {
                let mut per_type = self.per_type.lock().unwrap_or_else(PoisonError::into_inner);
                per_type.entry(label.to_string()).or_default().update(size)?;
            }
            checked_increment(&self.total_files, 1, "File count")?;
        }
        checked_increment(&self.total_bytes, size, "Total size")
    }

    /// Count a `.git` directory as a single hidden entry of `size` bytes.
    pub fn record_git_dir(&self, size: u64) -> Result<(), TallyError> {
        self.record(Labels::GIT_DIR, size, true)
    }

    /// Files recorded so far, visible and hidden. For progress only.
    pub fn files_seen(&self) -> u64 {
        self.total_files.load(Ordering::Relaxed) + self.hidden_files.load(Ordering::Relaxed)
    }

    /// Consume the store once every walk task has finished.
    pub fn into_snapshot(self) -> AggregateSnapshot {
        AggregateSnapshot {
            per_type: self
                .per_type
                .into_inner()
                .unwrap_or_else(PoisonError::into_inner),
            total_files: self.total_files.into_inner(),
            total_bytes: self.total_bytes.into_inner(),
            hidden_files: self.hidden_files.into_inner(),
            hidden_bytes: self.hidden_bytes.into_inner(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rayon::prelude::*;

    #[test]
    fn visible_file_counts_everywhere() {
        let store = AggregateStore::new(false);
        store.record(".txt", 10, false).unwrap();
        store.record(".txt", 20, false).unwrap();
        let snap = store.into_snapshot();
        assert_eq!(snap.per_type[".txt"], TypeStat { count: 2, total_size: 30 });
        assert_eq!(snap.total_files, 2);
        assert_eq!(snap.total_bytes, 30);
        assert_eq!(snap.hidden_files, 0);
    }

    #[test]
    fn hidden_file_only_in_hidden_totals() {
        let store = AggregateStore::new(false);
        store.record("[dotfile]", 100, true).unwrap();
        let snap = store.into_snapshot();
        assert!(snap.per_type.is_empty());
        assert_eq!(snap.total_files, 0);
        assert_eq!(snap.hidden_files, 1);
        assert_eq!(snap.hidden_bytes, 100);
        assert_eq!(snap.total_bytes, 100);
    }

    #[test]
    fn hidden_file_shown() {
        let store = AggregateStore::new(true);
        store.record("[dotfile]", 100, true).unwrap();
        let snap = store.into_snapshot();
        assert_eq!(snap.per_type["[dotfile]"].count, 1);
        assert_eq!(snap.total_files, 1);
        assert_eq!(snap.hidden_files, 0);
        assert_eq!(snap.total_bytes, 100);
    }

    #[test]
    fn git_dir_hidden_and_shown() {
        let hidden = AggregateStore::new(false);
        hidden.record_git_dir(500).unwrap();
        let snap = hidden.into_snapshot();
        assert!(snap.per_type.is_empty());
        assert_eq!((snap.hidden_files, snap.hidden_bytes, snap.total_bytes), (1, 500, 500));

        let shown = AggregateStore::new(true);
        shown.record_git_dir(500).unwrap();
        let snap = shown.into_snapshot();
        assert_eq!(snap.per_type[".git"], TypeStat { count: 1, total_size: 500 });
        assert_eq!(snap.total_files, 1);
    }

    #[test]
    fn size_overflow_is_an_error() {
        let store = AggregateStore::new(false);
        store.record(".bin", u64::MAX, false).unwrap();
        let err = store.record(".bin", 1, false).unwrap_err();
        assert!(matches!(err, TallyError::Overflow(_)));
    }

    #[test]
    fn type_stat_unchanged_on_overflow() {
        let mut stat = TypeStat {
            count: 1,
            total_size: u64::MAX,
        };
        assert!(stat.update(1).is_err());
        assert_eq!(stat.count, 1);
        assert!(stat.update(0).is_ok());
        assert_eq!(stat.count, 2);
    }

    #[test]
    fn concurrent_records_are_not_lost() {
        let store = AggregateStore::new(false);
        (0..10_000u64).into_par_iter().for_each(|i| {
            let label = if i % 2 == 0 { ".even" } else { ".odd" };
            store.record(label, 1, i % 10 == 0).unwrap();
        });
        let snap = store.into_snapshot();
        assert_eq!(snap.total_bytes, 10_000);
        assert_eq!(snap.hidden_files, 1_000);
        assert_eq!(snap.total_files, 9_000);
        let counted: u64 = snap.per_type.values().map(|s| s.count).sum();
        assert_eq!(counted, 9_000);
    }
}
