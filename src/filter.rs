//! Per-entry predicates: excluded paths, included types, size range.

use std::collections::BTreeSet;
use std::path::{Path, PathBuf};

use crate::types::{FilterConfig, SizeThreshold};

/// One excluded directory: as given, and its real path when it resolves.
#[derive(Clone, Debug)]
struct ExcludedDir {
    raw: PathBuf,
    canonical: Option<PathBuf>,
}

/// Filters resolved once per run from a [`FilterConfig`].
#[derive(Clone, Debug)]
pub struct FilterSet {
    excluded: Vec<ExcludedDir>,
    included_types: BTreeSet<String>,
    size_threshold: SizeThreshold,
}

impl FilterSet {
    pub fn new(config: &FilterConfig) -> Self {
        let excluded = config
            .excluded_paths
            .iter()
            .map(|raw| ExcludedDir {
                raw: raw.clone(),
                canonical: raw.canonicalize().ok(),
            })
            .collect();
        Self {
            excluded,
            included_types: config.included_types.clone(),
            size_threshold: config.size_threshold,
        }
    }

    /// True if `path` is, or lies below, an excluded directory.
    ///
    /// Matching is component-bounded (`/a/b` excludes `/a/b/c`, not `/a/bc`). The real path of
    /// `path` is compared first; when it cannot be resolved (broken link, vanished entry) only the
    /// textual form is compared.
    pub fn is_excluded(&self, path: &Path) -> bool {
        if self.excluded.is_empty() {
            return false;
        }
        let textual = self.excluded.iter().any(|dir| {
            path.starts_with(&dir.raw)
                || dir
                    .canonical
                    .as_ref()
                    .is_some_and(|dir_real| path.starts_with(dir_real))
        });
        if textual {
            return true;
        }
        match path.canonicalize() {
            Ok(real) => self
                .excluded
                .iter()
                .filter_map(|dir| dir.canonical.as_ref())
                .any(|dir_real| real.starts_with(dir_real)),
            Err(_) => false,
        }
    }

    /// True if no type filter is set or `label` is one of the included types.
    pub fn is_included_type(&self, label: &str) -> bool {
        self.included_types.is_empty() || self.included_types.contains(label)
    }

    pub fn in_size_range(&self, size: u64) -> bool {
        self.size_threshold.contains(size)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn with_excludes(paths: &[&str]) -> FilterSet {
        let mut cfg = FilterConfig::new();
        for p in paths {
            cfg.add_excluded_path(*p);
        }
        FilterSet::new(&cfg)
    }

    #[test]
    fn no_excludes_matches_nothing() {
        let f = with_excludes(&[]);
        assert!(!f.is_excluded(Path::new("/anything")));
    }

    #[test]
    fn textual_prefix_is_component_bounded() {
        let f = with_excludes(&["/no/such/root/build"]);
        assert!(f.is_excluded(Path::new("/no/such/root/build")));
        assert!(f.is_excluded(Path::new("/no/such/root/build/out/a.o")));
        assert!(!f.is_excluded(Path::new("/no/such/root/builder")));
        assert!(!f.is_excluded(Path::new("/no/such/root")));
    }

    #[test]
    fn real_path_equivalence() {
        let tmp = tempfile::TempDir::new().unwrap();
        let target = tmp.path().join("target");
        std::fs::create_dir(&target).unwrap();
        // Exclude through a non-normalized spelling; walk paths are canonical.
        let spelled = tmp.path().join("target/../target");
        let mut cfg = FilterConfig::new();
        cfg.add_excluded_path(&spelled);
        let f = FilterSet::new(&cfg);
        let real = target.canonicalize().unwrap();
        assert!(f.is_excluded(&real));
        assert!(f.is_excluded(&real.join("debug")));
    }

    #[test]
    fn duplicate_excludes_collapse() {
        let mut cfg = FilterConfig::new();
        cfg.add_excluded_path("/x/y");
        cfg.add_excluded_path("/x/y");
        assert_eq!(cfg.excluded_paths.len(), 1);
        assert_eq!(FilterSet::new(&cfg).excluded.len(), 1);
    }

    #[test]
    fn type_inclusion() {
        let all = FilterSet::new(&FilterConfig::new());
        assert!(all.is_included_type(".anything"));

        let mut cfg = FilterConfig::new();
        cfg.add_included_type(".rs");
        cfg.add_included_type("");
        let f = FilterSet::new(&cfg);
        assert!(f.is_included_type(".rs"));
        assert!(f.is_included_type("[no extension]"));
        assert!(!f.is_included_type(".txt"));
    }

    #[test]
    fn size_range_inclusive() {
        let mut cfg = FilterConfig::new();
        cfg.set_size_threshold(SizeThreshold::new(10, 20).unwrap());
        let f = FilterSet::new(&cfg);
        assert!(!f.in_size_range(9));
        assert!(f.in_size_range(10));
        assert!(f.in_size_range(20));
        assert!(!f.in_size_range(21));
    }
}
