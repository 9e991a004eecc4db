//! Application configuration constants.
//! Labels, tuning and thresholds in one place.

use std::sync::OnceLock;

// ---- Package ----

/// Package-derived names: built once from `CARGO_PKG_NAME`, then cached.
pub struct PackagePaths {
    pkg_name: &'static str,
    pool_thread_prefix: String,
}

static PACKAGE_PATHS: OnceLock<PackagePaths> = OnceLock::new();

impl PackagePaths {
    /// Build and cache names from `CARGO_PKG_NAME`. Called once on first use.
    pub fn get() -> &'static PackagePaths {
        PACKAGE_PATHS.get_or_init(|| {
            let pkg = env!("CARGO_PKG_NAME");
            PackagePaths {
                pkg_name: pkg,
                pool_thread_prefix: format!("{pkg}-walk"),
            }
        })
    }

    pub fn pkg_name(&self) -> &str {
        self.pkg_name
    }

    /// Name for walk pool thread `index`.
    pub fn pool_thread_name(&self, index: usize) -> String {
        format!("{}-{index}", self.pool_thread_prefix)
    }
}

// ---- Type labels ----

/// Labels used when a file has no usable extension.
pub struct Labels;

impl Labels {
    pub const INVALID: &'static str = "[invalid]";
    pub const DOTFILE: &'static str = "[dotfile]";
    pub const NO_EXTENSION: &'static str = "[no extension]";
    /// A `.git` directory is counted as one entry under this label.
    pub const GIT_DIR: &'static str = ".git";
}

// ---- Worker threads ----

/// Walk pool limits.
#[derive(Clone, Copy, Debug)]
pub struct WorkerThreadLimits {
    /// Available threads (from rayon); set by [`WorkerThreadLimits::current()`].
    pub all_threads: usize,
    /// Stack size for walk pool threads. Sequential recursion depth follows directory depth.
    pub stack_size: usize,
}

impl Default for WorkerThreadLimits {
    fn default() -> Self {
        Self {
            all_threads: 1,
            stack_size: Self::STACK_SIZE,
        }
    }
}

impl WorkerThreadLimits {
    pub const STACK_SIZE: usize = 8 * 1024 * 1024;

    /// Build limits with `all_threads` set from `rayon::current_num_threads()`.
    pub fn current() -> Self {
        Self {
            all_threads: rayon::current_num_threads(),
            ..Self::default()
        }
    }
}

// ---- Progress ----

/// Progress counter tuning.
pub struct ProgressConsts;

impl ProgressConsts {
    /// Files recorded between progress counter updates (reduce lock contention).
    pub const PROGRESS_UPDATE_BATCH_SIZE: usize = 256;
}

// ---- Report layout ----

/// Column widths for the console table.
pub struct TableLayout;

impl TableLayout {
    pub const SUMMARY_WIDTH: usize = 60;
    pub const TYPE_WIDTH: usize = 20;
    pub const COUNT_WIDTH: usize = 15;
    pub const SIZE_WIDTH: usize = 20;
}
