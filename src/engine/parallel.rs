//! Shared helpers for parallel processing.

use log::debug;
use rayon::{ThreadPool, ThreadPoolBuilder};

use crate::utils::config::{PackagePaths, WorkerThreadLimits};

/// Run a directory's children as concurrent tasks only when there is more than one worker and
/// more than one child. A single-child chain stays on the current thread.
pub fn should_fan_out(parallelism: usize, fan_out: usize) -> bool {
    parallelism > 1 && fan_out > 1
}

pub fn parallel_walk_handler(parallelism: usize) {
    if parallelism > 1 {
        debug!("Walking in parallel ({} threads)", parallelism);
    } else {
        debug!("Walking serially");
    }
}

/// Fixed-size pool the walk runs on. All fan-out happens inside it, so `num_threads` bounds
/// the number of directories being read at once.
pub fn build_walk_pool(num_threads: usize) -> Result<ThreadPool, rayon::ThreadPoolBuildError> {
    let limits = WorkerThreadLimits::current();
    ThreadPoolBuilder::new()
        .num_threads(num_threads)
        .stack_size(limits.stack_size)
        .thread_name(|i| PackagePaths::get().pool_thread_name(i))
        .build()
}
