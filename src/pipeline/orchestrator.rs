use log::debug;
use std::path::Path;
use std::time::Instant;

use crate::aggregate::AggregateStore;
use crate::engine::parallel::{build_walk_pool, parallel_walk_handler};
use crate::engine::progress::{create_counter, finish_progress, refresh_bar};
use crate::engine::tools::resolve_target_dir;
use crate::error::TallyError;
use crate::filter::FilterSet;
use crate::types::{AggregateSnapshot, FilterConfig, RunOpts};
use crate::utils::config::ProgressConsts;
use crate::utils::fd_limit::cap_workers;

use super::context::WalkContext;
use super::error_handler::report_skipped_paths;
use super::walk::walk_root;

/// Main orchestrator: resolve `root`, walk it with `config`, and return the final snapshot.
///
/// This is where the target is validated; callers pass it as given.
///
/// With more than one worker the walk runs on a dedicated pool of that size; otherwise it runs
/// on the calling thread. The snapshot is only built after the top-level walk has returned.
pub fn run_walk(
    root: &Path,
    config: &FilterConfig,
    opts: &RunOpts,
) -> Result<AggregateSnapshot, TallyError> {
    let root = resolve_target_dir(root)?;
    let parallelism = cap_workers(config.parallelism());
    parallel_walk_handler(parallelism);

    let progress = opts.verbose.then(|| {
        let bar = create_counter("Analyzing");
        refresh_bar(&bar);
        bar
    });

    let ctx = WalkContext::new(
        FilterSet::new(config),
        AggregateStore::new(config.show_hidden),
        parallelism,
        opts.cancel_flag.clone(),
        progress,
    );

    let start = Instant::now();
    let outcome = if parallelism > 1 {
        let pool = build_walk_pool(parallelism)?;
        pool.install(|| walk_root(&ctx, &root))
    } else {
        walk_root(&ctx, &root)
    };

    finish_progress(
        ctx.progress.as_ref(),
        ctx.files_done.load(std::sync::atomic::Ordering::Relaxed),
        ProgressConsts::PROGRESS_UPDATE_BATCH_SIZE,
    );
    outcome?;

    debug!(
        "Walk done: {} directories, {} files, {} skipped in {:?}",
        ctx.visited.len(),
        ctx.store.files_seen(),
        ctx.skipped_count(),
        start.elapsed()
    );
    report_skipped_paths(&ctx.skipped_paths, opts.verbose);

    Ok(ctx.store.into_snapshot())
}
