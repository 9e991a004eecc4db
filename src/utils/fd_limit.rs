//! File descriptor limit detection for capping walk parallelism (Unix).

/// Estimated number of file descriptors a walk worker may hold (open dir handle, stat, .git walk).
pub const FDS_PER_WORKER: usize = 4;

/// Fraction of the process FD limit to use (leave headroom for stdio and the CSV writer).
const FD_LIMIT_FRACTION: f64 = 0.8;

/// Returns the soft limit for max open file descriptors, or `None` if unavailable (e.g. Windows).
#[cfg(unix)]
pub fn max_open_fds() -> Option<u64> {
    use std::mem::MaybeUninit;
    let mut rlim = MaybeUninit::<libc::rlimit>::uninit();
    if unsafe { libc::getrlimit(libc::RLIMIT_NOFILE, rlim.as_mut_ptr()) } != 0 {
        return None;
    }
    let rlim = unsafe { rlim.assume_init() };
    let cur = rlim.rlim_cur;
    if cur == libc::RLIM_INFINITY || cur > i64::MAX as u64 {
        return None;
    }
    Some(cur)
}

#[cfg(not(unix))]
pub fn max_open_fds() -> Option<u64> {
    None
}

/// Suggested max walk workers so we stay under ~80% of the FD limit.
/// Returns `None` if no limit is available.
pub fn max_workers_by_fd_limit() -> Option<usize> {
    workers_for_fd_limit(max_open_fds()?)
}

fn workers_for_fd_limit(limit: u64) -> Option<usize> {
    let usable = (limit as f64 * FD_LIMIT_FRACTION) as usize;
    if usable < FDS_PER_WORKER {
        return Some(1);
    }
    Some(usable / FDS_PER_WORKER)
}

/// Cap `requested` workers by the FD limit. Never returns zero.
pub fn cap_workers(requested: usize) -> usize {
    match max_workers_by_fd_limit() {
        Some(fd_cap) if fd_cap < requested => {
            log::debug!("Capping threads {} -> {} (FD limit ~80%)", requested, fd_cap);
            fd_cap.max(1)
        }
        _ => requested.max(1),
    }
}
