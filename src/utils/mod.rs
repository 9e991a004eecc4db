pub mod config;
pub mod fd_limit;
pub mod logger;
pub mod size;

pub use config::*;
pub use fd_limit::{FDS_PER_WORKER, cap_workers, max_open_fds, max_workers_by_fd_limit};
pub use logger::{Colors, setup_logging};
pub use size::{format_size, parse_size};
