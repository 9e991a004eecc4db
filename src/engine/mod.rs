//! Engine module: CLI surface and the helpers the walk runs on.

pub mod arg_parser;
pub mod cli;
pub mod parallel;
pub mod progress;
pub mod tools;

// Re-export commonly used functions
pub use arg_parser::Cli;
pub use cli::{build_filter_config, handle_run};
pub use parallel::{build_walk_pool, should_fan_out};
pub use tools::{canonical_or_raw, dir_size, resolve_target_dir};
