//! Walk pipeline: shared context, per-directory walk, orchestration, error reporting.

pub mod context;
pub mod error_handler;
pub mod orchestrator;
pub mod visited;
pub mod walk;

pub use context::WalkContext;
pub use error_handler::report_skipped_paths;
pub use orchestrator::run_walk;
pub use visited::VisitedSet;
pub use walk::{Listing, list_dir, walk_dir, walk_root};
