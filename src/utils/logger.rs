//! Console logging and the color palette used by reports.

use colored::{ColoredString, Colorize};
use env_logger::Builder;
use log::{Level, LevelFilter};
use std::io::Write;

use super::config::PackagePaths;

/// Install the console logger: `verbose` lowers this crate's level to debug. Dependencies only
/// log warnings. Calling it twice is a no-op.
pub fn setup_logging(verbose: bool) {
    let level = if verbose {
        LevelFilter::Debug
    } else {
        LevelFilter::Info
    };
    let name = PackagePaths::get().pkg_name();

    // Builder::new() rather than from_default_env: no environment variables are read.
    let _ = Builder::new()
        .filter_level(LevelFilter::Warn)
        .filter_module(name, level)
        .format(move |buf, record| {
            let tag = match record.level() {
                Level::Error => Some("ERROR".red()),
                Level::Warn => Some("WARN".yellow()),
                _ => None,
            };
            match tag {
                Some(tag) => writeln!(
                    buf,
                    "[{} {} {}] {}",
                    name.cyan(),
                    tag,
                    record.target().white(),
                    record.args()
                ),
                None => writeln!(buf, "[{}] {}", name.cyan(), record.args()),
            }
        })
        .try_init();
}

/// Console palette for reports and fatal messages.
pub struct Colors;

impl Colors {
    pub fn frame(s: &str) -> ColoredString {
        s.cyan()
    }

    pub fn value(s: &str) -> ColoredString {
        s.green()
    }

    pub fn header(s: &str) -> ColoredString {
        s.yellow()
    }

    pub fn notice(s: &str) -> ColoredString {
        s.blue()
    }

    pub fn failure(s: &str) -> ColoredString {
        s.red()
    }
}
