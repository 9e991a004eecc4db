//! CLI command handler: build the filter config, run the walk, report.

use anyhow::{Context, Result};
use std::sync::Arc;
use std::sync::atomic::{AtomicBool, Ordering};

use crate::analyze_dir_with_opts;
use crate::engine::arg_parser::Cli;
use crate::error::TallyError;
use crate::report::{export_csv, print_results, render_json};
use crate::types::{FilterConfig, RunOpts, SizeThreshold};
use crate::utils::config::WorkerThreadLimits;
use crate::utils::{Colors, setup_logging};

/// Turn parsed arguments into a [`FilterConfig`]. Invalid thresholds fail here, before any walk.
pub fn build_filter_config(cli: &Cli) -> Result<FilterConfig, TallyError> {
    let mut config = FilterConfig::new();
    config.set_size_threshold(SizeThreshold::new(
        cli.min_size.unwrap_or(0),
        cli.max_size.unwrap_or(u64::MAX),
    )?);
    config.show_hidden = cli.all;
    let threads = cli
        .threads
        .map(|t| t as usize)
        .unwrap_or_else(|| WorkerThreadLimits::current().all_threads);
    config.set_parallelism(threads)?;
    for dir in &cli.exclude {
        config.add_excluded_path(dir);
    }
    for t in &cli.types {
        config.add_included_type(t);
    }
    Ok(config)
}

fn install_cancel_handler() -> Result<Arc<AtomicBool>> {
    let cancel_requested = Arc::new(AtomicBool::new(false));
    let cancel_requested_handler = Arc::clone(&cancel_requested);
    ctrlc::set_handler(move || {
        cancel_requested_handler.store(true, Ordering::Relaxed);
    })
    .context("set Ctrl+C handler")?;
    Ok(cancel_requested)
}

/// Analyze `cli.dir` and print the report; export CSV when `--output` is given.
pub fn handle_run(cli: &Cli) -> Result<()> {
    setup_logging(cli.verbose);
    let config = build_filter_config(cli)?;

    let opts = RunOpts {
        verbose: cli.verbose,
        cancel_flag: Some(install_cancel_handler()?),
    };

    if !cli.json {
        println!(
            "{}",
            Colors::notice(&format!("Analyzing directory: {}", cli.dir.display()))
        );
    }
    // The target is checked (and canonicalized) by the walk itself.
    let snapshot = analyze_dir_with_opts(&cli.dir, &config, &opts)?;

    if cli.json {
        println!("{}", render_json(&snapshot)?);
    } else {
        print_results(&snapshot);
    }

    if let Some(output) = &cli.output {
        export_csv(&snapshot, output, cli.human)?;
        if !cli.json {
            println!(
                "{}",
                Colors::value(&format!("Results exported to {}", output.display()))
            );
        }
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::Parser;

    fn parse(args: &[&str]) -> std::result::Result<Cli, clap::Error> {
        Cli::try_parse_from(std::iter::once("extstat").chain(args.iter().copied()))
    }

    #[test]
    fn full_argument_set() {
        let cli = parse(&[
            "-a", "-e", "node_modules", "-e", "target", "-t", ".cpp", "-t", "", "-s", "1K", "-S",
            "1M", "-j", "4", "-o", "out.csv", "src",
        ])
        .unwrap();
        let config = build_filter_config(&cli).unwrap();
        assert!(config.show_hidden);
        assert_eq!(config.excluded_paths.len(), 2);
        assert!(config.included_types.contains(".cpp"));
        assert!(config.included_types.contains("[no extension]"));
        assert_eq!(config.size_threshold.min_size(), 1024);
        assert_eq!(config.size_threshold.max_size(), 1024 * 1024);
        assert_eq!(config.parallelism(), 4);
        assert_eq!(cli.output.as_deref(), Some(std::path::Path::new("out.csv")));
    }

    #[test]
    fn defaults() {
        let cli = parse(&["."]).unwrap();
        let config = build_filter_config(&cli).unwrap();
        assert!(!config.show_hidden);
        assert!(config.excluded_paths.is_empty());
        assert!(config.included_types.is_empty());
        assert_eq!(config.size_threshold, SizeThreshold::default());
        assert!(config.parallelism() >= 1);
    }

    #[test]
    fn bad_arguments_rejected() {
        assert!(parse(&[]).is_err());
        assert!(parse(&["-j", "0", "."]).is_err());
        assert!(parse(&["-j", "-3", "."]).is_err());
        assert!(parse(&["-j", "many", "."]).is_err());
        assert!(parse(&["-s", "10Q", "."]).is_err());
        assert!(parse(&["-e"]).is_err());
    }

    #[test]
    fn min_above_max_rejected_before_walk() {
        let cli = parse(&["-s", "100", "-S", "10", "/does/not/exist"]).unwrap();
        assert!(matches!(
            build_filter_config(&cli),
            Err(TallyError::InvalidThreshold { min: 100, max: 10 })
        ));
    }

    #[test]
    fn missing_target_fails_the_run() {
        let tmp = tempfile::TempDir::new().unwrap();
        let missing = tmp.path().join("gone");
        let cli = parse(&["--json", missing.to_str().unwrap()]).unwrap();
        let err = handle_run(&cli).unwrap_err();
        assert!(matches!(
            err.downcast_ref::<TallyError>(),
            Some(TallyError::NotADirectory(p)) if *p == missing
        ));
    }

    #[test]
    fn help_is_a_display_request() {
        let err = parse(&["-h"]).unwrap_err();
        assert_eq!(err.kind(), clap::error::ErrorKind::DisplayHelp);
    }
}
