//! extstat CLI: file counts and sizes per type under a directory.

use clap::error::ErrorKind;
use clap::{CommandFactory, Parser};
use extstat::engine::arg_parser::Cli;
use extstat::engine::handle_run;
use extstat::utils::Colors;
use std::process::ExitCode;
use std::time::Instant;

fn main() -> ExitCode {
    let start_time = Instant::now();
    let cli = match Cli::try_parse() {
        Ok(cli) => cli,
        Err(err) => {
            let _ = err.print();
            return match err.kind() {
                ErrorKind::DisplayHelp | ErrorKind::DisplayVersion => ExitCode::SUCCESS,
                _ => ExitCode::FAILURE,
            };
        }
    };

    if let Err(err) = handle_run(&cli) {
        eprintln!("{}", Colors::failure(&format!("{err:#}")));
        eprintln!("{}", Cli::command().render_usage());
        return ExitCode::FAILURE;
    }
    log::debug!("Total time: {:?}", start_time.elapsed());
    ExitCode::SUCCESS
}
