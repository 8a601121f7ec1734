//! runes - print Unicode code points with their names, categories and encodings

mod cli;
mod input;
mod run;

use std::process::ExitCode;

use clap::Parser;

use crate::cli::Cli;

fn main() -> ExitCode {
    // Initialize logging
    env_logger::init();

    let cli = Cli::parse();
    match run::run(&cli) {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            log::debug!("run failed: {err:?}");
            eprintln!("runes: {err}");
            ExitCode::FAILURE
        },
    }
}
