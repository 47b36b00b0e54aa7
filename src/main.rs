use std::process::ExitCode;

use calculator::cli::{Cli, run};
use calculator::logging::init_logging;
use clap::Parser;

fn main() -> ExitCode {
    init_logging();

    let cli = Cli::parse();
    match run(&cli) {
        Ok(code) => code,
        Err(e) => {
            eprintln!("{e:#}");
            ExitCode::FAILURE
        }
    }
}
