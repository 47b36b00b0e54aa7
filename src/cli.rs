//! Command-line interface.

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use std::io::{BufRead, Write};
use std::path::PathBuf;
use std::process::ExitCode;
use tracing::debug;

use crate::arithmetic;
use crate::calculator::{Evaluator, format_display, format_plain};
use crate::config::{AppConfig, load_app_config, load_config_from};
use crate::error::CalcError;

#[derive(Parser)]
#[command(name = "calculator")]
#[command(about = "Basic arithmetic and single-operation expressions")]
#[command(version)]
pub struct Cli {
    /// Read settings from this file instead of ~/.config/calculator/config.toml
    #[arg(long, global = true)]
    pub config: Option<PathBuf>,

    /// Accept `/` in expressions
    #[arg(long, global = true)]
    pub division: bool,

    /// Print results without thousand separators
    #[arg(long, global = true)]
    pub raw: bool,

    /// Without a subcommand, expressions are read from stdin, one per line
    #[command(subcommand)]
    pub command: Option<Commands>,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Evaluate an expression such as "2 + 2"
    Eval { expression: String },
    /// Sum all numbers
    Add {
        #[arg(allow_negative_numbers = true)]
        numbers: Vec<f64>,
    },
    /// Subtract the remaining numbers from the first
    Sub {
        #[arg(allow_negative_numbers = true)]
        numbers: Vec<f64>,
    },
    /// Multiply all numbers
    Mul {
        #[arg(allow_negative_numbers = true)]
        numbers: Vec<f64>,
    },
    /// Divide the first number by the remaining ones
    Div {
        #[arg(allow_negative_numbers = true)]
        numbers: Vec<f64>,
    },
    /// Square root of a number
    Sqrt {
        #[arg(allow_negative_numbers = true)]
        x: f64,
    },
}

impl Commands {
    /// Run the arithmetic behind this command.
    pub fn compute(&self, evaluator: &Evaluator) -> Result<f64, CalcError> {
        match self {
            Commands::Eval { expression } => evaluator.evaluate(expression),
            Commands::Add { numbers } => Ok(arithmetic::add(numbers)),
            Commands::Sub { numbers } => arithmetic::subtract(numbers),
            Commands::Mul { numbers } => Ok(arithmetic::multiply(numbers)),
            Commands::Div { numbers } => arithmetic::divide(numbers),
            Commands::Sqrt { x } => arithmetic::sqrt(*x),
        }
    }
}

impl Cli {
    /// Resolve the effective settings: config file first, then flags.
    pub fn settings(&self) -> Result<AppConfig> {
        let mut config = match &self.config {
            Some(path) => load_config_from(path)
                .with_context(|| format!("Failed to load config from {}", path.display()))?,
            None => load_app_config().unwrap_or_default(),
        };

        if self.division {
            config.division = true;
        }
        if self.raw {
            config.group_digits = false;
        }
        debug!(?config, "resolved settings");
        Ok(config)
    }
}

/// Format a value according to the settings.
pub fn render(value: f64, config: &AppConfig) -> String {
    if config.group_digits {
        format_display(value, config.precision)
    } else {
        format_plain(value, config.precision)
    }
}

/// Execute the parsed command line against stdin/stdout/stderr.
pub fn run(cli: &Cli) -> Result<ExitCode> {
    let config = cli.settings()?;
    let evaluator = Evaluator::from_division_flag(config.division);

    match &cli.command {
        Some(command) => match command.compute(&evaluator) {
            Ok(value) => {
                println!("{}", render(value, &config));
                Ok(ExitCode::SUCCESS)
            }
            Err(e) => {
                eprintln!("{e}");
                Ok(ExitCode::FAILURE)
            }
        },
        None => {
            let stdin = std::io::stdin();
            let failures = evaluate_lines(
                &evaluator,
                &config,
                stdin.lock(),
                &mut std::io::stdout().lock(),
                &mut std::io::stderr().lock(),
            )?;
            Ok(if failures == 0 {
                ExitCode::SUCCESS
            } else {
                ExitCode::FAILURE
            })
        }
    }
}

/// Evaluate each non-blank line of `input`, writing one result per line.
///
/// Failures, including lines that are not valid UTF-8, are reported to
/// `err` and do not stop processing. Returns the number of lines that failed.
pub fn evaluate_lines<R, W, E>(
    evaluator: &Evaluator,
    config: &AppConfig,
    mut input: R,
    out: &mut W,
    err: &mut E,
) -> Result<usize>
where
    R: BufRead,
    W: Write,
    E: Write,
{
    let mut failures = 0;
    let mut buf = Vec::new();
    let mut line_number = 0;

    loop {
        buf.clear();
        let read = input
            .read_until(b'\n', &mut buf)
            .context("Failed to read input")?;
        if read == 0 {
            break;
        }
        line_number += 1;

        let Ok(line) = std::str::from_utf8(&buf) else {
            failures += 1;
            writeln!(err, "line {line_number}: input is not valid UTF-8")?;
            continue;
        };
        if line.trim().is_empty() {
            continue;
        }

        match evaluator.evaluate(line) {
            Ok(value) => writeln!(out, "{}", render(value, config))?,
            Err(e) => {
                failures += 1;
                writeln!(err, "{e}")?;
            }
        }
    }

    Ok(failures)
}
