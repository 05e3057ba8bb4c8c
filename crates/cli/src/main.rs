// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

// Allow panic!/unwrap/expect in test code
#![cfg_attr(test, allow(clippy::panic))]
#![cfg_attr(test, allow(clippy::unwrap_used))]
#![cfg_attr(test, allow(clippy::expect_used))]

//! mlws: inspect Machine Learning workspace enumerations

mod color;
mod commands;
mod env;
mod exit_error;
mod logging;
mod output;

use anyhow::Result;
use clap::{CommandFactory, Parser, Subcommand};

use commands::{check, values, EnumKind};
use exit_error::ExitError;
use output::OutputFormat;

#[derive(Parser)]
#[command(name = "mlws", version, styles = color::styles())]
#[command(about = "List and validate Machine Learning workspace enumeration values")]
struct Cli {
    /// Output format (default: MLWS_OUTPUT, then text)
    #[arg(short = 'o', long = "output", global = true)]
    output: Option<OutputFormat>,

    #[command(subcommand)]
    command: Option<Command>,
}

#[derive(Subcommand)]
enum Command {
    /// Print every value of an enumeration in declaration order
    Values {
        /// Enumeration to list
        kind: EnumKind,
    },
    /// Validate a value and print its canonical label
    Check {
        /// Enumeration to check against
        kind: EnumKind,
        /// Wire string to validate
        value: String,
        /// Match labels ignoring ASCII case (default: MLWS_IGNORE_CASE)
        #[arg(long, short = 'i')]
        ignore_case: bool,
        /// Force case-sensitive matching, overriding MLWS_IGNORE_CASE
        #[arg(long, conflicts_with = "ignore_case")]
        strict: bool,
    },
}

fn run(cli: Cli) -> Result<()> {
    let format = output::resolve_format(cli.output);

    match cli.command {
        None => {
            Cli::command().print_help()?;
            Ok(())
        }
        Some(Command::Values { kind }) => values::handle(kind, format),
        Some(Command::Check { kind, value, ignore_case, strict }) => {
            let ignore_case = !strict && (ignore_case || env::ignore_case());
            check::handle(kind, &value, ignore_case, format)
        }
    }
}

fn main() {
    let cli = Cli::parse();

    if let Err(e) = logging::init(&env::log_filter()) {
        eprintln!("warning: {e}");
    }

    if let Err(err) = run(cli) {
        let code = err.downcast_ref::<ExitError>().map_or(1, |e| e.code);
        eprintln!("error: {err}");
        std::process::exit(code);
    }
}
