//! pipfile-sort: keep the packages of a Pipfile in alphabetical order.
//!
//! This crate provides the entry point for the `pipfile-sort` binary. It
//! parses CLI arguments, sorts `[packages]` and `[dev-packages]` with
//! [`sort::sort_collection`], rewrites the Pipfile, and maps the outcome to
//! an exit status.

#![deny(clippy::print_stdout, clippy::print_stderr)]

use std::ffi::OsString;
use std::process::ExitCode;

use anstream::eprint;
use anyhow::Result;
use clap::Parser;

use crate::cli::Cli;
use crate::commands::ExitStatus;
use crate::logging::Level;
use crate::printer::Printer;

pub mod cli;
pub mod commands;
pub mod logging;
pub mod pipfile;
pub mod printer;
pub mod sort;

/// Entry point for the pipfile-sort CLI.
pub fn main<I, T>(args: I) -> ExitCode
where
    I: IntoIterator<Item = T>,
    T: Into<OsString> + Clone,
{
    let cli = match Cli::try_parse_from(args) {
        Ok(cli) => cli,
        // Usage errors exit 1; status 2 is reserved for reordered packages.
        Err(err) if err.use_stderr() => {
            eprint!("{}", err.render().ansi());
            return ExitStatus::Error.into();
        }
        // `--help` and `--version`.
        Err(err) => err.exit(),
    };

    let printer = Printer::new(cli.quiet);

    match run(&cli, printer) {
        Ok(status) => status.into(),
        Err(err) => {
            printer.error(&err);
            ExitStatus::Error.into()
        }
    }
}

fn run(cli: &Cli, printer: Printer) -> Result<ExitStatus> {
    logging::setup_logging(Level::from_verbosity(cli.verbose))?;
    commands::execute(cli, printer)
}
