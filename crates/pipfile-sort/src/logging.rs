//! Diagnostic logging for pipfile-sort.
//!
//! Diagnostics go through `tracing` and are printed to stderr. They are off
//! unless `--verbose` is passed or `RUST_LOG` is set.

use std::io::IsTerminal;

use anyhow::Result;
use tracing::level_filters::LevelFilter;
use tracing_subscriber::filter::Directive;
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;
use tracing_subscriber::{EnvFilter, Layer};

/// How much diagnostic output to show.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Default)]
pub enum Level {
    /// No diagnostics.
    #[default]
    Off,
    /// `-v`: debug messages.
    Verbose,
    /// `-vv` and beyond: trace messages.
    ExtraVerbose,
}

impl Level {
    /// Map the `-v` count to a level.
    pub fn from_verbosity(verbose: u8) -> Self {
        match verbose {
            0 => Self::Off,
            1 => Self::Verbose,
            _ => Self::ExtraVerbose,
        }
    }

    fn directive(self) -> Result<Directive> {
        Ok(match self {
            Self::Off => LevelFilter::OFF.into(),
            Self::Verbose => "pipfile_sort=debug".parse()?,
            Self::ExtraVerbose => "pipfile_sort=trace".parse()?,
        })
    }
}

/// Install the global `tracing` subscriber.
///
/// `RUST_LOG`, when set, takes precedence over the level.
pub fn setup_logging(level: Level) -> Result<()> {
    let filter = EnvFilter::builder()
        .with_default_directive(level.directive()?)
        .from_env()?;

    tracing_subscriber::registry()
        .with(
            tracing_subscriber::fmt::layer()
                .without_time()
                .with_target(level == Level::ExtraVerbose)
                .with_ansi(std::io::stderr().is_terminal())
                .with_writer(std::io::stderr)
                .with_filter(filter),
        )
        .try_init()?;

    Ok(())
}
