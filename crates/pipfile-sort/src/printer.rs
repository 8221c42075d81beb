//! Output formatting for pipfile-sort.
//!
//! The [`Printer`] controls whether messages are emitted to stderr based on
//! the user's `--quiet` flag. Errors are always printed regardless of quiet
//! mode.

use anstream::eprintln;
use owo_colors::OwoColorize;

/// Controls output formatting for pipfile-sort.
#[derive(Copy, Clone)]
pub struct Printer {
    /// Whether output is suppressed.
    quiet: bool,
}

impl Printer {
    pub fn new(quiet: bool) -> Self {
        Self { quiet }
    }

    /// Print an informational message to stderr.
    pub fn info(&self, message: &str) {
        if !self.quiet {
            eprintln!("{message}");
        }
    }

    /// Print a warning message to stderr.
    pub fn warn(&self, message: &str) {
        if !self.quiet {
            eprintln!("{}: {}", "warning".yellow().bold(), message);
        }
    }

    /// Print an error message to stderr, followed by its causes.
    pub fn error(&self, err: &anyhow::Error) {
        let mut causes = err.chain();
        if let Some(head) = causes.next() {
            eprintln!("{}: {}", "error".red().bold(), head);
        }
        for cause in causes {
            eprintln!(
                "  {}: {}",
                "Caused by".red().bold(),
                cause.to_string().trim()
            );
        }
    }
}
