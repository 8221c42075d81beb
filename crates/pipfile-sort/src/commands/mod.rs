//! Command handlers for pipfile-sort.

use std::process::ExitCode;

pub mod sort;

pub use sort::{check_pipfile, execute, sort_pipfile};

/// Exit status for pipfile-sort.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum ExitStatus {
    /// The command succeeded.
    Success,

    /// The command failed with an error.
    Error,

    /// Packages were reordered and `--exit-code` was requested.
    Changed,
}

impl From<ExitStatus> for ExitCode {
    fn from(status: ExitStatus) -> Self {
        match status {
            ExitStatus::Success => Self::from(0),
            ExitStatus::Error => Self::from(1),
            ExitStatus::Changed => Self::from(2),
        }
    }
}
