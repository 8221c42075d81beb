//! CLI argument definitions for pipfile-sort.
//!
//! pipfile-sort has a single command; all of its flags live on [`Cli`].

use std::path::PathBuf;

use clap::Parser;
use clap::builder::styling::{AnsiColor, Effects, Styles};

use crate::pipfile::PIPFILE_NAME;
use crate::sort::SortOptions;

/// Clap v3-style help menu colors.
const STYLES: Styles = Styles::styled()
    .header(AnsiColor::Green.on_default().effects(Effects::BOLD))
    .usage(AnsiColor::Green.on_default().effects(Effects::BOLD))
    .literal(AnsiColor::Cyan.on_default().effects(Effects::BOLD))
    .placeholder(AnsiColor::Cyan.on_default());

/// Sort the packages of a Pipfile alphabetically.
#[derive(Parser, Debug)]
#[command(
    name = "pipfile-sort",
    author,
    version,
    about = "Sort the packages of a Pipfile alphabetically.",
    styles = STYLES,
    after_help = "Exit status: 0 on success, 1 on error, 2 when `--exit-code` is set and packages were reordered."
)]
pub struct Cli {
    /// Exit with status 2 when packages were reordered.
    ///
    /// By default the exit status is 0 whether or not anything changed.
    #[arg(long)]
    pub exit_code: bool,

    /// Compare package names case-sensitively.
    ///
    /// Uppercase names sort before lowercase ones.
    #[arg(long)]
    pub case_sensitive: bool,

    /// Sort all packages in one pass instead of grouping them by declaration type.
    ///
    /// By default, version strings and tables are kept in separate groups,
    /// in the order each type first appears.
    #[arg(long)]
    pub no_group_types: bool,

    /// Report whether the Pipfile needs sorting without rewriting it.
    #[arg(long)]
    pub check: bool,

    /// Path to the Pipfile.
    #[arg(long, value_name = "PATH", default_value = PIPFILE_NAME)]
    pub pipfile: PathBuf,

    /// Increase logging verbosity.
    #[arg(short, long, action = clap::ArgAction::Count)]
    pub verbose: u8,

    /// Suppress all output.
    #[arg(short, long)]
    pub quiet: bool,
}

impl Cli {
    /// The sorter configuration selected by the flags.
    pub fn sort_options(&self) -> SortOptions {
        SortOptions {
            case_sensitive: self.case_sensitive,
            group_by_type: !self.no_group_types,
        }
    }
}
