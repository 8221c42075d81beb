//! `pipfile-sort`: reorder `[packages]` and `[dev-packages]` in place.

use std::path::Path;

use anyhow::{Context, Result};
use tracing::{debug, trace};

use crate::cli::Cli;
use crate::commands::ExitStatus;
use crate::pipfile::{PackageCollection, Pipfile, Section};
use crate::printer::Printer;
use crate::sort::{SortOptions, sort_collection};

/// Execute `pipfile-sort`.
pub fn execute(cli: &Cli, printer: Printer) -> Result<ExitStatus> {
    let path = cli.pipfile.as_path();
    let options = cli.sort_options();
    debug!(path = %path.display(), ?options, "Sorting Pipfile");

    let (pipfile, changed) = if cli.check {
        check_pipfile(path, options)?
    } else {
        sort_pipfile(path, options)?
    };

    if !pipfile.has_section(Section::Packages) && !pipfile.has_section(Section::DevPackages) {
        printer.warn(&format!(
            "`{}` has no [packages] or [dev-packages] section.",
            path.display()
        ));
    }

    if !changed {
        printer.info(&format!("`{}` is already sorted.", path.display()));
        return Ok(ExitStatus::Success);
    }

    if cli.check {
        printer.info(&format!("Would sort `{}`.", path.display()));
    } else {
        printer.info(&format!("Sorted `{}`.", path.display()));
    }

    if cli.exit_code {
        Ok(ExitStatus::Changed)
    } else {
        Ok(ExitStatus::Success)
    }
}

/// Sort the Pipfile at `path` and write it back.
///
/// The file is rewritten even when nothing moved. Returns the sorted Pipfile
/// and whether either section was reordered.
pub fn sort_pipfile(path: &Path, options: SortOptions) -> Result<(Pipfile, bool)> {
    let (pipfile, changed) = check_pipfile(path, options)?;

    pipfile
        .write_to(path)
        .with_context(|| format!("Failed to write `{}`", path.display()))?;
    debug!(path = %path.display(), changed, "Wrote Pipfile");

    Ok((pipfile, changed))
}

/// Sort the Pipfile at `path` in memory without writing it.
pub fn check_pipfile(path: &Path, options: SortOptions) -> Result<(Pipfile, bool)> {
    let mut pipfile = Pipfile::from_path(path)
        .with_context(|| format!("Failed to load `{}`", path.display()))?;

    let (dev_packages, mut changed) = sort_section(
        std::mem::take(&mut pipfile.dev_packages),
        Section::DevPackages,
        options,
    );
    let (packages, packages_changed) = sort_section(
        std::mem::take(&mut pipfile.packages),
        Section::Packages,
        options,
    );
    changed |= packages_changed;

    pipfile.dev_packages = dev_packages;
    pipfile.packages = packages;

    Ok((pipfile, changed))
}

fn sort_section(
    collection: PackageCollection,
    section: Section,
    options: SortOptions,
) -> (PackageCollection, bool) {
    let count = collection.len();
    let sorted = sort_collection(collection, options);
    debug!(%section, count, changed = sorted.changed, "Sorted section");
    trace!(%section, order = ?sorted.collection.names().collect::<Vec<_>>());
    (sorted.collection, sorted.changed)
}
