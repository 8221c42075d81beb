//! Pipfile loading and storing for pipfile-sort.
//!
//! This module owns the boundary with the TOML document: it lifts
//! `[packages]` and `[dev-packages]` out of a parsed Pipfile as ordered
//! [`PackageCollection`]s and writes them back without disturbing the rest
//! of the file.

pub mod model;
mod writer;

pub use model::{
    Declaration, DeclarationKind, ManifestError, PackageCollection, Pipfile, Section,
};

/// The filename looked up when no path is given.
pub const PIPFILE_NAME: &str = "Pipfile";
