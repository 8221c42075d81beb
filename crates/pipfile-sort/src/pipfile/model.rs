//! Data model types for Pipfile package sections.
//!
//! The Pipfile is kept as a [`DocumentMut`] so that comments, key formatting
//! and unrelated sections survive a rewrite. Only `[packages]` and
//! `[dev-packages]` are lifted out of the document, each into a
//! [`PackageCollection`] mapping package names to a [`Declaration`].
//!
//! Packages can be specified as either a simple version string (`"*"`,
//! `">=1.0"`) or a table with extended fields
//! (`{version = ">=1.0", extras = ["security"]}`).

use std::path::Path;
use std::str::FromStr;

use indexmap::IndexMap;
use rustc_hash::FxHashMap;
use toml_edit::{DocumentMut, InlineTable, Item, Key, RawString, Table, Value};

/// Errors raised while loading or storing a Pipfile.
#[derive(Debug, thiserror::Error)]
pub enum ManifestError {
    #[error(transparent)]
    Io(#[from] std::io::Error),

    #[error("Pipfile is not valid TOML")]
    Parse(#[from] toml_edit::TomlError),

    #[error("`[{section}]` must be a table")]
    NotATable { section: Section },
}

/// One of the two package sections of a Pipfile.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash)]
pub enum Section {
    /// `[packages]`: production dependencies.
    Packages,
    /// `[dev-packages]`: development dependencies.
    DevPackages,
}

impl Section {
    /// The TOML table name of the section.
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Packages => "packages",
            Self::DevPackages => "dev-packages",
        }
    }
}

impl std::fmt::Display for Section {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// The value associated with one package name.
///
/// The payload keeps its TOML decoration, so trailing comments and spacing
/// travel with the package when it is reordered.
#[derive(Debug, Clone)]
pub enum Declaration {
    /// Simple version string: `requests = "*"` or `requests = ">=1.0"`.
    Simple(Value),

    /// Inline table: `requests = {version = ">=1.0", extras = ["security"]}`.
    Inline(InlineTable),

    /// Standalone sub-table: `[packages.requests]`.
    Table(Table),

    /// Any other TOML value. Pipfiles don't define these, but they are
    /// carried through untouched.
    Other(Item),
}

impl Declaration {
    /// The representation kind used to group packages while sorting.
    pub fn kind(&self) -> DeclarationKind {
        match self {
            Self::Simple(_) => DeclarationKind::Simple,
            Self::Inline(_) => DeclarationKind::Detailed,
            Self::Table(_) => DeclarationKind::Table,
            Self::Other(_) => DeclarationKind::Other,
        }
    }
}

impl From<Item> for Declaration {
    fn from(item: Item) -> Self {
        match item {
            Item::Value(value @ Value::String(_)) => Self::Simple(value),
            Item::Value(Value::InlineTable(table)) => Self::Inline(table),
            Item::Table(table) => Self::Table(table),
            item => Self::Other(item),
        }
    }
}

impl From<Declaration> for Item {
    fn from(declaration: Declaration) -> Self {
        match declaration {
            Declaration::Simple(value) => Self::Value(value),
            Declaration::Inline(table) => Self::Value(Value::InlineTable(table)),
            Declaration::Table(table) => Self::Table(table),
            Declaration::Other(item) => item,
        }
    }
}

/// Discriminant of a [`Declaration`]'s representation.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash)]
pub enum DeclarationKind {
    /// A version string.
    Simple,
    /// An inline table.
    Detailed,
    /// A sub-table. TOML prints these after every plain value of the
    /// section, so they always sort last.
    Table,
    /// Anything else.
    Other,
}

impl DeclarationKind {
    /// Whether declarations of this kind are printed after the section's values.
    pub fn is_table(self) -> bool {
        matches!(self, Self::Table)
    }
}

/// An ordered mapping from package name to [`Declaration`].
#[derive(Debug, Clone, Default)]
pub struct PackageCollection {
    packages: IndexMap<String, Declaration>,
}

impl PackageCollection {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn len(&self) -> usize {
        self.packages.len()
    }

    pub fn is_empty(&self) -> bool {
        self.packages.is_empty()
    }

    /// Insert a package, returning the previous declaration for that name.
    ///
    /// A new name is appended at the end; an existing name keeps its place.
    pub fn insert(&mut self, name: impl Into<String>, declaration: Declaration) -> Option<Declaration> {
        self.packages.insert(name.into(), declaration)
    }

    pub fn get(&self, name: &str) -> Option<&Declaration> {
        self.packages.get(name)
    }

    /// Package names in their current order.
    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.packages.keys().map(String::as_str)
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &Declaration)> {
        self.packages
            .iter()
            .map(|(name, declaration)| (name.as_str(), declaration))
    }
}

impl FromIterator<(String, Declaration)> for PackageCollection {
    fn from_iter<I: IntoIterator<Item = (String, Declaration)>>(iter: I) -> Self {
        Self {
            packages: iter.into_iter().collect(),
        }
    }
}

impl IntoIterator for PackageCollection {
    type Item = (String, Declaration);
    type IntoIter = indexmap::map::IntoIter<String, Declaration>;

    fn into_iter(self) -> Self::IntoIter {
        self.packages.into_iter()
    }
}

/// A parsed Pipfile.
///
/// The package sections are detached from the underlying document while the
/// `Pipfile` is alive and are written back by [`Pipfile::to_toml_string`].
#[derive(Debug, Clone)]
pub struct Pipfile {
    /// The document with its package sections emptied.
    pub(crate) document: DocumentMut,

    /// Production dependencies.
    pub packages: PackageCollection,

    /// Development dependencies.
    pub dev_packages: PackageCollection,

    pub(crate) package_layout: SectionLayout,

    pub(crate) dev_package_layout: SectionLayout,
}

/// Formatting of a package section, reapplied when it is written back.
#[derive(Debug, Clone, Default)]
pub(crate) struct SectionLayout {
    /// Original key formatting, by package name.
    pub(crate) keys: FxHashMap<String, Key>,
    /// Blank lines above each sub-table header, in file order.
    pub(crate) table_gaps: Vec<String>,
}

impl Pipfile {
    /// Parse a Pipfile from the given path.
    pub fn from_path(path: &Path) -> Result<Self, ManifestError> {
        let content = fs_err::read_to_string(path)?;
        content.parse()
    }

    /// Whether the document declares the given section at all.
    pub fn has_section(&self, section: Section) -> bool {
        self.document.contains_key(section.as_str())
    }
}

impl FromStr for Pipfile {
    type Err = ManifestError;

    fn from_str(content: &str) -> Result<Self, Self::Err> {
        let mut document: DocumentMut = content.parse()?;
        let (packages, package_layout) = take_section(&mut document, Section::Packages)?;
        let (dev_packages, dev_package_layout) =
            take_section(&mut document, Section::DevPackages)?;
        Ok(Self {
            document,
            packages,
            dev_packages,
            package_layout,
            dev_package_layout,
        })
    }
}

/// Move every entry of a section out of the document, in file order.
///
/// The section itself stays behind so that its header, comments and
/// position are reused when the packages are written back. Both
/// `[packages]` tables and `packages = {...}` inline tables are accepted.
fn take_section(
    document: &mut DocumentMut,
    section: Section,
) -> Result<(PackageCollection, SectionLayout), ManifestError> {
    let mut packages = PackageCollection::new();
    let mut layout = SectionLayout::default();

    match document.get_mut(section.as_str()) {
        None => {}
        Some(Item::Table(table)) => {
            let names: Vec<String> = table.iter().map(|(name, _)| name.to_owned()).collect();
            for name in names {
                if let Some((key, item)) = table.remove_entry(&name) {
                    if let Item::Table(sub_table) = &item {
                        let (gap, _) = split_prefix(sub_table);
                        layout.table_gaps.push(gap.to_owned());
                    }
                    layout.keys.insert(name.clone(), key);
                    packages.insert(name, Declaration::from(item));
                }
            }
        }
        Some(Item::Value(Value::InlineTable(table))) => {
            let names: Vec<String> = table.iter().map(|(name, _)| name.to_owned()).collect();
            for name in names {
                if let Some((key, value)) = table.remove_entry(&name) {
                    layout.keys.insert(name.clone(), key);
                    packages.insert(name, Declaration::from(Item::Value(value)));
                }
            }
        }
        Some(_) => return Err(ManifestError::NotATable { section }),
    }

    Ok((packages, layout))
}

/// Split a sub-table's header prefix into its leading blank lines and the
/// comments attached to the header.
pub(crate) fn split_prefix(table: &Table) -> (&str, &str) {
    let prefix = table
        .decor()
        .prefix()
        .and_then(RawString::as_str)
        .unwrap_or("");
    let content = prefix
        .find(|c: char| !c.is_whitespace())
        .unwrap_or(prefix.len());
    let gap = prefix[..content].rfind('\n').map_or(0, |newline| newline + 1);
    prefix.split_at(gap)
}
