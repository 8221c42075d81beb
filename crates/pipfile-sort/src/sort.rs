//! Canonical ordering of a [`PackageCollection`].
//!
//! Packages are ordered by name, optionally case-folded, and optionally
//! grouped by [`DeclarationKind`] first. Groups appear in the order their kind
//! is first seen in the input, and equal keys keep their input order, so
//! sorting an already sorted collection never reports a change.
//!
//! `[packages.name]` sub-tables always come last, in both modes. TOML prints
//! a table's sub-tables after its plain values, so no other order can be
//! written back.

use crate::pipfile::{Declaration, DeclarationKind, PackageCollection};

/// Options controlling how packages are compared.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub struct SortOptions {
    /// Compare names as-is instead of by their lowercase form.
    pub case_sensitive: bool,
    /// Keep packages of the same declaration kind together.
    pub group_by_type: bool,
}

impl Default for SortOptions {
    fn default() -> Self {
        Self {
            case_sensitive: false,
            group_by_type: true,
        }
    }
}

/// The result of [`sort_collection`].
#[derive(Debug)]
pub struct Sorted {
    /// The packages in canonical order.
    pub collection: PackageCollection,
    /// Whether the canonical order differs from the input order.
    pub changed: bool,
}

struct Entry {
    is_table: bool,
    group: usize,
    index: usize,
    name: String,
    declaration: Declaration,
}

/// Reorder a collection into canonical order.
///
/// Declarations are moved through untouched.
pub fn sort_collection(collection: PackageCollection, options: SortOptions) -> Sorted {
    let mut kinds: Vec<DeclarationKind> = Vec::new();
    let mut entries: Vec<Entry> = collection
        .into_iter()
        .enumerate()
        .map(|(index, (name, declaration))| Entry {
            is_table: declaration.kind().is_table(),
            group: if options.group_by_type {
                group_of(&mut kinds, declaration.kind())
            } else {
                0
            },
            index,
            name,
            declaration,
        })
        .collect();

    // `sort_by_cached_key` is stable, which keeps ties in input order.
    entries.sort_by_cached_key(|entry| {
        (
            entry.is_table,
            entry.group,
            sort_key(&entry.name, options),
        )
    });

    let changed = entries
        .iter()
        .enumerate()
        .any(|(position, entry)| position != entry.index);

    Sorted {
        collection: entries
            .into_iter()
            .map(|entry| (entry.name, entry.declaration))
            .collect(),
        changed,
    }
}

/// Index of `kind` in first-seen order, registering it if new.
fn group_of(kinds: &mut Vec<DeclarationKind>, kind: DeclarationKind) -> usize {
    if let Some(group) = kinds.iter().position(|seen| *seen == kind) {
        return group;
    }
    kinds.push(kind);
    kinds.len() - 1
}

fn sort_key(name: &str, options: SortOptions) -> String {
    if options.case_sensitive {
        name.to_owned()
    } else {
        name.to_lowercase()
    }
}
