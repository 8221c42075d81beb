//! Pipfile writer: put the package sections back into the document.
//!
//! Packages are reinserted in collection order with their original key
//! formatting. Everything outside `[packages]` and `[dev-packages]` is
//! emitted exactly as it was parsed.

use std::path::Path;

use toml_edit::{DocumentMut, Item, Key, Table, Value};

use crate::pipfile::model::{
    Declaration, ManifestError, PackageCollection, Pipfile, Section, SectionLayout, split_prefix,
};

impl Pipfile {
    /// Write the Pipfile to the given path.
    pub fn write_to(&self, path: &Path) -> Result<(), ManifestError> {
        fs_err::write(path, self.to_toml_string())?;
        Ok(())
    }

    /// Serialize the Pipfile to a TOML string.
    pub fn to_toml_string(&self) -> String {
        let mut document = self.document.clone();
        restore_section(
            &mut document,
            Section::Packages,
            &self.packages,
            &self.package_layout,
        );
        restore_section(
            &mut document,
            Section::DevPackages,
            &self.dev_packages,
            &self.dev_package_layout,
        );
        document.to_string()
    }
}

/// Refill a section from a collection.
///
/// An empty collection for a section the file never declared is left out.
fn restore_section(
    document: &mut DocumentMut,
    section: Section,
    packages: &PackageCollection,
    layout: &SectionLayout,
) {
    if packages.is_empty() && !document.contains_key(section.as_str()) {
        return;
    }

    match document
        .entry(section.as_str())
        .or_insert_with(toml_edit::table)
    {
        Item::Table(table) => {
            let mut gaps = layout.table_gaps.iter();
            for (name, declaration) in packages.iter() {
                let key = key_for(layout, name);
                let item = match declaration.clone() {
                    Declaration::Table(sub_table) => {
                        let gap = gaps.next().map_or("\n", String::as_str);
                        Item::Table(detach(sub_table, gap))
                    }
                    declaration => Item::from(declaration),
                };
                table.insert_formatted(&key, item);
            }
        }
        Item::Value(Value::InlineTable(table)) => {
            for (name, declaration) in packages.iter() {
                if let Ok(value) = Item::from(declaration.clone()).into_value() {
                    table.insert_formatted(&key_for(layout, name), value);
                }
            }
            // Reordering leaves the separators of the original positions behind.
            table.fmt();
        }
        _ => {}
    }
}

fn key_for(layout: &SectionLayout, name: &str) -> Key {
    layout
        .keys
        .get(name)
        .cloned()
        .unwrap_or_else(|| Key::new(name))
}

/// Rebuild a sub-table without its parsed document position.
///
/// Parsed tables are printed at their original position in the file, which
/// would undo the new order. Unpositioned tables follow their parent. The
/// blank lines above the header belong to the slot the table lands in;
/// comments above the header move with the table.
fn detach(mut table: Table, gap: &str) -> Table {
    let mut detached = Table::new();
    detached.set_implicit(table.is_implicit());
    detached.set_dotted(table.is_dotted());
    *detached.decor_mut() = table.decor().clone();
    let (_, comments) = split_prefix(&table);
    detached.decor_mut().set_prefix(format!("{gap}{comments}"));

    let names: Vec<String> = table.iter().map(|(name, _)| name.to_owned()).collect();
    for name in names {
        if let Some((key, item)) = table.remove_entry(&name) {
            detached.insert_formatted(&key, item);
        }
    }
    detached
}
