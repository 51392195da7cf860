//! Structure-preserving rewrite of item files
//!
//! Uses `toml_edit` to move the `[[item]]` tables of a file into resolved
//! order and drop their `position` keys, keeping comments and any other
//! fields attached to each item.

use crate::registry::ItemRegistry;
use ordinal_core::{OrdinalError, Result};
use std::collections::HashMap;
use std::fmt;
use std::fs;
use std::path::Path;

/// A parsed item file that can be rewritten in place
pub struct ItemDocument {
    doc: toml_edit::DocumentMut,
}

impl ItemDocument {
    /// Parse an item file into an editable document
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let content = fs::read_to_string(path.as_ref())?;
        Self::from_str(&content)
    }

    /// Parse a TOML string into an editable document
    pub fn from_str(content: &str) -> Result<Self> {
        let doc: toml_edit::DocumentMut = content
            .parse()
            .map_err(|e: toml_edit::TomlError| OrdinalError::TomlParseError(e.to_string()))?;
        Ok(Self { doc })
    }

    /// Resolve the order of the items in this document and rewrite it
    /// accordingly, returning the resolved names
    pub fn apply_order(&mut self) -> Result<Vec<String>> {
        let mut registry = ItemRegistry::new();
        registry.load_string(&self.doc.to_string())?;
        let order = registry.order()?;
        self.reorder(&order)?;
        Ok(order)
    }

    /// Move the `[[item]]` tables into `order` and remove their positions.
    ///
    /// `order` must name every item in the document exactly once.
    pub fn reorder(&mut self, order: &[String]) -> Result<()> {
        let tables = self
            .doc
            .get_mut("item")
            .and_then(toml_edit::Item::as_array_of_tables_mut)
            .ok_or_else(|| OrdinalError::ItemLoadError("No [[item]] tables in file".to_string()))?;

        let mut by_name: HashMap<String, toml_edit::Table> = HashMap::new();
        for table in tables.iter() {
            let name = table
                .get("name")
                .and_then(toml_edit::Item::as_str)
                .ok_or_else(|| OrdinalError::ItemLoadError("Item without a name".to_string()))?;
            by_name.insert(name.to_string(), table.clone());
        }

        if by_name.len() != order.len() {
            return Err(OrdinalError::ItemLoadError(format!(
                "Order names {} item(s), file has {}",
                order.len(),
                by_name.len()
            )));
        }

        // Reuse the existing slots so tables interleaved with items stay put
        let mut slots: Vec<usize> = tables.iter().filter_map(|t| t.position()).collect();
        slots.sort_unstable();

        let mut reordered = Vec::with_capacity(order.len());
        for (index, name) in order.iter().enumerate() {
            let mut table = by_name.remove(name).ok_or_else(|| {
                OrdinalError::ItemLoadError(format!("Item '{}' not found in file", name))
            })?;
            table.remove("position");
            if let Some(slot) = slots.get(index) {
                table.set_position(*slot);
            }
            reordered.push(table);
        }

        tables.clear();
        for table in reordered {
            tables.push(table);
        }

        Ok(())
    }

    /// Write the document to a file
    pub fn save<P: AsRef<Path>>(&self, path: P) -> Result<()> {
        fs::write(path, self.doc.to_string())?;
        Ok(())
    }
}

impl fmt::Display for ItemDocument {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.doc)
    }
}
