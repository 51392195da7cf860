//! Item registry for loading item lists from TOML

use crate::item::{ItemDef, ItemFile};
use crate::orderer::Orderer;
use ordinal_core::{OrdinalError, Result};
use std::fs;
use std::path::{Path, PathBuf};

/// Registry that holds loaded items in declaration order
#[derive(Debug, Default)]
pub struct ItemRegistry {
    items: Vec<ItemDef>,
}

impl ItemRegistry {
    /// Create a new empty registry
    pub fn new() -> Self {
        Self::default()
    }

    /// Load items from a directory of TOML files
    ///
    /// Expects `path/items/*.toml` files, read in file name order
    pub fn load_from_directory<P: AsRef<Path>>(path: P) -> Result<Self> {
        let mut registry = Self::new();
        let items_path = path.as_ref().join("items");

        if items_path.exists() {
            let mut files: Vec<PathBuf> = Vec::new();
            for entry in fs::read_dir(&items_path)? {
                let file_path = entry?.path();
                if file_path.extension().map(|e| e == "toml").unwrap_or(false) {
                    files.push(file_path);
                }
            }
            files.sort();

            for file_path in files {
                registry.load_file(&file_path)?;
            }
        }

        Ok(registry)
    }

    /// Load items from a TOML file
    pub fn load_file<P: AsRef<Path>>(&mut self, path: P) -> Result<()> {
        let path = path.as_ref();
        let content = fs::read_to_string(path)?;
        tracing::debug!(path = %path.display(), "loading items");
        self.load_string(&content)
    }

    /// Load items from a TOML string
    pub fn load_string(&mut self, content: &str) -> Result<()> {
        let file: ItemFile = toml::from_str(content).map_err(|e| {
            OrdinalError::ItemLoadError(format!("Failed to parse item TOML: {}", e))
        })?;

        for raw in file.item {
            self.items.push(raw.normalize()?);
        }

        Ok(())
    }

    /// Register an item directly
    pub fn register(&mut self, item: ItemDef) {
        self.items.push(item);
    }

    /// Get all items in declaration order
    pub fn all(&self) -> &[ItemDef] {
        &self.items
    }

    /// Get item names in declaration order
    pub fn names(&self) -> Vec<&str> {
        self.items.iter().map(|i| i.name.as_str()).collect()
    }

    /// Resolve the order of the loaded items
    pub fn order(&self) -> Result<Vec<String>> {
        Orderer::new().order(&self.items)
    }

    /// Get the number of loaded items
    pub fn len(&self) -> usize {
        self.items.len()
    }

    /// Check if the registry is empty
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }
}
