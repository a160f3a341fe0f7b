//! Content factory for loading a whole data directory.

use std::path::{Path, PathBuf};

use rustrim_core::{ChargenConfig, Item};

use crate::loaders::{ConfigLoader, ItemLoader, LoadResult, TablesLoader};
use crate::tables::RollTable;

/// Content factory that loads all game content from a data directory.
///
/// # Directory Structure
///
/// ```text
/// data_dir/
/// ├── chargen.toml   (optional)
/// ├── items.ron
/// └── tables.ron
/// ```
pub struct ContentFactory {
    data_dir: PathBuf,
}

impl ContentFactory {
    /// Creates a new content factory pointing to a data directory.
    pub fn new(data_dir: impl Into<PathBuf>) -> Self {
        Self {
            data_dir: data_dir.into(),
        }
    }

    /// Load chargen configuration from `chargen.toml`, or defaults if the
    /// file does not exist.
    pub fn load_config(&self) -> LoadResult<ChargenConfig> {
        let path = self.data_dir.join("chargen.toml");
        if !path.exists() {
            return Ok(ChargenConfig::default());
        }
        ConfigLoader::load(&path)
    }

    /// Load the item catalog from `items.ron`.
    pub fn load_items(&self) -> LoadResult<Vec<Item>> {
        let path = self.data_dir.join("items.ron");
        ItemLoader::load(&path)
    }

    /// Load roll tables from `tables.ron`.
    pub fn load_tables(&self) -> LoadResult<Vec<RollTable>> {
        let path = self.data_dir.join("tables.ron");
        TablesLoader::load(&path)
    }

    /// Returns the data directory path.
    pub fn data_dir(&self) -> &Path {
        &self.data_dir
    }
}
