//! Content loaders for reading game data from files.
//!
//! RON for item catalogs and roll tables, TOML for chargen configuration.

pub mod config;
pub mod factory;
pub mod item;
pub mod tables;

pub use config::ConfigLoader;
pub use factory::ContentFactory;
pub use item::{ItemCatalogFile, ItemLoader, ItemRecord};
pub use tables::{TableSetFile, TablesLoader};

use std::path::Path;

/// Common result type for loaders.
pub type LoadResult<T> = anyhow::Result<T>;

/// Helper function to read file contents.
pub(crate) fn read_file(path: &Path) -> LoadResult<String> {
    std::fs::read_to_string(path)
        .map_err(|e| anyhow::anyhow!("Failed to read file {}: {}", path.display(), e))
}
