//! Data-driven content definitions and loaders.
//!
//! This crate houses static content and provides loaders for RON/TOML files:
//! - Item catalogs (RON)
//! - Roll tables for starting gear (RON)
//! - Character-generation configuration (TOML)
//!
//! Content is consumed by the runtime's catalog and table implementations and
//! never appears in entity state except as copied items.

pub mod tables;

#[cfg(feature = "loaders")]
pub mod loaders;

pub use tables::{RollTable, TableEntry};

#[cfg(feature = "loaders")]
pub use loaders::{
    ConfigLoader, ContentFactory, ItemCatalogFile, ItemLoader, ItemRecord, LoadResult,
    TableSetFile, TablesLoader,
};
