//! Runtime implementations of the content-backed collaborators.
//!
//! These wrap static game content (item catalog, roll tables) and local dice
//! rolling, and bundle them into an [`OracleManager`] so hosts can hand them
//! to the workflow builder in one go. The data is immutable at runtime;
//! dynamic state lives in the entity store.
mod catalog;
mod dice;
mod tables;

use std::sync::Arc;

use rustrim_content::{ContentFactory, RollTable};
use rustrim_core::{GearTables, Item};

pub use catalog::CatalogImpl;
pub use dice::{DiceFormula, DiceRandomizer, Keep, Term};
pub use tables::RollTablesImpl;

/// Manages all oracle implementations and provides unified access
#[derive(Clone)]
pub struct OracleManager {
    pub(crate) catalog: Arc<CatalogImpl>,
    pub(crate) tables: Arc<RollTablesImpl>,
    pub(crate) dice: Arc<DiceRandomizer>,
}

impl OracleManager {
    /// Creates a new oracle manager
    pub fn new(
        catalog: Arc<CatalogImpl>,
        tables: Arc<RollTablesImpl>,
        dice: Arc<DiceRandomizer>,
    ) -> Self {
        Self {
            catalog,
            tables,
            dice,
        }
    }

    /// Build oracles from already loaded content, with entropy-seeded RNGs.
    pub fn from_content(items: Vec<Item>, tables: Vec<RollTable>) -> Self {
        Self::new(
            Arc::new(CatalogImpl::from_items(items)),
            Arc::new(RollTablesImpl::new(tables)),
            Arc::new(DiceRandomizer::new()),
        )
    }

    /// Load the item catalog and roll tables from a data directory.
    pub fn load(factory: &ContentFactory) -> rustrim_content::LoadResult<Self> {
        let items = factory.load_items()?;
        let tables = factory.load_tables()?;
        tracing::info!(
            items = items.len(),
            tables = tables.len(),
            dir = %factory.data_dir().display(),
            "loaded game content"
        );
        Ok(Self::from_content(items, tables))
    }

    /// Configured gear tables with no loaded counterpart.
    pub fn missing_tables(&self, gear: &GearTables) -> Vec<String> {
        gear.names()
            .into_iter()
            .filter(|name| self.tables.table(name).is_none())
            .map(str::to_string)
            .collect()
    }

    pub fn catalog(&self) -> Arc<CatalogImpl> {
        Arc::clone(&self.catalog)
    }

    pub fn tables(&self) -> Arc<RollTablesImpl> {
        Arc::clone(&self.tables)
    }

    pub fn dice(&self) -> Arc<DiceRandomizer> {
        Arc::clone(&self.dice)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rustrim_content::TableEntry;

    fn table(name: &str) -> RollTable {
        RollTable::new(name, vec![TableEntry::new("Torch")])
    }

    #[test]
    fn reports_configured_tables_that_were_not_loaded() {
        let oracles = OracleManager::from_content(
            Vec::new(),
            vec![
                table(GearTables::DEFAULT_LESSER_BONUS),
                table(GearTables::DEFAULT_EXPLORATION_1),
            ],
        );

        assert_eq!(
            oracles.missing_tables(&GearTables::default()),
            vec![
                GearTables::DEFAULT_HIGHER_BONUS.to_string(),
                GearTables::DEFAULT_EXPLORATION_2.to_string(),
            ]
        );
    }
}
