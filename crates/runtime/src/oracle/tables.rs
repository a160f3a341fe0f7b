//! [`TableDrawer`] over loaded roll tables.
//!
//! Draws are weighted by entry weight and use a seedable RNG so tests can pin
//! the outcome.

use std::collections::HashMap;
use std::sync::Mutex;

use async_trait::async_trait;
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

use rustrim_content::RollTable;

use crate::api::{CollaboratorError, TableDrawer, TableResult};

/// Named weighted roll tables.
pub struct RollTablesImpl {
    tables: HashMap<String, RollTable>,
    rng: Mutex<StdRng>,
}

impl RollTablesImpl {
    pub fn new(tables: impl IntoIterator<Item = RollTable>) -> Self {
        Self::with_rng(tables, StdRng::from_entropy())
    }

    /// Deterministic draws for tests and replays.
    pub fn seeded(tables: impl IntoIterator<Item = RollTable>, seed: u64) -> Self {
        Self::with_rng(tables, StdRng::seed_from_u64(seed))
    }

    fn with_rng(tables: impl IntoIterator<Item = RollTable>, rng: StdRng) -> Self {
        Self {
            tables: tables
                .into_iter()
                .map(|table| (table.name.clone(), table))
                .collect(),
            rng: Mutex::new(rng),
        }
    }

    pub fn table(&self, name: &str) -> Option<&RollTable> {
        self.tables.get(name)
    }
}

#[async_trait]
impl TableDrawer for RollTablesImpl {
    async fn draw(&self, name: &str) -> Result<TableResult, CollaboratorError> {
        let table = self
            .table(name)
            .ok_or_else(|| CollaboratorError::TableNotFound(name.to_string()))?;

        let total = table.total_weight();
        if total == 0 {
            return Err(CollaboratorError::EmptyTable(name.to_string()));
        }

        let roll = {
            let mut rng = self
                .rng
                .lock()
                .map_err(|_| CollaboratorError::LockPoisoned)?;
            rng.gen_range(0..total)
        };

        let entry = table
            .entry_at(roll)
            .ok_or_else(|| CollaboratorError::EmptyTable(name.to_string()))?;
        tracing::debug!(table = name, roll, text = %entry.text, "drew table entry");
        Ok(TableResult::new(name, entry.text.clone()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rustrim_content::TableEntry;

    #[tokio::test]
    async fn draws_only_weighted_entries() {
        let tables = RollTablesImpl::seeded(
            [RollTable::new(
                "Armes",
                vec![
                    TableEntry::weighted("Never", 0),
                    TableEntry::weighted("Spear", 5),
                ],
            )],
            9,
        );
        for _ in 0..20 {
            let result = tables.draw("Armes").await.unwrap();
            assert_eq!(result, TableResult::new("Armes", "Spear"));
        }
    }

    #[tokio::test]
    async fn unknown_and_empty_tables_fail() {
        let tables = RollTablesImpl::seeded([RollTable::uniform("Empty", Vec::<String>::new())], 1);
        assert_eq!(
            tables.draw("Missing").await,
            Err(CollaboratorError::TableNotFound("Missing".into()))
        );
        assert_eq!(
            tables.draw("Empty").await,
            Err(CollaboratorError::EmptyTable("Empty".into()))
        );
    }
}
