//! Roll table loader.

use std::collections::HashSet;
use std::path::Path;

use anyhow::bail;
use serde::{Deserialize, Serialize};

use crate::loaders::{LoadResult, read_file};
use crate::tables::RollTable;

/// Table set structure for RON files.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TableSetFile {
    pub tables: Vec<RollTable>,
}

/// Loader for roll tables from RON files.
pub struct TablesLoader;

impl TablesLoader {
    /// Load every table from a RON file.
    ///
    /// # Errors
    ///
    /// Fails on malformed RON, duplicate table names, or a table whose
    /// weights sum to zero (it could never be drawn from).
    pub fn load(path: &Path) -> LoadResult<Vec<RollTable>> {
        let content = read_file(path)?;
        Self::parse(&content)
    }

    /// Parse table-set RON text.
    pub fn parse(content: &str) -> LoadResult<Vec<RollTable>> {
        let set: TableSetFile = ron::from_str(content)
            .map_err(|e| anyhow::anyhow!("Failed to parse roll tables RON: {}", e))?;

        let mut seen = HashSet::new();
        for table in &set.tables {
            if !seen.insert(table.name.as_str()) {
                bail!("duplicate roll table '{}'", table.name);
            }
            if table.total_weight() == 0 {
                bail!("roll table '{}' has no drawable entries", table.name);
            }
        }

        Ok(set.tables)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_tables_with_default_weights() {
        let raw = r#"(
            tables: [
                (name: "Armes", entries: [(text: "Dagger"), (text: "Spear", weight: 3)]),
                (name: "Matériel Bonus", entries: [(text: "Rope (50ft)")]),
            ],
        )"#;
        let tables = TablesLoader::parse(raw).unwrap();
        assert_eq!(tables.len(), 2);
        assert_eq!(tables[0].entries[0].weight, 1);
        assert_eq!(tables[0].total_weight(), 4);
        assert_eq!(tables[1].name, "Matériel Bonus");
    }

    #[test]
    fn rejects_duplicate_names() {
        let raw = r#"(tables: [
            (name: "Armes", entries: [(text: "Dagger")]),
            (name: "Armes", entries: [(text: "Axe")]),
        ])"#;
        assert!(TablesLoader::parse(raw).is_err());
    }

    #[test]
    fn rejects_undrawable_tables() {
        let raw = r#"(tables: [(name: "Void", entries: [(text: "Nothing", weight: 0)])])"#;
        let err = TablesLoader::parse(raw).unwrap_err();
        assert!(err.to_string().contains("Void"));
    }
}
