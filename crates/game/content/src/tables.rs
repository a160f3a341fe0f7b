//! Roll table definitions.
//!
//! A table is a named list of weighted text entries. Drawing yields one
//! entry's text, which the item catalog then resolves to an item by name.

/// One row of a roll table.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct TableEntry {
    /// Text produced by the draw; usually a catalog item name.
    pub text: String,
    /// Relative likelihood. Entries with weight 0 are never drawn.
    #[cfg_attr(feature = "serde", serde(default = "TableEntry::default_weight"))]
    pub weight: u32,
}

impl TableEntry {
    pub fn new(text: impl Into<String>) -> Self {
        Self::weighted(text, Self::default_weight())
    }

    pub fn weighted(text: impl Into<String>, weight: u32) -> Self {
        Self {
            text: text.into(),
            weight,
        }
    }

    const fn default_weight() -> u32 {
        1
    }
}

/// A named roll table.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct RollTable {
    pub name: String,
    pub entries: Vec<TableEntry>,
}

impl RollTable {
    pub fn new(name: impl Into<String>, entries: Vec<TableEntry>) -> Self {
        Self {
            name: name.into(),
            entries,
        }
    }

    /// Equal-weight table from plain texts.
    pub fn uniform<S: Into<String>>(
        name: impl Into<String>,
        texts: impl IntoIterator<Item = S>,
    ) -> Self {
        Self::new(name, texts.into_iter().map(TableEntry::new).collect())
    }

    /// Sum of all entry weights.
    pub fn total_weight(&self) -> u64 {
        self.entries.iter().map(|e| u64::from(e.weight)).sum()
    }

    /// Entry selected by a roll in `0..total_weight()`.
    ///
    /// Returns `None` for an empty table or a roll past the total.
    pub fn entry_at(&self, roll: u64) -> Option<&TableEntry> {
        let mut remaining = roll;
        for entry in &self.entries {
            let weight = u64::from(entry.weight);
            if remaining < weight {
                return Some(entry);
            }
            remaining -= weight;
        }
        None
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn weighted_lookup_walks_cumulative_ranges() {
        let table = RollTable::new(
            "Armes",
            vec![
                TableEntry::weighted("Dagger", 2),
                TableEntry::weighted("Never", 0),
                TableEntry::weighted("Spear", 1),
            ],
        );
        assert_eq!(table.total_weight(), 3);
        assert_eq!(table.entry_at(0).map(|e| e.text.as_str()), Some("Dagger"));
        assert_eq!(table.entry_at(1).map(|e| e.text.as_str()), Some("Dagger"));
        assert_eq!(table.entry_at(2).map(|e| e.text.as_str()), Some("Spear"));
        assert_eq!(table.entry_at(3), None);
    }

    #[test]
    fn empty_table_has_no_entries() {
        let table = RollTable::uniform("Empty", Vec::<String>::new());
        assert_eq!(table.total_weight(), 0);
        assert_eq!(table.entry_at(0), None);
    }
}
