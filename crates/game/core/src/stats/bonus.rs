//! Inventory-driven attribute bonuses and slot usage.
//!
//! ```text
//! inventory ──fold──▶ ItemBonuses { slot_total, bonuses }
//! ```
//!
//! Armor, weapons, gear and passive effects occupy slots. Passive effects also
//! add their attribute deltas; several effects on the same attribute stack by
//! summing. Any other item kind contributes nothing.

use crate::state::{AttributeMap, Item};

/// Aggregated contribution of an inventory.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ItemBonuses {
    /// Sum of slot costs over counted items.
    pub slot_total: i32,
    /// Summed attribute deltas from passive effects.
    pub bonuses: AttributeMap<i32>,
}

impl ItemBonuses {
    /// No items, no bonuses.
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns the aggregate with `item` folded in.
    fn with_item(mut self, item: &Item) -> Self {
        if !item.kind.counts_toward_slots() {
            return self;
        }
        self.slot_total = self.slot_total.saturating_add(item.slot_cost);
        if let Some(set) = item.kind.bonuses() {
            for (key, delta) in set.iter() {
                self.bonuses[key] = self.bonuses[key].saturating_add(delta);
            }
        }
        self
    }
}

/// Computes slot usage and attribute bonuses for an inventory.
///
/// Pure and total: the result depends only on `items`, and no input makes it
/// fail. Negative slot costs reduce the total; sums saturate at the `i32`
/// bounds.
pub fn compute_bonuses<'a>(items: impl IntoIterator<Item = &'a Item>) -> ItemBonuses {
    items
        .into_iter()
        .fold(ItemBonuses::new(), |acc, item| acc.with_item(item))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::state::{AttributeBonusSet, AttributeKey, ItemKind};

    #[test]
    fn empty_inventory_contributes_nothing() {
        assert_eq!(compute_bonuses(std::iter::empty()), ItemBonuses::new());
    }

    #[test]
    fn slot_total_counts_only_known_kinds() {
        let items = [
            Item::armor("Gambeson", 1),
            Item::weapon("Sword", 2),
            Item::gear("Rope", 1),
            Item::passive_effect("Ward", 3, AttributeBonusSet::new()),
            Item::new("Tome", ItemKind::Other("feature".into()), 7),
        ];
        assert_eq!(compute_bonuses(&items).slot_total, 7);
    }

    #[test]
    fn passive_effects_stack_additively() {
        let items = [
            Item::passive_effect("Bull", 0, AttributeBonusSet::new().with(AttributeKey::Str, 2)),
            Item::passive_effect(
                "Weak",
                0,
                AttributeBonusSet::new()
                    .with(AttributeKey::Str, -1)
                    .with(AttributeKey::Dex, 1),
            ),
            Item::passive_effect("Ox", 1, AttributeBonusSet::new().with(AttributeKey::Str, 4)),
        ];
        let result = compute_bonuses(&items);
        assert_eq!(result.bonuses[AttributeKey::Str], 5);
        assert_eq!(result.bonuses[AttributeKey::Dex], 1);
        assert_eq!(result.bonuses[AttributeKey::Ego], 0);
        assert_eq!(result.slot_total, 1);
    }

    #[test]
    fn armor_never_changes_attributes() {
        let result = compute_bonuses(&[Item::armor("Plate", 4)]);
        assert_eq!(result.bonuses, AttributeMap::splat(0));
    }

    #[test]
    fn negative_slot_costs_reduce_usage() {
        let items = [Item::gear("Backpack", -2), Item::gear("Pick", 1)];
        assert_eq!(compute_bonuses(&items).slot_total, -1);
    }

    #[test]
    fn sums_saturate_instead_of_wrapping() {
        let items = [
            Item::gear("Boulder", i32::MAX),
            Item::gear("Boulder", i32::MAX),
            Item::passive_effect(
                "Bull",
                0,
                AttributeBonusSet::new().with(AttributeKey::Str, i32::MAX),
            ),
            Item::passive_effect("Ox", 0, AttributeBonusSet::new().with(AttributeKey::Str, 1)),
        ];
        let result = compute_bonuses(&items);
        assert_eq!(result.slot_total, i32::MAX);
        assert_eq!(result.bonuses[AttributeKey::Str], i32::MAX);
    }
}
