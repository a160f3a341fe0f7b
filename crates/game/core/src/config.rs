//! Rules constants and tunable character-generation parameters.

/// Fixed rules constants used by the derived-stat formulas.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct RulesConfig;

impl RulesConfig {
    /// Inventory slots every character has before adding CON.
    pub const BASE_SLOT_CAPACITY: i32 = 10;

    /// Experience awarded per squared point of challenge rating.
    pub const XP_PER_CR_SQUARED: u64 = 100;

    /// Highest attribute value that still earns the lesser bonus-gear table.
    pub const LESSER_GEAR_TIER_MAX: i32 = 2;
}

/// Names of the roll tables consulted when drawing starting gear.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct GearTables {
    /// Bonus gear for characters whose best attribute is at most
    /// [`RulesConfig::LESSER_GEAR_TIER_MAX`].
    pub lesser_bonus: String,
    /// Bonus gear for everyone else.
    pub higher_bonus: String,
    pub exploration_1: String,
    pub exploration_2: String,
}

impl GearTables {
    pub const DEFAULT_LESSER_BONUS: &'static str = "Matériel Bonus";
    pub const DEFAULT_HIGHER_BONUS: &'static str = "Armes";
    pub const DEFAULT_EXPLORATION_1: &'static str = "Matériel d'Exploration I";
    pub const DEFAULT_EXPLORATION_2: &'static str = "Matériel d'Exploration II";

    /// Every table a full generation may draw from.
    pub fn names(&self) -> [&str; 4] {
        [
            self.lesser_bonus.as_str(),
            self.higher_bonus.as_str(),
            self.exploration_1.as_str(),
            self.exploration_2.as_str(),
        ]
    }
}

impl Default for GearTables {
    fn default() -> Self {
        Self {
            lesser_bonus: Self::DEFAULT_LESSER_BONUS.into(),
            higher_bonus: Self::DEFAULT_HIGHER_BONUS.into(),
            exploration_1: Self::DEFAULT_EXPLORATION_1.into(),
            exploration_2: Self::DEFAULT_EXPLORATION_2.into(),
        }
    }
}

/// Character-generation parameters.
///
/// Formulas are opaque to the rules; they are handed verbatim to whatever
/// randomizer the host provides.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct ChargenConfig {
    /// Formula rolled for each attribute (lowest of three d6).
    pub ability_formula: String,
    /// Formula rolled for starting health.
    pub health_formula: String,
    pub gear_tables: GearTables,
}

impl ChargenConfig {
    pub const DEFAULT_ABILITY_FORMULA: &'static str = "3d6kl";
    pub const DEFAULT_HEALTH_FORMULA: &'static str = "1d8";

    pub fn new() -> Self {
        Self {
            ability_formula: Self::DEFAULT_ABILITY_FORMULA.into(),
            health_formula: Self::DEFAULT_HEALTH_FORMULA.into(),
            gear_tables: GearTables::default(),
        }
    }

    pub fn with_formulas(ability: impl Into<String>, health: impl Into<String>) -> Self {
        Self {
            ability_formula: ability.into(),
            health_formula: health.into(),
            ..Self::new()
        }
    }
}

impl Default for ChargenConfig {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn gear_table_names_follow_tier_order() {
        let tables = GearTables {
            higher_bonus: "Weapons".into(),
            ..GearTables::default()
        };
        assert_eq!(
            tables.names(),
            [
                GearTables::DEFAULT_LESSER_BONUS,
                "Weapons",
                GearTables::DEFAULT_EXPLORATION_1,
                GearTables::DEFAULT_EXPLORATION_2,
            ]
        );
    }
}
