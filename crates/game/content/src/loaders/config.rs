//! Character-generation configuration loader.

use std::path::Path;

use rustrim_core::ChargenConfig;

use crate::loaders::{LoadResult, read_file};

/// Loader for [`ChargenConfig`] from TOML files.
///
/// Every field is optional; missing fields keep their defaults.
///
/// ```toml
/// ability_formula = "3d6kl"
/// health_formula = "1d8"
///
/// [gear_tables]
/// higher_bonus = "Armes"
/// ```
pub struct ConfigLoader;

impl ConfigLoader {
    /// Load config data from a TOML file.
    pub fn load(path: &Path) -> LoadResult<ChargenConfig> {
        let content = read_file(path)?;
        Self::parse(&content)
    }

    /// Parse config TOML text.
    pub fn parse(content: &str) -> LoadResult<ChargenConfig> {
        let config: ChargenConfig = toml::from_str(content)
            .map_err(|e| anyhow::anyhow!("Failed to parse config TOML: {}", e))?;

        Ok(config)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rustrim_core::GearTables;

    #[test]
    fn missing_fields_keep_defaults() {
        let config = ConfigLoader::parse(
            r#"
            health_formula = "1d6"

            [gear_tables]
            higher_bonus = "Weapons"
            "#,
        )
        .unwrap();
        assert_eq!(config.ability_formula, ChargenConfig::DEFAULT_ABILITY_FORMULA);
        assert_eq!(config.health_formula, "1d6");
        assert_eq!(config.gear_tables.higher_bonus, "Weapons");
        assert_eq!(
            config.gear_tables.lesser_bonus,
            GearTables::DEFAULT_LESSER_BONUS
        );
    }

    #[test]
    fn empty_file_is_the_default_config() {
        assert_eq!(ConfigLoader::parse("").unwrap(), ChargenConfig::default());
    }
}
