//! Host configuration read from the process environment.
use std::env;
use std::path::PathBuf;

/// Where content lives and who gets generated.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct CliConfig {
    pub data_dir: PathBuf,
    pub player_id: String,
    pub player_name: String,
}

impl Default for CliConfig {
    fn default() -> Self {
        Self {
            data_dir: PathBuf::from(concat!(env!("CARGO_MANIFEST_DIR"), "/data")),
            player_id: "pc-1".to_string(),
            player_name: "Nameless".to_string(),
        }
    }
}

impl CliConfig {
    /// Construct configuration from process environment variables.
    ///
    /// - `RUSTRIM_DATA_DIR`
    /// - `RUSTRIM_PLAYER_ID`
    /// - `RUSTRIM_PLAYER_NAME`
    pub fn from_env() -> Self {
        Self::from_lookup(|key| env::var(key).ok())
    }

    fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
        let mut config = Self::default();
        let read = |key: &str| {
            lookup(key)
                .map(|value| value.trim().to_string())
                .filter(|value| !value.is_empty())
        };

        if let Some(dir) = read("RUSTRIM_DATA_DIR") {
            config.data_dir = PathBuf::from(dir);
        }
        if let Some(id) = read("RUSTRIM_PLAYER_ID") {
            config.player_id = id;
        }
        if let Some(name) = read("RUSTRIM_PLAYER_NAME") {
            config.player_name = name;
        }

        config
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn environment_overrides_defaults() {
        let config = CliConfig::from_lookup(|key| match key {
            "RUSTRIM_DATA_DIR" => Some("/srv/rustrim".into()),
            "RUSTRIM_PLAYER_NAME" => Some(" Wren ".into()),
            "RUSTRIM_PLAYER_ID" => Some("".into()),
            _ => None,
        });
        assert_eq!(config.data_dir, PathBuf::from("/srv/rustrim"));
        assert_eq!(config.player_name, "Wren");
        assert_eq!(config.player_id, "pc-1");
    }
}
