//! Runtime configuration and environment overrides.
use std::env;

use rustrim_core::ChargenConfig;

use crate::events::EventBus;

/// Runtime configuration shared by the workflow and its event bus.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RuntimeConfig {
    pub chargen: ChargenConfig,
    pub event_buffer_size: usize,
}

impl Default for RuntimeConfig {
    fn default() -> Self {
        Self {
            chargen: ChargenConfig::default(),
            event_buffer_size: EventBus::DEFAULT_CAPACITY,
        }
    }
}

impl RuntimeConfig {
    pub const EVENT_BUFFER_VAR: &'static str = "RUSTRIM_EVENT_BUFFER";
    pub const ABILITY_FORMULA_VAR: &'static str = "RUSTRIM_ABILITY_FORMULA";
    pub const HEALTH_FORMULA_VAR: &'static str = "RUSTRIM_HEALTH_FORMULA";

    pub fn new(chargen: ChargenConfig) -> Self {
        Self {
            chargen,
            ..Self::default()
        }
    }

    /// Construct configuration from process environment variables.
    ///
    /// Environment variables:
    /// - `RUSTRIM_EVENT_BUFFER` - Event bus capacity (default: 100)
    /// - `RUSTRIM_ABILITY_FORMULA` - Formula rolled per attribute (default: 3d6kl)
    /// - `RUSTRIM_HEALTH_FORMULA` - Formula rolled for starting health (default: 1d8)
    pub fn from_env() -> Self {
        Self::default().with_env_overrides()
    }

    /// Apply environment overrides on top of an existing configuration,
    /// e.g. one loaded from `chargen.toml`.
    pub fn with_env_overrides(self) -> Self {
        self.with_overrides(|key| env::var(key).ok())
    }

    fn with_overrides(mut self, lookup: impl Fn(&str) -> Option<String>) -> Self {
        if let Some(capacity) = read_var::<usize>(&lookup, Self::EVENT_BUFFER_VAR) {
            self.event_buffer_size = capacity.max(1);
        }

        if let Some(formula) = non_empty(&lookup, Self::ABILITY_FORMULA_VAR) {
            self.chargen.ability_formula = formula;
        }

        if let Some(formula) = non_empty(&lookup, Self::HEALTH_FORMULA_VAR) {
            self.chargen.health_formula = formula;
        }

        self
    }
}

fn read_var<T>(lookup: &impl Fn(&str) -> Option<String>, key: &str) -> Option<T>
where
    T: std::str::FromStr,
{
    lookup(key)?.trim().parse().ok()
}

fn non_empty(lookup: &impl Fn(&str) -> Option<String>, key: &str) -> Option<String> {
    lookup(key)
        .map(|value| value.trim().to_string())
        .filter(|value| !value.is_empty())
}
