//! Per-step "still pending" flags and the completion marker.

use core::str::FromStr;
use std::collections::BTreeMap;

use crate::error::{ChargenError, Precondition};
use crate::state::AttributeKey;

/// Every step of character generation that can be pending.
///
/// Parses from and displays as the host keys: `str` ... `ego`, `health`,
/// `bonusGear`, `gear1`, `gear2`.
#[derive(
    Clone,
    Copy,
    Debug,
    PartialEq,
    Eq,
    Hash,
    PartialOrd,
    Ord,
    strum::Display,
    strum::EnumIter,
    strum::EnumString,
    strum::IntoStaticStr,
)]
#[strum(serialize_all = "camelCase")]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "camelCase"))]
pub enum GenerationKey {
    Str,
    Dex,
    Con,
    Int,
    Psy,
    Ego,
    Health,
    BonusGear,
    Gear1,
    Gear2,
}

impl GenerationKey {
    /// Parses a host-supplied key, reporting anything outside the closed set.
    pub fn parse(key: &str) -> Result<Self, ChargenError> {
        Self::from_str(key).map_err(|_| ChargenError::unknown_key(key))
    }

    /// The attribute this step rolls, if it is an attribute step.
    pub const fn attribute(self) -> Option<AttributeKey> {
        match self {
            Self::Str => Some(AttributeKey::Str),
            Self::Dex => Some(AttributeKey::Dex),
            Self::Con => Some(AttributeKey::Con),
            Self::Int => Some(AttributeKey::Int),
            Self::Psy => Some(AttributeKey::Psy),
            Self::Ego => Some(AttributeKey::Ego),
            _ => None,
        }
    }

    pub fn as_str(self) -> &'static str {
        self.into()
    }
}

impl From<AttributeKey> for GenerationKey {
    fn from(key: AttributeKey) -> Self {
        match key {
            AttributeKey::Str => Self::Str,
            AttributeKey::Dex => Self::Dex,
            AttributeKey::Con => Self::Con,
            AttributeKey::Int => Self::Int,
            AttributeKey::Psy => Self::Psy,
            AttributeKey::Ego => Self::Ego,
        }
    }
}

/// Coarse progress of character generation.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, strum::Display)]
#[strum(serialize_all = "snake_case")]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum ChargenState {
    /// Every configured step is still pending.
    NotStarted,
    InProgress,
    /// Finalized; never re-opened.
    Complete,
}

/// Pending flags for each configured step, plus the completion marker.
///
/// `complete` is only ever set by [`GenerationFlags::finalize`], which
/// refuses while any flag is pending.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct GenerationFlags {
    pending: BTreeMap<GenerationKey, bool>,
    #[cfg_attr(feature = "serde", serde(default))]
    complete: bool,
}

impl GenerationFlags {
    /// Flags for a newly created character: all ten steps pending.
    pub fn new_pending() -> Self {
        Self::with_keys(<GenerationKey as strum::IntoEnumIterator>::iter())
    }

    /// Flags for a custom step set, all pending.
    pub fn with_keys(keys: impl IntoIterator<Item = GenerationKey>) -> Self {
        Self {
            pending: keys.into_iter().map(|key| (key, true)).collect(),
            complete: false,
        }
    }

    /// Whether `key` is configured and still pending.
    pub fn is_pending(&self, key: GenerationKey) -> bool {
        self.pending.get(&key).copied().unwrap_or(false)
    }

    pub fn contains(&self, key: GenerationKey) -> bool {
        self.pending.contains_key(&key)
    }

    /// Keys still pending, in canonical order.
    pub fn pending(&self) -> Vec<GenerationKey> {
        self.pending
            .iter()
            .filter(|(_, pending)| **pending)
            .map(|(key, _)| *key)
            .collect()
    }

    /// True iff none of the six attribute steps is pending.
    ///
    /// An attribute step that is not configured counts as generated.
    pub fn is_attribute_set_generated(&self) -> bool {
        AttributeKey::ALL
            .into_iter()
            .all(|key| !self.is_pending(key.into()))
    }

    /// True iff no configured step is pending.
    ///
    /// An empty flag set is vacuously complete.
    pub fn is_complete(&self) -> bool {
        self.pending.values().all(|pending| !pending)
    }

    /// Whether generation has been finalized.
    pub fn is_finalized(&self) -> bool {
        self.complete
    }

    pub fn state(&self) -> ChargenState {
        if self.complete {
            ChargenState::Complete
        } else if !self.pending.is_empty() && self.pending.values().all(|pending| *pending) {
            ChargenState::NotStarted
        } else {
            ChargenState::InProgress
        }
    }

    /// Marks `key` as generated.
    ///
    /// # Errors
    ///
    /// Returns [`ChargenError::UnknownKey`] if `key` is not configured.
    pub fn clear(&mut self, key: GenerationKey) -> Result<(), ChargenError> {
        let flag = self
            .pending
            .get_mut(&key)
            .ok_or_else(|| ChargenError::unknown_key(key.as_str()))?;
        *flag = false;
        Ok(())
    }

    /// Marks generation complete.
    ///
    /// # Errors
    ///
    /// Returns a [`Precondition::StepsPending`] violation, leaving the flags
    /// untouched, if any step is still pending.
    pub fn finalize(&mut self) -> Result<(), ChargenError> {
        if !self.is_complete() {
            return Err(Precondition::StepsPending {
                pending: self.pending(),
            }
            .into());
        }
        self.complete = true;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const ATTRIBUTE_STEPS: [GenerationKey; 6] = [
        GenerationKey::Str,
        GenerationKey::Dex,
        GenerationKey::Con,
        GenerationKey::Int,
        GenerationKey::Psy,
        GenerationKey::Ego,
    ];

    #[test]
    fn host_keys_parse() {
        assert_eq!(GenerationKey::parse("bonusGear"), Ok(GenerationKey::BonusGear));
        assert_eq!(GenerationKey::parse("gear2"), Ok(GenerationKey::Gear2));
        assert_eq!(GenerationKey::parse("health"), Ok(GenerationKey::Health));
        assert_eq!(GenerationKey::Gear1.to_string(), "gear1");
        assert!(GenerationKey::parse("gear3").is_err());
    }

    #[test]
    fn attribute_set_generated_over_all_combinations() {
        for mask in 0u8..64 {
            let mut flags = GenerationFlags::new_pending();
            for (bit, key) in ATTRIBUTE_STEPS.iter().enumerate() {
                if mask & (1 << bit) == 0 {
                    flags.clear(*key).unwrap();
                }
            }
            assert_eq!(flags.is_attribute_set_generated(), mask == 0, "mask {mask:06b}");
        }
    }

    #[test]
    fn non_attribute_flags_do_not_affect_attribute_set() {
        let mut flags = GenerationFlags::new_pending();
        for key in ATTRIBUTE_STEPS {
            flags.clear(key).unwrap();
        }
        assert!(flags.is_attribute_set_generated());
        assert!(!flags.is_complete());
        assert_eq!(
            flags.pending(),
            [
                GenerationKey::Health,
                GenerationKey::BonusGear,
                GenerationKey::Gear1,
                GenerationKey::Gear2
            ]
        );
    }

    #[test]
    fn clear_unknown_key_is_reported() {
        let mut flags = GenerationFlags::with_keys([GenerationKey::Str]);
        let before = flags.clone();
        assert_eq!(
            flags.clear(GenerationKey::Health),
            Err(ChargenError::unknown_key("health"))
        );
        assert_eq!(flags, before);
    }

    #[test]
    fn clear_is_idempotent() {
        let mut flags = GenerationFlags::new_pending();
        flags.clear(GenerationKey::Con).unwrap();
        flags.clear(GenerationKey::Con).unwrap();
        assert!(!flags.is_pending(GenerationKey::Con));
    }

    #[test]
    fn finalize_refuses_while_pending() {
        let mut flags = GenerationFlags::new_pending();
        flags.clear(GenerationKey::Str).unwrap();
        let before = flags.clone();

        let err = flags.finalize().unwrap_err();
        assert!(matches!(
            err,
            ChargenError::PreconditionViolation(Precondition::StepsPending { ref pending })
                if pending.len() == 9
        ));
        assert_eq!(flags, before);
        assert!(!flags.is_finalized());
    }

    #[test]
    fn finalize_succeeds_once_every_step_is_cleared() {
        let mut flags = GenerationFlags::new_pending();
        for key in flags.pending() {
            flags.clear(key).unwrap();
        }
        flags.finalize().unwrap();
        assert!(flags.is_finalized());
        assert_eq!(flags.state(), ChargenState::Complete);
    }

    #[test]
    fn empty_flag_set_is_vacuously_complete() {
        let mut flags = GenerationFlags::with_keys([]);
        assert!(flags.is_complete());
        assert!(flags.is_attribute_set_generated());
        assert_eq!(flags.state(), ChargenState::InProgress);
        flags.finalize().unwrap();
        assert_eq!(flags.state(), ChargenState::Complete);
    }

    #[test]
    fn state_tracks_progress() {
        let mut flags = GenerationFlags::new_pending();
        assert_eq!(flags.state(), ChargenState::NotStarted);
        flags.clear(GenerationKey::Health).unwrap();
        assert_eq!(flags.state(), ChargenState::InProgress);
    }
}
