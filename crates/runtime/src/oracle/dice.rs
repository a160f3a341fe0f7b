//! Dice formula evaluation backed by `rand`.
//!
//! Formulas are sums of terms joined by `+` or `-`:
//! - `NdS` rolls N dice with S sides (`dS` is shorthand for `1dS`)
//! - `NdSkl[K]` / `NdSkh[K]` keep the lowest / highest K dice (default 1)
//! - an integer constant
//! - `@path` looks the value up in the [`RollData`]
//!
//! Whitespace is ignored, so `3d6kl`, `1d8 + 2` and `1d20 + @str.mod` are all
//! valid.

use std::fmt;
use std::sync::Mutex;

use async_trait::async_trait;
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

use rustrim_core::RollData;

use crate::api::{CollaboratorError, Randomizer, RollOutcome};

/// Upper bound on dice in one term.
const MAX_DICE: u32 = 100;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Keep {
    Lowest(u32),
    Highest(u32),
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Term {
    Dice {
        count: u32,
        sides: u32,
        keep: Option<Keep>,
    },
    Constant(i64),
    Reference(String),
}

/// A parsed formula: signed terms summed left to right.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DiceFormula {
    source: String,
    terms: Vec<(i64, Term)>,
}

impl DiceFormula {
    /// Parse a formula such as `3d6kl` or `1d20 + @str.mod - 1`.
    pub fn parse(input: &str) -> Result<Self, CollaboratorError> {
        let compact: String = input
            .chars()
            .filter(|c| !c.is_whitespace())
            .collect::<String>()
            .to_lowercase();
        if compact.is_empty() {
            return Err(invalid(input, "empty formula"));
        }

        let mut terms = Vec::new();
        let mut sign = 1;
        let mut current = String::new();
        let mut after_operator = false;
        for ch in compact.chars() {
            match ch {
                '+' | '-' => {
                    if !current.is_empty() {
                        terms.push((sign, parse_term(input, &current)?));
                        current.clear();
                    } else if after_operator || !terms.is_empty() {
                        return Err(invalid(input, "operator without a term"));
                    }
                    sign = if ch == '-' { -1 } else { 1 };
                    after_operator = true;
                }
                _ => {
                    current.push(ch);
                    after_operator = false;
                }
            }
        }
        if current.is_empty() {
            return Err(invalid(input, "formula ends with an operator"));
        }
        terms.push((sign, parse_term(input, &current)?));

        Ok(Self {
            source: input.trim().to_string(),
            terms,
        })
    }

    pub fn terms(&self) -> &[(i64, Term)] {
        &self.terms
    }

    /// Roll every dice term and resolve references against `data`.
    pub fn evaluate<R: Rng>(
        &self,
        rng: &mut R,
        data: &RollData,
    ) -> Result<i64, CollaboratorError> {
        let mut total: i64 = 0;
        for (sign, term) in &self.terms {
            let value = match term {
                Term::Dice { count, sides, keep } => roll_dice(rng, *count, *sides, *keep),
                Term::Constant(value) => *value,
                Term::Reference(path) => data
                    .get(path)
                    .ok_or_else(|| CollaboratorError::UnresolvedReference(path.clone()))?,
            };
            total = total.saturating_add(sign.saturating_mul(value));
        }
        Ok(total)
    }
}

impl fmt::Display for DiceFormula {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.source)
    }
}

fn invalid(formula: &str, reason: impl Into<String>) -> CollaboratorError {
    CollaboratorError::InvalidFormula {
        formula: formula.to_string(),
        reason: reason.into(),
    }
}

fn parse_term(formula: &str, raw: &str) -> Result<Term, CollaboratorError> {
    if let Some(path) = raw.strip_prefix('@') {
        if path.is_empty() {
            return Err(invalid(formula, "empty reference"));
        }
        return Ok(Term::Reference(path.to_string()));
    }

    let Some((count, rest)) = raw.split_once('d') else {
        return raw
            .parse::<i64>()
            .map(Term::Constant)
            .map_err(|_| invalid(formula, format!("unrecognized term '{raw}'")));
    };

    let count: u32 = if count.is_empty() {
        1
    } else {
        count
            .parse()
            .map_err(|_| invalid(formula, format!("invalid dice count '{count}'")))?
    };
    if count == 0 || count > MAX_DICE {
        return Err(invalid(formula, format!("dice count must be 1..={MAX_DICE}")));
    }

    let (sides, keep) = match rest.find('k') {
        Some(pos) => (&rest[..pos], Some(parse_keep(formula, &rest[pos..], count)?)),
        None => (rest, None),
    };
    let sides: u32 = sides
        .parse()
        .map_err(|_| invalid(formula, format!("invalid die size '{sides}'")))?;
    if sides < 2 {
        return Err(invalid(formula, "die size must be at least 2"));
    }

    Ok(Term::Dice { count, sides, keep })
}

fn parse_keep(formula: &str, raw: &str, count: u32) -> Result<Keep, CollaboratorError> {
    let (lowest, amount) = if let Some(amount) = raw.strip_prefix("kl") {
        (true, amount)
    } else if let Some(amount) = raw.strip_prefix("kh") {
        (false, amount)
    } else {
        return Err(invalid(formula, format!("unknown modifier '{raw}'")));
    };
    let amount: u32 = if amount.is_empty() {
        1
    } else {
        amount
            .parse()
            .map_err(|_| invalid(formula, format!("invalid keep count '{amount}'")))?
    };
    if amount == 0 || amount > count {
        return Err(invalid(formula, "keep count must be between 1 and the dice count"));
    }
    Ok(if lowest {
        Keep::Lowest(amount)
    } else {
        Keep::Highest(amount)
    })
}

fn roll_dice<R: Rng>(rng: &mut R, count: u32, sides: u32, keep: Option<Keep>) -> i64 {
    let mut rolls: Vec<i64> = (0..count)
        .map(|_| i64::from(rng.gen_range(1..=sides)))
        .collect();
    match keep {
        None => rolls.iter().sum(),
        Some(Keep::Lowest(n)) => {
            rolls.sort_unstable();
            rolls.iter().take(n as usize).sum()
        }
        Some(Keep::Highest(n)) => {
            rolls.sort_unstable_by(|a, b| b.cmp(a));
            rolls.iter().take(n as usize).sum()
        }
    }
}

/// [`Randomizer`] that parses and rolls formulas locally.
pub struct DiceRandomizer {
    rng: Mutex<StdRng>,
}

impl DiceRandomizer {
    /// Randomizer seeded from OS entropy.
    pub fn new() -> Self {
        Self {
            rng: Mutex::new(StdRng::from_entropy()),
        }
    }

    /// Deterministic randomizer for tests and replays.
    pub fn seeded(seed: u64) -> Self {
        Self {
            rng: Mutex::new(StdRng::seed_from_u64(seed)),
        }
    }
}

impl Default for DiceRandomizer {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl Randomizer for DiceRandomizer {
    async fn roll(&self, formula: &str, data: &RollData) -> Result<RollOutcome, CollaboratorError> {
        let parsed = DiceFormula::parse(formula)?;
        let total = {
            let mut rng = self
                .rng
                .lock()
                .map_err(|_| CollaboratorError::LockPoisoned)?;
            parsed.evaluate(&mut *rng, data)?
        };
        tracing::debug!(formula = %parsed, total, "rolled formula");
        Ok(RollOutcome::new(formula, total))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_keep_lowest() {
        let formula = DiceFormula::parse("3d6kl").unwrap();
        assert_eq!(
            formula.terms(),
            &[(
                1,
                Term::Dice {
                    count: 3,
                    sides: 6,
                    keep: Some(Keep::Lowest(1))
                }
            )]
        );
    }

    #[test]
    fn parses_signed_terms_and_references() {
        let formula = DiceFormula::parse("d20 + @str.mod - 2").unwrap();
        assert_eq!(
            formula.terms(),
            &[
                (
                    1,
                    Term::Dice {
                        count: 1,
                        sides: 20,
                        keep: None
                    }
                ),
                (1, Term::Reference("str.mod".into())),
                (-1, Term::Constant(2)),
            ]
        );
    }

    #[test]
    fn rejects_malformed_formulas() {
        for bad in ["", "3d", "0d6", "2d6kl3", "1d1", "1d6+", "1d6++2", "2d6kx", "@", "fish"] {
            assert!(
                matches!(
                    DiceFormula::parse(bad),
                    Err(CollaboratorError::InvalidFormula { .. })
                ),
                "{bad:?} should not parse"
            );
        }
    }

    #[test]
    fn keep_lowest_stays_in_single_die_range() {
        let formula = DiceFormula::parse("3d6kl").unwrap();
        let mut rng = StdRng::seed_from_u64(7);
        for _ in 0..200 {
            let total = formula.evaluate(&mut rng, &RollData::new()).unwrap();
            assert!((1..=6).contains(&total));
        }
    }

    #[test]
    fn references_resolve_against_roll_data() {
        let mut data = RollData::new();
        data.insert("str.mod", 3);
        let formula = DiceFormula::parse("1d4 + @str.mod").unwrap();
        let mut rng = StdRng::seed_from_u64(1);
        let total = formula.evaluate(&mut rng, &data).unwrap();
        assert!((4..=7).contains(&total));
    }

    #[test]
    fn missing_reference_is_reported() {
        let formula = DiceFormula::parse("@luck.mod").unwrap();
        let mut rng = StdRng::seed_from_u64(1);
        assert_eq!(
            formula.evaluate(&mut rng, &RollData::new()),
            Err(CollaboratorError::UnresolvedReference("luck.mod".into()))
        );
    }

    #[tokio::test]
    async fn seeded_randomizers_agree() {
        let a = DiceRandomizer::seeded(42);
        let b = DiceRandomizer::seeded(42);
        let data = RollData::new();
        for _ in 0..10 {
            assert_eq!(
                a.roll("2d6+1", &data).await.unwrap(),
                b.roll("2d6+1", &data).await.unwrap()
            );
        }
    }
}
