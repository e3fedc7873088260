//! Dice expressions: `NdM`, `NdMkhK`, and `NdMklK`.
//!
//! Only the handful of forms a character roll needs are supported. An
//! expression is parsed once and can then be rolled any number of times.

use std::str::FromStr;

use rand::rngs::StdRng;

use super::pool::DicePool;
use super::roll::RollResult;
use super::Die;
use crate::error::{MechError, MechResult};

/// Which dice of a roll count toward the total.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Keep {
    /// Sum every die.
    All,
    /// Sum only the `K` highest dice.
    Highest(u32),
    /// Sum only the `K` lowest dice.
    Lowest(u32),
}

/// A parsed dice expression such as `3d6kh2`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DiceExpr {
    /// Number of dice rolled.
    pub count: u32,
    /// The die rolled.
    pub die: Die,
    /// Which dice are summed.
    pub keep: Keep,
}

impl DiceExpr {
    /// Create an expression that rolls `count` dice and sums them all.
    pub fn new(count: u32, die: Die) -> Self {
        Self {
            count,
            die,
            keep: Keep::All,
        }
    }

    /// A single die with `sides` sides (`1d<sides>`), used to index tables.
    pub fn single(sides: u32) -> MechResult<Self> {
        let die = Die::with_sides(sides).ok_or_else(|| MechError::ZeroSides(format!("1d{sides}")))?;
        Ok(Self::new(1, die))
    }

    /// Keep only the `k` highest dice.
    pub fn keep_highest(mut self, k: u32) -> Self {
        self.keep = Keep::Highest(k);
        self
    }

    /// Keep only the `k` lowest dice.
    pub fn keep_lowest(mut self, k: u32) -> Self {
        self.keep = Keep::Lowest(k);
        self
    }

    /// Parse an expression like `1d6`, `d20`, `3d6kh2`, or `4d6kl3`.
    ///
    /// Parsing is case-insensitive and ignores surrounding whitespace.
    pub fn parse(input: &str) -> MechResult<Self> {
        let source = input.trim().to_ascii_lowercase();
        let malformed = || MechError::MalformedExpr(input.to_string());

        let (count_part, rest) = source.split_once('d').ok_or_else(malformed)?;
        let count = if count_part.is_empty() {
            1
        } else {
            parse_number(count_part).ok_or_else(malformed)?
        };

        let (sides_part, keep) = match rest.find('k') {
            Some(pos) => {
                let (sides, suffix) = rest.split_at(pos);
                let keep = if let Some(n) = suffix.strip_prefix("kh") {
                    Keep::Highest(parse_number(n).ok_or_else(malformed)?)
                } else if let Some(n) = suffix.strip_prefix("kl") {
                    Keep::Lowest(parse_number(n).ok_or_else(malformed)?)
                } else {
                    return Err(malformed());
                };
                (sides, keep)
            }
            None => (rest, Keep::All),
        };

        let sides = parse_number(sides_part).ok_or_else(malformed)?;
        let die = Die::with_sides(sides).ok_or_else(|| MechError::ZeroSides(input.to_string()))?;
        if count == 0 {
            return Err(MechError::ZeroDice(input.to_string()));
        }
        if let Keep::Highest(k) | Keep::Lowest(k) = keep {
            if k == 0 || k > count {
                return Err(MechError::InvalidKeep {
                    expr: input.to_string(),
                    keep: k,
                    count,
                });
            }
        }

        Ok(Self { count, die, keep })
    }

    /// Number of dice that count toward the total.
    pub fn kept(&self) -> u32 {
        match self.keep {
            Keep::All => self.count,
            Keep::Highest(k) | Keep::Lowest(k) => k.min(self.count),
        }
    }

    /// Lowest total this expression can produce.
    pub fn min(&self) -> u32 {
        self.kept()
    }

    /// Highest total this expression can produce.
    pub fn max(&self) -> u32 {
        self.kept().saturating_mul(self.die.sides())
    }

    /// Roll the expression and return only the dice that were kept.
    pub fn roll_kept(&self, rng: &mut StdRng) -> RollResult {
        let result = DicePool::new().add(self.die, self.count).roll(rng);
        match self.keep {
            Keep::All => result,
            Keep::Highest(k) => result.keep_highest(k as usize),
            Keep::Lowest(k) => result.keep_lowest(k as usize),
        }
    }

    /// Roll the expression and return the total.
    pub fn roll(&self, rng: &mut StdRng) -> u32 {
        self.roll_kept(rng).total()
    }
}

impl FromStr for DiceExpr {
    type Err = MechError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}

impl std::fmt::Display for DiceExpr {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}{}", self.count, self.die)?;
        match self.keep {
            Keep::All => Ok(()),
            Keep::Highest(k) => write!(f, "kh{k}"),
            Keep::Lowest(k) => write!(f, "kl{k}"),
        }
    }
}

/// Parse and roll an expression string in one step.
pub fn roll_expr(input: &str, rng: &mut StdRng) -> MechResult<u32> {
    Ok(DiceExpr::parse(input)?.roll(rng))
}

fn parse_number(s: &str) -> Option<u32> {
    if s.is_empty() || !s.bytes().all(|b| b.is_ascii_digit()) {
        return None;
    }
    s.parse().ok()
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;
    use rand::SeedableRng;

    #[test]
    fn parse_plain() {
        let e = DiceExpr::parse("1d6").unwrap();
        assert_eq!(e.count, 1);
        assert_eq!(e.die, Die::D6);
        assert_eq!(e.keep, Keep::All);
    }

    #[test]
    fn parse_keep_highest() {
        let e = DiceExpr::parse("3d6kh2").unwrap();
        assert_eq!(e.count, 3);
        assert_eq!(e.die, Die::D6);
        assert_eq!(e.keep, Keep::Highest(2));
    }

    #[test]
    fn parse_keep_lowest() {
        let e = DiceExpr::parse("4d6kl3").unwrap();
        assert_eq!(e.keep, Keep::Lowest(3));
    }

    #[test]
    fn parse_implicit_count_and_case() {
        let e = DiceExpr::parse("  D20 ").unwrap();
        assert_eq!(e.count, 1);
        assert_eq!(e.die, Die::D20);
    }

    #[test]
    fn parse_custom_sides() {
        let e: DiceExpr = "1d36".parse().unwrap();
        assert_eq!(e.die, Die::Custom(36));
    }

    #[test]
    fn parse_rejects_garbage() {
        let inputs = [
            "", "d", "6", "3x6", "1d", "1d6k2", "1d6kh", "3d6kx2", "-1d6", "1d+6", "1dd6",
        ];
        for input in inputs {
            assert!(
                matches!(DiceExpr::parse(input), Err(MechError::MalformedExpr(_))),
                "expected malformed: {input:?}"
            );
        }
    }

    #[test]
    fn parse_rejects_zero_sides() {
        assert_eq!(
            DiceExpr::parse("1d0"),
            Err(MechError::ZeroSides("1d0".to_string()))
        );
    }

    #[test]
    fn parse_rejects_zero_dice() {
        assert_eq!(
            DiceExpr::parse("0d6"),
            Err(MechError::ZeroDice("0d6".to_string()))
        );
    }

    #[test]
    fn parse_rejects_bad_keep() {
        assert!(matches!(
            DiceExpr::parse("2d6kh3"),
            Err(MechError::InvalidKeep { keep: 3, count: 2, .. })
        ));
        assert!(matches!(
            DiceExpr::parse("2d6kh0"),
            Err(MechError::InvalidKeep { keep: 0, .. })
        ));
    }

    #[test]
    fn single_rejects_zero() {
        assert!(matches!(DiceExpr::single(0), Err(MechError::ZeroSides(_))));
        assert_eq!(DiceExpr::single(4).unwrap().to_string(), "1d4");
    }

    #[test]
    fn display() {
        assert_eq!(DiceExpr::parse("3d6kh2").unwrap().to_string(), "3d6kh2");
        assert_eq!(DiceExpr::parse("d8").unwrap().to_string(), "1d8");
        assert_eq!(DiceExpr::new(2, Die::D4).keep_lowest(1).to_string(), "2d4kl1");
    }

    #[test]
    fn bounds() {
        let stat = DiceExpr::parse("3d6kh2").unwrap();
        assert_eq!(stat.min(), 2);
        assert_eq!(stat.max(), 12);
        let vital = DiceExpr::parse("1d6").unwrap();
        assert_eq!(vital.min(), 1);
        assert_eq!(vital.max(), 6);
    }

    #[test]
    fn keep_highest_beats_flat_sum_on_average() {
        let mut rng = StdRng::seed_from_u64(42);
        let kept = DiceExpr::parse("3d6kh2").unwrap();
        let flat = DiceExpr::parse("2d6").unwrap();
        let trials = 5_000;
        let kept_sum: u32 = (0..trials).map(|_| kept.roll(&mut rng)).sum();
        let flat_sum: u32 = (0..trials).map(|_| flat.roll(&mut rng)).sum();
        assert!(kept_sum > flat_sum);
    }

    #[test]
    fn roll_expr_propagates_errors() {
        let mut rng = StdRng::seed_from_u64(1);
        assert!(roll_expr("1d0", &mut rng).is_err());
        assert!(roll_expr("banana", &mut rng).is_err());
        let v = roll_expr("1d6", &mut rng).unwrap();
        assert!((1..=6).contains(&v));
    }

    proptest! {
        #[test]
        fn keep_two_of_d6_in_range(count in 2u32..10, seed in any::<u64>()) {
            let mut rng = StdRng::seed_from_u64(seed);
            let expr = DiceExpr::parse(&format!("{count}d6kh2")).unwrap();
            let v = expr.roll(&mut rng);
            prop_assert!((2..=12).contains(&v));
        }

        #[test]
        fn one_d6_in_range(seed in any::<u64>()) {
            let mut rng = StdRng::seed_from_u64(seed);
            let v = roll_expr("1d6", &mut rng).unwrap();
            prop_assert!((1..=6).contains(&v));
        }

        #[test]
        fn roll_within_bounds(count in 1u32..8, sides in 1u32..40, seed in any::<u64>()) {
            let mut rng = StdRng::seed_from_u64(seed);
            let expr = DiceExpr::parse(&format!("{count}d{sides}")).unwrap();
            let v = expr.roll(&mut rng);
            prop_assert!(v >= expr.min() && v <= expr.max());
        }
    }
}
