//! Dice types, pools, expressions, and rolling.
//!
//! Standard polyhedral dice (d4 through d100) are named variants; any other
//! side count, such as the `1d<len>` rolls used to index a table, becomes
//! [`Die::Custom`].

pub mod expr;
pub mod pool;
pub mod roll;

pub use expr::{DiceExpr, Keep, roll_expr};
pub use pool::DicePool;
pub use roll::{DieResult, RollResult};

use serde::{Deserialize, Serialize};

/// A polyhedral die type.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Die {
    /// Four-sided die.
    D4,
    /// Six-sided die.
    D6,
    /// Eight-sided die.
    D8,
    /// Ten-sided die.
    D10,
    /// Twelve-sided die.
    D12,
    /// Twenty-sided die.
    D20,
    /// Percentile die (1-100).
    D100,
    /// A die with any other number of sides.
    Custom(u32),
}

impl Die {
    /// Returns the die with the given number of sides, or `None` for zero.
    pub fn with_sides(sides: u32) -> Option<Self> {
        match sides {
            0 => None,
            4 => Some(Self::D4),
            6 => Some(Self::D6),
            8 => Some(Self::D8),
            10 => Some(Self::D10),
            12 => Some(Self::D12),
            20 => Some(Self::D20),
            100 => Some(Self::D100),
            n => Some(Self::Custom(n)),
        }
    }

    /// Returns the number of sides on this die.
    pub fn sides(self) -> u32 {
        match self {
            Self::D4 => 4,
            Self::D6 => 6,
            Self::D8 => 8,
            Self::D10 => 10,
            Self::D12 => 12,
            Self::D20 => 20,
            Self::D100 => 100,
            Self::Custom(n) => n,
        }
    }
}

impl std::fmt::Display for Die {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "d{}", self.sides())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn die_sides() {
        assert_eq!(Die::D4.sides(), 4);
        assert_eq!(Die::D6.sides(), 6);
        assert_eq!(Die::D12.sides(), 12);
        assert_eq!(Die::D100.sides(), 100);
        assert_eq!(Die::Custom(36).sides(), 36);
    }

    #[test]
    fn die_with_sides() {
        assert_eq!(Die::with_sides(6), Some(Die::D6));
        assert_eq!(Die::with_sides(20), Some(Die::D20));
        assert_eq!(Die::with_sides(1), Some(Die::Custom(1)));
        assert_eq!(Die::with_sides(36), Some(Die::Custom(36)));
        assert_eq!(Die::with_sides(0), None);
    }

    #[test]
    fn die_display() {
        assert_eq!(Die::D6.to_string(), "d6");
        assert_eq!(Die::Custom(36).to_string(), "d36");
    }
}
