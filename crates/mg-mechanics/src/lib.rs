//! Dice and attribute mechanics for mausgen.
//!
//! Provides a small dice-expression roller (`NdM`, `NdMkhK`, `NdMklK`),
//! the base-attribute formulas of a mouse character, minimum thresholds,
//! and the rejection loop that rerolls until every threshold is met.

pub mod dice;
pub mod error;
pub mod rejection;
pub mod stats;
pub mod threshold;

pub use dice::{DiceExpr, DicePool, Die, DieResult, Keep, RollResult, roll_expr};
pub use error::{MechError, MechResult};
pub use rejection::{Accepted, reroll_until};
pub use stats::{Attribute, BaseStats, StatFormulas};
pub use threshold::Thresholds;
