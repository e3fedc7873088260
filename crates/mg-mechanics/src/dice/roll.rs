//! Dice roll results and keep-highest/lowest selection.

use serde::{Deserialize, Serialize};

use super::Die;

/// The result of rolling a single die.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DieResult {
    /// The type of die that was rolled.
    pub die: Die,
    /// The value rolled (1 to die.sides()).
    pub value: u32,
}

/// The result of rolling an entire dice pool.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct RollResult {
    /// Individual die results, in roll order.
    pub dice: Vec<DieResult>,
}

impl RollResult {
    /// Sum of all die values.
    pub fn total(&self) -> u32 {
        self.dice.iter().map(|d| d.value).sum()
    }

    /// Keep only the `k` highest dice.
    pub fn keep_highest(&self, k: usize) -> RollResult {
        let mut dice = self.dice.clone();
        dice.sort_by(|a, b| b.value.cmp(&a.value));
        dice.truncate(k);
        RollResult { dice }
    }

    /// Keep only the `k` lowest dice.
    pub fn keep_lowest(&self, k: usize) -> RollResult {
        let mut dice = self.dice.clone();
        dice.sort_by_key(|d| d.value);
        dice.truncate(k);
        RollResult { dice }
    }
}

impl std::fmt::Display for RollResult {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let values: Vec<String> = self.dice.iter().map(|d| d.value.to_string()).collect();
        write!(f, "[{}] = {}", values.join(", "), self.total())
    }
}
