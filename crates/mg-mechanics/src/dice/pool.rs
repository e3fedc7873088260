//! Dice pool construction and rolling.

use rand::Rng;
use rand::rngs::StdRng;

use super::Die;
use super::roll::{DieResult, RollResult};

/// A collection of dice to be rolled together.
#[derive(Debug, Clone, Default)]
pub struct DicePool {
    /// The dice in this pool.
    pub dice: Vec<Die>,
}

impl DicePool {
    /// Create an empty dice pool.
    pub fn new() -> Self {
        Self { dice: Vec::new() }
    }

    /// Add `count` dice of the given type.
    pub fn add(mut self, die: Die, count: u32) -> Self {
        for _ in 0..count {
            self.dice.push(die);
        }
        self
    }

    /// Roll all dice in the pool using the given RNG.
    pub fn roll(&self, rng: &mut StdRng) -> RollResult {
        let dice = self
            .dice
            .iter()
            .map(|die| DieResult {
                die: *die,
                value: rng.random_range(1..=die.sides()),
            })
            .collect();
        RollResult { dice }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::SeedableRng;

    #[test]
    fn empty_pool() {
        let pool = DicePool::new();
        assert!(pool.dice.is_empty());
        assert_eq!(pool.roll(&mut StdRng::seed_from_u64(1)).total(), 0);
    }

    #[test]
    fn add_dice() {
        let pool = DicePool::new().add(Die::D6, 3).add(Die::Custom(36), 1);
        assert_eq!(pool.dice.len(), 4);
        assert_eq!(pool.dice[3], Die::Custom(36));
    }

    #[test]
    fn roll_produces_valid_values() {
        let mut rng = StdRng::seed_from_u64(42);
        let pool = DicePool::new().add(Die::D6, 10);
        let result = pool.roll(&mut rng);
        assert_eq!(result.dice.len(), 10);
        for die_result in &result.dice {
            assert!((1..=6).contains(&die_result.value));
        }
    }

    #[test]
    fn one_sided_die_always_rolls_one() {
        let mut rng = StdRng::seed_from_u64(7);
        let pool = DicePool::new().add(Die::Custom(1), 5);
        assert_eq!(pool.roll(&mut rng).total(), 5);
    }

    #[test]
    fn roll_deterministic_with_seed() {
        let pool = DicePool::new().add(Die::D20, 3);
        let mut rng1 = StdRng::seed_from_u64(99);
        let mut rng2 = StdRng::seed_from_u64(99);
        let r1 = pool.roll(&mut rng1);
        let r2 = pool.roll(&mut rng2);
        for (a, b) in r1.dice.iter().zip(r2.dice.iter()) {
            assert_eq!(a.value, b.value);
        }
    }
}
