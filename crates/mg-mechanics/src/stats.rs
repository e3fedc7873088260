//! Base attributes of a mouse and the dice formulas that roll them.

use rand::rngs::StdRng;
use serde::{Deserialize, Serialize};

use crate::dice::{DiceExpr, Die};

/// One of the five numeric attributes of a character.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Attribute {
    /// Strength.
    Str,
    /// Dexterity.
    Dex,
    /// Willpower.
    Wil,
    /// Hit protection.
    Hp,
    /// Starting pips (coins).
    Pips,
}

impl Attribute {
    /// All attributes in sheet order.
    pub const ALL: [Attribute; 5] = [Self::Str, Self::Dex, Self::Wil, Self::Hp, Self::Pips];

    /// HP and Pips are rolled on a single die and index the background grid.
    pub fn is_vital(self) -> bool {
        matches!(self, Self::Hp | Self::Pips)
    }
}

impl std::fmt::Display for Attribute {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Str => write!(f, "STR"),
            Self::Dex => write!(f, "DEX"),
            Self::Wil => write!(f, "WIL"),
            Self::Hp => write!(f, "HP"),
            Self::Pips => write!(f, "Pips"),
        }
    }
}

/// The dice expression used for each attribute.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StatFormulas {
    /// Formula for STR.
    pub strength: DiceExpr,
    /// Formula for DEX.
    pub dexterity: DiceExpr,
    /// Formula for WIL.
    pub willpower: DiceExpr,
    /// Formula for HP.
    pub hp: DiceExpr,
    /// Formula for Pips.
    pub pips: DiceExpr,
}

impl Default for StatFormulas {
    /// STR, DEX and WIL roll `3d6kh2`; HP and Pips roll `1d6`.
    fn default() -> Self {
        let attribute = DiceExpr::new(3, Die::D6).keep_highest(2);
        let vital = DiceExpr::new(1, Die::D6);
        Self {
            strength: attribute,
            dexterity: attribute,
            willpower: attribute,
            hp: vital,
            pips: vital,
        }
    }
}

impl StatFormulas {
    /// The formula for a given attribute.
    pub fn get(&self, attribute: Attribute) -> &DiceExpr {
        match attribute {
            Attribute::Str => &self.strength,
            Attribute::Dex => &self.dexterity,
            Attribute::Wil => &self.willpower,
            Attribute::Hp => &self.hp,
            Attribute::Pips => &self.pips,
        }
    }
}

/// The five rolled attributes of a candidate character.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct BaseStats {
    /// STR.
    #[serde(rename = "str")]
    pub strength: u32,
    /// DEX.
    #[serde(rename = "dex")]
    pub dexterity: u32,
    /// WIL.
    #[serde(rename = "wil")]
    pub willpower: u32,
    /// HP.
    pub hp: u32,
    /// Pips.
    pub pips: u32,
}

impl BaseStats {
    /// Roll a fresh set of attributes.
    pub fn roll(formulas: &StatFormulas, rng: &mut StdRng) -> Self {
        let mut stats = Self::default();
        stats.reroll(formulas, rng);
        stats
    }

    /// Overwrite every attribute with a new roll.
    ///
    /// All five are rerolled, even those that already met a threshold.
    pub fn reroll(&mut self, formulas: &StatFormulas, rng: &mut StdRng) {
        self.strength = formulas.strength.roll(rng);
        self.dexterity = formulas.dexterity.roll(rng);
        self.willpower = formulas.willpower.roll(rng);
        self.hp = formulas.hp.roll(rng);
        self.pips = formulas.pips.roll(rng);
    }

    /// The value of a given attribute.
    pub fn get(&self, attribute: Attribute) -> u32 {
        match attribute {
            Attribute::Str => self.strength,
            Attribute::Dex => self.dexterity,
            Attribute::Wil => self.willpower,
            Attribute::Hp => self.hp,
            Attribute::Pips => self.pips,
        }
    }
}

impl std::fmt::Display for BaseStats {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "STR: {} DEX: {} WIL: {} HP: {} Pips: {}",
            self.strength, self.dexterity, self.willpower, self.hp, self.pips
        )
    }
}
