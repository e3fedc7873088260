//! Configuration for the character generator.

use mg_mechanics::{Attribute, MechResult, StatFormulas, Thresholds};

/// Preset minimum thresholds.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Profile {
    /// Accept any roll: STR/DEX/WIL at least 2, HP/Pips at least 1.
    #[default]
    Standard,
    /// A sturdier mouse: STR/DEX/WIL at least 9, HP/Pips at least 3.
    Hardy,
}

impl Profile {
    /// The thresholds this profile starts from.
    pub fn thresholds(self) -> Thresholds {
        match self {
            Self::Standard => Thresholds::default(),
            Self::Hardy => Thresholds {
                strength: 9,
                dexterity: 9,
                willpower: 9,
                hp: 3,
                pips: 3,
            },
        }
    }
}

/// Dice formulas and thresholds for a generator run.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct GeneratorConfig {
    /// How each attribute is rolled.
    pub formulas: StatFormulas,
    /// Minimum each attribute must reach.
    pub thresholds: Thresholds,
}

impl GeneratorConfig {
    /// Use the thresholds of a preset profile.
    pub fn with_profile(mut self, profile: Profile) -> Self {
        self.thresholds = profile.thresholds();
        self
    }

    /// Replace all thresholds.
    pub fn with_thresholds(mut self, thresholds: Thresholds) -> Self {
        self.thresholds = thresholds;
        self
    }

    /// Override the minimum of a single attribute.
    pub fn with_minimum(mut self, attribute: Attribute, minimum: u32) -> Self {
        self.thresholds = self.thresholds.with(attribute, minimum);
        self
    }

    /// Replace the attribute formulas.
    pub fn with_formulas(mut self, formulas: StatFormulas) -> Self {
        self.formulas = formulas;
        self
    }

    /// Check that every threshold can be reached with the formulas.
    pub fn validate(&self) -> MechResult<()> {
        self.thresholds.validate(&self.formulas)
    }
}
