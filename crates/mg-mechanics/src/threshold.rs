//! Minimum attribute thresholds for the rejection loop.

use crate::error::{MechError, MechResult};
use crate::stats::{Attribute, BaseStats, StatFormulas};

/// Minimum value each attribute must reach for a candidate to be accepted.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Thresholds {
    /// Minimum STR.
    pub strength: u32,
    /// Minimum DEX.
    pub dexterity: u32,
    /// Minimum WIL.
    pub willpower: u32,
    /// Minimum HP.
    pub hp: u32,
    /// Minimum Pips.
    pub pips: u32,
}

impl Default for Thresholds {
    /// Minimums every roll of the default formulas already meets.
    fn default() -> Self {
        Self {
            strength: 2,
            dexterity: 2,
            willpower: 2,
            hp: 1,
            pips: 1,
        }
    }
}

impl Thresholds {
    /// The minimum for a given attribute.
    pub fn get(&self, attribute: Attribute) -> u32 {
        match attribute {
            Attribute::Str => self.strength,
            Attribute::Dex => self.dexterity,
            Attribute::Wil => self.willpower,
            Attribute::Hp => self.hp,
            Attribute::Pips => self.pips,
        }
    }

    /// Replace the minimum for a given attribute.
    pub fn with(mut self, attribute: Attribute, minimum: u32) -> Self {
        match attribute {
            Attribute::Str => self.strength = minimum,
            Attribute::Dex => self.dexterity = minimum,
            Attribute::Wil => self.willpower = minimum,
            Attribute::Hp => self.hp = minimum,
            Attribute::Pips => self.pips = minimum,
        }
        self
    }

    /// True when every attribute meets its minimum.
    pub fn is_met_by(&self, stats: &BaseStats) -> bool {
        Attribute::ALL
            .iter()
            .all(|&attr| stats.get(attr) >= self.get(attr))
    }

    /// Attributes of `stats` that fall short of their minimum.
    pub fn unmet(&self, stats: &BaseStats) -> Vec<Attribute> {
        Attribute::ALL
            .into_iter()
            .filter(|&attr| stats.get(attr) < self.get(attr))
            .collect()
    }

    /// Check that every minimum can be rolled with the given formulas.
    ///
    /// Attributes are checked in sheet order, so an unreachable STR is
    /// reported before an unreachable HP.
    pub fn validate(&self, formulas: &StatFormulas) -> MechResult<()> {
        for attribute in Attribute::ALL {
            let minimum = self.get(attribute);
            let maximum = formulas.get(attribute).max();
            if minimum <= maximum {
                continue;
            }
            return Err(if attribute.is_vital() {
                MechError::VitalUnreachable {
                    attribute,
                    minimum,
                    maximum,
                }
            } else {
                MechError::AttributeUnreachable {
                    attribute,
                    minimum,
                    maximum,
                }
            });
        }
        Ok(())
    }
}
