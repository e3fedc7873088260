//! The character generator: rejection loop followed by trait resolution.

use rand::rngs::StdRng;

use mg_mechanics::reroll_until;
use mg_tables::TableSet;

use crate::config::GeneratorConfig;
use crate::error::CharResult;
use crate::mouse::{Mouse, Traits};

/// Generates mice from a validated configuration and a loaded table set.
#[derive(Debug, Clone)]
pub struct Generator {
    config: GeneratorConfig,
    tables: TableSet,
}

impl Generator {
    /// Build a generator, rejecting configurations that could never finish.
    ///
    /// Fails if a threshold is above what its formula can roll, or if the
    /// background grid does not cover every HP and Pips value the formulas
    /// can produce.
    pub fn new(config: GeneratorConfig, tables: TableSet) -> CharResult<Self> {
        config.validate()?;
        tables
            .backgrounds
            .ensure_covers(config.formulas.hp.max(), config.formulas.pips.max())?;
        Ok(Self { config, tables })
    }

    /// Generate one mouse.
    pub fn generate(&self, rng: &mut StdRng) -> CharResult<Mouse> {
        let accepted = reroll_until(&self.config.formulas, &self.config.thresholds, rng);
        let traits = Traits::resolve(&self.tables, &accepted.stats, rng)?;
        tracing::debug!(
            sign = %traits.sign,
            color = %traits.color,
            pattern = %traits.pattern,
            background = %traits.background,
            "resolved traits"
        );
        Ok(Mouse {
            stats: accepted.stats,
            tries: accepted.tries,
            traits,
        })
    }
}
