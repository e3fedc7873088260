//! Rejection sampling of base attributes.
//!
//! Every attempt rerolls all five attributes from scratch and checks them
//! against the thresholds. Rerolling only the failing attributes would skew
//! the distribution of accepted characters.

use rand::rngs::StdRng;

use crate::stats::{BaseStats, StatFormulas};
use crate::threshold::Thresholds;

/// Attributes that passed every threshold, with the attempt count.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Accepted {
    /// The accepted attributes.
    pub stats: BaseStats,
    /// Number of attempts, counting the accepted one.
    pub tries: u64,
}

/// Roll attributes until all of them meet `thresholds`.
///
/// There is no attempt cap. Run [`Thresholds::validate`] first; an
/// unreachable minimum makes this loop forever.
pub fn reroll_until(
    formulas: &StatFormulas,
    thresholds: &Thresholds,
    rng: &mut StdRng,
) -> Accepted {
    let mut stats = BaseStats::roll(formulas, rng);
    let mut tries: u64 = 1;
    while !thresholds.is_met_by(&stats) {
        tracing::trace!(tries, %stats, unmet = ?thresholds.unmet(&stats), "rejected candidate");
        stats.reroll(formulas, rng);
        tries += 1;
    }
    tracing::info!(tries, %stats, "accepted candidate");
    Accepted { stats, tries }
}
