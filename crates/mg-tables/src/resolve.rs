//! Trait resolvers.
//!
//! Random tables are rolled with `1d<len>` and the die value minus one is
//! the entry index. The background is not rolled: HP and Pips pick the cell.

use rand::rngs::StdRng;

use mg_mechanics::DiceExpr;

use crate::error::{TableError, TableResult};
use crate::model::{Background, BackgroundTable, Birthsign, BirthsignTable, CoatTable, DetailTable};

/// Map a 1-based die value onto a 0-based index into a table of `len` entries.
pub fn index_for_roll(roll: u32, len: usize) -> TableResult<usize> {
    let index = usize::try_from(roll)
        .ok()
        .and_then(|r| r.checked_sub(1))
        .filter(|&i| i < len);
    index.ok_or(TableError::RollOutOfRange { roll, len })
}

/// Roll `1d<len>` and return the matching 0-based index.
pub fn pick_index(len: usize, table: &'static str, rng: &mut StdRng) -> TableResult<usize> {
    if len == 0 {
        return Err(TableError::Empty(table));
    }
    let sides = u32::try_from(len).unwrap_or(u32::MAX);
    let roll = DiceExpr::single(sides)?.roll(rng);
    tracing::trace!(table, roll, sides, "table roll");
    index_for_roll(roll, len)
}

/// Roll a linked sign and disposition.
pub fn roll_birthsign<'a>(
    table: &'a BirthsignTable,
    rng: &mut StdRng,
) -> TableResult<&'a Birthsign> {
    let index = pick_index(table.entries.len(), "birthsigns", rng)?;
    Ok(&table.entries[index])
}

/// Roll a coat color and pattern with two independent dice.
pub fn roll_coat<'a>(table: &'a CoatTable, rng: &mut StdRng) -> TableResult<(&'a str, &'a str)> {
    let color = pick_index(table.colors.len(), "coat colors", rng)?;
    let pattern = pick_index(table.patterns.len(), "coat patterns", rng)?;
    Ok((&table.colors[color], &table.patterns[pattern]))
}

/// Roll a physical detail.
pub fn roll_detail<'a>(table: &'a DetailTable, rng: &mut StdRng) -> TableResult<&'a str> {
    let index = pick_index(table.details.len(), "details", rng)?;
    Ok(&table.details[index])
}

/// Look up the background for a character's HP and Pips.
pub fn background_for(table: &BackgroundTable, hp: u32, pips: u32) -> TableResult<&Background> {
    table.get(hp, pips).ok_or_else(|| TableError::BackgroundOutOfRange {
        hp,
        pips,
        rows: table.row_count(),
        columns: table.column_count(),
    })
}
