//! In-memory shapes of the four trait tables.

use serde::{Deserialize, Serialize};

use crate::error::{TableError, TableResult};

/// A birthsign and the disposition that comes with it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Birthsign {
    /// Name of the sign, e.g. "Star".
    pub sign: String,
    /// Disposition linked to the sign, e.g. "Brave / Reckless".
    pub disposition: String,
}

/// A background and its two starting items.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Background {
    /// Name of the background, e.g. "Beetleherd".
    pub background: String,
    /// First starting item.
    pub item1: String,
    /// Second starting item.
    pub item2: String,
}

/// Birthsigns, rolled as a linked sign/disposition pair.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BirthsignTable {
    /// Entries in die order.
    pub entries: Vec<Birthsign>,
}

/// Coat colors and patterns, rolled independently.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CoatTable {
    /// Colors in die order.
    pub colors: Vec<String>,
    /// Patterns in die order.
    pub patterns: Vec<String>,
}

/// Physical details.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DetailTable {
    /// Details in die order.
    pub details: Vec<String>,
}

/// Background grid indexed by HP (rows) then Pips (columns), both 1-based.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BackgroundTable {
    /// One row per HP value, each holding one cell per Pips value.
    pub rows: Vec<Vec<Background>>,
}

impl BirthsignTable {
    pub(crate) fn ensure_filled(&self) -> TableResult<()> {
        non_empty(self.entries.len(), "birthsigns")
    }
}

impl CoatTable {
    pub(crate) fn ensure_filled(&self) -> TableResult<()> {
        non_empty(self.colors.len(), "coat colors")?;
        non_empty(self.patterns.len(), "coat patterns")
    }
}

impl DetailTable {
    pub(crate) fn ensure_filled(&self) -> TableResult<()> {
        non_empty(self.details.len(), "details")
    }
}

impl BackgroundTable {
    /// Number of HP rows.
    pub fn row_count(&self) -> usize {
        self.rows.len()
    }

    /// Number of Pips columns every row has (the shortest row's length).
    pub fn column_count(&self) -> usize {
        self.rows.iter().map(Vec::len).min().unwrap_or(0)
    }

    /// The cell for the given 1-based HP and Pips, if present.
    pub fn get(&self, hp: u32, pips: u32) -> Option<&Background> {
        let row = usize::try_from(hp).ok()?.checked_sub(1)?;
        let column = usize::try_from(pips).ok()?.checked_sub(1)?;
        self.rows.get(row)?.get(column)
    }

    /// Fail unless every HP in `1..=max_hp` and Pips in `1..=max_pips` has a cell.
    pub fn ensure_covers(&self, max_hp: u32, max_pips: u32) -> TableResult<()> {
        let rows = self.row_count();
        let columns = self.column_count();
        let fits = |len: usize, max: u32| usize::try_from(max).is_ok_and(|m| m <= len);
        if fits(rows, max_hp) && fits(columns, max_pips) {
            Ok(())
        } else {
            Err(TableError::BackgroundTooSmall {
                rows,
                columns,
                hp: max_hp,
                pips: max_pips,
            })
        }
    }

    pub(crate) fn ensure_filled(&self) -> TableResult<()> {
        non_empty(self.row_count(), "backgrounds")?;
        non_empty(self.column_count(), "backgrounds")
    }
}

fn non_empty(len: usize, table: &'static str) -> TableResult<()> {
    if len == 0 {
        Err(TableError::Empty(table))
    } else {
        Ok(())
    }
}
