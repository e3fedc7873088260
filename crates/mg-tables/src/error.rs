//! Error types for table loading and lookup.

use std::path::PathBuf;

use thiserror::Error;

/// Result type for table operations.
pub type TableResult<T> = Result<T, TableError>;

/// Errors that can occur while loading or reading a table.
#[derive(Debug, Error)]
pub enum TableError {
    /// A table file could not be read.
    #[error("failed to read {}: {source}", path.display())]
    Io {
        /// Path of the table file.
        path: PathBuf,
        /// Underlying I/O error.
        source: std::io::Error,
    },

    /// A table file is not valid JSON of the expected shape.
    #[error("invalid {table} table: {source}")]
    Parse {
        /// Which table failed to parse.
        table: &'static str,
        /// Underlying JSON error.
        source: serde_json::Error,
    },

    /// A table (or one of its columns) has no entries.
    #[error("{0} table is empty")]
    Empty(&'static str),

    /// A die roll fell outside the table it indexes.
    #[error("roll of {roll} is outside a table of {len} entries")]
    RollOutOfRange {
        /// The die value.
        roll: u32,
        /// Number of entries in the table.
        len: usize,
    },

    /// HP or Pips fell outside the background grid.
    #[error("no background for HP {hp} and Pips {pips} (grid is {rows}x{columns})")]
    BackgroundOutOfRange {
        /// The HP used as row index.
        hp: u32,
        /// The Pips used as column index.
        pips: u32,
        /// Number of HP rows.
        rows: usize,
        /// Number of Pips columns in the shortest row.
        columns: usize,
    },

    /// The background grid cannot cover every HP/Pips value that may be rolled.
    #[error("background grid is {rows}x{columns} but HP can roll up to {hp} and Pips up to {pips}")]
    BackgroundTooSmall {
        /// Number of HP rows.
        rows: usize,
        /// Number of Pips columns in the shortest row.
        columns: usize,
        /// Highest possible HP.
        hp: u32,
        /// Highest possible Pips.
        pips: u32,
    },

    /// Building the index roll failed.
    #[error(transparent)]
    Dice(#[from] mg_mechanics::MechError),
}
