//! Trait tables for mausgen.
//!
//! Loads the birthsign, coat, detail, and background tables from JSON and
//! resolves a character's cosmetic traits from them. Random tables are
//! indexed with a `1d<len>` roll; the background grid is a direct lookup by
//! HP and Pips.

pub mod error;
pub mod load;
pub mod model;
pub mod resolve;

pub use error::{TableError, TableResult};
pub use load::TableSet;
pub use model::{Background, BackgroundTable, Birthsign, BirthsignTable, CoatTable, DetailTable};
pub use resolve::{
    background_for, index_for_roll, pick_index, roll_birthsign, roll_coat, roll_detail,
};
