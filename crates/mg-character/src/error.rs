//! Error types for character generation.

use thiserror::Error;

use mg_mechanics::MechError;
use mg_tables::TableError;

/// Result type for character generation.
pub type CharResult<T> = Result<T, CharError>;

/// Errors that can occur while configuring or running the generator.
#[derive(Debug, Error)]
pub enum CharError {
    /// Dice or threshold error.
    #[error(transparent)]
    Mechanics(#[from] MechError),

    /// Table loading or lookup error.
    #[error(transparent)]
    Tables(#[from] TableError),
}
