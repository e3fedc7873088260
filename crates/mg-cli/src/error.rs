//! Errors surfaced by the binary and their exit codes.

use thiserror::Error;

use mg_character::CharError;
use mg_mechanics::MechError;
use mg_tables::TableError;

/// Anything that stops a run before the sheet is printed.
#[derive(Debug, Error)]
pub enum CliError {
    /// Configuration, dice, or table failure.
    #[error(transparent)]
    Generator(#[from] CharError),

    /// JSON output failed.
    #[error("failed to serialize character: {0}")]
    Output(#[from] serde_json::Error),
}

impl From<MechError> for CliError {
    fn from(e: MechError) -> Self {
        Self::Generator(e.into())
    }
}

impl From<TableError> for CliError {
    fn from(e: TableError) -> Self {
        Self::Generator(e.into())
    }
}

impl CliError {
    /// 2 for an unreachable HP/Pips minimum, 1 for everything else.
    pub fn exit_code(&self) -> i32 {
        match self {
            Self::Generator(CharError::Mechanics(MechError::VitalUnreachable { .. })) => 2,
            _ => 1,
        }
    }
}
