//! Error types for the mechanics engine.

use crate::stats::Attribute;

/// Errors that can occur while parsing dice or validating thresholds.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum MechError {
    /// The dice expression does not match `NdM`, `NdMkhK` or `NdMklK`.
    #[error("malformed dice expression: '{0}'")]
    MalformedExpr(String),

    /// The expression asks for a die with zero sides.
    #[error("dice expression '{0}' has a zero-sided die")]
    ZeroSides(String),

    /// The expression asks for zero dice.
    #[error("dice expression '{0}' rolls no dice")]
    ZeroDice(String),

    /// The keep count is zero or larger than the number of dice rolled.
    #[error("dice expression '{expr}' keeps {keep} of {count} dice")]
    InvalidKeep {
        /// The offending expression.
        expr: String,
        /// Requested keep count.
        keep: u32,
        /// Number of dice rolled.
        count: u32,
    },

    /// A STR/DEX/WIL minimum is above what its formula can roll.
    #[error("minimum {attribute} of {minimum} is unreachable (highest possible roll is {maximum})")]
    AttributeUnreachable {
        /// The attribute whose minimum is too high.
        attribute: Attribute,
        /// The requested minimum.
        minimum: u32,
        /// Highest value the attribute's formula can produce.
        maximum: u32,
    },

    /// An HP/Pips minimum is above what its formula can roll.
    #[error("minimum {attribute} of {minimum} is unreachable (highest possible roll is {maximum})")]
    VitalUnreachable {
        /// The attribute whose minimum is too high.
        attribute: Attribute,
        /// The requested minimum.
        minimum: u32,
        /// Highest value the attribute's formula can produce.
        maximum: u32,
    },
}

/// Convenience result type for mechanics operations.
pub type MechResult<T> = Result<T, MechError>;
