//! Error types for the casting engine.

use crate::hexagram::LinePosition;

/// Errors that can occur while casting a hexagram.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum CastError {
    /// A draw was not a three-digit value.
    #[error("invalid draw: {0}")]
    InvalidDraw(String),

    /// All six lines are already filled.
    #[error("hexagram already complete, reset to cast again")]
    AlreadyComplete,

    /// A hexagram was requested before all six lines were filled.
    #[error("hexagram incomplete: {filled}/6 lines")]
    Incomplete {
        /// Lines filled so far.
        filled: usize,
    },

    /// Numeric entry targeted a position other than the active one.
    #[error("line {position} is not the active line (active: {active})")]
    NotActive {
        /// The position that was targeted.
        position: LinePosition,
        /// The position currently accepting input.
        active: LinePosition,
    },

    /// The active numeric position already holds three digits.
    #[error("line {0} already holds three digits")]
    PositionFull(LinePosition),

    /// A character other than 0-9 was entered.
    #[error("not a digit: '{0}'")]
    NotADigit(char),

    /// An operation was sent to a protocol that does not support it.
    #[error("{operation} is not available in {protocol} casting")]
    WrongProtocol {
        /// The attempted operation.
        operation: &'static str,
        /// The active protocol.
        protocol: &'static str,
    },

    /// An unknown protocol name.
    #[error("unknown casting protocol: {0}")]
    InvalidProtocol(String),

    /// The randomness service failed.
    #[error("randomness service failure: {0}")]
    Randomness(String),
}

/// Convenience result type for casting operations.
pub type CastResult<T> = Result<T, CastError>;
