//! Engine error taxonomy
//!
//! Two failure classes: `Validation` for user-correctable input problems
//! (the message is shown to the end user verbatim) and `UnsupportedKind`
//! for an unrecognized calculator token, which indicates a wiring bug in
//! the caller rather than bad user input.

use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum EngineError {
    /// Bad, missing, or out-of-range input. User-correctable.
    #[error("{0}")]
    Validation(String),

    /// Calculator kind token is not one of the four recognized values.
    #[error("unsupported calculator kind: {0}")]
    UnsupportedKind(String),
}

impl EngineError {
    /// Shorthand for building a validation error from a message
    pub fn validation(msg: impl Into<String>) -> Self {
        EngineError::Validation(msg.into())
    }
}

/// Result alias used throughout the engine
pub type EngineResult<T> = Result<T, EngineError>;
