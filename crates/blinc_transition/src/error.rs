//! Error types for blinc_transition

use thiserror::Error;

/// Errors that can occur while reconciling transition children
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum TransitionError {
    /// Two children in one input resolved to the same key.
    ///
    /// The update that produced it is rejected and the previously
    /// committed children are kept.
    #[error("Duplicate child key: {key}")]
    DuplicateKey { key: String },
}

/// Result type for blinc_transition operations
pub type Result<T> = std::result::Result<T, TransitionError>;
