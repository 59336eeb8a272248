//! Error types for the demo-users crate.
//!
//! Generation cannot fail with the shipped tables. An empty table surfaces
//! as [`GenerationError::EmptyPool`] rather than as a malformed record.

use thiserror::Error;

/// Errors that can occur during user generation.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum GenerationError {
    /// A lookup pool had no entries to draw from.
    #[error("lookup pool '{pool}' is empty")]
    EmptyPool {
        /// Name of the empty pool.
        pool: &'static str,
    },
}

/// Errors that can occur while rendering or writing generated users.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum OutputError {
    /// The users could not be rendered as JSON.
    #[error("failed to serialize users: {message}")]
    Serialize {
        /// Description of the serialization error.
        message: String,
    },

    /// The rendered document could not be written.
    #[error("failed to write users: {message}")]
    Write {
        /// Description of the I/O error.
        message: String,
    },
}
