//! Error types for the library API.

use crate::core::state::SaveError;
use thiserror::Error;

/// Errors related to the prompt store (validation, persistence, lookup).
#[derive(Error, Debug)]
pub enum StoreError {
    /// An error occurred during store initialization.
    #[error("Failed to initialize store: {0}")]
    Init(String),

    /// A save was rejected because title or content would be empty.
    #[error(transparent)]
    Validation(#[from] SaveError),

    /// The given id does not identify any stored prompt.
    #[error("No prompt with ID '{0}'")]
    UnknownId(String),

    /// The storage write failed. In-memory state is retained and now
    /// diverges from disk until the next successful write.
    #[error("Failed to persist prompts: {0}")]
    Persistence(String),
}
