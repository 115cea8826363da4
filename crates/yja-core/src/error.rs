//! Domain-level error types.

use thiserror::Error;

use crate::domain::ValidationErrors;
use crate::ports::StorageError;

/// Post store failures.
#[derive(Debug, Error)]
pub enum StoreError {
    /// The collection could not be written to the provider.
    /// The in-memory collection already holds the mutation.
    #[error("Failed to persist posts under key {key}: {source}")]
    Persist {
        key: String,
        #[source]
        source: StorageError,
    },

    #[error("No unused post id after {attempts} attempts")]
    IdExhausted { attempts: usize },

    #[error("Failed to encode posts: {0}")]
    Encode(#[from] serde_json::Error),
}

/// Domain errors - everything a caller of the core can run into.
#[derive(Debug, Error)]
pub enum DomainError {
    #[error("Validation failed: {0}")]
    Validation(#[from] ValidationErrors),

    #[error(transparent)]
    Store(#[from] StoreError),
}
