//! Error types for list operations.

use boundlist_chain::ChainError;

/// Result type for list operations.
pub type Result<T> = std::result::Result<T, ListError>;

/// Errors that can occur during list operations.
///
/// Exceeding a list's capacity is not an error: `append` drops the record
/// and `cross`/`copy` truncate the tail.
#[derive(Debug, thiserror::Error)]
pub enum ListError {
    #[error("list is empty")]
    EmptyList,

    #[error("position {position} is past the end of a list of {len}")]
    PositionOutOfRange { position: usize, len: usize },

    #[error("list capacity must be at least 1")]
    ZeroCapacity,

    #[error("copy failed: {0}")]
    Chain(#[from] ChainError),

    #[error("configuration error: {0}")]
    Config(#[from] ::config::ConfigError),
}
