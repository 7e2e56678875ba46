//! Shared error types for the services crate.

use thiserror::Error;

use storage::repository::StorageError;

/// Errors emitted by the session engine.
#[derive(Debug, Error)]
#[non_exhaustive]
pub enum GameError {
    #[error("no active game session")]
    NoSession,
    #[error("no question left to answer in this session")]
    Completed,
    #[error(transparent)]
    Storage(#[from] StorageError),
}
