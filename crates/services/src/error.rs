//! Shared error types for the services crate.

use thiserror::Error;

use storage::repository::StorageError;
use trivia_core::model::{BATCH_SIZE, BatchError, QuestionError};

/// Errors emitted by question sources.
#[derive(Debug, Error)]
#[non_exhaustive]
pub enum QuestionSourceError {
    #[error("invalid request target: {0}")]
    InvalidTarget(#[from] url::ParseError),
    #[error("trivia request failed with status {0}")]
    HttpStatus(reqwest::StatusCode),
    #[error(transparent)]
    Http(#[from] reqwest::Error),
    #[error("received {len} questions, need {BATCH_SIZE}")]
    ShortBatch { len: usize },
    #[error(transparent)]
    Question(#[from] QuestionError),
    #[error(transparent)]
    Batch(#[from] BatchError),
}

/// Errors emitted by `PreferenceService`.
#[derive(Debug, Error)]
#[non_exhaustive]
pub enum PreferenceError {
    #[error(transparent)]
    Storage(#[from] StorageError),
}

/// Errors emitted by `SessionController`.
#[derive(Debug, Error)]
#[non_exhaustive]
pub enum SessionError {
    #[error(transparent)]
    Source(#[from] QuestionSourceError),
    #[error(transparent)]
    Preference(#[from] PreferenceError),
}
