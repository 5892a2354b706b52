use thiserror::Error;

use crate::model::{BatchError, QuestionError};

#[derive(Debug, Error)]
pub enum Error {
    #[error(transparent)]
    Question(#[from] QuestionError),
    #[error(transparent)]
    Batch(#[from] BatchError),
}
