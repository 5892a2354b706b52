use serde::Serialize;
use thiserror::Error;

use crate::model::Question;

/// Fixed number of questions fetched and displayed per round.
pub const BATCH_SIZE: usize = 5;

#[derive(Debug, Error, Clone, PartialEq, Eq)]
#[non_exhaustive]
pub enum BatchError {
    #[error("expected {BATCH_SIZE} questions, got {len}")]
    WrongSize { len: usize },

    #[error("question at position {position} carries index {index}")]
    IndexMismatch { position: usize, index: usize },
}

/// A complete round of questions. Always exactly `BATCH_SIZE` entries with
/// contiguous indexes; replaced wholesale on every fetch, never mutated.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct QuestionBatch(Vec<Question>);

impl QuestionBatch {
    /// # Errors
    ///
    /// Returns `BatchError` if the batch is not exactly `BATCH_SIZE` questions
    /// or any question's index disagrees with its position.
    pub fn new(questions: Vec<Question>) -> Result<Self, BatchError> {
        if questions.len() != BATCH_SIZE {
            return Err(BatchError::WrongSize {
                len: questions.len(),
            });
        }
        for (position, question) in questions.iter().enumerate() {
            if question.index() != position {
                return Err(BatchError::IndexMismatch {
                    position,
                    index: question.index(),
                });
            }
        }
        Ok(Self(questions))
    }

    #[must_use]
    pub fn questions(&self) -> &[Question] {
        &self.0
    }

    #[must_use]
    pub fn get(&self, index: usize) -> Option<&Question> {
        self.0.get(index)
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Question> {
        self.0.iter()
    }
}
