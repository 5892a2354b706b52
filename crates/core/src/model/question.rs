use serde::Serialize;
use thiserror::Error;

/// Number of incorrect answers attached to every question.
pub const DISTRACTOR_COUNT: usize = 3;

/// Number of answers shown for every question (correct + distractors).
pub const ANSWER_COUNT: usize = DISTRACTOR_COUNT + 1;

#[derive(Debug, Error, Clone, PartialEq, Eq)]
#[non_exhaustive]
pub enum QuestionError {
    #[error("expected {DISTRACTOR_COUNT} distractors, got {len}")]
    DistractorCount { len: usize },

    #[error("expected {ANSWER_COUNT} displayed answers, got {len}")]
    DisplayedCount { len: usize },

    #[error("displayed answers are not a permutation of the answer set")]
    AnswerSetMismatch,
}

/// One quiz item with its answer order fixed for the session.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Question {
    index: usize,
    text: String,
    correct_answer: String,
    distractors: Vec<String>,
    displayed_answers: Vec<String>,
}

impl Question {
    /// Build a question, validating answer counts and that `displayed_answers`
    /// is a permutation of the correct answer plus the distractors.
    ///
    /// # Errors
    ///
    /// Returns `QuestionError` if either count is off or the displayed set
    /// drops or duplicates an answer.
    pub fn new(
        index: usize,
        text: impl Into<String>,
        correct_answer: impl Into<String>,
        distractors: Vec<String>,
        displayed_answers: Vec<String>,
    ) -> Result<Self, QuestionError> {
        let correct_answer = correct_answer.into();

        if distractors.len() != DISTRACTOR_COUNT {
            return Err(QuestionError::DistractorCount {
                len: distractors.len(),
            });
        }
        if displayed_answers.len() != ANSWER_COUNT {
            return Err(QuestionError::DisplayedCount {
                len: displayed_answers.len(),
            });
        }

        let mut expected: Vec<&str> = distractors.iter().map(String::as_str).collect();
        expected.push(correct_answer.as_str());
        expected.sort_unstable();
        let mut displayed: Vec<&str> = displayed_answers.iter().map(String::as_str).collect();
        displayed.sort_unstable();
        if expected != displayed {
            return Err(QuestionError::AnswerSetMismatch);
        }

        Ok(Self {
            index,
            text: text.into(),
            correct_answer,
            distractors,
            displayed_answers,
        })
    }

    /// Ordinal position within the batch (0-based).
    #[must_use]
    pub fn index(&self) -> usize {
        self.index
    }

    #[must_use]
    pub fn text(&self) -> &str {
        &self.text
    }

    #[must_use]
    pub fn correct_answer(&self) -> &str {
        &self.correct_answer
    }

    #[must_use]
    pub fn distractors(&self) -> &[String] {
        &self.distractors
    }

    /// Answers in the order they are shown, fixed at construction.
    #[must_use]
    pub fn displayed_answers(&self) -> &[String] {
        &self.displayed_answers
    }

    #[must_use]
    pub fn is_correct(&self, answer: &str) -> bool {
        self.correct_answer == answer
    }
}
