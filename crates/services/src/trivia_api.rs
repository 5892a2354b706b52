use async_trait::async_trait;
use rand::Rng;
use rand::rng;
use reqwest::Client;
use serde::Deserialize;
use url::Url;

use trivia_core::model::{BATCH_SIZE, Category, Question, QuestionBatch};

use crate::error::QuestionSourceError;
use crate::shuffle::shuffled_answers;

/// Anything that can produce a full batch of questions for a category.
#[async_trait]
pub trait QuestionSource: Send + Sync {
    /// Fetch and normalize one batch.
    ///
    /// # Errors
    ///
    /// Returns `QuestionSourceError` on transport failures or malformed/short
    /// payloads.
    async fn fetch_batch(&self, category: Category) -> Result<QuestionBatch, QuestionSourceError>;
}

/// One raw record as served by the-trivia-api.com.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ApiQuestion {
    pub question: String,
    pub correct_answer: String,
    pub incorrect_answers: Vec<String>,
}

/// HTTP question source. One GET per fetch, no authentication, no retries,
/// transport-default timeouts.
#[derive(Clone, Default)]
pub struct TriviaApiClient {
    client: Client,
}

impl TriviaApiClient {
    #[must_use]
    pub fn new() -> Self {
        Self {
            client: Client::new(),
        }
    }
}

#[async_trait]
impl QuestionSource for TriviaApiClient {
    async fn fetch_batch(&self, category: Category) -> Result<QuestionBatch, QuestionSourceError> {
        let target = Url::parse(category.request_target())?;
        let response = self.client.get(target).send().await?;
        if !response.status().is_success() {
            return Err(QuestionSourceError::HttpStatus(response.status()));
        }
        let records: Vec<ApiQuestion> = response.json().await?;
        build_batch(records, &mut rng())
    }
}

/// Normalize raw API records into a validated batch.
///
/// Takes the first `BATCH_SIZE` records and shuffles each answer set exactly
/// once; the resulting order is fixed for the session.
///
/// # Errors
///
/// Returns `QuestionSourceError::ShortBatch` when fewer than `BATCH_SIZE`
/// records arrive, and propagates validation failures for records with the
/// wrong distractor count.
pub fn build_batch<R: Rng + ?Sized>(
    records: Vec<ApiQuestion>,
    rng: &mut R,
) -> Result<QuestionBatch, QuestionSourceError> {
    if records.len() < BATCH_SIZE {
        return Err(QuestionSourceError::ShortBatch {
            len: records.len(),
        });
    }

    let mut questions = Vec::with_capacity(BATCH_SIZE);
    for (index, record) in records.into_iter().take(BATCH_SIZE).enumerate() {
        let displayed = shuffled_answers(&record.correct_answer, &record.incorrect_answers, rng);
        questions.push(Question::new(
            index,
            record.question,
            record.correct_answer,
            record.incorrect_answers,
            displayed,
        )?);
    }

    Ok(QuestionBatch::new(questions)?)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn record(text: &str) -> ApiQuestion {
        ApiQuestion {
            question: text.to_owned(),
            correct_answer: "Paris".to_owned(),
            incorrect_answers: vec!["Rome".into(), "Berlin".into(), "Madrid".into()],
        }
    }

    fn records(count: usize) -> Vec<ApiQuestion> {
        (0..count).map(|i| record(&format!("Q{i}"))).collect()
    }

    #[test]
    fn builds_exactly_five_questions() {
        let batch = build_batch(records(BATCH_SIZE), &mut rng()).unwrap();
        assert_eq!(batch.questions().len(), BATCH_SIZE);
        for (position, question) in batch.iter().enumerate() {
            assert_eq!(question.index(), position);
            let mut displayed = question.displayed_answers().to_vec();
            displayed.sort();
            assert_eq!(displayed, vec!["Berlin", "Madrid", "Paris", "Rome"]);
        }
    }

    #[test]
    fn excess_records_are_dropped() {
        let batch = build_batch(records(8), &mut rng()).unwrap();
        assert_eq!(batch.questions().len(), BATCH_SIZE);
        assert_eq!(batch.get(4).unwrap().text(), "Q4");
    }

    #[test]
    fn short_payload_is_rejected() {
        let err = build_batch(records(3), &mut rng()).unwrap_err();
        assert!(matches!(err, QuestionSourceError::ShortBatch { len: 3 }));
    }

    #[test]
    fn wrong_distractor_count_is_rejected() {
        let mut malformed = records(BATCH_SIZE);
        malformed[2].incorrect_answers.pop();
        let err = build_batch(malformed, &mut rng()).unwrap_err();
        assert!(matches!(err, QuestionSourceError::Question(_)));
    }

    #[test]
    fn deserializes_the_wire_shape() {
        let payload = r#"[
            {
                "question": "What is the capital of France?",
                "correctAnswer": "Paris",
                "incorrectAnswers": ["Rome", "Berlin", "Madrid"],
                "category": "Geography",
                "difficulty": "easy"
            }
        ]"#;
        let parsed: Vec<ApiQuestion> = serde_json::from_str(payload).unwrap();
        assert_eq!(parsed.len(), 1);
        assert_eq!(parsed[0].correct_answer, "Paris");
        assert_eq!(parsed[0].incorrect_answers.len(), 3);
    }
}
