use rand::Rng;
use rand::seq::SliceRandom;

use trivia_core::model::ANSWER_COUNT;

/// Collect the correct answer and the distractors into one randomized display
/// order. Pure: the only state is the injected RNG; production callers pass
/// `rand::rng()`.
pub fn shuffled_answers<R: Rng + ?Sized>(
    correct: &str,
    distractors: &[String],
    rng: &mut R,
) -> Vec<String> {
    let mut answers = Vec::with_capacity(ANSWER_COUNT);
    answers.push(correct.to_owned());
    answers.extend(distractors.iter().cloned());
    answers.shuffle(rng);
    answers
}
