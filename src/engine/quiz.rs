//! Quiz mode: the real question and the imposter's decoy
//!
//! Normal players get a question whose answer is the round's secret word.
//! The imposter gets a different question from the same category so they
//! have something plausible to talk about without learning the answer.

use crate::types::{Difficulty, QuestionId, QuizQuestion};
use rand::seq::IndexedRandom;

/// Answers are compared loosely so "Makkah" and " makkah" count as the same word
fn answers_match(a: &str, b: &str) -> bool {
    a.trim().to_lowercase() == b.trim().to_lowercase()
}

/// Pick the real question for a round.
///
/// `None` means the category (at this difficulty) has no unused questions left.
pub fn select_question<'a>(
    questions: &'a [QuizQuestion],
    category_id: &str,
    difficulty: Option<Difficulty>,
    exclude_ids: &[QuestionId],
) -> Option<&'a QuizQuestion> {
    let pool: Vec<&QuizQuestion> = questions
        .iter()
        .filter(|q| q.category_id == category_id)
        .filter(|q| difficulty.map_or(true, |d| q.difficulty == d))
        .filter(|q| !exclude_ids.contains(&q.id))
        .collect();

    if pool.is_empty() {
        tracing::info!(category_id, ?difficulty, "No unused quiz questions left");
    }

    pool.choose(&mut rand::rng()).copied()
}

/// Pick a decoy question for the imposter.
///
/// Tiers are tried in order and the first non-empty pool wins:
/// same category and difficulty, then the same category at any difficulty.
/// Every tier drops the real question, questions sharing its answer and
/// questions with identical text. `None` means the caller should hand the
/// imposter the real question.
pub fn select_decoy<'a>(
    questions: &'a [QuizQuestion],
    category_id: &str,
    real_question_id: &str,
    difficulty: Option<Difficulty>,
    real_answer: &str,
    real_question_text: &str,
) -> Option<&'a QuizQuestion> {
    let reveals_answer = |q: &QuizQuestion| {
        q.id == real_question_id
            || answers_match(&q.answer, real_answer)
            || q.question.trim() == real_question_text.trim()
    };

    let same_difficulty = |q: &QuizQuestion| difficulty.map_or(true, |d| q.difficulty == d);
    let any_difficulty = |_: &QuizQuestion| true;

    let tiers: [(&str, &dyn Fn(&QuizQuestion) -> bool); 2] = [
        ("same difficulty", &same_difficulty),
        ("any difficulty", &any_difficulty),
    ];

    let mut rng = rand::rng();
    for (tier, matches) in tiers {
        let pool: Vec<&QuizQuestion> = questions
            .iter()
            .filter(|q| q.category_id == category_id)
            .filter(|&q| matches(q) && !reveals_answer(q))
            .collect();

        if let Some(decoy) = pool.choose(&mut rng) {
            tracing::debug!(tier, decoy_id = %decoy.id, "Selected decoy question");
            return Some(*decoy);
        }
    }

    tracing::debug!(
        category_id,
        "No decoy available, imposter gets the real question"
    );
    None
}
