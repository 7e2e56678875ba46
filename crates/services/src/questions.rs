//! Question Supplier: turns a finite template pool into an ordered question
//! sequence of any requested length.

use quiz_core::model::{Difficulty, Mode, Question, QuestionBank, QuestionTemplate};

/// Build an ordered question sequence by walking `pool` cyclically.
///
/// Returns exactly `count` questions, each a fresh instance with a unique id
/// and an unanswered record; templates repeat with period `pool.len()` once
/// `count` exceeds the pool. An empty pool or a zero count yields an empty
/// sequence.
///
/// Pure: same pool and count always produce the same sequence.
#[must_use]
pub fn build_question_set(pool: &[&QuestionTemplate], count: usize) -> Vec<Question> {
    if pool.is_empty() || count == 0 {
        return Vec::new();
    }

    (0..count)
        .map(|position| pool[position % pool.len()].instantiate(position + 1))
        .collect()
}

/// Resolve the template pool for `mode` and `difficulty` from `bank` and
/// build `count` questions from it.
#[must_use]
pub fn generate_questions(
    bank: &QuestionBank,
    mode: Mode,
    difficulty: Difficulty,
    count: usize,
) -> Vec<Question> {
    let pool = bank.pool(mode, difficulty);
    build_question_set(&pool, count)
}
