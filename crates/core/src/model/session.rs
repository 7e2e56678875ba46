use chrono::{DateTime, Utc};

use crate::model::ids::SessionId;
use crate::model::question::{Mode, Question};
use crate::scoring;

/// Feedback returned to the caller after grading an answer.
///
/// Grading does not advance the session; the caller decides how long the
/// feedback stays on screen before moving forward.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AnswerFeedback {
    pub is_correct: bool,
    pub explanation: Option<String>,
}

/// One trivia game in progress.
///
/// Created by the engine's start operation and mutated in place by answering
/// and advancing. Completion is terminal; a completed session only goes away
/// by being reset or replaced.
#[derive(Debug, Clone, PartialEq)]
pub struct GameSession {
    id: SessionId,
    mode: Mode,
    score: u32,
    total_questions: usize,
    current: usize,
    questions: Vec<Question>,
    started_at: DateTime<Utc>,
    completed_at: Option<DateTime<Utc>>,
    streak: u32,
    max_streak: u32,
}

impl GameSession {
    /// Create a fresh session over an already-generated question sequence.
    ///
    /// An empty sequence yields a degenerate session: it can be completed but
    /// never answered, and progress reports all zeros.
    #[must_use]
    pub fn new(mode: Mode, questions: Vec<Question>, started_at: DateTime<Utc>) -> Self {
        Self {
            id: SessionId::generate(),
            mode,
            score: 0,
            total_questions: questions.len(),
            current: 0,
            questions,
            started_at,
            completed_at: None,
            streak: 0,
            max_streak: 0,
        }
    }

    #[must_use]
    pub fn id(&self) -> SessionId {
        self.id
    }

    #[must_use]
    pub fn mode(&self) -> Mode {
        self.mode
    }

    #[must_use]
    pub fn score(&self) -> u32 {
        self.score
    }

    #[must_use]
    pub fn total_questions(&self) -> usize {
        self.total_questions
    }

    /// Zero-based index of the question currently being played.
    #[must_use]
    pub fn current_index(&self) -> usize {
        self.current
    }

    #[must_use]
    pub fn questions(&self) -> &[Question] {
        &self.questions
    }

    #[must_use]
    pub fn current_question(&self) -> Option<&Question> {
        self.questions.get(self.current)
    }

    #[must_use]
    pub fn started_at(&self) -> DateTime<Utc> {
        self.started_at
    }

    #[must_use]
    pub fn completed_at(&self) -> Option<DateTime<Utc>> {
        self.completed_at
    }

    #[must_use]
    pub fn is_completed(&self) -> bool {
        self.completed_at.is_some()
    }

    #[must_use]
    pub fn streak(&self) -> u32 {
        self.streak
    }

    #[must_use]
    pub fn max_streak(&self) -> u32 {
        self.max_streak
    }

    /// Number of questions answered correctly so far.
    #[must_use]
    pub fn correct_count(&self) -> usize {
        self.questions.iter().filter(|q| q.is_correct()).count()
    }

    /// Grade `selected` against the current question and apply score and
    /// streak effects. The pointer does not move.
    ///
    /// Returns `None` when there is no current question to answer (completed
    /// or degenerate session).
    pub fn answer_current(&mut self, selected: &str) -> Option<AnswerFeedback> {
        if self.is_completed() {
            return None;
        }
        let question = self.questions.get_mut(self.current)?;
        let is_correct = question.record_answer(selected);
        let explanation = question.explanation().map(str::to_owned);
        let difficulty = question.difficulty();

        if is_correct {
            self.streak += 1;
            self.max_streak = self.max_streak.max(self.streak);
            // Streak is measured after the increment, so the first correct
            // answer already earns the 1.1x multiplier.
            self.score += scoring::score_increase(difficulty, self.streak);
        } else {
            self.streak = 0;
        }

        Some(AnswerFeedback {
            is_correct,
            explanation,
        })
    }

    /// True while the pointer has not reached the last question.
    #[must_use]
    pub fn has_next(&self) -> bool {
        self.current + 1 < self.total_questions
    }

    /// Move the pointer to the next question. Does nothing on the last one;
    /// finishing the game is the engine's call to make.
    pub fn advance(&mut self) {
        if self.has_next() {
            self.current += 1;
        }
    }

    /// Mark the session completed at `at`. Returns false if it already was,
    /// so callers can keep the end-of-game fold to exactly one run.
    pub fn complete(&mut self, at: DateTime<Utc>) -> bool {
        if self.completed_at.is_some() {
            return false;
        }
        self.completed_at = Some(at);
        true
    }
}
