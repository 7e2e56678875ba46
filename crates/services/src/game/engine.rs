use std::fmt;

use quiz_core::Clock;
use quiz_core::model::{AnswerFeedback, Difficulty, GameSession, GameStats, Mode, QuestionBank};

use super::progress::GameProgress;
use crate::error::GameError;
use crate::questions::generate_questions;

/// Synchronous state machine for a single trivia game.
///
/// Owns the active session (at most one; starting a new game replaces any
/// prior one without preserving it) and the cross-session statistics record.
/// All operations mutate in place and return immediately; persistence hooks
/// live in [`GameService`](super::GameService).
///
/// Session lifecycle: absent, then active while answering and advancing, then
/// completed. Completion is terminal; only a reset or a new start goes back
/// to absent.
pub struct GameEngine {
    clock: Clock,
    session: Option<GameSession>,
    stats: GameStats,
}

impl Default for GameEngine {
    fn default() -> Self {
        Self::new()
    }
}

impl GameEngine {
    #[must_use]
    pub fn new() -> Self {
        Self {
            clock: Clock::default(),
            session: None,
            stats: GameStats::default(),
        }
    }

    /// Replace the engine clock, mainly to fix time in tests.
    #[must_use]
    pub fn with_clock(mut self, clock: Clock) -> Self {
        self.clock = clock;
        self
    }

    /// Seed the statistics record, e.g. from a persisted load.
    #[must_use]
    pub fn with_stats(mut self, stats: GameStats) -> Self {
        self.stats = stats;
        self
    }

    #[must_use]
    pub fn current_session(&self) -> Option<&GameSession> {
        self.session.as_ref()
    }

    #[must_use]
    pub fn stats(&self) -> &GameStats {
        &self.stats
    }

    /// Start a new game, replacing any session in flight.
    ///
    /// The question sequence is materialized once, here. A zero count (or a
    /// bank with no templates for the pair) yields a degenerate session with
    /// no questions; it never errors.
    pub fn start_game(
        &mut self,
        bank: &QuestionBank,
        mode: Mode,
        difficulty: Difficulty,
        question_count: usize,
    ) -> &GameSession {
        let questions = generate_questions(bank, mode, difficulty, question_count);
        self.session
            .insert(GameSession::new(mode, questions, self.clock.now()))
    }

    /// Grade `selected` against the current question.
    ///
    /// Score and streak mutate on the session; the pointer does not move, so
    /// callers control how long feedback stays visible before calling
    /// [`next_question`](Self::next_question).
    ///
    /// # Errors
    ///
    /// Returns `GameError::NoSession` with no active session and
    /// `GameError::Completed` when no question is left to grade.
    pub fn answer_question(&mut self, selected: &str) -> Result<AnswerFeedback, GameError> {
        let session = self.session.as_mut().ok_or(GameError::NoSession)?;
        session.answer_current(selected).ok_or(GameError::Completed)
    }

    /// Advance to the next question, or finish the game on the last one.
    ///
    /// This is the sole advancement path. Returns true when the call
    /// completed the game (and folded statistics), so callers know to
    /// persist. No-op when no session exists or it already completed.
    pub fn next_question(&mut self) -> bool {
        let Some(session) = self.session.as_mut() else {
            return false;
        };
        if session.is_completed() {
            return false;
        }
        if session.has_next() {
            session.advance();
            false
        } else {
            self.finish_game()
        }
    }

    /// Explicitly finish the game.
    ///
    /// Idempotent: returns true only the first time, when the statistics
    /// fold actually ran. No-op without a session.
    pub fn end_game(&mut self) -> bool {
        self.finish_game()
    }

    fn finish_game(&mut self) -> bool {
        let Some(session) = self.session.as_mut() else {
            return false;
        };
        if !session.complete(self.clock.now()) {
            return false;
        }
        self.stats.record_game(session);
        true
    }

    /// Discard the active session. Statistics are untouched; a session only
    /// counts once it reaches the end of the game.
    pub fn reset_game(&mut self) {
        self.session = None;
    }

    /// Progress through the active session; all zeros when idle or when the
    /// session has no questions.
    #[must_use]
    #[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
    pub fn progress(&self) -> GameProgress {
        let Some(session) = &self.session else {
            return GameProgress::idle();
        };
        let total = session.total_questions();
        if total == 0 {
            return GameProgress::idle();
        }

        let current = session.current_index() + 1;
        let percentage = (current as f64 / total as f64 * 100.0).round() as u32;
        GameProgress {
            current,
            total,
            percentage,
        }
    }

    /// Whole seconds since the session started, recomputed on every call for
    /// live display. Zero when idle.
    #[must_use]
    pub fn time_elapsed(&self) -> u64 {
        self.session
            .as_ref()
            .map_or(0, |session| self.clock.seconds_since(session.started_at()))
    }

    /// Reset the statistics record to its defaults.
    pub fn clear_history(&mut self) {
        self.stats = GameStats::default();
    }
}

impl fmt::Debug for GameEngine {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("GameEngine")
            .field("has_session", &self.session.is_some())
            .field("stats", &self.stats)
            .finish_non_exhaustive()
    }
}

//
// ─── TESTS ─────────────────────────────────────────────────────────────────────
//
