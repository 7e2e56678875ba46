use std::sync::Arc;

use quiz_core::Clock;
use quiz_core::model::{AnswerFeedback, Difficulty, GameSession, GameStats, Mode, QuestionBank};
use storage::repository::{KeyValueStore, StorageError};
use storage::stats::StatsStore;

use super::engine::GameEngine;
use super::progress::GameProgress;
use crate::error::GameError;

/// Orchestrates the game engine with durable statistics.
///
/// The engine itself is synchronous; this wrapper owns the store side
/// effects: statistics are read once when the service is built, written when
/// a game completes, and written/removed on an explicit history clear.
pub struct GameService {
    engine: GameEngine,
    stats_store: StatsStore,
}

impl GameService {
    /// Build a service over `store`, loading any persisted statistics.
    ///
    /// A malformed persisted record is logged and replaced with defaults;
    /// it is never fatal.
    ///
    /// # Errors
    ///
    /// Returns `GameError::Storage` if the store itself cannot be read.
    pub async fn load(store: Arc<dyn KeyValueStore>, clock: Clock) -> Result<Self, GameError> {
        let stats_store = StatsStore::new(store);
        let stats = match stats_store.load().await {
            Ok(Some(stats)) => stats,
            Ok(None) => GameStats::default(),
            Err(StorageError::Serialization(err)) => {
                tracing::warn!(error = %err, "discarding malformed statistics record");
                GameStats::default()
            }
            Err(err) => return Err(err.into()),
        };

        Ok(Self {
            engine: GameEngine::new().with_clock(clock).with_stats(stats),
            stats_store,
        })
    }

    #[must_use]
    pub fn current_session(&self) -> Option<&GameSession> {
        self.engine.current_session()
    }

    #[must_use]
    pub fn stats(&self) -> &GameStats {
        self.engine.stats()
    }

    /// Start a new game, replacing any session in flight. Purely in-memory.
    pub fn start_game(
        &mut self,
        bank: &QuestionBank,
        mode: Mode,
        difficulty: Difficulty,
        question_count: usize,
    ) -> &GameSession {
        self.engine.start_game(bank, mode, difficulty, question_count)
    }

    /// Grade an answer against the current question. Purely in-memory.
    ///
    /// # Errors
    ///
    /// Returns `GameError::NoSession` or `GameError::Completed` as the
    /// engine does.
    pub fn answer_question(&mut self, selected: &str) -> Result<AnswerFeedback, GameError> {
        self.engine.answer_question(selected)
    }

    /// Advance, persisting statistics when the call completes the game.
    ///
    /// Returns true when the game just ended.
    ///
    /// # Errors
    ///
    /// Returns `GameError::Storage` if persisting the fold fails; the
    /// in-memory statistics already reflect the finished game.
    pub async fn next_question(&mut self) -> Result<bool, GameError> {
        let ended = self.engine.next_question();
        if ended {
            self.stats_store.save(self.engine.stats()).await?;
        }
        Ok(ended)
    }

    /// Explicitly end the game, persisting statistics if the fold ran.
    ///
    /// # Errors
    ///
    /// Returns `GameError::Storage` if persisting the fold fails.
    pub async fn end_game(&mut self) -> Result<bool, GameError> {
        let ended = self.engine.end_game();
        if ended {
            self.stats_store.save(self.engine.stats()).await?;
        }
        Ok(ended)
    }

    /// Discard the active session; no statistics effect.
    pub fn reset_game(&mut self) {
        self.engine.reset_game();
    }

    #[must_use]
    pub fn progress(&self) -> GameProgress {
        self.engine.progress()
    }

    #[must_use]
    pub fn time_elapsed(&self) -> u64 {
        self.engine.time_elapsed()
    }

    /// Remove the persisted record, then reset statistics to defaults.
    ///
    /// # Errors
    ///
    /// Returns `GameError::Storage` if the removal fails; the in-memory
    /// statistics are left untouched so they stay in step with the record
    /// still in the store.
    pub async fn clear_history(&mut self) -> Result<(), GameError> {
        self.stats_store.clear().await?;
        self.engine.clear_history();
        Ok(())
    }
}
