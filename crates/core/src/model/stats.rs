use chrono::Duration;
use serde::{Deserialize, Serialize};
use std::fmt;

use crate::model::question::{Difficulty, Mode};
use crate::model::session::GameSession;

/// Unlockable achievement identifiers.
///
/// Serialized as the kebab-case identifiers used in the persisted record.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum Achievement {
    /// Every question in a session answered correctly.
    PerfectGame,
    /// A streak of ten or more consecutive correct answers.
    StreakMaster,
    /// A session finished in under sixty seconds of wall-clock time.
    SpeedRunner,
}

impl Achievement {
    #[must_use]
    pub fn id(&self) -> &'static str {
        match self {
            Achievement::PerfectGame => "perfect-game",
            Achievement::StreakMaster => "streak-master",
            Achievement::SpeedRunner => "speed-runner",
        }
    }
}

impl fmt::Display for Achievement {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.id())
    }
}

/// Aggregate statistics across all completed sessions.
///
/// Updated exactly once per completed game and persisted through an external
/// key-value store. Every field carries a serde default so a partial
/// persisted record merges with the initial values instead of failing.
///
/// `favorite_difficulty` and `most_played_mode` are persisted but never
/// recomputed; they round-trip through storage at their defaults.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct GameStats {
    total_games_played: u32,
    total_correct: u32,
    total_questions: u32,
    average_score: f64,
    best_streak: u32,
    favorite_difficulty: Difficulty,
    most_played_mode: Mode,
    achievements: Vec<Achievement>,
}

impl GameStats {
    #[must_use]
    pub fn total_games_played(&self) -> u32 {
        self.total_games_played
    }

    #[must_use]
    pub fn total_correct(&self) -> u32 {
        self.total_correct
    }

    #[must_use]
    pub fn total_questions(&self) -> u32 {
        self.total_questions
    }

    /// Running average accuracy across games, as a whole percentage.
    #[must_use]
    pub fn average_score(&self) -> f64 {
        self.average_score
    }

    #[must_use]
    pub fn best_streak(&self) -> u32 {
        self.best_streak
    }

    #[must_use]
    pub fn favorite_difficulty(&self) -> Difficulty {
        self.favorite_difficulty
    }

    #[must_use]
    pub fn most_played_mode(&self) -> Mode {
        self.most_played_mode
    }

    #[must_use]
    pub fn achievements(&self) -> &[Achievement] {
        &self.achievements
    }

    #[must_use]
    pub fn has_achievement(&self, achievement: Achievement) -> bool {
        self.achievements.contains(&achievement)
    }

    /// Fold a completed session into the aggregate.
    ///
    /// Does nothing for a session that has not been completed; the caller is
    /// responsible for invoking this exactly once per game.
    ///
    /// The running average is the incremental weighted mean over prior games,
    /// rounded to a whole percent on every fold. A zero-question session
    /// counts as 0% rather than dividing by zero.
    pub fn record_game(&mut self, session: &GameSession) {
        let Some(completed_at) = session.completed_at() else {
            return;
        };

        let total = u32::try_from(session.total_questions()).unwrap_or(u32::MAX);
        let correct = u32::try_from(session.correct_count()).unwrap_or(u32::MAX);
        let game_pct = if total == 0 {
            0.0
        } else {
            f64::from(correct) / f64::from(total) * 100.0
        };

        let prior_games = f64::from(self.total_games_played);
        self.total_games_played = self.total_games_played.saturating_add(1);
        self.total_questions = self.total_questions.saturating_add(total);
        self.total_correct = self.total_correct.saturating_add(correct);
        self.average_score = ((self.average_score * prior_games + game_pct)
            / f64::from(self.total_games_played))
        .round();
        self.best_streak = self.best_streak.max(session.max_streak());

        if total > 0 && correct == total {
            self.unlock(Achievement::PerfectGame);
        }
        if session.max_streak() >= 10 {
            self.unlock(Achievement::StreakMaster);
        }
        if completed_at - session.started_at() < Duration::seconds(60) {
            self.unlock(Achievement::SpeedRunner);
        }
    }

    fn unlock(&mut self, achievement: Achievement) {
        if !self.achievements.contains(&achievement) {
            self.achievements.push(achievement);
        }
    }
}
