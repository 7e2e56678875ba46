//! Score arithmetic for answered questions.
//!
//! Correct answers earn difficulty-based base points scaled by a streak
//! multiplier; incorrect answers earn nothing and are handled by the session
//! (streak reset), not here.

use crate::model::Difficulty;

/// The streak multiplier never exceeds this cap.
pub const MAX_STREAK_MULTIPLIER: f64 = 2.0;

/// Each consecutive correct answer adds this much to the multiplier.
pub const STREAK_MULTIPLIER_STEP: f64 = 0.1;

/// Base points awarded for a correct answer at the given difficulty.
#[must_use]
pub fn base_points(difficulty: Difficulty) -> u32 {
    match difficulty {
        Difficulty::Easy => 10,
        Difficulty::Medium => 20,
        Difficulty::Hard => 30,
    }
}

/// Multiplier applied to base points at the given streak.
///
/// `streak` is measured after the increment for the answer being scored, so
/// the first correct answer already gets 1.1x. The cap of
/// [`MAX_STREAK_MULTIPLIER`] is reached at streak 10.
///
/// # Examples
///
/// ```
/// # use quiz_core::scoring::streak_multiplier;
/// assert_eq!(streak_multiplier(1), 1.1);
/// assert_eq!(streak_multiplier(10), 2.0);
/// assert_eq!(streak_multiplier(25), 2.0);
/// ```
#[must_use]
pub fn streak_multiplier(streak: u32) -> f64 {
    (1.0 + STREAK_MULTIPLIER_STEP * f64::from(streak)).min(MAX_STREAK_MULTIPLIER)
}

/// Points earned by a correct answer: `round(base * multiplier)`.
#[must_use]
#[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
pub fn score_increase(difficulty: Difficulty, streak: u32) -> u32 {
    let raw = f64::from(base_points(difficulty)) * streak_multiplier(streak);
    raw.round() as u32
}
