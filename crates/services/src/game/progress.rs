use serde::Serialize;

/// Aggregated view of session progress, useful for UI.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct GameProgress {
    /// 1-based number of the question being played.
    pub current: usize,
    pub total: usize,
    /// `round(current / total * 100)`.
    pub percentage: u32,
}

impl GameProgress {
    /// All zeros: no session, or a session with no questions.
    #[must_use]
    pub fn idle() -> Self {
        Self {
            current: 0,
            total: 0,
            percentage: 0,
        }
    }
}
