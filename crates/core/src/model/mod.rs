mod bank;
mod ids;
mod question;
mod session;
mod stats;

pub use bank::{DifficultyTiers, QuestionBank};
pub use ids::{QuestionId, SessionId};
pub use question::{Difficulty, Mode, Question, QuestionError, QuestionKind, QuestionTemplate};
pub use session::{AnswerFeedback, GameSession};
pub use stats::{Achievement, GameStats};
