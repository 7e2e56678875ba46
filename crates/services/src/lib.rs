#![forbid(unsafe_code)]

pub mod error;
pub mod game;
pub mod questions;

pub use quiz_core::Clock;
pub use quiz_core::model::AnswerFeedback;

pub use error::GameError;
pub use game::{GameEngine, GameProgress, GameService};
pub use questions::{build_question_set, generate_questions};
