mod engine;
mod progress;
mod workflow;

// Public API of the game subsystem.
pub use crate::error::GameError;
pub use engine::GameEngine;
pub use progress::GameProgress;
pub use workflow::GameService;
