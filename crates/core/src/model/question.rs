use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::model::ids::QuestionId;

//
// ─── ENUMS ─────────────────────────────────────────────────────────────────────
//

/// Which character-knowledge dimension a game tests.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Mode {
    /// Visual identification.
    #[default]
    Uma,
    /// Personality and biography.
    Musume,
    /// Both dimensions in one game.
    Mixed,
}

/// Difficulty tier of a question or a game.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Difficulty {
    #[default]
    Easy,
    Medium,
    Hard,
}

/// What kind of prompt a question carries.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum QuestionKind {
    Image,
    Bio,
    Mixed,
}

//
// ─── ERRORS ────────────────────────────────────────────────────────────────────
//

/// Errors raised while validating a question template.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
#[non_exhaustive]
pub enum QuestionError {
    #[error("question template has no answer options")]
    EmptyOptions,

    #[error("correct answer {answer:?} is not one of the options")]
    CorrectAnswerMissing { answer: String },
}

//
// ─── TEMPLATE ──────────────────────────────────────────────────────────────────
//

/// An authored question blueprint.
///
/// Templates are reused via cyclic cloning to satisfy arbitrary requested
/// question counts, so they carry no per-play state. The serialized form uses
/// the wire names of the external question bank (`type`, `question`,
/// `correctAnswer`).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", try_from = "TemplateDraft")]
pub struct QuestionTemplate {
    id: QuestionId,
    #[serde(rename = "type")]
    kind: QuestionKind,
    #[serde(rename = "question")]
    prompt: String,
    options: Vec<String>,
    correct_answer: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    explanation: Option<String>,
    difficulty: Difficulty,
}

/// Unvalidated template shape, as read from an external bank.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
struct TemplateDraft {
    id: QuestionId,
    #[serde(rename = "type")]
    kind: QuestionKind,
    question: String,
    options: Vec<String>,
    correct_answer: String,
    #[serde(default)]
    explanation: Option<String>,
    difficulty: Difficulty,
}

impl TryFrom<TemplateDraft> for QuestionTemplate {
    type Error = QuestionError;

    fn try_from(draft: TemplateDraft) -> Result<Self, Self::Error> {
        QuestionTemplate::new(
            draft.id,
            draft.kind,
            draft.question,
            draft.options,
            draft.correct_answer,
            draft.explanation,
            draft.difficulty,
        )
    }
}

impl QuestionTemplate {
    /// Build a validated template.
    ///
    /// # Errors
    ///
    /// Returns `QuestionError::EmptyOptions` if `options` is empty and
    /// `QuestionError::CorrectAnswerMissing` if `correct_answer` is not a
    /// member of `options`.
    #[allow(clippy::too_many_arguments)]
    pub fn new(
        id: QuestionId,
        kind: QuestionKind,
        prompt: impl Into<String>,
        options: Vec<String>,
        correct_answer: impl Into<String>,
        explanation: Option<String>,
        difficulty: Difficulty,
    ) -> Result<Self, QuestionError> {
        let correct_answer = correct_answer.into();
        if options.is_empty() {
            return Err(QuestionError::EmptyOptions);
        }
        if !options.iter().any(|option| *option == correct_answer) {
            return Err(QuestionError::CorrectAnswerMissing {
                answer: correct_answer,
            });
        }

        Ok(Self {
            id,
            kind,
            prompt: prompt.into(),
            options,
            correct_answer,
            explanation,
            difficulty,
        })
    }

    #[must_use]
    pub fn id(&self) -> &QuestionId {
        &self.id
    }

    #[must_use]
    pub fn kind(&self) -> QuestionKind {
        self.kind
    }

    #[must_use]
    pub fn prompt(&self) -> &str {
        &self.prompt
    }

    #[must_use]
    pub fn options(&self) -> &[String] {
        &self.options
    }

    #[must_use]
    pub fn correct_answer(&self) -> &str {
        &self.correct_answer
    }

    #[must_use]
    pub fn explanation(&self) -> Option<&str> {
        self.explanation.as_deref()
    }

    #[must_use]
    pub fn difficulty(&self) -> Difficulty {
        self.difficulty
    }

    /// Clone this template into a playable question instance.
    ///
    /// `sequence` is the 1-based position of the instance in the generated
    /// set; it is folded into the instance id so repeated templates never
    /// collide. The per-instance answer record starts out unanswered.
    #[must_use]
    pub fn instantiate(&self, sequence: usize) -> Question {
        Question {
            id: self.id.instance(sequence),
            kind: self.kind,
            prompt: self.prompt.clone(),
            options: self.options.clone(),
            correct_answer: self.correct_answer.clone(),
            explanation: self.explanation.clone(),
            difficulty: self.difficulty,
            state: AnswerState::default(),
        }
    }
}

//
// ─── QUESTION INSTANCE ─────────────────────────────────────────────────────────
//

/// Mutable per-instance answer record.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
struct AnswerState {
    answered: bool,
    correct: bool,
    user_answer: Option<String>,
}

/// A question as it appears inside one game session.
///
/// Options are treated as unordered but rendered in the order stored here.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Question {
    id: QuestionId,
    kind: QuestionKind,
    prompt: String,
    options: Vec<String>,
    correct_answer: String,
    explanation: Option<String>,
    difficulty: Difficulty,
    state: AnswerState,
}

impl Question {
    #[must_use]
    pub fn id(&self) -> &QuestionId {
        &self.id
    }

    #[must_use]
    pub fn kind(&self) -> QuestionKind {
        self.kind
    }

    #[must_use]
    pub fn prompt(&self) -> &str {
        &self.prompt
    }

    #[must_use]
    pub fn options(&self) -> &[String] {
        &self.options
    }

    #[must_use]
    pub fn correct_answer(&self) -> &str {
        &self.correct_answer
    }

    #[must_use]
    pub fn explanation(&self) -> Option<&str> {
        self.explanation.as_deref()
    }

    #[must_use]
    pub fn difficulty(&self) -> Difficulty {
        self.difficulty
    }

    #[must_use]
    pub fn is_answered(&self) -> bool {
        self.state.answered
    }

    #[must_use]
    pub fn is_correct(&self) -> bool {
        self.state.correct
    }

    #[must_use]
    pub fn user_answer(&self) -> Option<&str> {
        self.state.user_answer.as_deref()
    }

    /// Grade `selected` against the correct answer (exact string equality)
    /// and record it on this instance. Returns whether it was correct.
    pub fn record_answer(&mut self, selected: &str) -> bool {
        let correct = selected == self.correct_answer;
        self.state = AnswerState {
            answered: true,
            correct,
            user_answer: Some(selected.to_owned()),
        };
        correct
    }
}

//
// ─── TESTS ─────────────────────────────────────────────────────────────────────
//
