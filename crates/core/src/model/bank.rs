use serde::{Deserialize, Serialize};

use crate::model::question::{Difficulty, Mode, QuestionTemplate};

/// Templates for one mode, split by difficulty tier.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct DifficultyTiers {
    #[serde(default)]
    easy: Vec<QuestionTemplate>,
    #[serde(default)]
    medium: Vec<QuestionTemplate>,
    #[serde(default)]
    hard: Vec<QuestionTemplate>,
}

impl DifficultyTiers {
    #[must_use]
    pub fn new(
        easy: Vec<QuestionTemplate>,
        medium: Vec<QuestionTemplate>,
        hard: Vec<QuestionTemplate>,
    ) -> Self {
        Self { easy, medium, hard }
    }

    #[must_use]
    pub fn tier(&self, difficulty: Difficulty) -> &[QuestionTemplate] {
        match difficulty {
            Difficulty::Easy => &self.easy,
            Difficulty::Medium => &self.medium,
            Difficulty::Hard => &self.hard,
        }
    }
}

/// Externally authored question bank: mode → difficulty → templates.
///
/// The engine only draws from the bank; authoring and storage of its content
/// are out of scope.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct QuestionBank {
    #[serde(default)]
    uma: DifficultyTiers,
    #[serde(default)]
    musume: DifficultyTiers,
}

impl QuestionBank {
    #[must_use]
    pub fn new(uma: DifficultyTiers, musume: DifficultyTiers) -> Self {
        Self { uma, musume }
    }

    /// Resolve the template pool for a mode/difficulty pair.
    ///
    /// For `Mode::Mixed` the pool is the uma tier followed by the musume
    /// tier. That ordering is observable (it biases which kinds of questions
    /// appear first in a mixed game) and callers rely on it being stable.
    #[must_use]
    pub fn pool(&self, mode: Mode, difficulty: Difficulty) -> Vec<&QuestionTemplate> {
        match mode {
            Mode::Uma => self.uma.tier(difficulty).iter().collect(),
            Mode::Musume => self.musume.tier(difficulty).iter().collect(),
            Mode::Mixed => self
                .uma
                .tier(difficulty)
                .iter()
                .chain(self.musume.tier(difficulty))
                .collect(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::ids::QuestionId;
    use crate::model::question::QuestionKind;

    fn template(id: &str, kind: QuestionKind, difficulty: Difficulty) -> QuestionTemplate {
        QuestionTemplate::new(
            QuestionId::new(id),
            kind,
            format!("prompt {id}"),
            vec!["A".into(), "B".into()],
            "A",
            None,
            difficulty,
        )
        .unwrap()
    }

    fn bank() -> QuestionBank {
        QuestionBank::new(
            DifficultyTiers::new(
                vec![
                    template("uma-easy-1", QuestionKind::Image, Difficulty::Easy),
                    template("uma-easy-2", QuestionKind::Image, Difficulty::Easy),
                ],
                Vec::new(),
                vec![template("uma-hard-1", QuestionKind::Image, Difficulty::Hard)],
            ),
            DifficultyTiers::new(
                vec![template("musume-easy-1", QuestionKind::Bio, Difficulty::Easy)],
                Vec::new(),
                Vec::new(),
            ),
        )
    }

    #[test]
    fn single_mode_pools_select_one_tier() {
        let bank = bank();
        let pool = bank.pool(Mode::Uma, Difficulty::Easy);
        assert_eq!(pool.len(), 2);
        assert_eq!(bank.pool(Mode::Uma, Difficulty::Medium).len(), 0);
        assert_eq!(bank.pool(Mode::Musume, Difficulty::Easy).len(), 1);
    }

    #[test]
    fn mixed_pool_lists_uma_before_musume() {
        let bank = bank();
        let pool = bank.pool(Mode::Mixed, Difficulty::Easy);
        let ids: Vec<&str> = pool.iter().map(|t| t.id().as_str()).collect();
        assert_eq!(ids, ["uma-easy-1", "uma-easy-2", "musume-easy-1"]);
    }

    #[test]
    fn bank_deserializes_from_json() {
        let raw = r#"{
            "uma": {
                "easy": [{
                    "id": "uma-easy-1",
                    "type": "image",
                    "question": "Which one?",
                    "options": ["Special Week", "Gold Ship"],
                    "correctAnswer": "Special Week",
                    "explanation": "The heroine.",
                    "difficulty": "easy"
                }]
            },
            "musume": {}
        }"#;

        let bank: QuestionBank = serde_json::from_str(raw).unwrap();
        assert_eq!(bank.pool(Mode::Uma, Difficulty::Easy).len(), 1);
        assert!(bank.pool(Mode::Musume, Difficulty::Easy).is_empty());
    }
}
