use std::sync::Arc;

use quiz_core::model::{
    Achievement, Difficulty, DifficultyTiers, Mode, QuestionBank, QuestionId, QuestionKind,
    QuestionTemplate,
};
use quiz_core::time::fixed_clock;
use services::GameService;
use storage::repository::{InMemoryStore, KeyValueStore};
use storage::stats::StatsStore;

fn template(id: &str) -> QuestionTemplate {
    QuestionTemplate::new(
        QuestionId::new(id),
        QuestionKind::Image,
        format!("prompt {id}"),
        vec!["right".into(), "wrong".into(), "other".into(), "also".into()],
        "right",
        Some("the reason".into()),
        Difficulty::Easy,
    )
    .unwrap()
}

fn bank() -> QuestionBank {
    QuestionBank::new(
        DifficultyTiers::new(
            vec![
                template("uma-easy-1"),
                template("uma-easy-2"),
                template("uma-easy-3"),
            ],
            Vec::new(),
            Vec::new(),
        ),
        DifficultyTiers::default(),
    )
}

#[tokio::test]
async fn perfect_game_persists_statistics_and_achievements() {
    let store: Arc<dyn KeyValueStore> = Arc::new(InMemoryStore::new());
    let mut service = GameService::load(Arc::clone(&store), fixed_clock())
        .await
        .unwrap();

    service.start_game(&bank(), Mode::Uma, Difficulty::Easy, 5);
    assert_eq!(service.current_session().unwrap().total_questions(), 5);

    loop {
        let feedback = service.answer_question("right").unwrap();
        assert!(feedback.is_correct);
        assert_eq!(feedback.explanation.as_deref(), Some("the reason"));
        if service.next_question().await.unwrap() {
            break;
        }
    }

    let session = service.current_session().unwrap();
    assert!(session.is_completed());
    assert_eq!(session.score(), 11 + 12 + 13 + 14 + 15);
    assert_eq!(session.max_streak(), 5);

    let stats = service.stats();
    assert_eq!(stats.total_games_played(), 1);
    assert_eq!(stats.total_questions(), 5);
    assert_eq!(stats.total_correct(), 5);
    assert_eq!(stats.average_score(), 100.0);
    assert!(stats.has_achievement(Achievement::PerfectGame));
    assert!(stats.has_achievement(Achievement::SpeedRunner));

    // The fold is durable: a fresh service over the same store sees it.
    let reloaded = GameService::load(Arc::clone(&store), fixed_clock())
        .await
        .unwrap();
    assert_eq!(reloaded.stats().total_games_played(), 1);
    assert!(reloaded.stats().has_achievement(Achievement::PerfectGame));
}

#[tokio::test]
async fn explicit_end_folds_once_and_persists_once() {
    let store: Arc<dyn KeyValueStore> = Arc::new(InMemoryStore::new());
    let mut service = GameService::load(Arc::clone(&store), fixed_clock())
        .await
        .unwrap();

    service.start_game(&bank(), Mode::Uma, Difficulty::Easy, 3);
    service.answer_question("right").unwrap();
    service.answer_question("right").unwrap(); // re-grade before advancing is allowed

    assert!(service.end_game().await.unwrap());
    assert!(!service.end_game().await.unwrap());
    assert!(!service.next_question().await.unwrap());

    assert_eq!(service.stats().total_games_played(), 1);
    assert_eq!(service.stats().total_questions(), 3);
    assert_eq!(service.stats().total_correct(), 1);
}

#[tokio::test]
async fn reset_mid_game_leaves_no_trace_in_the_store() {
    let store: Arc<dyn KeyValueStore> = Arc::new(InMemoryStore::new());
    let mut service = GameService::load(Arc::clone(&store), fixed_clock())
        .await
        .unwrap();

    service.start_game(&bank(), Mode::Uma, Difficulty::Easy, 3);
    service.answer_question("right").unwrap();
    service.reset_game();

    assert!(service.current_session().is_none());
    assert_eq!(service.stats().total_games_played(), 0);
    assert_eq!(store.get(StatsStore::DEFAULT_KEY).await.unwrap(), None);
}

#[tokio::test]
async fn averages_accumulate_across_games() {
    let store: Arc<dyn KeyValueStore> = Arc::new(InMemoryStore::new());
    let mut service = GameService::load(Arc::clone(&store), fixed_clock())
        .await
        .unwrap();

    // Game one: 3 of 3.
    service.start_game(&bank(), Mode::Uma, Difficulty::Easy, 3);
    loop {
        service.answer_question("right").unwrap();
        if service.next_question().await.unwrap() {
            break;
        }
    }

    // Game two: 0 of 3.
    service.start_game(&bank(), Mode::Uma, Difficulty::Easy, 3);
    loop {
        service.answer_question("wrong").unwrap();
        if service.next_question().await.unwrap() {
            break;
        }
    }

    let stats = service.stats();
    assert_eq!(stats.total_games_played(), 2);
    assert_eq!(stats.total_questions(), 6);
    assert_eq!(stats.total_correct(), 3);
    assert_eq!(stats.average_score(), 50.0);
}
