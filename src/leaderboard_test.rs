use crate::language::Language;
use crate::leaderboard::{Leaderboard, ScoreEntry, MAX_SCORES};

fn entry(name: &str, time: f64) -> ScoreEntry {
    ScoreEntry {
        name: name.to_string(),
        time,
        word_length: 5,
        language: Language::English,
    }
}

#[test]
fn first_score_ranks_first() {
    let mut board = Leaderboard::new();
    assert_eq!(board.record(entry("ada", 42.0)), Some(1));
    assert_eq!(board.rank(41.0, 5, Language::English), 1);
    assert_eq!(board.rank(43.0, 5, Language::English), 2);
}

#[test]
fn rank_counts_strictly_faster_times() {
    let mut board = Leaderboard::new();
    board.record(entry("a", 10.0));
    board.record(entry("b", 20.0));
    board.record(entry("c", 30.0));

    assert_eq!(board.rank(5.0, 5, Language::English), 1);
    assert_eq!(board.rank(20.0, 5, Language::English), 2);
    assert_eq!(board.rank(25.0, 5, Language::English), 3);
}

#[test]
fn qualifying_score_evicts_the_worst_from_a_full_partition() {
    let mut board = Leaderboard::new();
    for i in 0..MAX_SCORES {
        board.record(entry(&format!("p{}", i), (i + 1) as f64));
    }
    assert_eq!(board.len(), MAX_SCORES);

    // Beats the worst kept time (20.0), lands mid-table.
    let rank = board.record(entry("newcomer", 10.5));
    assert_eq!(rank, Some(11));

    let scores = board.scores_for(5, Language::English);
    assert_eq!(scores.len(), MAX_SCORES);
    assert!(scores.iter().any(|e| e.name == "newcomer"));
    assert!(!scores.iter().any(|e| e.time == 20.0));
}

#[test]
fn non_qualifying_score_is_discarded() {
    let mut board = Leaderboard::new();
    for i in 0..MAX_SCORES {
        board.record(entry(&format!("p{}", i), (i + 1) as f64));
    }

    assert_eq!(board.record(entry("slow", 99.0)), None);
    let scores = board.scores_for(5, Language::English);
    assert_eq!(scores.len(), MAX_SCORES);
    assert!(!scores.iter().any(|e| e.name == "slow"));
}

#[test]
fn partitions_do_not_interfere() {
    let mut board = Leaderboard::new();
    for i in 0..MAX_SCORES {
        board.record(entry(&format!("p{}", i), (i + 1) as f64));
    }

    // Same times, different length and different language: both still open.
    let mut six = entry("six", 50.0);
    six.word_length = 6;
    assert_eq!(board.record(six), Some(1));

    let mut ga = entry("ga", 50.0);
    ga.language = Language::Irish;
    assert_eq!(board.record(ga), Some(1));

    assert_eq!(board.scores_for(5, Language::English).len(), MAX_SCORES);
    assert_eq!(board.scores_for(6, Language::English).len(), 1);
    assert_eq!(board.scores_for(5, Language::Irish).len(), 1);
}

#[test]
fn scores_are_listed_fastest_first() {
    let mut board = Leaderboard::new();
    board.record(entry("slow", 30.0));
    board.record(entry("fast", 10.0));
    board.record(entry("mid", 20.0));

    let names: Vec<&str> = board
        .scores_for(5, Language::English)
        .iter()
        .map(|e| e.name.as_str())
        .collect();
    assert_eq!(names, vec!["fast", "mid", "slow"]);
}

#[tokio::test]
async fn save_and_load() {
    let path = std::env::temp_dir().join("wurdle_leaderboard_test.json");

    let mut board = Leaderboard::new();
    board.record(entry("ada", 12.5));
    board.record(entry("grace", 9.75));
    board.save(&path).await.unwrap();

    let loaded = Leaderboard::load(&path).await.unwrap();
    assert_eq!(loaded.len(), 2);
    assert_eq!(loaded.rank(10.0, 5, Language::English), 2);

    tokio::fs::remove_file(&path).await.unwrap();
}
