//! Leaderboard tests.

use bjsolo::{Leaderboard, ScoreEntry, ScoreStore};

#[test]
fn leaderboard_ranks_by_net_descending() {
    let mut board = Leaderboard::new();
    assert!(board.is_empty());

    board.submit(ScoreEntry::new("ana", 200, true));
    board.submit(ScoreEntry::new("bo", -500, false));
    board.submit(ScoreEntry::new("cy", 1200, true));
    board.submit(ScoreEntry::new("di", 200, false));

    let names: Vec<String> = board.ranked().into_iter().map(|e| e.name).collect();
    assert_eq!(names, vec!["cy", "ana", "di", "bo"]);
    assert_eq!(board.len(), 4);
}

#[cfg(feature = "serde")]
#[test]
fn score_entry_uses_wire_names() {
    let entry = ScoreEntry::new("ana", -150, true);
    let json = serde_json::to_value(&entry).unwrap();
    assert_eq!(
        json,
        serde_json::json!({ "name": "ana", "moneyWon": -150, "win": 1 })
    );

    let back: ScoreEntry = serde_json::from_value(json).unwrap();
    assert_eq!(back, entry);
}
