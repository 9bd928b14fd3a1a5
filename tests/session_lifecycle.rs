//! End-to-end session flow: start, win two rounds of variant 3, terminal.

mod common;

use chitchat::duel::{ChatEntry, Duel, DuelError, DuelState, GameVariant, Side, Utterance};
use common::ScriptedOpponent;

#[tokio::test]
async fn variant_3_session_runs_to_terminal() {
    let opponent = ScriptedOpponent::new()
        .will_start("g-7741", 4)
        .will_reply("Agent wins this round. Robot says 8.", Some(8))
        .will_reply("Agent wins this round. Agent wins the game.", None);
    let mut duel = Duel::with_seed(opponent, 1);

    duel.start(GameVariant::V3).await.expect("start");
    assert_eq!(duel.state(), DuelState::Active);
    assert_eq!(duel.scores(), (0, 0));
    // One opening bubble from the robot.
    let opening: Vec<&ChatEntry> = duel.entries().collect();
    assert_eq!(opening.len(), 1);
    assert_eq!(opening[0].side, Side::Robot);
    assert_eq!(opening[0].text, "4?");

    duel.play_round(Utterance::Number(5)).await.expect("round 1");
    assert_eq!(duel.scores(), (1, 0));
    assert_eq!(duel.state(), DuelState::Active);
    // Agent bubble then robot bubble, appended in that order.
    let entries: Vec<&ChatEntry> = duel.entries().collect();
    assert_eq!(entries.len(), 3);
    assert_eq!(entries[1].side, Side::Agent);
    assert_eq!(entries[1].text, "5!");
    assert_eq!(entries[2].side, Side::Robot);
    assert!(entries[2].text.ends_with("8?"), "reply carries the next utterance");

    duel.play_round(Utterance::Number(3)).await.expect("round 2");
    assert_eq!(duel.scores(), (2, 0));
    assert_eq!(duel.state(), DuelState::Terminal(Side::Agent));
    assert_eq!(duel.winner(), Some(Side::Agent));

    // The session is decided; further rounds are rejected.
    assert!(matches!(
        duel.play_round(Utterance::Number(1)).await,
        Err(DuelError::SessionTerminal)
    ));
    assert!(matches!(
        duel.auto_play_round().await,
        Err(DuelError::SessionTerminal)
    ));
    // And the rejection left no trace in the transcript or scores.
    assert_eq!(duel.entries().count(), 5);
    assert_eq!(duel.scores(), (2, 0));
}

#[tokio::test]
async fn moves_reach_the_service_with_the_session_token() {
    let opponent = ScriptedOpponent::new()
        .will_start("code-abc", 2)
        .will_reply("Robot wins this round. Robot says 9.", Some(9));
    let mut duel = Duel::with_seed(opponent, 1);

    duel.start(GameVariant::V1).await.expect("start");
    duel.play_round(Utterance::Number(7)).await.expect("round");

    assert_eq!(duel.opponent().seen_codes, vec!["code-abc"]);
    assert_eq!(duel.opponent().seen_moves, vec![Utterance::Number(7)]);
    assert_eq!(duel.scores(), (0, 1));
}

#[tokio::test]
async fn read_api_is_idempotent() {
    let opponent = ScriptedOpponent::new()
        .will_start("g-1", 6)
        .will_reply("Agent wins this round. Robot says 2.", Some(2));
    let mut duel = Duel::with_seed(opponent, 1);
    duel.start(GameVariant::V2).await.expect("start");
    duel.play_round(Utterance::Number(6)).await.expect("round");

    let texts: Vec<String> = duel.entries().map(|e| e.text.clone()).collect();
    let scores = duel.scores();
    let progress = duel.progress();
    for _ in 0..3 {
        let again: Vec<String> = duel.entries().map(|e| e.text.clone()).collect();
        assert_eq!(again, texts);
        assert_eq!(duel.scores(), scores);
        assert_eq!(duel.progress(), progress);
        assert_eq!(duel.winner(), None);
    }
}

#[tokio::test]
async fn starting_over_discards_the_previous_session() {
    let opponent = ScriptedOpponent::new()
        .will_start("first", 3)
        .will_reply("Agent wins this round. Robot says 5.", Some(5))
        .will_start("second", 8);
    let mut duel = Duel::with_seed(opponent, 1);

    duel.start(GameVariant::V3).await.expect("first start");
    duel.play_round(Utterance::Number(3)).await.expect("round");
    assert_eq!(duel.scores(), (1, 0));

    // Return mid-session begins a fresh duel: new token, clean slate.
    duel.start(GameVariant::V3).await.expect("second start");
    assert_eq!(duel.state(), DuelState::Active);
    assert_eq!(duel.scores(), (0, 0));
    let entries: Vec<&ChatEntry> = duel.entries().collect();
    assert_eq!(entries.len(), 1);
    assert_eq!(entries[0].text, "8?");
    assert_eq!(duel.session().map(|s| s.game_code.as_str()), Some("second"));
}
