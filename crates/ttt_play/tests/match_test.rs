//! Tests for running full matches between contestants.

use std::io::Cursor;
use ttt_engine::{Outcome, Player};
use ttt_play::{Advisor, Human, Match, MatchEnd};

fn scripted(name: &str, script: &str) -> Box<Human<Cursor<Vec<u8>>, Vec<u8>>> {
    Box::new(Human::new(
        name,
        Cursor::new(script.as_bytes().to_vec()),
        Vec::new(),
        false,
    ))
}

#[test]
fn test_advisor_self_play_draws() {
    let mut game = Match::new(
        Box::new(Advisor::new("Advisor X")),
        Box::new(Advisor::new("Advisor O")),
        Vec::new(),
    );

    let end = game.run().unwrap();
    assert_eq!(end, MatchEnd::Finished(Outcome::Draw));
    assert_eq!(game.board().occupied_count(), 9);

    let output = String::from_utf8(game.into_output()).unwrap();
    assert!(output.starts_with("     1   2   3\n"));
    assert!(output.contains("Advisor X (X) plays a1"));
    assert!(output.ends_with("It's a draw.\n"));
}

#[test]
fn test_advisor_punishes_weak_reply() {
    // O answers the corner opening on an edge, which loses.
    let human = scripted("Human", "a2\nb1\nb3\nc2\nc3\nc1\na3\nb2\na1\n");
    let mut game = Match::new(Box::new(Advisor::new("Advisor")), human, Vec::new());

    let end = game.run().unwrap();
    assert_eq!(end, MatchEnd::Finished(Outcome::Won(Player::X)));

    let output = String::from_utf8(game.into_output()).unwrap();
    assert!(output.contains("Human (O) plays a2"));
    assert!(output.ends_with("Advisor (X) wins!\n"));
}

#[test]
fn test_human_withdraws() {
    let human = scripted("Human", "b2\nq\n");
    let mut game = Match::new(human, Box::new(Advisor::new("Advisor")), Vec::new());

    let end = game.run().unwrap();
    assert_eq!(end, MatchEnd::Withdrew(Player::X));
    assert_eq!(game.board().occupied_count(), 2);

    let output = String::from_utf8(game.into_output()).unwrap();
    assert!(output.contains("Human withdrew."));
}
