//! Tests for the minimax advisor.

use ttt_engine::{Board, Evaluation, Outcome, Player, Position, analyze, suggest};

fn play(tokens: &[&str]) -> Board {
    let mut board = Board::new();
    for token in tokens {
        let position = board.parse_position(token).expect("legal token");
        board.apply_move(position);
    }
    board
}

/// Plays every opponent reply against the advisor and checks it never loses.
fn assert_advisor_never_loses(board: Board, advisor: Player) {
    let outcome = board.outcome();
    if outcome.is_decided() {
        assert_ne!(
            outcome,
            Outcome::Won(advisor.opponent()),
            "advisor lost:\n{board}"
        );
        return;
    }

    if board.to_move() == advisor {
        let position = suggest(&board).expect("undecided board has a move");
        assert!(board.is_empty(position));
        let mut child = board;
        child.apply_move(position);
        assert_advisor_never_loses(child, advisor);
    } else {
        for position in board.blanks() {
            let mut child = board;
            child.apply_move(position);
            assert_advisor_never_loses(child, advisor);
        }
    }
}

#[test]
fn test_self_play_is_draw() {
    let mut board = Board::new();
    while let Some(position) = suggest(&board) {
        assert!(board.is_empty(position));
        board.apply_move(position);
    }
    assert_eq!(board.occupied_count(), 9);
    assert_eq!(board.outcome(), Outcome::Draw);
}

#[test]
fn test_empty_board_is_a_draw_for_x() {
    let suggestion = analyze(&Board::new()).unwrap();
    assert_eq!(suggestion.player, Player::X);
    assert_eq!(suggestion.evaluation, Evaluation::Draw);
    // Every opening draws, so the first cell is kept.
    assert_eq!(suggestion.position, Position::new(0, 0).unwrap());
}

#[test]
fn test_advisor_never_loses_as_x() {
    assert_advisor_never_loses(Board::new(), Player::X);
}

#[test]
fn test_advisor_never_loses_as_o() {
    assert_advisor_never_loses(Board::new(), Player::O);
}

#[test]
fn test_corner_opening_needs_center_reply() {
    // Against a corner opening only the center holds the draw for O.
    let board = play(&["a1"]);
    let suggestion = analyze(&board).unwrap();
    assert_eq!(suggestion.player, Player::O);
    assert_eq!(suggestion.position, Position::new(1, 1).unwrap());
    assert_eq!(suggestion.evaluation, Evaluation::Draw);
}

#[test]
fn test_prefers_earliest_forced_win() {
    // X: a1 a2, O: b1 c1. X wins at a3 immediately.
    let board = play(&["a1", "b1", "a2", "c1"]);
    let suggestion = analyze(&board).unwrap();
    assert_eq!(suggestion.evaluation, Evaluation::Win);
    assert_eq!(suggestion.position, Position::new(0, 2).unwrap());
}

#[test]
fn test_suggestion_serializes() {
    let board = play(&["a1", "b1", "a2", "c1"]);
    let suggestion = analyze(&board).unwrap();
    let json = serde_json::to_value(suggestion).unwrap();
    assert_eq!(
        json,
        serde_json::json!({ "player": "X", "position": "a3", "evaluation": "Win" })
    );
}
