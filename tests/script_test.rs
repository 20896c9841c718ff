//! Tests for headless scripted games.

use strictly_xo::script::{Snapshot, parse_move, play, render_text};
use strictly_xo::{GameResult, Locale, Mode, Player, Rejection};

#[test]
fn test_scripted_draw_in_english() {
    let moves = ["0,0", "0,1", "0,2", "1,1", "1,0", "2,0", "2,1", "1,2", "2,2"]
        .iter()
        .map(|m| parse_move(m).expect("valid move"))
        .collect::<Vec<_>>();

    let (engine, outcomes) = play(Mode::ThreeByThree, &moves);
    assert!(outcomes.iter().all(|o| o.is_accepted()));
    assert_eq!(engine.result(), GameResult::Draw);

    let text = render_text(&engine, Locale::En);
    assert!(text.contains("X|O|X\n-+-+-\nX|O|O\n-+-+-\nO|X|X"));
    assert!(text.contains("It's a Draw! 🤝"));
    assert!(text.contains("Draws: 1"));
}

#[test]
fn test_scripted_out_of_range_moves() {
    for mode in [Mode::ThreeByThree, Mode::FourByFour, Mode::FiveByFive] {
        let n = mode.size() as isize;
        let (engine, outcomes) = play(mode, &[(-1, 0), (n, 0)]);
        assert!(outcomes.iter().all(|o| !o.is_accepted()));
        assert!(engine.history().is_empty());
        assert_eq!(engine.to_move(), Player::X);
    }
}

#[test]
fn test_moves_after_win_reported() {
    let (_, outcomes) = play(
        Mode::FourByFour,
        &[(0, 3), (0, 0), (1, 2), (1, 0), (2, 1), (2, 0), (3, 0), (3, 3)],
    );
    assert_eq!(outcomes[6].result(), Some(GameResult::Won(Player::X)));
    assert_eq!(outcomes[7].rejection(), Some(Rejection::GameOver));
}

#[test]
fn test_snapshot_json_shape() {
    let (engine, _) = play(Mode::ThreeByThree, &[(0, 0), (1, 1)]);
    let json = serde_json::to_value(Snapshot::from(&engine)).expect("serializable");

    assert_eq!(json["mode"], "3x3");
    assert_eq!(json["to_move"], "X");
    assert_eq!(json["result"], "InProgress");
    assert_eq!(json["board"][0][0], serde_json::json!({ "Marked": "X" }));
    assert_eq!(json["board"][2][2], "Empty");
    assert_eq!(json["scores"]["wins_x"], 0);
    assert_eq!(json["history"].as_array().map(Vec::len), Some(2));
}
