//! Tests for the terminal loop driven by scripted input.

use rand::SeedableRng;
use rand::rngs::StdRng;
use std::io::Cursor;

use strictly_justget10::{GameConfig, GameSession, Grid, TierDistribution};
use strictly_justget10_cli::{RunSummary, Terminal};

fn session(rows: &[[u8; 3]], winning_tier: u8) -> GameSession {
    let config = GameConfig::new(3, winning_tier, 9, TierDistribution::single(1))
        .expect("valid config");
    let grid = Grid::from_rows(rows, winning_tier).expect("valid grid");
    GameSession::from_grid(config, grid, StdRng::seed_from_u64(0)).expect("session")
}

fn play(session: &mut GameSession, script: &str) -> (RunSummary, String) {
    let mut terminal = Terminal::new(Cursor::new(script.to_string()), Vec::new());
    let summary = terminal.run(session).expect("run");
    let output = String::from_utf8(terminal.into_output()).expect("utf8");
    (summary, output)
}

#[test]
fn test_scripted_turns() {
    let mut game = session(&[[1, 1, 2], [3, 1, 0], [2, 2, 0]], 5);
    let (summary, output) = play(&mut game, "1 0\n9 9\nhello\n1 1\nq\n");

    assert!(output.contains("Nothing to merge there."));
    assert!(output.contains("outside a 3x3 grid"));
    assert!(output.contains("Unrecognised input."));
    assert_eq!(summary.turns, 1);
    assert_eq!(summary.wins, 0);
    assert_eq!(
        game.current_state().rows(),
        vec![vec![1, 1, 1], vec![3, 2, 1], vec![2, 2, 2]]
    );
}

#[test]
fn test_win_prompts_for_replay() {
    let mut game = session(&[[3, 3, 1], [2, 1, 2], [1, 2, 1]], 4);
    let (summary, output) = play(&mut game, "0 0\nn\n");

    assert!(output.contains("You won!"));
    assert!(output.contains("Play again? [y/n]"));
    assert_eq!(summary.wins, 1);
    assert_eq!(summary.turns, 1);
}

#[test]
fn test_replay_restarts_session() {
    let mut game = session(&[[3, 3, 1], [2, 1, 2], [1, 2, 1]], 4);
    let (summary, _) = play(&mut game, "0 0\ny\n");

    assert_eq!(summary.wins, 1);
    assert_eq!(game.turns(), 0);
    assert!(!game.status().is_terminal());
}

#[test]
fn test_end_of_input_stops_loop() {
    let mut game = session(&[[1, 1, 2], [3, 1, 0], [2, 2, 0]], 5);
    let (summary, output) = play(&mut game, "");
    assert_eq!(summary, RunSummary::default());
    assert!(output.starts_with("Enter `row col`"));
}
