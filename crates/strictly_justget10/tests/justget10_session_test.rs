//! Tests for full sessions: turns, terminal states, restart.

use rand::SeedableRng;
use rand::rngs::StdRng;

use strictly_justget10::{
    Coord, EngineError, GameConfig, GameSession, Grid, Status, TierDistribution, TurnOutcome,
};

fn fixture_config() -> GameConfig {
    GameConfig::new(3, 5, 9, TierDistribution::single(1)).expect("valid config")
}

fn fixture_session() -> GameSession {
    let grid = Grid::from_rows(&[[1, 1, 2], [3, 1, 0], [2, 2, 0]], 5).expect("valid fixture");
    GameSession::from_grid(fixture_config(), grid, StdRng::seed_from_u64(0)).expect("session")
}

/// Plays the first mergeable cell in row-major order, if any.
fn play_first_merge(session: &mut GameSession) -> Option<TurnOutcome> {
    let size = session.grid().size();
    let target = (0..size)
        .flat_map(|r| (0..size).map(move |c| Coord::new(r, c)))
        .find(|&at| strictly_justget10::rules::can_merge(session.grid(), at))?;
    Some(session.click(target).expect("legal click"))
}

#[test]
fn test_fixture_turn_end_to_end() {
    let mut session = fixture_session();
    let outcome = session.on_click(1, 1).expect("legal click");

    assert!(outcome.did_merge());
    assert_eq!(outcome.surviving(), Some(Coord::new(1, 1)));
    assert_eq!(*outcome.promoted_to(), Some(2));
    assert_eq!(
        session.current_state().rows(),
        vec![vec![1, 1, 1], vec![3, 2, 1], vec![2, 2, 2]]
    );
    assert_eq!(session.status(), Status::Ongoing);
    assert_eq!(session.turns(), 1);
}

#[test]
fn test_no_op_clicks_are_invisible() {
    let mut session = fixture_session();
    let before = session.current_state();

    // Empty cell.
    let outcome = session.on_click(1, 2).expect("in bounds");
    assert!(!outcome.did_merge());
    // Non-empty without an equal neighbor.
    let outcome = session.on_click(1, 0).expect("in bounds");
    assert!(!outcome.did_merge());

    assert_eq!(session.current_state(), before);
}

#[test]
fn test_out_of_bounds_click_fails() {
    let mut session = fixture_session();
    let before = session.current_state();
    assert!(matches!(
        session.on_click(3, 0),
        Err(EngineError::OutOfBounds { .. })
    ));
    assert_eq!(session.current_state(), before);
}

#[test]
fn test_win_then_reject_then_restart() {
    let config = GameConfig::new(2, 3, 4, TierDistribution::single(1)).expect("valid config");
    let grid = Grid::from_rows(&[[2, 2], [1, 1]], 3).expect("valid");
    let mut session =
        GameSession::from_grid(config, grid, StdRng::seed_from_u64(4)).expect("session");

    let outcome = session.on_click(0, 0).expect("legal click");
    assert_eq!(*outcome.status(), Status::Won);
    assert!(session.current_state().grid().contains(3));

    assert_eq!(
        session.on_click(1, 0),
        Err(EngineError::GameOver(Status::Won))
    );

    session.restart().expect("restart");
    assert_eq!(session.status(), Status::Ongoing);
    assert_eq!(session.turns(), 0);
    assert!(session.grid().is_full());
}

#[test]
fn test_seeded_games_are_reproducible() {
    let mut a = GameSession::seeded(GameConfig::default(), 2024).expect("session");
    let mut b = GameSession::seeded(GameConfig::default(), 2024).expect("session");
    for _ in 0..10 {
        let oa = play_first_merge(&mut a);
        let ob = play_first_merge(&mut b);
        assert_eq!(oa, ob);
        if oa.is_none() || a.status().is_terminal() {
            break;
        }
    }
    assert_eq!(a.current_state(), b.current_state());
}

#[test]
fn test_long_games_keep_properties() {
    for seed in 0..25 {
        let mut session = GameSession::seeded(GameConfig::default(), seed).expect("session");
        for _ in 0..200 {
            if session.status().is_terminal() {
                break;
            }
            let Some(outcome) = play_first_merge(&mut session) else {
                break;
            };
            let state = session.current_state();
            assert!(state.grid().is_full(), "seed {} left holes", seed);
            assert!(state.grid().cells().iter().all(|&t| (1..=10).contains(&t)));
            assert_eq!(outcome.status(), state.status());
            match state.status() {
                Status::Won => assert!(state.grid().contains(10)),
                Status::Lost => {
                    assert!(!strictly_justget10::rules::has_any_merge(state.grid()))
                }
                Status::Ongoing => {}
            }
        }
    }
}

#[test]
fn test_invalid_configuration_rejected() {
    let config = GameConfig::default().with_tier_distribution(TierDistribution::new([]));
    assert!(matches!(
        GameSession::seeded(config, 1),
        Err(EngineError::InvalidConfiguration(_))
    ));
}
