//! Turn controller scenario tests.
//!
//! These drive full games through the public call surface
//! (select → rotate → confirm → inspect → reset) and check the board,
//! the active player and the status after each step.

use pentago_engine::core::{
    Board, Cell, Coord, EngineConfig, GameStatus, Move, MoveError, Outcome, Player, RotationPolicy,
};
use pentago_engine::game::{MoveOutcome, Phase, TurnController};

fn at(row: usize, col: usize) -> Coord {
    Coord::new(row, col).unwrap()
}

/// Route engine logs through the test harness. Set `RUST_LOG=debug` to see
/// staged selections and rejections for a failing scenario.
fn init_tracing() {
    let _ = tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("warn")),
        )
        .with_test_writer()
        .try_init();
}

/// Test the first move on an empty board.
#[test]
fn test_place_center_without_rotation() {
    init_tracing();
    let mut game = TurnController::default();

    game.select_cell(2, 2).unwrap();
    game.set_rotation(0).unwrap();
    let outcome = game.confirm_move().unwrap();

    let view = game.inspect();
    assert_eq!(view.board.get(2, 2).unwrap(), Cell::PlayerOne);
    assert_eq!(view.status, GameStatus::InProgress);
    assert_eq!(view.active_player, Player::PlayerTwo);
    assert_eq!(
        outcome,
        MoveOutcome::Continued {
            board: view.board,
            active_player: Player::PlayerTwo,
        }
    );
}

/// Test that confirming without a selection is rejected and changes nothing.
#[test]
fn test_confirm_without_selection() {
    init_tracing();
    let mut game = TurnController::default();
    game.set_rotation(4).unwrap();

    assert_eq!(game.confirm_move(), Err(MoveError::NoSelection));
    assert!(game.inspect().board.is_empty());
    assert_eq!(game.inspect().active_player, Player::PlayerOne);
    assert_eq!(game.state().move_count(), 0);
}

/// Test that confirming onto an occupied cell is rejected.
#[test]
fn test_confirm_on_occupied_cell() {
    init_tracing();
    let mut game = TurnController::default();
    game.play(Move::place(at(1, 1))).unwrap();

    let before = game.inspect();
    game.select_cell(1, 1).unwrap();
    assert_eq!(game.confirm_move(), Err(MoveError::CellOccupied { row: 1, col: 1 }));
    assert_eq!(game.inspect(), before);
    assert_eq!(game.phase(), Phase::SelectionStaged);
}

/// Test a row-0 win built over alternating turns with no rotations.
#[test]
fn test_row_win_over_alternating_turns() {
    init_tracing();
    let mut game = TurnController::default();
    let mut last = None;

    for col in 0..5 {
        game.select_cell(0, col).unwrap();
        game.set_rotation(0).unwrap();
        last = Some(game.confirm_move().unwrap());

        if col < 4 {
            // Player two plays on the bottom row, never completing five.
            game.select_cell(5, col).unwrap();
            game.set_rotation(0).unwrap();
            let reply = game.confirm_move().unwrap();
            assert!(!reply.is_finished());
        }
    }

    match last.unwrap() {
        MoveOutcome::Finished { board, outcome } => {
            assert_eq!(outcome, Outcome::Win(Player::PlayerOne));
            for col in 0..5 {
                assert_eq!(board.get(0, col).unwrap(), Cell::PlayerOne);
            }
        }
        other => panic!("expected a finished game, got {other:?}"),
    }
    assert_eq!(game.inspect().status, GameStatus::Win(Player::PlayerOne));
    assert_eq!(game.phase(), Phase::Terminal);
    assert_eq!(game.state().move_count(), 9);
}

/// Test that a rotation can complete the mover's line.
#[test]
fn test_rotation_completes_line() {
    init_tracing();
    let mut game = TurnController::default();

    // Top-right clockwise maps local (i, 0) to (0, 2 - i): once X holds
    // (1,3) and (2,3), the twist swings them up to (0,4) and (0,3).
    let script = [
        (Player::PlayerOne, at(0, 0)),
        (Player::PlayerTwo, at(5, 0)),
        (Player::PlayerOne, at(0, 1)),
        (Player::PlayerTwo, at(5, 1)),
        (Player::PlayerOne, at(0, 2)),
        (Player::PlayerTwo, at(5, 2)),
        (Player::PlayerOne, at(1, 3)),
        (Player::PlayerTwo, at(4, 0)),
    ];
    for (player, coord) in script {
        assert_eq!(game.inspect().active_player, player);
        game.play(Move::place(coord)).unwrap();
    }

    game.select_cell(2, 3).unwrap();
    game.set_rotation(2).unwrap();
    let outcome = game.confirm_move().unwrap();

    assert_eq!(
        outcome,
        MoveOutcome::Finished {
            board: game.inspect().board,
            outcome: Outcome::Win(Player::PlayerOne),
        }
    );
    let expected: Board = "XXXXX.
                           ......
                           ......
                           ......
                           O.....
                           OOO..."
        .parse()
        .unwrap();
    assert_eq!(game.inspect().board, expected);
}

/// Test that a twist completing only the opponent's line is not a win for
/// anyone: only the mover is checked.
#[test]
fn test_opponent_line_completed_by_rotation_is_ignored() {
    init_tracing();
    let mut game = TurnController::default();
    let o_cells = [at(0, 0), at(0, 1), at(0, 2), at(1, 3), at(2, 3)];
    let x_cells = [at(5, 0), at(5, 2), at(5, 4), at(4, 1), at(3, 5)];
    for (x, o) in x_cells.iter().zip(o_cells.iter()) {
        game.play(Move::place(*x)).unwrap();
        game.play(Move::place(*o)).unwrap();
    }
    for coord in o_cells {
        assert_eq!(game.inspect().board.cell(coord), Cell::PlayerTwo);
    }

    // Player one plays elsewhere and twists top-right clockwise, which lines
    // up five O's on row 0.
    game.select_cell(4, 4).unwrap();
    game.set_rotation(2).unwrap();
    let outcome = game.confirm_move().unwrap();

    let board = *outcome.board();
    for col in 0..5 {
        assert_eq!(board.get(0, col).unwrap(), Cell::PlayerTwo);
    }
    assert!(!outcome.is_finished());
    assert_eq!(game.inspect().status, GameStatus::InProgress);
    assert_eq!(game.inspect().active_player, Player::PlayerTwo);
}

/// Test that a full board with no line ends in a draw on the last move.
#[test]
fn test_draw_on_last_cell() {
    init_tracing();
    // Rows alternate XXXOOO / OOOXXX, which holds no line of five. Each side
    // owns 18 cells, so with X first, O places the last piece.
    let target: Board = "XXXOOO
                         OOOXXX
                         XXXOOO
                         OOOXXX
                         XXXOOO
                         OOOXXX"
        .parse()
        .unwrap();
    let xs: Vec<Coord> = Coord::all().filter(|&c| target.cell(c) == Cell::PlayerOne).collect();
    let os: Vec<Coord> = Coord::all().filter(|&c| target.cell(c) == Cell::PlayerTwo).collect();

    let mut game = TurnController::default();
    let mut last = None;
    for (x, o) in xs.iter().zip(os.iter()) {
        assert!(!game.play(Move::place(*x)).unwrap().is_finished());
        last = Some(game.play(Move::place(*o)).unwrap());
    }

    assert_eq!(
        last.unwrap(),
        MoveOutcome::Finished {
            board: target,
            outcome: Outcome::Draw,
        }
    );
    assert_eq!(game.inspect().status, GameStatus::Draw);
    assert_eq!(game.select_cell(0, 0), Err(MoveError::GameAlreadyOver));
}

/// Test that reset restores a fresh game from any phase.
#[test]
fn test_reset_from_every_phase() {
    init_tracing();
    let mut game = TurnController::default();

    game.reset();
    assert_eq!(game.phase(), Phase::AwaitingSelection);

    game.select_cell(3, 3).unwrap();
    game.set_rotation(6).unwrap();
    game.reset();
    assert_eq!(game.phase(), Phase::AwaitingSelection);
    assert_eq!(game.selection(), None);
    assert_eq!(game.pending_rotation().code(), 0);

    for col in 0..5 {
        game.play(Move::place(at(2, col))).unwrap();
        if col < 4 {
            game.play(Move::place(at(3, col))).unwrap();
        }
    }
    assert_eq!(game.phase(), Phase::Terminal);
    game.reset();

    let view = game.inspect();
    assert!(view.board.is_empty());
    assert_eq!(view.active_player, Player::PlayerOne);
    assert_eq!(view.status, GameStatus::InProgress);
    assert_eq!(game.state().turn_number, 1);
}

/// Test both rotation policies end to end.
#[test]
fn test_rotation_policies() {
    init_tracing();
    let mut lenient = TurnController::default();
    lenient.select_cell(0, 0).unwrap();
    lenient.set_rotation(9).unwrap();
    lenient.confirm_move().unwrap();
    assert_eq!(lenient.inspect().board.get(0, 0).unwrap(), Cell::PlayerOne);

    let mut strict =
        TurnController::new(EngineConfig::default().with_rotation_policy(RotationPolicy::Reject));
    strict.select_cell(0, 0).unwrap();
    assert_eq!(strict.set_rotation(9), Err(MoveError::InvalidRotation(9)));
    strict.confirm_move().unwrap();
    assert_eq!(strict.inspect().board.get(0, 0).unwrap(), Cell::PlayerOne);
}

/// Test that history records each committed move in order.
#[test]
fn test_history_records_moves() {
    init_tracing();
    let mut game = TurnController::default();
    game.select_cell(0, 0).unwrap();
    game.set_rotation(1).unwrap();
    game.confirm_move().unwrap();
    game.select_cell(3, 3).unwrap();
    game.confirm_move().unwrap();

    let history: Vec<_> = game.state().history.iter().copied().collect();
    assert_eq!(history.len(), 2);
    assert_eq!(history[0].player, Player::PlayerOne);
    assert_eq!(history[0].mv.at, at(0, 0));
    assert_eq!(history[0].mv.rotation.code(), 1);
    assert_eq!(history[0].turn, 1);
    assert_eq!(history[1].player, Player::PlayerTwo);
    assert_eq!(history[1].turn, 2);
}
