use connect_four::error::{ConfigurationError, MoveError};
use connect_four::game::{has_win, Cell, GameOutcome, GameState, Player, PlayerId, PlayerRegistry};
use proptest::prelude::*;

const P1: PlayerId = PlayerId(1);
const P2: PlayerId = PlayerId(2);

fn players() -> [Player; 2] {
    [Player::new(1, "red"), Player::new(2, "yellow")]
}

#[test]
fn vertical_four_wins_on_fourth_drop() {
    let mut game = GameState::new(7, 6, &players()).unwrap();
    let moves = [0, 1, 0, 1, 0, 1];
    for col in moves {
        let placement = game.drop(col).unwrap();
        assert_eq!(placement.outcome, GameOutcome::InProgress);
    }

    let placement = game.drop(0).unwrap();
    assert_eq!(placement.mover, P1);
    assert_eq!(placement.outcome, GameOutcome::Won(P1));
    assert_eq!(game.outcome(), GameOutcome::Won(P1));
}

#[test]
fn one_registered_player_is_not_enough() {
    let mut registry = PlayerRegistry::new();
    registry.register(Player::new(1, "red")).unwrap();

    let result = GameState::from_registry(7, 6, &registry);
    assert_eq!(result, Err(ConfigurationError::WrongPlayerCount(1)));
}

#[test]
fn out_of_range_columns_rejected_for_any_size() {
    for (width, height) in [(1, 1), (4, 4), (7, 6), (12, 3)] {
        let mut game = GameState::new(width, height, &players()).unwrap();
        for column in [width, width + 1, usize::MAX] {
            assert!(matches!(
                game.drop(column),
                Err(MoveError::InvalidColumn { .. })
            ));
        }
        assert_eq!(game.moves_played(), 0);
    }
}

#[test]
fn single_cell_grid_is_drawn_immediately() {
    let mut game = GameState::new(1, 1, &players()).unwrap();
    let placement = game.drop(0).unwrap();
    assert_eq!((placement.row, placement.column), (0, 0));
    assert_eq!(placement.outcome, GameOutcome::Draw);
}

#[test]
fn diagonal_win_detected_immediately() {
    // player 1 completes (2,0) (3,1) (4,2) (5,3) with the last drop
    let mut game = GameState::new(7, 6, &players()).unwrap();
    let moves = [3, 2, 2, 1, 1, 0, 1, 0, 0, 6];
    for col in moves {
        assert_eq!(game.drop(col).unwrap().outcome, GameOutcome::InProgress);
    }
    let placement = game.drop(0).unwrap();
    assert_eq!((placement.row, placement.column), (2, 0));
    assert_eq!(placement.outcome, GameOutcome::Won(P1));
}

proptest! {
    /// Random legal games: pieces obey gravity, turns alternate until the
    /// game ends, wins are reported on the drop that makes them, and a draw
    /// happens exactly when the last cell fills.
    #[test]
    fn prop_random_games_follow_the_rules(
        width in 1usize..9,
        height in 1usize..8,
        picks in proptest::collection::vec(any::<usize>(), 0..80),
    ) {
        let mut game = GameState::new(width, height, &players()).unwrap();
        for pick in picks {
            let open = game.legal_columns();
            if open.is_empty() {
                break;
            }
            let column = open[pick % open.len()];
            let mover = game.current_player().id;
            let expected_row = game.grid().lowest_empty_row(column).unwrap();

            let placement = game.drop(column).unwrap();
            prop_assert_eq!(placement.row, expected_row);
            prop_assert_eq!(placement.mover, mover);
            prop_assert_eq!(game.grid().get(placement.row, column), Cell::Occupied(mover));

            let won = has_win(game.grid(), mover);
            let full = game.grid().occupied() == width * height;
            match placement.outcome {
                GameOutcome::Won(winner) => {
                    prop_assert!(won);
                    prop_assert_eq!(winner, mover);
                    prop_assert_eq!(game.current_player().id, mover);
                }
                GameOutcome::Draw => {
                    prop_assert!(!won);
                    prop_assert!(full);
                }
                GameOutcome::InProgress => {
                    prop_assert!(!won);
                    prop_assert!(!full);
                    prop_assert_ne!(game.current_player().id, mover);
                }
            }
        }

        // Gravity: no occupied cell sits above an empty one.
        for col in 0..width {
            for row in 1..height {
                if !game.grid().get(row - 1, col).is_empty() {
                    prop_assert!(!game.grid().get(row, col).is_empty());
                }
            }
        }
    }

    /// A full column never accepts another piece and the game is unchanged.
    #[test]
    fn prop_full_column_is_rejected(width in 1usize..8, height in 1usize..7, col_pick in any::<usize>()) {
        let column = col_pick % width;
        let mut game = GameState::new(width, height, &players()).unwrap();
        for _ in 0..height {
            if game.is_terminal() {
                break;
            }
            game.drop(column).unwrap();
        }
        prop_assume!(!game.is_terminal());

        let before = game.clone();
        prop_assert_eq!(game.drop(column), Err(MoveError::ColumnFull(column)));
        prop_assert_eq!(game, before);
    }
}

#[test]
fn rows_fill_from_the_bottom() {
    let mut game = GameState::new(7, 6, &players()).unwrap();
    let rows: Vec<usize> = (0..6).map(|_| game.drop(4).unwrap().row).collect();
    assert_eq!(rows, vec![5, 4, 3, 2, 1, 0]);
    assert_eq!(game.drop(4), Err(MoveError::ColumnFull(4)));
    assert_eq!(game.grid().get(0, 4), Cell::Occupied(P2));
}
