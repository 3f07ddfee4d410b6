use std::fmt;

use crate::error::{ConfigurationError, MoveError};

use super::win::has_win_through;
use super::{Grid, Player, PlayerId, PlayerRegistry};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum GameOutcome {
    InProgress,
    Won(PlayerId),
    Draw,
}

impl GameOutcome {
    pub fn is_terminal(self) -> bool {
        self != GameOutcome::InProgress
    }

    /// End-of-game message for the presentation layer, `None` while playing.
    pub fn announcement(self) -> Option<String> {
        match self {
            GameOutcome::InProgress => None,
            GameOutcome::Won(id) => Some(format!("Player {id} won!")),
            GameOutcome::Draw => Some("Tie!".to_string()),
        }
    }
}

impl fmt::Display for GameOutcome {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            GameOutcome::InProgress => write!(f, "in progress"),
            GameOutcome::Won(id) => write!(f, "won by player {id}"),
            GameOutcome::Draw => write!(f, "draw"),
        }
    }
}

/// Result of a successful drop: where the piece landed, who placed it, and
/// the outcome after placing it.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Placement {
    pub row: usize,
    pub column: usize,
    pub mover: PlayerId,
    pub outcome: GameOutcome,
}

/// Grid, turn cursor and outcome of one game.
#[derive(Debug, Clone, PartialEq)]
pub struct GameState {
    grid: Grid,
    players: [Player; 2],
    current: usize,
    outcome: GameOutcome,
    moves_played: usize,
}

impl GameState {
    /// Start a game. The first player in `players` moves first.
    pub fn new(width: usize, height: usize, players: &[Player]) -> Result<Self, ConfigurationError> {
        let players: [Player; 2] = match players {
            [first, second] => [first.clone(), second.clone()],
            _ => return Err(ConfigurationError::WrongPlayerCount(players.len())),
        };
        if players[0].id == players[1].id {
            return Err(ConfigurationError::DuplicatePlayer(players[0].id));
        }
        let grid = Grid::new(width, height)?;

        tracing::info!(
            width,
            height,
            first = %players[0].id,
            second = %players[1].id,
            "new game"
        );

        Ok(GameState {
            grid,
            players,
            current: 0,
            outcome: GameOutcome::InProgress,
            moves_played: 0,
        })
    }

    /// Start a game with the players held by `registry`, in registration order.
    pub fn from_registry(
        width: usize,
        height: usize,
        registry: &PlayerRegistry,
    ) -> Result<Self, ConfigurationError> {
        Self::new(width, height, registry.players())
    }

    pub fn grid(&self) -> &Grid {
        &self.grid
    }

    pub fn width(&self) -> usize {
        self.grid.width()
    }

    pub fn height(&self) -> usize {
        self.grid.height()
    }

    pub fn players(&self) -> &[Player; 2] {
        &self.players
    }

    pub fn player(&self, id: PlayerId) -> Option<&Player> {
        self.players.iter().find(|p| p.id == id)
    }

    /// Player whose turn it is. After a win this is still the winner.
    pub fn current_player(&self) -> &Player {
        &self.players[self.current]
    }

    pub fn outcome(&self) -> GameOutcome {
        self.outcome
    }

    pub fn is_terminal(&self) -> bool {
        self.outcome.is_terminal()
    }

    pub fn moves_played(&self) -> usize {
        self.moves_played
    }

    /// Columns that accept a piece; empty once the game is over.
    pub fn legal_columns(&self) -> Vec<usize> {
        if self.is_terminal() {
            return Vec::new();
        }
        self.grid.open_columns()
    }

    /// Drop the current player's piece into `column`.
    ///
    /// All checks happen before the grid is touched, so an error leaves the
    /// game exactly as it was.
    pub fn drop(&mut self, column: usize) -> Result<Placement, MoveError> {
        if column >= self.grid.width() {
            return Err(MoveError::InvalidColumn {
                column: i64::try_from(column).unwrap_or(i64::MAX),
                width: self.grid.width(),
            });
        }
        if self.is_terminal() {
            return Err(MoveError::GameOver);
        }

        let mover = self.current_player().id;
        let row = self.grid.drop_piece(column, mover)?;
        self.moves_played += 1;
        tracing::debug!(column, row, mover = %mover, "piece dropped");

        self.outcome = if has_win_through(&self.grid, row, column) {
            GameOutcome::Won(mover)
        } else if self.grid.is_full() {
            GameOutcome::Draw
        } else {
            self.current = 1 - self.current;
            GameOutcome::InProgress
        };

        if let Some(message) = self.outcome.announcement() {
            tracing::info!(moves = self.moves_played, "{message}");
        }

        Ok(Placement {
            row,
            column,
            mover,
            outcome: self.outcome,
        })
    }
}
