//! Line-oriented harness over the engine: one player registry and at most one
//! game at a time.
//!
//! Each input line is parsed as a command (`new-game`, `drop`, `show`, ...)
//! and executed against the session. Errors are returned to the caller, which
//! prints them and keeps reading; none of them end the session.

use clap::{Parser, Subcommand};

use crate::config::GameConfig;
use crate::error::{MoveError, SessionError};
use crate::game::{GameState, Player, PlayerId, PlayerRegistry};

/// A single harness command.
#[derive(Debug, Parser)]
#[command(multicall = true)]
pub struct CommandLine {
    #[command(subcommand)]
    pub command: Command,
}

#[derive(Debug, Clone, PartialEq, Eq, Subcommand)]
pub enum Command {
    /// Start a new game with the registered players
    NewGame {
        /// Grid width (columns); defaults to the configured width
        width: Option<usize>,
        /// Grid height (rows); defaults to the configured height
        height: Option<usize>,
    },
    /// Drop the current player's piece into a column (0-based)
    Drop {
        #[arg(allow_negative_numbers = true)]
        column: i64,
    },
    /// Print the grid
    Show,
    /// Register a player
    Player { id: u32, color: String },
    /// List registered players
    Players,
    /// Print whose turn it is, or how the game ended
    Status,
    /// Leave the session
    #[command(alias = "exit")]
    Quit,
}

impl Command {
    /// Parse one input line. Returns `Ok(None)` for a blank line.
    pub fn parse_line(line: &str) -> Result<Option<Command>, clap::Error> {
        let words: Vec<&str> = line.split_whitespace().collect();
        if words.is_empty() {
            return Ok(None);
        }
        CommandLine::try_parse_from(words).map(|cli| Some(cli.command))
    }
}

/// What the caller should do after a command ran.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Reply {
    Message(String),
    Quit,
}

pub struct Session {
    defaults: GameConfig,
    registry: PlayerRegistry,
    game: Option<GameState>,
}

impl Session {
    pub fn new(defaults: GameConfig, registry: PlayerRegistry) -> Self {
        Session {
            defaults,
            registry,
            game: None,
        }
    }

    pub fn registry(&self) -> &PlayerRegistry {
        &self.registry
    }

    pub fn game(&self) -> Option<&GameState> {
        self.game.as_ref()
    }

    pub fn execute(&mut self, command: Command) -> Result<Reply, SessionError> {
        let message = match command {
            Command::NewGame { width, height } => self.new_game(width, height)?,
            Command::Drop { column } => self.drop(column)?,
            Command::Show => self.game.as_ref().ok_or(SessionError::NoGame)?.grid().to_string(),
            Command::Player { id, color } => {
                let player = self.registry.register(Player::new(id, color))?;
                format!("Registered player {} ({})", player.id, player.color)
            }
            Command::Players => self.list_players(),
            Command::Status => self.status()?,
            Command::Quit => return Ok(Reply::Quit),
        };
        Ok(Reply::Message(message))
    }

    fn new_game(&mut self, width: Option<usize>, height: Option<usize>) -> Result<String, SessionError> {
        let width = width.unwrap_or(self.defaults.width);
        let height = height.unwrap_or(self.defaults.height);

        // the previous game is only replaced once the new one is valid
        let game = GameState::from_registry(width, height, &self.registry)?;
        let first = game.current_player();
        let message = format!(
            "New {width}x{height} game, player {} ({}) to move",
            first.id, first.color
        );
        self.game = Some(game);
        Ok(message)
    }

    fn drop(&mut self, column: i64) -> Result<String, SessionError> {
        let game = self.game.as_mut().ok_or(SessionError::NoGame)?;
        let column = usize::try_from(column).map_err(|_| MoveError::InvalidColumn {
            column,
            width: game.width(),
        })?;

        let placement = game.drop(column)?;
        let color = color_of(game, placement.mover);
        let mut message = format!(
            "Player {} ({color}) dropped into column {}, row {}",
            placement.mover, placement.column, placement.row
        );
        if let Some(announcement) = placement.outcome.announcement() {
            message.push('\n');
            message.push_str(&announcement);
        }
        Ok(message)
    }

    fn list_players(&self) -> String {
        if self.registry.is_empty() {
            return "No players registered".to_string();
        }
        self.registry
            .players()
            .iter()
            .map(|p| format!("Player {} ({})", p.id, p.color))
            .collect::<Vec<_>>()
            .join("\n")
    }

    fn status(&self) -> Result<String, SessionError> {
        let game = self.game.as_ref().ok_or(SessionError::NoGame)?;
        Ok(match game.outcome().announcement() {
            Some(announcement) => format!("Game over: {announcement}"),
            None => {
                let current = game.current_player();
                format!(
                    "{}x{} game, player {} ({}) to move, open columns: {:?}",
                    game.width(),
                    game.height(),
                    current.id,
                    current.color,
                    game.legal_columns()
                )
            }
        })
    }
}

fn color_of(game: &GameState, id: PlayerId) -> &str {
    game.player(id).map(|p| p.color.as_str()).unwrap_or("?")
}
