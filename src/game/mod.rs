//! Core Connect Four rules: grid, players and registry, win detection, and
//! the turn/outcome state machine.

mod board;
mod player;
mod state;
pub mod win;

pub use board::{Cell, Grid};
pub use player::{Player, PlayerId, PlayerRegistry};
pub use state::{GameOutcome, GameState, Placement};
pub use win::{has_win, has_win_through};
