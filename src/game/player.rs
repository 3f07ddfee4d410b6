use std::fmt;

use serde::{Deserialize, Serialize};

use crate::error::RegistryError;

/// Opaque identifier of a player, e.g. `1` or `2`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct PlayerId(pub u32);

impl fmt::Display for PlayerId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<u32> for PlayerId {
    fn from(id: u32) -> Self {
        PlayerId(id)
    }
}

/// A player identity together with its display color.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Player {
    pub id: PlayerId,
    pub color: String,
}

impl Player {
    pub fn new(id: impl Into<PlayerId>, color: impl Into<String>) -> Self {
        Player {
            id: id.into(),
            color: color.into(),
        }
    }
}

/// Holds the (at most two) players a game can be started with.
///
/// Registration order matters: the first registered player moves first.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PlayerRegistry {
    players: Vec<Player>,
}

impl PlayerRegistry {
    pub const MAX_PLAYERS: usize = 2;

    pub fn new() -> Self {
        Self::default()
    }

    /// Register a player. Fails once two players are held, or if the id is
    /// already taken; the registry is left unchanged on failure.
    pub fn register(&mut self, player: Player) -> Result<&Player, RegistryError> {
        if self.players.len() >= Self::MAX_PLAYERS {
            tracing::warn!(player = %player.id, "registry full, rejecting player");
            return Err(RegistryError::TooManyPlayers {
                max: Self::MAX_PLAYERS,
            });
        }
        if self.get(player.id).is_some() {
            tracing::warn!(player = %player.id, "duplicate player id, rejecting player");
            return Err(RegistryError::DuplicatePlayer(player.id));
        }

        tracing::debug!(player = %player.id, color = %player.color, "registered player");
        self.players.push(player);
        Ok(&self.players[self.players.len() - 1])
    }

    /// Registered players in registration order.
    pub fn players(&self) -> &[Player] {
        &self.players
    }

    pub fn get(&self, id: PlayerId) -> Option<&Player> {
        self.players.iter().find(|p| p.id == id)
    }

    pub fn len(&self) -> usize {
        self.players.len()
    }

    pub fn is_empty(&self) -> bool {
        self.players.is_empty()
    }

    /// Forget every registered player.
    pub fn clear(&mut self) {
        self.players.clear();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_register_two_players() {
        let mut registry = PlayerRegistry::new();
        registry.register(Player::new(1, "red")).unwrap();
        registry.register(Player::new(2, "yellow")).unwrap();

        assert_eq!(registry.len(), PlayerRegistry::MAX_PLAYERS);
        assert_eq!(registry.players()[0].id, PlayerId(1));
        assert_eq!(registry.get(PlayerId(2)).unwrap().color, "yellow");
    }

    #[test]
    fn test_third_player_rejected() {
        let mut registry = PlayerRegistry::new();
        registry.register(Player::new(1, "red")).unwrap();
        registry.register(Player::new(2, "yellow")).unwrap();

        let err = registry.register(Player::new(3, "green")).unwrap_err();
        assert_eq!(err, RegistryError::TooManyPlayers { max: 2 });
        assert_eq!(registry.len(), 2);
        assert!(registry.get(PlayerId(3)).is_none());
    }

    #[test]
    fn test_duplicate_id_rejected() {
        let mut registry = PlayerRegistry::new();
        registry.register(Player::new(1, "red")).unwrap();

        let err = registry.register(Player::new(1, "blue")).unwrap_err();
        assert_eq!(err, RegistryError::DuplicatePlayer(PlayerId(1)));
        assert_eq!(registry.len(), 1);
    }

    #[test]
    fn test_clear() {
        let mut registry = PlayerRegistry::new();
        registry.register(Player::new(1, "red")).unwrap();
        registry.clear();
        assert!(registry.is_empty());
    }

    #[test]
    fn test_player_id_display() {
        assert_eq!(PlayerId(7).to_string(), "7");
    }
}
