use std::collections::HashSet;
use std::path::Path;

use crate::error::ConfigError;
use crate::game::{Grid, Player, PlayerId, PlayerRegistry};

/// Grid dimensions used by `new-game` when none are given.
#[derive(Debug, Clone, Copy, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
#[serde(default)]
pub struct GameConfig {
    pub width: usize,
    pub height: usize,
}

impl Default for GameConfig {
    fn default() -> Self {
        GameConfig {
            width: 7,
            height: 6,
        }
    }
}

/// A player to register at startup.
#[derive(Debug, Clone, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub struct PlayerConfig {
    pub id: PlayerId,
    pub color: String,
}

impl From<&PlayerConfig> for Player {
    fn from(config: &PlayerConfig) -> Self {
        Player::new(config.id, config.color.clone())
    }
}

/// Top-level application configuration, loadable from TOML.
#[derive(Debug, Clone, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
#[serde(default)]
pub struct AppConfig {
    pub game: GameConfig,
    pub players: Vec<PlayerConfig>,
}

impl Default for AppConfig {
    fn default() -> Self {
        AppConfig {
            game: GameConfig::default(),
            players: vec![
                PlayerConfig {
                    id: PlayerId(1),
                    color: "red".to_string(),
                },
                PlayerConfig {
                    id: PlayerId(2),
                    color: "yellow".to_string(),
                },
            ],
        }
    }
}

impl AppConfig {
    /// Load configuration from a TOML file.
    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        let content = std::fs::read_to_string(path).map_err(|e| ConfigError::FileRead {
            path: path.to_path_buf(),
            source: e,
        })?;
        let config: AppConfig = toml::from_str(&content)?;
        config.validate()?;
        Ok(config)
    }

    /// Load configuration from a TOML file, falling back to defaults if the file
    /// does not exist.
    pub fn load_or_default(path: &Path) -> Result<Self, ConfigError> {
        if path.exists() {
            Self::load(path)
        } else {
            tracing::warn!(path = %path.display(), "config file not found, using defaults");
            Ok(Self::default())
        }
    }

    /// Validate configuration values.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.game.width == 0 {
            return Err(ConfigError::Validation("game.width must be > 0".into()));
        }
        if self.game.height == 0 {
            return Err(ConfigError::Validation("game.height must be > 0".into()));
        }
        match self.game.width.checked_mul(self.game.height) {
            Some(cells) if cells <= Grid::MAX_CELLS => {}
            _ => {
                return Err(ConfigError::Validation(format!(
                    "game.width * game.height must be <= {}",
                    Grid::MAX_CELLS
                )))
            }
        }
        if self.players.len() > PlayerRegistry::MAX_PLAYERS {
            return Err(ConfigError::Validation(format!(
                "at most {} players may be configured (got {})",
                PlayerRegistry::MAX_PLAYERS,
                self.players.len()
            )));
        }

        let mut seen = HashSet::new();
        for player in &self.players {
            if !seen.insert(player.id) {
                return Err(ConfigError::Validation(format!(
                    "player id {} is configured more than once",
                    player.id
                )));
            }
        }

        Ok(())
    }

    /// Registry seeded with the configured players, in file order.
    pub fn registry(&self) -> Result<PlayerRegistry, crate::error::RegistryError> {
        let mut registry = PlayerRegistry::new();
        for player in &self.players {
            registry.register(player.into())?;
        }
        Ok(registry)
    }

    /// Generate a TOML string with all default values (useful for creating
    /// example config files).
    pub fn default_toml() -> String {
        toml::to_string_pretty(&AppConfig::default()).expect("default config serializes")
    }
}
