//! Game configuration types.
//!
//! - `GameConfig`: loop settings (round safety cap, pacing delay)
//! - `Settings`: rules plus loop settings, loadable from a JSON file
//!
//! Missing JSON fields fall back to the Mau Mau defaults, so an empty
//! object `{}` is a valid settings file.

use std::path::Path;
use std::time::Duration;

use serde::{Deserialize, Serialize};

use crate::error::ConfigError;
use crate::rules::RulesConfig;

/// Default maximum number of rounds before a game is called a stalemate.
pub const DEFAULT_SAFETY_CAP: u32 = 100;

/// Default pause between turns, in milliseconds.
pub const DEFAULT_TURN_DELAY_MS: u64 = 50;

/// Settings for the turn loop.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct GameConfig {
    /// Rounds after which the loop stops without a winner.
    pub safety_cap: u32,

    /// Cosmetic pause after each turn. Zero disables it.
    pub turn_delay_ms: u64,
}

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            safety_cap: DEFAULT_SAFETY_CAP,
            turn_delay_ms: DEFAULT_TURN_DELAY_MS,
        }
    }
}

impl GameConfig {
    /// Create a configuration with the default values.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the round safety cap.
    #[must_use]
    pub fn with_safety_cap(mut self, rounds: u32) -> Self {
        self.safety_cap = rounds;
        self
    }

    /// Set the pause between turns.
    #[must_use]
    pub fn with_turn_delay_ms(mut self, ms: u64) -> Self {
        self.turn_delay_ms = ms;
        self
    }

    /// The pause between turns as a `Duration`.
    #[must_use]
    pub fn turn_delay(&self) -> Duration {
        Duration::from_millis(self.turn_delay_ms)
    }
}

/// Complete settings for one game: rules and loop configuration.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Settings {
    pub rules: RulesConfig,
    pub game: GameConfig,
}

impl Settings {
    /// Parse settings from a JSON document.
    ///
    /// Only checks the shape of the document; rules are validated when
    /// `Rules::new` is called on `self.rules`.
    pub fn from_json_str(json: &str) -> Result<Self, ConfigError> {
        Ok(serde_json::from_str(json)?)
    }

    /// Load settings from a JSON file.
    pub fn load(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let path = path.as_ref();
        let text = std::fs::read_to_string(path).map_err(|source| ConfigError::Io {
            path: path.display().to_string(),
            source,
        })?;
        Self::from_json_str(&text)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cards::Suit;
    use crate::rules::Direction;

    #[test]
    fn test_game_config_defaults() {
        let config = GameConfig::default();
        assert_eq!(config.safety_cap, 100);
        assert_eq!(config.turn_delay(), Duration::from_millis(50));
    }

    #[test]
    fn test_game_config_builder() {
        let config = GameConfig::new().with_safety_cap(10).with_turn_delay_ms(0);
        assert_eq!(config.safety_cap, 10);
        assert_eq!(config.turn_delay(), Duration::ZERO);
    }

    #[test]
    fn test_empty_json_is_default() {
        let settings = Settings::from_json_str("{}").unwrap();
        assert_eq!(settings, Settings::default());
    }

    #[test]
    fn test_partial_json_overrides() {
        let json = r#"{
            "rules": { "suits": ["hearts", "spades"], "direction": "counter_clockwise" },
            "game": { "turn_delay_ms": 0 }
        }"#;
        let settings = Settings::from_json_str(json).unwrap();

        assert_eq!(settings.rules.suits, vec![Suit::Hearts, Suit::Spades]);
        assert_eq!(settings.rules.direction, Direction::CounterClockwise);
        assert_eq!(settings.rules.hand_size, 7);
        assert_eq!(settings.game.turn_delay_ms, 0);
        assert_eq!(settings.game.safety_cap, DEFAULT_SAFETY_CAP);
    }

    #[test]
    fn test_malformed_json_is_parse_error() {
        let err = Settings::from_json_str(r#"{ "rules": { "suits": ["stars"] } }"#).unwrap_err();
        assert!(matches!(err, ConfigError::Parse(_)));
    }

    #[test]
    fn test_missing_file_is_io_error() {
        let err = Settings::load("/definitely/not/here.json").unwrap_err();
        assert!(matches!(err, ConfigError::Io { .. }));
    }
}
