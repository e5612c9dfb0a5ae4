//! Game configuration.
//!
//! Hosts configure the engine once per game with a `GameConfig`. Nothing
//! is read from globals: the deal seed, what happens to matched cards and
//! the bonus-time limit all live here.

use serde::{Deserialize, Serialize};

/// Bonus-time settings.
///
/// When present, every card gets `time_limit_ms` of bonus time that
/// drains while the card is face-up and unmatched.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct BonusConfig {
    /// Bonus time per card in milliseconds.
    pub time_limit_ms: u64,
}

impl Default for BonusConfig {
    fn default() -> Self {
        Self { time_limit_ms: 6_000 }
    }
}

/// Per-game configuration.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct GameConfig {
    /// Seed for the deal and later re-shuffles.
    pub seed: u64,

    /// Flip matched cards face-down too when a new turn starts.
    ///
    /// Off by default: matched cards stay face-up for the rest of the game.
    pub flip_matched_down: bool,

    /// Shuffle the deck after dealing.
    pub shuffle_on_create: bool,

    /// Bonus-time tracking. `None` disables it.
    pub bonus: Option<BonusConfig>,
}

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            seed: 0,
            flip_matched_down: false,
            shuffle_on_create: true,
            bonus: None,
        }
    }
}

impl GameConfig {
    /// Start building a configuration from the defaults.
    #[must_use]
    pub fn builder() -> GameConfigBuilder {
        GameConfigBuilder::default()
    }

    /// Bonus time limit per card, 0 when bonus tracking is off.
    #[must_use]
    pub fn bonus_limit_ms(&self) -> u64 {
        self.bonus.map_or(0, |b| b.time_limit_ms)
    }
}

/// Builder for [`GameConfig`].
///
/// ```
/// use memory_match::core::GameConfig;
///
/// let config = GameConfig::builder()
///     .seed(7)
///     .bonus_time_limit_ms(4_000)
///     .build();
/// assert_eq!(config.bonus_limit_ms(), 4_000);
/// assert!(config.shuffle_on_create);
/// ```
#[derive(Clone, Debug, Default)]
pub struct GameConfigBuilder {
    config: GameConfig,
}

impl GameConfigBuilder {
    pub fn seed(mut self, seed: u64) -> Self {
        self.config.seed = seed;
        self
    }

    pub fn flip_matched_down(mut self, flip: bool) -> Self {
        self.config.flip_matched_down = flip;
        self
    }

    pub fn shuffle_on_create(mut self, shuffle: bool) -> Self {
        self.config.shuffle_on_create = shuffle;
        self
    }

    pub fn bonus_time_limit_ms(mut self, limit_ms: u64) -> Self {
        self.config.bonus = Some(BonusConfig { time_limit_ms: limit_ms });
        self
    }

    pub fn without_bonus(mut self) -> Self {
        self.config.bonus = None;
        self
    }

    pub fn build(self) -> GameConfig {
        self.config
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let config = GameConfig::default();
        assert!(!config.flip_matched_down);
        assert!(config.shuffle_on_create);
        assert_eq!(config.bonus, None);
        assert_eq!(config.bonus_limit_ms(), 0);
    }

    #[test]
    fn test_builder() {
        let config = GameConfig::builder()
            .seed(99)
            .flip_matched_down(true)
            .shuffle_on_create(false)
            .bonus_time_limit_ms(1_500)
            .build();

        assert_eq!(config.seed, 99);
        assert!(config.flip_matched_down);
        assert!(!config.shuffle_on_create);
        assert_eq!(config.bonus_limit_ms(), 1_500);

        let config = GameConfig::builder().bonus_time_limit_ms(10).without_bonus().build();
        assert_eq!(config.bonus, None);
    }

    #[test]
    fn test_partial_json_uses_defaults() {
        let config: GameConfig = serde_json::from_str(r#"{"seed": 3, "bonus": {"time_limit_ms": 500}}"#).unwrap();

        assert_eq!(config.seed, 3);
        assert!(config.shuffle_on_create);
        assert_eq!(config.bonus_limit_ms(), 500);
    }
}
