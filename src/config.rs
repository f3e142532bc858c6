use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::board::Board;
use crate::error::GameError;
use crate::Coord;

/// Full game configuration. Every field has a default, so a TOML file only
/// needs to name what it changes.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct GameConfig {
    pub board: BoardConfig,
    pub snake: SnakeConfig,
    pub speed: SpeedConfig,
    pub input: InputConfig,
    /// Fixed seed for food placement; entropy when absent.
    pub seed: Option<u64>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct BoardConfig {
    pub width: Coord,
    pub height: Coord,
    pub cell_length: Coord,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SnakeConfig {
    pub start_x: Coord,
    pub start_y: Coord,
    pub initial_length: usize,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SpeedConfig {
    /// Frames per simulation step at the start of a game.
    pub initial_tick_rate: u32,
    /// Floor the tick rate never drops below.
    pub min_tick_rate: u32,
    pub frame_interval_ms: u64,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct InputConfig {
    pub keyboard: bool,
    pub touch: bool,
    pub swipe_dead_zone: f64,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Preset {
    /// Keyboard only, slow start.
    Classic,
    /// Keyboard and swipe, faster start.
    Touch,
}

impl Default for BoardConfig {
    fn default() -> Self {
        BoardConfig { width: 400, height: 200, cell_length: 10 }
    }
}

impl Default for SnakeConfig {
    fn default() -> Self {
        SnakeConfig { start_x: 100, start_y: 100, initial_length: 3 }
    }
}

impl Default for SpeedConfig {
    fn default() -> Self {
        SpeedConfig { initial_tick_rate: 10, min_tick_rate: 5, frame_interval_ms: 16 }
    }
}

impl Default for InputConfig {
    fn default() -> Self {
        InputConfig { keyboard: true, touch: true, swipe_dead_zone: 4.0 }
    }
}

impl GameConfig {
    pub fn preset(preset: Preset) -> Self {
        let mut config = GameConfig::default();
        match preset {
            Preset::Classic => {
                config.speed.initial_tick_rate = 20;
                config.input.touch = false;
            }
            Preset::Touch => {
                config.speed.initial_tick_rate = 10;
                config.input.touch = true;
            }
        }
        config
    }

    pub fn from_toml_str(content: &str) -> Result<Self, GameError> {
        let config: GameConfig = toml::from_str(content)?;
        config.validate()?;
        Ok(config)
    }

    pub fn load_file<P: AsRef<Path>>(path: P) -> Result<Self, GameError> {
        let content = std::fs::read_to_string(path)?;
        Self::from_toml_str(&content)
    }

    pub fn board(&self) -> Result<Board, GameError> {
        Board::new(self.board.width, self.board.height, self.board.cell_length)
    }

    /// Checks everything a game built from this config relies on.
    pub fn validate(&self) -> Result<(), GameError> {
        let board = self.board()?;

        let SpeedConfig { initial_tick_rate, min_tick_rate, .. } = self.speed;
        if min_tick_rate == 0 || min_tick_rate > initial_tick_rate {
            return Err(GameError::InvalidTickRate { initial: initial_tick_rate, min: min_tick_rate });
        }

        let dz = self.input.swipe_dead_zone;
        if !dz.is_finite() || dz < 0.0 {
            return Err(GameError::InvalidDeadZone(dz));
        }

        let SnakeConfig { start_x: x, start_y: y, initial_length: length } = self.snake;
        if !board.contains(x, y) || !board.is_aligned(x, y) {
            return Err(GameError::InvalidStart(x, y));
        }
        if length == 0 {
            return Err(GameError::EmptySnake);
        }

        // The body trails to the left of the head and must not wrap or fill the board.
        let room_left = (x / board.cell_length()) as usize;
        if length >= board.capacity() || length - 1 > room_left {
            return Err(GameError::SnakeDoesNotFit { x, y, length });
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_config_is_valid() {
        let config = GameConfig::default();
        assert!(config.validate().is_ok());
        assert_eq!(config.speed.initial_tick_rate, 10);
        assert_eq!(config.speed.min_tick_rate, 5);
        assert_eq!(config.snake.initial_length, 3);
    }

    #[test]
    fn presets_differ_in_speed_and_input() {
        let classic = GameConfig::preset(Preset::Classic);
        assert_eq!(classic.speed.initial_tick_rate, 20);
        assert!(!classic.input.touch);

        let touch = GameConfig::preset(Preset::Touch);
        assert_eq!(touch.speed.initial_tick_rate, 10);
        assert!(touch.input.touch && touch.input.keyboard);
    }

    #[test]
    fn partial_toml_keeps_defaults() {
        let config = GameConfig::from_toml_str(
            r#"
            seed = 9

            [board]
            width = 200
            height = 300

            [speed]
            initial_tick_rate = 20
            "#,
        )
        .unwrap();

        assert_eq!(config.board.width, 200);
        assert_eq!(config.board.height, 300);
        assert_eq!(config.board.cell_length, 10);
        assert_eq!(config.speed.initial_tick_rate, 20);
        assert_eq!(config.speed.min_tick_rate, 5);
        assert_eq!(config.seed, Some(9));
    }

    #[test]
    fn rejects_unaligned_board() {
        let err = GameConfig::from_toml_str("[board]\nwidth = 205\n").unwrap_err();
        assert!(matches!(err, GameError::UnalignedBoard { .. }));
    }

    #[test]
    fn rejects_bad_tick_rates() {
        let mut config = GameConfig::default();
        config.speed.min_tick_rate = 0;
        assert!(matches!(config.validate(), Err(GameError::InvalidTickRate { .. })));

        config.speed.min_tick_rate = 30;
        assert!(matches!(config.validate(), Err(GameError::InvalidTickRate { .. })));
    }

    #[test]
    fn rejects_bad_start() {
        let mut config = GameConfig::default();
        config.snake.start_x = 105;
        assert!(matches!(config.validate(), Err(GameError::InvalidStart(105, 100))));

        config.snake.start_x = 10;
        assert!(matches!(config.validate(), Err(GameError::SnakeDoesNotFit { .. })));

        config.snake.start_x = 20;
        assert!(config.validate().is_ok());
    }

    #[test]
    fn rejects_huge_initial_length() {
        let err = GameConfig::from_toml_str("[snake]\ninitial_length = 300000000\n").unwrap_err();
        assert!(matches!(err, GameError::SnakeDoesNotFit { length: 300000000, .. }));
    }

    #[test]
    fn rejects_garbage() {
        assert!(matches!(GameConfig::from_toml_str("board = 3"), Err(GameError::Parse(_))));
    }
}
