use anyhow::{Context, Result, ensure};
use serde::{Deserialize, Serialize};
use std::path::Path;
use std::time::Duration;

use super::state::Position;

/// Largest number of columns or rows; two terminal columns per cell must fit a `u16`
pub const MAX_CELLS_PER_SIDE: i32 = (u16::MAX / 2 - 1) as i32;

/// Configuration for the game
///
/// The board is measured in pixels and divided into square cells of `unit`
/// pixels. Every snake and food position is a multiple of `unit`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct GameConfig {
    /// Board width in pixels
    pub board_width: i32,
    /// Board height in pixels
    pub board_height: i32,
    /// Cell size in pixels
    pub unit: i32,
    /// Initial length of the snake
    pub initial_snake_length: usize,
    /// Head cell at the start of every round
    pub start: Position,
    /// Score added per food eaten
    pub food_reward: u32,
    /// Tick period in milliseconds
    pub tick_ms: u64,
}

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            board_width: 800,
            board_height: 600,
            unit: 25,
            initial_snake_length: 3,
            start: Position::new(50, 50),
            food_reward: 10,
            tick_ms: 100,
        }
    }
}

impl GameConfig {
    /// Create a new configuration with a custom board size
    pub fn new(board_width: i32, board_height: i32) -> Self {
        Self {
            board_width,
            board_height,
            ..Default::default()
        }
    }

    /// Create a small board for testing (10x10 cells)
    pub fn small() -> Self {
        Self::new(250, 250)
    }

    /// Load a configuration from a JSON file. Missing fields take defaults.
    pub fn from_json_file(path: &Path) -> Result<Self> {
        let raw = std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read config file {}", path.display()))?;
        let config: GameConfig = serde_json::from_str(&raw)
            .with_context(|| format!("Failed to parse config file {}", path.display()))?;
        Ok(config)
    }

    /// Number of cell columns
    pub fn columns(&self) -> i32 {
        self.board_width / self.unit
    }

    /// Number of cell rows
    pub fn rows(&self) -> i32 {
        self.board_height / self.unit
    }

    /// Maximum number of snake segments
    ///
    /// `width * height / unit`, which exceeds the cell count; it only acts as
    /// a hard bound on growth.
    pub fn capacity(&self) -> usize {
        (self.board_width as usize * self.board_height as usize) / self.unit as usize
    }

    pub fn tick_period(&self) -> Duration {
        Duration::from_millis(self.tick_ms)
    }

    /// Check that the board, start cell and snake length are consistent
    pub fn validate(&self) -> Result<()> {
        ensure!(self.unit > 0, "unit must be positive, got {}", self.unit);
        ensure!(
            self.board_width > 0 && self.board_width % self.unit == 0,
            "board width {} must be a positive multiple of unit {}",
            self.board_width,
            self.unit
        );
        ensure!(
            self.board_height > 0 && self.board_height % self.unit == 0,
            "board height {} must be a positive multiple of unit {}",
            self.board_height,
            self.unit
        );
        ensure!(
            self.columns() <= MAX_CELLS_PER_SIDE && self.rows() <= MAX_CELLS_PER_SIDE,
            "board of {}x{} cells exceeds {} cells per side",
            self.columns(),
            self.rows(),
            MAX_CELLS_PER_SIDE
        );
        ensure!(
            self.initial_snake_length >= 1,
            "initial snake length must be at least 1"
        );
        ensure!(
            self.initial_snake_length <= self.capacity(),
            "initial snake length {} exceeds capacity {}",
            self.initial_snake_length,
            self.capacity()
        );
        ensure!(
            self.start.x % self.unit == 0 && self.start.y % self.unit == 0,
            "start cell ({}, {}) is not aligned to unit {}",
            self.start.x,
            self.start.y,
            self.unit
        );

        // The body trails to the left of the head
        let tail_x = self.start.x - (self.initial_snake_length as i32 - 1) * self.unit;
        ensure!(
            tail_x >= 0
                && self.start.x < self.board_width
                && self.start.y >= 0
                && self.start.y < self.board_height,
            "initial snake at ({}, {}) with length {} does not fit the board",
            self.start.x,
            self.start.y,
            self.initial_snake_length
        );
        ensure!(self.tick_ms > 0, "tick period must be positive");

        Ok(())
    }
}
