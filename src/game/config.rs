use anyhow::{Context, Result, bail};
use serde::{Deserialize, Serialize};
use std::path::Path;
use std::time::Duration;

use super::direction::Direction;
use super::state::Position;

/// Largest number of cells along either side of the board the terminal can lay out
pub const MAX_CELLS_PER_SIDE: i32 = 1024;

/// Configuration for the game
///
/// All lengths are in pixels; positions on the board are multiples of
/// `cell_size`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct GameConfig {
    /// Width of the board in pixels
    pub width: i32,
    /// Height of the board in pixels
    pub height: i32,
    /// Side length of one grid cell
    pub cell_size: i32,
    /// Milliseconds between two ticks
    pub tick_ms: u64,
    /// Points awarded per food eaten
    pub food_score: u32,
    /// Head of the snake at the start of every game
    pub initial_head: Position,
    /// Number of segments at the start of every game
    pub initial_length: usize,
}

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            width: 600,
            height: 400,
            cell_size: 20,
            tick_ms: 100,
            food_score: 10,
            initial_head: Position::new(100, 100),
            initial_length: 3,
        }
    }
}

impl GameConfig {
    /// Create a configuration with a custom board size
    pub fn new(width: i32, height: i32) -> Self {
        Self {
            width,
            height,
            ..Default::default()
        }
    }

    /// Load a configuration from a JSON file; missing fields keep their defaults
    pub fn from_json_file(path: &Path) -> Result<Self> {
        let json = std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read config file {}", path.display()))?;
        let config: Self = serde_json::from_str(&json)
            .with_context(|| format!("Failed to parse config file {}", path.display()))?;
        Ok(config)
    }

    /// Number of cells per row
    pub fn columns(&self) -> i32 {
        self.width / self.cell_size
    }

    /// Number of cells per column
    pub fn rows(&self) -> i32 {
        self.height / self.cell_size
    }

    /// Total number of cells on the board
    pub fn cell_count(&self) -> usize {
        (self.columns().max(0) as usize).saturating_mul(self.rows().max(0) as usize)
    }

    pub fn tick_interval(&self) -> Duration {
        Duration::from_millis(self.tick_ms)
    }

    /// Check if a position lies on the board
    pub fn in_bounds(&self, pos: Position) -> bool {
        pos.x >= 0 && pos.x < self.width && pos.y >= 0 && pos.y < self.height
    }

    /// Starting body: a horizontal line trailing to the left of the head
    pub fn initial_snake(&self) -> Vec<Position> {
        let (dx, dy) = Direction::Right.delta();
        (0..self.initial_length as i32)
            .map(|i| {
                self.initial_head
                    .moved_by(-dx * self.cell_size * i, -dy * self.cell_size * i)
            })
            .collect()
    }

    /// Reject configurations the engine cannot play on
    pub fn validate(&self) -> Result<()> {
        if self.cell_size <= 0 {
            bail!("cell_size must be positive, got {}", self.cell_size);
        }
        if self.width <= 0 || self.height <= 0 {
            bail!(
                "board must have a positive size, got {}x{}",
                self.width,
                self.height
            );
        }
        if self.width % self.cell_size != 0 || self.height % self.cell_size != 0 {
            bail!(
                "board size {}x{} is not a multiple of cell_size {}",
                self.width,
                self.height,
                self.cell_size
            );
        }
        if self.columns() > MAX_CELLS_PER_SIDE || self.rows() > MAX_CELLS_PER_SIDE {
            bail!(
                "board of {}x{} cells exceeds the {} cell limit per side",
                self.columns(),
                self.rows(),
                MAX_CELLS_PER_SIDE
            );
        }
        if self.tick_ms == 0 {
            bail!("tick_ms must be positive");
        }
        if self.initial_length == 0 {
            bail!("initial_length must be at least 1");
        }
        if self.initial_length >= self.cell_count() {
            bail!(
                "initial snake of length {} leaves no room for food on a {}-cell board",
                self.initial_length,
                self.cell_count()
            );
        }
        let head = self.initial_head;
        if head.x % self.cell_size != 0 || head.y % self.cell_size != 0 {
            bail!(
                "initial_head ({}, {}) is not aligned to cell_size {}",
                head.x,
                head.y,
                self.cell_size
            );
        }
        if !self.in_bounds(head) {
            bail!("initial_head ({}, {}) is off the board", head.x, head.y);
        }
        // The body trails left of the head, so only the tail can fall off
        let trailing = i64::from(self.cell_size) * (self.initial_length as i64 - 1);
        let tail_x = i64::from(head.x) - trailing;
        if tail_x < 0 {
            bail!("initial snake leaves the board at ({}, {})", tail_x, head.y);
        }
        Ok(())
    }
}
