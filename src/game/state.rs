use serde::{Deserialize, Serialize};

use super::direction::Direction;

/// Number of colours the snake cycles through
pub const PALETTE_LEN: usize = 5;

/// A pixel position on the board, aligned to the cell size
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Position {
    pub x: i32,
    pub y: i32,
}

impl Position {
    pub fn new(x: i32, y: i32) -> Self {
        Self { x, y }
    }

    /// Move position by delta
    pub fn moved_by(&self, dx: i32, dy: i32) -> Self {
        Self {
            x: self.x + dx,
            y: self.y + dy,
        }
    }

    /// Move position one cell in a direction
    pub fn stepped(&self, direction: Direction, cell_size: i32) -> Self {
        let (dx, dy) = direction.delta();
        self.moved_by(dx * cell_size, dy * cell_size)
    }
}

/// The snake in the game
#[derive(Debug, Clone, PartialEq)]
pub struct Snake {
    /// Body segments, with head at index 0
    pub body: Vec<Position>,
}

impl Snake {
    /// Build a snake from its segments, head first
    pub fn new(body: Vec<Position>) -> Self {
        debug_assert!(!body.is_empty(), "snake needs at least one segment");
        Self { body }
    }

    /// Get the head position
    pub fn head(&self) -> Position {
        self.body[0]
    }

    /// Check if position is occupied by any segment, head and tail included
    pub fn occupies(&self, pos: Position) -> bool {
        self.body.contains(&pos)
    }

    /// Advance to a new head, dropping the tail unless the snake grows
    pub fn advance(&mut self, new_head: Position, grow: bool) {
        self.body.insert(0, new_head);

        if !grow {
            self.body.pop();
        }
    }

    /// Get the length of the snake
    pub fn len(&self) -> usize {
        self.body.len()
    }

    /// Check if the snake is empty (should never happen in practice)
    pub fn is_empty(&self) -> bool {
        self.body.is_empty()
    }
}

/// Type of collision that occurred
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CollisionType {
    /// Snake hit a wall
    Wall,
    /// Snake hit itself
    SelfCollision,
}

/// Where the game stands
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GameStatus {
    Running,
    /// Game over after a collision
    Crashed(CollisionType),
    /// The snake covers every cell, so no food can be placed
    BoardFull,
}

impl GameStatus {
    pub fn is_terminal(&self) -> bool {
        !matches!(self, GameStatus::Running)
    }
}

/// Complete game state
#[derive(Debug, Clone, PartialEq)]
pub struct GameState {
    pub snake: Snake,
    /// Direction of the last executed move
    pub heading: Direction,
    /// Direction the next tick will move in
    pub pending: Direction,
    /// `None` only once the board is full
    pub food: Option<Position>,
    pub score: u32,
    pub status: GameStatus,
    /// Cosmetic offset into the snake palette
    pub color_index: usize,
    pub steps: u32,
}

impl GameState {
    /// Create a running game state heading in `direction`
    pub fn new(snake: Snake, direction: Direction, food: Option<Position>) -> Self {
        Self {
            snake,
            heading: direction,
            pending: direction,
            food,
            score: 0,
            status: GameStatus::Running,
            color_index: 0,
            steps: 0,
        }
    }

    pub fn is_terminal(&self) -> bool {
        self.status.is_terminal()
    }
}

/// Read-only copy of everything the renderer needs for one frame
#[derive(Debug, Clone, PartialEq)]
pub struct Snapshot {
    pub snake: Vec<Position>,
    pub food: Option<Position>,
    pub score: u32,
    pub status: GameStatus,
    pub color_index: usize,
    pub steps: u32,
    pub width: i32,
    pub height: i32,
    pub cell_size: i32,
}

impl Snapshot {
    pub fn is_terminal(&self) -> bool {
        self.status.is_terminal()
    }

    /// Palette slot for the segment at `segment` (0 = head)
    pub fn segment_color(&self, segment: usize) -> usize {
        (self.color_index + segment) % PALETTE_LEN
    }
}
