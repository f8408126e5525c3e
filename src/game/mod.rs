//! Core game logic module for Snake
//!
//! This module contains all the game rules without any I/O or rendering dependencies.
//! The engine is driven by an external scheduler and can be tested headlessly.

pub mod config;
pub mod direction;
pub mod engine;
pub mod spawn;
pub mod state;

// Re-export commonly used types
pub use config::GameConfig;
pub use direction::Direction;
pub use engine::{GameEngine, StepOutcome};
pub use spawn::{CellPicker, RngPicker};
pub use state::{CollisionType, GameState, GameStatus, PALETTE_LEN, Position, Snake, Snapshot};
