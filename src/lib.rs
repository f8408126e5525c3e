//! Color Snake - a colourful grid snake game for the terminal
//!
//! This library provides:
//! - Core game logic, headless and deterministic under an injected picker (game module)
//! - TUI rendering (render module)
//! - Keyboard mapping (input module)
//! - Session stats (metrics module)
//! - The interactive play loop (modes module)

pub mod game;
pub mod input;
pub mod logging;
pub mod metrics;
pub mod modes;
pub mod render;
