use ratatui::style::Color;

use crate::game::PALETTE_LEN;

/// Colours the snake segments cycle through
pub const SNAKE_PALETTE: [Color; PALETTE_LEN] = [
    Color::Rgb(0xFF, 0x6B, 0x6B),
    Color::Rgb(0x4E, 0xCD, 0xC4),
    Color::Rgb(0x45, 0xB7, 0xD1),
    Color::Rgb(0x96, 0xCE, 0xB4),
    Color::Rgb(0xFF, 0xEA, 0xA7),
];

pub const FOOD_COLOR: Color = Color::Rgb(0xFF, 0x52, 0x52);

pub const BOARD_BACKGROUND: Color = Color::Black;
