//! Food placement
//!
//! Food goes to a uniformly random free cell. Cells are drawn from a
//! [`CellPicker`] so that tests can script exactly where food lands.

use rand::Rng;
use tracing::debug;

use super::config::GameConfig;
use super::state::{Position, Snake};

/// Attempts per board cell before falling back to a scan of free cells
const ATTEMPTS_PER_CELL: usize = 16;

/// Source of candidate cells for food placement
pub trait CellPicker {
    /// Pick a cell as `(column, row)` with `column < columns` and `row < rows`
    fn pick(&mut self, columns: i32, rows: i32) -> (i32, i32);
}

/// Picks cells uniformly using any `rand` generator
#[derive(Debug, Clone)]
pub struct RngPicker<R> {
    rng: R,
}

impl<R: Rng> RngPicker<R> {
    pub fn new(rng: R) -> Self {
        Self { rng }
    }
}

impl<R: Rng> CellPicker for RngPicker<R> {
    fn pick(&mut self, columns: i32, rows: i32) -> (i32, i32) {
        (self.rng.gen_range(0..columns), self.rng.gen_range(0..rows))
    }
}

/// Place food on a free cell, or return `None` if the snake fills the board
pub fn place_food<P: CellPicker>(
    picker: &mut P,
    config: &GameConfig,
    snake: &Snake,
) -> Option<Position> {
    let columns = config.columns();
    let rows = config.rows();
    let to_position = |(column, row): (i32, i32)| {
        Position::new(column * config.cell_size, row * config.cell_size)
    };

    if snake.len() >= config.cell_count() {
        debug!(length = snake.len(), "no free cell left for food");
        return None;
    }

    for _ in 0..config.cell_count().saturating_mul(ATTEMPTS_PER_CELL) {
        let (column, row) = picker.pick(columns, rows);
        if !(0..columns).contains(&column) || !(0..rows).contains(&row) {
            continue;
        }
        let pos = to_position((column, row));
        if !snake.occupies(pos) {
            debug!(x = pos.x, y = pos.y, "placed food");
            return Some(pos);
        }
    }

    // The picker keeps hitting the snake; take the first free cell instead.
    let fallback = (0..rows)
        .flat_map(|row| (0..columns).map(move |column| (column, row)))
        .map(to_position)
        .find(|pos| !snake.occupies(*pos));
    debug!(?fallback, "food placed by scan after exhausting attempts");
    fallback
}
