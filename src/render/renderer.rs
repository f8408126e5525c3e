use ratatui::{
    Frame,
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, BorderType, Borders, Clear, Paragraph},
};

use crate::game::{GameStatus, Position, Snapshot};
use crate::metrics::GameMetrics;

use super::palette::{BOARD_BACKGROUND, FOOD_COLOR, SNAKE_PALETTE};

/// Terminal columns used to draw one grid cell, so cells look square
const CELL_WIDTH: u16 = 2;

const SEGMENT: &str = "██";
const FOOD: &str = "● ";
const EMPTY: &str = "  ";

pub struct Renderer;

impl Renderer {
    pub fn new() -> Self {
        Self
    }

    pub fn render(&self, frame: &mut Frame, snapshot: &Snapshot, metrics: &GameMetrics) {
        let chunks = Layout::default()
            .direction(Direction::Vertical)
            .constraints([
                Constraint::Length(3), // Header
                Constraint::Min(0),    // Board
                Constraint::Length(3), // Footer
            ])
            .split(frame.area());

        frame.render_widget(self.render_stats(snapshot, metrics), chunks[0]);

        let columns = u16::try_from(snapshot.width / snapshot.cell_size).unwrap_or(u16::MAX);
        let rows = u16::try_from(snapshot.height / snapshot.cell_size).unwrap_or(u16::MAX);
        let board_area = centered(
            chunks[1],
            columns.saturating_mul(CELL_WIDTH).saturating_add(2),
            rows.saturating_add(2),
        );
        // Only the cells that fit inside the border are laid out
        let visible_columns = columns.min(board_area.width.saturating_sub(2) / CELL_WIDTH);
        let visible_rows = rows.min(board_area.height.saturating_sub(2));
        frame.render_widget(
            self.render_board(snapshot, visible_columns, visible_rows),
            board_area,
        );

        if snapshot.is_terminal() {
            let overlay_area = centered(board_area, 34, 8);
            frame.render_widget(Clear, overlay_area);
            frame.render_widget(self.render_game_over(snapshot), overlay_area);
        }

        frame.render_widget(self.render_controls(), chunks[2]);
    }

    fn render_board(&self, snapshot: &Snapshot, columns: u16, rows: u16) -> Paragraph<'_> {
        let (columns, rows) = (columns as usize, rows as usize);
        let mut grid: Vec<Span> = vec![Span::raw(EMPTY); columns * rows];
        let index = |pos: Position| {
            let column = usize::try_from(pos.x / snapshot.cell_size).ok()?;
            let row = usize::try_from(pos.y / snapshot.cell_size).ok()?;
            (column < columns && row < rows).then(|| row * columns + column)
        };

        if let Some(cell) = snapshot.food.and_then(index) {
            grid[cell] = Span::styled(
                FOOD,
                Style::default().fg(FOOD_COLOR).add_modifier(Modifier::BOLD),
            );
        }

        // Tail first so the head wins if segments ever overlap
        for (segment, pos) in snapshot.snake.iter().enumerate().rev() {
            if let Some(cell) = index(*pos) {
                let color = SNAKE_PALETTE[snapshot.segment_color(segment)];
                grid[cell] = Span::styled(SEGMENT, Style::default().fg(color));
            }
        }

        let lines: Vec<Line> = grid
            .chunks(columns.max(1))
            .map(|row| Line::from(row.to_vec()))
            .collect();

        Paragraph::new(lines)
            .style(Style::default().bg(BOARD_BACKGROUND))
            .block(
                Block::default()
                    .borders(Borders::ALL)
                    .border_type(BorderType::Double)
                    .border_style(Style::default().fg(Color::White))
                    .title(" Colorful Snake "),
            )
    }

    fn render_stats(&self, snapshot: &Snapshot, metrics: &GameMetrics) -> Paragraph<'_> {
        let label = Style::default().fg(Color::Yellow);
        let value = Style::default().fg(Color::White);

        let text = vec![Line::from(vec![
            Span::styled("Score: ", label),
            Span::styled(
                snapshot.score.to_string(),
                value.add_modifier(Modifier::BOLD),
            ),
            Span::raw("    "),
            Span::styled("Steps: ", label),
            Span::styled(snapshot.steps.to_string(), value),
            Span::raw("    "),
            Span::styled("Time: ", label),
            Span::styled(metrics.format_time(), value),
            Span::raw("    "),
            Span::styled("Best: ", label),
            Span::styled(metrics.best_score.to_string(), value),
        ])];

        Paragraph::new(text).alignment(Alignment::Center)
    }

    fn render_game_over(&self, snapshot: &Snapshot) -> Paragraph<'_> {
        let headline = match snapshot.status {
            GameStatus::BoardFull => "BOARD CLEARED",
            _ => "GAME OVER",
        };

        let text = vec![
            Line::from(""),
            Line::from(Span::styled(
                headline,
                Style::default().fg(Color::Red).add_modifier(Modifier::BOLD),
            )),
            Line::from(""),
            Line::from(Span::styled(
                format!("Final Score: {}", snapshot.score),
                Style::default().fg(Color::White),
            )),
            Line::from(""),
            Line::from(Span::styled(
                "Press 'R' to Restart",
                Style::default().fg(Color::Yellow),
            )),
        ];

        Paragraph::new(text).alignment(Alignment::Center).block(
            Block::default()
                .borders(Borders::ALL)
                .border_style(Style::default().fg(Color::Red)),
        )
    }

    fn render_controls(&self) -> Paragraph<'_> {
        let text = vec![Line::from(vec![
            Span::styled("↑↓←→", Style::default().fg(Color::Cyan)),
            Span::raw(" or "),
            Span::styled("WASD", Style::default().fg(Color::Cyan)),
            Span::raw(" to move | "),
            Span::styled("R", Style::default().fg(Color::Green)),
            Span::raw(" to restart | "),
            Span::styled("Q", Style::default().fg(Color::Red)),
            Span::raw(" to quit"),
        ])];

        Paragraph::new(text).alignment(Alignment::Center)
    }
}

impl Default for Renderer {
    fn default() -> Self {
        Self::new()
    }
}

/// A `width` x `height` rect centred in `area`, clipped to fit
fn centered(area: Rect, width: u16, height: u16) -> Rect {
    let width = width.min(area.width);
    let height = height.min(area.height);
    Rect::new(
        area.x + (area.width - width) / 2,
        area.y + (area.height - height) / 2,
        width,
        height,
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::game::CollisionType;
    use ratatui::{Terminal, backend::TestBackend, buffer::Buffer};

    fn snapshot(status: GameStatus) -> Snapshot {
        Snapshot {
            snake: vec![
                Position::new(100, 100),
                Position::new(80, 100),
                Position::new(60, 100),
            ],
            food: Some(Position::new(200, 60)),
            score: 30,
            status,
            color_index: 1,
            steps: 12,
            width: 600,
            height: 400,
            cell_size: 20,
        }
    }

    fn draw(snapshot: &Snapshot) -> Buffer {
        let mut terminal = Terminal::new(TestBackend::new(80, 30)).unwrap();
        let metrics = GameMetrics::new();
        terminal
            .draw(|frame| Renderer::new().render(frame, snapshot, &metrics))
            .unwrap();
        terminal.backend().buffer().clone()
    }

    fn text(buffer: &Buffer) -> String {
        buffer.content.iter().map(|cell| cell.symbol()).collect()
    }

    #[test]
    fn test_running_board() {
        let buffer = draw(&snapshot(GameStatus::Running));
        let text = text(&buffer);

        assert!(text.contains("Score: 30"));
        assert!(text.contains("Colorful Snake"));
        assert!(!text.contains("GAME OVER"));

        let food = buffer
            .content
            .iter()
            .find(|cell| cell.symbol() == "●")
            .unwrap();
        assert_eq!(food.fg, FOOD_COLOR);

        // Head, neck and tail use consecutive palette colours starting at the index
        let segment_colors: Vec<Color> = buffer
            .content
            .iter()
            .filter(|cell| cell.symbol() == "█")
            .map(|cell| cell.fg)
            .collect();
        assert_eq!(segment_colors.len(), 6);
        assert_eq!(segment_colors[0], SNAKE_PALETTE[3]); // tail, leftmost
        assert_eq!(segment_colors[4], SNAKE_PALETTE[1]); // head, rightmost
    }

    #[test]
    fn test_game_over_overlay() {
        let buffer = draw(&snapshot(GameStatus::Crashed(CollisionType::Wall)));
        let text = text(&buffer);

        assert!(text.contains("GAME OVER"));
        assert!(text.contains("Final Score: 30"));
        assert!(text.contains("Press 'R' to Restart"));
    }

    #[test]
    fn test_board_full_overlay() {
        let buffer = draw(&snapshot(GameStatus::BoardFull));
        assert!(text(&buffer).contains("BOARD CLEARED"));
    }

    #[test]
    fn test_oversized_board_is_clipped() {
        let mut wide = snapshot(GameStatus::Running);
        wide.width = 800_000;
        wide.food = Some(Position::new(790_000, 60));
        let buffer = draw(&wide);

        // The snake near the left edge still shows; food beyond the view does not
        let segments = buffer.content.iter().filter(|c| c.symbol() == "█").count();
        assert_eq!(segments, 6);
        assert!(!text(&buffer).contains("●"));

        let mut huge = snapshot(GameStatus::Crashed(CollisionType::Wall));
        huge.width = 2_000_000_000;
        huge.height = 2_000_000_000;
        huge.cell_size = 1;
        assert!(text(&draw(&huge)).contains("GAME OVER"));
    }

    #[test]
    fn test_centered_clips_to_area() {
        let area = Rect::new(0, 0, 10, 4);
        assert_eq!(centered(area, 4, 2), Rect::new(3, 1, 4, 2));
        assert_eq!(centered(area, 40, 20), area);
    }
}
