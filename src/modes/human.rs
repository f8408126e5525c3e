use anyhow::{Context, Result};
use crossterm::{
    event::{Event, EventStream, KeyEventKind},
    execute,
    terminal::{EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode},
};
use futures::StreamExt;
use ratatui::{Terminal, backend::CrosstermBackend};
use std::io::{Stderr, stderr};
use std::time::Duration;
use tokio::time::{Interval, MissedTickBehavior, interval};
use tracing::{debug, info};

use crate::game::{CellPicker, GameConfig, GameEngine, StepOutcome};
use crate::input::{InputHandler, KeyAction};
use crate::metrics::GameMetrics;
use crate::render::Renderer;

/// Redraw rate while nothing else forces a frame (30 FPS)
const RENDER_INTERVAL: Duration = Duration::from_millis(33);

/// Keyboard play in the terminal
///
/// Owns the scheduling the engine stays unaware of: a tick timer that calls
/// `step()` and redraws, keyboard events, and a render timer for the clock.
pub struct HumanMode<P: CellPicker> {
    engine: GameEngine<P>,
    metrics: GameMetrics,
    renderer: Renderer,
    input_handler: InputHandler,
    tick_interval: Duration,
    should_quit: bool,
}

impl<P: CellPicker> HumanMode<P> {
    pub fn new(engine: GameEngine<P>) -> Self {
        let tick_interval = engine.config().tick_interval();
        Self {
            engine,
            metrics: GameMetrics::new(),
            renderer: Renderer::new(),
            input_handler: InputHandler::new(),
            tick_interval,
            should_quit: false,
        }
    }

    pub fn config(&self) -> &GameConfig {
        self.engine.config()
    }

    pub async fn run(&mut self) -> Result<()> {
        // Setup terminal
        enable_raw_mode().context("Failed to enable raw mode")?;
        let mut stderr = stderr();
        execute!(stderr, EnterAlternateScreen).context("Failed to enter alternate screen")?;
        let backend = CrosstermBackend::new(stderr);
        let mut terminal = Terminal::new(backend).context("Failed to create terminal")?;
        terminal.hide_cursor().context("Failed to hide cursor")?;
        terminal.clear().context("Failed to clear terminal")?;

        info!(
            width = self.config().width,
            height = self.config().height,
            tick_ms = self.config().tick_ms,
            "starting game"
        );

        // Run game loop with cleanup
        let result = self.run_game_loop(&mut terminal).await;

        self.cleanup_terminal(&mut terminal)?;

        info!(
            games_played = self.metrics.games_played,
            best_score = self.metrics.best_score,
            "session ended"
        );
        result
    }

    async fn run_game_loop(
        &mut self,
        terminal: &mut Terminal<CrosstermBackend<Stderr>>,
    ) -> Result<()> {
        let mut event_stream = EventStream::new();

        let mut tick_timer = tick_timer(self.tick_interval);

        let mut render_timer = interval(RENDER_INTERVAL);

        loop {
            tokio::select! {
                maybe_event = event_stream.next() => {
                    match maybe_event {
                        Some(Ok(event)) => self.on_event(event, &mut tick_timer),
                        Some(Err(e)) => return Err(e).context("Failed to read terminal event"),
                        None => self.should_quit = true,
                    }
                }

                // No ticks are scheduled while the game is over
                _ = tick_timer.tick(), if !self.engine.is_terminal() => {
                    self.update_game();
                    self.draw(terminal)?;
                }

                _ = render_timer.tick() => {
                    self.metrics.update();
                    self.draw(terminal)?;
                }

                _ = tokio::signal::ctrl_c() => {
                    self.should_quit = true;
                }
            }

            if self.should_quit {
                break;
            }
        }

        Ok(())
    }

    /// Handle an event; a restart pushes the next tick a full period out
    fn on_event(&mut self, event: Event, tick_timer: &mut Interval) {
        if self.handle_event(event) {
            tick_timer.reset();
        }
    }

    /// Apply a key press, returning true if it started a new game
    fn handle_event(&mut self, event: Event) -> bool {
        let Event::Key(key) = event else {
            return false;
        };
        // Only process key press events, not release
        if key.kind != KeyEventKind::Press {
            return false;
        }

        match self.input_handler.handle_key_event(key) {
            KeyAction::Steer(direction) => self.engine.set_direction(direction),
            KeyAction::Restart => return self.restart_game(),
            KeyAction::Quit => self.should_quit = true,
            KeyAction::None => {}
        }
        false
    }

    fn update_game(&mut self) {
        match self.engine.step() {
            StepOutcome::Crashed(_) | StepOutcome::BoardFull => {
                self.metrics.on_game_over(self.engine.state().score);
            }
            StepOutcome::Moved | StepOutcome::Ate | StepOutcome::Halted => {}
        }
    }

    /// Restart is only honoured once the current game is over
    fn restart_game(&mut self) -> bool {
        if !self.engine.is_terminal() {
            debug!("restart ignored while running");
            return false;
        }
        self.engine.restart();
        self.metrics.on_game_start();
        true
    }

    fn draw(&self, terminal: &mut Terminal<CrosstermBackend<Stderr>>) -> Result<()> {
        let snapshot = self.engine.snapshot();
        terminal
            .draw(|frame| self.renderer.render(frame, &snapshot, &self.metrics))
            .context("Failed to draw frame")?;
        Ok(())
    }

    fn cleanup_terminal(
        &mut self,
        terminal: &mut Terminal<CrosstermBackend<Stderr>>,
    ) -> Result<()> {
        disable_raw_mode().context("Failed to disable raw mode")?;
        execute!(terminal.backend_mut(), LeaveAlternateScreen)
            .context("Failed to leave alternate screen")?;
        terminal.show_cursor().context("Failed to show cursor")?;
        Ok(())
    }
}

/// Tick timer whose first tick fires immediately
fn tick_timer(period: Duration) -> Interval {
    let mut timer = interval(period);
    timer.set_missed_tick_behavior(MissedTickBehavior::Delay);
    timer
}
