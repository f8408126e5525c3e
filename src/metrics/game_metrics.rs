use std::time::{Duration, Instant};

/// In-memory stats for the current session; nothing is persisted
pub struct GameMetrics {
    started: Instant,
    /// Time spent in the current game, frozen once it ends
    pub elapsed_time: Duration,
    pub best_score: u32,
    pub games_played: u32,
    running: bool,
}

impl GameMetrics {
    pub fn new() -> Self {
        Self {
            started: Instant::now(),
            elapsed_time: Duration::ZERO,
            best_score: 0,
            games_played: 0,
            running: true,
        }
    }

    /// Refresh the clock; a finished game keeps its final time
    pub fn update(&mut self) {
        if self.running {
            self.elapsed_time = self.started.elapsed();
        }
    }

    pub fn on_game_start(&mut self) {
        self.started = Instant::now();
        self.elapsed_time = Duration::ZERO;
        self.running = true;
    }

    pub fn on_game_over(&mut self, final_score: u32) {
        if !self.running {
            return;
        }
        self.update();
        self.running = false;
        self.games_played += 1;
        self.best_score = self.best_score.max(final_score);
    }

    pub fn format_time(&self) -> String {
        let total_secs = self.elapsed_time.as_secs();
        format!("{:02}:{:02}", total_secs / 60, total_secs % 60)
    }
}

impl Default for GameMetrics {
    fn default() -> Self {
        Self::new()
    }
}
