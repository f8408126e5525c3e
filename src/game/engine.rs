use rand::rngs::ThreadRng;
use tracing::{debug, info, trace};

use super::{
    config::GameConfig,
    direction::Direction,
    spawn::{CellPicker, RngPicker, place_food},
    state::{CollisionType, GameState, GameStatus, PALETTE_LEN, Position, Snake, Snapshot},
};

/// What a single tick did
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StepOutcome {
    /// Snake moved without eating
    Moved,
    /// Snake ate food and grew by one segment
    Ate,
    /// Snake hit a wall or itself; the game is over
    Crashed(CollisionType),
    /// Snake ate the last food and now covers the whole board
    BoardFull,
    /// Game was already over; nothing changed
    Halted,
}

/// The game engine that owns the state and applies all rules
///
/// The engine knows nothing about timing or drawing: a scheduler calls
/// [`step`](Self::step) once per tick, input calls
/// [`set_direction`](Self::set_direction), and a renderer reads
/// [`snapshot`](Self::snapshot).
pub struct GameEngine<P = RngPicker<ThreadRng>> {
    config: GameConfig,
    state: GameState,
    picker: P,
}

impl GameEngine<RngPicker<ThreadRng>> {
    /// Create a new game using the thread-local RNG for food placement
    pub fn new(config: GameConfig) -> Self {
        Self::with_picker(config, RngPicker::new(rand::thread_rng()))
    }
}

impl<P: CellPicker> GameEngine<P> {
    /// Create a new game drawing food cells from `picker`
    pub fn with_picker(config: GameConfig, mut picker: P) -> Self {
        let state = Self::fresh_state(&config, &mut picker);
        Self {
            config,
            state,
            picker,
        }
    }

    /// Resume from an explicit state
    pub fn from_state(config: GameConfig, state: GameState, picker: P) -> Self {
        Self {
            config,
            state,
            picker,
        }
    }

    fn fresh_state(config: &GameConfig, picker: &mut P) -> GameState {
        let snake = Snake::new(config.initial_snake());
        let food = place_food(picker, config, &snake);
        GameState::new(snake, Direction::Right, food)
    }

    /// Request a new direction for the next tick
    ///
    /// Reversals relative to the last executed move are ignored, so several
    /// key presses within one tick cannot fold the snake back onto its neck.
    pub fn set_direction(&mut self, requested: Direction) {
        if self.state.is_terminal() {
            return;
        }
        if self.state.heading.is_opposite(requested) {
            trace!(?requested, heading = ?self.state.heading, "ignored reversal");
            return;
        }
        self.state.pending = requested;
    }

    /// Advance the game by one tick
    pub fn step(&mut self) -> StepOutcome {
        if self.state.is_terminal() {
            return StepOutcome::Halted;
        }

        let state = &mut self.state;
        state.heading = state.pending;
        state.steps += 1;

        let new_head = state.snake.head().stepped(state.heading, self.config.cell_size);

        if let Some(collision) = self.check_collision(new_head) {
            let state = &mut self.state;
            state.status = GameStatus::Crashed(collision);
            info!(
                ?collision,
                score = state.score,
                length = state.snake.len(),
                steps = state.steps,
                "game over"
            );
            return StepOutcome::Crashed(collision);
        }

        let state = &mut self.state;
        let ate_food = state.food == Some(new_head);
        state.snake.advance(new_head, ate_food);

        if !ate_food {
            return StepOutcome::Moved;
        }

        state.score += self.config.food_score;
        state.color_index = (state.color_index + 1) % PALETTE_LEN;
        debug!(score = state.score, length = state.snake.len(), "ate food");

        state.food = place_food(&mut self.picker, &self.config, &state.snake);
        if state.food.is_none() {
            state.status = GameStatus::BoardFull;
            info!(score = state.score, steps = state.steps, "board full");
            return StepOutcome::BoardFull;
        }

        StepOutcome::Ate
    }

    /// Check if moving the head to `pos` causes a collision
    fn check_collision(&self, pos: Position) -> Option<CollisionType> {
        if !self.config.in_bounds(pos) {
            return Some(CollisionType::Wall);
        }

        if self.state.snake.occupies(pos) {
            return Some(CollisionType::SelfCollision);
        }

        None
    }

    /// Start over from the configured starting position
    pub fn restart(&mut self) {
        self.state = Self::fresh_state(&self.config, &mut self.picker);
        info!(food = ?self.state.food, "game restarted");
    }

    pub fn is_terminal(&self) -> bool {
        self.state.is_terminal()
    }

    /// Copy of the current state for rendering
    pub fn snapshot(&self) -> Snapshot {
        Snapshot {
            snake: self.state.snake.body.clone(),
            food: self.state.food,
            score: self.state.score,
            status: self.state.status,
            color_index: self.state.color_index,
            steps: self.state.steps,
            width: self.config.width,
            height: self.config.height,
            cell_size: self.config.cell_size,
        }
    }

    pub fn state(&self) -> &GameState {
        &self.state
    }

    pub fn config(&self) -> &GameConfig {
        &self.config
    }
}
