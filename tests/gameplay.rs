use color_snake::game::{
    CellPicker, CollisionType, Direction, GameConfig, GameEngine, GameState, GameStatus,
    Position, RngPicker, Snake, StepOutcome,
};
use rand::SeedableRng;
use rand::rngs::StdRng;

/// Always offers the same cell
struct FixedCell(i32, i32);

impl CellPicker for FixedCell {
    fn pick(&mut self, _columns: i32, _rows: i32) -> (i32, i32) {
        (self.0, self.1)
    }
}

fn seeded(seed: u64) -> GameEngine<RngPicker<StdRng>> {
    GameEngine::with_picker(GameConfig::default(), RngPicker::new(StdRng::seed_from_u64(seed)))
}

#[test]
fn opening_move_slides_the_snake_right() {
    let state = GameState::new(
        Snake::new(vec![
            Position::new(100, 100),
            Position::new(80, 100),
            Position::new(60, 100),
        ]),
        Direction::Right,
        Some(Position::new(500, 300)),
    );
    let mut engine = GameEngine::from_state(GameConfig::default(), state, FixedCell(0, 0));

    assert_eq!(engine.step(), StepOutcome::Moved);

    let snapshot = engine.snapshot();
    assert_eq!(
        snapshot.snake,
        vec![
            Position::new(120, 100),
            Position::new(100, 100),
            Position::new(80, 100)
        ]
    );
    assert_eq!(snapshot.score, 0);
}

#[test]
fn running_into_the_right_wall_ends_the_game() {
    let config = GameConfig::default();
    let state = GameState::new(
        Snake::new(config.initial_snake()),
        Direction::Right,
        Some(Position::new(0, 0)),
    );
    let mut engine = GameEngine::from_state(config, state, FixedCell(0, 0));

    // Head starts at x=100 and the last valid column is x=580: 24 safe moves
    for _ in 0..24 {
        assert_eq!(engine.step(), StepOutcome::Moved);
    }
    assert_eq!(engine.snapshot().snake[0], Position::new(580, 100));

    assert_eq!(engine.step(), StepOutcome::Crashed(CollisionType::Wall));
    assert!(engine.is_terminal());
}

#[test]
fn eating_chain_scores_and_grows() {
    // Food keeps appearing directly ahead of the snake
    let state = GameState::new(
        Snake::new(vec![
            Position::new(100, 100),
            Position::new(80, 100),
            Position::new(60, 100),
        ]),
        Direction::Right,
        Some(Position::new(120, 100)),
    );

    struct AheadOf(i32);
    impl CellPicker for AheadOf {
        fn pick(&mut self, _columns: i32, _rows: i32) -> (i32, i32) {
            self.0 += 1;
            (self.0, 5)
        }
    }

    let mut engine = GameEngine::from_state(GameConfig::default(), state, AheadOf(6));

    for eaten in 1..=4u32 {
        assert_eq!(engine.step(), StepOutcome::Ate);
        let snapshot = engine.snapshot();
        assert_eq!(snapshot.score, 10 * eaten);
        assert_eq!(snapshot.snake.len(), 3 + eaten as usize);
        assert_eq!(snapshot.color_index, eaten as usize % 5);
        let food = snapshot.food.unwrap();
        assert!(!snapshot.snake.contains(&food));
    }
}

#[test]
fn random_play_keeps_invariants() {
    let mut engine = seeded(2024);
    let turns = [
        Direction::Down,
        Direction::Left,
        Direction::Up,
        Direction::Right,
    ];

    for tick in 0..2000usize {
        if tick % 7 == 0 {
            engine.set_direction(turns[(tick / 7) % turns.len()]);
        }
        let before = engine.snapshot();
        let outcome = engine.step();
        let after = engine.snapshot();

        match outcome {
            StepOutcome::Moved => {
                assert_eq!(after.snake.len(), before.snake.len());
                assert_eq!(after.score, before.score);
            }
            StepOutcome::Ate => {
                assert_eq!(after.snake.len(), before.snake.len() + 1);
                assert_eq!(after.score, before.score + 10);
            }
            StepOutcome::Crashed(_) | StepOutcome::BoardFull => {
                assert_eq!(after.snake, before.snake);
                assert!(after.is_terminal());
                engine.restart();
                continue;
            }
            StepOutcome::Halted => unreachable!("restart follows every game over"),
        }

        if let Some(food) = after.food {
            assert!(!after.snake.contains(&food));
        }
        // No duplicate cells and every step is one cell along one axis
        for (i, pair) in after.snake.windows(2).enumerate() {
            let dx = (pair[0].x - pair[1].x).abs();
            let dy = (pair[0].y - pair[1].y).abs();
            assert_eq!(dx + dy, 20, "segments {i} and {} are not adjacent", i + 1);
            assert!(!after.snake[i + 1..].contains(&pair[0]));
        }
    }
}

#[test]
fn restart_restores_the_starting_game() {
    let state = GameState::new(
        Snake::new(vec![Position::new(0, 0)]),
        Direction::Up,
        Some(Position::new(200, 200)),
    );
    let mut engine = GameEngine::from_state(GameConfig::default(), state, FixedCell(12, 12));
    engine.step();
    assert_eq!(engine.snapshot().status, GameStatus::Crashed(CollisionType::Wall));

    engine.restart();

    let snapshot = engine.snapshot();
    assert_eq!(snapshot.status, GameStatus::Running);
    assert_eq!(snapshot.score, 0);
    assert_eq!(snapshot.color_index, 0);
    assert_eq!(
        snapshot.snake,
        vec![
            Position::new(100, 100),
            Position::new(80, 100),
            Position::new(60, 100)
        ]
    );
    assert_eq!(snapshot.food, Some(Position::new(240, 240)));
}
