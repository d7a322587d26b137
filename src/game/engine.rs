use super::{
    action::KeySnapshot,
    config::GameConfig,
    state::{CollisionType, GamePhase, GameState, Position, Snake},
};
use rand::{Rng, SeedableRng, rngs::StdRng};
use tracing::{debug, info, trace};

/// What happened during one call to [`GameEngine::update`]
#[derive(Debug, Clone, Default, PartialEq)]
pub struct TickReport {
    /// Whether the snake ate food this tick
    pub ate_food: bool,
    /// Type of collision if the move this tick hit something
    pub collision: Option<CollisionType>,
    /// Phase change as (from, to)
    pub transition: Option<(GamePhase, GamePhase)>,
    /// Whether the session was reinitialized this tick
    pub restarted: bool,
}

/// The game engine that handles all game logic
pub struct GameEngine {
    config: GameConfig,
    rng: StdRng,
}

impl GameEngine {
    /// Create an engine drawing food positions from `rng`.
    ///
    /// Panics if the grid has no cells or a configured snake is empty.
    pub fn new(config: GameConfig, rng: StdRng) -> Self {
        assert!(config.cell_count() > 0, "grid must have at least one cell");
        assert!(!config.initial_snake.is_empty(), "initial snake is empty");
        assert!(!config.restart_snake.is_empty(), "restart snake is empty");
        Self { config, rng }
    }

    /// Create an engine with a reproducible food sequence
    pub fn from_seed(config: GameConfig, seed: u64) -> Self {
        Self::new(config, StdRng::seed_from_u64(seed))
    }

    /// State at process start: paused, initial snake, random food
    pub fn new_game(&mut self) -> GameState {
        let snake = Snake::new(self.config.initial_snake.clone());
        let food = self.spawn_food(&snake);

        GameState::new(
            snake,
            food,
            self.config.initial_direction,
            self.config.grid_width,
            self.config.grid_height,
        )
    }

    /// Advance the session by one frame
    pub fn update(&mut self, state: &mut GameState, input: &KeySnapshot) -> TickReport {
        let mut report = TickReport::default();
        trace!(phase = ?state.phase, ?input, "tick");

        match state.phase {
            GamePhase::Paused => {
                if input.start {
                    if state.pending_restart {
                        self.reinitialize(state);
                        report.restarted = true;
                    }
                    Self::transition(state, GamePhase::Running, &mut report);
                }
            }
            GamePhase::Running => {
                if state.pending_restart {
                    self.reinitialize(state);
                    report.restarted = true;
                }

                if state.collided {
                    Self::transition(state, GamePhase::GameOver, &mut report);
                    return report;
                }

                if let Some(direction) = input.direction() {
                    state.direction = direction;
                } else if input.restart && !state.pending_restart {
                    info!("restart requested while running");
                    state.pending_restart = true;
                }

                state.snake.advance(state.direction);

                report.collision = self.check_collision(state);
                if let Some(collision) = report.collision {
                    info!(?collision, head = ?state.snake.head(), "snake collided");
                    state.collided = true;
                    state.over_message = collision.message().to_string();
                }

                report.ate_food = self.check_food(state);
            }
            GamePhase::GameOver => {
                if input.restart {
                    state.pending_restart = true;
                    Self::transition(state, GamePhase::Paused, &mut report);
                }
            }
        }

        report
    }

    fn transition(state: &mut GameState, to: GamePhase, report: &mut TickReport) {
        let from = state.phase;
        info!(?from, ?to, score = state.score, "phase changed");
        state.phase = to;
        report.transition = Some((from, to));
    }

    /// Put a fresh snake and food on the board; the phase is left alone.
    fn reinitialize(&mut self, state: &mut GameState) {
        let snake = Snake::new(self.config.restart_snake.clone());
        state.food = self.spawn_food(&snake);
        state.snake = snake;
        state.direction = self.config.initial_direction;
        state.over_message.clear();
        state.pending_restart = false;
        state.collided = false;
        state.score = 0;
        info!(food = ?state.food, "game restarted");
    }

    /// Check the current head against the walls, then against the body
    fn check_collision(&self, state: &GameState) -> Option<CollisionType> {
        let head = state.snake.head();

        if !state.is_in_bounds(head) {
            return Some(CollisionType::Wall);
        }

        if state.snake.collides_with_body(head) {
            return Some(CollisionType::SelfCollision);
        }

        None
    }

    /// Grow and respawn food if the head is on it
    fn check_food(&mut self, state: &mut GameState) -> bool {
        if state.snake.head() != state.food {
            return false;
        }

        state.snake.grow();
        state.score += 1;
        state.food = self.spawn_food(&state.snake);
        debug!(score = state.score, food = ?state.food, "food eaten");
        true
    }

    /// Uniform cell on the grid; optionally one the snake does not cover
    fn spawn_food(&mut self, snake: &Snake) -> Position {
        let avoid = self.config.food_avoids_snake && snake.len() < self.config.cell_count();

        loop {
            let x = self.rng.gen_range(0..self.config.grid_width) as i32;
            let y = self.rng.gen_range(0..self.config.grid_height) as i32;
            let pos = Position::new(x, y);

            if !avoid || !snake.contains(pos) {
                return pos;
            }
        }
    }
}
