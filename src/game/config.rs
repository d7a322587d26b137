use serde::{Deserialize, Serialize};

use super::{action::Direction, state::Position};

/// Canvas width in pixels
pub const SCREEN_WIDTH: usize = 640;
/// Canvas height in pixels
pub const SCREEN_HEIGHT: usize = 480;
/// Edge length of one grid cell in pixels
pub const CELL_SIZE: usize = 10;

/// Configuration for the game
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GameConfig {
    /// Width of the game grid in cells
    pub grid_width: usize,
    /// Height of the game grid in cells
    pub grid_height: usize,
    /// Segments of the snake at process start, head first
    pub initial_snake: Vec<Position>,
    /// Segments of the snake after a restart, head first
    pub restart_snake: Vec<Position>,
    /// Direction the snake travels before any key is pressed
    pub initial_direction: Direction,
    /// Resample food until it lands on a cell the snake does not occupy
    #[serde(default)]
    pub food_avoids_snake: bool,
}

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            grid_width: SCREEN_WIDTH / CELL_SIZE,
            grid_height: SCREEN_HEIGHT / CELL_SIZE,
            initial_snake: vec![
                Position::new(2, 0),
                Position::new(1, 0),
                Position::new(0, 0),
            ],
            restart_snake: vec![
                Position::new(4, 4),
                Position::new(3, 4),
                Position::new(2, 4),
            ],
            initial_direction: Direction::Right,
            food_avoids_snake: false,
        }
    }
}

impl GameConfig {
    /// Create a new configuration with custom grid size
    pub fn new(width: usize, height: usize) -> Self {
        Self {
            grid_width: width,
            grid_height: height,
            ..Default::default()
        }
    }

    /// Create a small grid for testing
    pub fn small() -> Self {
        Self::new(10, 10)
    }

    /// Number of cells on the grid
    pub fn cell_count(&self) -> usize {
        self.grid_width * self.grid_height
    }
}
