use serde::{Deserialize, Serialize};

use super::action::Direction;

/// A position on the game grid
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Position {
    pub x: i32,
    pub y: i32,
}

impl Position {
    pub fn new(x: i32, y: i32) -> Self {
        Self { x, y }
    }

    /// Move position by delta
    pub fn moved_by(&self, dx: i32, dy: i32) -> Self {
        Self {
            x: self.x + dx,
            y: self.y + dy,
        }
    }

    /// Move position in a direction
    pub fn moved_in_direction(&self, direction: Direction) -> Self {
        let (dx, dy) = direction.delta();
        self.moved_by(dx, dy)
    }
}

/// The snake in the game
#[derive(Debug, Clone, PartialEq)]
pub struct Snake {
    /// Body segments, with head at index 0
    body: Vec<Position>,
}

impl Snake {
    /// Create a snake from its segments, head first.
    ///
    /// Panics if `segments` is empty.
    pub fn new(segments: Vec<Position>) -> Self {
        assert!(!segments.is_empty(), "snake needs at least one segment");
        Self { body: segments }
    }

    /// Get the head position
    pub fn head(&self) -> Position {
        self.body[0]
    }

    /// Get the tail position (last segment)
    pub fn tail(&self) -> Position {
        self.body[self.body.len() - 1]
    }

    pub fn segments(&self) -> &[Position] {
        &self.body
    }

    /// Get body segments (excluding head)
    pub fn body_segments(&self) -> &[Position] {
        &self.body[1..]
    }

    /// Check if position collides with snake body (excluding head)
    pub fn collides_with_body(&self, pos: Position) -> bool {
        self.body_segments().contains(&pos)
    }

    pub fn contains(&self, pos: Position) -> bool {
        self.body.contains(&pos)
    }

    /// Shift the whole snake one cell: new head in front, tail dropped.
    pub fn advance(&mut self, direction: Direction) {
        let new_head = self.head().moved_in_direction(direction);
        self.body.insert(0, new_head);
        self.body.pop();
    }

    /// Append one segment on top of the current tail.
    ///
    /// The stacked segment separates from the tail on the next `advance`.
    pub fn grow(&mut self) {
        let tail = self.tail();
        self.body.push(tail);
    }

    /// Get the length of the snake
    pub fn len(&self) -> usize {
        self.body.len()
    }

    /// Always false; a snake cannot be built without segments
    pub fn is_empty(&self) -> bool {
        self.body.is_empty()
    }
}

/// Type of collision that occurred
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CollisionType {
    /// Snake hit a wall
    Wall,
    /// Snake hit itself
    SelfCollision,
}

impl CollisionType {
    /// Message shown on the game over screen
    pub fn message(&self) -> &'static str {
        match self {
            CollisionType::Wall => "Game Over - Collided with the wall!",
            CollisionType::SelfCollision => "Game Over - Collided with yourself!",
        }
    }
}

/// Mode the session is in; drives both update and draw
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum GamePhase {
    #[default]
    Paused,
    Running,
    GameOver,
}

/// Complete game state
#[derive(Debug, Clone, PartialEq)]
pub struct GameState {
    pub snake: Snake,
    pub food: Position,
    pub direction: Direction,
    pub phase: GamePhase,
    /// Empty until a collision happens
    pub over_message: String,
    /// Set by a restart request, consumed when play resumes
    pub pending_restart: bool,
    /// Collision seen on the last move; becomes GameOver on the next tick
    pub collided: bool,
    pub score: u32,
    pub grid_width: usize,
    pub grid_height: usize,
}

impl GameState {
    /// Create a new game state
    pub fn new(
        snake: Snake,
        food: Position,
        direction: Direction,
        grid_width: usize,
        grid_height: usize,
    ) -> Self {
        Self {
            snake,
            food,
            direction,
            phase: GamePhase::Paused,
            over_message: String::new(),
            pending_restart: false,
            collided: false,
            score: 0,
            grid_width,
            grid_height,
        }
    }

    /// Check if a position is within the grid bounds
    pub fn is_in_bounds(&self, pos: Position) -> bool {
        pos.x >= 0
            && pos.x < self.grid_width as i32
            && pos.y >= 0
            && pos.y < self.grid_height as i32
    }
}
