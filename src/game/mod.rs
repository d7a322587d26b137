//! Core game logic module for Snake
//!
//! This module contains all the game logic without any I/O or rendering dependencies.
//! The host calls [`GameEngine::update`] once per frame and then asks the state to
//! [`draw`](GameState::draw) itself.

pub mod action;
pub mod config;
pub mod draw;
pub mod engine;
pub mod state;

// Re-export commonly used types
pub use action::{Direction, KeySnapshot};
pub use config::{CELL_SIZE, GameConfig, SCREEN_HEIGHT, SCREEN_WIDTH};
pub use draw::{CellColor, DrawCommand, DrawList, Surface};
pub use engine::{GameEngine, TickReport};
pub use state::{CollisionType, GamePhase, GameState, Position, Snake};
