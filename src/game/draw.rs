//! Draw instructions produced by the game state.
//!
//! The state never touches a terminal or window. It describes a frame as a short list of
//! text prompts and filled cells through [`Surface`], and the host decides how to put
//! those on screen.

use super::state::{GamePhase, GameState, Position};

pub const START_PROMPT: &str = "Press Space to start the game.";
pub const RESTART_PROMPT: &str = "Press 'R' to restart.";

/// Color of a filled cell
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CellColor {
    Snake,
    Food,
}

/// Target for draw instructions
pub trait Surface {
    fn draw_text(&mut self, text: &str);
    fn fill_cell(&mut self, position: Position, color: CellColor);
}

/// One recorded draw instruction
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DrawCommand {
    Text(String),
    FillCell { position: Position, color: CellColor },
}

/// A surface that records instructions for later playback
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct DrawList {
    commands: Vec<DrawCommand>,
}

impl DrawList {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn commands(&self) -> &[DrawCommand] {
        &self.commands
    }

    /// All text instructions, in order
    pub fn texts(&self) -> impl Iterator<Item = &str> {
        self.commands.iter().filter_map(|command| match command {
            DrawCommand::Text(text) => Some(text.as_str()),
            DrawCommand::FillCell { .. } => None,
        })
    }

    /// All cell instructions, in order
    pub fn cells(&self) -> impl Iterator<Item = (Position, CellColor)> + '_ {
        self.commands.iter().filter_map(|command| match command {
            DrawCommand::FillCell { position, color } => Some((*position, *color)),
            DrawCommand::Text(_) => None,
        })
    }
}

impl Surface for DrawList {
    fn draw_text(&mut self, text: &str) {
        self.commands.push(DrawCommand::Text(text.to_string()));
    }

    fn fill_cell(&mut self, position: Position, color: CellColor) {
        self.commands.push(DrawCommand::FillCell { position, color });
    }
}

impl GameState {
    /// Describe the current frame on `surface`
    pub fn draw(&self, surface: &mut impl Surface) {
        match self.phase {
            GamePhase::Paused => surface.draw_text(START_PROMPT),
            GamePhase::Running => {
                for &segment in self.snake.segments() {
                    surface.fill_cell(segment, CellColor::Snake);
                }
                surface.fill_cell(self.food, CellColor::Food);
            }
            GamePhase::GameOver => {
                surface.draw_text(&format!("{}\n{}", self.over_message, RESTART_PROMPT));
            }
        }
    }

    /// Convenience wrapper recording the frame into a fresh [`DrawList`]
    pub fn draw_list(&self) -> DrawList {
        let mut list = DrawList::new();
        self.draw(&mut list);
        list
    }
}
