//! Grid Snake - the classic game on a fixed grid
//!
//! This library provides:
//! - Core game logic and draw instructions (game module)
//! - Key mapping into per-tick snapshots (input module)
//! - TUI rendering (render module)
//! - Score and play-time tracking (metrics module)
//! - The interactive loop (modes module)
//! - File logging setup (logging module)

pub mod game;
pub mod input;
pub mod logging;
pub mod metrics;
pub mod modes;
pub mod render;
