use anyhow::{Context, Result};
use crossterm::{
    event::{Event, EventStream, KeyEventKind},
    execute,
    terminal::{EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode},
};
use futures::StreamExt;
use ratatui::{Terminal, backend::CrosstermBackend};
use serde::{Deserialize, Serialize};
use std::io::{Stderr, stderr};
use std::path::Path;
use std::time::Duration;
use tokio::time::interval;
use tracing::info;

use crate::game::{GameConfig, GameEngine, GamePhase, GameState, KeySnapshot, TickReport};
use crate::input::{InputHandler, KeyAction};
use crate::metrics::GameMetrics;
use crate::render::Renderer;

/// Timing of the interactive loop
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct HumanConfig {
    /// Simulation ticks per second
    pub ticks_per_second: u32,
    /// Frames drawn per second
    pub fps: u32,
}

impl Default for HumanConfig {
    fn default() -> Self {
        Self {
            ticks_per_second: 15,
            fps: 30,
        }
    }
}

impl HumanConfig {
    /// Read settings from a JSON file; missing fields keep their defaults
    pub fn load(path: &Path) -> Result<Self> {
        let json = std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read config from {:?}", path))?;
        serde_json::from_str(&json)
            .with_context(|| format!("Failed to parse config from {:?}", path))
    }

    pub fn tick_interval(&self) -> Duration {
        Duration::from_secs(1) / self.ticks_per_second.max(1)
    }

    pub fn render_interval(&self) -> Duration {
        Duration::from_secs(1) / self.fps.max(1)
    }
}

pub struct HumanMode {
    engine: GameEngine,
    state: GameState,
    metrics: GameMetrics,
    renderer: Renderer,
    input_handler: InputHandler,
    config: HumanConfig,
    snapshot: KeySnapshot,
    should_quit: bool,
}

impl HumanMode {
    pub fn new(game_config: GameConfig, config: HumanConfig, seed: u64) -> Self {
        info!(seed, ?config, "creating game session");
        let renderer = Renderer::new(game_config.grid_width, game_config.grid_height);
        let mut engine = GameEngine::from_seed(game_config, seed);
        let state = engine.new_game();

        Self {
            engine,
            state,
            metrics: GameMetrics::new(),
            renderer,
            input_handler: InputHandler::new(),
            config,
            snapshot: KeySnapshot::default(),
            should_quit: false,
        }
    }

    pub async fn run(&mut self) -> Result<()> {
        // Setup terminal
        enable_raw_mode().context("Failed to enable raw mode")?;
        let mut terminal = match setup_terminal() {
            Ok(terminal) => terminal,
            Err(err) => {
                // Best effort; the setup error is the one worth reporting
                let _ = disable_raw_mode();
                let _ = execute!(stderr(), LeaveAlternateScreen);
                return Err(err);
            }
        };

        // Run game loop with cleanup
        let result = self.run_game_loop(&mut terminal).await;

        // Cleanup terminal
        let cleanup = self.cleanup_terminal(&mut terminal);

        first_error(result, cleanup)
    }

    async fn run_game_loop(
        &mut self,
        terminal: &mut Terminal<CrosstermBackend<Stderr>>,
    ) -> Result<()> {
        let mut event_stream = EventStream::new();
        let mut tick_timer = interval(self.config.tick_interval());
        let mut render_timer = interval(self.config.render_interval());

        loop {
            tokio::select! {
                // Handle terminal events
                maybe_event = event_stream.next() => {
                    if let Some(Ok(event)) = maybe_event {
                        self.handle_event(event);
                    }
                }

                // Game logic tick
                _ = tick_timer.tick() => {
                    self.update_game();
                }

                // Render frame
                _ = render_timer.tick() => {
                    self.metrics.update();
                    let list = self.state.draw_list();
                    terminal.draw(|frame| {
                        self.renderer.render(frame, &list, self.state.score, &self.metrics);
                    }).context("Failed to draw frame")?;
                }

                // Handle Ctrl+C
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

    fn handle_event(&mut self, event: Event) {
        if let Event::Key(key) = event {
            // Only process key press events, not release
            if key.kind != KeyEventKind::Press {
                return;
            }

            match self.input_handler.handle_key_event(key) {
                KeyAction::Quit => self.should_quit = true,
                action => action.apply(&mut self.snapshot),
            }
        }
    }

    /// One simulation step with the keys pressed since the previous one
    fn update_game(&mut self) -> TickReport {
        let previous_phase = self.state.phase;
        let previous_score = self.state.score;

        let report = self.engine.update(&mut self.state, &self.snapshot);
        self.snapshot.clear();

        match report.transition {
            Some((_, GamePhase::Running)) => self.metrics.on_game_start(),
            Some((_, GamePhase::GameOver)) => self.metrics.on_game_over(self.state.score),
            _ if report.restarted => {
                // The game abandoned mid-play never reached GameOver
                if previous_phase == GamePhase::Running {
                    self.metrics.on_game_over(previous_score);
                }
                self.metrics.on_game_start();
            }
            _ => {}
        }

        report
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

fn setup_terminal() -> Result<Terminal<CrosstermBackend<Stderr>>> {
    let mut stderr = stderr();
    execute!(stderr, EnterAlternateScreen).context("Failed to enter alternate screen")?;
    let backend = CrosstermBackend::new(stderr);
    let mut terminal = Terminal::new(backend).context("Failed to create terminal")?;
    terminal.hide_cursor().context("Failed to hide cursor")?;
    terminal.clear().context("Failed to clear terminal")?;
    Ok(terminal)
}

/// The game loop's error wins over a failed cleanup
fn first_error(result: Result<()>, cleanup: Result<()>) -> Result<()> {
    result.and(cleanup)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::game::Position;
    use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
    use tempfile::TempDir;

    fn key(code: KeyCode) -> Event {
        Event::Key(KeyEvent::new(code, KeyModifiers::NONE))
    }

    #[test]
    fn test_game_initialization() {
        let mode = HumanMode::new(GameConfig::default(), HumanConfig::default(), 1);
        assert_eq!(mode.state.phase, GamePhase::Paused);
        assert_eq!(mode.state.score, 0);
        assert!(mode.snapshot.is_empty());
    }

    #[test]
    fn test_keys_feed_next_tick() {
        let mut mode = HumanMode::new(GameConfig::default(), HumanConfig::default(), 1);
        mode.state.food = Position::new(0, 40);

        mode.handle_event(key(KeyCode::Char(' ')));
        let report = mode.update_game();
        assert_eq!(
            report.transition,
            Some((GamePhase::Paused, GamePhase::Running))
        );
        assert!(mode.metrics.is_running());
        assert!(mode.snapshot.is_empty());

        mode.handle_event(key(KeyCode::Down));
        mode.update_game();
        assert_eq!(mode.state.snake.head(), Position::new(2, 1));
    }

    #[test]
    fn test_game_over_updates_metrics() {
        let mut mode = HumanMode::new(GameConfig::default(), HumanConfig::default(), 1);
        mode.state.food = Position::new(0, 40);
        mode.handle_event(key(KeyCode::Char(' ')));
        mode.update_game();

        mode.handle_event(key(KeyCode::Up));
        mode.update_game();
        mode.update_game();

        assert_eq!(mode.state.phase, GamePhase::GameOver);
        assert_eq!(mode.metrics.games_played, 1);
        assert!(!mode.metrics.is_running());
    }

    #[test]
    fn test_restart_mid_game_records_score() {
        let mut mode = HumanMode::new(GameConfig::default(), HumanConfig::default(), 1);
        mode.state.food = Position::new(0, 40);
        mode.handle_event(key(KeyCode::Char(' ')));
        mode.update_game();
        mode.state.score = 7;

        mode.handle_event(key(KeyCode::Char('r')));
        let report = mode.update_game();
        assert!(!report.restarted);

        let report = mode.update_game();
        assert!(report.restarted);
        assert_eq!(mode.state.score, u32::from(report.ate_food));
        assert_eq!(mode.metrics.high_score, 7);
        assert_eq!(mode.metrics.games_played, 1);
        assert!(mode.metrics.is_running());
    }

    #[test]
    fn test_restart_after_game_over_counts_once() {
        let mut mode = HumanMode::new(GameConfig::default(), HumanConfig::default(), 1);
        mode.state.food = Position::new(0, 40);
        mode.handle_event(key(KeyCode::Char(' ')));
        mode.update_game();
        mode.handle_event(key(KeyCode::Up));
        mode.update_game();
        mode.update_game();
        assert_eq!(mode.state.phase, GamePhase::GameOver);

        mode.handle_event(key(KeyCode::Char('r')));
        mode.update_game();
        mode.handle_event(key(KeyCode::Char(' ')));
        let report = mode.update_game();

        assert!(report.restarted);
        assert_eq!(mode.state.phase, GamePhase::Running);
        assert_eq!(mode.metrics.games_played, 1);
        assert!(mode.metrics.is_running());
    }

    #[test]
    fn test_loop_error_wins_over_cleanup_error() {
        let result = first_error(
            Err(anyhow::anyhow!("Failed to draw frame")),
            Err(anyhow::anyhow!("Failed to disable raw mode")),
        );
        assert_eq!(result.unwrap_err().to_string(), "Failed to draw frame");

        let result = first_error(Ok(()), Err(anyhow::anyhow!("Failed to show cursor")));
        assert_eq!(result.unwrap_err().to_string(), "Failed to show cursor");

        assert!(first_error(Ok(()), Ok(())).is_ok());
    }

    #[test]
    fn test_quit_key() {
        let mut mode = HumanMode::new(GameConfig::default(), HumanConfig::default(), 1);
        mode.handle_event(key(KeyCode::Char('q')));
        assert!(mode.should_quit);
        assert!(mode.snapshot.is_empty());
    }

    #[test]
    fn test_intervals() {
        let config = HumanConfig {
            ticks_per_second: 20,
            fps: 0,
        };
        assert_eq!(config.tick_interval(), Duration::from_millis(50));
        assert_eq!(config.render_interval(), Duration::from_secs(1));
    }

    #[test]
    fn test_load_config() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("snake.json");
        std::fs::write(&path, r#"{ "ticks_per_second": 60 }"#).unwrap();

        let config = HumanConfig::load(&path).unwrap();
        assert_eq!(config.ticks_per_second, 60);
        assert_eq!(config.fps, 30);

        std::fs::write(&path, "not json").unwrap();
        assert!(HumanConfig::load(&path).is_err());
        assert!(HumanConfig::load(&temp_dir.path().join("missing.json")).is_err());
    }
}
