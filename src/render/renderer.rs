use ratatui::{
    Frame,
    layout::{Alignment, Constraint, Direction, Layout},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, BorderType, Borders, Paragraph},
};

use crate::game::{CellColor, DrawList};
use crate::metrics::GameMetrics;

/// Per-cell colors after replaying the cell instructions of a frame.
///
/// Indexed `[y][x]`; later instructions paint over earlier ones and cells
/// outside the grid are dropped.
pub fn cell_grid(list: &DrawList, width: usize, height: usize) -> Vec<Vec<Option<CellColor>>> {
    let mut grid = vec![vec![None; width]; height];

    for (position, color) in list.cells() {
        let (Ok(x), Ok(y)) = (usize::try_from(position.x), usize::try_from(position.y)) else {
            continue;
        };
        if let Some(cell) = grid.get_mut(y).and_then(|row| row.get_mut(x)) {
            *cell = Some(color);
        }
    }

    grid
}

pub struct Renderer {
    grid_width: usize,
    grid_height: usize,
}

impl Renderer {
    pub fn new(grid_width: usize, grid_height: usize) -> Self {
        Self {
            grid_width,
            grid_height,
        }
    }

    pub fn render(&self, frame: &mut Frame, list: &DrawList, score: u32, metrics: &GameMetrics) {
        let chunks = Layout::default()
            .direction(Direction::Vertical)
            .constraints([
                Constraint::Length(1), // Header
                Constraint::Min(0),    // Game area
                Constraint::Length(1), // Footer
            ])
            .split(frame.area());

        frame.render_widget(self.render_stats(score, metrics), chunks[0]);

        // Text prompts replace the board entirely
        let body = if list.texts().next().is_some() {
            self.render_prompt(list)
        } else {
            self.render_grid(list)
        };
        frame.render_widget(body, chunks[1]);

        frame.render_widget(self.render_controls(), chunks[2]);
    }

    fn render_grid(&self, list: &DrawList) -> Paragraph<'static> {
        let lines: Vec<Line> = cell_grid(list, self.grid_width, self.grid_height)
            .into_iter()
            .map(|row| {
                let spans: Vec<Span> = row
                    .into_iter()
                    .map(|cell| match cell {
                        Some(CellColor::Snake) => {
                            Span::styled("██", Style::default().fg(Color::Green))
                        }
                        Some(CellColor::Food) => {
                            Span::styled("██", Style::default().fg(Color::Red))
                        }
                        None => Span::styled("· ", Style::default().fg(Color::DarkGray)),
                    })
                    .collect();
                Line::from(spans)
            })
            .collect();

        Paragraph::new(lines)
            .block(
                Block::default()
                    .borders(Borders::ALL)
                    .border_type(BorderType::Double)
                    .border_style(Style::default().fg(Color::White))
                    .title(" Snake "),
            )
            .alignment(Alignment::Center)
    }

    fn render_prompt(&self, list: &DrawList) -> Paragraph<'static> {
        let mut lines = vec![Line::from("")];
        for text in list.texts() {
            for line in text.lines() {
                lines.push(Line::from(Span::styled(
                    line.to_string(),
                    Style::default()
                        .fg(Color::White)
                        .add_modifier(Modifier::BOLD),
                )));
            }
        }

        Paragraph::new(lines).alignment(Alignment::Center).block(
            Block::default()
                .borders(Borders::ALL)
                .border_style(Style::default().fg(Color::Yellow)),
        )
    }

    fn render_stats(&self, score: u32, metrics: &GameMetrics) -> Paragraph<'static> {
        let text = vec![Line::from(vec![
            Span::styled("Score: ", Style::default().fg(Color::Yellow)),
            Span::styled(
                score.to_string(),
                Style::default()
                    .fg(Color::White)
                    .add_modifier(Modifier::BOLD),
            ),
            Span::raw("    "),
            Span::styled("Best: ", Style::default().fg(Color::Yellow)),
            Span::styled(
                metrics.high_score.to_string(),
                Style::default().fg(Color::White),
            ),
            Span::raw("    "),
            Span::styled("Time: ", Style::default().fg(Color::Yellow)),
            Span::styled(metrics.format_time(), Style::default().fg(Color::White)),
        ])];

        Paragraph::new(text).alignment(Alignment::Center)
    }

    fn render_controls(&self) -> Paragraph<'static> {
        let text = vec![Line::from(vec![
            Span::styled("↑↓←→", Style::default().fg(Color::Cyan)),
            Span::raw(" or "),
            Span::styled("WASD", Style::default().fg(Color::Cyan)),
            Span::raw(" to move | "),
            Span::styled("Space", Style::default().fg(Color::Green)),
            Span::raw(" to start | "),
            Span::styled("R", Style::default().fg(Color::Green)),
            Span::raw(" to restart | "),
            Span::styled("Q", Style::default().fg(Color::Red)),
            Span::raw(" to quit"),
        ])];

        Paragraph::new(text).alignment(Alignment::Center)
    }
}
