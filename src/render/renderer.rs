use ratatui::{
    Frame,
    layout::{Alignment, Constraint, Flex, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, BorderType, Borders, Paragraph},
};

use super::overlay::{FOOTER_ROWS, GRID_BORDER_ROWS, ScoreOverlay};
use crate::game::{GameState, Position};
use crate::metrics::GameMetrics;

const BACKGROUND: Color = Color::Rgb(0, 2, 0);
const SNAKE_COLOR: Color = Color::Rgb(25, 255, 255);
const FOOD_COLOR: Color = Color::Rgb(255, 0, 0);

/// Terminal columns used for one grid cell, so cells look square
pub const CELL_COLUMNS: u16 = 2;
const FILLED_CELL: &str = "██";
const EMPTY_CELL: &str = "  ";

/// Screen regions of one frame
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FrameLayout {
    pub header: Rect,
    pub grid: Rect,
    pub footer: Rect,
}

impl FrameLayout {
    /// Top-left screen cell of a grid position, inside the border
    pub fn cell_origin(&self, pos: Position) -> (u16, u16) {
        (
            self.grid.x + 1 + pos.x as u16 * CELL_COLUMNS,
            self.grid.y + 1 + pos.y as u16,
        )
    }
}

/// Draws game snapshots. Holds no game state of its own.
pub struct Renderer {
    overlay: Option<ScoreOverlay>,
}

impl Renderer {
    pub fn new(overlay: Option<ScoreOverlay>) -> Self {
        Self { overlay }
    }

    pub fn has_overlay(&self) -> bool {
        self.overlay.is_some()
    }

    pub fn layout(&self, area: Rect, state: &GameState) -> FrameLayout {
        let header_rows = if self.overlay.is_some() {
            ScoreOverlay::ROWS
        } else {
            0
        };
        let grid_rows = state.grid_height as u16 + GRID_BORDER_ROWS;
        let grid_columns = state.grid_width as u16 * CELL_COLUMNS + 2;

        let [header, grid_row, footer, _] = Layout::vertical([
            Constraint::Length(header_rows),
            Constraint::Length(grid_rows),
            Constraint::Length(FOOTER_ROWS),
            Constraint::Min(0),
        ])
        .areas(area);

        let [grid] = Layout::horizontal([Constraint::Length(grid_columns)])
            .flex(Flex::Center)
            .areas(grid_row);

        FrameLayout {
            header,
            grid,
            footer,
        }
    }

    pub fn render(&self, frame: &mut Frame, state: &GameState, metrics: &GameMetrics) {
        let layout = self.layout(frame.area(), state);

        if let Some(overlay) = &self.overlay {
            frame.render_widget(overlay.widget(state.score), layout.header);
        }

        if state.is_running() {
            frame.render_widget(self.render_grid(state), layout.grid);
        } else {
            frame.render_widget(self.render_game_over(state), layout.grid);
        }

        frame.render_widget(self.render_footer(metrics), layout.footer);
    }

    fn render_grid(&self, state: &GameState) -> Paragraph<'_> {
        let empty = Style::default().bg(BACKGROUND);
        let snake = Style::default().fg(SNAKE_COLOR).bg(BACKGROUND);
        let food = Style::default().fg(FOOD_COLOR).bg(BACKGROUND);

        let lines: Vec<Line> = (0..state.grid_height)
            .map(|y| {
                let spans: Vec<Span> = (0..state.grid_width)
                    .map(|x| {
                        let pos = Position::new(x as i32, y as i32);
                        // Food is drawn over the snake
                        if pos == state.food {
                            Span::styled(FILLED_CELL, food)
                        } else if state.is_occupied_by_snake(pos) {
                            Span::styled(FILLED_CELL, snake)
                        } else {
                            Span::styled(EMPTY_CELL, empty)
                        }
                    })
                    .collect();
                Line::from(spans)
            })
            .collect();

        Paragraph::new(lines).block(
            Block::default()
                .borders(Borders::ALL)
                .border_type(BorderType::Double)
                .border_style(Style::default().fg(Color::White))
                .title(" Snake "),
        )
    }

    fn render_game_over(&self, state: &GameState) -> Paragraph<'_> {
        let text = vec![
            Line::from(""),
            Line::from(vec![Span::styled(
                "GAME OVER",
                Style::default().fg(Color::Red).add_modifier(Modifier::BOLD),
            )]),
            Line::from(""),
            Line::from(vec![
                Span::styled("Final Score: ", Style::default().fg(Color::Yellow)),
                Span::styled(
                    state.score.to_string(),
                    Style::default()
                        .fg(Color::White)
                        .add_modifier(Modifier::BOLD),
                ),
            ]),
            Line::from(vec![
                Span::styled("Length: ", Style::default().fg(Color::Yellow)),
                Span::styled(
                    state.snake.len().to_string(),
                    Style::default().fg(Color::White),
                ),
            ]),
            Line::from(""),
            Line::from(vec![
                Span::styled("Press ", Style::default().fg(Color::Gray)),
                Span::styled(
                    "R",
                    Style::default()
                        .fg(Color::Green)
                        .add_modifier(Modifier::BOLD),
                ),
                Span::styled(" to restart or ", Style::default().fg(Color::Gray)),
                Span::styled(
                    "Q",
                    Style::default().fg(Color::Red).add_modifier(Modifier::BOLD),
                ),
                Span::styled(" to quit", Style::default().fg(Color::Gray)),
            ]),
        ];

        Paragraph::new(text).alignment(Alignment::Center).block(
            Block::default()
                .borders(Borders::ALL)
                .border_style(Style::default().fg(Color::Red)),
        )
    }

    fn render_footer(&self, metrics: &GameMetrics) -> Paragraph<'_> {
        let text = vec![Line::from(vec![
            Span::styled("Time ", Style::default().fg(Color::Yellow)),
            Span::raw(metrics.format_time()),
            Span::styled("  Best ", Style::default().fg(Color::Yellow)),
            Span::raw(metrics.high_score.to_string()),
            Span::raw("  |  "),
            Span::styled("↑↓←→", Style::default().fg(Color::Cyan)),
            Span::raw("/"),
            Span::styled("WASD", Style::default().fg(Color::Cyan)),
            Span::raw(" move  "),
            Span::styled("Q", Style::default().fg(Color::Red)),
            Span::raw(" quit"),
        ])];

        Paragraph::new(text).alignment(Alignment::Center)
    }
}
