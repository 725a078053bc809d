use anyhow::{Result, ensure};
use ratatui::{
    layout::{Alignment, Size},
    style::{Color, Modifier, Style},
    text::Line,
    widgets::Paragraph,
};

/// Rows taken by the bordered grid beyond its cells
pub const GRID_BORDER_ROWS: u16 = 2;
/// Rows taken by the controls footer
pub const FOOTER_ROWS: u16 = 1;

const SCORE_COLOR: Color = Color::Rgb(0, 0, 255);

/// "Score: N" line centered above the grid.
///
/// Optional: a session without it is still playable.
#[derive(Debug, Clone)]
pub struct ScoreOverlay {
    style: Style,
}

impl ScoreOverlay {
    pub const ROWS: u16 = 1;

    /// Acquire the overlay for a terminal of the given size
    pub fn acquire(available: Size, grid_height: usize) -> Result<Self> {
        let needed = grid_height as u16 + GRID_BORDER_ROWS + FOOTER_ROWS + Self::ROWS;
        ensure!(
            available.height >= needed,
            "terminal has {} rows, score overlay needs {}",
            available.height,
            needed
        );

        Ok(Self {
            style: Style::default()
                .fg(SCORE_COLOR)
                .add_modifier(Modifier::BOLD),
        })
    }

    pub fn text(score: u32) -> String {
        format!("Score: {}", score)
    }

    pub fn widget(&self, score: u32) -> Paragraph<'static> {
        Paragraph::new(Line::styled(Self::text(score), self.style)).alignment(Alignment::Center)
    }
}
