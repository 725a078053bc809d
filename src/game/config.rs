use anyhow::{Result, ensure};
use std::time::Duration;

/// How food is placed after it has been eaten
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum FoodPlacement {
    /// Any cell of the grid, including cells under the snake
    #[default]
    Uniform,
    /// Any cell not occupied by the snake
    AvoidSnake,
}

/// Configuration for the game
#[derive(Debug, Clone, PartialEq)]
pub struct GameConfig {
    /// Width of the display in pixels
    pub window_width: u32,
    /// Height of the display in pixels
    pub window_height: u32,
    /// Side of one grid cell in pixels
    pub cell_size: u32,
    /// Initial length of the snake
    pub initial_snake_length: usize,
    /// Score awarded per food eaten
    pub food_reward: u32,
    /// Time between two simulation ticks
    pub tick_interval: Duration,
    pub food_placement: FoodPlacement,
}

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            window_width: 640,
            window_height: 480,
            cell_size: 20,
            initial_snake_length: 1,
            food_reward: 10,
            tick_interval: Duration::from_millis(100),
            food_placement: FoodPlacement::Uniform,
        }
    }
}

impl GameConfig {
    /// Create a configuration for a grid of the given size in cells
    pub fn with_grid(width: usize, height: usize) -> Self {
        let defaults = Self::default();
        Self {
            window_width: width as u32 * defaults.cell_size,
            window_height: height as u32 * defaults.cell_size,
            ..defaults
        }
    }

    /// Create a small grid for testing
    pub fn small() -> Self {
        Self::with_grid(10, 10)
    }

    pub fn grid_width(&self) -> usize {
        (self.window_width / self.cell_size.max(1)) as usize
    }

    pub fn grid_height(&self) -> usize {
        (self.window_height / self.cell_size.max(1)) as usize
    }

    pub fn validate(&self) -> Result<()> {
        ensure!(self.cell_size > 0, "cell size must be positive");
        ensure!(
            self.grid_width() > 0 && self.grid_height() > 0,
            "window {}x{} holds no {}px cell",
            self.window_width,
            self.window_height,
            self.cell_size
        );
        ensure!(
            self.initial_snake_length > 0,
            "initial snake length must be at least 1"
        );
        ensure!(
            self.initial_snake_length <= self.grid_width(),
            "initial snake length {} does not fit a grid {} cells wide",
            self.initial_snake_length,
            self.grid_width()
        );
        Ok(())
    }
}
