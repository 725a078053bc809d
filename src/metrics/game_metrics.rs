use std::time::{Duration, Instant};

/// Per-process session statistics, shown in the footer and never persisted
pub struct GameMetrics {
    session_start: Instant,
    pub elapsed_time: Duration,
    pub high_score: u32,
    pub games_played: u32,
}

impl GameMetrics {
    pub fn new() -> Self {
        Self {
            session_start: Instant::now(),
            elapsed_time: Duration::ZERO,
            high_score: 0,
            games_played: 0,
        }
    }

    /// Refresh the session clock. The clock freezes once the session ends.
    pub fn update(&mut self, running: bool) {
        if running {
            self.elapsed_time = self.session_start.elapsed();
        }
    }

    pub fn on_game_start(&mut self) {
        self.session_start = Instant::now();
        self.elapsed_time = Duration::ZERO;
    }

    pub fn on_game_over(&mut self, final_score: u32) {
        self.games_played += 1;
        self.high_score = self.high_score.max(final_score);
    }

    /// Elapsed session time as mm:ss
    pub fn format_time(&self) -> String {
        let total_secs = self.elapsed_time.as_secs();
        format!("{:02}:{:02}", total_secs / 60, total_secs % 60)
    }
}

impl Default for GameMetrics {
    fn default() -> Self {
        Self::new()
    }
}
