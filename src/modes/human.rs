use anyhow::{Context, Result};
use crossterm::event::EventStream;
use futures::StreamExt;
use ratatui::layout::Size;
use tokio::time::{Instant, MissedTickBehavior, interval_at};
use tracing::{debug, info, warn};

use crate::game::{GameConfig, GameEngine, GameState};
use crate::input::InputAdapter;
use crate::metrics::GameMetrics;
use crate::render::{Renderer, ScoreOverlay, TerminalGuard, terminal::TuiTerminal};

/// Keyboard-driven play: input drain, advance, render, once per tick
pub struct HumanMode {
    engine: GameEngine,
    state: GameState,
    metrics: GameMetrics,
    renderer: Renderer,
    input: InputAdapter,
    seed: u64,
}

impl HumanMode {
    pub fn new(config: GameConfig, seed: u64) -> Self {
        let mut engine = GameEngine::with_seed(config, seed);
        let state = engine.reset();

        Self {
            engine,
            state,
            metrics: GameMetrics::new(),
            renderer: Renderer::new(None),
            input: InputAdapter::new(),
            seed,
        }
    }

    pub async fn run(&mut self) -> Result<()> {
        // Check before the alternate screen hides the diagnostic
        self.renderer = Renderer::new(self.load_overlay());

        let mut guard = TerminalGuard::acquire()?;
        info!(
            seed = self.seed,
            grid_width = self.state.grid_width,
            grid_height = self.state.grid_height,
            score_overlay = self.renderer.has_overlay(),
            "session started"
        );

        self.run_game_loop(guard.terminal_mut()).await
    }

    fn load_overlay(&self) -> Option<ScoreOverlay> {
        let acquired = crossterm::terminal::size()
            .context("Failed to query terminal size")
            .and_then(|(width, height)| {
                ScoreOverlay::acquire(Size { width, height }, self.state.grid_height)
            });

        match acquired {
            Ok(overlay) => Some(overlay),
            Err(err) => {
                warn!("score overlay unavailable, continuing without it: {err:#}");
                None
            }
        }
    }

    async fn run_game_loop(&mut self, terminal: &mut TuiTerminal) -> Result<()> {
        let mut event_stream = EventStream::new();

        let tick_period = self.engine.config().tick_interval;
        let mut tick_timer = interval_at(Instant::now() + tick_period, tick_period);
        tick_timer.set_missed_tick_behavior(MissedTickBehavior::Delay);

        self.draw(terminal)?;

        loop {
            tokio::select! {
                // Events only fill the input buffer
                maybe_event = event_stream.next() => {
                    match maybe_event {
                        Some(Ok(event)) => {
                            self.input.handle_event(&event, self.state.snake.direction);
                        }
                        Some(Err(err)) => return Err(err).context("Failed to read terminal event"),
                        None => self.input.request_quit(),
                    }
                }

                _ = tick_timer.tick() => {
                    self.tick();
                    self.draw(terminal)?;
                }

                _ = tokio::signal::ctrl_c() => {
                    self.input.request_quit();
                }
            }

            if self.input.should_quit() {
                break;
            }
        }

        info!(score = self.state.score, steps = self.state.steps, "quit");
        Ok(())
    }

    fn tick(&mut self) {
        if !self.state.is_running() {
            if self.input.take_restart() {
                self.reset_game();
            }
            return;
        }
        // Restart only means something once the session is over
        self.input.take_restart();

        let action = self.input.take_action();
        let result = self.engine.step(&mut self.state, action);
        self.metrics.update(self.state.is_running());

        if result.info.ate_food {
            debug!(
                score = self.state.score,
                length = self.state.snake.len(),
                "food eaten"
            );
        }

        if result.terminated {
            self.metrics.on_game_over(self.state.score);
            info!(
                score = self.state.score,
                steps = self.state.steps,
                collision = ?result.info.collision,
                "session ended"
            );
        }
    }

    fn draw(&self, terminal: &mut TuiTerminal) -> Result<()> {
        terminal
            .draw(|frame| self.renderer.render(frame, &self.state, &self.metrics))
            .context("Failed to draw frame")?;
        Ok(())
    }

    fn reset_game(&mut self) {
        self.state = self.engine.reset();
        self.metrics.on_game_start();
        self.input.clear();
        info!("session restarted");
    }
}
