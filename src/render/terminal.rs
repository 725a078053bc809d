use anyhow::{Context, Result};
use crossterm::{
    cursor::Show,
    execute,
    terminal::{EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode},
};
use ratatui::{Terminal, backend::CrosstermBackend};
use std::io::{self, Stdout, Write};

pub type TuiTerminal = Terminal<CrosstermBackend<Stdout>>;

/// Owns the terminal in raw mode on the alternate screen.
///
/// Dropping the guard restores the terminal, so every exit path from the
/// game loop (normal end, error, panic unwind) releases it exactly once.
pub struct TerminalGuard {
    terminal: TuiTerminal,
}

impl TerminalGuard {
    pub fn acquire() -> Result<Self> {
        enable_raw_mode().context("Failed to enable raw mode")?;

        let mut guard = match Self::enter() {
            Ok(guard) => guard,
            Err(err) => {
                // No guard exists yet to do this on drop
                restore(&mut io::stdout());
                return Err(err);
            }
        };

        guard
            .terminal
            .hide_cursor()
            .context("Failed to hide cursor")?;
        guard.terminal.clear().context("Failed to clear terminal")?;
        Ok(guard)
    }

    fn enter() -> Result<Self> {
        let mut stdout = io::stdout();
        execute!(stdout, EnterAlternateScreen).context("Failed to enter alternate screen")?;
        let terminal =
            Terminal::new(CrosstermBackend::new(stdout)).context("Failed to create terminal")?;
        Ok(Self { terminal })
    }

    pub fn terminal_mut(&mut self) -> &mut TuiTerminal {
        &mut self.terminal
    }
}

impl Drop for TerminalGuard {
    fn drop(&mut self) {
        restore(self.terminal.backend_mut());
    }
}

fn restore<W: Write>(out: &mut W) {
    if let Err(err) = disable_raw_mode() {
        tracing::error!(?err, "failed to disable raw mode");
    }
    if let Err(err) = execute!(out, LeaveAlternateScreen, Show) {
        tracing::error!(?err, "failed to leave alternate screen");
    }
}
