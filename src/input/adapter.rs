use crossterm::event::{Event, KeyEventKind};

use super::handler::{InputHandler, KeyAction};
use crate::game::{Action, Direction, PendingDirection};

/// Collects terminal events arriving between two ticks.
///
/// Directional keys are coalesced into one pending direction; quit and
/// restart requests become flags the game loop reads.
#[derive(Default)]
pub struct InputAdapter {
    handler: InputHandler,
    pending: PendingDirection,
    quit_requested: bool,
    restart_requested: bool,
}

impl InputAdapter {
    pub fn new() -> Self {
        Self::default()
    }

    /// Feed one terminal event. `current` is the snake's direction right now.
    pub fn handle_event(&mut self, event: &Event, current: Direction) {
        let Event::Key(key) = event else {
            return;
        };

        // Only process key press events, not release
        if key.kind != KeyEventKind::Press {
            return;
        }

        match self.handler.handle_key_event(*key) {
            KeyAction::Turn(direction) => {
                self.pending.offer(direction, current);
            }
            KeyAction::Restart => self.restart_requested = true,
            KeyAction::Quit => self.request_quit(),
            KeyAction::None => {}
        }
    }

    pub fn request_quit(&mut self) {
        self.quit_requested = true;
    }

    pub fn should_quit(&self) -> bool {
        self.quit_requested
    }

    /// Whether a restart was requested since the last call
    pub fn take_restart(&mut self) -> bool {
        std::mem::take(&mut self.restart_requested)
    }

    /// Drain the buffered direction into the action for the next tick
    pub fn take_action(&mut self) -> Action {
        self.pending.take()
    }

    /// Forget buffered input, e.g. when a new session starts
    pub fn clear(&mut self) {
        self.pending.clear();
        self.restart_requested = false;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crossterm::event::{KeyCode, KeyEvent, KeyEventState, KeyModifiers};

    fn key(code: KeyCode) -> Event {
        Event::Key(KeyEvent::new(code, KeyModifiers::NONE))
    }

    #[test]
    fn test_latest_direction_wins() {
        let mut input = InputAdapter::new();
        input.handle_event(&key(KeyCode::Up), Direction::Right);
        input.handle_event(&key(KeyCode::Down), Direction::Right);

        assert_eq!(input.take_action(), Action::Move(Direction::Down));
        assert_eq!(input.take_action(), Action::Continue);
    }

    #[test]
    fn test_reversal_does_not_clobber_pending() {
        let mut input = InputAdapter::new();
        input.handle_event(&key(KeyCode::Up), Direction::Right);
        input.handle_event(&key(KeyCode::Left), Direction::Right);

        assert_eq!(input.take_action(), Action::Move(Direction::Up));
    }

    #[test]
    fn test_lone_reversal_keeps_direction() {
        let mut input = InputAdapter::new();
        input.handle_event(&key(KeyCode::Left), Direction::Right);

        assert_eq!(input.take_action(), Action::Continue);
    }

    #[test]
    fn test_release_events_ignored() {
        let mut input = InputAdapter::new();
        let release = Event::Key(KeyEvent {
            code: KeyCode::Up,
            modifiers: KeyModifiers::NONE,
            kind: KeyEventKind::Release,
            state: KeyEventState::NONE,
        });
        input.handle_event(&release, Direction::Right);

        assert_eq!(input.take_action(), Action::Continue);
    }

    #[test]
    fn test_non_key_events_ignored() {
        let mut input = InputAdapter::new();
        input.handle_event(&Event::Resize(80, 24), Direction::Right);
        input.handle_event(&Event::FocusLost, Direction::Right);

        assert_eq!(input.take_action(), Action::Continue);
        assert!(!input.should_quit());
    }

    #[test]
    fn test_quit_and_restart_flags() {
        let mut input = InputAdapter::new();
        input.handle_event(&key(KeyCode::Char('r')), Direction::Right);
        assert!(input.take_restart());
        assert!(!input.take_restart());

        input.handle_event(&key(KeyCode::Esc), Direction::Right);
        assert!(input.should_quit());
    }

    #[test]
    fn test_clear_drops_pending() {
        let mut input = InputAdapter::new();
        input.handle_event(&key(KeyCode::Down), Direction::Right);
        input.clear();

        assert_eq!(input.take_action(), Action::Continue);
    }
}
