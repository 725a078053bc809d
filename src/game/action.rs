/// Direction the snake can move
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Direction {
    Up,
    Down,
    Left,
    Right,
}

impl Direction {
    /// Returns true if turning from self to other would be a 180-degree turn
    pub fn is_opposite(&self, other: Direction) -> bool {
        self.opposite() == other
    }

    /// The direction pointing the other way
    pub fn opposite(&self) -> Direction {
        match self {
            Direction::Up => Direction::Down,
            Direction::Down => Direction::Up,
            Direction::Left => Direction::Right,
            Direction::Right => Direction::Left,
        }
    }

    /// Returns the delta (dx, dy) for moving in this direction
    pub fn delta(&self) -> (i32, i32) {
        match self {
            Direction::Up => (0, -1),
            Direction::Down => (0, 1),
            Direction::Left => (-1, 0),
            Direction::Right => (1, 0),
        }
    }

    /// Direction actually applied in a tick: a reversal is ignored
    pub fn resolve(self, pending: Direction) -> Direction {
        if self.is_opposite(pending) {
            self
        } else {
            pending
        }
    }
}

/// Input consumed by a single tick
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Action {
    /// Turn towards a specific direction
    Move(Direction),
    /// Keep the current direction
    Continue,
}

impl From<Direction> for Action {
    fn from(direction: Direction) -> Self {
        Action::Move(direction)
    }
}

impl From<Option<Direction>> for Action {
    fn from(direction: Option<Direction>) -> Self {
        direction.map(Action::Move).unwrap_or(Action::Continue)
    }
}

/// Direction change waiting for the next tick.
///
/// Several key presses can arrive between two ticks. The latest valid one
/// wins; a reversal of the current direction is dropped and does not
/// overwrite a direction that is still pending.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct PendingDirection {
    value: Option<Direction>,
}

impl PendingDirection {
    pub fn new() -> Self {
        Self::default()
    }

    /// Offer a new direction given the snake's current direction.
    /// Returns whether it was accepted.
    pub fn offer(&mut self, direction: Direction, current: Direction) -> bool {
        if current.is_opposite(direction) {
            return false;
        }
        self.value = Some(direction);
        true
    }

    pub fn peek(&self) -> Option<Direction> {
        self.value
    }

    /// Take the buffered direction as the action for this tick
    pub fn take(&mut self) -> Action {
        self.value.take().into()
    }

    pub fn clear(&mut self) {
        self.value = None;
    }
}
