pub mod overlay;
pub mod renderer;
pub mod terminal;

pub use overlay::ScoreOverlay;
pub use renderer::{FrameLayout, Renderer};
pub use terminal::TerminalGuard;
