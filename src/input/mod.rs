pub mod adapter;
pub mod handler;

pub use adapter::InputAdapter;
pub use handler::{InputHandler, KeyAction};
