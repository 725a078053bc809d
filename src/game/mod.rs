//! Core game logic module for Snake
//!
//! This module contains all the game logic without any I/O or rendering dependencies.
//! The engine advances a `GameState` one tick at a time; the only randomness is food
//! placement, drawn from an injectable random source.

pub mod action;
pub mod config;
pub mod engine;
pub mod state;

// Re-export commonly used types
pub use action::{Action, Direction, PendingDirection};
pub use config::{FoodPlacement, GameConfig};
pub use engine::{GameEngine, StepInfo, StepResult};
pub use state::{CollisionType, GameState, Position, SessionStatus, Snake};
