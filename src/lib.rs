//! Grid Snake - a terminal snake game
//!
//! This library provides:
//! - Core game logic, free of I/O (game module)
//! - Keyboard input buffering (input module)
//! - TUI rendering (render module)
//! - Session statistics (metrics module)
//! - The interactive game loop (modes module)

pub mod game;
pub mod input;
pub mod metrics;
pub mod modes;
pub mod render;
