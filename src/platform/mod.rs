//! Platform abstraction layer
//!
//! Handles the outside world for the game loop:
//! - Input events and held keys
//! - Frame pacing
//! - Terminal presentation

pub mod input;
pub mod pacer;
pub mod terminal;

pub use input::{InputFrame, InputSource, KeyTracker, ScriptedInput};
pub use pacer::FramePacer;
pub use terminal::{TerminalInput, TerminalSession, TerminalSurface};
