//! Input contract
//!
//! Movement and jump are polled as held state; hitbox toggle, restart and
//! quit are one-shot key-down events drained once per loop iteration.

use std::collections::VecDeque;
use std::io;
use std::time::Duration;

use crate::sim::TickInput;

/// Everything the loop needs from input for one iteration
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct InputFrame {
    pub left: bool,
    pub right: bool,
    pub jump: bool,
    pub toggle_hitboxes: bool,
    pub restart: bool,
    pub quit: bool,
}

impl InputFrame {
    /// The part of the frame the simulation consumes
    pub fn tick_input(&self) -> TickInput {
        TickInput {
            left: self.left,
            right: self.right,
            jump: self.jump,
            restart: self.restart,
        }
    }
}

/// Source of per-iteration input
pub trait InputSource {
    fn poll(&mut self) -> io::Result<InputFrame>;
}

/// Replays a fixed list of frames, then reports quit
#[derive(Debug, Clone, Default)]
pub struct ScriptedInput {
    frames: VecDeque<InputFrame>,
}

impl ScriptedInput {
    pub fn new(frames: impl IntoIterator<Item = InputFrame>) -> Self {
        Self {
            frames: frames.into_iter().collect(),
        }
    }
}

impl InputSource for ScriptedInput {
    fn poll(&mut self) -> io::Result<InputFrame> {
        Ok(self.frames.pop_front().unwrap_or(InputFrame {
            quit: true,
            ..Default::default()
        }))
    }
}

/// Keys with held state
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HeldKey {
    Left,
    Right,
    Jump,
}

impl HeldKey {
    fn index(self) -> usize {
        match self {
            HeldKey::Left => 0,
            HeldKey::Right => 1,
            HeldKey::Jump => 2,
        }
    }
}

/// Tracks which movement keys are down.
///
/// With release events (`exact`) the state follows press/release. Without
/// them a key counts as held for `hold_window` after its latest press or
/// auto-repeat.
#[derive(Debug, Clone)]
pub struct KeyTracker {
    exact: bool,
    hold_window: Duration,
    down: [bool; 3],
    last_seen: [Option<Duration>; 3],
}

impl KeyTracker {
    pub fn new(exact: bool, hold_window: Duration) -> Self {
        Self {
            exact,
            hold_window,
            down: [false; 3],
            last_seen: [None; 3],
        }
    }

    /// Press or auto-repeat seen at `now`
    pub fn press(&mut self, key: HeldKey, now: Duration) {
        self.down[key.index()] = true;
        self.last_seen[key.index()] = Some(now);
    }

    pub fn release(&mut self, key: HeldKey) {
        self.down[key.index()] = false;
        self.last_seen[key.index()] = None;
    }

    pub fn is_held(&self, key: HeldKey, now: Duration) -> bool {
        if self.exact {
            return self.down[key.index()];
        }
        match self.last_seen[key.index()] {
            Some(seen) => now.saturating_sub(seen) <= self.hold_window,
            None => false,
        }
    }
}
