//! Logical input state queried once per step.
//!
//! Terminal environments only produce key-press events (no key-release), so
//! each press holds its action for a few steps. Key repeat keeps refreshing
//! the hold while the key is down.

use super::constants::INPUT_HOLD_TICKS;

/// The three logical actions the simulation understands.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Action {
    MoveLeft,
    MoveRight,
    Jump,
}

impl Action {
    pub const ALL: [Action; 3] = [Action::MoveLeft, Action::MoveRight, Action::Jump];

    fn index(self) -> usize {
        match self {
            Action::MoveLeft => 0,
            Action::MoveRight => 1,
            Action::Jump => 2,
        }
    }

    pub fn name(self) -> &'static str {
        match self {
            Action::MoveLeft => "left",
            Action::MoveRight => "right",
            Action::Jump => "jump",
        }
    }
}

/// Pressed/released state for every [`Action`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct InputState {
    hold_ticks: [u32; 3],
    hold_duration: u32,
}

impl Default for InputState {
    fn default() -> Self {
        Self::new(INPUT_HOLD_TICKS)
    }
}

impl InputState {
    /// `hold_duration` is how many steps one press stays active (minimum 1).
    pub fn new(hold_duration: u32) -> Self {
        Self {
            hold_ticks: [0; 3],
            hold_duration: hold_duration.max(1),
        }
    }

    pub fn press(&mut self, action: Action) {
        self.hold_ticks[action.index()] = self.hold_duration;
    }

    pub fn release(&mut self, action: Action) {
        self.hold_ticks[action.index()] = 0;
    }

    /// Replace the whole state: exactly `actions` are pressed.
    pub fn set_pressed(&mut self, actions: &[Action]) {
        self.clear();
        for &action in actions {
            self.press(action);
        }
    }

    pub fn is_pressed(&self, action: Action) -> bool {
        self.hold_ticks[action.index()] > 0
    }

    /// Count one step off every held action.
    pub fn decay(&mut self) {
        for ticks in &mut self.hold_ticks {
            *ticks = ticks.saturating_sub(1);
        }
    }

    pub fn clear(&mut self) {
        self.hold_ticks = [0; 3];
    }
}
