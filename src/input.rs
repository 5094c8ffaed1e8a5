//! Button handling
//!
//! Turns raw "is pressed" samples into mode changes.

use embassy_time::{Duration, Instant};

use crate::mode::ModeId;

/// Source of raw button samples
pub trait ButtonInput {
    /// Whether the button is held down right now
    fn is_pressed(&mut self) -> bool;
}

/// Debounced mode selector
///
/// A press is accepted on the released → pressed edge, and only if more than
/// the debounce window has passed since the previous accepted press. Every
/// accepted press advances the mode by one step in the cycle.
#[derive(Debug, Clone)]
pub struct InputController {
    mode: ModeId,
    debounce: Duration,
    last_accepted: Option<Instant>,
    was_pressed: bool,
}

impl InputController {
    /// Start in the first mode with the button released
    pub const fn new(debounce: Duration) -> Self {
        Self {
            mode: ModeId::ColorfulSparkle,
            debounce,
            last_accepted: None,
            was_pressed: false,
        }
    }

    /// Currently selected mode
    pub const fn mode(&self) -> ModeId {
        self.mode
    }

    /// Feed one button sample
    ///
    /// Returns the new mode when the sample completes a debounced press.
    pub fn poll(&mut self, now: Instant, pressed: bool) -> Option<ModeId> {
        let edge = pressed && !self.was_pressed;
        self.was_pressed = pressed;
        if !edge || !self.window_elapsed(now) {
            return None;
        }

        self.last_accepted = Some(now);
        self.mode = self.mode.next();
        Some(self.mode)
    }

    fn window_elapsed(&self, now: Instant) -> bool {
        match self.last_accepted {
            Some(last) => now.saturating_duration_since(last) > self.debounce,
            None => true,
        }
    }
}
