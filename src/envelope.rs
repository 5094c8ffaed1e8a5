//! Sparkle envelope
//!
//! Triangular 0 → 1 → 0 curve over a fixed number of frames, shaped by an
//! exponent. Exponents above 1 linger near zero, which gives a soft attack.

use crate::error::ModeConfigError;

/// Phase value of a pixel that is not animating
pub const IDLE: u16 = 0;

/// Default shaping exponent for sparkles
pub const SPARKLE_EXPONENT: f32 = 1.5;

/// Default shaping exponent for the gentler snow twinkle
pub const TWINKLE_EXPONENT: f32 = 1.3;

/// Timed brightness curve driven by a per-pixel phase counter
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Envelope {
    /// Length of the animation in frames
    pub steps: u16,
    /// Shaping exponent applied to the triangular ramp
    pub exponent: f32,
}

impl Envelope {
    pub const fn new(steps: u16, exponent: f32) -> Self {
        Self { steps, exponent }
    }

    /// Reject envelopes the per-frame math cannot handle
    pub fn validate(&self) -> Result<(), ModeConfigError> {
        if self.steps < 2 {
            return Err(ModeConfigError::EnvelopeTooShort { steps: self.steps });
        }
        if !self.exponent.is_finite() || self.exponent <= 0.0 {
            return Err(ModeConfigError::InvalidExponent);
        }
        Ok(())
    }

    /// Half of the envelope length, the phase of the peak
    pub const fn half(&self) -> u16 {
        self.steps / 2
    }

    /// Shaped progress `u` in `0.0..=1.0` for an active phase
    ///
    /// Rises for `phase <= steps / 2`, falls afterwards.
    pub fn progress(&self, phase: u16) -> f32 {
        let half = f32::from(self.half().max(1));
        let ramp = if phase <= self.half() {
            f32::from(phase) / half
        } else {
            f32::from(self.steps.saturating_sub(phase)) / half
        };
        libm::powf(ramp.clamp(0.0, 1.0), self.exponent)
    }

    /// Next phase, wrapping to [`IDLE`] once it passes `steps`
    pub const fn advance(&self, phase: u16) -> u16 {
        match phase.checked_add(1) {
            Some(next) if next <= self.steps => next,
            _ => IDLE,
        }
    }
}
