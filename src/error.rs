use core::fmt;

use crate::mode::ModeId;

/// Configuration rejected at startup
///
/// The frame loop never starts with an invalid configuration, so none of
/// these can surface mid-animation.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum ConfigError {
    /// The strip has no pixels
    EmptyStrip,
    /// More pixels than the compile-time capacity
    StripTooLong { led_count: usize, capacity: usize },
    /// Frame rate of zero or above one frame per millisecond
    InvalidFrameRate(u32),
    /// A mode configuration was rejected
    Mode { mode: ModeId, reason: ModeConfigError },
}

/// Reason a single mode configuration was rejected
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum ModeConfigError {
    /// Envelope shorter than two frames
    EnvelopeTooShort { steps: u16 },
    /// Envelope exponent is not a positive finite number
    InvalidExponent,
    /// A brightness or saturation level outside `0.0..=1.0`
    LevelOutOfRange { name: &'static str, value: f32 },
}

/// Check a `0.0..=1.0` level
pub(crate) fn check_level(name: &'static str, value: f32) -> Result<(), ModeConfigError> {
    if (0.0..=1.0).contains(&value) {
        Ok(())
    } else {
        Err(ModeConfigError::LevelOutOfRange { name, value })
    }
}

impl fmt::Display for ModeConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::EnvelopeTooShort { steps } => {
                write!(f, "envelope needs at least 2 steps, got {steps}")
            }
            Self::InvalidExponent => write!(f, "envelope exponent must be positive and finite"),
            Self::LevelOutOfRange { name, value } => {
                write!(f, "{name} must be within 0.0..=1.0, got {value}")
            }
        }
    }
}

impl fmt::Display for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::EmptyStrip => write!(f, "strip must have at least one pixel"),
            Self::StripTooLong {
                led_count,
                capacity,
            } => write!(
                f,
                "strip has {led_count} pixels but the engine holds at most {capacity}"
            ),
            Self::InvalidFrameRate(fps) => write!(f, "frame rate must be 1..=1000, got {fps}"),
            Self::Mode { mode, reason } => write!(f, "{} mode: {reason}", mode.as_str()),
        }
    }
}

impl core::error::Error for ModeConfigError {}

impl core::error::Error for ConfigError {}
