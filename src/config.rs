//! Startup configuration
//!
//! Everything is fixed once the frame loop starts; there is no runtime
//! reconfiguration.

use embassy_time::Duration;

use crate::error::ConfigError;
use crate::filter::FilterProcessorConfig;
use crate::mode::ModesConfig;

/// Default strip length (pebble strand)
pub const DEFAULT_LED_COUNT: usize = 200;

/// Default target frame rate
pub const DEFAULT_FPS: u32 = 40;

/// Default button debounce window
pub const DEFAULT_DEBOUNCE: Duration = Duration::from_millis(250);

const MAX_FPS: u32 = 1000;

/// Configuration for the mode engine and frame loop
#[derive(Debug, Clone)]
pub struct EngineConfig {
    /// Number of pixels on the strip
    pub led_count: usize,
    /// Target frame rate
    pub fps: u32,
    /// Minimum time between two accepted button presses
    pub debounce: Duration,
    pub modes: ModesConfig,
    pub filters: FilterProcessorConfig,
}

impl Default for EngineConfig {
    fn default() -> Self {
        Self {
            led_count: DEFAULT_LED_COUNT,
            fps: DEFAULT_FPS,
            debounce: DEFAULT_DEBOUNCE,
            modes: ModesConfig::default(),
            filters: FilterProcessorConfig::default(),
        }
    }
}

impl EngineConfig {
    /// Config for a strip of `led_count` pixels with default animation settings
    #[must_use]
    pub fn with_led_count(mut self, led_count: usize) -> Self {
        self.led_count = led_count;
        self
    }

    /// Check the configuration against an engine holding `capacity` pixels
    pub fn validate(&self, capacity: usize) -> Result<(), ConfigError> {
        if self.led_count == 0 {
            return Err(ConfigError::EmptyStrip);
        }
        if self.led_count > capacity {
            return Err(ConfigError::StripTooLong {
                led_count: self.led_count,
                capacity,
            });
        }
        if self.fps == 0 || self.fps > MAX_FPS {
            return Err(ConfigError::InvalidFrameRate(self.fps));
        }
        self.modes.validate()
    }

    /// Time budget of one frame
    pub fn frame_duration(&self) -> Duration {
        Duration::from_millis(1000 / u64::from(self.fps.max(1)))
    }
}
