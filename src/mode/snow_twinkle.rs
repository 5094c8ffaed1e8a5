//! Snow twinkle mode
//!
//! The whole strip rests at a very dim white; single pixels slowly swell to a
//! soft white and fade back down.

use super::Mode;
use crate::color::{Rgb, hsv_to_rgb};
use crate::envelope::{Envelope, TWINKLE_EXPONENT};
use crate::error::{ModeConfigError, check_level};
use crate::random::RandomSource;
use crate::state::SparkleState;

const DEFAULT_BASE_VALUE: f32 = 0.01;
const DEFAULT_TWINKLE_VALUE: f32 = 0.5;
// ~1.5 s at 40 FPS
const DEFAULT_STEPS: u16 = 60;
const DEFAULT_PROBABILITY: u8 = 210;

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SnowTwinkleConfig {
    /// Brightness of the resting white
    pub base_value: f32,
    /// Brightness at the top of a twinkle
    pub twinkle_value: f32,
    pub envelope: Envelope,
    /// Chance per frame (out of 256) to start a twinkle
    pub probability: u8,
}

impl Default for SnowTwinkleConfig {
    fn default() -> Self {
        Self {
            base_value: DEFAULT_BASE_VALUE,
            twinkle_value: DEFAULT_TWINKLE_VALUE,
            envelope: Envelope::new(DEFAULT_STEPS, TWINKLE_EXPONENT),
            probability: DEFAULT_PROBABILITY,
        }
    }
}

impl SnowTwinkleConfig {
    pub fn validate(&self) -> Result<(), ModeConfigError> {
        self.envelope.validate()?;
        check_level("base_value", self.base_value)?;
        check_level("twinkle_value", self.twinkle_value)
    }
}

#[derive(Debug, Clone)]
pub struct SnowTwinkleMode<const N: usize> {
    base_value: f32,
    twinkle_value: f32,
    sparkle: SparkleState<N>,
}

impl<const N: usize> SnowTwinkleMode<N> {
    pub fn new(count: usize, config: &SnowTwinkleConfig) -> Self {
        Self {
            base_value: config.base_value,
            twinkle_value: config.twinkle_value,
            sparkle: SparkleState::new(count, config.envelope, config.probability),
        }
    }

    /// Resting color shared by all pixels
    pub fn base_color(&self) -> Rgb {
        hsv_to_rgb(0.0, 0.0, self.base_value)
    }

    pub const fn sparkle(&self) -> &SparkleState<N> {
        &self.sparkle
    }

    pub fn sparkle_mut(&mut self) -> &mut SparkleState<N> {
        &mut self.sparkle
    }
}

impl<const N: usize> Mode for SnowTwinkleMode<N> {
    fn init<R: RandomSource>(&mut self, _rng: &mut R, leds: &mut [Rgb]) {
        self.sparkle.phases_mut().reset();
        leds.fill(self.base_color());
    }

    fn update<R: RandomSource>(&mut self, rng: &mut R, leds: &mut [Rgb]) {
        self.sparkle.maybe_trigger(rng);

        let count = self.sparkle.phases().len();
        for (index, led) in leds.iter_mut().enumerate().take(count) {
            let value = match self.sparkle.step(index) {
                Some(u) => self.base_value + (self.twinkle_value - self.base_value) * u,
                None => self.base_value,
            };
            // Zero saturation keeps all three channels equal
            *led = hsv_to_rgb(0.0, 0.0, value);
        }
    }
}
