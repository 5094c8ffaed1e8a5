//! Festive sparkle mode
//!
//! Repeating white, red, green pattern. Any pixel may sparkle toward bright
//! white and fade back to its own base color.

use core::iter;

use heapless::Vec;

use super::Mode;
use crate::color::{Rgb, lerp, white};
use crate::envelope::{Envelope, SPARKLE_EXPONENT};
use crate::error::ModeConfigError;
use crate::random::RandomSource;
use crate::state::SparkleState;

const DEFAULT_WHITE: u8 = 40;
const DEFAULT_RED: u8 = 25;
const DEFAULT_GREEN: u8 = 25;
const DEFAULT_SPARKLE: u8 = 220;
const DEFAULT_STEPS: u16 = 22;
// Same rate as the colorful sparkle mode
const DEFAULT_PROBABILITY: u8 = 40;

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FestiveSparkleConfig {
    /// Channel level of the white pixels
    pub white: u8,
    /// Red channel level of the red pixels
    pub red: u8,
    /// Green channel level of the green pixels
    pub green: u8,
    /// Channel level of the white a sparkle peaks at
    pub sparkle: u8,
    pub envelope: Envelope,
    /// Chance per frame (out of 256) to start a sparkle
    pub probability: u8,
}

impl Default for FestiveSparkleConfig {
    fn default() -> Self {
        Self {
            white: DEFAULT_WHITE,
            red: DEFAULT_RED,
            green: DEFAULT_GREEN,
            sparkle: DEFAULT_SPARKLE,
            envelope: Envelope::new(DEFAULT_STEPS, SPARKLE_EXPONENT),
            probability: DEFAULT_PROBABILITY,
        }
    }
}

impl FestiveSparkleConfig {
    pub fn validate(&self) -> Result<(), ModeConfigError> {
        self.envelope.validate()
    }

    /// Pattern color for a pixel position
    pub const fn pattern_color(&self, index: usize) -> Rgb {
        match index % 3 {
            0 => white(self.white),
            1 => Rgb {
                r: self.red,
                g: 0,
                b: 0,
            },
            _ => Rgb {
                r: 0,
                g: self.green,
                b: 0,
            },
        }
    }
}

#[derive(Debug, Clone)]
pub struct FestiveSparkleMode<const N: usize> {
    config: FestiveSparkleConfig,
    bases: Vec<Rgb, N>,
    sparkle: SparkleState<N>,
}

impl<const N: usize> FestiveSparkleMode<N> {
    pub fn new(count: usize, config: &FestiveSparkleConfig) -> Self {
        Self {
            config: *config,
            bases: iter::repeat_n(Rgb::default(), count.min(N)).collect(),
            sparkle: SparkleState::new(count, config.envelope, config.probability),
        }
    }

    /// Resting color of every pixel
    pub fn base_colors(&self) -> &[Rgb] {
        &self.bases
    }

    pub const fn sparkle(&self) -> &SparkleState<N> {
        &self.sparkle
    }

    pub fn sparkle_mut(&mut self) -> &mut SparkleState<N> {
        &mut self.sparkle
    }

    fn color_at(&self, base: Rgb, progress: Option<f32>) -> Rgb {
        let Some(u) = progress else {
            return base;
        };
        let peak = self.config.sparkle;
        Rgb {
            r: lerp(base.r, peak, u),
            g: lerp(base.g, peak, u),
            b: lerp(base.b, peak, u),
        }
    }
}

impl<const N: usize> Mode for FestiveSparkleMode<N> {
    fn init<R: RandomSource>(&mut self, _rng: &mut R, leds: &mut [Rgb]) {
        self.sparkle.phases_mut().reset();
        for (index, base) in self.bases.iter_mut().enumerate() {
            *base = self.config.pattern_color(index);
        }

        for (led, base) in leds.iter_mut().zip(&self.bases) {
            *led = *base;
        }
    }

    fn update<R: RandomSource>(&mut self, rng: &mut R, leds: &mut [Rgb]) {
        self.sparkle.maybe_trigger(rng);

        for (index, led) in leds.iter_mut().enumerate().take(self.bases.len()) {
            let progress = self.sparkle.step(index);
            *led = self.color_at(self.bases[index], progress);
        }
    }
}
