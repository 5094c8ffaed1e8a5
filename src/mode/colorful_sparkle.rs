//! Colorful sparkle mode
//!
//! Every pixel glows dimly in its own random, fully saturated hue. A sparkle
//! desaturates the pixel toward white while raising its brightness, then lets
//! it settle back.

use core::iter;

use heapless::Vec;

use super::Mode;
use crate::color::{HsvF, Rgb};
use crate::envelope::{Envelope, SPARKLE_EXPONENT};
use crate::error::{ModeConfigError, check_level};
use crate::random::RandomSource;
use crate::state::SparkleState;

const DEFAULT_BASE_SATURATION: f32 = 1.0;
const DEFAULT_SPARKLE_SATURATION: f32 = 0.0;
const DEFAULT_BASE_VALUE: f32 = 0.06;
const DEFAULT_SPARKLE_VALUE: f32 = 0.95;
const DEFAULT_STEPS: u16 = 22;
const DEFAULT_PROBABILITY: u8 = 40;

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ColorfulSparkleConfig {
    /// Saturation of the resting glow
    pub base_saturation: f32,
    /// Saturation at the top of a sparkle, 0 is pure white
    pub sparkle_saturation: f32,
    /// Brightness of the resting glow
    pub base_value: f32,
    /// Brightness at the top of a sparkle
    pub sparkle_value: f32,
    pub envelope: Envelope,
    /// Chance per frame (out of 256) to start a sparkle
    pub probability: u8,
}

impl Default for ColorfulSparkleConfig {
    fn default() -> Self {
        Self {
            base_saturation: DEFAULT_BASE_SATURATION,
            sparkle_saturation: DEFAULT_SPARKLE_SATURATION,
            base_value: DEFAULT_BASE_VALUE,
            sparkle_value: DEFAULT_SPARKLE_VALUE,
            envelope: Envelope::new(DEFAULT_STEPS, SPARKLE_EXPONENT),
            probability: DEFAULT_PROBABILITY,
        }
    }
}

impl ColorfulSparkleConfig {
    pub fn validate(&self) -> Result<(), ModeConfigError> {
        self.envelope.validate()?;
        check_level("base_saturation", self.base_saturation)?;
        check_level("sparkle_saturation", self.sparkle_saturation)?;
        check_level("base_value", self.base_value)?;
        check_level("sparkle_value", self.sparkle_value)
    }
}

/// Saturation and brightness of one end of the sparkle
#[derive(Debug, Clone, Copy)]
struct HsvLevels {
    sat: f32,
    val: f32,
}

#[derive(Debug, Clone)]
pub struct ColorfulSparkleMode<const N: usize> {
    base: HsvLevels,
    peak: HsvLevels,
    hues: Vec<f32, N>,
    sparkle: SparkleState<N>,
}

impl<const N: usize> ColorfulSparkleMode<N> {
    pub fn new(count: usize, config: &ColorfulSparkleConfig) -> Self {
        Self {
            hues: iter::repeat_n(0.0, count.min(N)).collect(),
            base: HsvLevels {
                sat: config.base_saturation,
                val: config.base_value,
            },
            peak: HsvLevels {
                sat: config.sparkle_saturation,
                val: config.sparkle_value,
            },
            sparkle: SparkleState::new(count, config.envelope, config.probability),
        }
    }

    /// Base hue of every pixel
    pub fn hues(&self) -> &[f32] {
        &self.hues
    }

    /// Resting color of a pixel
    pub fn base_color(&self, index: usize) -> Option<Rgb> {
        let hue = *self.hues.get(index)?;
        Some(self.color_at(hue, None).to_rgb())
    }

    pub const fn sparkle(&self) -> &SparkleState<N> {
        &self.sparkle
    }

    pub fn sparkle_mut(&mut self) -> &mut SparkleState<N> {
        &mut self.sparkle
    }

    fn color_at(&self, hue: f32, progress: Option<f32>) -> HsvF {
        match progress {
            Some(u) => HsvF::new(
                hue,
                blend(self.base.sat, self.peak.sat, u),
                blend(self.base.val, self.peak.val, u),
            ),
            None => HsvF::new(hue, self.base.sat, self.base.val),
        }
    }
}

impl<const N: usize> Mode for ColorfulSparkleMode<N> {
    fn init<R: RandomSource>(&mut self, rng: &mut R, leds: &mut [Rgb]) {
        self.sparkle.phases_mut().reset();
        for hue in &mut self.hues {
            *hue = rng.next_unit();
        }

        for (led, hue) in leds.iter_mut().zip(&self.hues) {
            *led = self.color_at(*hue, None).to_rgb();
        }
    }

    fn update<R: RandomSource>(&mut self, rng: &mut R, leds: &mut [Rgb]) {
        self.sparkle.maybe_trigger(rng);

        for (index, led) in leds.iter_mut().enumerate().take(self.hues.len()) {
            let progress = self.sparkle.step(index);
            *led = self.color_at(self.hues[index], progress).to_rgb();
        }
    }
}

fn blend(from: f32, to: f32, u: f32) -> f32 {
    from + (to - from) * u
}
