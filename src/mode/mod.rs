//! Mode system with compile-time known mode variants
//!
//! All modes are stored in an enum to avoid dynamic dispatch. Each mode
//! implements the [`Mode`] trait and owns its own per-pixel state, which is
//! rebuilt every time the mode is entered.

mod colorful_sparkle;
mod festive_sparkle;
mod off;
mod snow_twinkle;

pub use colorful_sparkle::{ColorfulSparkleConfig, ColorfulSparkleMode};
pub use festive_sparkle::{FestiveSparkleConfig, FestiveSparkleMode};
pub use off::OffMode;
pub use snow_twinkle::{SnowTwinkleConfig, SnowTwinkleMode};

use crate::color::Rgb;
use crate::error::{ConfigError, ModeConfigError};
use crate::random::RandomSource;
use crate::state::SparkleState;

const MODE_NAME_COLORFUL_SPARKLE: &str = "colorful_sparkle";
const MODE_NAME_FESTIVE_SPARKLE: &str = "festive_sparkle";
const MODE_NAME_SNOW_TWINKLE: &str = "snow_twinkle";
const MODE_NAME_OFF: &str = "off";

const MODE_ID_COLORFUL_SPARKLE: u8 = 1;
const MODE_ID_FESTIVE_SPARKLE: u8 = 2;
const MODE_ID_SNOW_TWINKLE: u8 = 3;
const MODE_ID_OFF: u8 = 4;

pub trait Mode {
    /// Reset state and render the resting frame of the mode
    ///
    /// Called once on every entry into the mode.
    fn init<R: RandomSource>(&mut self, rng: &mut R, leds: &mut [Rgb]);

    /// Render a single animation frame
    fn update<R: RandomSource>(&mut self, rng: &mut R, leds: &mut [Rgb]);
}

/// Known modes, in button cycling order
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[repr(u8)]
pub enum ModeId {
    /// Dim saturated colors with white sparkles
    ColorfulSparkle = MODE_ID_COLORFUL_SPARKLE,
    /// White, red and green pattern with sparkles
    FestiveSparkle = MODE_ID_FESTIVE_SPARKLE,
    /// Dim white with slow twinkles
    SnowTwinkle = MODE_ID_SNOW_TWINKLE,
    /// All pixels dark
    Off = MODE_ID_OFF,
}

impl ModeId {
    /// Next mode in the cycle, wrapping from `Off` back to the start
    pub const fn next(self) -> Self {
        match self {
            Self::ColorfulSparkle => Self::FestiveSparkle,
            Self::FestiveSparkle => Self::SnowTwinkle,
            Self::SnowTwinkle => Self::Off,
            Self::Off => Self::ColorfulSparkle,
        }
    }

    pub fn from_raw(value: u8) -> Option<Self> {
        Some(match value {
            MODE_ID_COLORFUL_SPARKLE => Self::ColorfulSparkle,
            MODE_ID_FESTIVE_SPARKLE => Self::FestiveSparkle,
            MODE_ID_SNOW_TWINKLE => Self::SnowTwinkle,
            MODE_ID_OFF => Self::Off,
            _ => return None,
        })
    }

    pub const fn as_str(self) -> &'static str {
        match self {
            Self::ColorfulSparkle => MODE_NAME_COLORFUL_SPARKLE,
            Self::FestiveSparkle => MODE_NAME_FESTIVE_SPARKLE,
            Self::SnowTwinkle => MODE_NAME_SNOW_TWINKLE,
            Self::Off => MODE_NAME_OFF,
        }
    }

    /// Build fresh, not yet initialized state for this mode
    pub fn to_slot<const N: usize>(self, count: usize, config: &ModesConfig) -> ModeSlot<N> {
        match self {
            Self::ColorfulSparkle => {
                ModeSlot::ColorfulSparkle(ColorfulSparkleMode::new(count, &config.colorful))
            }
            Self::FestiveSparkle => {
                ModeSlot::FestiveSparkle(FestiveSparkleMode::new(count, &config.festive))
            }
            Self::SnowTwinkle => ModeSlot::SnowTwinkle(SnowTwinkleMode::new(count, &config.snow)),
            Self::Off => ModeSlot::Off(OffMode),
        }
    }
}

/// Settings of every animated mode
#[derive(Debug, Clone, Default)]
pub struct ModesConfig {
    pub colorful: ColorfulSparkleConfig,
    pub festive: FestiveSparkleConfig,
    pub snow: SnowTwinkleConfig,
}

impl ModesConfig {
    pub fn validate(&self) -> Result<(), ConfigError> {
        self.colorful
            .validate()
            .map_err(in_mode(ModeId::ColorfulSparkle))?;
        self.festive
            .validate()
            .map_err(in_mode(ModeId::FestiveSparkle))?;
        self.snow.validate().map_err(in_mode(ModeId::SnowTwinkle))
    }
}

fn in_mode(mode: ModeId) -> impl Fn(ModeConfigError) -> ConfigError {
    move |reason| ConfigError::Mode { mode, reason }
}

/// Mode slot - enum containing the state of the active mode
#[derive(Debug, Clone)]
pub enum ModeSlot<const N: usize> {
    ColorfulSparkle(ColorfulSparkleMode<N>),
    FestiveSparkle(FestiveSparkleMode<N>),
    SnowTwinkle(SnowTwinkleMode<N>),
    Off(OffMode),
}

impl<const N: usize> ModeSlot<N> {
    /// Initialize the mode, see [`Mode::init`]
    pub fn init<R: RandomSource>(&mut self, rng: &mut R, leds: &mut [Rgb]) {
        match self {
            Self::ColorfulSparkle(mode) => mode.init(rng, leds),
            Self::FestiveSparkle(mode) => mode.init(rng, leds),
            Self::SnowTwinkle(mode) => mode.init(rng, leds),
            Self::Off(mode) => mode.init(rng, leds),
        }
    }

    /// Render the next frame, see [`Mode::update`]
    pub fn update<R: RandomSource>(&mut self, rng: &mut R, leds: &mut [Rgb]) {
        match self {
            Self::ColorfulSparkle(mode) => mode.update(rng, leds),
            Self::FestiveSparkle(mode) => mode.update(rng, leds),
            Self::SnowTwinkle(mode) => mode.update(rng, leds),
            Self::Off(mode) => mode.update(rng, leds),
        }
    }

    /// Get the mode ID for external observation
    pub fn id(&self) -> ModeId {
        match self {
            Self::ColorfulSparkle(_) => ModeId::ColorfulSparkle,
            Self::FestiveSparkle(_) => ModeId::FestiveSparkle,
            Self::SnowTwinkle(_) => ModeId::SnowTwinkle,
            Self::Off(_) => ModeId::Off,
        }
    }

    /// Sparkle state of the animated modes, `None` when off
    pub fn sparkle(&self) -> Option<&SparkleState<N>> {
        match self {
            Self::ColorfulSparkle(mode) => Some(mode.sparkle()),
            Self::FestiveSparkle(mode) => Some(mode.sparkle()),
            Self::SnowTwinkle(mode) => Some(mode.sparkle()),
            Self::Off(_) => None,
        }
    }

    pub fn sparkle_mut(&mut self) -> Option<&mut SparkleState<N>> {
        match self {
            Self::ColorfulSparkle(mode) => Some(mode.sparkle_mut()),
            Self::FestiveSparkle(mode) => Some(mode.sparkle_mut()),
            Self::SnowTwinkle(mode) => Some(mode.sparkle_mut()),
            Self::Off(_) => None,
        }
    }
}
