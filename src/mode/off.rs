use super::Mode;
use crate::color::{BLACK, Rgb};
use crate::random::RandomSource;

/// All pixels dark
///
/// Rewrites black on every frame so anything else touching the strip gets
/// overwritten.
#[derive(Debug, Clone, Copy, Default)]
pub struct OffMode;

impl Mode for OffMode {
    fn init<R: RandomSource>(&mut self, _rng: &mut R, leds: &mut [Rgb]) {
        leds.fill(BLACK);
    }

    fn update<R: RandomSource>(&mut self, _rng: &mut R, leds: &mut [Rgb]) {
        leds.fill(BLACK);
    }
}
