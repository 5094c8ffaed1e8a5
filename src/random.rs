//! Random number seam
//!
//! Modes draw their randomness through [`RandomSource`] so tests can script
//! exactly which pixel sparkles and when.

use rand::rngs::SmallRng;
use rand::{RngCore, SeedableRng};

/// Uniform random source used by the animation modes
pub trait RandomSource {
    /// Uniform byte, used for per-frame trigger decisions
    fn next_u8(&mut self) -> u8;

    /// Uniform 16-bit value, used for pixel picks and hues
    fn next_u16(&mut self) -> u16;

    /// Uniform float in `0.0..1.0`
    fn next_unit(&mut self) -> f32 {
        f32::from(self.next_u16()) / 65_536.0
    }
}

/// Seedable source used on device and in previews
pub type SmallRngSource = RngSource<SmallRng>;

/// Adapter from any [`rand`] generator
#[derive(Debug, Clone)]
pub struct RngSource<R>(pub R);

impl RngSource<SmallRng> {
    /// Small fast generator with a fixed seed
    pub fn seeded(seed: u64) -> Self {
        Self(SmallRng::seed_from_u64(seed))
    }
}

impl<R: RngCore> RandomSource for RngSource<R> {
    #[allow(clippy::cast_possible_truncation)]
    fn next_u8(&mut self) -> u8 {
        (self.0.next_u32() >> 24) as u8
    }

    #[allow(clippy::cast_possible_truncation)]
    fn next_u16(&mut self) -> u16 {
        (self.0.next_u32() >> 16) as u16
    }
}
