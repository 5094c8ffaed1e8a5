//! Per-pixel animation state shared by the sparkle-style modes

use core::iter;

use heapless::Vec;

use crate::envelope::{Envelope, IDLE};
use crate::math8::chance8;
use crate::random::RandomSource;

/// Phase counter of every pixel on the strip
///
/// A pixel is animating exactly when its phase is non-zero, so the phases
/// double as the "active" set. Only one envelope can occupy a pixel.
#[derive(Debug, Clone)]
pub struct PixelPhases<const N: usize> {
    phases: Vec<u16, N>,
}

impl<const N: usize> PixelPhases<N> {
    /// All pixels idle
    ///
    /// `count` is capped at `N`; the engine rejects longer strips up front.
    pub fn new(count: usize) -> Self {
        Self {
            phases: iter::repeat_n(IDLE, count.min(N)).collect(),
        }
    }

    pub fn len(&self) -> usize {
        self.phases.len()
    }

    pub fn is_empty(&self) -> bool {
        self.phases.is_empty()
    }

    /// Phase of a pixel, [`IDLE`] for indices past the strip
    pub fn get(&self, index: usize) -> u16 {
        self.phases.get(index).copied().unwrap_or(IDLE)
    }

    pub fn is_active(&self, index: usize) -> bool {
        self.get(index) != IDLE
    }

    /// Number of pixels currently running an envelope
    pub fn active_count(&self) -> usize {
        self.phases.iter().filter(|phase| **phase != IDLE).count()
    }

    /// Start an envelope on an idle pixel
    ///
    /// Returns `false` and leaves the pixel alone if it is already animating
    /// or out of range.
    pub fn trigger(&mut self, index: usize) -> bool {
        match self.phases.get_mut(index) {
            Some(phase) if *phase == IDLE => {
                *phase = 1;
                true
            }
            _ => false,
        }
    }

    /// Put every pixel back to idle
    pub fn reset(&mut self) {
        self.phases.iter_mut().for_each(|phase| *phase = IDLE);
    }

    pub fn iter(&self) -> impl Iterator<Item = u16> + '_ {
        self.phases.iter().copied()
    }

    /// Read the envelope progress for this frame and advance the pixel
    ///
    /// Returns `None` when the pixel should show its base appearance: it was
    /// idle, or its envelope just finished.
    pub fn step(&mut self, index: usize, envelope: &Envelope) -> Option<f32> {
        let phase = self.phases.get_mut(index)?;
        if *phase == IDLE {
            return None;
        }

        let progress = envelope.progress(*phase);
        *phase = envelope.advance(*phase);
        if *phase == IDLE { None } else { Some(progress) }
    }
}

/// Phases plus the envelope and trigger rate of one mode
#[derive(Debug, Clone)]
pub struct SparkleState<const N: usize> {
    phases: PixelPhases<N>,
    envelope: Envelope,
    probability: u8,
}

impl<const N: usize> SparkleState<N> {
    pub fn new(count: usize, envelope: Envelope, probability: u8) -> Self {
        Self {
            phases: PixelPhases::new(count),
            envelope,
            probability,
        }
    }

    pub const fn envelope(&self) -> &Envelope {
        &self.envelope
    }

    pub const fn probability(&self) -> u8 {
        self.probability
    }

    pub const fn phases(&self) -> &PixelPhases<N> {
        &self.phases
    }

    pub fn phases_mut(&mut self) -> &mut PixelPhases<N> {
        &mut self.phases
    }

    /// Single trigger draw for this frame
    ///
    /// Picks one random pixel with the configured probability. A pick that
    /// lands on a pixel which is already animating is dropped. Returns the
    /// index of the pixel that started animating, if any.
    pub fn maybe_trigger<R: RandomSource>(&mut self, rng: &mut R) -> Option<usize> {
        if self.phases.is_empty() || !chance8(rng.next_u8(), self.probability) {
            return None;
        }
        let index = usize::from(rng.next_u16()) % self.phases.len();
        self.phases.trigger(index).then_some(index)
    }

    /// See [`PixelPhases::step`]
    pub fn step(&mut self, index: usize) -> Option<f32> {
        self.phases.step(index, &self.envelope)
    }
}
