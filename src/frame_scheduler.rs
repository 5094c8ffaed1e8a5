//! Frame scheduling
//!
//! [`FrameLoop::tick`] runs one frame without touching any clock, so it can be
//! driven from tests or a desktop preview. [`FrameLoop::run`] is the endless
//! on-device loop.

use embassy_time::{Duration, Instant, Timer};

#[cfg(feature = "esp32-log")]
use esp_println::println;

use crate::OutputDriver;
use crate::config::EngineConfig;
use crate::engine::ModeEngine;
use crate::error::ConfigError;
use crate::input::{ButtonInput, InputController};
use crate::mode::ModeId;
use crate::random::RandomSource;

/// Result of a frame tick operation.
#[derive(Debug, Clone, Copy)]
pub struct FrameResult {
    /// When the next frame should start
    pub next_deadline: Instant,
    /// Mode entered during this frame, if the button was pressed
    pub transition: Option<ModeId>,
}

impl FrameResult {
    /// Time left in the frame budget, zero if the frame overran
    pub fn remaining(&self, now: Instant) -> Duration {
        self.next_deadline.saturating_duration_since(now)
    }
}

/// Fixed-rate loop: input, render, flush, sleep
///
/// Never skips a frame. An overrun only shortens or removes the sleep.
pub struct FrameLoop<O: OutputDriver, R: RandomSource, const MAX_LEDS: usize> {
    output: O,
    engine: ModeEngine<R, MAX_LEDS>,
    input: InputController,
    frame_duration: Duration,
}

impl<O: OutputDriver, R: RandomSource, const MAX_LEDS: usize> FrameLoop<O, R, MAX_LEDS> {
    /// Validate the configuration, enter the first mode and flush it
    pub fn new(config: &EngineConfig, rng: R, mut output: O) -> Result<Self, ConfigError> {
        let mut engine = ModeEngine::new(config, rng)?;
        let input = InputController::new(config.debounce);
        output.write(engine.enter(input.mode()));

        Ok(Self {
            output,
            engine,
            input,
            frame_duration: config.frame_duration(),
        })
    }

    /// Process one frame started at `start`
    ///
    /// 1. Polls the button sample and, on a debounced press, enters the next
    ///    mode and flushes its initial frame
    /// 2. Renders the active mode
    /// 3. Writes the frame to the output driver
    ///
    /// The caller waits until `next_deadline` before the next tick.
    pub fn tick(&mut self, start: Instant, pressed: bool) -> FrameResult {
        let transition = self.input.poll(start, pressed);
        if let Some(mode) = transition {
            self.output.write(self.engine.enter(mode));
        }

        self.output.write(self.engine.render());

        FrameResult {
            next_deadline: start + self.frame_duration,
            transition,
        }
    }

    /// Run forever at the configured frame rate
    pub async fn run<B: ButtonInput>(&mut self, button: &mut B) {
        loop {
            let start = Instant::now();
            let result = self.tick(start, button.is_pressed());

            #[cfg(feature = "esp32-log")]
            {
                let now = Instant::now();
                if now > result.next_deadline {
                    println!(
                        "[FrameLoop.run] frame overran by {}ms",
                        (now - result.next_deadline).as_millis()
                    );
                }
            }

            // Resolves immediately when the deadline already passed
            Timer::at(result.next_deadline).await;
        }
    }

    pub const fn frame_duration(&self) -> Duration {
        self.frame_duration
    }

    /// Currently selected mode
    pub const fn mode(&self) -> ModeId {
        self.input.mode()
    }

    pub fn engine(&self) -> &ModeEngine<R, MAX_LEDS> {
        &self.engine
    }

    pub fn engine_mut(&mut self) -> &mut ModeEngine<R, MAX_LEDS> {
        &mut self.engine
    }

    pub fn output(&self) -> &O {
        &self.output
    }
}
