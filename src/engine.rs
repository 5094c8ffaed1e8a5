#[cfg(feature = "esp32-log")]
use esp_println::println;
use heapless::Vec;

use crate::color::{BLACK, Rgb};
use crate::config::EngineConfig;
use crate::error::ConfigError;
use crate::filter::FilterProcessor;
use crate::mode::{ModeId, ModeSlot, ModesConfig, OffMode};
use crate::random::RandomSource;

/// Mode engine - renders frames for the active mode
///
/// Owns the frame buffer, the state of the active mode and the random
/// source. Every call renders the full strip into the buffer and returns it
/// for a single hand-off to the output driver.
#[derive(Debug)]
pub struct ModeEngine<R: RandomSource, const MAX_LEDS: usize> {
    rng: R,
    modes: ModesConfig,
    current: ModeSlot<MAX_LEDS>,
    frame_buffer: Vec<Rgb, MAX_LEDS>,
    filters: FilterProcessor,
}

impl<R: RandomSource, const MAX_LEDS: usize> ModeEngine<R, MAX_LEDS> {
    /// Validate the configuration and build an engine
    ///
    /// The engine starts on a dark frame; call [`Self::enter`] to initialize
    /// the first mode.
    pub fn new(config: &EngineConfig, rng: R) -> Result<Self, ConfigError> {
        if let Err(error) = config.validate(MAX_LEDS) {
            #[cfg(feature = "esp32-log")]
            println!("[ModeEngine.new] rejected configuration: {}", error);
            return Err(error);
        }

        let mut frame_buffer = Vec::new();
        frame_buffer
            .resize(config.led_count, BLACK)
            .map_err(|()| ConfigError::StripTooLong {
                led_count: config.led_count,
                capacity: MAX_LEDS,
            })?;

        Ok(Self {
            rng,
            modes: config.modes.clone(),
            current: ModeSlot::Off(OffMode),
            frame_buffer,
            filters: FilterProcessor::new(&config.filters),
        })
    }

    /// Number of pixels on the strip
    pub fn led_count(&self) -> usize {
        self.frame_buffer.len()
    }

    /// Replace the active mode with fresh state and render its first frame
    pub fn enter(&mut self, mode: ModeId) -> &[Rgb] {
        #[cfg(feature = "esp32-log")]
        println!("[ModeEngine.enter] switching to {}", mode.as_str());

        self.current = mode.to_slot(self.frame_buffer.len(), &self.modes);
        self.current.init(&mut self.rng, &mut self.frame_buffer);
        self.filters.apply(&mut self.frame_buffer);
        &self.frame_buffer
    }

    /// Render the next frame of the active mode
    pub fn render(&mut self) -> &[Rgb] {
        self.current.update(&mut self.rng, &mut self.frame_buffer);
        self.filters.apply(&mut self.frame_buffer);
        &self.frame_buffer
    }

    /// Last rendered frame
    pub fn frame(&self) -> &[Rgb] {
        &self.frame_buffer
    }

    pub fn mode_id(&self) -> ModeId {
        self.current.id()
    }

    /// State of the active mode
    pub fn mode(&self) -> &ModeSlot<MAX_LEDS> {
        &self.current
    }

    pub fn mode_mut(&mut self) -> &mut ModeSlot<MAX_LEDS> {
        &mut self.current
    }
}
