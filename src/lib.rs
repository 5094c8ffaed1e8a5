#![no_std]

pub mod color;
pub mod config;
pub mod engine;
pub mod envelope;
pub mod error;
pub mod filter;
pub mod frame_scheduler;
pub mod input;
pub mod math8;
pub mod mode;
pub mod output;
pub mod random;
pub mod state;

pub use config::EngineConfig;
pub use engine::ModeEngine;
pub use envelope::Envelope;
pub use error::{ConfigError, ModeConfigError};
pub use filter::{ColorOrder, FilterProcessorConfig};
pub use frame_scheduler::{FrameLoop, FrameResult};
pub use input::{ButtonInput, InputController};
pub use mode::{ModeId, ModeSlot, ModesConfig};
pub use output::SmartLedsOutput;
pub use random::{RandomSource, RngSource, SmallRngSource};

pub use color::{HsvF, Rgb};
pub use embassy_time::{Duration, Instant};

/// Abstract LED driver trait
///
/// Implement this trait to support different hardware platforms.
/// Each call receives the complete frame and must show it at once.
pub trait OutputDriver {
    /// Write colors to the LED strip
    fn write(&mut self, colors: &[Rgb]);
}
