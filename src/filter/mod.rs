//! Output filters
//!
//! Applied to the finished frame right before it is handed to the driver.
//! Modes always render logical RGB; the filters adapt it to the hardware.

use crate::color::Rgb;

mod color_correction;
mod color_order;

pub(crate) trait Filter {
    /// Apply the filter to a frame
    fn apply(&self, frame: &mut [Rgb]);
}

pub use color_correction::ColorCorrection;
pub use color_order::ColorOrder;

#[derive(Debug, Clone, Copy)]
pub struct FilterProcessorConfig {
    /// Wire order of the strip's channels
    pub color_order: ColorOrder,
    /// Per-channel correction factors (255 = unchanged)
    pub color_correction: Rgb,
}

impl Default for FilterProcessorConfig {
    fn default() -> Self {
        Self {
            color_order: ColorOrder::Rgb,
            color_correction: Rgb {
                r: 255,
                g: 255,
                b: 255,
            },
        }
    }
}

/// Filter processor - applies post-processing to frames
///
/// Correction runs first so its factors refer to logical channels.
#[derive(Debug, Clone, Copy)]
pub struct FilterProcessor {
    pub color_correction: ColorCorrection,
    pub color_order: ColorOrder,
}

impl FilterProcessor {
    pub fn new(config: &FilterProcessorConfig) -> Self {
        Self {
            color_correction: ColorCorrection::new(config.color_correction),
            color_order: config.color_order,
        }
    }

    /// Apply all filters to a frame in place
    pub fn apply(&self, frame: &mut [Rgb]) {
        self.color_correction.apply(frame);
        self.color_order.apply(frame);
    }
}
