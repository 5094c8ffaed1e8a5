mod hsv;

use smart_leds::RGB8;

pub use hsv::{HsvF, hsv_to_rgb, lerp};

pub type Rgb = RGB8;

/// Fully dark pixel
pub const BLACK: Rgb = Rgb { r: 0, g: 0, b: 0 };

/// Grey level with all three channels set to `value`
pub const fn white(value: u8) -> Rgb {
    Rgb {
        r: value,
        g: value,
        b: value,
    }
}
