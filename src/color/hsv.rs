//! Floating-point HSV model
//!
//! Hue, saturation and value all live in `0.0..=1.0`. Unlike the 8-bit
//! `smart_leds` HSV this lets the envelopes blend saturation and value
//! continuously.

use super::{Rgb, white};

/// HSV triple with every component in `0.0..=1.0`
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct HsvF {
    pub hue: f32,
    pub sat: f32,
    pub val: f32,
}

impl HsvF {
    pub const fn new(hue: f32, sat: f32, val: f32) -> Self {
        Self { hue, sat, val }
    }

    /// Convert to RGB, see [`hsv_to_rgb`]
    pub fn to_rgb(self) -> Rgb {
        hsv_to_rgb(self.hue, self.sat, self.val)
    }
}

/// Fractional bits of an `f32` in `1.0..2.0`
const HUE_BITS: u32 = 23;
const HUE_ONE: u64 = 1 << HUE_BITS;
const HUE_SCALE: f64 = 8_388_608.0;

/// Convert a float HSV triple to 8-bit RGB
///
/// The hue wraps, so `1.25` and `0.25` are the same color. Channels are
/// truncated, not rounded. A saturation of zero or less short-circuits to a
/// grey of `v * 255`.
///
/// The wrapped hue is snapped to the 23-bit grid of `f32` values in
/// `1.0..2.0`, so `h` and `h + 1.0` land on the same fixed-point hue and
/// render identically.
#[allow(
    clippy::many_single_char_names,
    clippy::cast_possible_truncation,
    clippy::cast_precision_loss
)]
pub fn hsv_to_rgb(h: f32, s: f32, v: f32) -> Rgb {
    let v = f64::from(v);
    if s <= 0.0 {
        return white(channel(v));
    }
    let s = f64::from(s);

    let scaled = hue_fixed(h) * 6;
    let sector = scaled >> HUE_BITS;
    let f = (scaled & (HUE_ONE - 1)) as f64 / HUE_SCALE;
    let p = v * (1.0 - s);
    let q = v * (1.0 - s * f);
    let t = v * (1.0 - s * (1.0 - f));

    let (r, g, b) = match sector {
        0 => (v, t, p),
        1 => (q, v, p),
        2 => (p, v, t),
        3 => (p, q, v),
        4 => (t, p, v),
        _ => (v, p, q),
    };

    Rgb {
        r: channel(r),
        g: channel(g),
        b: channel(b),
    }
}

/// Wrapped hue as a fraction of [`HUE_ONE`]
///
/// Rounds half to even, the same way `f32` addition does.
#[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
fn hue_fixed(h: f32) -> u64 {
    let h = f64::from(h);
    let wrapped = h - libm::floor(h);
    (libm::rint(wrapped * HUE_SCALE) as u64) % HUE_ONE
}

/// Linear interpolation between two channel values, truncated toward zero
///
/// `t` is expected in `0.0..=1.0`.
#[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
pub fn lerp(a: u8, b: u8, t: f32) -> u8 {
    let a = f32::from(a);
    let b = f32::from(b);
    (a + (b - a) * t) as u8
}

#[inline]
#[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
fn channel(value: f64) -> u8 {
    (value * 255.0) as u8
}
