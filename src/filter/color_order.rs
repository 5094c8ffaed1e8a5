use super::Filter;
use crate::color::Rgb;

/// Order in which the strip expects the three channels on the wire
///
/// The driver sends the `r`, `g`, `b` fields in that order, so a GRB strip
/// needs green in the `r` field and so on.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ColorOrder {
    #[default]
    Rgb,
    Rbg,
    Grb,
    Gbr,
    Brg,
    Bgr,
}

impl ColorOrder {
    /// Reorder one logical color for the wire
    pub const fn reorder(self, color: Rgb) -> Rgb {
        let Rgb { r, g, b } = color;
        let (first, second, third) = match self {
            Self::Rgb => (r, g, b),
            Self::Rbg => (r, b, g),
            Self::Grb => (g, r, b),
            Self::Gbr => (g, b, r),
            Self::Brg => (b, r, g),
            Self::Bgr => (b, g, r),
        };
        Rgb {
            r: first,
            g: second,
            b: third,
        }
    }
}

impl Filter for ColorOrder {
    fn apply(&self, frame: &mut [Rgb]) {
        if *self == Self::Rgb {
            return;
        }
        for pixel in frame.iter_mut() {
            *pixel = self.reorder(*pixel);
        }
    }
}
