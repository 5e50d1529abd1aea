use palette::{FromColor, Hsl, Srgb};
use std::fmt;

/// HSL in the sRGB encoding with `f64` components. Hue is in degrees,
/// saturation and lightness in `[0, 1]`.
pub type HslColor = Hsl<palette::encoding::Srgb, f64>;

/// An 8-bit RGB color.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct Color {
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

impl Color {
    pub const BLACK: Color = Color::new(0, 0, 0);
    pub const WHITE: Color = Color::new(255, 255, 255);

    pub const fn new(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b }
    }

    pub fn to_srgb(self) -> Srgb<f64> {
        Srgb::new(self.r, self.g, self.b).into_format()
    }

    /// Components outside `[0, 1]` are clamped. Half-way values round up.
    pub fn from_srgb(color: Srgb<f64>) -> Self {
        Self::new(
            quantize(color.red),
            quantize(color.green),
            quantize(color.blue),
        )
    }

    /// Achromatic colors get hue 0.
    pub fn to_hsl(self) -> HslColor {
        HslColor::from_color(self.to_srgb())
    }

    /// Inverse of [`Color::to_hsl`], quantized like [`Color::from_srgb`] so
    /// channels sitting exactly between two 8-bit values round up.
    pub fn from_hsl(hsl: HslColor) -> Self {
        let (s, l) = (hsl.saturation, hsl.lightness);
        if s == 0.0 {
            let gray = quantize(l);
            return Self::new(gray, gray, gray);
        }

        let t1 = if l < 0.5 { l * (1.0 + s) } else { l + s - l * s };
        let t2 = 2.0 * l - t1;
        let h = hsl.hue.into_positive_degrees() / 360.0;

        let channel = |mut t: f64| {
            if t < 0.0 {
                t += 1.0;
            }
            if t > 1.0 {
                t -= 1.0;
            }
            if 6.0 * t < 1.0 {
                t2 + (t1 - t2) * 6.0 * t
            } else if 2.0 * t < 1.0 {
                t1
            } else if 3.0 * t < 2.0 {
                t2 + (t1 - t2) * (2.0 / 3.0 - t) * 6.0
            } else {
                t2
            }
        };

        Self::new(
            quantize(channel(h + 1.0 / 3.0)),
            quantize(channel(h)),
            quantize(channel(h - 1.0 / 3.0)),
        )
    }

    /// Hue in degrees, normalised into `[0, 360)`.
    pub fn hue(self) -> f64 {
        self.to_hsl().hue.into_positive_degrees()
    }

    pub fn lightness(self) -> f64 {
        self.to_hsl().lightness
    }
}

fn quantize(component: f64) -> u8 {
    (component * 255.0 + 0.5).floor().clamp(0.0, 255.0) as u8
}

impl From<image::Rgb<u8>> for Color {
    fn from(pixel: image::Rgb<u8>) -> Self {
        Self::new(pixel[0], pixel[1], pixel[2])
    }
}

impl From<[u8; 3]> for Color {
    fn from([r, g, b]: [u8; 3]) -> Self {
        Self::new(r, g, b)
    }
}

impl fmt::Display for Color {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{:02x}{:02x}{:02x}", self.r, self.g, self.b)
    }
}
