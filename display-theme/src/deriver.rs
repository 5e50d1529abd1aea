use crate::color::{Color, HslColor};

/// Dominant colors at or above this lightness get a darker accent.
pub const BRIGHT_LIGHTNESS: f64 = 0.9;
/// Dominant colors at or below this lightness get a lighter accent.
pub const DARK_LIGHTNESS: f64 = 0.1;
pub const LIGHTNESS_SHIFT: f64 = 0.2;
/// Lightness up to and including this value takes white text.
pub const FONT_THRESHOLD: f64 = 0.5;

/// Colors for one overlay band of an image.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Palette {
    pub main: Color,
    pub accent: Color,
    /// Always [`Color::BLACK`] or [`Color::WHITE`].
    pub font_color: Color,
}

/// Build a palette around a dominant color: the color itself, its fully
/// saturated complement, and black or white text depending on its
/// lightness.
pub fn derive_palette(main: Color) -> Palette {
    let hsl = main.to_hsl();

    Palette {
        main,
        accent: Color::from_hsl(accent_hsl(hsl)),
        font_color: font_color_for(hsl.lightness),
    }
}

/// Rotate the hue by 180 degrees, force full saturation and pull extreme
/// lightness back towards the middle.
pub fn accent_hsl(hsl: HslColor) -> HslColor {
    let mut hue = hsl.hue.into_positive_degrees() - 180.0;
    if hue < 0.0 {
        hue += 360.0;
    }

    HslColor::new(hue, 1.0, accent_lightness(hsl.lightness))
}

pub fn accent_lightness(lightness: f64) -> f64 {
    let shifted = if lightness >= BRIGHT_LIGHTNESS {
        lightness - LIGHTNESS_SHIFT
    } else if lightness <= DARK_LIGHTNESS {
        lightness + LIGHTNESS_SHIFT
    } else {
        lightness
    };
    shifted.clamp(0.0, 1.0)
}

pub fn font_color_for(lightness: f64) -> Color {
    if lightness <= FONT_THRESHOLD {
        Color::WHITE
    } else {
        Color::BLACK
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    fn hsl(hue: f64, saturation: f64, lightness: f64) -> HslColor {
        HslColor::new(hue, saturation, lightness)
    }

    fn close(a: f64, b: f64) -> bool {
        (a - b).abs() < 1e-9
    }

    #[test]
    fn accent_hue_wraps() {
        assert!(close(accent_hsl(hsl(30.0, 0.5, 0.5)).hue.into_positive_degrees(), 210.0));
        assert!(close(accent_hsl(hsl(200.0, 0.5, 0.5)).hue.into_positive_degrees(), 20.0));
        assert!(close(accent_hsl(hsl(180.0, 0.5, 0.5)).hue.into_positive_degrees(), 0.0));
    }

    #[test]
    fn accent_lightness_shifts_at_extremes() {
        assert!(close(accent_lightness(0.95), 0.75));
        assert!(close(accent_lightness(0.9), 0.7));
        assert!(close(accent_lightness(0.05), 0.25));
        assert!(close(accent_lightness(0.1), 0.3));
        assert!(close(accent_lightness(0.0), 0.2));
        assert!(close(accent_lightness(1.0), 0.8));
        assert_eq!(accent_lightness(0.5), 0.5);
        assert_eq!(accent_lightness(0.89), 0.89);
        assert_eq!(accent_lightness(0.11), 0.11);
    }

    #[test]
    fn font_tie_resolves_to_white() {
        assert_eq!(font_color_for(0.5), Color::WHITE);
        assert_eq!(font_color_for(0.51), Color::BLACK);
    }

    #[test]
    fn main_is_dominant_unchanged() {
        let main = Color::new(18, 52, 86);
        assert_eq!(derive_palette(main).main, main);
    }

    #[test]
    fn black_gets_lifted_red_accent_and_white_text() {
        // Gray has hue 0, so the accent sits at hue 180 with lightness 0.2.
        let palette = derive_palette(Color::BLACK);
        assert_eq!(palette.accent, Color::new(0, 102, 102));
        assert_eq!(palette.font_color, Color::WHITE);
    }

    #[test]
    fn white_gets_dimmed_accent_and_black_text() {
        let palette = derive_palette(Color::WHITE);
        assert_eq!(palette.accent, Color::new(153, 255, 255));
        assert_eq!(palette.font_color, Color::BLACK);
    }

    #[test]
    fn saturated_red_complements_to_cyan() {
        let palette = derive_palette(Color::new(255, 0, 0));
        assert_eq!(palette.accent, Color::new(0, 255, 255));
        assert_eq!(palette.font_color, Color::WHITE);
    }

    #[test]
    fn accent_rounds_half_way_channels_up() {
        let palette = derive_palette(Color::new(0, 6, 24));
        assert_eq!(palette.accent, Color::new(126, 95, 0));
        assert_eq!(palette.font_color, Color::WHITE);
    }

    proptest! {
        #[test]
        fn prop_accent_rules(hue in 0.0f64..360.0, saturation in 0.0f64..=1.0, lightness in 0.0f64..=1.0) {
            let accent = accent_hsl(hsl(hue, saturation, lightness));

            let expected_hue = (hue + 180.0) % 360.0;
            let actual_hue = accent.hue.into_positive_degrees();
            let diff = (actual_hue - expected_hue).abs();
            prop_assert!(diff < 1e-9 || (360.0 - diff) < 1e-9);

            prop_assert_eq!(accent.saturation, 1.0);
            prop_assert!((0.0..=1.0).contains(&accent.lightness));

            if lightness >= BRIGHT_LIGHTNESS {
                prop_assert!(close(accent.lightness, lightness - LIGHTNESS_SHIFT));
            } else if lightness <= DARK_LIGHTNESS {
                prop_assert!(close(accent.lightness, lightness + LIGHTNESS_SHIFT));
            } else {
                prop_assert_eq!(accent.lightness, lightness);
            }
        }

        #[test]
        fn prop_font_is_black_or_white(r: u8, g: u8, b: u8) {
            let main = Color::new(r, g, b);
            let palette = derive_palette(main);
            prop_assert!(palette.font_color == Color::BLACK || palette.font_color == Color::WHITE);
            prop_assert_eq!(palette.font_color == Color::WHITE, main.lightness() <= FONT_THRESHOLD);
        }
    }
}
