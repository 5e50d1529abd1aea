use crate::color::Color;
use crate::pipeline::ImageTheme;
use serde::Serialize;

/// Opacity applied to main and accent colors in the overlay.
pub const OVERLAY_ALPHA: f64 = 0.7;

/// `#rrggbb` with lowercase digits.
pub fn hex(color: Color) -> String {
    color.to_string()
}

/// `rgba(r, g, b, a)` with the alpha clamped to `[0, 1]` and printed to
/// three decimals.
pub fn rgba(color: Color, alpha: f64) -> String {
    format!(
        "rgba({}, {}, {}, {:.3})",
        color.r,
        color.g,
        color.b,
        alpha.clamp(0.0, 1.0)
    )
}

/// An [`ImageTheme`] rendered to the string encodings the front end uses.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ThemeView {
    pub url: String,
    pub main_color: String,
    pub header_main: String,
    pub header_accent: String,
    pub header_font: String,
    pub footer_main: String,
    pub footer_accent: String,
    pub footer_font: String,
}

impl ThemeView {
    pub fn new(theme: &ImageTheme, alpha: f64) -> Self {
        Self {
            url: theme.url.clone(),
            main_color: hex(theme.main),
            header_main: rgba(theme.header.main, alpha),
            header_accent: rgba(theme.header.accent, alpha),
            header_font: hex(theme.header.font_color),
            footer_main: rgba(theme.footer.main, alpha),
            footer_accent: rgba(theme.footer.accent, alpha),
            footer_font: hex(theme.footer.font_color),
        }
    }
}

impl From<&ImageTheme> for ThemeView {
    fn from(theme: &ImageTheme) -> Self {
        Self::new(theme, OVERLAY_ALPHA)
    }
}
