use crate::assets::AssetSource;
use crate::config::Settings;
use anyhow::{Context, Result};
use display_prayer::{AngleCorrection, IqamaDelays, PrayerCalculator};
use display_theme::ThemeEngine;
use std::path::PathBuf;

/// Shared by every request handler.
#[derive(Debug)]
pub struct AppState {
    pub engine: ThemeEngine,
    pub calculator: PrayerCalculator,
    pub iqama: IqamaDelays,
    pub display_dir: PathBuf,
    pub assets: AssetSource,
    pub dev_mode: bool,
    pub overlay_alpha: f64,
}

impl AppState {
    pub fn from_settings(settings: Settings) -> Result<Self> {
        let overlay_alpha = settings.theme.overlay_alpha;
        let engine = ThemeEngine::new(settings.theme).context("invalid theming configuration")?;
        let calculator = PrayerCalculator::new(settings.location)
            .context("invalid location")?
            .with_correction(AngleCorrection::kiosk());

        Ok(Self {
            engine,
            calculator,
            iqama: IqamaDelays::default(),
            display_dir: settings.display_dir,
            assets: settings.assets,
            dev_mode: settings.dev_mode,
            overlay_alpha,
        })
    }
}
