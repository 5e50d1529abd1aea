use crate::assets::AssetSource;
use anyhow::{Context, Result};
use clap::Parser;
use display_prayer::Location;
use display_theme::ThemeConfig;
use std::path::{Path, PathBuf};

#[derive(Debug, Parser)]
#[command(
    name = "prayer-display",
    version,
    about = "Prayer display for Raspberry Pi, created using web technology"
)]
pub struct Args {
    /// Port used for the GUI.
    #[arg(short, long, env = "PRAYER_DISPLAY_PORT", default_value_t = 9001)]
    pub port: u16,

    /// Directory of background images. Defaults to `display` next to the executable.
    #[arg(long, env = "PRAYER_DISPLAY_IMAGES")]
    pub display_dir: Option<PathBuf>,

    /// Serve front-end files from this directory instead of the embedded bundle.
    #[arg(long, env = "PRAYER_DISPLAY_ASSETS")]
    pub assets_dir: Option<PathBuf>,

    /// Serve front-end files from disk, preferring unminified scripts when they exist.
    #[arg(long)]
    pub dev: bool,

    /// Theming worker threads, 0 for one per CPU.
    #[arg(long, env = "PRAYER_DISPLAY_WORKERS", default_value_t = 0)]
    pub workers: usize,

    #[arg(long, env = "PRAYER_DISPLAY_LATITUDE", default_value_t = -2.2307069, allow_negative_numbers = true)]
    pub latitude: f64,

    #[arg(long, env = "PRAYER_DISPLAY_LONGITUDE", default_value_t = 113.9301163, allow_negative_numbers = true)]
    pub longitude: f64,

    /// Metres.
    #[arg(long, env = "PRAYER_DISPLAY_ELEVATION", default_value_t = 5.0)]
    pub elevation: f64,
}

/// Resolved runtime settings.
#[derive(Debug, Clone)]
pub struct Settings {
    pub port: u16,
    pub display_dir: PathBuf,
    pub assets: AssetSource,
    pub dev_mode: bool,
    pub theme: ThemeConfig,
    pub location: Location,
}

impl Args {
    pub fn into_settings(self) -> Result<Settings> {
        let display_dir = match self.display_dir {
            Some(dir) => dir,
            None => executable_dir()?.join("display"),
        };
        let assets = match self.assets_dir {
            Some(dir) => AssetSource::Disk(dir),
            None if self.dev => AssetSource::Disk(AssetSource::source_tree()),
            None => AssetSource::Embedded,
        };

        Ok(Settings {
            port: self.port,
            display_dir,
            assets,
            dev_mode: self.dev,
            theme: ThemeConfig {
                workers: self.workers,
                ..ThemeConfig::default()
            },
            location: Location {
                latitude: self.latitude,
                longitude: self.longitude,
                elevation: self.elevation,
            },
        })
    }
}

fn executable_dir() -> Result<PathBuf> {
    let exe = std::env::current_exe().context("failed to locate executable")?;
    Ok(exe.parent().map(Path::to_path_buf).unwrap_or_default())
}
