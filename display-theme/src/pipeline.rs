use crate::catalog::{scan_catalog, CatalogEntry};
use crate::color::Color;
use crate::config::ThemeConfig;
use crate::deriver::{derive_palette, Palette};
use crate::error::{Result, ThemeError};
use crate::region::{split_regions, ImageRegion};
use crate::sampler::{ColorSampler, OctantSampler};
use image::imageops::FilterType;
use image::{DynamicImage, RgbImage};
use log::{debug, info, warn};
use rayon::prelude::*;
use std::path::Path;
use std::time::Instant;

/// Derived colors for one image.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ImageTheme {
    /// Where the front end fetches the image from.
    pub url: String,
    /// Dominant color of the whole image.
    pub main: Color,
    pub header: Palette,
    pub footer: Palette,
}

/// Turns a single image into an [`ImageTheme`].
#[derive(Debug, Clone)]
pub struct ThemePipeline<S = OctantSampler> {
    config: ThemeConfig,
    sampler: S,
}

impl ThemePipeline<OctantSampler> {
    pub fn new(config: ThemeConfig) -> Result<Self> {
        let sampler = config.sampler;
        Self::with_sampler(config, sampler)
    }
}

impl<S: ColorSampler> ThemePipeline<S> {
    pub fn with_sampler(config: ThemeConfig, sampler: S) -> Result<Self> {
        config.validate()?;
        Ok(Self { config, sampler })
    }

    pub fn config(&self) -> &ThemeConfig {
        &self.config
    }

    /// Decode and theme one catalog file.
    pub fn theme_file(&self, entry: &CatalogEntry) -> Result<ImageTheme> {
        let started = Instant::now();
        let image = image::open(&entry.path).map_err(|source| ThemeError::Decode {
            path: entry.path.clone(),
            source,
        })?;

        let theme = self.theme_image(image_url(entry), &image);
        debug!(
            "themed {} in {:?}",
            entry.path.display(),
            started.elapsed()
        );
        Ok(theme)
    }

    pub fn theme_image(&self, url: String, image: &DynamicImage) -> ImageTheme {
        let pixels = downscale(image.to_rgb8(), self.config.downscale);
        let (width, height) = pixels.dimensions();
        let split = split_regions(width, height, self.config.region_fraction);

        ImageTheme {
            url,
            main: self.sampler.dominant(&pixels, ImageRegion::full(width, height)),
            header: self.palette(&pixels, split.header),
            footer: self.palette(&pixels, split.footer),
        }
    }

    fn palette(&self, pixels: &RgbImage, region: ImageRegion) -> Palette {
        derive_palette(self.sampler.dominant(pixels, region))
    }
}

/// Themes every image of a catalog directory on a bounded worker pool.
#[derive(Debug)]
pub struct ThemeEngine<S = OctantSampler> {
    pipeline: ThemePipeline<S>,
    pool: rayon::ThreadPool,
}

impl ThemeEngine<OctantSampler> {
    pub fn new(config: ThemeConfig) -> Result<Self> {
        Self::from_pipeline(ThemePipeline::new(config)?)
    }
}

impl<S: ColorSampler> ThemeEngine<S> {
    pub fn from_pipeline(pipeline: ThemePipeline<S>) -> Result<Self> {
        let pool = rayon::ThreadPoolBuilder::new()
            .num_threads(pipeline.config.workers)
            .thread_name(|i| format!("theme-worker-{i}"))
            .build()?;
        Ok(Self { pipeline, pool })
    }

    pub fn pipeline(&self) -> &ThemePipeline<S> {
        &self.pipeline
    }

    /// Compute a theme for every image in `dir`.
    ///
    /// Images that fail to decode are logged and left out. Only an
    /// unreadable directory fails the whole call. Results follow catalog
    /// order regardless of which worker finishes first.
    pub fn compute_catalog(&self, dir: &Path) -> Result<Vec<ImageTheme>> {
        let entries = scan_catalog(dir)?;
        let started = Instant::now();

        let themes: Vec<ImageTheme> = self.pool.install(|| {
            entries
                .par_iter()
                .filter_map(|entry| match self.pipeline.theme_file(entry) {
                    Ok(theme) => Some(theme),
                    Err(e) => {
                        warn!("skipping image: {}: {}", e, error_source(&e));
                        None
                    }
                })
                .collect()
        });

        info!(
            "themed {}/{} images from {} in {:?}",
            themes.len(),
            entries.len(),
            dir.display(),
            started.elapsed()
        );
        Ok(themes)
    }
}

fn image_url(entry: &CatalogEntry) -> String {
    format!("/image/{}", entry.file_name())
}

fn downscale(pixels: RgbImage, factor: u32) -> RgbImage {
    if factor <= 1 {
        return pixels;
    }
    let width = (pixels.width() / factor).max(1);
    let height = (pixels.height() / factor).max(1);
    image::imageops::resize(&pixels, width, height, FilterType::Nearest)
}

fn error_source(e: &ThemeError) -> String {
    std::error::Error::source(e)
        .map(|source| source.to_string())
        .unwrap_or_default()
}
