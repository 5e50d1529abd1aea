//! Color themes for photographs shown behind the prayer display.
//!
//! Every image in the display directory gets a dominant color plus a
//! palette for its header and footer bands, so text overlaid on the photo
//! stays legible. Nothing is cached; themes are recomputed per request.

pub mod catalog;
pub mod color;
pub mod config;
pub mod deriver;
pub mod error;
pub mod format;
pub mod pipeline;
pub mod region;
pub mod sampler;

pub use catalog::{scan_catalog, CatalogEntry};
pub use color::{Color, HslColor};
pub use config::ThemeConfig;
pub use deriver::{derive_palette, Palette};
pub use error::{Result, ThemeError};
pub use format::{hex, rgba, ThemeView, OVERLAY_ALPHA};
pub use pipeline::{ImageTheme, ThemeEngine, ThemePipeline};
pub use region::{split_regions, ImageRegion, RegionSplit};
pub use sampler::{ColorSampler, OctantSampler};
