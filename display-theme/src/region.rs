use std::ops::Range;

/// A rectangle within an image. Bounds only, no pixel data.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct ImageRegion {
    pub x: u32,
    pub y: u32,
    pub width: u32,
    pub height: u32,
}

impl ImageRegion {
    pub const fn new(x: u32, y: u32, width: u32, height: u32) -> Self {
        Self {
            x,
            y,
            width,
            height,
        }
    }

    /// The whole of a `width` x `height` image.
    pub const fn full(width: u32, height: u32) -> Self {
        Self::new(0, 0, width, height)
    }

    pub fn is_empty(&self) -> bool {
        self.width == 0 || self.height == 0
    }

    pub fn rows(&self) -> Range<u32> {
        self.y..self.y + self.height
    }

    pub fn columns(&self) -> Range<u32> {
        self.x..self.x + self.width
    }

    pub fn area(&self) -> u64 {
        self.width as u64 * self.height as u64
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RegionSplit {
    pub header: ImageRegion,
    pub footer: ImageRegion,
}

/// Cut a header band from the top and a footer band from the bottom of an
/// image, each `fraction` of its height and spanning its full width.
///
/// `fraction` must lie in `(0, 0.5]` so the bands never overlap; this is
/// checked by [`ThemeConfig::validate`](crate::ThemeConfig::validate).
pub fn split_regions(width: u32, height: u32, fraction: f64) -> RegionSplit {
    debug_assert!(fraction > 0.0 && fraction <= 0.5);

    // The epsilon keeps exact multiples (300 * 1/3) from flooring to 99.
    let band = ((height as f64 * fraction) + 1e-9).floor() as u32;
    let band = band.min(height / 2);

    RegionSplit {
        header: ImageRegion::new(0, 0, width, band),
        footer: ImageRegion::new(0, height - band, width, band),
    }
}
