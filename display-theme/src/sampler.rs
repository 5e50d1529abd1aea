use crate::color::Color;
use crate::region::ImageRegion;
use image::RgbImage;

/// Extracts representative colors from a region of an image.
pub trait ColorSampler: Send + Sync {
    /// Colors ranked by prominence, most prominent first. May be empty when
    /// the region has nothing to sample.
    fn rank(&self, image: &RgbImage, region: ImageRegion) -> Vec<Color>;

    /// The most prominent color, or black when nothing could be extracted.
    fn dominant(&self, image: &RgbImage, region: ImageRegion) -> Color {
        self.rank(image, region)
            .first()
            .copied()
            .unwrap_or(Color::BLACK)
    }
}

impl<S: ColorSampler + ?Sized> ColorSampler for Box<S> {
    fn rank(&self, image: &RgbImage, region: ImageRegion) -> Vec<Color> {
        (**self).rank(image, region)
    }
}

/// Histogram sampler over the eight octants of the RGB cube.
///
/// Each visited pixel falls into a bucket chosen by the high bit of its
/// channels. A bucket's color is the mean of its pixels. Buckets are
/// ranked by population, ties going to the lower bucket index, and buckets
/// holding no more than `min_share` of the visited pixels are discarded.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct OctantSampler {
    /// Approximate number of pixels to visit; larger regions are strided.
    pub sample_target: u32,
    pub min_share: f64,
}

impl Default for OctantSampler {
    fn default() -> Self {
        Self {
            sample_target: 224 * 224,
            min_share: 0.01,
        }
    }
}

#[derive(Debug, Clone, Copy, Default)]
struct Bucket {
    red: u64,
    green: u64,
    blue: u64,
    count: u64,
}

impl Bucket {
    fn add(&mut self, pixel: &image::Rgb<u8>) {
        self.red += pixel[0] as u64;
        self.green += pixel[1] as u64;
        self.blue += pixel[2] as u64;
        self.count += 1;
    }

    fn mean(&self) -> Color {
        let avg = |sum: u64| ((sum + self.count / 2) / self.count) as u8;
        Color::new(avg(self.red), avg(self.green), avg(self.blue))
    }
}

impl OctantSampler {
    fn step(&self, extent: u32) -> usize {
        let side = (self.sample_target.max(1) as f64).sqrt();
        ((extent as f64 / side) as usize).max(1)
    }

    fn octant(pixel: &image::Rgb<u8>) -> usize {
        let [r, g, b] = pixel.0.map(|c| (c >> 7) as usize);
        r << 2 | g << 1 | b
    }
}

impl ColorSampler for OctantSampler {
    fn rank(&self, image: &RgbImage, region: ImageRegion) -> Vec<Color> {
        let region = clip(region, image.width(), image.height());
        if region.is_empty() {
            return Vec::new();
        }

        let mut buckets = [Bucket::default(); 8];
        let mut total = 0u64;
        for y in region.rows().step_by(self.step(region.height)) {
            for x in region.columns().step_by(self.step(region.width)) {
                let pixel = image.get_pixel(x, y);
                buckets[Self::octant(pixel)].add(pixel);
                total += 1;
            }
        }

        let mut ranked: Vec<&Bucket> = buckets.iter().filter(|b| b.count > 0).collect();
        // Stable sort keeps octant order among equal populations.
        ranked.sort_by(|a, b| b.count.cmp(&a.count));

        ranked
            .into_iter()
            .filter(|b| b.count as f64 / total as f64 > self.min_share)
            .map(Bucket::mean)
            .collect()
    }
}

fn clip(region: ImageRegion, width: u32, height: u32) -> ImageRegion {
    let x = region.x.min(width);
    let y = region.y.min(height);
    ImageRegion::new(
        x,
        y,
        region.width.min(width - x),
        region.height.min(height - y),
    )
}
