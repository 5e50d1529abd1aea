use crate::error::{Result, ThemeError};
use crate::format::OVERLAY_ALPHA;
use crate::sampler::OctantSampler;

/// Tunables for the theming pipeline.
#[derive(Debug, Clone, PartialEq)]
pub struct ThemeConfig {
    /// Height of the header and footer bands as a share of the image height.
    pub region_fraction: f64,
    /// Both dimensions are divided by this before sampling. `1` disables it.
    pub downscale: u32,
    pub overlay_alpha: f64,
    pub sampler: OctantSampler,
    /// Size of the worker pool used for a catalog. `0` picks one thread per CPU.
    pub workers: usize,
}

impl Default for ThemeConfig {
    fn default() -> Self {
        Self {
            region_fraction: 1.0 / 3.0,
            downscale: 2,
            overlay_alpha: OVERLAY_ALPHA,
            sampler: OctantSampler::default(),
            workers: 0,
        }
    }
}

impl ThemeConfig {
    pub fn validate(&self) -> Result<()> {
        if !(self.region_fraction > 0.0 && self.region_fraction <= 0.5) {
            return Err(ThemeError::InvalidFraction(self.region_fraction));
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_is_valid() {
        assert!(ThemeConfig::default().validate().is_ok());
    }

    #[test]
    fn fraction_bounds() {
        for bad in [0.0, -0.1, 0.51, f64::NAN] {
            let config = ThemeConfig {
                region_fraction: bad,
                ..Default::default()
            };
            assert!(matches!(config.validate(), Err(ThemeError::InvalidFraction(_))));
        }

        let half = ThemeConfig {
            region_fraction: 0.5,
            ..Default::default()
        };
        assert!(half.validate().is_ok());
    }
}
