use std::path::PathBuf;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum ThemeError {
    /// The catalog directory could not be listed. Nothing can be served.
    #[error("failed to read image catalog {}", path.display())]
    CatalogRead {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// A single image is unreadable or not a supported format.
    #[error("failed to decode image {}", path.display())]
    Decode {
        path: PathBuf,
        #[source]
        source: image::ImageError,
    },

    #[error("region fraction {0} must be within (0, 0.5]")]
    InvalidFraction(f64),

    #[error("failed to start theming workers")]
    WorkerPool(#[from] rayon::ThreadPoolBuildError),
}

pub type Result<T> = std::result::Result<T, ThemeError>;
