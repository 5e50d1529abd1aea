use crate::calculator::Prayer;
use thiserror::Error;

#[derive(Debug, Error, PartialEq)]
pub enum PrayerError {
    /// The sun never reaches the angle that defines this prayer on the
    /// requested day, which happens close to the poles.
    #[error("sun never reaches the {prayer} angle at latitude {latitude}")]
    Unreachable { prayer: Prayer, latitude: f64 },

    #[error("invalid location: {0}")]
    InvalidLocation(String),
}

pub type Result<T> = std::result::Result<T, PrayerError>;
