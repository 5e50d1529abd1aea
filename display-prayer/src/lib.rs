//! Daily prayer timetable for a fixed location.
//!
//! Times come from a low-precision solar model: the sun's declination and
//! the equation of time give the moment it crosses the meridian and the
//! hour angles at which it reaches each twilight or shadow threshold.

pub mod astronomy;
pub mod calculator;
pub mod error;
pub mod schedule;

pub use calculator::{
    AngleCorrection, AsrConvention, CalculationMethod, Location, Prayer, PrayerCalculator,
    PrayerTimes,
};
pub use error::{PrayerError, Result};
pub use schedule::{daily_events, Event, IqamaDelays};
