use crate::astronomy::{arccos, arccot, cos, julian_day, sin, sun_position, tan};
use crate::error::{PrayerError, Result};
use chrono::{DateTime, NaiveDate, NaiveTime, TimeDelta, TimeZone, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Prayer {
    Fajr,
    Sunrise,
    Zuhr,
    Asr,
    Maghrib,
    Isha,
}

impl Prayer {
    pub const ALL: [Prayer; 6] = [
        Prayer::Fajr,
        Prayer::Sunrise,
        Prayer::Zuhr,
        Prayer::Asr,
        Prayer::Maghrib,
        Prayer::Isha,
    ];

    pub fn name(self) -> &'static str {
        match self {
            Prayer::Fajr => "fajr",
            Prayer::Sunrise => "sunrise",
            Prayer::Zuhr => "zuhr",
            Prayer::Asr => "asr",
            Prayer::Maghrib => "maghrib",
            Prayer::Isha => "isha",
        }
    }

    fn index(self) -> usize {
        self as usize
    }
}

impl fmt::Display for Prayer {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Location {
    pub latitude: f64,
    pub longitude: f64,
    /// Metres above the surrounding terrain.
    pub elevation: f64,
}

impl Location {
    pub fn validate(&self) -> Result<()> {
        if !(-90.0..=90.0).contains(&self.latitude) {
            return Err(PrayerError::InvalidLocation(format!(
                "latitude {} out of range",
                self.latitude
            )));
        }
        if !(-180.0..=180.0).contains(&self.longitude) {
            return Err(PrayerError::InvalidLocation(format!(
                "longitude {} out of range",
                self.longitude
            )));
        }
        if !(self.elevation >= 0.0) {
            return Err(PrayerError::InvalidLocation(format!(
                "elevation {} must not be negative",
                self.elevation
            )));
        }
        Ok(())
    }
}

/// Twilight angles used for Fajr and Isha.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum CalculationMethod {
    /// Kementerian Agama, Indonesia.
    #[default]
    Kemenag,
    MuslimWorldLeague,
    Egyptian,
    Karachi,
    NorthAmerica,
}

impl CalculationMethod {
    /// `(fajr, isha)` depression angles in degrees.
    pub fn angles(self) -> (f64, f64) {
        match self {
            CalculationMethod::Kemenag => (20.0, 18.0),
            CalculationMethod::MuslimWorldLeague => (18.0, 17.0),
            CalculationMethod::Egyptian => (19.5, 17.5),
            CalculationMethod::Karachi => (18.0, 18.0),
            CalculationMethod::NorthAmerica => (15.0, 15.0),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum AsrConvention {
    #[default]
    Shafii,
    Hanafi,
}

impl AsrConvention {
    fn shadow_factor(self) -> f64 {
        match self {
            AsrConvention::Shafii => 1.0,
            AsrConvention::Hanafi => 2.0,
        }
    }
}

/// Per-prayer adjustment in degrees of hour angle. One degree is four
/// minutes; positive values move the time later.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct AngleCorrection([f64; 6]);

impl AngleCorrection {
    pub fn with(mut self, prayer: Prayer, degrees: f64) -> Self {
        self.0[prayer.index()] = degrees;
        self
    }

    pub fn get(&self, prayer: Prayer) -> f64 {
        self.0[prayer.index()]
    }

    /// Corrections in use at the original kiosk site.
    pub fn kiosk() -> Self {
        Self::default()
            .with(Prayer::Fajr, 0.66667)
            .with(Prayer::Sunrise, -0.66667)
            .with(Prayer::Zuhr, 1.0)
            .with(Prayer::Asr, 0.66667)
            .with(Prayer::Maghrib, 0.75)
            .with(Prayer::Isha, 0.66667)
    }
}

/// Times of one day, rounded to the minute.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PrayerTimes([DateTime<Utc>; 6]);

impl PrayerTimes {
    pub fn get(&self, prayer: Prayer) -> DateTime<Utc> {
        self.0[prayer.index()]
    }

    pub fn iter(&self) -> impl Iterator<Item = (Prayer, DateTime<Utc>)> + '_ {
        Prayer::ALL.into_iter().map(|prayer| (prayer, self.get(prayer)))
    }
}

#[derive(Debug, Clone)]
pub struct PrayerCalculator {
    location: Location,
    method: CalculationMethod,
    asr: AsrConvention,
    correction: AngleCorrection,
}

impl PrayerCalculator {
    pub fn new(location: Location) -> Result<Self> {
        location.validate()?;
        Ok(Self {
            location,
            method: CalculationMethod::default(),
            asr: AsrConvention::default(),
            correction: AngleCorrection::default(),
        })
    }

    pub fn with_method(mut self, method: CalculationMethod) -> Self {
        self.method = method;
        self
    }

    pub fn with_asr(mut self, asr: AsrConvention) -> Self {
        self.asr = asr;
        self
    }

    pub fn with_correction(mut self, correction: AngleCorrection) -> Self {
        self.correction = correction;
        self
    }

    pub fn location(&self) -> &Location {
        &self.location
    }

    pub fn times(&self, date: NaiveDate) -> Result<PrayerTimes> {
        let jd = julian_day(date) - self.location.longitude / (15.0 * 24.0);

        // Start from typical local solar times, then refine once using the
        // first estimate as the moment for the sun's position.
        let mut hours = [5.0, 6.0, 12.0, 13.0, 18.0, 18.0];
        for _ in 0..2 {
            hours = self.solar_hours(jd, &hours)?;
        }

        let midnight = Utc.from_utc_datetime(&date.and_time(NaiveTime::MIN));
        let mut times = [midnight; 6];
        for prayer in Prayer::ALL {
            let utc_hours = hours[prayer.index()] - self.location.longitude / 15.0
                + self.correction.get(prayer) / 15.0;
            let minutes = (utc_hours * 60.0).round() as i64;
            times[prayer.index()] = midnight + TimeDelta::minutes(minutes);
        }

        log::debug!("prayer times for {date}: {times:?}");
        Ok(PrayerTimes(times))
    }

    /// Local solar hours for each prayer, sampling the sun at `estimate`.
    fn solar_hours(&self, jd: f64, estimate: &[f64; 6]) -> Result<[f64; 6]> {
        let (fajr_angle, isha_angle) = self.method.angles();
        let horizon = 0.833 + 0.0347 * self.location.elevation.sqrt();
        let at = |prayer: Prayer| jd + estimate[prayer.index()] / 24.0;

        Ok([
            self.sun_angle_time(Prayer::Fajr, fajr_angle, at(Prayer::Fajr), true)?,
            self.sun_angle_time(Prayer::Sunrise, horizon, at(Prayer::Sunrise), true)?,
            self.mid_day(at(Prayer::Zuhr)),
            self.asr_time(at(Prayer::Asr))?,
            self.sun_angle_time(Prayer::Maghrib, horizon, at(Prayer::Maghrib), false)?,
            self.sun_angle_time(Prayer::Isha, isha_angle, at(Prayer::Isha), false)?,
        ])
    }

    fn mid_day(&self, jd: f64) -> f64 {
        (12.0 - sun_position(jd).equation_of_time).rem_euclid(24.0)
    }

    /// Time at which the sun is `angle` degrees below the horizon, before
    /// noon when `before_noon` is set.
    fn sun_angle_time(&self, prayer: Prayer, angle: f64, jd: f64, before_noon: bool) -> Result<f64> {
        let latitude = self.location.latitude;
        let declination = sun_position(jd).declination;
        let cos_hour_angle = (-sin(angle) - sin(declination) * sin(latitude))
            / (cos(declination) * cos(latitude));

        if !(-1.0..=1.0).contains(&cos_hour_angle) {
            return Err(PrayerError::Unreachable { prayer, latitude });
        }

        let offset = arccos(cos_hour_angle) / 15.0;
        let noon = self.mid_day(jd);
        Ok(if before_noon { noon - offset } else { noon + offset })
    }

    fn asr_time(&self, jd: f64) -> Result<f64> {
        let declination = sun_position(jd).declination;
        let factor = self.asr.shadow_factor();
        let angle = -arccot(factor + tan((self.location.latitude - declination).abs()));
        self.sun_angle_time(Prayer::Asr, angle, jd, false)
    }
}
