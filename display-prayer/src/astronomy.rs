//! Low-precision solar position, good to about a minute for prayer times.

use chrono::{Datelike, NaiveDate};

pub(crate) fn sin(deg: f64) -> f64 {
    deg.to_radians().sin()
}

pub(crate) fn cos(deg: f64) -> f64 {
    deg.to_radians().cos()
}

pub(crate) fn tan(deg: f64) -> f64 {
    deg.to_radians().tan()
}

pub(crate) fn arccos(x: f64) -> f64 {
    x.acos().to_degrees()
}

pub(crate) fn arccot(x: f64) -> f64 {
    (1.0 / x).atan().to_degrees()
}

fn fix(value: f64, range: f64) -> f64 {
    value.rem_euclid(range)
}

/// Julian day at 0h UT of `date`.
pub fn julian_day(date: NaiveDate) -> f64 {
    let (mut year, mut month) = (date.year() as f64, date.month() as f64);
    if month <= 2.0 {
        year -= 1.0;
        month += 12.0;
    }
    let a = (year / 100.0).floor();
    let b = 2.0 - a + (a / 4.0).floor();

    (365.25 * (year + 4716.0)).floor() + (30.6001 * (month + 1.0)).floor() + date.day() as f64 + b
        - 1524.5
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SunPosition {
    /// Degrees.
    pub declination: f64,
    /// Hours.
    pub equation_of_time: f64,
}

pub fn sun_position(jd: f64) -> SunPosition {
    let d = jd - 2451545.0;
    let g = fix(357.529 + 0.98560028 * d, 360.0);
    let q = fix(280.459 + 0.98564736 * d, 360.0);
    let l = fix(q + 1.915 * sin(g) + 0.020 * sin(2.0 * g), 360.0);
    let e = 23.439 - 0.00000036 * d;

    let right_ascension = fix((cos(e) * sin(l)).atan2(cos(l)).to_degrees() / 15.0, 24.0);

    SunPosition {
        declination: (sin(e) * sin(l)).asin().to_degrees(),
        equation_of_time: fix(q / 15.0 - right_ascension + 12.0, 24.0) - 12.0,
    }
}
