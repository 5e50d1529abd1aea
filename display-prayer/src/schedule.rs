use crate::calculator::{Prayer, PrayerCalculator};
use crate::error::Result;
use chrono::{DateTime, NaiveDate, TimeDelta, Utc};
use serde::Serialize;

/// One entry of the day's timetable as sent to the display.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Event {
    pub name: String,
    /// Unix milliseconds.
    pub time: i64,
    /// Unix milliseconds of the congregational prayer, if there is one.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub iqama: Option<i64>,
}

impl Event {
    fn new(name: &str, time: DateTime<Utc>, iqama: Option<DateTime<Utc>>) -> Self {
        Self {
            name: name.to_string(),
            time: time.timestamp_millis(),
            iqama: iqama.map(|t| t.timestamp_millis()),
        }
    }
}

/// Wait between the call to prayer and the iqama.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct IqamaDelays {
    pub fajr: TimeDelta,
    pub zuhr: TimeDelta,
    pub asr: TimeDelta,
    pub maghrib: TimeDelta,
    pub isha: TimeDelta,
}

impl Default for IqamaDelays {
    fn default() -> Self {
        Self {
            fajr: TimeDelta::minutes(20),
            zuhr: TimeDelta::minutes(15),
            asr: TimeDelta::minutes(10),
            maghrib: TimeDelta::minutes(10),
            isha: TimeDelta::minutes(10),
        }
    }
}

impl IqamaDelays {
    pub fn get(&self, prayer: Prayer) -> Option<TimeDelta> {
        match prayer {
            Prayer::Fajr => Some(self.fajr),
            Prayer::Sunrise => None,
            Prayer::Zuhr => Some(self.zuhr),
            Prayer::Asr => Some(self.asr),
            Prayer::Maghrib => Some(self.maghrib),
            Prayer::Isha => Some(self.isha),
        }
    }
}

/// The six times of `date` followed by the next morning's Fajr, which the
/// display counts down to after Isha.
pub fn daily_events(
    calculator: &PrayerCalculator,
    date: NaiveDate,
    delays: &IqamaDelays,
) -> Result<Vec<Event>> {
    let times = calculator.times(date)?;

    let mut events: Vec<Event> = times
        .iter()
        .map(|(prayer, time)| Event::new(prayer.name(), time, delays.get(prayer).map(|d| time + d)))
        .collect();

    let next_fajr = times.get(Prayer::Fajr) + TimeDelta::days(1);
    events.push(Event::new("nextFajr", next_fajr, None));

    Ok(events)
}
