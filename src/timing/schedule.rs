use chrono::{DateTime, Datelike, Timelike};
use chrono_tz::Tz;
use serde::Serialize;

use super::daily::DayHours;
use super::format::{day_name, format_time};

/// A fixed weekly schedule, indexed 0 = Sunday through 6 = Saturday.
/// `None` for a day means closed all day. Built once at startup and shared
/// read-only afterwards; every query recomputes from the timestamp it is
/// given, so results for a frozen instant never change between calls.
#[derive(Debug, Clone)]
pub struct WeeklySchedule {
    timings: [Option<DayHours>; 7],
}

/// The next day the business opens, with the opening hour already formatted
/// for display.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct NextOpening {
    pub day: String,
    pub time: String,
}

impl WeeklySchedule {
    pub fn new(timings: [Option<DayHours>; 7]) -> Self {
        Self { timings }
    }

    /// The compiled-in hours: Monday to Friday 8 AM - 6 PM, Saturday
    /// 9 AM - 4 PM, closed Sunday.
    pub fn default_hours() -> Self {
        let weekday = Some(DayHours::new(8.0, 18.0));
        Self::new([
            None,
            weekday,
            weekday,
            weekday,
            weekday,
            weekday,
            Some(DayHours::new(9.0, 16.0)),
        ])
    }

    pub fn day(&self, day: usize) -> Option<DayHours> {
        self.timings[day % 7]
    }

    /// Hour-of-day as a real number (hour + minutes/60), comparable against
    /// the open/close bounds.
    fn fractional_hour(timestamp: &DateTime<Tz>) -> f64 {
        timestamp.hour() as f64 + timestamp.minute() as f64 / 60.0
    }

    /// Whether the business is open at `timestamp`. The opening hour is
    /// inclusive, the closing hour itself already counts as closed.
    pub fn is_open(&self, timestamp: DateTime<Tz>) -> bool {
        let day = timestamp.weekday().num_days_from_sunday() as usize;
        let Some(hours) = self.timings[day] else {
            return false;
        };
        let now = Self::fractional_hour(&timestamp);
        hours.open() <= now && now < hours.close()
    }

    /// The next time the business opens, seen from `timestamp`.
    ///
    /// Today still counts if the opening hour is ahead of us; otherwise the
    /// following days are scanned in order. Returns `None` only when no day
    /// of the week has hours at all.
    pub fn next_opening(&self, timestamp: DateTime<Tz>) -> Option<NextOpening> {
        let day = timestamp.weekday().num_days_from_sunday() as usize;
        let now = Self::fractional_hour(&timestamp);

        if let Some(hours) = self.timings[day] {
            if now < hours.open() {
                return Some(NextOpening {
                    day: day_name(day).to_string(),
                    time: format_time(hours.open()),
                });
            }
        }

        // Offsets run 1..=7 so that a week with a single open day wraps all
        // the way back to that same day next week.
        for offset in 1..=7 {
            let next = (day + offset) % 7;
            if let Some(hours) = self.timings[next] {
                return Some(NextOpening {
                    day: day_name(next).to_string(),
                    time: format_time(hours.open()),
                });
            }
        }
        None
    }

    /// Today's closing time formatted for display, or `None` if closed today.
    pub fn closing_time_today(&self, timestamp: DateTime<Tz>) -> Option<String> {
        let day = timestamp.weekday().num_days_from_sunday() as usize;
        self.timings[day].map(|hours| format_time(hours.close()))
    }
}
