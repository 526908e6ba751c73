use chrono::{DateTime, Datelike};
use chrono_tz::Tz;
use serde::Serialize;

use crate::timing::format::day_name;
use crate::timing::schedule::{NextOpening, WeeklySchedule};

/// Long-form display of the evaluation instant, e.g.
/// "Monday, January 5, 2026, 9:30 AM".
pub const DISPLAY_FORMAT: &str = "%A, %B %-d, %Y, %-I:%M %p";

/// Snapshot of the open/closed state at a single instant, with the message
/// strings the frontend displays verbatim.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct StatusReport {
    pub open: bool,
    pub message: String,
    pub current_time: String,
    pub closes_at: Option<String>,
    pub next_opening: Option<NextOpening>,
}

impl StatusReport {
    /// Evaluates the schedule at `timestamp` and assembles the display
    /// strings. Pure with respect to its inputs.
    pub fn evaluate(timestamp: DateTime<Tz>, schedule: &WeeklySchedule) -> Self {
        let current_time = timestamp.format(DISPLAY_FORMAT).to_string();

        if schedule.is_open(timestamp) {
            let closes_at = schedule.closing_time_today(timestamp);
            let message = match &closes_at {
                Some(time) => format!("We're open! Closing at {}", time),
                None => "We're open!".to_string(),
            };
            return Self {
                open: true,
                message,
                current_time,
                closes_at,
                next_opening: None,
            };
        }

        let today = day_name(timestamp.weekday().num_days_from_sunday() as usize);
        let next_opening = schedule.next_opening(timestamp);
        let message = match &next_opening {
            None => "Currently closed.".to_string(),
            Some(next) if next.day == today => {
                format!("Currently closed. Opening today at {}", next.time)
            }
            Some(next) => format!("Currently closed. Opening {} at {}", next.day, next.time),
        };
        Self {
            open: false,
            message,
            current_time,
            closes_at: None,
            next_opening,
        }
    }
}

#[cfg(test)]
mod tests {
    use chrono::TimeZone;

    use super::*;

    fn mountain_time(day: u32, hour: u32, minute: u32) -> DateTime<Tz> {
        let timezone: Tz = "America/Denver".parse().unwrap();
        timezone
            .with_ymd_and_hms(2026, 1, day, hour, minute, 0)
            .unwrap()
    }

    #[test]
    fn open_message_names_the_closing_time() {
        let report = StatusReport::evaluate(
            mountain_time(5, 9, 30),
            &WeeklySchedule::default_hours(),
        );
        assert!(report.open);
        assert_eq!(report.message, "We're open! Closing at 6:00 PM");
        assert_eq!(report.closes_at, Some("6:00 PM".to_string()));
        assert!(report.next_opening.is_none());
    }

    #[test]
    fn closed_before_open_says_opening_today() {
        let report = StatusReport::evaluate(
            mountain_time(5, 6, 0),
            &WeeklySchedule::default_hours(),
        );
        assert!(!report.open);
        assert_eq!(report.message, "Currently closed. Opening today at 8:00 AM");
    }

    #[test]
    fn closed_sunday_points_at_monday() {
        let report = StatusReport::evaluate(
            mountain_time(4, 14, 0),
            &WeeklySchedule::default_hours(),
        );
        assert!(!report.open);
        assert_eq!(
            report.message,
            "Currently closed. Opening Monday at 8:00 AM"
        );
        assert!(report.closes_at.is_none());
    }

    #[test]
    fn all_closed_week_has_a_plain_closed_message() {
        let report = StatusReport::evaluate(
            mountain_time(5, 12, 0),
            &WeeklySchedule::new([None; 7]),
        );
        assert!(!report.open);
        assert_eq!(report.message, "Currently closed.");
        assert!(report.next_opening.is_none());
    }

    #[test]
    fn current_time_uses_the_long_display_format() {
        let report = StatusReport::evaluate(
            mountain_time(5, 9, 30),
            &WeeklySchedule::default_hours(),
        );
        assert_eq!(report.current_time, "Monday, January 5, 2026, 9:30 AM");
    }

    #[test]
    fn evaluation_is_pure_for_a_frozen_instant() {
        let schedule = WeeklySchedule::default_hours();
        let instant = mountain_time(10, 17, 0);
        assert_eq!(
            StatusReport::evaluate(instant, &schedule),
            StatusReport::evaluate(instant, &schedule)
        );
    }
}
