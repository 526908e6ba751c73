const DAY_NAMES: [&str; 7] = [
    "Sunday",
    "Monday",
    "Tuesday",
    "Wednesday",
    "Thursday",
    "Friday",
    "Saturday",
];

/// Weekday name for a Sunday-first index. Wraps modulo 7 so callers can pass
/// `today + offset` directly. Every place that needs a day name goes through
/// here so the spelling can never drift.
pub fn day_name(day: usize) -> &'static str {
    DAY_NAMES[day % 7]
}

/// Formats a fractional 24-hour value as a 12-hour AM/PM label
/// (0 -> "12:00 AM", 13 -> "1:00 PM"). The schedule stores whole hours only,
/// so the minute part is always ":00"; a fractional input floors to its hour.
pub fn format_time(hour: f64) -> String {
    let hour = hour.floor() as u32 % 24;
    let ampm = if hour >= 12 { "PM" } else { "AM" };
    let hour12 = match hour {
        0 => 12,
        h if h > 12 => h - 12,
        h => h,
    };
    format!("{}:00 {}", hour12, ampm)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn format_time_handles_midnight_and_noon() {
        assert_eq!(format_time(0.0), "12:00 AM");
        assert_eq!(format_time(12.0), "12:00 PM");
    }

    #[test]
    fn format_time_converts_24h_to_12h() {
        assert_eq!(format_time(8.0), "8:00 AM");
        assert_eq!(format_time(11.0), "11:00 AM");
        assert_eq!(format_time(13.0), "1:00 PM");
        assert_eq!(format_time(18.0), "6:00 PM");
        assert_eq!(format_time(23.0), "11:00 PM");
    }

    #[test]
    fn format_time_floors_fractional_hours() {
        assert_eq!(format_time(9.5), "9:00 AM");
        assert_eq!(format_time(17.75), "5:00 PM");
    }

    #[test]
    fn day_name_is_sunday_first_and_wraps() {
        assert_eq!(day_name(0), "Sunday");
        assert_eq!(day_name(6), "Saturday");
        assert_eq!(day_name(8), "Monday");
    }
}
