use chrono::{DateTime, Local};
use chrono_tz::Tz;

/// The current instant converted to the business's own time zone (Mountain
/// Time by default), so evaluations never depend on where the host runs.
pub fn business_datetime_now(timezone: &Tz) -> DateTime<Tz> {
    let local_datetime = Local::now();
    let business_datetime: DateTime<Tz> = local_datetime.with_timezone(timezone);
    business_datetime
}
