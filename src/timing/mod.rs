pub mod business_datetime_now;
pub mod daily;
pub mod format;
pub mod schedule;
