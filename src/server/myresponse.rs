use serde::Serialize;

use crate::timing::daily::DayHours;
use crate::timing::format::{day_name, format_time};

/// The Response struct used to send one day of the hours listing back to the
/// client. `label` is the display string the frontend can show as-is.
#[derive(Serialize, Clone)]
pub struct DayHoursResponse {
    day: String,
    closed: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    open: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    close: Option<f64>,
    label: String,
}

impl DayHoursResponse {
    pub fn new(day: usize, hours: Option<DayHours>) -> Self {
        match hours {
            Some(hours) => Self {
                day: day_name(day).to_string(),
                closed: false,
                open: Some(hours.open()),
                close: Some(hours.close()),
                label: format!(
                    "{} - {}",
                    format_time(hours.open()),
                    format_time(hours.close())
                ),
            },
            None => Self {
                day: day_name(day).to_string(),
                closed: true,
                open: None,
                close: None,
                label: "Closed".to_string(),
            },
        }
    }
}
