use chrono_tz::Tz;
use serde::Deserialize;

use crate::timing::daily::DayHours;
use crate::timing::format::day_name;
use crate::timing::schedule::WeeklySchedule;

/// Runtime configuration, read from an optional `config.json`. Every field
/// falls back to the compiled-in defaults, so an absent or empty file means
/// the stock Mountain Time schedule on 127.0.0.1:7878.
#[derive(Deserialize)]
pub struct Config {
    #[serde(default = "default_address")]
    pub address: String,
    #[serde(default = "default_timezone")]
    pub timezone: String,
    /// Sunday-first week, `null` entries meaning closed. Absent = default
    /// hours.
    pub hours: Option<[Option<DayHours>; 7]>,
}

fn default_address() -> String {
    "127.0.0.1:7878".to_string()
}

fn default_timezone() -> String {
    "America/Denver".to_string()
}

impl Default for Config {
    fn default() -> Self {
        Self {
            address: default_address(),
            timezone: default_timezone(),
            hours: None,
        }
    }
}

impl Config {
    pub fn from_config(config: String) -> Result<Self, String> {
        match serde_json::from_str(&config) {
            Ok(data) => Ok(data),
            Err(err) => Err(format!("Could not deserialize.\n{}", err)),
        }
    }

    pub fn timezone(&self) -> Result<Tz, String> {
        self.timezone
            .parse()
            .map_err(|_| format!("Unknown timezone: {}", self.timezone))
    }

    /// Builds the weekly schedule, checking that every configured day opens
    /// before it closes.
    pub fn schedule(&self) -> Result<WeeklySchedule, String> {
        let Some(hours) = self.hours else {
            return Ok(WeeklySchedule::default_hours());
        };
        for (day, entry) in hours.iter().enumerate() {
            if let Some(entry) = entry {
                if entry.open() >= entry.close() {
                    return Err(format!(
                        "Invalid hours for {}: open ({}) must be before close ({})",
                        day_name(day),
                        entry.open(),
                        entry.close()
                    ));
                }
            }
        }
        Ok(WeeklySchedule::new(hours))
    }
}
