use serde::{Deserialize, Serialize};

/// Opening and closing hour for a single day, as fractional 24-hour values
/// (8.0 = 8:00 AM, 18.0 = 6:00 PM). The schedule only ever stores whole
/// hours; the fraction exists so the current wall-clock time can be compared
/// against the bounds directly.
#[derive(Copy, Clone, Debug, Serialize, Deserialize)]
pub struct DayHours {
    open: f64,
    close: f64,
}

impl DayHours {
    pub fn new(open: f64, close: f64) -> Self {
        Self { open, close }
    }

    pub fn open(&self) -> f64 {
        self.open
    }

    pub fn close(&self) -> f64 {
        self.close
    }
}
