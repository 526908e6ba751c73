use std::sync::Arc;

use chrono_tz::Tz;
use tokio::time::{sleep_until, Duration, Instant};

use crate::timing::business_datetime_now::business_datetime_now;
use crate::timing::schedule::WeeklySchedule;

use super::report::StatusReport;

/// Background task that re-evaluates the status once a minute and logs
/// open/closed transitions. The frontend polls /api/status for the same
/// information; this loop only exists so the server log tells the story too.
pub struct StatusWatcher {
    schedule: Arc<WeeklySchedule>,
    timezone: Tz,
}

impl StatusWatcher {
    pub fn new(schedule: Arc<WeeklySchedule>, timezone: Tz) -> Self {
        Self { schedule, timezone }
    }

    pub async fn run(self) {
        println!("Watching business hours");
        let mut last_open: Option<bool> = None;
        loop {
            let now = business_datetime_now(&self.timezone);
            let report = StatusReport::evaluate(now, &self.schedule);
            if last_open != Some(report.open) {
                println!("{} - {}", report.current_time, report.message);
                last_open = Some(report.open);
            }
            Self::standard_sleep().await;
        }
    }

    async fn standard_sleep() {
        sleep_until(Instant::now() + Duration::from_secs(60)).await;
    }
}
