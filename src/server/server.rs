use bytes::Bytes;
use chrono_tz::Tz;
use http_body_util::Full;
use hyper::{body::Incoming, service::Service, Method, Request, Response, StatusCode};
use serde::Serialize;
use url_escape::decode;

use std::{collections::HashMap, future::Future, pin::Pin, sync::Arc};

use crate::status::report::StatusReport;
use crate::timing::business_datetime_now::business_datetime_now;
use crate::timing::format::day_name;
use crate::timing::schedule::WeeklySchedule;

use super::myresponse::DayHoursResponse;

/// The Server
///
/// This is THE struct that handles all API endpoints. The schedule itself is
/// read-only, so a request only ever needs the current instant in the
/// business time zone and a lookup - no storage behind it.
///
/// This struct implements the `Service` trait from `hyper` which allows it to
/// be used as a hyper service. It is cloned for each connection, which is
/// cheap since the schedule sits behind an `Arc`.
#[derive(Clone)]
pub struct Server {
    schedule: Arc<WeeklySchedule>,
    timezone: Tz,
}

impl Server {
    pub fn setup(schedule: Arc<WeeklySchedule>, timezone: Tz) -> Self {
        Self { schedule, timezone }
    }

    /// Parses the query parameters and returns a `hashmap` of key pair values
    /// Returns `None` if the parameters are malformed
    fn parse_params(text: &str) -> Option<HashMap<String, String>> {
        let mut map: HashMap<String, String> = HashMap::new();
        for pairs in text.split('&') {
            let mut iterator = pairs.split('=');
            map.insert(
                iterator.next()?.to_string(),
                decode(iterator.next()?).to_string(),
            );
        }
        Some(map)
    }

    /// Accepts a day as a Sunday-first index ("0".."6") or a weekday name,
    /// case-insensitive.
    fn parse_day(value: &str) -> Option<usize> {
        if let Ok(day) = value.parse::<usize>() {
            return if day < 7 { Some(day) } else { None };
        }
        (0..7).find(|&day| day_name(day).eq_ignore_ascii_case(value))
    }

    /// The /api/status API endpoint.
    ///
    /// Evaluates the schedule against the current instant on every request,
    /// so the answer is never stale.
    fn status(&self) -> Result<Response<Full<Bytes>>, hyper::Error> {
        let now = business_datetime_now(&self.timezone);
        let report = StatusReport::evaluate(now, &self.schedule);
        Self::ok_data(report)
    }

    /// The /api/hours API endpoint.
    ///
    /// Without parameters, returns the whole week Sunday-first. With
    /// `?day=N` or `?day=Monday`, returns just that day's entry.
    fn hours(&self, req: Request<Incoming>) -> Result<Response<Full<Bytes>>, hyper::Error> {
        let Some(params) = req.uri().query() else {
            let week: Vec<DayHoursResponse> = (0..7)
                .map(|day| DayHoursResponse::new(day, self.schedule.day(day)))
                .collect();
            return Self::ok_data(week);
        };

        let Some(map) = Self::parse_params(params) else {
            return Self::bad_request("Malformed Parameters.");
        };

        let Some(day) = map.get("day") else {
            return Self::bad_request("day not provided.");
        };

        let Some(day) = Self::parse_day(day) else {
            return Self::bad_request("Malformed Day. Expected 0-6 or a weekday name.");
        };

        Self::ok_data(DayHoursResponse::new(day, self.schedule.day(day)))
    }

    /// Return a 200 OK response with the data provided.
    fn ok_data<T: Serialize>(body: T) -> Result<Response<Full<Bytes>>, hyper::Error> {
        let data = serde_json::to_string(&body).unwrap();
        let res = Response::builder()
            .status(StatusCode::OK)
            .body(Full::new(Bytes::from(data)))
            .unwrap();
        Ok(res)
    }

    /// Return a 404 Not Found response with the message provided. The message
    /// here is optional. Leave it empty for no message.
    fn not_found(message: &str) -> Result<Response<Full<Bytes>>, hyper::Error> {
        let res = Response::builder()
            .status(StatusCode::NOT_FOUND)
            .body(Full::new(if message.is_empty() {
                Bytes::new()
            } else {
                Bytes::from(format!("{{\"error\": \"{}\" }}", message))
            }))
            .unwrap();
        Ok(res)
    }

    /// Return a 400 Bad Request response with the message provided.
    fn bad_request(message: &str) -> Result<Response<Full<Bytes>>, hyper::Error> {
        let res = Response::builder()
            .status(StatusCode::BAD_REQUEST)
            .body(Full::new(Bytes::from(format!(
                "{{\"error\": \"{}\" }}",
                message
            ))))
            .unwrap();
        Ok(res)
    }
}

impl Service<Request<Incoming>> for Server {
    type Response = Response<Full<Bytes>>;
    type Error = hyper::Error;
    type Future = Pin<Box<dyn Future<Output = Result<Self::Response, Self::Error>> + Send>>;

    fn call(&self, req: Request<Incoming>) -> Self::Future {
        let res = match req.method() {
            &Method::GET => match req.uri().path() {
                "/api/status" => self.status(),
                "/api/hours" => self.hours(req),
                _ => Server::not_found(""),
            },
            _ => Server::not_found(""),
        };

        Box::pin(async { res })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse_day_accepts_indices_and_names() {
        assert_eq!(Server::parse_day("0"), Some(0));
        assert_eq!(Server::parse_day("6"), Some(6));
        assert_eq!(Server::parse_day("Monday"), Some(1));
        assert_eq!(Server::parse_day("saturday"), Some(6));
    }

    #[test]
    fn parse_day_rejects_out_of_range_and_garbage() {
        assert_eq!(Server::parse_day("7"), None);
        assert_eq!(Server::parse_day("Funday"), None);
        assert_eq!(Server::parse_day(""), None);
    }

    #[test]
    fn parse_params_splits_key_pairs() {
        let map = Server::parse_params("day=Monday&extra=1").unwrap();
        assert_eq!(map.get("day"), Some(&"Monday".to_string()));
        assert_eq!(map.get("extra"), Some(&"1".to_string()));
    }

    #[test]
    fn parse_params_rejects_malformed_input() {
        assert!(Server::parse_params("day").is_none());
    }
}
