//! Creation timestamps carried by every aggregate record, and the serde
//! helper that renders instants as `YYYY-MM-DDTHH:MM:SS+HH:MM`.

use crate::reference_time::FORECAST_ZONE;
use chrono::{DateTime, Utc};
use chrono_tz::Tz;
use serde::{Serialize, Serializer};
use std::fmt;

const TIMESTAMP_FORMAT: &str = "%Y-%m-%dT%H:%M:%S%:z";

/// Formats an instant without sub-second digits and with a colon in the
/// offset, the shape every record timestamp serializes to.
pub fn format_timestamp(instant: &DateTime<Tz>) -> String {
    instant.format(TIMESTAMP_FORMAT).to_string()
}

/// Serde helper for `DateTime<Tz>` fields on record structs.
pub(crate) fn serialize_instant<S: Serializer>(
    instant: &DateTime<Tz>,
    serializer: S,
) -> Result<S::Ok, S::Error> {
    serializer.collect_str(&instant.format(TIMESTAMP_FORMAT))
}

/// The moment a record was built, in the forecast zone.
#[derive(Debug, Clone, PartialEq)]
pub struct Timestamp(DateTime<Tz>);

impl Timestamp {
    pub fn now() -> Self {
        Self(Utc::now().with_timezone(&FORECAST_ZONE))
    }

    pub fn instant(&self) -> DateTime<Tz> {
        self.0
    }
}

impl fmt::Display for Timestamp {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", format_timestamp(&self.0))
    }
}

impl Serialize for Timestamp {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serialize_instant(&self.0, serializer)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    #[test]
    fn test_format_has_no_subseconds_and_colon_offset() {
        let instant = FORECAST_ZONE
            .with_ymd_and_hms(2024, 1, 15, 6, 30, 5)
            .unwrap();
        assert_eq!(format_timestamp(&instant), "2024-01-15T06:30:05-05:00");
    }

    #[test]
    fn test_summer_offset() {
        let instant = FORECAST_ZONE
            .with_ymd_and_hms(2024, 7, 15, 6, 0, 0)
            .unwrap();
        assert_eq!(format_timestamp(&instant), "2024-07-15T06:00:00-04:00");
    }

    #[test]
    fn test_serializes_as_string() {
        let instant = FORECAST_ZONE
            .with_ymd_and_hms(2024, 1, 15, 6, 0, 0)
            .unwrap();
        let value = serde_json::to_value(Timestamp(instant)).unwrap();
        assert_eq!(value, serde_json::json!("2024-01-15T06:00:00-05:00"));
    }
}
