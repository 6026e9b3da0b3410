//! The rolling reference instant every aligned series is keyed against.
//!
//! All hour offsets are computed relative to the "forecast center": the next
//! occurrence of 06:00 local time strictly after now, in the fixed forecast
//! zone. The snapshot is captured once per build pass and threaded through as
//! a parameter so every series in one pass shares one reference.

use chrono::{DateTime, Days, Duration, LocalResult, NaiveDate, TimeZone, Utc};
use chrono_tz::Tz;

/// The fixed zone all forecast-center and record timestamps live in.
pub const FORECAST_ZONE: Tz = chrono_tz::America::New_York;

const CENTER_HOUR: u32 = 6;

/// Returns the next forecast center strictly after `now`: today's 06:00 local
/// if `now` is still before it, otherwise tomorrow's. At exactly 06:00:00 the
/// result is tomorrow's 06:00.
pub fn forecast_center_after(now: DateTime<Tz>) -> DateTime<Tz> {
    let tz = now.timezone();
    let today = center_on(now.date_naive(), tz);
    if now >= today {
        center_on(now.date_naive() + Days::new(1), tz)
    } else {
        today
    }
}

/// Captures the current forecast center from the wall clock.
pub fn capture() -> DateTime<Tz> {
    forecast_center_after(Utc::now().with_timezone(&FORECAST_ZONE))
}

fn center_on(date: NaiveDate, tz: Tz) -> DateTime<Tz> {
    // 06:00 never falls in a DST transition in the forecast zone, but a
    // total function is still wanted here.
    let naive = date.and_hms_opt(CENTER_HOUR, 0, 0).unwrap_or(date.into());
    match tz.from_local_datetime(&naive) {
        LocalResult::Single(center) => center,
        LocalResult::Ambiguous(earliest, _) => earliest,
        LocalResult::None => tz.from_utc_datetime(&(naive + Duration::hours(1))),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_before_six_returns_todays_center() {
        let now = FORECAST_ZONE.with_ymd_and_hms(2024, 1, 15, 5, 0, 0).unwrap();
        let expected = FORECAST_ZONE.with_ymd_and_hms(2024, 1, 15, 6, 0, 0).unwrap();
        assert_eq!(forecast_center_after(now), expected);
    }

    #[test]
    fn test_after_six_returns_tomorrows_center() {
        let now = FORECAST_ZONE.with_ymd_and_hms(2024, 1, 15, 7, 0, 0).unwrap();
        let expected = FORECAST_ZONE.with_ymd_and_hms(2024, 1, 16, 6, 0, 0).unwrap();
        assert_eq!(forecast_center_after(now), expected);
    }

    #[test]
    fn test_exactly_six_rolls_to_tomorrow() {
        let now = FORECAST_ZONE.with_ymd_and_hms(2024, 1, 15, 6, 0, 0).unwrap();
        let expected = FORECAST_ZONE.with_ymd_and_hms(2024, 1, 16, 6, 0, 0).unwrap();
        assert_eq!(forecast_center_after(now), expected);
    }

    #[test]
    fn test_rolls_over_month_boundary() {
        let now = FORECAST_ZONE.with_ymd_and_hms(2024, 1, 31, 23, 0, 0).unwrap();
        let expected = FORECAST_ZONE.with_ymd_and_hms(2024, 2, 1, 6, 0, 0).unwrap();
        assert_eq!(forecast_center_after(now), expected);
    }

    #[test]
    fn test_capture_is_in_the_future() {
        let now = Utc::now().with_timezone(&FORECAST_ZONE);
        assert!(capture() > now);
    }
}
