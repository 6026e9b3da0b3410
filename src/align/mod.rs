//! Temporal alignment of NWS interval records.
//!
//! NWS gridpoint quantities arrive as irregular `(start time, duration, value)`
//! records. This module converts one such sequence into a dense series of
//! `(hour offset, value)` samples relative to a shared reference instant (the
//! forecast center), covering at most the 24-hour horizon after it.

pub(crate) mod error;

use chrono::{DateTime, Duration, NaiveDateTime, TimeZone};
use chrono_tz::Tz;
use serde::Deserialize;

pub use error::AlignError;

/// One raw interval record from an NWS gridpoint quantity: a start time with
/// an ISO-8601 duration suffix (`2024-01-15T06:00:00+00:00/PT3H`) and a value.
#[derive(Debug, Clone, Deserialize)]
pub struct TimedValue {
    #[serde(rename = "validTime")]
    pub valid_time: String,
    pub value: Option<f64>,
}

/// An hour-aligned series: ordered `(hour offset, value)` pairs relative to
/// the reference instant the series was built against.
pub type AlignedSeries = Vec<(i64, f64)>;

const HORIZON_HOURS: i64 = 23;

/// Parses the duration portion of an NWS `validTime` into whole hours.
///
/// Accepts the `PnDTnH` subset (days and/or hours, no smaller units), with an
/// optional leading `P`. Either piece may be absent and contributes 0; a
/// string matching neither pattern yields 0 rather than an error.
pub fn parse_duration_hours(duration: &str) -> i64 {
    let rest = duration.strip_prefix('P').unwrap_or(duration);
    let (day_part, hour_part) = match rest.split_once('T') {
        Some((days, hours)) => (days, Some(hours)),
        None => (rest, None),
    };

    let days = day_part
        .strip_suffix('D')
        .and_then(|n| n.parse::<i64>().ok())
        .unwrap_or(0);
    let hours = hour_part
        .and_then(|h| h.strip_suffix('H'))
        .and_then(|n| n.parse::<i64>().ok())
        .unwrap_or(0);

    days * 24 + hours
}

/// Parses an NWS timestamp into the given zone.
///
/// Only the first 19 characters (`YYYY-MM-DDTHH:MM:SS`) are read; sub-second
/// digits and the record's own offset suffix are ignored and the wall-clock
/// time is interpreted directly in `tz`.
pub fn parse_nws_timestamp(timestamp: &str, tz: Tz) -> Result<DateTime<Tz>, AlignError> {
    let head = timestamp
        .get(..19)
        .ok_or_else(|| AlignError::InvalidTimestamp(timestamp.to_string()))?;
    let naive = NaiveDateTime::parse_from_str(head, "%Y-%m-%dT%H:%M:%S")
        .map_err(|_| AlignError::InvalidTimestamp(timestamp.to_string()))?;
    tz.from_local_datetime(&naive)
        .earliest()
        .ok_or_else(|| AlignError::InvalidTimestamp(timestamp.to_string()))
}

/// Splits an NWS `validTime` into its start instant and duration in hours.
pub fn parse_valid_time(valid_time: &str, tz: Tz) -> Result<(DateTime<Tz>, i64), AlignError> {
    let (start, duration) = match valid_time.split_once('/') {
        Some((start, duration)) => (start, parse_duration_hours(duration)),
        None => (valid_time, 0),
    };
    Ok((parse_nws_timestamp(start, tz)?, duration))
}

/// Aligns a sequence of interval records against a reference instant.
///
/// Each record contributes one sample per covered hour, keyed by the whole
/// number of hours elapsed between that hour and `reference` (floor of
/// elapsed seconds over 3600). Negative offsets are skipped unless
/// `keep_negative` is set. With `divide`, a record's value is spread evenly
/// across its covered hours instead of repeated.
///
/// The series is cut off on the append that reaches offset 23: nothing past
/// that sample is emitted, so input ordering materially affects the output
/// when records are not chronologically sorted. Records are deliberately not
/// sorted or deduplicated first.
///
/// When no sample survives the filters (or `records` is empty), a zero-filled
/// series spanning offsets `0..=23` (`-1..=23` with `keep_negative`) is
/// returned instead.
pub fn align(
    records: &[TimedValue],
    reference: DateTime<Tz>,
    divide: bool,
    keep_negative: bool,
) -> Result<AlignedSeries, AlignError> {
    let tz = reference.timezone();
    let mut samples: AlignedSeries = Vec::new();

    'records: for record in records {
        let (start, duration) = parse_valid_time(&record.valid_time, tz)?;
        let value = record.value.unwrap_or(0.0);
        for delta in 0..duration {
            let elapsed = start + Duration::hours(delta) - reference;
            let offset = elapsed.num_seconds().div_euclid(3600);
            if offset < 0 && !keep_negative {
                continue;
            }
            let sample = if divide { value / duration as f64 } else { value };
            samples.push((offset, sample));
            if offset >= HORIZON_HOURS {
                break 'records;
            }
        }
    }

    if samples.is_empty() {
        let bottom = if keep_negative { -1 } else { 0 };
        samples = (bottom..=HORIZON_HOURS).map(|hour| (hour, 0.0)).collect();
    }
    Ok(samples)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::reference_time::FORECAST_ZONE;
    use chrono::TimeZone;

    fn reference() -> DateTime<Tz> {
        FORECAST_ZONE.with_ymd_and_hms(2024, 1, 15, 6, 0, 0).unwrap()
    }

    fn record(valid_time: &str, value: f64) -> TimedValue {
        TimedValue {
            valid_time: valid_time.to_string(),
            value: Some(value),
        }
    }

    #[test]
    fn test_parse_duration_days_only() {
        assert_eq!(parse_duration_hours("P3D"), 72);
        assert_eq!(parse_duration_hours("3D"), 72);
    }

    #[test]
    fn test_parse_duration_hours_only() {
        assert_eq!(parse_duration_hours("PT5H"), 5);
        assert_eq!(parse_duration_hours("T5H"), 5);
    }

    #[test]
    fn test_parse_duration_combined() {
        assert_eq!(parse_duration_hours("P3DT5H"), 77);
        assert_eq!(parse_duration_hours("P1DT1H"), 25);
    }

    #[test]
    fn test_parse_duration_unmatched_is_zero() {
        assert_eq!(parse_duration_hours(""), 0);
        assert_eq!(parse_duration_hours("PT30M"), 0);
        assert_eq!(parse_duration_hours("garbage"), 0);
    }

    #[test]
    fn test_parse_timestamp_ignores_offset_suffix() {
        let parsed = parse_nws_timestamp("2024-01-15T06:00:00+00:00", FORECAST_ZONE).unwrap();
        assert_eq!(parsed, reference());
    }

    #[test]
    fn test_parse_timestamp_rejects_short_input() {
        assert!(parse_nws_timestamp("2024-01-15", FORECAST_ZONE).is_err());
    }

    #[test]
    fn test_empty_input_zero_fills() {
        let series = align(&[], reference(), false, false).unwrap();
        assert_eq!(series.len(), 24);
        assert_eq!(series.first(), Some(&(0, 0.0)));
        assert_eq!(series.last(), Some(&(23, 0.0)));
        assert!(series.iter().all(|&(_, v)| v == 0.0));
    }

    #[test]
    fn test_empty_input_zero_fills_with_negative() {
        let series = align(&[], reference(), false, true).unwrap();
        assert_eq!(series.len(), 25);
        assert_eq!(series.first(), Some(&(-1, 0.0)));
        assert_eq!(series.last(), Some(&(23, 0.0)));
    }

    #[test]
    fn test_divide_spreads_total_across_hours() {
        let records = [record("2024-01-15T06:00:00+00:00/PT3H", 30.0)];
        let series = align(&records, reference(), true, false).unwrap();
        assert_eq!(series, vec![(0, 10.0), (1, 10.0), (2, 10.0)]);
    }

    #[test]
    fn test_without_divide_repeats_value() {
        let records = [record("2024-01-15T07:00:00+00:00/PT2H", 4.0)];
        let series = align(&records, reference(), false, false).unwrap();
        assert_eq!(series, vec![(1, 4.0), (2, 4.0)]);
    }

    #[test]
    fn test_zero_duration_contributes_nothing() {
        let records = [record("2024-01-15T06:00:00+00:00/PT0H", 5.0)];
        let series = align(&records, reference(), false, false).unwrap();
        // No sample was appended, so the zero-fill fallback kicks in.
        assert_eq!(series.len(), 24);
        assert!(series.iter().all(|&(_, v)| v == 0.0));
    }

    #[test]
    fn test_negative_offsets_skipped_by_default() {
        let records = [record("2024-01-15T04:00:00+00:00/PT4H", 1.0)];
        let series = align(&records, reference(), false, false).unwrap();
        assert_eq!(series, vec![(0, 1.0), (1, 1.0)]);
    }

    #[test]
    fn test_negative_offsets_kept_on_request() {
        let records = [record("2024-01-15T04:00:00+00:00/PT4H", 1.0)];
        let series = align(&records, reference(), false, true).unwrap();
        assert_eq!(series, vec![(-2, 1.0), (-1, 1.0), (0, 1.0), (1, 1.0)]);
    }

    #[test]
    fn test_cuts_off_at_horizon() {
        let records = [
            record("2024-01-15T06:00:00+00:00/P2D", 1.0),
            record("2024-01-17T06:00:00+00:00/PT1H", 9.0),
        ];
        let series = align(&records, reference(), false, false).unwrap();
        assert_eq!(series.len(), 24);
        assert_eq!(series.last(), Some(&(23, 1.0)));
        assert!(series.iter().all(|&(h, _)| h <= 23));
    }

    #[test]
    fn test_input_order_controls_cutoff() {
        // A late record first: it reaches the horizon immediately and the
        // earlier record is never visited.
        let records = [
            record("2024-01-16T08:00:00+00:00/PT1H", 7.0),
            record("2024-01-15T06:00:00+00:00/PT1H", 1.0),
        ];
        let series = align(&records, reference(), false, false).unwrap();
        assert_eq!(series, vec![(26, 7.0)]);
    }

    #[test]
    fn test_offsets_floor_toward_past() {
        // Start 30 minutes before the reference: elapsed -0.5h floors to -1,
        // which the negative filter then drops.
        let records = [record("2024-01-15T05:30:00+00:00/PT1H", 3.0)];
        let series = align(&records, reference(), false, false).unwrap();
        assert_eq!(series.len(), 24);
        assert!(series.iter().all(|&(_, v)| v == 0.0));

        let kept = align(&records, reference(), false, true).unwrap();
        assert_eq!(kept, vec![(-1, 3.0)]);
    }

    #[test]
    fn test_null_value_aligns_as_zero() {
        let records = [TimedValue {
            valid_time: "2024-01-15T06:00:00+00:00/PT1H".to_string(),
            value: None,
        }];
        let series = align(&records, reference(), false, false).unwrap();
        assert_eq!(series, vec![(0, 0.0)]);
    }

    #[test]
    fn test_malformed_start_time_is_an_error() {
        let records = [record("not-a-time/PT1H", 1.0)];
        assert!(align(&records, reference(), false, false).is_err());
    }
}
