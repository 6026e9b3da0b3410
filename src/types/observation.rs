//! The observations aggregate: the latest scalar readings from the nearest
//! observing station, with documented defaults for the optional payload
//! fields and the apparent-temperature pick.

use crate::align::{parse_nws_timestamp, AlignError};
use crate::nws::payload::{ObservationField, ObservationProperties};
use crate::types::timestamp::{serialize_instant, Timestamp};
use chrono::DateTime;
use chrono_tz::Tz;
use serde::Serialize;

/// One observed quantity: unit, integer-coerced value, quality-control code.
#[derive(Debug, Clone, Serialize)]
pub struct IndividualObservation {
    pub uom: Option<String>,
    pub value: i64,
    pub qc: String,
}

impl IndividualObservation {
    /// Coercion rules: a numeric value truncates to an integer, null or
    /// absent becomes 0; an absent quality-control code becomes empty.
    pub fn from_field(field: &ObservationField) -> Self {
        Self {
            uom: field.unit_code.clone(),
            value: field.value.map(|v| v as i64).unwrap_or(0),
            qc: field.quality_control.clone().unwrap_or_default(),
        }
    }

    fn absent() -> Self {
        Self {
            uom: None,
            value: 0,
            qc: String::new(),
        }
    }
}

#[derive(Debug, Clone, Serialize)]
pub struct Observations {
    pub timestamp: Timestamp,
    #[serde(serialize_with = "serialize_instant")]
    pub update_time: DateTime<Tz>,
    pub temperature: IndividualObservation,
    pub dewpoint: IndividualObservation,
    pub relative_humidity: IndividualObservation,
    pub apparent_temperature: IndividualObservation,
    pub wind_speed: IndividualObservation,
    pub barometric_pressure: IndividualObservation,
    pub max_temperature_last_24_hours: IndividualObservation,
    pub min_temperature_last_24_hours: IndividualObservation,
    pub precipitation_last_hour: IndividualObservation,
    pub precipitation_last_3_hours: IndividualObservation,
    pub precipitation_last_6_hours: IndividualObservation,
    #[serde(serialize_with = "serialize_instant")]
    pub center: DateTime<Tz>,
}

impl Observations {
    pub fn build(
        properties: &ObservationProperties,
        center: DateTime<Tz>,
    ) -> Result<Self, AlignError> {
        Ok(Self {
            timestamp: Timestamp::now(),
            update_time: parse_nws_timestamp(&properties.timestamp, center.timezone())?,
            temperature: IndividualObservation::from_field(&properties.temperature),
            dewpoint: IndividualObservation::from_field(&properties.dewpoint),
            relative_humidity: IndividualObservation::from_field(&properties.relative_humidity),
            apparent_temperature: apparent_temperature(properties),
            wind_speed: IndividualObservation::from_field(&properties.wind_speed),
            barometric_pressure: IndividualObservation::from_field(&properties.barometric_pressure),
            max_temperature_last_24_hours: IndividualObservation::from_field(
                &properties.max_temperature_last_24_hours,
            ),
            min_temperature_last_24_hours: IndividualObservation::from_field(
                &properties.min_temperature_last_24_hours,
            ),
            precipitation_last_hour: IndividualObservation::from_field(
                &properties.precipitation_last_hour,
            ),
            precipitation_last_3_hours: IndividualObservation::from_field(
                &properties.precipitation_last_3_hours,
            ),
            precipitation_last_6_hours: IndividualObservation::from_field(
                &properties.precipitation_last_6_hours,
            ),
            center,
        })
    }
}

/// Prefers wind chill when present with a real value, then heat index with a
/// real value, then the heat-index record regardless (its null or absent
/// value coercing to 0).
fn apparent_temperature(properties: &ObservationProperties) -> IndividualObservation {
    match &properties.wind_chill {
        Some(field) if field.value.is_some() => IndividualObservation::from_field(field),
        _ => match &properties.heat_index {
            Some(field) => IndividualObservation::from_field(field),
            None => IndividualObservation::absent(),
        },
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::reference_time::FORECAST_ZONE;
    use chrono::TimeZone;

    fn center() -> DateTime<Tz> {
        FORECAST_ZONE.with_ymd_and_hms(2024, 1, 15, 6, 0, 0).unwrap()
    }

    fn field(value: Option<f64>) -> ObservationField {
        ObservationField {
            unit_code: Some("wmoUnit:degC".to_string()),
            value,
            quality_control: Some("V".to_string()),
        }
    }

    fn base_properties() -> ObservationProperties {
        ObservationProperties {
            timestamp: "2024-01-15T05:52:00+00:00".to_string(),
            ..Default::default()
        }
    }

    #[test]
    fn test_value_truncates_to_integer() {
        let observation = IndividualObservation::from_field(&field(Some(-3.7)));
        assert_eq!(observation.value, -3);
        assert_eq!(observation.qc, "V");
        assert_eq!(observation.uom.as_deref(), Some("wmoUnit:degC"));
    }

    #[test]
    fn test_null_value_defaults_to_zero() {
        let observation = IndividualObservation::from_field(&field(None));
        assert_eq!(observation.value, 0);
    }

    #[test]
    fn test_missing_optional_fields_default() {
        let observation = IndividualObservation::from_field(&ObservationField::default());
        assert!(observation.uom.is_none());
        assert_eq!(observation.value, 0);
        assert_eq!(observation.qc, "");
    }

    #[test]
    fn test_apparent_temperature_prefers_wind_chill() {
        let mut properties = base_properties();
        properties.wind_chill = Some(field(Some(-8.0)));
        properties.heat_index = Some(field(Some(30.0)));
        assert_eq!(apparent_temperature(&properties).value, -8);
    }

    #[test]
    fn test_apparent_temperature_falls_through_null_wind_chill() {
        let mut properties = base_properties();
        properties.wind_chill = Some(field(None));
        properties.heat_index = Some(field(Some(30.0)));
        assert_eq!(apparent_temperature(&properties).value, 30);
    }

    #[test]
    fn test_apparent_temperature_null_heat_index_yields_zero() {
        let mut properties = base_properties();
        properties.heat_index = Some(field(None));
        let pick = apparent_temperature(&properties);
        assert_eq!(pick.value, 0);
        assert_eq!(pick.uom.as_deref(), Some("wmoUnit:degC"));
    }

    #[test]
    fn test_apparent_temperature_fully_absent() {
        let pick = apparent_temperature(&base_properties());
        assert_eq!(pick.value, 0);
        assert!(pick.uom.is_none());
    }

    #[test]
    fn test_build_parses_update_time_into_forecast_zone() {
        let observations = Observations::build(&base_properties(), center()).unwrap();
        let expected = FORECAST_ZONE
            .with_ymd_and_hms(2024, 1, 15, 5, 52, 0)
            .unwrap();
        assert_eq!(observations.update_time, expected);
        assert_eq!(observations.center, center());
    }

    #[test]
    fn test_build_rejects_malformed_update_time() {
        let mut properties = base_properties();
        properties.timestamp = "soon".to_string();
        assert!(Observations::build(&properties, center()).is_err());
    }
}
