//! The forecast aggregate: one hour-aligned series per physical quantity,
//! all built from a single gridpoint payload against one shared reference
//! instant.

use crate::align::{align, AlignError, AlignedSeries};
use crate::nws::payload::{GridpointProperties, QuantityPayload};
use crate::types::timestamp::{serialize_instant, Timestamp};
use chrono::DateTime;
use chrono_tz::Tz;
use serde::Serialize;

/// One physical quantity's aligned series plus how it was built.
#[derive(Debug, Clone, Serialize)]
pub struct IndividualForecast {
    /// Unit of measure as reported upstream, absent when the source lacked it.
    pub uom: Option<String>,
    pub array: AlignedSeries,
    /// Whether multi-hour totals were spread evenly across their duration.
    pub divided: bool,
    /// Whether offsets before the reference instant were retained.
    pub kept_negative: bool,
}

impl IndividualForecast {
    pub fn build(
        quantity: &QuantityPayload,
        center: DateTime<Tz>,
        divide: bool,
        keep_negative: bool,
    ) -> Result<Self, AlignError> {
        Ok(Self {
            uom: quantity.uom.clone(),
            array: align(&quantity.values, center, divide, keep_negative)?,
            divided: divide,
            kept_negative: keep_negative,
        })
    }
}

#[derive(Debug, Clone, Serialize)]
pub struct Forecast {
    pub timestamp: Timestamp,
    pub update_time: String,
    pub temperature: IndividualForecast,
    pub dewpoint: IndividualForecast,
    pub relative_humidity: IndividualForecast,
    pub apparent_temperature: IndividualForecast,
    pub wind_speed: IndividualForecast,
    pub wind_gust: IndividualForecast,
    pub probability_of_precipitation: IndividualForecast,
    pub quantitative_precipitation: IndividualForecast,
    pub ice_accumulation: IndividualForecast,
    pub snowfall_amount: IndividualForecast,
    pub snow_level: IndividualForecast,
    pub pressure: IndividualForecast,
    #[serde(serialize_with = "serialize_instant")]
    pub center: DateTime<Tz>,
}

impl Forecast {
    /// Builds every quantity's series from one payload. The accumulation
    /// quantities (precipitation, ice, snowfall) spread their multi-hour
    /// totals across the covered hours.
    pub fn build(
        properties: &GridpointProperties,
        center: DateTime<Tz>,
    ) -> Result<Self, AlignError> {
        let series = |quantity: &QuantityPayload, divide: bool| {
            IndividualForecast::build(quantity, center, divide, false)
        };
        Ok(Self {
            timestamp: Timestamp::now(),
            update_time: properties.update_time.clone(),
            temperature: series(&properties.temperature, false)?,
            dewpoint: series(&properties.dewpoint, false)?,
            relative_humidity: series(&properties.relative_humidity, false)?,
            apparent_temperature: series(&properties.apparent_temperature, false)?,
            wind_speed: series(&properties.wind_speed, false)?,
            wind_gust: series(&properties.wind_gust, false)?,
            probability_of_precipitation: series(&properties.probability_of_precipitation, false)?,
            quantitative_precipitation: series(&properties.quantitative_precipitation, true)?,
            ice_accumulation: series(&properties.ice_accumulation, true)?,
            snowfall_amount: series(&properties.snowfall_amount, true)?,
            snow_level: series(&properties.snow_level, false)?,
            pressure: series(&properties.pressure, false)?,
            center,
        })
    }
}
