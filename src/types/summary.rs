//! The three-number projection of a forecast and an observations aggregate:
//! exactly the quantities the snow-day model consumes.

use crate::types::forecast::{Forecast, IndividualForecast};
use crate::types::observation::{IndividualObservation, Observations};
use crate::types::timestamp::{serialize_instant, Timestamp};
use chrono::DateTime;
use chrono_tz::Tz;
use serde::Serialize;

/// How many leading samples of a series count as "today" for the model.
const TODAY_WINDOW: usize = 8;

#[derive(Debug, Clone, Serialize)]
pub struct ThreeNumberSummary {
    pub timestamp: Timestamp,
    pub quantitative_precipitation: IndividualForecast,
    pub precipitation_last_6_hours: IndividualObservation,
    pub temperature: IndividualForecast,
    #[serde(serialize_with = "serialize_instant")]
    pub forecast_center: DateTime<Tz>,
}

impl ThreeNumberSummary {
    pub fn derive(forecast: &Forecast, observations: &Observations) -> Self {
        Self {
            timestamp: Timestamp::now(),
            quantitative_precipitation: forecast.quantitative_precipitation.clone(),
            precipitation_last_6_hours: observations.precipitation_last_6_hours.clone(),
            temperature: forecast.temperature.clone(),
            forecast_center: forecast.center,
        }
    }

    /// The model's three inputs for today: summed precipitation over the
    /// series' first eight samples, the 6-hour precipitation scalar, and the
    /// mean temperature over the first eight samples.
    ///
    /// The window is positional, not offset-keyed: it assumes each series
    /// starts at offset 0 with at least eight samples. A series built with
    /// `keep_negative` would shift the window back one hour; nothing here
    /// guards against that.
    pub fn model_inputs_today(&self) -> (f64, f64, f64) {
        let snowfall: f64 = self
            .quantitative_precipitation
            .array
            .iter()
            .take(TODAY_WINDOW)
            .map(|&(_, value)| value)
            .sum();
        let snow_on_ground = self.precipitation_last_6_hours.value as f64;

        let window: Vec<f64> = self
            .temperature
            .array
            .iter()
            .take(TODAY_WINDOW)
            .map(|&(_, value)| value)
            .collect();
        let temperature = window.iter().sum::<f64>() / window.len().max(1) as f64;

        (snowfall, snow_on_ground, temperature)
    }
}
