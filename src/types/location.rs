//! Geographic records and the full per-location aggregate the build pass
//! assembles each refresh cycle.

use crate::types::forecast::Forecast;
use crate::types::observation::Observations;
use crate::types::products::{DailyHydrometeorologicalProducts, FreezingLevel};
use crate::types::summary::ThreeNumberSummary;
use crate::types::timestamp::Timestamp;
use serde::{Serialize, Serializer};
use std::fmt;

/// A geographical coordinate: latitude first, longitude second.
///
/// Serializes (and formats in NWS request paths) as `lat,lon` with four
/// decimals, the maximum precision the NWS API accepts.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct LatLon(pub f64, pub f64);

impl fmt::Display for LatLon {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:.4},{:.4}", self.0, self.1)
    }
}

impl Serialize for LatLon {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}

/// The forecast grid cell a point resolves to, plus its nearest radar site.
#[derive(Debug, Clone, Serialize)]
pub struct Gridpoint {
    pub timestamp: Timestamp,
    /// Municipality the grid cell is relative to.
    pub mun: String,
    pub state: String,
    /// Forecast office identifier.
    pub wfo: String,
    pub grid_x: i64,
    pub grid_y: i64,
    pub radar: String,
}

/// The land zone containing a point.
#[derive(Debug, Clone, Serialize)]
pub struct Zone {
    pub timestamp: Timestamp,
    pub id: String,
    pub name: String,
}

/// An observing station near a grid cell.
#[derive(Debug, Clone, Serialize)]
pub struct Station {
    pub timestamp: Timestamp,
    pub latlon: LatLon,
    pub id: String,
    pub name: String,
}

/// An independent re-fetch of grid data and forecast for a station's own
/// coordinates, kept alongside the main forecast as a comparison point.
#[derive(Debug, Clone, Serialize)]
pub struct Control {
    pub timestamp: Timestamp,
    pub latlon: LatLon,
    pub grid_data: Gridpoint,
    pub forecast: Forecast,
}

/// Everything known about one location after a build pass, in dependency
/// order. Rebuilt wholesale each refresh cycle and never mutated.
#[derive(Debug, Clone, Serialize)]
pub struct Location {
    pub timestamp: Timestamp,
    pub latlon: LatLon,
    pub grid_data: Gridpoint,
    pub station: Station,
    pub control: Control,
    pub zone: Zone,
    pub forecast: Forecast,
    pub observations: Observations,
    pub daily_hydrometeorological_products: DailyHydrometeorologicalProducts,
    pub freezing_level: FreezingLevel,
    pub three_number_summary: ThreeNumberSummary,
    pub snow_day_prediction_today: f64,
}

/// The predictions-only projection of a location aggregate.
#[derive(Debug, Clone, Copy, Serialize)]
pub struct PredictionSummary {
    pub snow_day_today: f64,
}

impl Location {
    pub fn predictions(&self) -> PredictionSummary {
        PredictionSummary {
            snow_day_today: self.snow_day_prediction_today,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_latlon_formats_to_four_decimals() {
        assert_eq!(LatLon(40.712775, -74.005973).to_string(), "40.7128,-74.0060");
        assert_eq!(LatLon(42.0, -71.5).to_string(), "42.0000,-71.5000");
    }

    #[test]
    fn test_latlon_serializes_as_string() {
        let value = serde_json::to_value(LatLon(42.0, -71.5)).unwrap();
        assert_eq!(value, serde_json::json!("42.0000,-71.5000"));
    }
}
