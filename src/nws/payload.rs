//! Serde shapes for the NWS API responses this crate consumes. Only the
//! fields the record builders read are declared; everything else in the
//! payloads is ignored.

use crate::align::TimedValue;
use serde::Deserialize;

/// One physical quantity from a gridpoint forecast payload: an optional unit
/// of measure and an ordered sequence of interval records.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct QuantityPayload {
    pub uom: Option<String>,
    #[serde(default)]
    pub values: Vec<TimedValue>,
}

/// The `properties` object of a raw gridpoint forecast response.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct GridpointProperties {
    pub update_time: String,
    pub temperature: QuantityPayload,
    pub dewpoint: QuantityPayload,
    pub relative_humidity: QuantityPayload,
    pub apparent_temperature: QuantityPayload,
    pub wind_speed: QuantityPayload,
    pub wind_gust: QuantityPayload,
    pub probability_of_precipitation: QuantityPayload,
    pub quantitative_precipitation: QuantityPayload,
    pub ice_accumulation: QuantityPayload,
    pub snowfall_amount: QuantityPayload,
    pub snow_level: QuantityPayload,
    pub pressure: QuantityPayload,
}

#[derive(Debug, Deserialize)]
pub struct GridpointResponse {
    pub properties: GridpointProperties,
}

/// One measured quantity in a station observation payload.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct ObservationField {
    pub unit_code: Option<String>,
    pub value: Option<f64>,
    pub quality_control: Option<String>,
}

/// The `properties` object of a station's latest observation.
///
/// `wind_chill` and `heat_index` stay `Option` so the apparent-temperature
/// pick can distinguish an absent field from one present with a null value.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct ObservationProperties {
    pub timestamp: String,
    pub temperature: ObservationField,
    pub dewpoint: ObservationField,
    pub relative_humidity: ObservationField,
    pub wind_speed: ObservationField,
    pub barometric_pressure: ObservationField,
    pub max_temperature_last_24_hours: ObservationField,
    pub min_temperature_last_24_hours: ObservationField,
    pub precipitation_last_hour: ObservationField,
    pub precipitation_last_3_hours: ObservationField,
    pub precipitation_last_6_hours: ObservationField,
    pub wind_chill: Option<ObservationField>,
    pub heat_index: Option<ObservationField>,
}

#[derive(Debug, Deserialize)]
pub struct ObservationsResponse {
    pub features: Vec<ObservationFeature>,
}

#[derive(Debug, Deserialize)]
pub struct ObservationFeature {
    pub properties: ObservationProperties,
}

#[derive(Debug, Deserialize)]
pub struct PointsResponse {
    pub properties: PointsProperties,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PointsProperties {
    pub grid_id: String,
    pub grid_x: i64,
    pub grid_y: i64,
    pub radar_station: String,
    pub relative_location: RelativeLocation,
}

#[derive(Debug, Deserialize)]
pub struct RelativeLocation {
    pub properties: RelativeLocationProperties,
}

#[derive(Debug, Deserialize)]
pub struct RelativeLocationProperties {
    pub city: String,
    pub state: String,
}

#[derive(Debug, Deserialize)]
pub struct ZonesResponse {
    pub features: Vec<ZoneFeature>,
}

#[derive(Debug, Deserialize)]
pub struct ZoneFeature {
    pub properties: ZoneProperties,
}

#[derive(Debug, Deserialize)]
pub struct ZoneProperties {
    pub id: String,
    pub name: String,
}

#[derive(Debug, Deserialize)]
pub struct StationsResponse {
    pub features: Vec<StationFeature>,
}

#[derive(Debug, Deserialize)]
pub struct StationFeature {
    pub geometry: StationGeometry,
    pub properties: StationProperties,
}

#[derive(Debug, Deserialize)]
pub struct StationGeometry {
    /// GeoJSON order: longitude first, then latitude.
    pub coordinates: Vec<f64>,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct StationProperties {
    pub station_identifier: String,
    pub name: String,
}

#[derive(Debug, Deserialize)]
pub struct ProductList {
    #[serde(rename = "@graph")]
    pub graph: Vec<ProductRef>,
}

#[derive(Debug, Deserialize)]
pub struct ProductRef {
    #[serde(rename = "@id")]
    pub id: String,
}

#[derive(Debug, Default, Deserialize)]
#[serde(default)]
pub struct StatusResponse {
    pub status: String,
}
