//! Async client for the National Weather Service API: geocoded grid lookup,
//! land zones, gridpoint forecasts, observing stations, latest observations
//! and text products.

pub(crate) mod error;
pub(crate) mod payload;

use crate::nws::payload::{
    GridpointProperties, GridpointResponse, ObservationProperties, ObservationsResponse,
    PointsResponse, ProductList, StationsResponse, StatusResponse, ZonesResponse,
};
use crate::types::location::{Gridpoint, LatLon, Station, Zone};
use crate::types::timestamp::Timestamp;
use log::{info, warn};
use reqwest::Client;
use serde::de::DeserializeOwned;
use serde_json::Value;
use std::time::Duration;

pub use error::NwsError;

const DEFAULT_BASE_URL: &str = "https://api.weather.gov";
const REQUEST_TIMEOUT_SECS: u64 = 10;

/// A thin typed wrapper around the NWS REST API.
///
/// The NWS asks every consumer to identify itself, so a User-Agent string is
/// required at construction. The base URL is injectable for tests.
pub struct NwsClient {
    client: Client,
    base_url: String,
}

impl NwsClient {
    pub fn new(user_agent: &str) -> Result<Self, NwsError> {
        Self::with_base_url(user_agent, DEFAULT_BASE_URL)
    }

    pub fn with_base_url(user_agent: &str, base_url: &str) -> Result<Self, NwsError> {
        let client = Client::builder()
            .user_agent(user_agent)
            .timeout(Duration::from_secs(REQUEST_TIMEOUT_SECS))
            .build()
            .map_err(NwsError::ClientBuild)?;
        Ok(Self {
            client,
            base_url: base_url.trim_end_matches('/').to_string(),
        })
    }

    /// Resolves a point to its forecast grid cell.
    pub async fn points(&self, point: LatLon) -> Result<Gridpoint, NwsError> {
        let url = format!("{}/points/{}", self.base_url, point);
        let response: PointsResponse = self.get_json(url).await?;
        let properties = response.properties;
        Ok(Gridpoint {
            timestamp: Timestamp::now(),
            mun: properties.relative_location.properties.city,
            state: properties.relative_location.properties.state,
            wfo: properties.grid_id,
            grid_x: properties.grid_x,
            grid_y: properties.grid_y,
            radar: properties.radar_station,
        })
    }

    /// Looks up the land zone containing a point.
    pub async fn zone(&self, point: LatLon) -> Result<Zone, NwsError> {
        let url = format!(
            "{}/zones?type=land&point={}&include_geometry=false",
            self.base_url, point
        );
        let response: ZonesResponse = self.get_json(url.clone()).await?;
        let feature = response
            .features
            .into_iter()
            .next()
            .ok_or(NwsError::MissingData {
                url,
                what: "zone features",
            })?;
        Ok(Zone {
            timestamp: Timestamp::now(),
            id: feature.properties.id,
            name: feature.properties.name,
        })
    }

    /// Fetches the raw gridpoint forecast payload for a grid cell.
    pub async fn gridpoint_forecast(
        &self,
        grid: &Gridpoint,
    ) -> Result<GridpointProperties, NwsError> {
        let url = format!(
            "{}/gridpoints/{}/{},{}",
            self.base_url, grid.wfo, grid.grid_x, grid.grid_y
        );
        let response: GridpointResponse = self.get_json(url).await?;
        Ok(response.properties)
    }

    /// Finds the observing station nearest to a grid cell.
    pub async fn nearest_station(&self, grid: &Gridpoint) -> Result<Station, NwsError> {
        let url = format!(
            "{}/gridpoints/{}/{},{}/stations",
            self.base_url, grid.wfo, grid.grid_x, grid.grid_y
        );
        let response: StationsResponse = self.get_json(url.clone()).await?;
        let feature = response
            .features
            .into_iter()
            .next()
            .ok_or(NwsError::MissingData {
                url: url.clone(),
                what: "station features",
            })?;
        // GeoJSON coordinates are lon,lat; records carry lat,lon.
        let coordinates = feature.geometry.coordinates;
        if coordinates.len() < 2 {
            return Err(NwsError::MissingData {
                url,
                what: "station coordinates",
            });
        }
        Ok(Station {
            timestamp: Timestamp::now(),
            latlon: LatLon(coordinates[1], coordinates[0]),
            id: feature.properties.station_identifier,
            name: feature.properties.name,
        })
    }

    /// Fetches a station's most recent observation payload.
    pub async fn latest_observations(
        &self,
        station_id: &str,
    ) -> Result<ObservationProperties, NwsError> {
        let url = format!("{}/stations/{}/observations", self.base_url, station_id);
        let response: ObservationsResponse = self.get_json(url.clone()).await?;
        let feature = response
            .features
            .into_iter()
            .next()
            .ok_or(NwsError::MissingData {
                url,
                what: "observation features",
            })?;
        Ok(feature.properties)
    }

    /// Resolves the URL of the most recent text product of a given type for
    /// an office.
    pub async fn product_url(&self, office: &str, code: &str) -> Result<String, NwsError> {
        let url = format!(
            "{}/products?office={}&type={}&limit=1",
            self.base_url, office, code
        );
        let response: ProductList = self.get_json(url.clone()).await?;
        response
            .graph
            .into_iter()
            .next()
            .map(|product| product.id)
            .ok_or(NwsError::MissingData {
                url,
                what: "products",
            })
    }

    /// Fetches a text product payload by its resolved URL.
    pub async fn product(&self, url: &str) -> Result<Value, NwsError> {
        self.get_json(url.to_string()).await
    }

    /// Whether the API reports itself healthy. Any request or decode failure
    /// counts as not OK.
    pub async fn status_ok(&self) -> bool {
        let url = format!("{}/", self.base_url);
        match self.get_json::<StatusResponse>(url).await {
            Ok(response) => response.status == "OK",
            Err(e) => {
                warn!("NWS status check failed: {e}");
                false
            }
        }
    }

    async fn get_json<T: DeserializeOwned>(&self, url: String) -> Result<T, NwsError> {
        info!("Fetching {url}");
        let response = self
            .client
            .get(&url)
            .send()
            .await
            .map_err(|e| NwsError::Request(url.clone(), e))?;

        let status = response.status();
        if !status.is_success() {
            warn!("HTTP {status} for {url}");
            return Err(NwsError::HttpStatus { url, status });
        }

        response.json().await.map_err(|e| NwsError::Decode(url, e))
    }
}
