//! The main entry point: a client owning the NWS connection and the loaded
//! model parameters, assembling per-location aggregates in one fetch-and-build
//! pass.

use crate::error::SnowcastError;
use crate::model::SnowdayModel;
use crate::nws::NwsClient;
use crate::reference_time;
use crate::types::forecast::Forecast;
use crate::types::location::{Control, Gridpoint, LatLon, Location, Station, Zone};
use crate::types::observation::Observations;
use crate::types::products::{DailyHydrometeorologicalProducts, FreezingLevel};
use crate::types::summary::ThreeNumberSummary;
use crate::types::timestamp::Timestamp;
use bon::bon;
use chrono::DateTime;
use chrono_tz::Tz;
use log::info;
use serde_json::Value;
use std::path::Path;

/// Client for building location aggregates from live NWS data.
///
/// Model parameters are loaded once at construction and immutable afterwards;
/// a missing or malformed parameter file fails construction, since no
/// prediction is possible without it.
///
/// Each call to [`Snowcast::location_report`] builds a fresh, independent
/// object graph. The forecast-center snapshot is captured once per call (or
/// supplied by the caller, so several locations in one refresh cycle share
/// one reference) and threaded down into every series.
pub struct Snowcast {
    nws: NwsClient,
    model: SnowdayModel,
}

#[bon]
impl Snowcast {
    /// Creates a client with the given NWS User-Agent and model parameter
    /// file.
    pub fn new(user_agent: &str, model_path: &Path) -> Result<Self, SnowcastError> {
        Ok(Self {
            nws: NwsClient::new(user_agent)?,
            model: SnowdayModel::from_file(model_path)?,
        })
    }

    /// Creates a client from already-constructed parts.
    pub fn with_parts(nws: NwsClient, model: SnowdayModel) -> Self {
        Self { nws, model }
    }

    pub fn nws(&self) -> &NwsClient {
        &self.nws
    }

    pub fn model(&self) -> &SnowdayModel {
        &self.model
    }

    /// Builds the control aggregate for a point: an independent grid lookup
    /// and forecast sharing the same reference instant as the main build.
    ///
    /// # Arguments
    ///
    /// * `.latlon(LatLon)`: **Required.** The point to build the control for.
    /// * `.grid_data(Gridpoint)`: Optional. Reuses an already-resolved grid
    ///   cell instead of fetching one.
    /// * `.forecast_center(DateTime<Tz>)`: Optional. The shared reference
    ///   instant; defaults to a fresh capture.
    #[builder]
    pub async fn control(
        &self,
        latlon: LatLon,
        grid_data: Option<Gridpoint>,
        forecast_center: Option<DateTime<Tz>>,
    ) -> Result<Control, SnowcastError> {
        let center = forecast_center.unwrap_or_else(reference_time::capture);
        let grid_data = match grid_data {
            Some(grid) => grid,
            None => self.nws.points(latlon).await?,
        };
        let forecast = Forecast::build(&self.nws.gridpoint_forecast(&grid_data).await?, center)?;
        Ok(Control {
            timestamp: Timestamp::now(),
            latlon,
            grid_data,
            forecast,
        })
    }

    /// Builds the full aggregate for one location: grid info, nearest
    /// station, containing zone, forecast, control, latest observations, the
    /// two product placeholders, the three-number summary and the snow-day
    /// prediction, in that dependency order.
    ///
    /// # Arguments
    ///
    /// * `.latlon(LatLon)`: **Required.** The location to report on.
    /// * `.grid_data(Gridpoint)` / `.station(Station)` / `.zone(Zone)` /
    ///   `.control(Control)`: Optional. Reuse pre-fetched pieces instead of
    ///   fetching them again.
    /// * `.forecast_center(DateTime<Tz>)`: Optional. The shared reference
    ///   instant for every series in this build; defaults to a fresh capture.
    ///   Callers building several locations in one refresh cycle should
    ///   capture once and pass the same value to each call.
    #[builder]
    pub async fn location_report(
        &self,
        latlon: LatLon,
        grid_data: Option<Gridpoint>,
        station: Option<Station>,
        zone: Option<Zone>,
        control: Option<Control>,
        forecast_center: Option<DateTime<Tz>>,
    ) -> Result<Location, SnowcastError> {
        let center = forecast_center.unwrap_or_else(reference_time::capture);

        let grid_data = match grid_data {
            Some(grid) => grid,
            None => self.nws.points(latlon).await?,
        };
        let station = match station {
            Some(station) => station,
            None => self.nws.nearest_station(&grid_data).await?,
        };
        let zone = match zone {
            Some(zone) => zone,
            None => self.nws.zone(latlon).await?,
        };
        let forecast = Forecast::build(&self.nws.gridpoint_forecast(&grid_data).await?, center)?;
        let control = match control {
            Some(control) => control,
            None => {
                self.control()
                    .latlon(station.latlon)
                    .forecast_center(center)
                    .call()
                    .await?
            }
        };
        let observations =
            Observations::build(&self.nws.latest_observations(&station.id).await?, center)?;
        let hyd_payload = self.product_payload(&grid_data.radar, "HYD").await?;
        let fzl_payload = self.product_payload(&grid_data.radar, "FZL").await?;

        let three_number_summary = ThreeNumberSummary::derive(&forecast, &observations);
        let (snowfall, snow_on_ground, temperature) = three_number_summary.model_inputs_today();
        let snow_day_prediction_today = self.model.predict(snowfall, snow_on_ground, temperature);
        info!(
            "Built location report for {latlon}: prediction {snow_day_prediction_today:.3} \
             (snowfall {snowfall:.1} mm, on ground {snow_on_ground:.1} mm, {temperature:.1} C)"
        );

        Ok(Location {
            timestamp: Timestamp::now(),
            latlon,
            grid_data,
            station,
            control,
            zone,
            forecast,
            observations,
            daily_hydrometeorological_products: DailyHydrometeorologicalProducts::build(
                &hyd_payload,
            ),
            freezing_level: FreezingLevel::build(&fzl_payload),
            three_number_summary,
            snow_day_prediction_today,
        })
    }

    async fn product_payload(&self, office: &str, code: &str) -> Result<Value, SnowcastError> {
        let url = self.nws.product_url(office, code).await?;
        Ok(self.nws.product(&url).await?)
    }
}
