//! Snowcast turns raw National Weather Service data into hour-aligned
//! forecast series and a snow-day probability.
//!
//! The NWS gridpoint API reports each quantity as irregular
//! "time + duration + value" records. This crate normalizes those records
//! onto a 24-hour grid of whole-hour offsets from a rolling 06:00 US/Eastern
//! reference instant, aggregates them per location together with station
//! observations, and feeds a three-number summary through a small trained
//! network to score the chance of a snow day.
//!
//! # Example
//!
//! ```no_run
//! use snowcast::{LatLon, Snowcast};
//! use std::path::Path;
//!
//! #[tokio::main]
//! async fn main() -> Result<(), snowcast::SnowcastError> {
//!     let client = Snowcast::new("snowcast (contact@example.com)", Path::new("model.json"))?;
//!     let report = client
//!         .location_report()
//!         .latlon(LatLon(42.3601, -71.0942))
//!         .call()
//!         .await?;
//!     println!("{:.0}% chance of a snow day", report.snow_day_prediction_today * 100.0);
//!     Ok(())
//! }
//! ```

mod align;
mod error;
mod model;
mod nws;
mod reference_time;
mod snowcast;
mod types;
mod units;

pub use error::SnowcastError;
pub use snowcast::Snowcast;

pub use align::{
    align, parse_duration_hours, parse_nws_timestamp, parse_valid_time, AlignError, AlignedSeries,
    TimedValue,
};
pub use model::{ModelError, ModelParameters, SnowdayModel};
pub use nws::{NwsClient, NwsError};
pub use reference_time::{capture, forecast_center_after, FORECAST_ZONE};

pub use types::forecast::{Forecast, IndividualForecast};
pub use types::location::{Control, Gridpoint, LatLon, Location, PredictionSummary, Station, Zone};
pub use types::observation::{IndividualObservation, Observations};
pub use types::products::{DailyHydrometeorologicalProducts, FreezingLevel};
pub use types::summary::ThreeNumberSummary;
pub use types::timestamp::Timestamp;
