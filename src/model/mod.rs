//! The snow-day inference model: a small two-layer feed-forward network with
//! a gated activation, consuming three derived scalars and producing a
//! bounded probability of same-day snowfall.

pub(crate) mod error;

use crate::units::{celsius_to_fahrenheit, millimeters_to_inches};
use log::info;
use ndarray::{Array1, Array2};
use serde::Deserialize;
use std::path::Path;

pub use error::ModelError;

/// Real features fed to the network (snowfall, prior snow, temperature); the
/// fourth input slot is a bias term.
const FEATURE_COUNT: usize = 4;
const HIDDEN_WIDTH: usize = 26;
/// Where the first layer's output splits into value half and gate half. A
/// trained-model constant with no derivation.
const GATE_SPLIT: usize = 25;
/// Calibration band for a known miscalibration of the trained weights:
/// raw sigmoid outputs inside it are replaced by their complement.
const INVERT_LO: f64 = 0.51;
const INVERT_HI: f64 = 0.85;
/// Below this many inches of both recent snowfall and prior snow, no network
/// evaluation is needed.
const MIN_SNOW_IN: f64 = 0.2;
const TEMPERATURE_FLOOR_F: f64 = 10.0;
const MAX_PROBABILITY: f64 = 0.99;

#[derive(Debug, Deserialize)]
struct RawParameters {
    means: Vec<f64>,
    stdevs: Vec<f64>,
    fc1_weights: Vec<Vec<f64>>,
    fc2_weights: Vec<f64>,
}

/// Exported parameters of the trained network: per-feature normalization
/// means and standard deviations plus the two layers' weights.
///
/// Loaded once at startup and immutable for the life of the process; a
/// missing or malformed source is fatal since no inference is possible
/// without it.
#[derive(Debug, Clone)]
pub struct ModelParameters {
    /// Length [`FEATURE_COUNT`]: the three real means padded with 0 so the
    /// bias term passes through standardization untouched.
    means: Array1<f64>,
    /// Length [`FEATURE_COUNT`]: the three real stdevs padded with 1.
    stdevs: Array1<f64>,
    fc1: Array2<f64>,
    fc2: Array1<f64>,
}

impl ModelParameters {
    /// Builds shape-validated parameters from raw arrays: 3 means, 3 stdevs,
    /// a 26x4 first-layer matrix and a 26-vector second layer.
    pub fn new(
        means: Vec<f64>,
        stdevs: Vec<f64>,
        fc1_weights: Vec<Vec<f64>>,
        fc2_weights: Vec<f64>,
    ) -> Result<Self, ModelError> {
        check_len("means", &means, FEATURE_COUNT - 1)?;
        check_len("stdevs", &stdevs, FEATURE_COUNT - 1)?;
        check_len("fc1_weights", &fc1_weights, HIDDEN_WIDTH)?;
        for row in &fc1_weights {
            check_len("fc1_weights row", row, FEATURE_COUNT)?;
        }
        check_len("fc2_weights", &fc2_weights, HIDDEN_WIDTH)?;

        let mut means = means;
        means.push(0.0);
        let mut stdevs = stdevs;
        stdevs.push(1.0);

        let flat: Vec<f64> = fc1_weights.into_iter().flatten().collect();
        let fc1 = Array2::from_shape_vec((HIDDEN_WIDTH, FEATURE_COUNT), flat)
            .map_err(|_| ModelError::Shape {
                field: "fc1_weights",
                expected: HIDDEN_WIDTH * FEATURE_COUNT,
                found: 0,
            })?;

        Ok(Self {
            means: Array1::from(means),
            stdevs: Array1::from(stdevs),
            fc1,
            fc2: Array1::from(fc2_weights),
        })
    }

    /// Loads parameters from a trained model's exported JSON file.
    pub fn from_file(path: &Path) -> Result<Self, ModelError> {
        let contents = std::fs::read_to_string(path)
            .map_err(|e| ModelError::Read(path.to_path_buf(), e))?;
        let raw: RawParameters = serde_json::from_str(&contents)
            .map_err(|e| ModelError::Parse(path.to_path_buf(), e))?;
        let params = Self::new(raw.means, raw.stdevs, raw.fc1_weights, raw.fc2_weights)?;
        info!("Loaded model parameters from {}", path.display());
        Ok(params)
    }
}

fn check_len<T>(field: &'static str, values: &[T], expected: usize) -> Result<(), ModelError> {
    if values.len() != expected {
        return Err(ModelError::Shape {
            field,
            expected,
            found: values.len(),
        });
    }
    Ok(())
}

/// The snow-day model itself. Construction is the only fallible step;
/// prediction is a pure function of the three inputs.
#[derive(Debug, Clone)]
pub struct SnowdayModel {
    params: ModelParameters,
}

impl SnowdayModel {
    pub fn new(params: ModelParameters) -> Self {
        Self { params }
    }

    pub fn from_file(path: &Path) -> Result<Self, ModelError> {
        Ok(Self::new(ModelParameters::from_file(path)?))
    }

    /// Predicts the probability of a snow day from recent snowfall (mm),
    /// prior snow on the ground (mm) and forecast temperature (degrees C).
    ///
    /// Returns a value in `[0, 0.99]`; exactly 0.0 when both snow inputs
    /// convert to under 0.2 inches.
    pub fn predict(&self, snowfall_mm: f64, prior_snow_mm: f64, temperature_c: f64) -> f64 {
        let snowfall_in = millimeters_to_inches(snowfall_mm);
        let prior_snow_in = millimeters_to_inches(prior_snow_mm);

        if snowfall_in < MIN_SNOW_IN && prior_snow_in < MIN_SNOW_IN {
            return 0.0;
        }

        let temperature_f = celsius_to_fahrenheit(temperature_c).max(TEMPERATURE_FLOOR_F);

        let features = Array1::from(vec![snowfall_in, prior_snow_in, temperature_f, 1.0]);
        let standardized = (&features - &self.params.means) / &self.params.stdevs;

        let hidden = self.params.fc1.dot(&standardized);

        // Gated activation: the value half scaled by the sigmoid of the gate
        // half, then a bias term appended back on.
        let gate = sigmoid(hidden[GATE_SPLIT]);
        let mut gated: Vec<f64> = hidden.iter().take(GATE_SPLIT).map(|v| v * gate).collect();
        gated.push(1.0);

        let score = self.params.fc2.dot(&Array1::from(gated));
        let mut probability = sigmoid(score);

        if (INVERT_LO..=INVERT_HI).contains(&probability) {
            probability = 1.0 - probability;
        }
        probability.min(MAX_PROBABILITY)
    }
}

fn sigmoid(z: f64) -> f64 {
    1.0 / (1.0 + (-z).exp())
}
