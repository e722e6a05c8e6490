//! Validation configuration.

use serde::{Deserialize, Serialize};

/// Allowed absolute difference between a computed and a reported LTV ratio.
pub const LTV_TOLERANCE: f64 = 0.01;

const SURFACE_VARIABLES: &[&str] = &["u10m", "v10m", "t2m", "q2m", "sp", "msl", "precipitable_water"];

const ISOBARIC_VARIABLES: &[&str] = &[
    "u1000", "u925", "u850", "u700", "u500", "u250", "v1000", "v925", "v850", "v700", "v500",
    "v250", "z1000", "z925", "z850", "z700", "z500", "z200", "t1000", "t925", "t850", "t700",
    "t500", "t100", "r1000", "r925", "r850", "r700", "r500", "r100",
];

/// Forecast model variables a TC event time series must carry.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct TimeseriesVariables {
    /// Variables expected as keys of `SurfaceNearSurface`.
    pub surface: Vec<String>,
    /// Variables expected in at least one `PressureLevels` level.
    pub isobaric: Vec<String>,
}

impl Default for TimeseriesVariables {
    fn default() -> Self {
        Self {
            surface: SURFACE_VARIABLES.iter().map(|s| (*s).to_string()).collect(),
            isobaric: ISOBARIC_VARIABLES.iter().map(|s| (*s).to_string()).collect(),
        }
    }
}

impl TimeseriesVariables {
    /// No variable requirements.
    pub fn none() -> Self {
        Self {
            surface: Vec::new(),
            isobaric: Vec::new(),
        }
    }
}

/// Configuration for validation.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ValidationConfig {
    pub timeseries: TimeseriesVariables,
}

impl ValidationConfig {
    /// Config that skips the time series variable checks.
    pub fn without_timeseries_variables() -> Self {
        Self {
            timeseries: TimeseriesVariables::none(),
        }
    }
}
