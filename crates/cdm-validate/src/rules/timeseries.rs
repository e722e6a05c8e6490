//! TC event time series variable coverage rules.

use cdm_model::{ModelError, value_kind};
use serde_json::{Map, Value};

use super::{RuleError, inconsistency, section};
use crate::config::TimeseriesVariables;
use crate::issue::Issue;

pub const SURFACE_VARIABLES: &str = "SurfaceVariables";
pub const ISOBARIC_VARIABLES: &str = "IsobaricVariables";

pub fn check(
    record: &Value,
    variables: &TimeseriesVariables,
    issues: &mut Vec<Issue>,
) -> Result<(), RuleError> {
    let surface = section(record, &["EventTimeseries", "SurfaceNearSurface"])?;
    for var in &variables.surface {
        if !surface.is_some_and(|map| map.contains_key(var)) {
            issues.push(inconsistency(
                SURFACE_VARIABLES,
                format!("Missing required surface variable: {var}"),
            ));
        }
    }

    let levels = pressure_levels(record)?;
    for var in &variables.isobaric {
        if !levels.iter().any(|level| level.contains_key(var)) {
            issues.push(inconsistency(
                ISOBARIC_VARIABLES,
                format!("Missing required isobaric variable: {var}"),
            ));
        }
    }

    Ok(())
}

/// Every non-null level under `PressureLevels`.
fn pressure_levels(record: &Value) -> Result<Vec<&Map<String, Value>>, ModelError> {
    let Some(levels) = section(record, &["EventTimeseries", "PressureLevels"])? else {
        return Ok(Vec::new());
    };
    let mut out = Vec::with_capacity(levels.len());
    for (name, level) in levels {
        match level {
            Value::Object(map) => out.push(map),
            Value::Null => {}
            other => {
                return Err(ModelError::NotAMapping {
                    path: format!("EventTimeseries/PressureLevels/{name}"),
                    found: value_kind(other),
                });
            }
        }
    }
    Ok(out)
}
