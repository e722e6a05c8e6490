//! Physical risk swap gauge basket rules.

use cdm_model::{ModelError, is_truthy, value_kind};
use cdm_standards::{GAUGE_SET, gauge_section};
use serde_json::Value;

use super::{RuleError, inconsistency, section};
use crate::issue::Issue;

pub fn check(record: &Value, basket_size: usize, issues: &mut Vec<Issue>) -> Result<(), RuleError> {
    let Some(gauge_set) = section(record, &["PhysicalSwap", GAUGE_SET])? else {
        return Ok(());
    };

    if let Some(size) = gauge_set.get("GaugeBasketSize")
        && !size.is_null()
        && !is_positive_integer(size)
    {
        issues.push(inconsistency(GAUGE_SET, "GaugeBasketSize must be a positive integer"));
    }

    for i in 1..=basket_size {
        let key = gauge_section(i);
        let gauge = match gauge_set.get(&key) {
            None => continue,
            Some(Value::Object(map)) => Some(map),
            Some(Value::Null) => None,
            Some(other) => {
                return Err(ModelError::NotAMapping {
                    path: format!("PhysicalSwap/{GAUGE_SET}/{key}"),
                    found: value_kind(other),
                }
                .into());
            }
        };
        let get = |name: &str| gauge.and_then(|map| map.get(name)).filter(|v| !v.is_null());

        if !get("GaugeID").is_some_and(is_truthy) {
            issues.push(inconsistency(GAUGE_SET, format!("Missing GaugeID for {key}")));
        }

        match get("GaugeIndex") {
            Some(index) if !is_positive_integer(index) => issues.push(inconsistency(
                GAUGE_SET,
                format!("Invalid GaugeIndex for {key} - must be positive integer"),
            )),
            Some(_) => {}
            None => issues.push(inconsistency(
                GAUGE_SET,
                format!("Missing GaugeIndex for {key}"),
            )),
        }

        if let Some(payout) = get("PayoutSevereFlood")
            && !is_float_like(payout)
        {
            issues.push(inconsistency(
                GAUGE_SET,
                format!("Invalid PayoutSevereFlood value for {key}"),
            ));
        }
    }

    Ok(())
}

fn is_positive_integer(value: &Value) -> bool {
    value.as_i64().is_some_and(|n| n > 0) || value.as_u64().is_some_and(|n| n > 0)
}

/// Numbers, booleans and numeric strings convert to a float.
fn is_float_like(value: &Value) -> bool {
    match value {
        Value::Number(_) | Value::Bool(_) => true,
        Value::String(s) => s.trim().parse::<f64>().is_ok(),
        _ => false,
    }
}
