//! Entity-specific cross-field rules.
//!
//! Rules file their findings under synthetic section keys (for example
//! `LTV_Consistency`). A rule that cannot read its operands stops the rule
//! set; findings made before that point are kept.

pub mod mortgage;
pub mod swap;
pub mod timeseries;

use cdm_model::{EntityKind, ModelError, resolve, value_kind};
use cdm_standards::SchemaRegistry;
use serde_json::{Map, Value};
use std::fmt;

use crate::config::ValidationConfig;
use crate::issue::Issue;

/// Why a rule set stopped early.
#[derive(Debug, Clone, PartialEq)]
pub enum RuleError {
    /// A section on a rule's path is not a mapping.
    Structure(ModelError),
    /// A truthy operand is not numeric.
    Operand { field: &'static str, found: &'static str },
}

impl fmt::Display for RuleError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            RuleError::Structure(err) => write!(f, "{err}"),
            RuleError::Operand { field, found } => {
                write!(f, "{field} must be numeric, found {found}")
            }
        }
    }
}

impl From<ModelError> for RuleError {
    fn from(err: ModelError) -> Self {
        RuleError::Structure(err)
    }
}

/// Run the rule set of `kind`, appending findings to `issues`.
pub fn check(
    registry: &SchemaRegistry,
    config: &ValidationConfig,
    kind: EntityKind,
    record: &Value,
    issues: &mut Vec<Issue>,
) -> Result<(), RuleError> {
    match kind {
        EntityKind::Mortgage => mortgage::check(record, issues),
        EntityKind::PhysicalRiskSwap => swap::check(record, registry.gauge_basket_size(), issues),
        EntityKind::TcEventTimeseries => timeseries::check(record, &config.timeseries, issues),
        EntityKind::Property | EntityKind::FloodGauge | EntityKind::TcEvent => Ok(()),
    }
}

/// Section at `path` as a mapping; missing and null sections read as `None`.
pub(crate) fn section<'a>(
    record: &'a Value,
    path: &[&str],
) -> Result<Option<&'a Map<String, Value>>, ModelError> {
    match resolve(record, path)? {
        None | Some(Value::Null) => Ok(None),
        Some(Value::Object(map)) => Ok(Some(map)),
        Some(other) => Err(ModelError::NotAMapping {
            path: path.join("/"),
            found: value_kind(other),
        }),
    }
}

/// Field of an optional section; null reads as absent.
pub(crate) fn field<'a>(section: Option<&'a Map<String, Value>>, name: &str) -> Option<&'a Value> {
    section
        .and_then(|map| map.get(name))
        .filter(|value| !value.is_null())
}

/// Numeric operand, or an error naming the field.
pub(crate) fn number(value: &Value, field: &'static str) -> Result<f64, RuleError> {
    cdm_model::as_f64(value).ok_or(RuleError::Operand {
        field,
        found: value_kind(value),
    })
}

pub(crate) fn inconsistency(rule: &str, message: impl Into<String>) -> Issue {
    Issue::CrossFieldInconsistency {
        rule: rule.to_string(),
        message: message.into(),
    }
}
