//! Menu option checks.
//!
//! A menu field is only checked when the record carries its key; absence is
//! never an error. A present `null` is not an option and is flagged, except
//! for the swap leg data, where falsy values read as unset.

use cdm_model::{EntityKind, Result, Schema, is_truthy, resolve};
use serde_json::Value;

use super::record_path;
use crate::issue::{Issue, display_value};

/// Check present menu values are members of their options.
pub fn check(schema: &Schema, record: &Value) -> Result<Vec<Issue>> {
    let skip_falsy = schema.entity() == EntityKind::PhysicalRiskSwap;
    let mut issues = Vec::new();

    for field in schema.menu_fields() {
        let Some(value) = resolve(record, &record_path(schema, &field))? else {
            continue;
        };
        if (skip_falsy && !is_truthy(value)) || field.definition.allows(value) {
            continue;
        }
        issues.push(Issue::InvalidEnumValue {
            section: field.top_section().to_string(),
            field: field.definition.name.clone(),
            value: display_value(value),
        });
    }

    Ok(issues)
}
