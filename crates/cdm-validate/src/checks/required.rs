//! Required identifier checks.
//!
//! Every field marked required must be present and truthy.

use cdm_model::{Result, Schema, is_truthy, resolve};
use serde_json::Value;

use super::record_path;
use crate::issue::Issue;

/// Check required fields are present and truthy.
pub fn check(schema: &Schema, record: &Value) -> Result<Vec<Issue>> {
    let mut issues = Vec::new();

    for field in schema.required_fields() {
        let value = resolve(record, &record_path(schema, &field))?;
        if !value.is_some_and(is_truthy) {
            issues.push(Issue::MissingRequiredField {
                section: field.top_section().to_string(),
                field: field.definition.name.clone(),
            });
        }
    }

    Ok(issues)
}
