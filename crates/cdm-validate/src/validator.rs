//! Record validation entry points.

use cdm_model::{EntityKind, value_kind};
use cdm_standards::SchemaRegistry;
use serde_json::Value;

use crate::checks::{menu, required};
use crate::config::ValidationConfig;
use crate::issue::Issue;
use crate::report::ValidationReport;
use crate::rules::{self, RuleError};

/// Validator bound to a schema registry and a configuration.
#[derive(Debug, Clone)]
pub struct Validator<'a> {
    registry: &'a SchemaRegistry,
    config: ValidationConfig,
}

impl<'a> Validator<'a> {
    pub fn new(registry: &'a SchemaRegistry) -> Self {
        Self::with_config(registry, ValidationConfig::default())
    }

    pub fn with_config(registry: &'a SchemaRegistry, config: ValidationConfig) -> Self {
        Self { registry, config }
    }

    /// Validate one nested record.
    pub fn validate(&self, kind: EntityKind, record: &Value) -> ValidationReport {
        validate(self.registry, &self.config, kind, record)
    }
}

/// Validate a nested record of `kind`.
///
/// Runs, in order:
/// - required identifier presence
/// - menu option membership
/// - the entity's cross-field rules
///
/// Never fails: a record whose shape prevents validation yields a report
/// holding only a `validation_error` section.
pub fn validate(
    registry: &SchemaRegistry,
    config: &ValidationConfig,
    kind: EntityKind,
    record: &Value,
) -> ValidationReport {
    match run(registry, config, kind, record) {
        Ok(report) => {
            tracing::debug!(
                entity = kind.as_str(),
                issues = report.issue_count(),
                "validation complete"
            );
            report
        }
        Err(message) => {
            tracing::warn!(entity = kind.as_str(), %message, "validation failed");
            ValidationReport::internal_failure(message)
        }
    }
}

fn run(
    registry: &SchemaRegistry,
    config: &ValidationConfig,
    kind: EntityKind,
    record: &Value,
) -> Result<ValidationReport, String> {
    if !record.is_object() {
        return Err(format!(
            "record must be a mapping keyed by '{}', found {}",
            kind.root_key(),
            value_kind(record)
        ));
    }

    let schema = registry.schema(kind);
    let mut report = ValidationReport::new();
    report.extend(required::check(schema, record).map_err(|e| e.to_string())?);
    report.extend(menu::check(schema, record).map_err(|e| e.to_string())?);

    let mut rule_issues = Vec::new();
    match rules::check(registry, config, kind, record, &mut rule_issues) {
        Ok(()) => {}
        Err(RuleError::Structure(err)) => return Err(err.to_string()),
        Err(err @ RuleError::Operand { .. }) => {
            tracing::warn!(entity = kind.as_str(), error = %err, "rule evaluation stopped");
            rule_issues.push(Issue::RuleEvaluationFailure {
                message: err.to_string(),
            });
        }
    }
    report.extend(rule_issues);

    Ok(report)
}
