//! Validation issue types.
//!
//! Each variant carries only the data its message needs. The report groups
//! issues by [`Issue::section`].

use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::category::Category;

/// Report section for failures that abort validation.
pub const VALIDATION_ERROR: &str = "validation_error";

/// Report section for cross-field rules that could not be evaluated.
pub const RELATIONSHIP_VALIDATION_ERROR: &str = "relationship_validation_error";

/// Validation issue.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum Issue {
    /// Required identifier is absent or falsy.
    MissingRequiredField { section: String, field: String },
    /// Menu field holds a value outside its options.
    InvalidEnumValue {
        section: String,
        field: String,
        value: String,
    },
    /// A named business rule is violated. `rule` is the report section.
    CrossFieldInconsistency { rule: String, message: String },
    /// A business rule met an operand it cannot evaluate.
    RuleEvaluationFailure { message: String },
    /// The record could not be validated at all.
    InternalValidationFailure { message: String },
}

impl Issue {
    /// Report section this issue is filed under.
    pub fn section(&self) -> &str {
        match self {
            Issue::MissingRequiredField { section, .. } => section,
            Issue::InvalidEnumValue { section, .. } => section,
            Issue::CrossFieldInconsistency { rule, .. } => rule,
            Issue::RuleEvaluationFailure { .. } => RELATIONSHIP_VALIDATION_ERROR,
            Issue::InternalValidationFailure { .. } => VALIDATION_ERROR,
        }
    }

    pub fn category(&self) -> Category {
        match self {
            Issue::MissingRequiredField { .. } => Category::Presence,
            Issue::InvalidEnumValue { .. } => Category::Terminology,
            Issue::CrossFieldInconsistency { .. } => Category::Consistency,
            Issue::RuleEvaluationFailure { .. } => Category::Internal,
            Issue::InternalValidationFailure { .. } => Category::Internal,
        }
    }

    /// Format message with issue-specific data.
    pub fn message(&self) -> String {
        match self {
            Issue::MissingRequiredField { field, .. } => {
                format!("Missing required field: {field}")
            }
            Issue::InvalidEnumValue { field, value, .. } => {
                format!("Invalid value for {field}: {value}")
            }
            Issue::CrossFieldInconsistency { message, .. }
            | Issue::RuleEvaluationFailure { message }
            | Issue::InternalValidationFailure { message } => message.clone(),
        }
    }
}

/// Render a record value for a message. Strings appear without quotes.
pub fn display_value(value: &Value) -> String {
    match value {
        Value::String(s) => s.clone(),
        other => other.to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn messages_and_sections() {
        let issue = Issue::InvalidEnumValue {
            section: "Features".to_string(),
            field: "MortgageType".to_string(),
            value: display_value(&json!("Lease")),
        };
        assert_eq!(issue.message(), "Invalid value for MortgageType: Lease");
        assert_eq!(issue.section(), "Features");
        assert_eq!(issue.category(), Category::Terminology);

        let issue = Issue::RuleEvaluationFailure {
            message: "bad operand".to_string(),
        };
        assert_eq!(issue.section(), RELATIONSHIP_VALIDATION_ERROR);
        assert_eq!(issue.category(), Category::Internal);
    }

    #[test]
    fn display_value_keeps_json_for_non_strings() {
        assert_eq!(display_value(&json!(3)), "3");
        assert_eq!(display_value(&json!(true)), "true");
        assert_eq!(display_value(&json!(["a"])), r#"["a"]"#);
    }
}
