//! Helpers for nested JSON records.

use serde_json::Value;

use crate::error::{ModelError, Result};

/// A nested record: an object with the entity root key at the top.
pub type Record = Value;

/// Truthiness used by presence checks.
///
/// `null`, `false`, numeric zero, the empty string and empty containers are
/// falsy; everything else is truthy.
pub fn is_truthy(value: &Value) -> bool {
    match value {
        Value::Null => false,
        Value::Bool(b) => *b,
        Value::Number(n) => n.as_f64().is_some_and(|f| f != 0.0),
        Value::String(s) => !s.is_empty(),
        Value::Array(items) => !items.is_empty(),
        Value::Object(map) => !map.is_empty(),
    }
}

/// Numeric view of a value. Booleans and strings are not coerced.
pub fn as_f64(value: &Value) -> Option<f64> {
    match value {
        Value::Number(n) => n.as_f64(),
        _ => None,
    }
}

/// Short name for the JSON kind of a value, used in error messages.
pub fn value_kind(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "boolean",
        Value::Number(_) => "number",
        Value::String(_) => "string",
        Value::Array(_) => "array",
        Value::Object(_) => "object",
    }
}

/// Walk `path` from the top of `record`.
///
/// A missing or null node anywhere on the path yields `Ok(None)`. Any other
/// non-object node that still has to be descended into is a
/// [`ModelError::NotAMapping`]. The record itself must be an object.
pub fn resolve<'a>(record: &'a Value, path: &[&str]) -> Result<Option<&'a Value>> {
    let mut current = record;
    let mut walked: Vec<&str> = Vec::with_capacity(path.len());
    for segment in path {
        let map = match current {
            Value::Object(map) => map,
            Value::Null if !walked.is_empty() => return Ok(None),
            other => {
                return Err(ModelError::NotAMapping {
                    path: walked.join("/"),
                    found: value_kind(other),
                });
            }
        };
        walked.push(segment);
        match map.get(*segment) {
            Some(next) => current = next,
            None => return Ok(None),
        }
    }
    Ok(Some(current))
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn truthiness_follows_empty_and_zero() {
        for falsy in [json!(null), json!(false), json!(0), json!(0.0), json!(""), json!([]), json!({})] {
            assert!(!is_truthy(&falsy), "{falsy} should be falsy");
        }
        for truthy in [json!(true), json!(1), json!(-0.5), json!("x"), json!([0]), json!({"a": null})] {
            assert!(is_truthy(&truthy), "{truthy} should be truthy");
        }
    }

    #[test]
    fn resolve_treats_null_sections_as_empty() {
        let record = json!({"Mortgage": {"Header": null, "Borrower": 3}});
        assert_eq!(resolve(&record, &["Mortgage", "Header", "MortgageID"]), Ok(None));
        assert_eq!(resolve(&record, &["Mortgage", "Missing", "X"]), Ok(None));
        assert_eq!(
            resolve(&record, &["Mortgage", "Borrower", "Age"]),
            Err(ModelError::NotAMapping {
                path: "Mortgage/Borrower".to_string(),
                found: "number",
            })
        );
        assert!(resolve(&json!([]), &["Mortgage"]).is_err());
        assert!(resolve(&json!(null), &["Mortgage"]).is_err());
    }
}
