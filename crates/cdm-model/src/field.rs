//! Leaf field definitions.

use serde::{Deserialize, Serialize};
use serde_json::Value;
use std::fmt;
use std::str::FromStr;

use crate::error::ModelError;

/// Declared type of a schema field.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum FieldType {
    Text,
    Decimal,
    Integer,
    Boolean,
    Date,
    Time,
    Timestamp,
    Datetime,
    /// Enumerated value with a fixed allowed set.
    Menu,
}

impl FieldType {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Text => "text",
            Self::Decimal => "decimal",
            Self::Integer => "integer",
            Self::Boolean => "boolean",
            Self::Date => "date",
            Self::Time => "time",
            Self::Timestamp => "timestamp",
            Self::Datetime => "datetime",
            Self::Menu => "menu",
        }
    }
}

impl fmt::Display for FieldType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for FieldType {
    type Err = ModelError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            // Property source data declares plain strings as "string".
            "text" | "string" => Ok(Self::Text),
            "decimal" => Ok(Self::Decimal),
            "integer" => Ok(Self::Integer),
            "boolean" => Ok(Self::Boolean),
            "date" => Ok(Self::Date),
            "time" => Ok(Self::Time),
            "timestamp" => Ok(Self::Timestamp),
            "datetime" => Ok(Self::Datetime),
            "menu" => Ok(Self::Menu),
            _ => Err(ModelError::UnknownFieldType(s.to_string())),
        }
    }
}

/// A leaf of a CDM schema.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FieldDefinition {
    /// Field name as it appears in nested records (e.g. "OriginalLTV").
    pub name: String,
    pub field_type: FieldType,
    /// Allowed values; non-empty iff `field_type` is [`FieldType::Menu`].
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub options: Vec<String>,
    /// Measurement units (e.g. "m/s").
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub units: Option<String>,
    pub description: String,
    /// Key used for this field in flat records.
    pub flat_key: String,
    /// Identifier that must be present and truthy in every record.
    #[serde(default)]
    pub required: bool,
}

impl FieldDefinition {
    pub fn is_menu(&self) -> bool {
        self.field_type == FieldType::Menu
    }

    /// Returns true if `value` is one of the menu options.
    ///
    /// Only strings can be members; a non-menu field has no options and
    /// never matches.
    pub fn allows(&self, value: &Value) -> bool {
        match value {
            Value::String(s) => self.options.iter().any(|option| option == s),
            _ => false,
        }
    }

    /// Check a single value against the declared type.
    pub fn accepts(&self, value: &Value) -> bool {
        match self.field_type {
            FieldType::Menu => self.allows(value),
            FieldType::Boolean => value.is_boolean(),
            FieldType::Integer => value.is_i64() || value.is_u64(),
            FieldType::Decimal => value.is_number(),
            FieldType::Text
            | FieldType::Date
            | FieldType::Time
            | FieldType::Timestamp
            | FieldType::Datetime => value.is_string(),
        }
    }
}
