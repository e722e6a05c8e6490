//! Validation issue categories.

use serde::{Deserialize, Serialize};

/// Category of a validation issue.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Category {
    Presence,
    Terminology,
    Consistency,
    Internal,
}

impl Category {
    /// Get all validation categories.
    pub const fn all() -> &'static [Self] {
        &[
            Self::Presence,
            Self::Terminology,
            Self::Consistency,
            Self::Internal,
        ]
    }

    /// Human-readable label.
    pub fn label(&self) -> &'static str {
        match self {
            Self::Presence => "Presence",
            Self::Terminology => "Terminology",
            Self::Consistency => "Consistency",
            Self::Internal => "Internal",
        }
    }
}

impl std::fmt::Display for Category {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.label())
    }
}
