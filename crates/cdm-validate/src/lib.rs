//! Validation of nested CDM records.
//!
//! Validation is schema-driven and best-effort:
//!
//! - **Presence**: required Header identifiers must be present and truthy
//! - **Terminology**: present menu values must be one of the field's options
//! - **Consistency**: per-entity business rules (LTV arithmetic, status and
//!   flag agreement, swap gauge basket shape, time series variable coverage)
//!
//! Results are collected into a [`ValidationReport`] keyed by section name.
//!
//! # Example
//!
//! ```ignore
//! use cdm_model::EntityKind;
//! use cdm_standards::SchemaRegistry;
//! use cdm_validate::Validator;
//!
//! let registry = SchemaRegistry::load_default()?;
//! let report = Validator::new(&registry).validate(EntityKind::Mortgage, &record);
//! for section in report.sections() {
//!     for message in report.messages(section) {
//!         println!("{section}: {message}");
//!     }
//! }
//! ```

mod category;
mod checks;
mod config;
mod issue;
mod report;
pub mod rules;
mod validator;

pub use category::Category;
pub use config::{LTV_TOLERANCE, TimeseriesVariables, ValidationConfig};
pub use issue::{Issue, RELATIONSHIP_VALIDATION_ERROR, VALIDATION_ERROR, display_value};
pub use report::ValidationReport;
pub use validator::{Validator, validate};
