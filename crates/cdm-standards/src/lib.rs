//! CDM schema data, loaders and registry.
//!
//! This crate provides:
//!
//! - **Embedded schema data** for every entity kind, one CSV per entity
//! - **Loaders** that turn the CSV rows into [`cdm_model::Schema`] trees
//! - **Generated gauge sections** for the physical risk swap basket
//! - **[`SchemaRegistry`]**, the lookup surface used by validation and mapping
//!
//! # Schema Data Layout
//!
//! ```text
//! data/schemas/
//! ├── mortgage.csv
//! ├── property.csv
//! ├── flood_gauge.csv
//! ├── physical_risk_swap.csv   # GaugeSet/GaugeN sections are generated
//! ├── tc_event.csv
//! └── tc_event_timeseries.csv
//! ```
//!
//! # Example
//!
//! ```rust,ignore
//! use cdm_model::EntityKind;
//! use cdm_standards::{SchemaConfig, SchemaRegistry};
//!
//! let registry = SchemaRegistry::load(&SchemaConfig::with_basket_size(5)?)?;
//! let options = registry.menu_options(EntityKind::Mortgage, "Features/MortgageType");
//! println!("{} mortgage types", options.len());
//! ```

pub mod embedded;
pub mod error;
pub mod gauge;
pub mod loader;
pub mod registry;

pub use error::{Result, StandardsError};
pub use gauge::{GAUGE_SET, gauge_section};
pub use registry::{DEFAULT_GAUGE_BASKET_SIZE, SchemaConfig, SchemaRegistry};
