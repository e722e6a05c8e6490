//! Mapping between nested CDM records and flat records.
//!
//! - [`Mapper::to_flat`] walks every schema field and publishes present
//!   values under the field's flat key
//! - [`Mapper::to_nested`] is the mirror assignment back into sections
//! - [`flatten`] and [`split_path`] turn any JSON value into dotted-path keys
//!   for tabular export, independent of the schemas

mod defaults;
pub mod error;
mod flatten;
mod mapper;

pub use defaults::DEFAULT_GROUND_LEVEL_METRES;
pub use error::{MappingError, Result};
pub use flatten::{flatten, split_path};
pub use mapper::Mapper;
