//! Common Data Model (CDM) core types.
//!
//! This crate holds the types every other CDM crate builds on:
//!
//! - [`EntityKind`]: the six entity kinds with a CDM schema
//! - [`FieldType`] and [`FieldDefinition`]: leaf definitions of a schema
//! - [`Schema`]: an arena tree of sections and fields addressed by path
//! - [`Record`] helpers: reading nested JSON records by schema path
//! - [`FlatRecord`]: an insertion-ordered flat key/value map

pub mod entity;
pub mod error;
pub mod field;
pub mod flat;
pub mod record;
pub mod schema;

pub use entity::EntityKind;
pub use error::{ModelError, Result};
pub use field::{FieldDefinition, FieldType};
pub use flat::FlatRecord;
pub use record::{Record, as_f64, is_truthy, resolve, value_kind};
pub use schema::{NodeId, Schema, SchemaBuilder, SchemaField, SchemaNode};
