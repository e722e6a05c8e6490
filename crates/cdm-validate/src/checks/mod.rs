//! Schema-driven checks shared by every entity.

pub mod menu;
pub mod required;

use cdm_model::{Schema, SchemaField};

/// Record path of a schema field, starting at the entity root key.
pub(crate) fn record_path<'a>(schema: &Schema, field: &SchemaField<'a>) -> Vec<&'a str> {
    let mut path = Vec::with_capacity(field.sections().len() + 2);
    path.push(schema.entity().root_key());
    path.extend(field.sections().iter().map(String::as_str));
    path.push(field.definition.name.as_str());
    path
}
