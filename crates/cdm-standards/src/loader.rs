//! CDM schema loading.
//!
//! Builds [`Schema`] trees from the embedded CSV data. Each row declares one
//! field: the slash-separated section path below the entity root, the field
//! name, its type and options, and the flat key it maps to.

use std::collections::HashSet;
use std::io::Cursor;

use serde::Deserialize;

use cdm_model::{EntityKind, FieldDefinition, FieldType, Schema, SchemaBuilder};

use crate::embedded;
use crate::error::{Result, StandardsError};

/// Load the schema of `kind` from embedded data.
///
/// The physical risk swap gauge sections are not part of the embedded data;
/// see [`crate::gauge`].
pub fn load(kind: EntityKind) -> Result<Schema> {
    let mut builder = SchemaBuilder::new(kind);
    load_into(&mut builder, kind, embedded::schema_csv(kind))?;
    Ok(builder.build())
}

// =============================================================================
// CSV Row Types
// =============================================================================

/// Row from a schema CSV.
#[derive(Debug, Deserialize)]
struct FieldCsvRow {
    #[serde(rename = "Section")]
    section: String,
    #[serde(rename = "Field")]
    field: String,
    #[serde(rename = "Type")]
    field_type: String,
    #[serde(rename = "Required")]
    required: String,
    #[serde(rename = "Options")]
    options: String,
    #[serde(rename = "Units")]
    units: String,
    #[serde(rename = "Flat Key")]
    flat_key: String,
    #[serde(rename = "Description")]
    description: String,
}

// =============================================================================
// Loading Functions
// =============================================================================

/// Parse `content` and add every declared field to `builder`.
pub(crate) fn load_into(builder: &mut SchemaBuilder, kind: EntityKind, content: &str) -> Result<()> {
    let file = embedded::schema_file(kind);
    let cursor = Cursor::new(content.as_bytes());
    let mut reader = csv::ReaderBuilder::new()
        .has_headers(true)
        .from_reader(cursor);

    let mut flat_keys = HashSet::new();
    let mut count = 0usize;

    for result in reader.deserialize::<FieldCsvRow>() {
        let row = result.map_err(|e| StandardsError::CsvParse {
            file: file.clone(),
            message: e.to_string(),
        })?;

        let name = row.field.trim().to_string();
        if name.is_empty() {
            continue;
        }

        let field_type: FieldType =
            row.field_type
                .parse()
                .map_err(|_| StandardsError::UnknownFieldType {
                    file: file.clone(),
                    field: name.clone(),
                    type_name: row.field_type.clone(),
                })?;

        let sections: Vec<&str> = row
            .section
            .split('/')
            .map(str::trim)
            .filter(|s| !s.is_empty())
            .collect();

        let options = parse_options(&row.options);
        if field_type == FieldType::Menu && options.is_empty() {
            let mut path = sections.join("/");
            path.push('/');
            path.push_str(&name);
            return Err(StandardsError::EmptyMenu { entity: kind, path });
        }

        let flat_key = non_empty(&row.flat_key).unwrap_or_else(|| name.clone());
        if !flat_keys.insert(flat_key.clone()) {
            return Err(StandardsError::DuplicateFlatKey {
                entity: kind,
                key: flat_key,
            });
        }

        let definition = FieldDefinition {
            name,
            field_type,
            options,
            units: non_empty(&row.units),
            description: row.description.trim().to_string(),
            flat_key,
            required: row.required.trim().eq_ignore_ascii_case("yes"),
        };
        builder.field(&sections, definition)?;
        count += 1;
    }

    tracing::debug!(entity = kind.as_str(), fields = count, "loaded schema data");
    Ok(())
}

// =============================================================================
// Helpers
// =============================================================================

/// Split a `; `-separated options column.
fn parse_options(raw: &str) -> Vec<String> {
    raw.split(';')
        .map(str::trim)
        .filter(|option| !option.is_empty())
        .map(String::from)
        .collect()
}

fn non_empty(value: &str) -> Option<String> {
    let trimmed = value.trim();
    if trimmed.is_empty() {
        None
    } else {
        Some(trimmed.to_string())
    }
}
