//! Schema-driven mapping between nested and flat records.

use cdm_model::{EntityKind, FlatRecord, Schema, SchemaField, resolve, value_kind};
use cdm_standards::SchemaRegistry;
use serde_json::{Map, Value};

use crate::defaults;
use crate::error::{MappingError, Result};

/// Maps records of every entity kind using the registry's schemas.
#[derive(Debug, Clone, Copy)]
pub struct Mapper<'a> {
    registry: &'a SchemaRegistry,
}

impl<'a> Mapper<'a> {
    pub fn new(registry: &'a SchemaRegistry) -> Self {
        Self { registry }
    }

    /// Entity kind whose root key is the record's only top-level key.
    pub fn detect_entity(record: &Value) -> Result<EntityKind> {
        let Value::Object(map) = record else {
            return Err(MappingError::InvalidShape {
                path: String::new(),
                found: value_kind(record),
            });
        };
        let mut keys = map.keys();
        match (keys.next(), keys.next()) {
            (Some(key), None) => EntityKind::all()
                .iter()
                .copied()
                .find(|kind| kind.root_key() == key)
                .ok_or_else(|| MappingError::UnknownEntity(key.clone())),
            _ => Err(MappingError::UnknownEntity(
                map.keys().cloned().collect::<Vec<_>>().join(", "),
            )),
        }
    }

    /// Flatten a nested record onto the schema's flat keys.
    ///
    /// Fields are visited in declaration order. Absent and null values are
    /// omitted, entity defaults are applied, and alias keys follow the field
    /// they mirror.
    ///
    /// # Errors
    ///
    /// [`MappingError::InvalidShape`] if the record or any section on a
    /// field's path is neither a mapping nor null.
    pub fn to_flat(&self, kind: EntityKind, record: &Value) -> Result<FlatRecord> {
        if !record.is_object() {
            return Err(MappingError::InvalidShape {
                path: String::new(),
                found: value_kind(record),
            });
        }
        let schema = self.registry.schema(kind);
        let mut flat = FlatRecord::new();

        for field in schema.fields() {
            let raw = resolve(record, &record_path(schema, &field))?;
            let flat_key = field.definition.flat_key.as_str();
            let Some(value) = defaults::apply(kind, flat_key, raw) else {
                continue;
            };
            flat.insert(flat_key, value.clone());
            for alias in defaults::aliases(kind, flat_key) {
                flat.insert(alias, value.clone());
            }
        }

        tracing::debug!(entity = kind.as_str(), fields = flat.len(), "mapped record to flat");
        Ok(flat)
    }

    /// Rebuild a nested record from flat keys.
    ///
    /// Alias and unknown keys are ignored, null values are skipped, and only
    /// sections holding at least one value are created. The root key is
    /// always present.
    pub fn to_nested(&self, kind: EntityKind, flat: &FlatRecord) -> Result<Value> {
        let schema = self.registry.schema(kind);
        let mut root = Map::new();

        for field in schema.fields() {
            let flat_key = field.definition.flat_key.as_str();
            if defaults::is_alias(kind, flat_key) {
                continue;
            }
            let Some(value) = flat.get(flat_key).filter(|value| !value.is_null()) else {
                continue;
            };
            insert_at(&mut root, kind, &field, value.clone())?;
        }

        tracing::debug!(entity = kind.as_str(), "mapped flat record to nested");
        let mut record = Map::new();
        record.insert(kind.root_key().to_string(), Value::Object(root));
        Ok(Value::Object(record))
    }

    /// [`Mapper::to_nested`] over a JSON object.
    pub fn value_to_nested(&self, kind: EntityKind, flat: &Value) -> Result<Value> {
        let Value::Object(map) = flat else {
            return Err(MappingError::InvalidShape {
                path: String::new(),
                found: value_kind(flat),
            });
        };
        let flat: FlatRecord = map.iter().map(|(k, v)| (k.clone(), v.clone())).collect();
        self.to_nested(kind, &flat)
    }
}

fn record_path<'s>(schema: &Schema, field: &SchemaField<'s>) -> Vec<&'s str> {
    let mut path = vec![schema.entity().root_key()];
    path.extend(field.sections().iter().map(String::as_str));
    path.push(field.definition.name.as_str());
    path
}

fn insert_at(root: &mut Map<String, Value>, kind: EntityKind, field: &SchemaField<'_>, value: Value) -> Result<()> {
    let mut current = root;
    let mut walked = vec![kind.root_key()];
    for section in field.sections() {
        walked.push(section);
        let slot = current
            .entry(section.clone())
            .or_insert_with(|| Value::Object(Map::new()));
        current = match slot {
            Value::Object(map) => map,
            other => {
                return Err(MappingError::InvalidShape {
                    path: walked.join("/"),
                    found: value_kind(other),
                });
            }
        };
    }
    current.insert(field.definition.name.clone(), value);
    Ok(())
}
