//! Schema registry.
//!
//! Provides unified access to the schemas of every entity kind.

use serde::{Deserialize, Serialize};
use serde_json::Value;

use cdm_model::{EntityKind, FieldDefinition, Schema, SchemaBuilder, SchemaField};

use crate::error::{Result, StandardsError};
use crate::{embedded, gauge, loader};

/// Number of gauge sections generated for the swap schema by default.
pub const DEFAULT_GAUGE_BASKET_SIZE: usize = 20;

/// Configuration for building schemas.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct SchemaConfig {
    /// Number of `GaugeN` sections in the physical risk swap schema.
    pub gauge_basket_size: usize,
}

impl Default for SchemaConfig {
    fn default() -> Self {
        Self {
            gauge_basket_size: DEFAULT_GAUGE_BASKET_SIZE,
        }
    }
}

impl SchemaConfig {
    /// Create config with a custom gauge basket size.
    ///
    /// # Errors
    ///
    /// Returns [`StandardsError::InvalidBasketSize`] if `size` is zero.
    pub fn with_basket_size(size: usize) -> Result<Self> {
        let config = Self {
            gauge_basket_size: size,
        };
        config.check()?;
        Ok(config)
    }

    /// Check a config built by hand or deserialized.
    pub fn check(&self) -> Result<()> {
        if self.gauge_basket_size == 0 {
            return Err(StandardsError::InvalidBasketSize(self.gauge_basket_size));
        }
        Ok(())
    }
}

/// Registry of all CDM schemas.
#[derive(Debug, Clone)]
pub struct SchemaRegistry {
    config: SchemaConfig,
    /// One schema per entity kind, in [`EntityKind::all`] order.
    schemas: Vec<Schema>,
}

impl SchemaRegistry {
    /// Build every schema with the given configuration.
    ///
    /// # Errors
    ///
    /// Returns an error if the config is invalid or any embedded schema
    /// fails to load.
    pub fn load(config: &SchemaConfig) -> Result<Self> {
        config.check()?;
        let mut schemas = Vec::with_capacity(EntityKind::all().len());
        for kind in EntityKind::all() {
            let schema = match kind {
                EntityKind::PhysicalRiskSwap => {
                    let mut builder = SchemaBuilder::new(*kind);
                    loader::load_into(&mut builder, *kind, embedded::schema_csv(*kind))?;
                    gauge::add_gauge_sections(&mut builder, config.gauge_basket_size)?;
                    builder.build()
                }
                _ => loader::load(*kind)?,
            };
            schemas.push(schema);
        }
        tracing::debug!(
            schemas = schemas.len(),
            gauge_basket_size = config.gauge_basket_size,
            "schema registry loaded"
        );
        Ok(Self {
            config: *config,
            schemas,
        })
    }

    /// Build every schema with the default configuration.
    pub fn load_default() -> Result<Self> {
        Self::load(&SchemaConfig::default())
    }

    pub fn config(&self) -> &SchemaConfig {
        &self.config
    }

    /// Gauge basket size the swap schema was built with.
    pub fn gauge_basket_size(&self) -> usize {
        self.config.gauge_basket_size
    }

    /// Schema of an entity kind.
    pub fn schema(&self, kind: EntityKind) -> &Schema {
        // Variants are declared in `EntityKind::all` order.
        &self.schemas[kind as usize]
    }

    /// Ordered top-level section names.
    pub fn section_names(&self, kind: EntityKind) -> Vec<&str> {
        self.schema(kind).sections()
    }

    /// Field definition at a slash- or dot-separated path below the root.
    pub fn field_definition(&self, kind: EntityKind, path: &str) -> Option<&FieldDefinition> {
        self.schema(kind).field(path)
    }

    /// Allowed values of a menu field; empty for other or unknown fields.
    pub fn menu_options(&self, kind: EntityKind, path: &str) -> &[String] {
        self.field_definition(kind, path)
            .map(|field| field.options.as_slice())
            .unwrap_or_default()
    }

    /// Fields below a top-level section, as `(path, definition)` pairs.
    pub fn section_fields(&self, kind: EntityKind, section: &str) -> Vec<(String, &FieldDefinition)> {
        self.schema(kind)
            .section_fields(section)
            .into_iter()
            .map(|field| (field.path(), field.definition))
            .collect()
    }

    /// Paths of every field in declaration order.
    pub fn field_paths(&self, kind: EntityKind) -> Vec<String> {
        self.schema(kind)
            .fields()
            .iter()
            .map(SchemaField::path)
            .collect()
    }

    /// Check one value against the definition at `path`.
    ///
    /// Unknown paths never validate.
    pub fn validate_field_value(&self, kind: EntityKind, path: &str, value: &Value) -> bool {
        self.field_definition(kind, path)
            .is_some_and(|field| field.accepts(value))
    }
}
