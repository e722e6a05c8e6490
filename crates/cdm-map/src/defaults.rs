//! Entity-specific flat defaults and alias keys.

use cdm_model::{EntityKind, is_truthy};
use serde_json::Value;

/// Ground level assumed when a property record carries none, in metres.
pub const DEFAULT_GROUND_LEVEL_METRES: f64 = 12.0;

#[derive(Debug, Clone, Copy)]
enum Trigger {
    /// Key absent from the record (an explicit null is kept as absent data).
    Missing,
    /// Value absent or falsy.
    Falsy,
}

#[derive(Debug, Clone, Copy)]
enum Fill {
    Text(&'static str),
    Decimal(f64),
}

#[derive(Debug, Clone, Copy)]
struct FieldDefault {
    entity: EntityKind,
    flat_key: &'static str,
    trigger: Trigger,
    fill: Fill,
}

const DEFAULTS: &[FieldDefault] = &[
    FieldDefault {
        entity: EntityKind::Property,
        flat_key: "property_type",
        trigger: Trigger::Missing,
        fill: Fill::Text("residential"),
    },
    FieldDefault {
        entity: EntityKind::Property,
        flat_key: "property_status",
        trigger: Trigger::Missing,
        fill: Fill::Text("active"),
    },
    FieldDefault {
        entity: EntityKind::Property,
        flat_key: "ground_level_meters",
        trigger: Trigger::Falsy,
        fill: Fill::Decimal(DEFAULT_GROUND_LEVEL_METRES),
    },
];

/// Flat keys published with a copy of another field's value.
const ALIASES: &[(EntityKind, &str, &str)] = &[(EntityKind::Property, "ground_level_meters", "elevation")];

/// Value to publish for a field, applying any default.
///
/// `raw` is the value read from the record; `None` means the key is absent.
pub(crate) fn apply(kind: EntityKind, flat_key: &str, raw: Option<&Value>) -> Option<Value> {
    let rule = DEFAULTS
        .iter()
        .find(|rule| rule.entity == kind && rule.flat_key == flat_key);
    let Some(rule) = rule else {
        return raw.filter(|value| !value.is_null()).cloned();
    };
    let fire = match rule.trigger {
        Trigger::Missing => raw.is_none(),
        Trigger::Falsy => !raw.is_some_and(is_truthy),
    };
    if fire {
        return Some(match rule.fill {
            Fill::Text(text) => Value::from(text),
            Fill::Decimal(number) => Value::from(number),
        });
    }
    raw.filter(|value| !value.is_null()).cloned()
}

/// Alias keys that mirror `flat_key`.
pub(crate) fn aliases(kind: EntityKind, flat_key: &str) -> impl Iterator<Item = &'static str> {
    ALIASES
        .iter()
        .filter(move |(entity, source, _)| *entity == kind && *source == flat_key)
        .map(|(_, _, alias)| *alias)
}

/// Whether `key` is an alias rather than a schema flat key.
pub(crate) fn is_alias(kind: EntityKind, key: &str) -> bool {
    ALIASES
        .iter()
        .any(|(entity, _, alias)| *entity == kind && *alias == key)
}
