//! Tests for cdm-model types.

use cdm_model::{
    EntityKind, FieldDefinition, FieldType, FlatRecord, ModelError, SchemaBuilder, is_truthy,
    resolve,
};
use serde_json::json;

fn make_field(name: &str, field_type: FieldType, options: &[&str]) -> FieldDefinition {
    FieldDefinition {
        name: name.to_string(),
        field_type,
        options: options.iter().map(|s| s.to_string()).collect(),
        units: None,
        description: format!("{name} description"),
        flat_key: name.to_string(),
        required: false,
    }
}

#[test]
fn schema_lookup_by_slash_and_dot_paths() {
    let mut builder = SchemaBuilder::new(EntityKind::Mortgage);
    builder
        .field(&["Header"], make_field("MortgageID", FieldType::Text, &[]))
        .expect("add header field");
    builder
        .field(
            &["Regulatory", "MCOB"],
            make_field("MCOBSalesType", FieldType::Menu, &["Advised", "Non-Advised"]),
        )
        .expect("add nested field");
    let schema = builder.build();

    assert_eq!(schema.entity(), EntityKind::Mortgage);
    assert_eq!(schema.node(schema.root()).name(), "Mortgage");
    assert_eq!(schema.field_count(), 2);

    let slash = schema.field("Regulatory/MCOB/MCOBSalesType").expect("slash path");
    let dot = schema.field("Regulatory.MCOB.MCOBSalesType").expect("dot path");
    assert_eq!(slash, dot);
    assert!(slash.is_menu());

    let menus = schema.menu_fields();
    assert_eq!(menus.len(), 1);
    assert_eq!(menus[0].top_section(), "Regulatory");
    assert_eq!(menus[0].sections(), ["Regulatory".to_string(), "MCOB".to_string()]);

    assert_eq!(
        schema.require_field("Regulatory/Nope"),
        Err(ModelError::PathNotFound("Regulatory/Nope".to_string()))
    );
    assert_eq!(schema.section_fields("Header").len(), 1);
}

#[test]
fn field_definition_serializes_without_empty_extras() {
    let field = make_field("GaugeID", FieldType::Text, &[]);
    let value = serde_json::to_value(&field).expect("serialize field");
    assert_eq!(
        value,
        json!({
            "name": "GaugeID",
            "field_type": "text",
            "description": "GaugeID description",
            "flat_key": "GaugeID",
            "required": false
        })
    );
}

#[test]
fn resolve_walks_nested_records() {
    let record = json!({
        "FloodGauge": {"Header": {"GaugeID": "G-001"}, "Location": {"Latitude": 0}}
    });
    let id = resolve(&record, &["FloodGauge", "Header", "GaugeID"]).expect("resolve");
    assert_eq!(id, Some(&json!("G-001")));
    let lat = resolve(&record, &["FloodGauge", "Location", "Latitude"])
        .expect("resolve")
        .expect("present");
    assert!(!is_truthy(lat));
}

#[test]
fn flat_record_collects_from_pairs() {
    let record: FlatRecord = vec![
        ("gauge_id".to_string(), json!("G-1")),
        ("gauge_owner".to_string(), json!("EA")),
    ]
    .into_iter()
    .collect();
    assert_eq!(record.len(), 2);
    assert!(record.contains_key("gauge_owner"));
    assert!(!record.contains_key("gauge_type"));
}
