//! Path table export tests.

use cdm_map::Mapper;
use cdm_model::EntityKind;
use cdm_report::PathTable;
use cdm_standards::SchemaRegistry;
use serde_json::json;

fn tc_event() -> serde_json::Value {
    json!({"TropicalCycloneEvent": {
        "Header": {"TCEventID": "AL092024"},
        "Attributes": {"TCName": "Helene", "TCSize": null},
        "Warning": [{"Intensity": 4}]
    }})
}

#[test]
fn nested_record_exports_as_csv() {
    let table = PathTable::from_value(&tc_event());
    assert_eq!(table.depth(), 3);
    let csv = table.to_csv().expect("csv");
    insta::assert_snapshot!(csv, @r"
    Path Element 1,Path Element 2,Path Element 3,Value
    TropicalCycloneEvent,Header,TCEventID,AL092024
    TropicalCycloneEvent,Attributes,TCName,Helene
    TropicalCycloneEvent,Attributes,TCSize,
    TropicalCycloneEvent,Warning[0],Intensity,4
    ");
}

#[test]
fn mapped_flat_record_has_single_path_column() {
    let registry = SchemaRegistry::load_default().expect("registry");
    let record = json!({"PropertyHeader": {"Header": {"UPRN": "100023336956", "PropertyID": "P-1"}}});
    let flat = Mapper::new(&registry)
        .to_flat(EntityKind::Property, &record)
        .expect("map");
    let table = PathTable::from_flat(&flat);

    assert_eq!(table.depth(), 1);
    assert_eq!(table.headers(), vec!["Path Element 1", "Value"]);
    let rows: Vec<(&str, &str)> = table
        .rows()
        .iter()
        .map(|row| (row.elements[0].as_str(), row.value.as_str()))
        .collect();
    assert_eq!(
        rows,
        vec![
            ("uprn", "100023336956"),
            ("property_id", "P-1"),
            ("property_type", "residential"),
            ("property_status", "active"),
            ("ground_level_meters", "12.0"),
            ("elevation", "12.0"),
        ]
    );
}

#[test]
fn text_rendering_lists_every_row() {
    let table = PathTable::from_value(&tc_event());
    let text = table.render_text();
    let lines: Vec<&str> = text.lines().collect();

    assert!(lines[0].starts_with('╭'));
    assert!(lines[1].contains("Path Element 3") && lines[1].contains("Value"));
    for (element, value) in [("TCName", "Helene"), ("TCEventID", "AL092024"), ("Intensity", "4")] {
        assert!(
            lines.iter().any(|line| line.contains(element) && line.contains(value)),
            "{element}"
        );
    }
    // top border, header, separator, four rows, bottom border
    assert_eq!(lines.len(), 8);
}

#[test]
fn rows_follow_document_order() {
    let table = PathTable::from_value(&json!({"Zeta": 1, "Header": {"Id": "x"}, "Alpha": 2}));
    let first: Vec<&str> = table
        .rows()
        .iter()
        .map(|row| row.elements[0].as_str())
        .collect();
    assert_eq!(first, vec!["Zeta", "Header", "Alpha"]);
}

#[test]
fn csv_writes_to_any_writer() {
    let table = PathTable::from_value(&json!({"a": "x, y"}));
    let mut out = Vec::new();
    table.write_csv(&mut out).expect("write");
    assert_eq!(String::from_utf8(out).expect("utf8"), "Path Element 1,Value\na,\"x, y\"\n");
}
