//! Embedded schema data.
//!
//! Every entity schema is compiled in with `include_str!()`, one CSV per
//! entity under `data/schemas/`.

use cdm_model::EntityKind;

/// Mortgage schema.
pub const MORTGAGE: &str = include_str!("../data/schemas/mortgage.csv");

/// Property schema.
pub const PROPERTY: &str = include_str!("../data/schemas/property.csv");

/// Flood gauge schema.
pub const FLOOD_GAUGE: &str = include_str!("../data/schemas/flood_gauge.csv");

/// Physical risk swap schema, without the generated gauge sections.
pub const PHYSICAL_RISK_SWAP: &str = include_str!("../data/schemas/physical_risk_swap.csv");

/// Tropical cyclone event schema.
pub const TC_EVENT: &str = include_str!("../data/schemas/tc_event.csv");

/// Tropical cyclone event time series schema.
pub const TC_EVENT_TIMESERIES: &str = include_str!("../data/schemas/tc_event_timeseries.csv");

/// Get embedded CSV content for an entity kind.
pub fn schema_csv(kind: EntityKind) -> &'static str {
    match kind {
        EntityKind::Mortgage => MORTGAGE,
        EntityKind::Property => PROPERTY,
        EntityKind::FloodGauge => FLOOD_GAUGE,
        EntityKind::PhysicalRiskSwap => PHYSICAL_RISK_SWAP,
        EntityKind::TcEvent => TC_EVENT,
        EntityKind::TcEventTimeseries => TC_EVENT_TIMESERIES,
    }
}

/// File name used in error messages.
pub fn schema_file(kind: EntityKind) -> String {
    format!("{}.csv", kind.as_str())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_embedded_data_not_empty() {
        for kind in EntityKind::all() {
            let content = schema_csv(*kind);
            assert!(
                content.starts_with("\"Section\",\"Field\",\"Type\""),
                "{} header missing",
                schema_file(*kind)
            );
            assert!(content.lines().count() > 10);
        }
    }
}
