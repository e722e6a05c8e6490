//! Generated gauge sections of the physical risk swap schema.

use cdm_model::{FieldDefinition, FieldType, SchemaBuilder};

use crate::error::{Result, StandardsError};

/// Section holding the gauge basket.
pub const GAUGE_SET: &str = "GaugeSet";

/// Section name of the `index`-th gauge (1-based).
pub fn gauge_section(index: usize) -> String {
    format!("Gauge{index}")
}

/// Add `GaugeSet/Gauge1..GaugeN` to a swap schema under construction.
pub(crate) fn add_gauge_sections(builder: &mut SchemaBuilder, basket_size: usize) -> Result<()> {
    if basket_size == 0 {
        return Err(StandardsError::InvalidBasketSize(basket_size));
    }
    for i in 1..=basket_size {
        let section = gauge_section(i);
        let path = [GAUGE_SET, section.as_str()];
        builder.field(
            &path,
            gauge_field(
                "GaugeIndex",
                FieldType::Integer,
                format!("gauge_{i}_index"),
                format!("Index position of gauge {i} in portfolio"),
            ),
        )?;
        builder.field(
            &path,
            gauge_field(
                "GaugeID",
                FieldType::Text,
                format!("gauge_{i}_id"),
                format!("Unique identifier for sensor {i}"),
            ),
        )?;
        builder.field(
            &path,
            gauge_field(
                "PayoutSevereFlood",
                FieldType::Decimal,
                format!("gauge_{i}_payout_severe_flood"),
                format!("Payout for reaching Severe Flood Warning for gauge {i}"),
            ),
        )?;
    }
    Ok(())
}

fn gauge_field(
    name: &str,
    field_type: FieldType,
    flat_key: String,
    description: String,
) -> FieldDefinition {
    FieldDefinition {
        name: name.to_string(),
        field_type,
        options: Vec::new(),
        units: None,
        description,
        flat_key,
        required: false,
    }
}
