//! Path-element table built from a flat record.

use std::io::Write;

use cdm_map::{flatten, split_path};
use cdm_model::FlatRecord;
use comfy_table::modifiers::UTF8_ROUND_CORNERS;
use comfy_table::presets::UTF8_FULL_CONDENSED;
use comfy_table::{Cell, CellAlignment, ContentArrangement, Table};
use serde_json::Value;

use crate::error::Result;

const VALUE_HEADER: &str = "Value";

/// One exported row: the path elements of a key and its rendered value.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PathRow {
    pub elements: Vec<String>,
    pub value: String,
}

/// Rows padded to a common number of path-element columns.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PathTable {
    depth: usize,
    rows: Vec<PathRow>,
}

impl PathTable {
    /// One row per flat key, in key order.
    pub fn from_flat(flat: &FlatRecord) -> Self {
        let mut rows: Vec<PathRow> = flat
            .iter()
            .map(|(key, value)| PathRow {
                elements: split_path(key).into_iter().map(str::to_string).collect(),
                value: render_value(value),
            })
            .collect();
        let depth = rows.iter().map(|row| row.elements.len()).max().unwrap_or(0);
        for row in &mut rows {
            row.elements.resize(depth, String::new());
        }
        tracing::debug!(rows = rows.len(), depth, "built path table");
        Self { depth, rows }
    }

    /// Flatten any JSON value and tabulate it.
    pub fn from_value(value: &Value) -> Self {
        Self::from_flat(&flatten(value))
    }

    /// Number of path-element columns.
    pub fn depth(&self) -> usize {
        self.depth
    }

    pub fn rows(&self) -> &[PathRow] {
        &self.rows
    }

    pub fn len(&self) -> usize {
        self.rows.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    /// `Path Element 1..N` followed by `Value`.
    pub fn headers(&self) -> Vec<String> {
        (1..=self.depth)
            .map(|index| format!("Path Element {index}"))
            .chain(std::iter::once(VALUE_HEADER.to_string()))
            .collect()
    }

    /// Render as a bordered text table.
    pub fn render_text(&self) -> String {
        let mut table = Table::new();
        table
            .load_preset(UTF8_FULL_CONDENSED)
            .apply_modifier(UTF8_ROUND_CORNERS)
            .set_content_arrangement(ContentArrangement::Dynamic)
            .set_width(120);
        table.set_header(self.headers());
        for row in &self.rows {
            let cells = row
                .elements
                .iter()
                .map(Cell::new)
                .chain(std::iter::once(Cell::new(&row.value)));
            table.add_row(cells);
        }
        if let Some(column) = table.column_mut(self.depth) {
            column.set_cell_alignment(CellAlignment::Right);
        }
        table.to_string()
    }

    /// Write headers and rows as CSV.
    pub fn write_csv<W: Write>(&self, writer: W) -> Result<()> {
        let mut csv_writer = csv::Writer::from_writer(writer);
        csv_writer.write_record(self.headers())?;
        for row in &self.rows {
            csv_writer.write_record(row.elements.iter().chain(std::iter::once(&row.value)))?;
        }
        csv_writer.flush()?;
        Ok(())
    }

    /// CSV rendering as a string.
    pub fn to_csv(&self) -> Result<String> {
        let mut buffer = Vec::new();
        self.write_csv(&mut buffer)?;
        Ok(String::from_utf8(buffer)?)
    }
}

/// Plain text for a scalar: strings unquoted, null empty, others as JSON.
pub fn render_value(value: &Value) -> String {
    match value {
        Value::Null => String::new(),
        Value::String(text) => text.clone(),
        other => other.to_string(),
    }
}
