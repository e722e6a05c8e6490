//! Tabular export of flattened records.
//!
//! A [`PathTable`] splits each flat key into path-element columns, padded to
//! the deepest key, followed by a `Value` column. It renders as a text table
//! or as CSV.

pub mod error;
mod table;

pub use error::{ReportError, Result};
pub use table::{PathRow, PathTable, render_value};
