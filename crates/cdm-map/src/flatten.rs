//! Generic dotted-path flattening.
//!
//! Object keys are joined with `.`; array elements append a bracketed index
//! (`items[0]`, nested arrays chain as `grid[0][1]`). Bracket segments never
//! split on `.`, so [`split_path`] recovers the path elements of any key that
//! [`flatten`] produced.

use cdm_model::FlatRecord;
use serde_json::Value;

/// Flatten an arbitrary JSON value into dotted-path keys.
///
/// Keys follow document order. Empty objects and arrays produce no
/// entries. A scalar root is stored under the empty key.
pub fn flatten(value: &Value) -> FlatRecord {
    let mut out = FlatRecord::new();
    flatten_into(value, String::new(), &mut out);
    out
}

fn flatten_into(value: &Value, prefix: String, out: &mut FlatRecord) {
    match value {
        Value::Object(map) => {
            for (key, child) in map {
                let path = if prefix.is_empty() {
                    key.clone()
                } else {
                    format!("{prefix}.{key}")
                };
                flatten_into(child, path, out);
            }
        }
        Value::Array(items) => {
            for (index, child) in items.iter().enumerate() {
                flatten_into(child, format!("{prefix}[{index}]"), out);
            }
        }
        scalar => {
            out.insert(prefix, scalar.clone());
        }
    }
}

/// Split a flattened key on `.` outside brackets.
///
/// `a.b[0].c` yields `["a", "b[0]", "c"]`.
pub fn split_path(key: &str) -> Vec<&str> {
    let mut parts = Vec::new();
    let mut depth = 0usize;
    let mut start = 0;
    for (index, ch) in key.char_indices() {
        match ch {
            '[' => depth += 1,
            ']' => depth = depth.saturating_sub(1),
            '.' if depth == 0 => {
                parts.push(&key[start..index]);
                start = index + 1;
            }
            _ => {}
        }
    }
    parts.push(&key[start..]);
    parts
}
