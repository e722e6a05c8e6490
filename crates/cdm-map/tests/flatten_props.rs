//! Property tests for dotted-path flattening.

use cdm_map::{flatten, split_path};
use proptest::prelude::*;
use serde_json::{Map, Value};

fn arb_scalar() -> impl Strategy<Value = Value> {
    prop_oneof![
        Just(Value::Null),
        any::<bool>().prop_map(Value::Bool),
        any::<i32>().prop_map(Value::from),
        "[a-zA-Z0-9 ]{0,12}".prop_map(Value::String),
    ]
}

fn arb_value() -> impl Strategy<Value = Value> {
    arb_scalar().prop_recursive(4, 48, 6, |inner| {
        prop_oneof![
            prop::collection::vec(inner.clone(), 0..4).prop_map(Value::Array),
            prop::collection::btree_map("[a-z_]{1,8}", inner, 0..5)
                .prop_map(|entries| Value::Object(entries.into_iter().collect::<Map<_, _>>())),
        ]
    })
}

fn arb_object() -> impl Strategy<Value = Value> {
    prop::collection::btree_map("[a-z_]{1,8}", arb_value(), 0..6)
        .prop_map(|entries| Value::Object(entries.into_iter().collect()))
}

fn scalar_leaves(value: &Value) -> usize {
    match value {
        Value::Object(map) => map.values().map(scalar_leaves).sum(),
        Value::Array(items) => items.iter().map(scalar_leaves).sum(),
        _ => 1,
    }
}

proptest! {
    #[test]
    fn one_entry_per_scalar_leaf(value in arb_object()) {
        let flat = flatten(&value);
        prop_assert_eq!(flat.len(), scalar_leaves(&value));
        for (_, leaf) in flat.iter() {
            prop_assert!(!leaf.is_object() && !leaf.is_array());
        }
    }

    #[test]
    fn split_path_recovers_elements(value in arb_object()) {
        let flat = flatten(&value);
        for key in flat.keys() {
            let parts = split_path(key);
            prop_assert!(parts.iter().all(|part| !part.is_empty()), "{key}");
            prop_assert_eq!(parts.join("."), key);
        }
    }

    #[test]
    fn first_element_is_a_top_level_key(value in arb_object()) {
        let flat = flatten(&value);
        let Value::Object(map) = &value else { unreachable!() };
        for key in flat.keys() {
            let first = split_path(key)[0];
            let top = first.split('[').next().unwrap_or_default();
            prop_assert!(map.contains_key(top), "{key}");
        }
    }
}
