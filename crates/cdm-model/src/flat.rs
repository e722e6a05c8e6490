//! Flat records.

use serde::de::{MapAccess, Visitor};
use serde::ser::SerializeMap;
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use serde_json::Value;
use std::collections::HashMap;
use std::fmt;

/// Single-level key/value record that keeps insertion order.
///
/// Serializes as a JSON object with keys in insertion order. Lookups and
/// inserts go through a key index, so building a record is linear.
#[derive(Debug, Clone, Default)]
pub struct FlatRecord {
    entries: Vec<(String, Value)>,
    index: HashMap<String, usize>,
}

impl PartialEq for FlatRecord {
    fn eq(&self, other: &Self) -> bool {
        self.entries == other.entries
    }
}

impl FlatRecord {
    pub fn new() -> Self {
        Self::default()
    }

    /// Insert a value, replacing an existing entry in place.
    ///
    /// Returns the previous value, if any.
    pub fn insert(&mut self, key: impl Into<String>, value: Value) -> Option<Value> {
        let key = key.into();
        if let Some(&position) = self.index.get(&key) {
            return Some(std::mem::replace(&mut self.entries[position].1, value));
        }
        self.index.insert(key.clone(), self.entries.len());
        self.entries.push((key, value));
        None
    }

    pub fn get(&self, key: &str) -> Option<&Value> {
        self.index.get(key).map(|&position| &self.entries[position].1)
    }

    pub fn contains_key(&self, key: &str) -> bool {
        self.index.contains_key(key)
    }

    /// Remove an entry; later entries keep their relative order.
    pub fn remove(&mut self, key: &str) -> Option<Value> {
        let position = self.index.remove(key)?;
        let (_, value) = self.entries.remove(position);
        for (moved, _) in &self.entries[position..] {
            if let Some(slot) = self.index.get_mut(moved) {
                *slot -= 1;
            }
        }
        Some(value)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn keys(&self) -> impl Iterator<Item = &str> {
        self.entries.iter().map(|(k, _)| k.as_str())
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &Value)> {
        self.entries.iter().map(|(k, v)| (k.as_str(), v))
    }
}

impl IntoIterator for FlatRecord {
    type Item = (String, Value);
    type IntoIter = std::vec::IntoIter<(String, Value)>;

    fn into_iter(self) -> Self::IntoIter {
        self.entries.into_iter()
    }
}

impl<K: Into<String>> FromIterator<(K, Value)> for FlatRecord {
    fn from_iter<I: IntoIterator<Item = (K, Value)>>(iter: I) -> Self {
        let mut record = Self::new();
        for (key, value) in iter {
            record.insert(key, value);
        }
        record
    }
}

impl Serialize for FlatRecord {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(self.entries.len()))?;
        for (key, value) in &self.entries {
            map.serialize_entry(key, value)?;
        }
        map.end()
    }
}

impl<'de> Deserialize<'de> for FlatRecord {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        struct FlatVisitor;

        impl<'de> Visitor<'de> for FlatVisitor {
            type Value = FlatRecord;

            fn expecting(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                f.write_str("a flat object")
            }

            fn visit_map<A: MapAccess<'de>>(self, mut access: A) -> Result<FlatRecord, A::Error> {
                let mut record = FlatRecord::new();
                while let Some((key, value)) = access.next_entry::<String, Value>()? {
                    record.insert(key, value);
                }
                Ok(record)
            }
        }

        deserializer.deserialize_map(FlatVisitor)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn insert_keeps_first_position() {
        let mut record = FlatRecord::new();
        record.insert("b", json!(1));
        record.insert("a", json!(2));
        assert_eq!(record.insert("b", json!(3)), Some(json!(1)));
        assert_eq!(record.keys().collect::<Vec<_>>(), vec!["b", "a"]);
        assert_eq!(record.get("b"), Some(&json!(3)));
    }

    #[test]
    fn remove_keeps_lookups_consistent() {
        let mut record: FlatRecord = [("a", json!(1)), ("b", json!(2)), ("c", json!(3))]
            .into_iter()
            .collect();
        assert_eq!(record.remove("a"), Some(json!(1)));
        assert_eq!(record.remove("a"), None);
        assert_eq!(record.get("c"), Some(&json!(3)));
        record.insert("c", json!(4));
        assert_eq!(record.keys().collect::<Vec<_>>(), vec!["b", "c"]);
        assert_eq!(record.get("c"), Some(&json!(4)));
    }

    #[test]
    fn serializes_in_insertion_order() {
        let record: FlatRecord = [("zeta", json!("z")), ("alpha", json!(null))].into_iter().collect();
        let text = serde_json::to_string(&record).unwrap();
        assert_eq!(text, r#"{"zeta":"z","alpha":null}"#);
        let back: FlatRecord = serde_json::from_str(&text).unwrap();
        assert_eq!(back, record);
    }
}
