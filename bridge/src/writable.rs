//! The bridge's boundary value model.
//!
//! The scripted side of the bridge accepts a closed set of value kinds:
//! null, booleans, numbers, strings, ordered sequences, and string-keyed
//! maps thereof. `BridgeValue` is that closed set; `WritableMap` and
//! `WritableArray` are the two container shapes.

use serde::ser::{SerializeMap, SerializeSeq};
use serde::{Serialize, Serializer};
use serde_json::Value;

/// A value the bridge can carry across the runtime boundary.
#[derive(Debug, Clone, PartialEq)]
pub enum BridgeValue {
    Null,
    Bool(bool),
    Int(i64),
    Double(f64),
    String(String),
    Array(WritableArray),
    Map(WritableMap),
}

impl BridgeValue {
    pub fn to_json(&self) -> Value {
        match self {
            BridgeValue::Null => Value::Null,
            BridgeValue::Bool(b) => Value::Bool(*b),
            BridgeValue::Int(i) => Value::from(*i),
            BridgeValue::Double(d) => Value::from(*d),
            BridgeValue::String(s) => Value::String(s.clone()),
            BridgeValue::Array(a) => a.to_json(),
            BridgeValue::Map(m) => m.to_json(),
        }
    }
}

/// Insertion-ordered string-keyed container handed to the scripted side.
///
/// Re-putting an existing key overwrites the value in place, so key order
/// reflects first insertion.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct WritableMap {
    entries: Vec<(String, BridgeValue)>,
}

impl WritableMap {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn put(&mut self, key: impl Into<String>, value: BridgeValue) {
        let key = key.into();
        match self.entries.iter_mut().find(|(k, _)| *k == key) {
            Some((_, existing)) => *existing = value,
            None => self.entries.push((key, value)),
        }
    }

    pub fn put_null(&mut self, key: impl Into<String>) {
        self.put(key, BridgeValue::Null);
    }

    pub fn put_bool(&mut self, key: impl Into<String>, value: bool) {
        self.put(key, BridgeValue::Bool(value));
    }

    pub fn put_int(&mut self, key: impl Into<String>, value: i64) {
        self.put(key, BridgeValue::Int(value));
    }

    pub fn put_double(&mut self, key: impl Into<String>, value: f64) {
        self.put(key, BridgeValue::Double(value));
    }

    pub fn put_string(&mut self, key: impl Into<String>, value: impl Into<String>) {
        self.put(key, BridgeValue::String(value.into()));
    }

    pub fn put_array(&mut self, key: impl Into<String>, value: WritableArray) {
        self.put(key, BridgeValue::Array(value));
    }

    pub fn put_map(&mut self, key: impl Into<String>, value: WritableMap) {
        self.put(key, BridgeValue::Map(value));
    }

    pub fn get(&self, key: &str) -> Option<&BridgeValue> {
        self.entries.iter().find(|(k, _)| k == key).map(|(_, v)| v)
    }

    pub fn contains_key(&self, key: &str) -> bool {
        self.get(key).is_some()
    }

    pub fn keys(&self) -> impl Iterator<Item = &str> {
        self.entries.iter().map(|(k, _)| k.as_str())
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn to_json(&self) -> Value {
        let mut map = serde_json::Map::new();
        for (key, value) in &self.entries {
            map.insert(key.clone(), value.to_json());
        }
        Value::Object(map)
    }
}

/// Ordered sequence of bridge values.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct WritableArray {
    items: Vec<BridgeValue>,
}

impl WritableArray {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push(&mut self, value: BridgeValue) {
        self.items.push(value);
    }

    pub fn push_null(&mut self) {
        self.push(BridgeValue::Null);
    }

    pub fn push_bool(&mut self, value: bool) {
        self.push(BridgeValue::Bool(value));
    }

    pub fn push_int(&mut self, value: i64) {
        self.push(BridgeValue::Int(value));
    }

    pub fn push_double(&mut self, value: f64) {
        self.push(BridgeValue::Double(value));
    }

    pub fn push_string(&mut self, value: impl Into<String>) {
        self.push(BridgeValue::String(value.into()));
    }

    pub fn push_array(&mut self, value: WritableArray) {
        self.push(BridgeValue::Array(value));
    }

    pub fn push_map(&mut self, value: WritableMap) {
        self.push(BridgeValue::Map(value));
    }

    pub fn get(&self, index: usize) -> Option<&BridgeValue> {
        self.items.get(index)
    }

    pub fn iter(&self) -> impl Iterator<Item = &BridgeValue> {
        self.items.iter()
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    pub fn to_json(&self) -> Value {
        Value::Array(self.items.iter().map(BridgeValue::to_json).collect())
    }
}

impl Serialize for BridgeValue {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        match self {
            BridgeValue::Null => serializer.serialize_unit(),
            BridgeValue::Bool(b) => serializer.serialize_bool(*b),
            BridgeValue::Int(i) => serializer.serialize_i64(*i),
            BridgeValue::Double(d) => serializer.serialize_f64(*d),
            BridgeValue::String(s) => serializer.serialize_str(s),
            BridgeValue::Array(a) => a.serialize(serializer),
            BridgeValue::Map(m) => m.serialize(serializer),
        }
    }
}

impl Serialize for WritableMap {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(self.entries.len()))?;
        for (key, value) in &self.entries {
            map.serialize_entry(key, value)?;
        }
        map.end()
    }
}

impl Serialize for WritableArray {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut seq = serializer.serialize_seq(Some(self.items.len()))?;
        for item in &self.items {
            seq.serialize_element(item)?;
        }
        seq.end()
    }
}
