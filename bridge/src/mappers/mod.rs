//! Mappers from SDK domain objects to bridge and platform containers.
//!
//! Every structured mapper first normalizes its input into a generic
//! `serde_json::Map` and then goes through [`map_to_writable`], so the
//! writable output always reflects one conversion path.

pub mod in_app_mapper;
pub mod intent;
pub mod notification_mapper;

pub use in_app_mapper::InAppMessageMapper;
pub use notification_mapper::NotificationMapper;

use serde_json::{Map, Value};

use crate::error::BridgeError;
use crate::platform::Bundle;
use crate::writable::{BridgeValue, WritableArray, WritableMap};

/// Converts a generic string-keyed map into the bridge's writable container,
/// recursing into nested maps and arrays.
pub fn map_to_writable(map: &Map<String, Value>) -> Result<WritableMap, BridgeError> {
    let mut writable = WritableMap::new();
    for (key, value) in map {
        writable.put(key.clone(), value_to_bridge(key, value)?);
    }
    Ok(writable)
}

/// Transcribes a generic string-keyed map into an intent extras bundle.
/// Values pass through untyped.
pub fn map_to_bundle(map: &Map<String, Value>) -> Bundle {
    let mut bundle = Bundle::new();
    for (key, value) in map {
        bundle.put(key.clone(), value.clone());
    }
    bundle
}

fn value_to_bridge(key: &str, value: &Value) -> Result<BridgeValue, BridgeError> {
    match value {
        Value::Null => Ok(BridgeValue::Null),
        Value::Bool(b) => Ok(BridgeValue::Bool(*b)),
        Value::Number(n) => {
            if let Some(i) = n.as_i64() {
                Ok(BridgeValue::Int(i))
            } else if n.as_u64().is_some() {
                // Beyond i64 range; the bridge has no representation for it
                Err(BridgeError::UnrepresentableNumber {
                    key: key.to_string(),
                })
            } else {
                // as_f64 is infallible for the remaining (float) numbers
                Ok(BridgeValue::Double(n.as_f64().unwrap_or_default()))
            }
        }
        Value::String(s) => Ok(BridgeValue::String(s.clone())),
        Value::Array(items) => {
            let mut array = WritableArray::new();
            for item in items {
                array.push(value_to_bridge(key, item)?);
            }
            Ok(BridgeValue::Array(array))
        }
        Value::Object(map) => Ok(BridgeValue::Map(map_to_writable(map)?)),
    }
}
