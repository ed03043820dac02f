use serde_json::{Map, Value};

use shared::{InAppMessage, InAppMessageButton};

use crate::error::BridgeError;
use crate::mappers::map_to_writable;
use crate::writable::WritableMap;

/// Mapper from SDK in-app message objects to bridge containers.
pub struct InAppMessageMapper;

impl InAppMessageMapper {
    /// Produces `{ "text": ... }` when the button has text, else an empty map.
    pub fn button_to_map(button: &InAppMessageButton) -> Map<String, Value> {
        let mut map = Map::new();
        if let Some(text) = &button.text {
            map.insert("text".to_string(), Value::String(text.clone()));
        }
        map
    }

    /// Normalizes an in-app message into a generic string-keyed map.
    ///
    /// A `None` button list yields no `buttons` key at all; an empty list
    /// yields an empty `buttons` array. The scripted side tells the two
    /// apart, so the distinction must survive the mapping.
    pub fn to_map(message: &InAppMessage) -> Map<String, Value> {
        let mut map = Map::new();
        if let Some(title) = &message.title {
            map.insert("title".to_string(), Value::String(title.clone()));
        }
        if let Some(content) = &message.content {
            map.insert("content".to_string(), Value::String(content.clone()));
        }
        if let Some(buttons) = &message.buttons {
            let buttons: Vec<Value> = buttons
                .iter()
                .map(|button| Value::Object(Self::button_to_map(button)))
                .collect();
            map.insert("buttons".to_string(), Value::Array(buttons));
        }
        map
    }

    /// Converts an in-app message into the bridge's writable container.
    pub fn to_writable(message: &InAppMessage) -> Result<WritableMap, BridgeError> {
        map_to_writable(&Self::to_map(message))
    }
}
