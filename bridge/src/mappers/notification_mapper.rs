use serde_json::{Map, Value};

use shared::{NotificationButtonData, NotificationData};

use crate::error::BridgeError;
use crate::mappers::map_to_writable;
use crate::writable::WritableMap;

/// Mapper from SDK notification objects to bridge containers.
///
/// Keys are camel-cased because the scripted side reads them; absent
/// optional fields are omitted entirely, never written as nulls.
pub struct NotificationMapper;

impl NotificationMapper {
    /// Normalizes a notification into a generic string-keyed map.
    pub fn to_map(data: &NotificationData) -> Map<String, Value> {
        let mut map = Map::new();
        map.insert("messageId".to_string(), Value::String(data.message_id.clone()));
        Self::put_opt(&mut map, "title", &data.title);
        Self::put_opt(&mut map, "content", &data.content);
        Self::put_opt(&mut map, "bigTitle", &data.big_title);
        Self::put_opt(&mut map, "bigContent", &data.big_content);
        Self::put_opt(&mut map, "summary", &data.summary);
        Self::put_opt(&mut map, "imageUrl", &data.image_url);
        Self::put_opt(&mut map, "iconUrl", &data.icon_url);
        if let Some(custom) = &data.custom_content {
            map.insert("customContent".to_string(), Value::Object(custom.clone()));
        }
        let buttons: Vec<Value> = data
            .buttons
            .iter()
            .map(|button| Value::Object(Self::button_to_map(button)))
            .collect();
        map.insert("buttons".to_string(), Value::Array(buttons));
        map
    }

    /// Normalizes one notification button; absent fields are omitted.
    pub fn button_to_map(button: &NotificationButtonData) -> Map<String, Value> {
        let mut map = Map::new();
        Self::put_opt(&mut map, "id", &button.id);
        Self::put_opt(&mut map, "text", &button.text);
        Self::put_opt(&mut map, "icon", &button.icon);
        map
    }

    /// Converts a notification into the bridge's writable container.
    pub fn to_writable(data: &NotificationData) -> Result<WritableMap, BridgeError> {
        map_to_writable(&Self::to_map(data))
    }

    /// Same as [`Self::to_writable`], with the clicked button merged in
    /// under `clickedButton` for click tracking on the scripted side.
    pub fn to_writable_with_button(
        data: &NotificationData,
        clicked_button: &NotificationButtonData,
    ) -> Result<WritableMap, BridgeError> {
        let mut map = Self::to_map(data);
        map.insert(
            "clickedButton".to_string(),
            Value::Object(Self::button_to_map(clicked_button)),
        );
        map_to_writable(&map)
    }

    fn put_opt(map: &mut Map<String, Value>, key: &str, value: &Option<String>) {
        if let Some(value) = value {
            map.insert(key.to_string(), Value::String(value.clone()));
        }
    }
}
