//! Intent construction for reopening notifications.
//!
//! The produced intent carries the normalized notification map as its
//! extras bundle, so the receiving side can rebuild the notification
//! without consulting the SDK again.

use shared::{NotificationButtonData, NotificationData};

use crate::error::BridgeError;
use crate::mappers::{map_to_bundle, NotificationMapper};
use crate::platform::{Context, Intent};

/// Action carried by intents that reopen a notification.
pub const ACTION_NOTIFICATION_OPENED: &str = "push_bridge.NOTIFICATION_OPENED";

/// Extras key holding the id of the clicked action button, when any.
pub const EXTRA_BUTTON_ID: &str = "buttonId";

/// Extras key holding the text of the clicked action button, when any.
pub const EXTRA_BUTTON_TEXT: &str = "buttonText";

/// Builds an intent that reopens/displays the given notification.
pub fn notification_intent(
    context: &Context,
    data: &NotificationData,
) -> Result<Intent, BridgeError> {
    if data.message_id.is_empty() {
        return Err(BridgeError::MissingMessageId);
    }
    let mut intent = Intent::new(ACTION_NOTIFICATION_OPENED);
    intent.set_package(context.package_name.clone());
    intent.put_extras(map_to_bundle(&NotificationMapper::to_map(data)));
    Ok(intent)
}

/// Same as [`notification_intent`], additionally recording which action
/// button was clicked so the receiver can dispatch click tracking.
pub fn notification_intent_with_button(
    context: &Context,
    data: &NotificationData,
    clicked_button: &NotificationButtonData,
) -> Result<Intent, BridgeError> {
    let mut intent = notification_intent(context, data)?;
    if let Some(id) = &clicked_button.id {
        intent.put_extra(EXTRA_BUTTON_ID, serde_json::Value::String(id.clone()));
    }
    if let Some(text) = &clicked_button.text {
        intent.put_extra(EXTRA_BUTTON_TEXT, serde_json::Value::String(text.clone()));
    }
    Ok(intent)
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn sample_context() -> Context {
        Context::new("com.example.app")
    }

    fn sample_notification() -> NotificationData {
        NotificationData {
            message_id: "msg-9".to_string(),
            title: Some("Hello".to_string()),
            content: Some("World".to_string()),
            big_title: None,
            big_content: None,
            summary: None,
            image_url: None,
            icon_url: None,
            custom_content: None,
            buttons: Vec::new(),
        }
    }

    #[test]
    fn test_intent_carries_action_package_and_notification() {
        let intent = notification_intent(&sample_context(), &sample_notification()).unwrap();

        assert_eq!(intent.action(), ACTION_NOTIFICATION_OPENED);
        assert_eq!(intent.package(), Some("com.example.app"));
        assert_eq!(intent.extras().get("messageId"), Some(&json!("msg-9")));
        assert_eq!(intent.extras().get("title"), Some(&json!("Hello")));
    }

    #[test]
    fn test_button_variant_records_clicked_button() {
        let clicked = NotificationButtonData {
            id: Some("accept".to_string()),
            text: Some("Accept".to_string()),
            icon: None,
        };

        let intent = notification_intent_with_button(
            &sample_context(),
            &sample_notification(),
            &clicked,
        )
        .unwrap();

        assert_eq!(intent.extras().get(EXTRA_BUTTON_ID), Some(&json!("accept")));
        assert_eq!(
            intent.extras().get(EXTRA_BUTTON_TEXT),
            Some(&json!("Accept"))
        );
    }

    #[test]
    fn test_button_variant_omits_absent_button_fields() {
        let clicked = NotificationButtonData {
            id: None,
            text: None,
            icon: None,
        };

        let intent = notification_intent_with_button(
            &sample_context(),
            &sample_notification(),
            &clicked,
        )
        .unwrap();

        assert!(!intent.extras().contains_key(EXTRA_BUTTON_ID));
        assert!(!intent.extras().contains_key(EXTRA_BUTTON_TEXT));
    }

    #[test]
    fn test_empty_message_id_is_rejected() {
        let mut notification = sample_notification();
        notification.message_id = String::new();

        let err = notification_intent(&sample_context(), &notification).unwrap_err();
        assert_eq!(err, BridgeError::MissingMessageId);
    }
}
