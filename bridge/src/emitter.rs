//! Delivery seam between the mappers and the bridge transport.

use log::debug;

use shared::{InAppMessage, NotificationButtonData, NotificationData};

use crate::error::BridgeError;
use crate::events::BridgeEvent;
use crate::mappers::{InAppMessageMapper, NotificationMapper};
use crate::writable::WritableMap;

/// Implemented by the bridge transport; receives mapped event payloads
/// destined for the scripted side.
pub trait EventSink {
    fn emit(&mut self, event: BridgeEvent, payload: WritableMap);
}

/// Maps a notification and hands it to the sink under `event`.
pub fn emit_notification(
    sink: &mut dyn EventSink,
    event: BridgeEvent,
    data: &NotificationData,
) -> Result<(), BridgeError> {
    let payload = NotificationMapper::to_writable(data)?;
    debug!(
        "Emitting {} for message {}",
        event.broadcast_name(),
        data.message_id
    );
    sink.emit(event, payload);
    Ok(())
}

/// Maps a notification with its clicked button and emits a button-clicked
/// event.
pub fn emit_notification_button(
    sink: &mut dyn EventSink,
    data: &NotificationData,
    clicked_button: &NotificationButtonData,
) -> Result<(), BridgeError> {
    let payload = NotificationMapper::to_writable_with_button(data, clicked_button)?;
    debug!(
        "Emitting {} for message {}",
        BridgeEvent::NotificationButtonClicked.broadcast_name(),
        data.message_id
    );
    sink.emit(BridgeEvent::NotificationButtonClicked, payload);
    Ok(())
}

/// Maps an in-app message and hands it to the sink under `event`.
pub fn emit_in_app_message(
    sink: &mut dyn EventSink,
    event: BridgeEvent,
    message: &InAppMessage,
) -> Result<(), BridgeError> {
    let payload = InAppMessageMapper::to_writable(message)?;
    debug!("Emitting {}", event.broadcast_name());
    sink.emit(event, payload);
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::{json, Value};

    #[derive(Default)]
    struct RecordingSink {
        emitted: Vec<(BridgeEvent, Value)>,
    }

    impl EventSink for RecordingSink {
        fn emit(&mut self, event: BridgeEvent, payload: WritableMap) {
            self.emitted.push((event, payload.to_json()));
        }
    }

    fn sample_notification() -> NotificationData {
        NotificationData {
            message_id: "msg-1".to_string(),
            title: Some("Hi".to_string()),
            content: None,
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
    fn test_emit_notification_delivers_mapped_payload() {
        let mut sink = RecordingSink::default();

        emit_notification(
            &mut sink,
            BridgeEvent::NotificationReceived,
            &sample_notification(),
        )
        .unwrap();

        assert_eq!(sink.emitted.len(), 1);
        let (event, payload) = &sink.emitted[0];
        assert_eq!(*event, BridgeEvent::NotificationReceived);
        assert_eq!(
            *payload,
            json!({ "messageId": "msg-1", "title": "Hi", "buttons": [] })
        );
    }

    #[test]
    fn test_emit_notification_button_uses_button_clicked_event() {
        let mut sink = RecordingSink::default();
        let clicked = NotificationButtonData {
            id: Some("b1".to_string()),
            text: None,
            icon: None,
        };

        emit_notification_button(&mut sink, &sample_notification(), &clicked).unwrap();

        let (event, payload) = &sink.emitted[0];
        assert_eq!(*event, BridgeEvent::NotificationButtonClicked);
        assert_eq!(payload["clickedButton"], json!({ "id": "b1" }));
    }

    #[test]
    fn test_emit_in_app_message_delivers_mapped_payload() {
        let mut sink = RecordingSink::default();
        let message = InAppMessage {
            title: Some("T".to_string()),
            content: None,
            buttons: None,
        };

        emit_in_app_message(&mut sink, BridgeEvent::InAppTriggered, &message).unwrap();

        let (event, payload) = &sink.emitted[0];
        assert_eq!(*event, BridgeEvent::InAppTriggered);
        assert_eq!(*payload, json!({ "title": "T" }));
    }
}
