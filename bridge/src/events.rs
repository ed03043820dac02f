//! Events the native side broadcasts to the scripted side.
//!
//! Each event has two names: the `key` the scripted API exposes to
//! handler registration, and the `broadcast_name` the emitter puts on
//! the wire. The split mirrors the scripted wrapper, which maps one to
//! the other when it attaches its listeners.

/// A bridge event kind, covering both notification and in-app messaging.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum BridgeEvent {
    NotificationReceived,
    NotificationClicked,
    NotificationDismissed,
    NotificationButtonClicked,
    CustomContentReceived,
    InAppReceived,
    InAppTriggered,
    InAppClicked,
    InAppDismissed,
    InAppButtonClicked,
}

impl BridgeEvent {
    pub const ALL: [BridgeEvent; 10] = [
        BridgeEvent::NotificationReceived,
        BridgeEvent::NotificationClicked,
        BridgeEvent::NotificationDismissed,
        BridgeEvent::NotificationButtonClicked,
        BridgeEvent::CustomContentReceived,
        BridgeEvent::InAppReceived,
        BridgeEvent::InAppTriggered,
        BridgeEvent::InAppClicked,
        BridgeEvent::InAppDismissed,
        BridgeEvent::InAppButtonClicked,
    ];

    /// Handler-facing event name on the scripted side.
    pub fn key(self) -> &'static str {
        match self {
            BridgeEvent::NotificationReceived => "received",
            BridgeEvent::NotificationClicked => "clicked",
            BridgeEvent::NotificationDismissed => "dismissed",
            BridgeEvent::NotificationButtonClicked => "button_clicked",
            BridgeEvent::CustomContentReceived => "custom_content_received",
            BridgeEvent::InAppReceived => "piam_received",
            BridgeEvent::InAppTriggered => "piam_triggered",
            BridgeEvent::InAppClicked => "piam_clicked",
            BridgeEvent::InAppDismissed => "piam_dismissed",
            BridgeEvent::InAppButtonClicked => "piam_button",
        }
    }

    /// Name the native emitter broadcasts over the bridge.
    pub fn broadcast_name(self) -> &'static str {
        match self {
            BridgeEvent::NotificationReceived => "PushBridge-NotificationReceived",
            BridgeEvent::NotificationClicked => "PushBridge-Clicked",
            BridgeEvent::NotificationDismissed => "PushBridge-Dismissed",
            BridgeEvent::NotificationButtonClicked => "PushBridge-ButtonClicked",
            BridgeEvent::CustomContentReceived => "PushBridge-CustomContentReceived",
            BridgeEvent::InAppReceived => "PushBridge-InAppReceived",
            BridgeEvent::InAppTriggered => "PushBridge-InAppTriggered",
            BridgeEvent::InAppClicked => "PushBridge-InAppClicked",
            BridgeEvent::InAppDismissed => "PushBridge-InAppDismissed",
            BridgeEvent::InAppButtonClicked => "PushBridge-InAppButtonClicked",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn test_keys_are_distinct() {
        let keys: HashSet<&str> = BridgeEvent::ALL.iter().map(|e| e.key()).collect();
        assert_eq!(keys.len(), BridgeEvent::ALL.len());
    }

    #[test]
    fn test_broadcast_names_are_distinct_and_prefixed() {
        let names: HashSet<&str> = BridgeEvent::ALL.iter().map(|e| e.broadcast_name()).collect();
        assert_eq!(names.len(), BridgeEvent::ALL.len());
        assert!(names.iter().all(|n| n.starts_with("PushBridge-")));
    }
}
