use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

/// Snapshot of a received push notification as handed over by the SDK.
///
/// Absent optional fields mean the sender did not set them; the mapping
/// layer omits such fields from its output rather than emitting nulls.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct NotificationData {
    /// Wire identifier of the message; required to reopen the notification
    pub message_id: String,
    pub title: Option<String>,
    pub content: Option<String>,
    /// Title shown in the expanded ("big text") notification style
    pub big_title: Option<String>,
    /// Body shown in the expanded notification style
    pub big_content: Option<String>,
    pub summary: Option<String>,
    pub image_url: Option<String>,
    pub icon_url: Option<String>,
    /// Free-form JSON attached by the sender
    pub custom_content: Option<Map<String, Value>>,
    /// Action buttons rendered on the notification; empty when none
    pub buttons: Vec<NotificationButtonData>,
}

/// One action button of a notification, as reported on a button click.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct NotificationButtonData {
    pub id: Option<String>,
    pub text: Option<String>,
    pub icon: Option<String>,
}

/// An in-app message delivered by the SDK's in-app messaging module.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct InAppMessage {
    pub title: Option<String>,
    pub content: Option<String>,
    /// `None` when the message carries no button list at all; `Some(vec![])`
    /// when it carries an explicitly empty one. The two are distinguishable
    /// on the scripted side, so the distinction is preserved here.
    pub buttons: Option<Vec<InAppMessageButton>>,
}

/// A single in-app message button.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct InAppMessageButton {
    pub text: Option<String>,
}
