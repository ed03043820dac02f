#[derive(Debug, thiserror::Error, PartialEq)]
pub enum BridgeError {
    #[error("Value under key '{key}' is an integer too large for the bridge")]
    UnrepresentableNumber { key: String },
    #[error("Notification has an empty message id")]
    MissingMessageId,
}
