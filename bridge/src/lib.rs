//! Mapping layer between the push SDK's domain objects and the
//! cross-runtime bridge.
//!
//! Notifications and in-app messages arrive as native domain objects
//! (see the `shared` crate). The scripted side of the bridge consumes
//! them as writable maps; the host platform consumes them as intents
//! with extras bundles. Everything in this crate is a pure conversion
//! over immutable input snapshots.

pub mod emitter;
pub mod error;
pub mod events;
pub mod mappers;
pub mod platform;
pub mod writable;

pub use error::BridgeError;
pub use events::BridgeEvent;
pub use writable::{BridgeValue, WritableArray, WritableMap};
