//! Modeled host-platform structures produced by the mapping layer.

mod bundle;
mod intent;

pub use bundle::Bundle;
pub use intent::{Context, Intent};
