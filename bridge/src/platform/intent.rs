use serde_json::Value;

use super::Bundle;

/// The sliver of host application context intent construction needs.
#[derive(Debug, Clone, PartialEq)]
pub struct Context {
    /// Package name of the host application; routes the intent back to it
    pub package_name: String,
}

impl Context {
    pub fn new(package_name: impl Into<String>) -> Self {
        Self {
            package_name: package_name.into(),
        }
    }
}

/// A platform message object describing an action for the host environment
/// to perform, e.g. reopening a notification view.
#[derive(Debug, Clone, PartialEq)]
pub struct Intent {
    action: String,
    package: Option<String>,
    extras: Bundle,
}

impl Intent {
    pub fn new(action: impl Into<String>) -> Self {
        Self {
            action: action.into(),
            package: None,
            extras: Bundle::new(),
        }
    }

    pub fn set_package(&mut self, package: impl Into<String>) {
        self.package = Some(package.into());
    }

    pub fn put_extra(&mut self, key: impl Into<String>, value: Value) {
        self.extras.put(key, value);
    }

    /// Merges every entry of `bundle` into this intent's extras.
    pub fn put_extras(&mut self, bundle: Bundle) {
        for (key, value) in bundle.into_entries() {
            self.extras.put(key, value);
        }
    }

    pub fn action(&self) -> &str {
        &self.action
    }

    pub fn package(&self) -> Option<&str> {
        self.package.as_deref()
    }

    pub fn extras(&self) -> &Bundle {
        &self.extras
    }
}
