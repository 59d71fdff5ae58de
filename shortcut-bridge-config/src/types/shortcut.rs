//! Option map for a single shortcut.

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

/// Options a host passes when it creates a shortcut.
///
/// Only the `"key"` field is read; other fields of the option map belong to
/// the host and are ignored here.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ShortcutOptions {
    /// Shortcut string, e.g. "ctrl+shift+a"
    pub key: String,
}

impl ShortcutOptions {
    /// Options for the given shortcut string.
    pub fn new(key: impl Into<String>) -> Self {
        Self { key: key.into() }
    }

    /// Read options from a host option map.
    ///
    /// A missing or non-string `"key"` yields an empty shortcut string,
    /// which later fails to parse and is reported through the handle.
    pub fn from_option_map(options: &Map<String, Value>) -> Self {
        let key = match options.get("key") {
            Some(Value::String(key)) => key.clone(),
            Some(other) => {
                log::debug!("Ignoring non-string shortcut key option: {other}");
                String::new()
            }
            None => String::new(),
        };
        Self { key }
    }

    /// Read options from an arbitrary JSON value.
    ///
    /// Anything other than an object is treated as an empty option map.
    pub fn from_value(value: &Value) -> Self {
        match value.as_object() {
            Some(map) => Self::from_option_map(map),
            None => Self::default(),
        }
    }
}
