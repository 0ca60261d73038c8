//! Configuration values held by the config store.

use std::fmt;

use indexmap::IndexMap;
use serde::{Deserialize, Serialize};

/// The persisted key/value mapping.
///
/// Insertion order is kept so `config show` lists keys in the order they were
/// first set.
pub type ConfigMap = IndexMap<String, ConfigValue>;

/// A single configuration value.
///
/// The CLI only ever stores [`ConfigValue::String`]; the other variants exist
/// so a hand-edited file still loads and is written back unchanged. Numbers
/// keep their JSON text (`u64` values past `i64::MAX` included), and arrays
/// or objects are carried through as [`ConfigValue::Nested`].
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum ConfigValue {
    Null,
    Bool(bool),
    Number(serde_json::Number),
    String(String),
    Nested(serde_json::Value),
}

impl ConfigValue {
    /// Borrow the inner string, if this is a string value.
    pub fn as_str(&self) -> Option<&str> {
        match self {
            Self::String(s) => Some(s),
            _ => None,
        }
    }

    /// Interpret the value as a flag. Accepts JSON booleans and the strings
    /// `true`/`false`/`1`/`0`/`yes`/`no`.
    pub fn as_bool(&self) -> Option<bool> {
        match self {
            Self::Bool(b) => Some(*b),
            Self::Number(n) => n.as_i64().map(|i| i != 0),
            Self::String(s) => match s.to_ascii_lowercase().as_str() {
                "true" | "1" | "yes" | "on" => Some(true),
                "false" | "0" | "no" | "off" => Some(false),
                _ => None,
            },
            _ => None,
        }
    }
}

impl fmt::Display for ConfigValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Null => f.write_str("null"),
            Self::Bool(b) => write!(f, "{b}"),
            Self::Number(n) => write!(f, "{n}"),
            Self::String(s) => f.write_str(s),
            Self::Nested(v) => write!(f, "{v}"),
        }
    }
}

impl From<String> for ConfigValue {
    fn from(s: String) -> Self {
        Self::String(s)
    }
}

impl From<&str> for ConfigValue {
    fn from(s: &str) -> Self {
        Self::String(s.to_string())
    }
}

impl From<bool> for ConfigValue {
    fn from(b: bool) -> Self {
        Self::Bool(b)
    }
}

impl From<i64> for ConfigValue {
    fn from(i: i64) -> Self {
        Self::Number(i.into())
    }
}
