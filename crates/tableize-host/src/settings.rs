//! Host settings mapping
//!
//! The host owns a single dynamically-typed settings mapping for the whole
//! run. Plugins read the keys they care about and write back their own
//! namespaced keys; nothing here validates what a plugin stores.
//!
//! # Example
//!
//! ```
//! use tableize_host::HostSettings;
//!
//! let settings = HostSettings::from_toml_str(r#"
//! [MARKDOWN.extension_configs."markdown.extensions.smarty"]
//! smart_quotes = true
//! "#).unwrap();
//!
//! let smarty = settings.lookup(&["MARKDOWN", "extension_configs", "markdown.extensions.smarty"]);
//! assert!(smarty.is_some());
//! assert!(settings.lookup(&["MARKDOWN", "output_format"]).is_none());
//! ```

use std::fmt;

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

use crate::error::{HostError, Result};

/// The host's settings mapping
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct HostSettings {
    values: Map<String, Value>,
}

impl HostSettings {
    /// Create an empty settings mapping
    pub fn new() -> Self {
        Self::default()
    }

    /// Wrap a JSON value, which must be an object
    pub fn from_value(value: Value) -> Result<Self> {
        match value {
            Value::Object(values) => Ok(Self { values }),
            other => Err(HostError::NotAMapping(ValueKind::of(&other))),
        }
    }

    /// Parse settings from a TOML string
    pub fn from_toml_str(toml_str: &str) -> Result<Self> {
        let values: Map<String, Value> = toml::from_str(toml_str)?;
        Ok(Self { values })
    }

    /// Get a top-level value
    pub fn get(&self, key: &str) -> Option<&Value> {
        self.values.get(key)
    }

    /// Insert a top-level value, returning the previous one
    pub fn insert(&mut self, key: impl Into<String>, value: impl Into<Value>) -> Option<Value> {
        self.values.insert(key.into(), value.into())
    }

    /// Check if a top-level key exists
    pub fn contains_key(&self, key: &str) -> bool {
        self.values.contains_key(key)
    }

    /// Follow a chain of nested mapping keys.
    ///
    /// Returns `None` as soon as a link is missing or an intermediate value
    /// is not a mapping.
    pub fn lookup(&self, path: &[&str]) -> Option<&Value> {
        let (first, rest) = path.split_first()?;
        rest.iter()
            .try_fold(self.values.get(*first)?, |value, key| value.as_object()?.get(*key))
    }

    /// Number of top-level keys
    pub fn len(&self) -> usize {
        self.values.len()
    }

    /// Check if empty
    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }
}

/// Coarse type of a settings value
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ValueKind {
    Null,
    Boolean,
    Integer,
    Float,
    String,
    Sequence,
    Mapping,
}

impl ValueKind {
    /// Classify a value. Booleans are never integers.
    pub fn of(value: &Value) -> Self {
        match value {
            Value::Null => ValueKind::Null,
            Value::Bool(_) => ValueKind::Boolean,
            Value::Number(n) if n.is_f64() => ValueKind::Float,
            Value::Number(_) => ValueKind::Integer,
            Value::String(_) => ValueKind::String,
            Value::Array(_) => ValueKind::Sequence,
            Value::Object(_) => ValueKind::Mapping,
        }
    }

    /// Description with article, as used in configuration warnings
    pub fn description(self) -> &'static str {
        match self {
            ValueKind::Null => "nothing",
            ValueKind::Boolean => "a boolean",
            ValueKind::Integer => "an integer",
            ValueKind::Float => "a float",
            ValueKind::String => "a string",
            ValueKind::Sequence => "a list",
            ValueKind::Mapping => "a mapping",
        }
    }
}

impl fmt::Display for ValueKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ValueKind::Null => write!(f, "null"),
            ValueKind::Boolean => write!(f, "boolean"),
            ValueKind::Integer => write!(f, "integer"),
            ValueKind::Float => write!(f, "float"),
            ValueKind::String => write!(f, "string"),
            ValueKind::Sequence => write!(f, "sequence"),
            ValueKind::Mapping => write!(f, "mapping"),
        }
    }
}
