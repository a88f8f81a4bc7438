//! Tableize configuration
//!
//! Users configure the plugin through one mapping in the host settings:
//!
//! ```toml
//! [TABLEIZE_PLUGIN]
//! ai = 1
//! th = true
//! separator = ","
//! template = """
//! <table class="tableize">...</table>
//! """
//! ```
//!
//! Every key is optional. After initialization the resolved mapping is
//! stored back under the same name and each field is also published under a
//! flat `TABLEIZE_*` key for the rendering stage.

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};
use tableize_host::{HostSettings, ValueKind};

/// Settings key holding the plugin's mapping
pub const NAMESPACE: &str = "TABLEIZE_PLUGIN";

pub const DEFAULT_AUTO_INDEX: i64 = 1;
pub const DEFAULT_TABLE_HEADER: bool = false;
pub const DEFAULT_SEPARATOR: &str = "|";

/// Built-in table template (Jinja syntax)
pub const DEFAULT_TEMPLATE: &str = r#"<div class="tableize">
  <table class="tableize">
    {%- if caption %}
    <caption> {{ caption }} </caption>
    {%- endif %}
    {%- if th %}
    <thead class="tableize">
    <tr class="tableize">
      {%- if ai == 1 %}
      <th class="tableize"> No. </th>
      {%- endif %}
      {%- for head in heads %}
      <th class="tableize">{{ head }}</th>
      {%- endfor %}
    </tr>
    </thead>
    {%- endif %}
    <tbody class="tableize">
      {%- for body in bodies %}
      <tr class="tableize">
        {%- if ai == 1 %}
        <td class="tableize">{{ loop.index }}  </td>
        {%- endif %}
        {%- for entry in body %}
        <td class="tableize">{{ entry }}</td>
        {%- endfor %}
      </tr>
      {%- endfor %}
    </tbody>
  </table>
</div>"#;

/// Diagnostic codes reported by the plugin
pub mod codes {
    /// Override has a different type than the default
    pub const TYPE_MISMATCH: &str = "TBL001";
    /// Separator is not exactly one character
    pub const SEPARATOR_LENGTH: &str = "TBL002";
    /// Key is not one of the four recognized keys
    pub const UNKNOWN_KEY: &str = "TBL003";
    /// Namespace absent, defaults used
    pub const NAMESPACE_MISSING: &str = "TBL004";
    /// Namespace present but not a mapping
    pub const NAMESPACE_MALFORMED: &str = "TBL005";
    /// Host passed no settings
    pub const HOST_UNAVAILABLE: &str = "TBL006";
}

/// A recognized configuration key
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ConfigKey {
    AutoIndex,
    TableHeader,
    Separator,
    Template,
}

impl ConfigKey {
    pub const ALL: [ConfigKey; 4] = [
        ConfigKey::AutoIndex,
        ConfigKey::TableHeader,
        ConfigKey::Separator,
        ConfigKey::Template,
    ];

    /// Key inside the namespace mapping
    pub fn name(self) -> &'static str {
        match self {
            ConfigKey::AutoIndex => "ai",
            ConfigKey::TableHeader => "th",
            ConfigKey::Separator => "separator",
            ConfigKey::Template => "template",
        }
    }

    /// Flat top-level settings key
    pub fn flat_name(self) -> &'static str {
        match self {
            ConfigKey::AutoIndex => "TABLEIZE_AUTO_INDEX",
            ConfigKey::TableHeader => "TABLEIZE_TABLE_HEADER",
            ConfigKey::Separator => "TABLEIZE_SEPARATOR",
            ConfigKey::Template => "TABLEIZE_TEMPLATE",
        }
    }

    pub fn from_name(name: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|key| key.name() == name)
    }

    /// Built-in default
    pub fn default_value(self) -> Value {
        match self {
            ConfigKey::AutoIndex => Value::from(DEFAULT_AUTO_INDEX),
            ConfigKey::TableHeader => Value::from(DEFAULT_TABLE_HEADER),
            ConfigKey::Separator => Value::from(DEFAULT_SEPARATOR),
            ConfigKey::Template => Value::from(DEFAULT_TEMPLATE),
        }
    }

    /// Type an override must have, taken from the default
    pub fn expected_kind(self) -> ValueKind {
        ValueKind::of(&self.default_value())
    }
}

/// Typed view of a resolved configuration
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TableizeConfig {
    /// Prepend a running row number when equal to 1
    #[serde(rename = "ai")]
    pub auto_index: i64,
    /// Render the header row
    #[serde(rename = "th")]
    pub table_header: bool,
    /// Column separator for the plain-text rendition
    pub separator: String,
    /// Jinja template for the HTML rendition
    pub template: String,
}

impl Default for TableizeConfig {
    fn default() -> Self {
        Self {
            auto_index: DEFAULT_AUTO_INDEX,
            table_header: DEFAULT_TABLE_HEADER,
            separator: DEFAULT_SEPARATOR.to_string(),
            template: DEFAULT_TEMPLATE.to_string(),
        }
    }
}

impl TableizeConfig {
    /// Build from a resolved namespace mapping.
    ///
    /// Fields that are missing or hold a value of the wrong type fall back
    /// to their defaults.
    pub fn from_mapping(mapping: &Map<String, Value>) -> Self {
        Self::from_lookup(|key| mapping.get(key.name()))
    }

    /// Build from the flat `TABLEIZE_*` keys, with the same fallback
    pub fn from_flat_settings(settings: &HostSettings) -> Self {
        Self::from_lookup(|key| settings.get(key.flat_name()))
    }

    fn from_lookup<'a>(get: impl Fn(ConfigKey) -> Option<&'a Value>) -> Self {
        let defaults = Self::default();
        Self {
            auto_index: get(ConfigKey::AutoIndex)
                .and_then(Value::as_i64)
                .unwrap_or(defaults.auto_index),
            table_header: get(ConfigKey::TableHeader)
                .and_then(Value::as_bool)
                .unwrap_or(defaults.table_header),
            separator: get(ConfigKey::Separator)
                .and_then(Value::as_str)
                .map(str::to_string)
                .unwrap_or(defaults.separator),
            template: get(ConfigKey::Template)
                .and_then(Value::as_str)
                .map(str::to_string)
                .unwrap_or(defaults.template),
        }
    }

    /// The four-key namespace mapping
    pub fn to_mapping(&self) -> Map<String, Value> {
        let mut mapping = Map::new();
        mapping.insert(ConfigKey::AutoIndex.name().into(), self.auto_index.into());
        mapping.insert(ConfigKey::TableHeader.name().into(), self.table_header.into());
        mapping.insert(
            ConfigKey::Separator.name().into(),
            self.separator.clone().into(),
        );
        mapping.insert(
            ConfigKey::Template.name().into(),
            self.template.clone().into(),
        );
        mapping
    }

    /// Whether rows get a running number
    pub fn auto_index_enabled(&self) -> bool {
        self.auto_index == 1
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_defaults() {
        let config = TableizeConfig::default();
        assert_eq!(config.auto_index, 1);
        assert!(!config.table_header);
        assert_eq!(config.separator, "|");
        assert_eq!(config.template, DEFAULT_TEMPLATE);
        assert!(config.auto_index_enabled());
    }

    #[test]
    fn test_expected_kinds() {
        assert_eq!(ConfigKey::AutoIndex.expected_kind(), ValueKind::Integer);
        assert_eq!(ConfigKey::TableHeader.expected_kind(), ValueKind::Boolean);
        assert_eq!(ConfigKey::Separator.expected_kind(), ValueKind::String);
        assert_eq!(ConfigKey::Template.expected_kind(), ValueKind::String);
    }

    #[test]
    fn test_key_names_round_trip() {
        for key in ConfigKey::ALL {
            assert_eq!(ConfigKey::from_name(key.name()), Some(key));
            assert!(key.flat_name().starts_with("TABLEIZE_"));
        }
        assert_eq!(ConfigKey::from_name("colour"), None);
    }

    #[test]
    fn test_to_mapping_has_four_keys() {
        let mapping = TableizeConfig::default().to_mapping();
        let keys: Vec<&str> = mapping.keys().map(String::as_str).collect();
        assert_eq!(keys.len(), 4);
        for key in ConfigKey::ALL {
            assert_eq!(mapping.get(key.name()), Some(&key.default_value()));
        }
    }

    #[test]
    fn test_from_mapping_falls_back_on_wrong_types() {
        let mapping = json!({
            "ai": true,
            "th": "yes",
            "separator": ",",
        });
        let config = TableizeConfig::from_mapping(mapping.as_object().unwrap());

        assert_eq!(config.auto_index, DEFAULT_AUTO_INDEX);
        assert_eq!(config.table_header, DEFAULT_TABLE_HEADER);
        assert_eq!(config.separator, ",");
        assert_eq!(config.template, DEFAULT_TEMPLATE);
    }

    #[test]
    fn test_from_flat_settings() {
        let mut settings = HostSettings::new();
        settings.insert("TABLEIZE_AUTO_INDEX", 0);
        settings.insert("TABLEIZE_TABLE_HEADER", true);

        let config = TableizeConfig::from_flat_settings(&settings);
        assert_eq!(config.auto_index, 0);
        assert!(config.table_header);
        assert_eq!(config.separator, DEFAULT_SEPARATOR);
    }

    #[test]
    fn test_serde_uses_short_keys() {
        let json = serde_json::to_value(TableizeConfig::default()).unwrap();
        assert_eq!(json["ai"], json!(1));
        assert_eq!(json["th"], json!(false));
    }
}
