//! Settings resolution
//!
//! Merges the user's `TABLEIZE_PLUGIN` mapping over the built-in defaults.
//! Problems are reported, never raised: a value whose type differs from the
//! default's is warned about and then kept exactly as the user wrote it.

use serde_json::{Map, Value};
use tableize_host::{Diagnostic, Diagnostics, HostSettings, ValueKind};
use tracing::debug;

use crate::config::{codes, ConfigKey, TableizeConfig, NAMESPACE};

/// Resolved namespace mapping, always holding the four recognized keys
pub type ResolvedConfig = Map<String, Value>;

/// Outcome of one resolution pass
#[derive(Debug, Clone, PartialEq)]
pub struct Resolution {
    pub config: ResolvedConfig,
    pub diagnostics: Diagnostics,
}

impl Resolution {
    /// Typed view; mistyped fields read as their defaults
    pub fn typed(&self) -> TableizeConfig {
        TableizeConfig::from_mapping(&self.config)
    }
}

/// Resolve user overrides against the defaults.
///
/// `None` means the namespace key is absent from the host settings.
pub fn resolve(overrides: Option<&Map<String, Value>>) -> Resolution {
    let mut diagnostics = Diagnostics::new();
    let mut config = TableizeConfig::default().to_mapping();

    let Some(overrides) = overrides else {
        diagnostics.report(
            Diagnostic::warning(format!(
                "{NAMESPACE} does not exist in settings; plugin's built-in defaults used"
            ))
            .with_code(codes::NAMESPACE_MISSING),
        );
        return Resolution {
            config,
            diagnostics,
        };
    };

    debug!("{} exists in settings", NAMESPACE);
    for (name, value) in overrides {
        let Some(key) = ConfigKey::from_name(name) else {
            diagnostics.report(
                Diagnostic::warning(format!("Tableize plugin -> unknown key \"{name}\" ignored."))
                    .with_code(codes::UNKNOWN_KEY)
                    .with_help("Recognized keys are ai, th, separator and template"),
            );
            continue;
        };

        if let Some(diagnostic) = check_override(key, value) {
            diagnostics.report(diagnostic);
        }
        // Kept even when mistyped
        config.insert(name.clone(), value.clone());
    }

    Resolution {
        config,
        diagnostics,
    }
}

/// Resolve the namespace mapping straight from host settings.
///
/// A namespace value that is not a mapping is treated like an empty one;
/// the initialization hook rejects that case before calling this.
pub fn resolve_settings(settings: &HostSettings) -> Resolution {
    resolve(settings.get(NAMESPACE).and_then(Value::as_object))
}

fn check_override(key: ConfigKey, value: &Value) -> Option<Diagnostic> {
    let expected = key.expected_kind();
    let found = ValueKind::of(value);
    if found != expected {
        return Some(
            Diagnostic::warning(format!(
                "Tableize plugin -> \"{}\" must be {}.",
                key.name(),
                expected.description()
            ))
            .with_code(codes::TYPE_MISMATCH)
            .with_note(format!("found {found}")),
        );
    }

    if key == ConfigKey::Separator {
        let length = value.as_str().map_or(0, |s| s.chars().count());
        if length != 1 {
            return Some(
                Diagnostic::warning(format!(
                    "Tableize plugin -> \"{}\" must be a single character.",
                    key.name()
                ))
                .with_code(codes::SEPARATOR_LENGTH)
                .with_note(format!("found {length} characters")),
            );
        }
    }

    None
}

/// Publish a resolved configuration: the namespace mapping plus one flat
/// key per field. Existing values under those keys are replaced.
pub fn write_back(config: &ResolvedConfig, settings: &mut HostSettings) {
    settings.insert(NAMESPACE, Value::Object(config.clone()));
    for key in ConfigKey::ALL {
        if let Some(value) = config.get(key.name()) {
            settings.insert(key.flat_name(), value.clone());
        }
    }
}
