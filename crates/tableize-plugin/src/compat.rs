//! Smart-quotes compatibility probe
//!
//! The markup layer's smarty extension rewrites straight quotes into
//! typographic ones (`&ldquo;`, `&rsquo;`, ...). Table cells that went
//! through it need their quotes folded back before the separator-based
//! rendition is built, so the plugin checks for it once at startup.

use tableize_host::HostSettings;
use tracing::{debug, info};

pub const MARKDOWN_KEY: &str = "MARKDOWN";
pub const EXTENSION_CONFIGS_KEY: &str = "extension_configs";
pub const SMARTY_EXTENSION: &str = "markdown.extensions.smarty";

/// Settings path to the smarty extension's configuration
pub const SMARTY_PATH: [&str; 3] = [MARKDOWN_KEY, EXTENSION_CONFIGS_KEY, SMARTY_EXTENSION];

/// Check whether the smarty extension is configured.
///
/// Any missing link in `MARKDOWN` → `extension_configs` → smarty, or a link
/// that is not a mapping, reads as "not enabled".
pub fn smart_quotes_enabled(settings: &HostSettings) -> bool {
    if settings.lookup(&SMARTY_PATH).is_some() {
        info!(
            "{} is found in {}['{}']",
            SMARTY_EXTENSION, MARKDOWN_KEY, EXTENSION_CONFIGS_KEY
        );
        return true;
    }

    match missing_link(settings) {
        Some(link) => debug!("{} not found in settings; smart quotes off", link),
        None => debug!("{} is not configured; smart quotes off", SMARTY_EXTENSION),
    }
    false
}

/// First link of the path that does not resolve to a mapping
fn missing_link(settings: &HostSettings) -> Option<&'static str> {
    let parents = &SMARTY_PATH[..SMARTY_PATH.len() - 1];
    (1..=parents.len())
        .find(|&depth| {
            !settings
                .lookup(&parents[..depth])
                .is_some_and(|value| value.is_object())
        })
        .map(|depth| parents[depth - 1])
}

/// Fold typographic quotes and their HTML entities back to ASCII quotes
pub fn straighten_quotes(text: &str) -> String {
    const REPLACEMENTS: [(&str, &str); 12] = [
        ("&ldquo;", "\""),
        ("&rdquo;", "\""),
        ("&#8220;", "\""),
        ("&#8221;", "\""),
        ("\u{201C}", "\""),
        ("\u{201D}", "\""),
        ("&lsquo;", "'"),
        ("&rsquo;", "'"),
        ("&#8216;", "'"),
        ("&#8217;", "'"),
        ("\u{2018}", "'"),
        ("\u{2019}", "'"),
    ];

    REPLACEMENTS
        .iter()
        .fold(text.to_string(), |acc, (from, to)| acc.replace(from, to))
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn settings(value: serde_json::Value) -> HostSettings {
        HostSettings::from_value(value).unwrap()
    }

    #[test]
    fn test_full_chain_present() {
        let settings = settings(json!({
            "MARKDOWN": {
                "extension_configs": {
                    "markdown.extensions.smarty": { "smart_quotes": true }
                }
            }
        }));
        assert!(smart_quotes_enabled(&settings));
    }

    #[test]
    fn test_empty_extension_config_still_counts() {
        let settings = settings(json!({
            "MARKDOWN": { "extension_configs": { "markdown.extensions.smarty": {} } }
        }));
        assert!(smart_quotes_enabled(&settings));
    }

    #[test]
    fn test_no_markdown_settings() {
        assert!(!smart_quotes_enabled(&HostSettings::new()));
        assert_eq!(missing_link(&HostSettings::new()), Some(MARKDOWN_KEY));
    }

    #[test]
    fn test_markdown_not_a_mapping() {
        let settings = settings(json!({ "MARKDOWN": "enabled" }));
        assert!(!smart_quotes_enabled(&settings));
        assert_eq!(missing_link(&settings), Some(MARKDOWN_KEY));
    }

    #[test]
    fn test_no_extension_configs() {
        let settings = settings(json!({ "MARKDOWN": { "output_format": "html5" } }));
        assert!(!smart_quotes_enabled(&settings));
        assert_eq!(missing_link(&settings), Some(EXTENSION_CONFIGS_KEY));
    }

    #[test]
    fn test_other_extensions_only() {
        let settings = settings(json!({
            "MARKDOWN": {
                "extension_configs": { "markdown.extensions.codehilite": {} }
            }
        }));
        assert!(!smart_quotes_enabled(&settings));
        assert_eq!(missing_link(&settings), None);
    }

    #[test]
    fn test_straighten_quotes() {
        assert_eq!(
            straighten_quotes("&ldquo;Hi&rdquo; it\u{2019}s &lsquo;x&#8217;"),
            "\"Hi\" it's 'x'"
        );
        assert_eq!(straighten_quotes("plain | text"), "plain | text");
    }
}
