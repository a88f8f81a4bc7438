//! tableize - re-render HTML tables in generated site content
//!
//! A host plugin that takes the tables found in rendered articles and pages
//! and renders them again through a configurable template, with optional
//! row numbering, an optional header row and a column separator for the
//! plain-text rendition.
//!
//! The plugin does its work when the host fires `initialized`: it resolves
//! the user's `TABLEIZE_PLUGIN` mapping against the built-in defaults,
//! checks whether the smarty extension will rewrite quotes, and publishes
//! the result back into the host settings for the rendering stage.
//!
//! # Example
//!
//! ```
//! use tableize::TableizePlugin;
//! use tableize_host::{Generator, HostSettings, Site};
//!
//! let settings = HostSettings::from_toml_str(r#"
//! [TABLEIZE_PLUGIN]
//! th = true
//! separator = ","
//! "#).unwrap();
//!
//! let mut site = Site::new(settings);
//! site.add_plugin(TableizePlugin::boxed());
//! site.run(&Generator::articles("content", "output"), &[]);
//!
//! let published = site.settings();
//! assert_eq!(published.get("TABLEIZE_SEPARATOR").and_then(|v| v.as_str()), Some(","));
//! assert_eq!(published.get("TABLEIZE_TABLE_HEADER").and_then(|v| v.as_bool()), Some(true));
//! assert_eq!(published.get("TABLEIZE_AUTO_INDEX").and_then(|v| v.as_i64()), Some(1));
//! ```

pub mod compat;
pub mod config;
pub mod error;
pub mod hooks;
pub mod render;
pub mod resolver;
pub mod state;

pub use config::{ConfigKey, TableizeConfig, DEFAULT_TEMPLATE, NAMESPACE};
pub use error::{Result, TableizeError};
pub use hooks::{Registration, TableizePlugin, PLUGIN_NAME};
pub use render::TableRenderer;
pub use resolver::{resolve, write_back, Resolution, ResolvedConfig};
pub use state::{Phase, PluginState};

/// Crate version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_version() {
        assert!(!VERSION.is_empty());
    }
}
