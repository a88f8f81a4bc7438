//! Table rendering
//!
//! The rendering stage reads the flat `TABLEIZE_*` settings published at
//! initialization and turns a [`Table`] into either templated HTML or a
//! plain-text rendition joined by the configured separator.
//!
//! # Example
//!
//! ```
//! use tableize::{TableRenderer, TableizeConfig};
//! use tableize_ast::{Table, TableRow};
//!
//! let table = Table::new()
//!     .with_row(TableRow::header(["Name", "Qty"]))
//!     .with_row(TableRow::body(["Apple", "3"]));
//!
//! let renderer = TableRenderer::new(TableizeConfig {
//!     table_header: true,
//!     ..TableizeConfig::default()
//! });
//! assert_eq!(renderer.render_text(&table), "No.|Name|Qty\n1|Apple|3");
//! assert!(renderer.render_html(&table).unwrap().contains("<th class=\"tableize\">Qty</th>"));
//! ```

use minijinja::{context, Environment};
use tableize_ast::Table;
use tableize_host::HostSettings;

use crate::compat::straighten_quotes;
use crate::config::TableizeConfig;
use crate::error::Result;

/// Renders tables with a resolved configuration
#[derive(Debug, Clone, PartialEq)]
pub struct TableRenderer {
    config: TableizeConfig,
    smart_quotes: bool,
}

impl TableRenderer {
    pub fn new(config: TableizeConfig) -> Self {
        Self {
            config,
            smart_quotes: false,
        }
    }

    /// Build from the flat keys in host settings
    pub fn from_settings(settings: &HostSettings) -> Self {
        Self::new(TableizeConfig::from_flat_settings(settings))
    }

    /// Fold typographic quotes in cell text back to straight quotes
    pub fn with_smart_quotes(mut self, enabled: bool) -> Self {
        self.smart_quotes = enabled;
        self
    }

    pub fn config(&self) -> &TableizeConfig {
        &self.config
    }

    /// Render through the configured template
    pub fn render_html(&self, table: &Table) -> Result<String> {
        let env = Environment::new();
        let html = env.render_str(
            &self.config.template,
            context! {
                ai => self.config.auto_index,
                th => self.config.table_header,
                caption => table.caption.as_deref().map(|c| self.clean(c)),
                heads => self.heads(table),
                bodies => self.bodies(table),
                separator => self.config.separator.as_str(),
            },
        )?;
        Ok(html)
    }

    /// Plain-text rendition, one line per row
    pub fn render_text(&self, table: &Table) -> String {
        let separator = self.config.separator.as_str();
        let numbered = self.config.auto_index_enabled();
        let mut lines = Vec::new();

        if let Some(caption) = table.caption.as_deref() {
            lines.push(self.clean(caption));
        }

        let heads = self.heads(table);
        if self.config.table_header && !heads.is_empty() {
            let mut columns = Vec::with_capacity(heads.len() + 1);
            if numbered {
                columns.push("No.".to_string());
            }
            columns.extend(heads);
            lines.push(columns.join(separator));
        }

        for (index, body) in self.bodies(table).into_iter().enumerate() {
            let mut columns = Vec::with_capacity(body.len() + 1);
            if numbered {
                columns.push((index + 1).to_string());
            }
            columns.extend(body);
            lines.push(columns.join(separator));
        }

        lines.join("\n")
    }

    fn heads(&self, table: &Table) -> Vec<String> {
        table.heads().iter().map(|cell| self.clean(cell)).collect()
    }

    fn bodies(&self, table: &Table) -> Vec<Vec<String>> {
        table
            .bodies()
            .iter()
            .map(|row| row.iter().map(|cell| self.clean(cell)).collect())
            .collect()
    }

    fn clean(&self, text: &str) -> String {
        if self.smart_quotes {
            straighten_quotes(text)
        } else {
            text.to_string()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::TableizeError;
    use tableize_ast::TableRow;

    fn fruit() -> Table {
        Table::new()
            .with_caption("Fruit")
            .with_row(TableRow::header(["Name", "Colour"]))
            .with_row(TableRow::body(["Apple", "Red"]))
            .with_row(TableRow::body(["Banana", "Yellow"]))
    }

    fn config(auto_index: i64, table_header: bool, separator: &str) -> TableizeConfig {
        TableizeConfig {
            auto_index,
            table_header,
            separator: separator.to_string(),
            ..TableizeConfig::default()
        }
    }

    #[test]
    fn test_default_template_renders() {
        let html = TableRenderer::new(TableizeConfig::default())
            .render_html(&fruit())
            .unwrap();

        assert!(html.starts_with("<div class=\"tableize\">"));
        assert!(html.contains("<caption> Fruit </caption>"));
        // Header row is off by default
        assert!(!html.contains("<thead"));
        assert!(html.contains("<td class=\"tableize\">1  </td>"));
        assert!(html.contains("<td class=\"tableize\">2  </td>"));
        assert!(html.contains("<td class=\"tableize\">Banana</td>"));
        assert_eq!(html.matches("<tr class=\"tableize\">").count(), 2);
    }

    #[test]
    fn test_header_and_no_index() {
        let html = TableRenderer::new(config(0, true, "|"))
            .render_html(&fruit())
            .unwrap();

        assert!(html.contains("<thead class=\"tableize\">"));
        assert!(html.contains("<th class=\"tableize\">Colour</th>"));
        assert!(!html.contains(" No. "));
        assert!(!html.contains("1  </td>"));
    }

    #[test]
    fn test_header_with_index() {
        let html = TableRenderer::new(config(1, true, "|"))
            .render_html(&fruit())
            .unwrap();
        assert!(html.contains("<th class=\"tableize\"> No. </th>"));
    }

    #[test]
    fn test_custom_template() {
        let renderer = TableRenderer::new(TableizeConfig {
            template: "{{ bodies | length }} rows split by {{ separator }}".to_string(),
            separator: ";".to_string(),
            ..TableizeConfig::default()
        });
        assert_eq!(renderer.render_html(&fruit()).unwrap(), "2 rows split by ;");
    }

    #[test]
    fn test_broken_template_is_an_error() {
        let renderer = TableRenderer::new(TableizeConfig {
            template: "{% for row in bodies %}{% endif %}".to_string(),
            ..TableizeConfig::default()
        });
        let err = renderer.render_html(&fruit()).unwrap_err();
        assert!(matches!(err, TableizeError::Template(_)));
    }

    #[test]
    fn test_text_rendition() {
        let renderer = TableRenderer::new(config(1, true, ","));
        assert_eq!(
            renderer.render_text(&fruit()),
            "Fruit\nNo.,Name,Colour\n1,Apple,Red\n2,Banana,Yellow"
        );
    }

    #[test]
    fn test_text_rendition_without_header_or_index() {
        let renderer = TableRenderer::new(config(0, false, "|"));
        let table = Table::new()
            .with_row(TableRow::header(["a", "b"]))
            .with_row(TableRow::body(["1", "2"]));
        assert_eq!(renderer.render_text(&table), "1|2");
    }

    #[test]
    fn test_smart_quotes_are_straightened() {
        let table = Table::new().with_row(TableRow::body(["&ldquo;a&rdquo;", "b"]));

        let plain = TableRenderer::new(config(0, false, "|"));
        assert_eq!(plain.render_text(&table), "&ldquo;a&rdquo;|b");

        let compensated = plain.with_smart_quotes(true);
        assert_eq!(compensated.render_text(&table), "\"a\"|b");
    }

    #[test]
    fn test_from_settings_reads_flat_keys() {
        let mut settings = HostSettings::new();
        settings.insert("TABLEIZE_AUTO_INDEX", 0);
        settings.insert("TABLEIZE_SEPARATOR", "/");

        let renderer = TableRenderer::from_settings(&settings);
        assert_eq!(renderer.config().separator, "/");
        assert_eq!(renderer.render_text(&fruit()), "Fruit\nApple/Red\nBanana/Yellow");
    }
}
