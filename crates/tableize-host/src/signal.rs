//! Lifecycle signals
//!
//! The host fires these in a fixed order during one generation run:
//! `initialized` once, then the article generator signals. A signal is never
//! re-entered while its handlers are running.

use std::fmt;

use serde::{Deserialize, Serialize};

/// A point in the host's generation lifecycle
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Signal {
    /// Host finished loading settings and plugins
    Initialized,
    /// Article generator constructed
    ArticleGeneratorInit,
    /// Before any article source is read
    ArticleGeneratorPreread,
    /// Metadata assembled for one article
    ArticleGeneratorContext,
    /// A content object (article, page, static file) was built
    ContentObjectInit,
    /// All articles read, before taxonomy and translation linking
    ArticleGeneratorPretaxonomy,
    /// Generator context is complete
    ArticleGeneratorFinalized,
    /// One article is about to be written
    ArticleGeneratorWriteArticle,
}

impl Signal {
    /// Every signal, in firing order
    pub const ALL: [Signal; 8] = [
        Signal::Initialized,
        Signal::ArticleGeneratorInit,
        Signal::ArticleGeneratorPreread,
        Signal::ArticleGeneratorContext,
        Signal::ContentObjectInit,
        Signal::ArticleGeneratorPretaxonomy,
        Signal::ArticleGeneratorFinalized,
        Signal::ArticleGeneratorWriteArticle,
    ];

    /// The content lifecycle signals, everything after `initialized`
    pub const CONTENT_LIFECYCLE: [Signal; 7] = [
        Signal::ArticleGeneratorInit,
        Signal::ArticleGeneratorPreread,
        Signal::ArticleGeneratorContext,
        Signal::ContentObjectInit,
        Signal::ArticleGeneratorPretaxonomy,
        Signal::ArticleGeneratorFinalized,
        Signal::ArticleGeneratorWriteArticle,
    ];

    /// Stable snake_case name
    pub fn name(self) -> &'static str {
        match self {
            Signal::Initialized => "initialized",
            Signal::ArticleGeneratorInit => "article_generator_init",
            Signal::ArticleGeneratorPreread => "article_generator_preread",
            Signal::ArticleGeneratorContext => "article_generator_context",
            Signal::ContentObjectInit => "content_object_init",
            Signal::ArticleGeneratorPretaxonomy => "article_generator_pretaxonomy",
            Signal::ArticleGeneratorFinalized => "article_generator_finalized",
            Signal::ArticleGeneratorWriteArticle => "article_generator_write_article",
        }
    }
}

impl fmt::Display for Signal {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_firing_order() {
        let mut sorted = Signal::ALL;
        sorted.sort();
        assert_eq!(sorted, Signal::ALL);
        assert_eq!(&Signal::ALL[1..], &Signal::CONTENT_LIFECYCLE[..]);
    }

    #[test]
    fn test_names_match_serde() {
        for signal in Signal::ALL {
            let json = serde_json::to_string(&signal).unwrap();
            assert_eq!(json, format!("\"{}\"", signal.name()));
        }
    }
}
