//! Signal payloads
//!
//! Generators and content objects are owned by the host; plugins only ever
//! see borrowed views of them.

use std::collections::BTreeMap;
use std::path::PathBuf;

use serde::{Deserialize, Serialize};

use crate::signal::Signal;

/// Metadata block at the top of a source file
pub type Metadata = BTreeMap<String, String>;

/// Which generator fired a signal
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum GeneratorKind {
    Articles,
    Pages,
    Static,
}

/// A content generator
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Generator {
    pub kind: GeneratorKind,
    /// Source directory
    pub path: PathBuf,
    /// Output directory
    pub output_path: PathBuf,
}

/// Kind of content object
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ContentKind {
    Article,
    Page,
    Static,
}

/// A content object built from one source file
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Content {
    pub kind: ContentKind,
    pub title: String,
    pub source_path: PathBuf,
    /// Rendered markup
    pub body: String,
    #[serde(default)]
    pub metadata: Metadata,
}

impl Generator {
    /// Create an articles generator
    pub fn articles(path: impl Into<PathBuf>, output_path: impl Into<PathBuf>) -> Self {
        Self {
            kind: GeneratorKind::Articles,
            path: path.into(),
            output_path: output_path.into(),
        }
    }
}

impl Content {
    /// Create a content object with empty metadata
    pub fn new(
        kind: ContentKind,
        title: impl Into<String>,
        source_path: impl Into<PathBuf>,
        body: impl Into<String>,
    ) -> Self {
        Self {
            kind,
            title: title.into(),
            source_path: source_path.into(),
            body: body.into(),
            metadata: Metadata::new(),
        }
    }

    /// Articles and pages carry prose; static files do not
    pub fn is_document(&self) -> bool {
        matches!(self.kind, ContentKind::Article | ContentKind::Page)
    }
}

/// A content lifecycle signal with its payload
#[derive(Debug, Clone, Copy)]
pub enum Event<'a> {
    GeneratorInit(&'a Generator),
    GeneratorPreread(&'a Generator),
    GeneratorContext {
        generator: &'a Generator,
        metadata: &'a Metadata,
    },
    /// The host may fire this without a content object
    ContentObjectInit(Option<&'a Content>),
    GeneratorPretaxonomy(&'a Generator),
    GeneratorFinalized(&'a Generator),
    WriteArticle {
        generator: &'a Generator,
        content: &'a Content,
    },
}

impl Event<'_> {
    /// The signal this event is delivered on
    pub fn signal(&self) -> Signal {
        match self {
            Event::GeneratorInit(_) => Signal::ArticleGeneratorInit,
            Event::GeneratorPreread(_) => Signal::ArticleGeneratorPreread,
            Event::GeneratorContext { .. } => Signal::ArticleGeneratorContext,
            Event::ContentObjectInit(_) => Signal::ContentObjectInit,
            Event::GeneratorPretaxonomy(_) => Signal::ArticleGeneratorPretaxonomy,
            Event::GeneratorFinalized(_) => Signal::ArticleGeneratorFinalized,
            Event::WriteArticle { .. } => Signal::ArticleGeneratorWriteArticle,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_is_document() {
        let article = Content::new(ContentKind::Article, "a", "a.md", "");
        let page = Content::new(ContentKind::Page, "p", "p.md", "");
        let asset = Content::new(ContentKind::Static, "s", "s.png", "");

        assert!(article.is_document());
        assert!(page.is_document());
        assert!(!asset.is_document());
    }

    #[test]
    fn test_event_signal() {
        let generator = Generator::articles("content", "output");
        let metadata = Metadata::new();

        assert_eq!(
            Event::GeneratorInit(&generator).signal(),
            Signal::ArticleGeneratorInit
        );
        assert_eq!(
            Event::GeneratorContext {
                generator: &generator,
                metadata: &metadata,
            }
            .signal(),
            Signal::ArticleGeneratorContext
        );
        assert_eq!(
            Event::ContentObjectInit(None).signal(),
            Signal::ContentObjectInit
        );
    }
}
