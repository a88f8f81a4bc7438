//! Error types for tableize rendering

use thiserror::Error;

/// Errors that can occur while rendering a table
#[derive(Debug, Error)]
pub enum TableizeError {
    /// Template failed to parse or render
    #[error("Template error: {0}")]
    Template(#[from] minijinja::Error),

    /// Renderer requested before settings were resolved
    #[error("Tableize plugin is not initialized")]
    NotInitialized,
}

/// Result type for tableize operations
pub type Result<T> = std::result::Result<T, TableizeError>;
