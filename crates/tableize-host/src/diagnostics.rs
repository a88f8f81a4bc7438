//! Plugin diagnostics
//!
//! Plugins never fail the host run. Problems they find while reading
//! settings are reported as diagnostics: logged through `tracing` as they
//! happen and handed back to the caller so they can be inspected.

use std::fmt;

/// How bad a reported problem is
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Severity {
    /// Something was ignored or taken as written; the run carries on
    Warning,
    /// Part of the configuration cannot be honoured
    Error,
    /// The plugin disabled itself for this run
    Fatal,
}

impl Severity {
    pub fn label(self) -> &'static str {
        match self {
            Severity::Warning => "warning",
            Severity::Error => "error",
            Severity::Fatal => "fatal",
        }
    }
}

impl fmt::Display for Severity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// One reported problem
///
/// # Example
///
/// ```
/// use tableize_host::diagnostics::{Diagnostic, Severity};
///
/// let diag = Diagnostic::warning("Tableize plugin -> \"th\" must be a boolean.")
///     .with_code("TBL001")
///     .with_help("Use true or false");
/// assert_eq!(diag.severity, Severity::Warning);
/// assert!(diag.to_string().starts_with("warning[TBL001]: "));
/// ```
#[derive(Debug, Clone, PartialEq)]
pub struct Diagnostic {
    pub severity: Severity,
    pub message: String,
    /// Stable code such as `TBL001`
    pub code: Option<String>,
    pub help: Option<String>,
    pub notes: Vec<String>,
}

impl Diagnostic {
    pub fn new(severity: Severity, message: impl Into<String>) -> Self {
        Self {
            severity,
            message: message.into(),
            code: None,
            help: None,
            notes: Vec::new(),
        }
    }

    pub fn fatal(message: impl Into<String>) -> Self {
        Self::new(Severity::Fatal, message)
    }

    pub fn error(message: impl Into<String>) -> Self {
        Self::new(Severity::Error, message)
    }

    pub fn warning(message: impl Into<String>) -> Self {
        Self::new(Severity::Warning, message)
    }

    pub fn with_code(mut self, code: impl Into<String>) -> Self {
        self.code = Some(code.into());
        self
    }

    pub fn with_help(mut self, help: impl Into<String>) -> Self {
        self.help = Some(help.into());
        self
    }

    pub fn with_note(mut self, note: impl Into<String>) -> Self {
        self.notes.push(note.into());
        self
    }

    /// Error or fatal
    pub fn is_error(&self) -> bool {
        self.severity >= Severity::Error
    }

    pub fn is_warning(&self) -> bool {
        self.severity == Severity::Warning
    }

    /// Emit through `tracing` at the matching level
    pub fn log(&self) {
        if self.is_error() {
            tracing::error!("{}", self);
        } else {
            tracing::warn!("{}", self);
        }
    }
}

impl fmt::Display for Diagnostic {
    /// `severity[code]: message`, then one indented line per help or note
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match &self.code {
            Some(code) => write!(f, "{}[{}]: {}", self.severity, code, self.message)?,
            None => write!(f, "{}: {}", self.severity, self.message)?,
        }
        let help = self.help.iter().map(|text| ("help", text));
        let notes = self.notes.iter().map(|text| ("note", text));
        for (label, text) in help.chain(notes) {
            write!(f, "\n  = {label}: {text}")?;
        }
        Ok(())
    }
}

/// Diagnostics collected over one plugin run
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Diagnostics {
    items: Vec<Diagnostic>,
}

impl Diagnostics {
    pub fn new() -> Self {
        Self::default()
    }

    /// Keep a diagnostic without logging it
    pub fn push(&mut self, diagnostic: Diagnostic) {
        self.items.push(diagnostic);
    }

    /// Log a diagnostic and keep it
    pub fn report(&mut self, diagnostic: Diagnostic) {
        diagnostic.log();
        self.push(diagnostic);
    }

    pub fn has_errors(&self) -> bool {
        self.items.iter().any(Diagnostic::is_error)
    }

    pub fn warning_count(&self) -> usize {
        self.items.iter().filter(|d| d.is_warning()).count()
    }

    pub fn iter(&self) -> impl Iterator<Item = &Diagnostic> {
        self.items.iter()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }
}

impl Extend<Diagnostic> for Diagnostics {
    fn extend<I: IntoIterator<Item = Diagnostic>>(&mut self, iter: I) {
        self.items.extend(iter);
    }
}

impl IntoIterator for Diagnostics {
    type Item = Diagnostic;
    type IntoIter = std::vec::IntoIter<Diagnostic>;

    fn into_iter(self) -> Self::IntoIter {
        self.items.into_iter()
    }
}
