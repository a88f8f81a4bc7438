//! tableize-ast - Table model definitions
//!
//! This crate provides the table types the host markup layer hands to the
//! tableize renderer once it has located a `<table>` in generated content.

pub mod table;

pub use table::{Table, TableRow};

/// Crate version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
