//! Table elements
//!
//! A [`Table`] is an ordered list of rows. Header rows are flagged rather
//! than stored separately so the source order survives; the renderer splits
//! them into `heads` and `bodies` when it builds the template context.

use serde::{Deserialize, Serialize};

/// A table
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct Table {
    /// Table rows, in source order
    pub rows: Vec<TableRow>,
    /// Table caption
    pub caption: Option<String>,
}

/// A table row
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct TableRow {
    /// Inner markup of each cell, already rendered by the markup layer
    pub cells: Vec<String>,
    /// Whether this is a header row
    pub is_header: bool,
}

impl Table {
    /// Create an empty table
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the caption
    pub fn with_caption(mut self, caption: impl Into<String>) -> Self {
        self.caption = Some(caption.into());
        self
    }

    /// Append a row
    pub fn with_row(mut self, row: TableRow) -> Self {
        self.rows.push(row);
        self
    }

    /// The first header row, if any
    pub fn header_row(&self) -> Option<&TableRow> {
        self.rows.iter().find(|row| row.is_header)
    }

    /// Cell contents of the first header row
    pub fn heads(&self) -> Vec<String> {
        self.header_row()
            .map(|row| row.cells.clone())
            .unwrap_or_default()
    }

    /// Cell contents of every body row
    pub fn bodies(&self) -> Vec<Vec<String>> {
        self.rows
            .iter()
            .filter(|row| !row.is_header)
            .map(|row| row.cells.clone())
            .collect()
    }
}

impl TableRow {
    fn from_cells<I, S>(cells: I, is_header: bool) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            cells: cells.into_iter().map(Into::into).collect(),
            is_header,
        }
    }

    /// Create a header row from cell contents
    pub fn header<I, S>(cells: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self::from_cells(cells, true)
    }

    /// Create a body row from cell contents
    pub fn body<I, S>(cells: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self::from_cells(cells, false)
    }
}
