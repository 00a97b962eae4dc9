//! Row payloads shown by a table view

use tree_model::{ColumnHeader, ColumnTable};

/// A payload that can be shown as one row of an inspection table
pub trait TableRecord: Sized {
    /// Column with an action button, if the table has one
    const ACTION_COLUMN: Option<usize> = None;

    /// Header columns used when no configuration is given
    fn default_headers() -> Vec<ColumnHeader>;

    /// Sort key for each column
    fn column_table() -> ColumnTable<Self>;

    /// Text shown in a cell, `None` for columns the record does not have
    fn cell_text(&self, column: usize) -> Option<String>;

    /// Short name used in log messages
    fn label(&self) -> &str;
}
