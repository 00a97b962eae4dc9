use anyhow::{Context, Result};
use log::{debug, warn};
use serde::{Deserialize, Serialize};
use std::path::Path;
use tree_model::{ColumnHeader, HeaderState};

use crate::record::TableRecord;

/// Column the table is sorted by when it is first shown
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct InitialSort {
    pub column: usize,
    #[serde(default = "default_ascending")]
    pub ascending: bool,
}

fn default_ascending() -> bool {
    true
}

/// Header layout of a table
///
/// ```json
/// {
///   "columns": [
///     { "title": "Profile Name", "width": 200, "min_width": 150 },
///     { "title": "Build & Run", "width": 100, "can_sort": false }
///   ],
///   "sort": { "column": 0, "ascending": false }
/// }
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TableConfig {
    /// Header columns in display order
    pub columns: Vec<ColumnHeader>,
    /// Initial sort, none keeps the input order
    #[serde(default)]
    pub sort: Option<InitialSort>,
}

impl TableConfig {
    /// Built-in configuration for a record type, unsorted
    pub fn for_record<R: TableRecord>() -> Self {
        Self {
            columns: R::default_headers(),
            sort: None,
        }
    }

    /// Parse a configuration from JSON text
    pub fn from_json(json: &str) -> Result<Self> {
        serde_json::from_str(json).context("Failed to parse table configuration")
    }

    /// Load a configuration file
    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();
        debug!("Loading table configuration from {}", path.display());

        let json = std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read table configuration {}", path.display()))?;
        Self::from_json(&json)
            .with_context(|| format!("Invalid table configuration {}", path.display()))
    }

    /// Header state with the initial sort applied
    pub fn header_state(&self) -> HeaderState {
        let mut header = HeaderState::new(self.columns.clone());
        if let Some(sort) = self.sort {
            if !header.set_sorting(sort.column, sort.ascending) {
                warn!(
                    "Initial sort column {} is out of range ({} columns), ignoring",
                    sort.column,
                    self.columns.len()
                );
            }
        }
        header
    }
}
