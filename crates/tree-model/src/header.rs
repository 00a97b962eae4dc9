//! Multi-column header model: column descriptors and sort state

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// How many columns the header remembers as sorted
pub const MAX_SORTED_COLUMNS: usize = 3;

/// Describes one column of a table header
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct ColumnHeader {
    /// Text shown in the header cell
    pub title: String,

    /// Preferred width in pixels
    pub width: u32,

    /// Minimum width in pixels
    #[cfg_attr(feature = "serde", serde(default))]
    pub min_width: u32,

    /// Whether clicking the header sorts by this column
    #[cfg_attr(feature = "serde", serde(default = "default_can_sort"))]
    pub can_sort: bool,
}

#[cfg(feature = "serde")]
fn default_can_sort() -> bool {
    true
}

impl ColumnHeader {
    /// Create a sortable column
    pub fn new(title: impl Into<String>, width: u32, min_width: u32) -> Self {
        Self {
            title: title.into(),
            width,
            min_width,
            can_sort: true,
        }
    }

    /// Mark the column as not sortable
    pub fn unsortable(mut self) -> Self {
        self.can_sort = false;
        self
    }
}

/// Sort state of a multi-column header
///
/// Keeps the columns that have been sorted, most recent first, and the
/// direction each column was last sorted in. The first sorted column is
/// the one rows are ordered by.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HeaderState {
    columns: Vec<ColumnHeader>,
    sorted_columns: Vec<usize>,
    ascending: Vec<bool>,
}

impl HeaderState {
    /// Create a header with no sorted column
    pub fn new(columns: Vec<ColumnHeader>) -> Self {
        let ascending = vec![true; columns.len()];
        Self {
            columns,
            sorted_columns: Vec::new(),
            ascending,
        }
    }

    /// Column descriptors in display order
    pub fn columns(&self) -> &[ColumnHeader] {
        &self.columns
    }

    /// Number of columns
    pub fn column_count(&self) -> usize {
        self.columns.len()
    }

    /// The primary sort column, if any
    pub fn sorted_column_index(&self) -> Option<usize> {
        self.sorted_columns.first().copied()
    }

    /// Sorted columns, most recent first
    pub fn sorted_columns(&self) -> &[usize] {
        &self.sorted_columns
    }

    /// Replace the sorted columns, dropping indices without a column
    pub fn set_sorted_columns(&mut self, columns: Vec<usize>) {
        self.sorted_columns = columns
            .into_iter()
            .filter(|&c| c < self.columns.len())
            .take(MAX_SORTED_COLUMNS)
            .collect();
    }

    /// Direction the column sorts in; unknown columns report ascending
    pub fn is_sorted_ascending(&self, column: usize) -> bool {
        self.ascending.get(column).copied().unwrap_or(true)
    }

    /// Make `column` the primary sort column in the given direction
    ///
    /// Returns false if the column does not exist.
    pub fn set_sorting(&mut self, column: usize, ascending: bool) -> bool {
        if column >= self.columns.len() {
            return false;
        }
        self.ascending[column] = ascending;
        self.promote(column);
        true
    }

    /// Handle a click on a column header
    ///
    /// Clicking the primary sort column flips its direction. Clicking any
    /// other sortable column makes it primary in the direction it was last
    /// sorted in. Returns false if nothing changed (unknown or unsortable
    /// column).
    pub fn click(&mut self, column: usize) -> bool {
        match self.columns.get(column) {
            Some(header) if header.can_sort => {}
            _ => return false,
        }

        if self.sorted_column_index() == Some(column) {
            self.ascending[column] = !self.ascending[column];
        } else {
            self.promote(column);
        }
        true
    }

    fn promote(&mut self, column: usize) {
        self.sorted_columns.retain(|&c| c != column);
        self.sorted_columns.insert(0, column);
        self.sorted_columns.truncate(MAX_SORTED_COLUMNS);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn header() -> HeaderState {
        HeaderState::new(vec![
            ColumnHeader::new("Name", 200, 150),
            ColumnHeader::new("Platform", 100, 80),
            ColumnHeader::new("Scenes", 80, 60),
            ColumnHeader::new("Action", 90, 90).unsortable(),
            ColumnHeader::new("Extra", 90, 90),
        ])
    }

    #[test]
    fn test_new_header_is_unsorted() {
        let header = header();
        assert_eq!(header.column_count(), 5);
        assert_eq!(header.sorted_column_index(), None);
        assert!(header.sorted_columns().is_empty());
        assert!(header.is_sorted_ascending(0));
        assert!(header.is_sorted_ascending(42));
    }

    #[test]
    fn test_click_toggles_primary_column() {
        let mut header = header();

        assert!(header.click(1));
        assert_eq!(header.sorted_column_index(), Some(1));
        assert!(header.is_sorted_ascending(1));

        assert!(header.click(1));
        assert_eq!(header.sorted_column_index(), Some(1));
        assert!(!header.is_sorted_ascending(1));
    }

    #[test]
    fn test_click_other_column_keeps_its_direction() {
        let mut header = header();
        header.click(0);
        header.click(0);
        header.click(2);

        assert_eq!(header.sorted_columns(), &[2, 0]);
        assert!(header.is_sorted_ascending(2));

        header.click(0);
        assert_eq!(header.sorted_columns(), &[0, 2]);
        assert!(!header.is_sorted_ascending(0));
    }

    #[test]
    fn test_click_ignores_unsortable_columns() {
        let mut header = header();
        header.click(0);

        assert!(!header.click(3));
        assert!(!header.click(10));
        assert_eq!(header.sorted_columns(), &[0]);
    }

    #[test]
    fn test_sorted_columns_are_capped() {
        let mut header = header();
        for column in [0, 1, 2, 4] {
            header.click(column);
        }
        assert_eq!(header.sorted_columns(), &[4, 2, 1]);

        header.set_sorted_columns(vec![9, 1, 0, 2, 4]);
        assert_eq!(header.sorted_columns(), &[1, 0, 2]);
    }

    #[test]
    fn test_set_sorting() {
        let mut header = header();

        assert!(header.set_sorting(3, false));
        assert_eq!(header.sorted_column_index(), Some(3));
        assert!(!header.is_sorted_ascending(3));

        assert!(!header.set_sorting(5, true));
        assert_eq!(header.sorted_column_index(), Some(3));
    }
}
