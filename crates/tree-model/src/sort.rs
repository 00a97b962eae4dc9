//! Column-driven stable sorting of sibling rows

use log::trace;
use std::fmt;

use crate::header::HeaderState;
use crate::tree::{Node, Tree, TreeStore};

/// A comparable value extracted from a payload for one column
///
/// A column always produces the same variant, so comparisons only ever
/// happen within one variant. Text compares lexicographically and
/// `false < true`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum SortKey<'a> {
    /// Boolean flag
    Bool(bool),
    /// Integer value (sizes, counts, enum ordinals)
    Int(i64),
    /// Text value
    Text(&'a str),
}

/// Extracts the sort key of one column from a payload
pub type KeyFn<T> = for<'a> fn(&'a T) -> SortKey<'a>;

/// Maps column indices to sort keys
///
/// Columns without a key (action buttons, columns added to the header
/// before the payload supports them) are left unsorted: asking to sort by
/// them leaves the rows in their current order.
pub struct ColumnTable<T> {
    keys: Vec<Option<KeyFn<T>>>,
}

impl<T> ColumnTable<T> {
    /// Create an empty table
    pub fn new() -> Self {
        Self { keys: Vec::new() }
    }

    /// Append a sortable column
    pub fn with_column(mut self, key: KeyFn<T>) -> Self {
        self.keys.push(Some(key));
        self
    }

    /// Append a column that cannot be sorted
    pub fn with_unsorted_column(mut self) -> Self {
        self.keys.push(None);
        self
    }

    /// Replace the key of a column, growing the table if needed
    pub fn set_key(&mut self, column: usize, key: Option<KeyFn<T>>) {
        if column >= self.keys.len() {
            self.keys.resize(column + 1, None);
        }
        self.keys[column] = key;
    }

    /// The key of a column, if it has one
    pub fn key(&self, column: usize) -> Option<KeyFn<T>> {
        self.keys.get(column).copied().flatten()
    }

    /// Number of columns in the table
    pub fn len(&self) -> usize {
        self.keys.len()
    }

    /// Returns true if the table has no columns
    pub fn is_empty(&self) -> bool {
        self.keys.is_empty()
    }
}

impl<T> Default for ColumnTable<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T> Clone for ColumnTable<T> {
    fn clone(&self) -> Self {
        Self {
            keys: self.keys.clone(),
        }
    }
}

impl<T> fmt::Debug for ColumnTable<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let sortable: Vec<bool> = self.keys.iter().map(Option::is_some).collect();
        f.debug_struct("ColumnTable")
            .field("sortable", &sortable)
            .finish()
    }
}

/// Order nodes by one column of the table
///
/// The sort is stable in both directions: nodes with equal keys keep their
/// relative input order whether sorting ascending or descending. A column
/// without a key returns the nodes unchanged.
pub fn sort_nodes<'n, T: 'n>(
    nodes: impl IntoIterator<Item = &'n Node<T>>,
    columns: &ColumnTable<T>,
    column: usize,
    ascending: bool,
) -> Vec<&'n Node<T>> {
    let mut sorted: Vec<&Node<T>> = nodes.into_iter().collect();

    let Some(key) = columns.key(column) else {
        trace!("Column {} has no sort key, keeping order", column);
        return sorted;
    };

    sorted.sort_by(|a, b| {
        let ordering = key(&a.payload).cmp(&key(&b.payload));
        if ascending {
            ordering
        } else {
            ordering.reverse()
        }
    });
    sorted
}

/// Sort the root's direct children by the header's primary sort column
///
/// `row_count` is the number of rows currently displayed. Nothing happens
/// when there are fewer than two rows or when the header has no sorted
/// column; deeper levels are never reordered. Returns true if the order of
/// the root's children changed, in which case the rows must be flattened
/// again.
pub fn sort_if_needed<T>(
    store: &mut TreeStore<T>,
    header: &HeaderState,
    columns: &ColumnTable<T>,
    row_count: usize,
) -> bool {
    if row_count <= 1 {
        return false;
    }

    // No sorted column: keep the order the data came in
    let Some(column) = header.sorted_column_index() else {
        return false;
    };

    let ascending = header.is_sorted_ascending(column);
    let root = store.root();
    store.sort_children(root, columns, column, ascending)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::header::ColumnHeader;
    use crate::tree::{nodes_from_records, NodeId};
    use pretty_assertions::assert_eq;

    #[derive(Debug, Clone, Default, PartialEq)]
    struct Row {
        name: &'static str,
        size: i64,
        enabled: bool,
    }

    fn row(name: &'static str, size: i64, enabled: bool) -> Row {
        Row {
            name,
            size,
            enabled,
        }
    }

    fn columns() -> ColumnTable<Row> {
        ColumnTable::new()
            .with_column(|r: &Row| SortKey::Text(r.name))
            .with_column(|r: &Row| SortKey::Int(r.size))
            .with_column(|r: &Row| SortKey::Bool(r.enabled))
            .with_unsorted_column()
    }

    fn nodes() -> Vec<Node<Row>> {
        nodes_from_records(
            Row::default(),
            [
                row("delta", 2, true),
                row("alpha", 1, false),
                row("charlie", 2, false),
                row("bravo", 1, true),
            ],
        )
    }

    fn names<'a>(sorted: &[&'a Node<Row>]) -> Vec<&'static str> {
        sorted.iter().map(|n| n.payload.name).collect()
    }

    fn header(columns: usize) -> HeaderState {
        HeaderState::new(
            (0..columns)
                .map(|i| ColumnHeader::new(format!("Column {}", i), 100, 50))
                .collect(),
        )
    }

    #[test]
    fn test_sort_text() {
        let nodes = nodes();
        let children = &nodes[1..];

        let sorted = sort_nodes(children, &columns(), 0, true);
        assert_eq!(names(&sorted), vec!["alpha", "bravo", "charlie", "delta"]);

        let sorted = sort_nodes(children, &columns(), 0, false);
        assert_eq!(names(&sorted), vec!["delta", "charlie", "bravo", "alpha"]);
    }

    #[test]
    fn test_sort_is_stable_in_both_directions() {
        let nodes = nodes();
        let children = &nodes[1..];

        let sorted = sort_nodes(children, &columns(), 1, true);
        assert_eq!(names(&sorted), vec!["alpha", "bravo", "delta", "charlie"]);

        let sorted = sort_nodes(children, &columns(), 1, false);
        assert_eq!(names(&sorted), vec!["delta", "charlie", "alpha", "bravo"]);
    }

    #[test]
    fn test_sort_bool() {
        let nodes = nodes();
        let children = &nodes[1..];

        let sorted = sort_nodes(children, &columns(), 2, true);
        assert_eq!(names(&sorted), vec!["alpha", "charlie", "delta", "bravo"]);

        let sorted = sort_nodes(children, &columns(), 2, false);
        assert_eq!(names(&sorted), vec!["delta", "bravo", "alpha", "charlie"]);
    }

    #[test]
    fn test_sort_without_key_keeps_order() {
        let nodes = nodes();
        let children = &nodes[1..];

        for column in [3, 4, 100] {
            let sorted = sort_nodes(children, &columns(), column, true);
            assert_eq!(names(&sorted), vec!["delta", "alpha", "charlie", "bravo"]);
        }
    }

    #[test]
    fn test_column_table() {
        let mut table = columns();
        assert_eq!(table.len(), 4);
        assert!(table.key(3).is_none());

        let by_size: KeyFn<Row> = |r| SortKey::Int(r.size);
        table.set_key(6, Some(by_size));
        assert_eq!(table.len(), 7);
        assert!(table.key(5).is_none());
        assert!(table.key(6).is_some());

        table.set_key(0, None);
        assert!(table.key(0).is_none());
        assert_eq!(
            format!("{:?}", table),
            "ColumnTable { sortable: [false, true, true, false, false, false, true] }"
        );
    }

    #[test]
    fn test_sort_if_needed_without_sorted_column() {
        let mut store = TreeStore::new(nodes()).unwrap();
        let header = header(4);

        assert!(!sort_if_needed(&mut store, &header, &columns(), 4));
        assert_eq!(store.flatten(), vec![NodeId(1), NodeId(2), NodeId(3), NodeId(4)]);
    }

    #[test]
    fn test_sort_if_needed_with_empty_sorted_columns() {
        let mut store = TreeStore::new(nodes()).unwrap();
        let mut header = header(4);
        header.set_sorting(0, true);
        header.set_sorted_columns(Vec::new());

        assert!(!sort_if_needed(&mut store, &header, &columns(), 4));
        assert_eq!(store.flatten(), vec![NodeId(1), NodeId(2), NodeId(3), NodeId(4)]);
    }

    #[test]
    fn test_sort_if_needed_single_row() {
        let mut store = TreeStore::new(nodes()).unwrap();
        let mut header = header(4);
        header.set_sorting(0, true);

        assert!(!sort_if_needed(&mut store, &header, &columns(), 1));
        assert!(!sort_if_needed(&mut store, &header, &columns(), 0));
        assert_eq!(store.flatten(), vec![NodeId(1), NodeId(2), NodeId(3), NodeId(4)]);
    }

    #[test]
    fn test_sort_if_needed_uses_header_direction() {
        let mut store = TreeStore::new(nodes()).unwrap();
        let mut header = header(4);
        header.set_sorting(0, false);

        assert!(sort_if_needed(&mut store, &header, &columns(), 4));
        let sorted: Vec<_> = store.rows().map(|n| n.payload.name).collect();
        assert_eq!(sorted, vec!["delta", "charlie", "bravo", "alpha"]);
    }

    #[test]
    fn test_sort_if_needed_leaves_deeper_levels() {
        let mut store = TreeStore::new(vec![
            Node::root(0, Row::default()),
            Node::child(1, 0, 0, row("b", 0, false)),
            Node::child(2, 1, 1, row("z", 0, false)),
            Node::child(3, 1, 1, row("y", 0, false)),
            Node::child(4, 0, 0, row("a", 0, false)),
        ])
        .unwrap();
        let mut header = header(4);
        header.set_sorting(0, true);

        assert!(sort_if_needed(&mut store, &header, &columns(), 4));
        let sorted: Vec<_> = store.rows().map(|n| n.payload.name).collect();
        assert_eq!(sorted, vec!["a", "b", "z", "y"]);
    }
}
