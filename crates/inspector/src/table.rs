//! Table controller tying a tree store to a sortable header
//!
//! The view owns the current store, the header state and the flattened
//! rows. Every change that can affect the order (new data, header click,
//! remapped column) re-sorts the root's children and flattens again, so
//! `rows()` always reflects what should be drawn.

use log::{debug, error, info, warn};
use tree_model::{
    flatten_into, nodes_from_records, sort_if_needed, ColumnTable, HeaderState, KeyFn, Node,
    NodeId, Tree, TreeError, TreeStore,
};

use crate::record::TableRecord;

/// A sortable, single-level table over a tree of records
pub struct TableView<R> {
    /// Current data
    store: TreeStore<R>,
    /// Columns and sort state
    header: HeaderState,
    /// Sort key per column
    columns: ColumnTable<R>,
    /// Flattened row ids in display order
    rows: Vec<NodeId>,
}

impl<R: TableRecord> TableView<R> {
    /// Create a view using the record type's column table
    pub fn new(store: TreeStore<R>, header: HeaderState) -> Self {
        Self::with_columns(store, header, R::column_table())
    }

    /// Create a view with a custom column table
    pub fn with_columns(store: TreeStore<R>, header: HeaderState, columns: ColumnTable<R>) -> Self {
        let mut view = Self {
            store,
            header,
            columns,
            rows: Vec::new(),
        };
        view.reload();
        view
    }

    /// Build a view over records hung directly below a default root
    pub fn from_records(
        records: impl IntoIterator<Item = R>,
        header: HeaderState,
    ) -> Result<Self, TreeError>
    where
        R: Default,
    {
        let store = TreeStore::new(nodes_from_records(R::default(), records))?;
        Ok(Self::new(store, header))
    }

    /// Rebuild the rows from the store, sorting if the header asks for it
    pub fn reload(&mut self) {
        let root = self.store.root();
        flatten_into(&self.store, root, &mut self.rows);
        self.sort_rows();
    }

    fn sort_rows(&mut self) {
        if sort_if_needed(&mut self.store, &self.header, &self.columns, self.rows.len()) {
            let root = self.store.root();
            flatten_into(&self.store, root, &mut self.rows);
        }
    }

    /// Replace the data with a freshly built node list
    ///
    /// The new store is only installed if the list forms a valid tree;
    /// otherwise the previous rows stay in place and the error is returned.
    pub fn refresh(&mut self, nodes: Vec<Node<R>>) -> Result<(), TreeError> {
        let store = TreeStore::new(nodes).map_err(|err| {
            warn!("Refresh rejected, keeping previous rows: {}", err);
            err
        })?;

        self.store = store;
        self.reload();
        info!("Refreshed table with {} rows", self.rows.len());
        Ok(())
    }

    /// Replace the data with records hung directly below a default root
    pub fn refresh_records(&mut self, records: impl IntoIterator<Item = R>) -> Result<(), TreeError>
    where
        R: Default,
    {
        self.refresh(nodes_from_records(R::default(), records))
    }

    /// Handle a click on a column header
    ///
    /// Returns false if the column cannot be sorted.
    pub fn click_header(&mut self, column: usize) -> bool {
        if !self.header.click(column) {
            debug!("Ignoring click on column {}", column);
            return false;
        }
        self.sorting_changed();
        true
    }

    /// Sort by a column in the given direction
    pub fn set_sorting(&mut self, column: usize, ascending: bool) -> bool {
        if !self.header.set_sorting(column, ascending) {
            return false;
        }
        self.sorting_changed();
        true
    }

    /// Re-apply the header's sort to the rows
    pub fn sorting_changed(&mut self) {
        debug!(
            "Sorting changed: column {:?}, ascending {}",
            self.header.sorted_column_index(),
            self.header
                .sorted_column_index()
                .map_or(true, |c| self.header.is_sorted_ascending(c))
        );
        self.sort_rows();
    }

    /// Change the sort key of a column and re-sort
    pub fn set_column_key(&mut self, column: usize, key: Option<KeyFn<R>>) {
        self.columns.set_key(column, key);
        self.sort_rows();
    }

    /// Current header state
    pub fn header(&self) -> &HeaderState {
        &self.header
    }

    /// Current data
    pub fn store(&self) -> &TreeStore<R> {
        &self.store
    }

    /// Row ids in display order
    pub fn row_ids(&self) -> &[NodeId] {
        &self.rows
    }

    /// Rows in display order
    pub fn rows(&self) -> impl Iterator<Item = &Node<R>> + '_ {
        self.rows.iter().filter_map(move |&id| self.store.get(id))
    }

    /// Number of rows
    pub fn row_count(&self) -> usize {
        self.rows.len()
    }

    /// Text of one cell, by row position and column
    pub fn cell(&self, row: usize, column: usize) -> Option<String> {
        let id = *self.rows.get(row)?;
        self.store.get(id)?.payload.cell_text(column)
    }

    /// Resolve a selection to the record of its first row
    ///
    /// An empty selection yields `None`. A selection naming a row that is
    /// not in the table is logged as an error and also yields `None`, so
    /// the caller leaves its detail pane as it is.
    pub fn selection_changed(&self, selected: &[NodeId]) -> Option<&R> {
        let Some(&first) = selected.first() else {
            debug!("Selection cleared");
            return None;
        };

        match self.store.find(first) {
            Ok(node) if node.is_root() => None,
            Ok(node) => {
                debug!("Selected {}", node.payload.label());
                Some(&node.payload)
            }
            Err(err) => {
                error!("Selection does not match the table: {}", err);
                None
            }
        }
    }

    /// Resolve a click on a cell to the record whose action should run
    ///
    /// Only the record type's action column triggers anything; running the
    /// action is left to the caller.
    pub fn activate(&self, id: NodeId, column: usize) -> Option<&R> {
        if R::ACTION_COLUMN != Some(column) {
            return None;
        }

        let record = self.selection_changed(&[id])?;
        info!("Action requested for {}", record.label());
        Some(record)
    }
}
