//! Tree Model Library
//!
//! An ordered tree of id-keyed nodes that is flattened into display rows,
//! with stable single-level column sorting driven by a multi-column header.
//!
//! # Core Concepts
//!
//! - **Node**: an entry with a caller-assigned id, a parent id, a depth and a payload
//! - **TreeStore**: owns the nodes and the parent/child links rebuilt from a flat list
//! - **flatten**: pre-order walk producing one row per node below the root
//! - **ColumnTable**: maps a column index to the sort key of a payload
//! - **HeaderState**: which columns are sorted and in which direction
//!
//! # Example
//!
//! ```
//! use tree_model::prelude::*;
//!
//! let nodes = nodes_from_records(String::new(), ["Bravo", "Alpha"].map(String::from));
//! let mut store = TreeStore::new(nodes).expect("valid tree");
//!
//! fn by_name(name: &String) -> SortKey<'_> {
//!     SortKey::Text(name)
//! }
//!
//! let columns = ColumnTable::new().with_column(by_name);
//! let mut header = HeaderState::new(vec![ColumnHeader::new("Name", 200, 100)]);
//! header.click(0);
//!
//! sort_if_needed(&mut store, &header, &columns, 2);
//! let names: Vec<_> = store.rows().map(|node| node.payload.as_str()).collect();
//! assert_eq!(names, ["Alpha", "Bravo"]);
//! ```

pub mod error;
pub mod flatten;
pub mod header;
pub mod sort;
pub mod tree;

pub use error::{InvalidTree, TreeError};
pub use flatten::{flatten, flatten_into, TreeWalker};
pub use header::{ColumnHeader, HeaderState};
pub use sort::{sort_if_needed, sort_nodes, ColumnTable, KeyFn, SortKey};
pub use tree::{nodes_from_records, Node, NodeId, Tree, TreeStore, ROOT_DEPTH};

/// Re-export commonly used types
pub mod prelude {
    pub use crate::error::{InvalidTree, TreeError};
    pub use crate::flatten::{flatten, flatten_into, TreeWalker};
    pub use crate::header::{ColumnHeader, HeaderState};
    pub use crate::sort::{sort_if_needed, sort_nodes, ColumnTable, KeyFn, SortKey};
    pub use crate::tree::prelude::*;
}
