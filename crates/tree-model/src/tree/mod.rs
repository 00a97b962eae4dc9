//! Core tree abstraction for id-keyed node lists
//!
//! This module provides the node record, the `Tree` navigation trait and the
//! `TreeStore` that rebuilds parent/child links from a flat list.

mod node;
mod store;
mod traits;

pub use node::{Node, NodeId, ROOT_DEPTH};
pub use store::{nodes_from_records, TreeStore};
pub use traits::Tree;

/// Re-export common types for convenience
pub mod prelude {
    pub use super::{nodes_from_records, Node, NodeId, Tree, TreeStore, ROOT_DEPTH};
}
