//! Core tree trait for id-keyed hierarchies

use crate::tree::{Node, NodeId};

/// A hierarchical structure navigable by node id
///
/// Implementations provide the basic lookups. The walker in
/// [`flatten`](crate::flatten) works against this trait, so any store that
/// can answer these questions can be flattened into rows.
///
/// # Type Parameters
///
/// * `Payload` - Domain data stored at each node
pub trait Tree {
    /// Domain data stored at each node
    type Payload;

    /// Get the root node ID (always exists)
    fn root(&self) -> NodeId;

    /// Get a node by its ID
    ///
    /// Returns `None` if the ID is unknown.
    fn get(&self, id: NodeId) -> Option<&Node<Self::Payload>>;

    /// Children of a node in their current order
    ///
    /// Returns an empty slice for leaves or unknown IDs.
    fn children(&self, id: NodeId) -> &[NodeId];

    /// Count total nodes in the tree, root included
    fn node_count(&self) -> usize;

    /// Get the parent of a node
    ///
    /// Returns `None` for the root node or unknown IDs.
    fn parent(&self, id: NodeId) -> Option<NodeId> {
        self.get(id)?.parent
    }
}
