//! Core node types for the tree model

use std::fmt;

/// Depth of the synthetic root node. Its direct children sit at depth 0.
pub const ROOT_DEPTH: i32 = -1;

/// Unique identifier for a node within a tree
///
/// Ids are assigned by whoever builds the node list and are usually
/// increasing in insertion order, but nothing depends on that.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct NodeId(pub i32);

impl NodeId {
    /// Create a new NodeId from an i32
    pub const fn new(id: i32) -> Self {
        NodeId(id)
    }
}

impl fmt::Display for NodeId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "NodeId({})", self.0)
    }
}

impl From<i32> for NodeId {
    fn from(id: i32) -> Self {
        NodeId(id)
    }
}

/// A single entry of the tree
///
/// Generic over the payload type `T`, which carries the domain record shown
/// in the table row (texture settings, build profile, ...).
#[derive(Debug, Clone, PartialEq)]
pub struct Node<T> {
    /// Caller-assigned identifier
    pub id: NodeId,
    /// Parent identifier, `None` for the root
    pub parent: Option<NodeId>,
    /// Depth in the tree (root = -1)
    pub depth: i32,
    /// User-defined data associated with this node
    pub payload: T,
}

impl<T> Node<T> {
    /// Create the synthetic root node
    pub fn root(id: impl Into<NodeId>, payload: T) -> Self {
        Self {
            id: id.into(),
            parent: None,
            depth: ROOT_DEPTH,
            payload,
        }
    }

    /// Create a node below `parent` at the given depth
    pub fn child(id: impl Into<NodeId>, parent: impl Into<NodeId>, depth: i32, payload: T) -> Self {
        Self {
            id: id.into(),
            parent: Some(parent.into()),
            depth,
            payload,
        }
    }

    /// Returns true if this node has no parent
    pub fn is_root(&self) -> bool {
        self.parent.is_none()
    }
}

impl<T: fmt::Display> fmt::Display for Node<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} (depth {}) - {}", self.id, self.depth, self.payload)
    }
}
