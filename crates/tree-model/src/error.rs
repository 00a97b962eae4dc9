//! Error types for building and querying a tree

use derive_more::Display;

use crate::tree::NodeId;

/// The reason a node list could not be turned into a tree
#[derive(Debug, Clone, PartialEq, Eq, Display)]
pub enum InvalidTree {
    /// No node without a parent was supplied
    #[display(fmt = "no root node")]
    MissingRoot,

    /// More than one node without a parent was supplied
    #[display(fmt = "multiple root nodes ({} and {})", first, second)]
    MultipleRoots { first: NodeId, second: NodeId },

    /// The root node does not sit at depth -1
    #[display(fmt = "root {} has depth {}, expected -1", id, depth)]
    RootDepth { id: NodeId, depth: i32 },

    /// Two nodes share the same id
    #[display(fmt = "duplicate node id {}", _0)]
    DuplicateId(NodeId),

    /// A node names a parent that is not in the list
    #[display(fmt = "{} references missing parent {}", node, parent)]
    MissingParent { node: NodeId, parent: NodeId },

    /// A node's depth is not its parent's depth + 1
    #[display(
        fmt = "{} has depth {} but its parent is at depth {}",
        node,
        depth,
        parent_depth
    )]
    DepthMismatch {
        node: NodeId,
        depth: i32,
        parent_depth: i32,
    },
}

impl std::error::Error for InvalidTree {}

/// Errors produced by [`TreeStore`](crate::TreeStore)
#[derive(Debug, Clone, PartialEq, Eq, Display)]
pub enum TreeError {
    /// The node list violates a structural invariant
    #[display(fmt = "invalid tree: {}", _0)]
    InvalidTree(InvalidTree),

    /// No node has the requested id
    #[display(fmt = "{} not found", _0)]
    NotFound(NodeId),
}

impl std::error::Error for TreeError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            TreeError::InvalidTree(reason) => Some(reason),
            TreeError::NotFound(_) => None,
        }
    }
}

impl From<InvalidTree> for TreeError {
    fn from(reason: InvalidTree) -> Self {
        TreeError::InvalidTree(reason)
    }
}
