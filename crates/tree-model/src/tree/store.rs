//! Tree storage rebuilt from a flat, parent-linked node list

use log::{debug, trace};
use std::collections::HashMap;

use crate::error::{InvalidTree, TreeError};
use crate::flatten::flatten;
use crate::sort::{sort_nodes, ColumnTable};
use crate::tree::{Node, NodeId, Tree, ROOT_DEPTH};

/// An ordered tree built from a flat list of nodes
///
/// The store keeps the nodes in the order they were supplied and records,
/// for every node, the ids of its children. Children start out in input
/// order; only [`sort_children`](Self::sort_children) changes that order,
/// and it always sorts from the input order so ties never depend on an
/// earlier sort.
///
/// A refresh is expected to build a brand new store and swap it in, so
/// there is no API for adding or removing nodes after construction.
///
/// # Example
///
/// ```
/// use tree_model::prelude::*;
///
/// let store = TreeStore::new(vec![
///     Node::root(0, "root"),
///     Node::child(1, 0, 0, "Alpha"),
///     Node::child(2, 1, 1, "Nested"),
/// ])
/// .unwrap();
///
/// assert_eq!(store.find(NodeId(2)).unwrap().payload, "Nested");
/// assert_eq!(store.children(NodeId(0)), &[NodeId(1)]);
/// ```
#[derive(Debug, Clone)]
pub struct TreeStore<T> {
    /// Nodes in input order
    nodes: Vec<Node<T>>,
    /// Child ids per node in display order, parallel to `nodes`
    children: Vec<Vec<NodeId>>,
    /// Child ids per node in input order, never reordered
    input_children: Vec<Vec<NodeId>>,
    /// Cache of id -> slot in `nodes`
    index: HashMap<NodeId, usize>,
    /// Slot of the root node
    root: usize,
}

impl<T> TreeStore<T> {
    /// Build a tree from a flat node list
    ///
    /// Each non-root node is appended to its parent's child list in input
    /// order. A parent may appear anywhere in the list, before or after its
    /// children.
    ///
    /// # Errors
    ///
    /// Returns [`TreeError::InvalidTree`] when the list has no root or more
    /// than one, when ids collide, when a parent id is unknown, or when a
    /// depth does not follow from its parent's depth.
    pub fn new(nodes: Vec<Node<T>>) -> Result<Self, TreeError> {
        let mut index = HashMap::with_capacity(nodes.len());
        let mut root: Option<usize> = None;

        for (slot, node) in nodes.iter().enumerate() {
            if index.insert(node.id, slot).is_some() {
                return Err(InvalidTree::DuplicateId(node.id).into());
            }

            if node.is_root() {
                if let Some(first) = root {
                    return Err(InvalidTree::MultipleRoots {
                        first: nodes[first].id,
                        second: node.id,
                    }
                    .into());
                }
                if node.depth != ROOT_DEPTH {
                    return Err(InvalidTree::RootDepth {
                        id: node.id,
                        depth: node.depth,
                    }
                    .into());
                }
                root = Some(slot);
            }
        }

        let root = root.ok_or(InvalidTree::MissingRoot)?;

        let mut children = vec![Vec::new(); nodes.len()];
        for node in &nodes {
            let Some(parent_id) = node.parent else {
                continue;
            };

            let parent_slot = *index.get(&parent_id).ok_or(InvalidTree::MissingParent {
                node: node.id,
                parent: parent_id,
            })?;

            // Strictly increasing depth also rules out cycles
            let parent_depth = nodes[parent_slot].depth;
            if node.depth != parent_depth + 1 {
                return Err(InvalidTree::DepthMismatch {
                    node: node.id,
                    depth: node.depth,
                    parent_depth,
                }
                .into());
            }

            children[parent_slot].push(node.id);
        }

        debug!(
            "Built tree with {} nodes ({} under the root)",
            nodes.len(),
            children[root].len()
        );

        Ok(Self {
            nodes,
            input_children: children.clone(),
            children,
            index,
            root,
        })
    }

    /// The synthetic root node
    pub fn root_node(&self) -> &Node<T> {
        &self.nodes[self.root]
    }

    /// Look up a node that is expected to exist
    ///
    /// # Errors
    ///
    /// Returns [`TreeError::NotFound`] if no node has this id.
    pub fn find(&self, id: NodeId) -> Result<&Node<T>, TreeError> {
        self.get(id).ok_or(TreeError::NotFound(id))
    }

    /// Iterate over all nodes, root included, in input order
    pub fn iter(&self) -> impl Iterator<Item = &Node<T>> {
        self.nodes.iter()
    }

    /// Ids of every node below the root, in pre-order
    pub fn flatten(&self) -> Vec<NodeId> {
        flatten(self, self.root())
    }

    /// Nodes below the root, in pre-order
    pub fn rows(&self) -> impl Iterator<Item = &Node<T>> {
        self.flatten()
            .into_iter()
            .filter_map(move |id| self.get(id))
    }

    /// Reorder the direct children of `parent` by a column of the table
    ///
    /// The new order is computed from the input order, so rows with equal
    /// keys keep the order they were supplied in whatever was sorted
    /// before, and is swapped in as a whole. Returns true if the order
    /// changed. Unknown parents and columns without a sort key leave the
    /// tree untouched.
    pub fn sort_children(
        &mut self,
        parent: NodeId,
        columns: &ColumnTable<T>,
        column: usize,
        ascending: bool,
    ) -> bool {
        let Some(&slot) = self.index.get(&parent) else {
            return false;
        };
        if columns.key(column).is_none() {
            return false;
        }

        let order: Vec<NodeId> = sort_nodes(
            self.input_children[slot].iter().filter_map(|&id| self.get(id)),
            columns,
            column,
            ascending,
        )
        .into_iter()
        .map(|node| node.id)
        .collect();

        if order == self.children[slot] {
            return false;
        }

        trace!(
            "Reordered {} children of {} by column {} ({})",
            order.len(),
            parent,
            column,
            if ascending { "ascending" } else { "descending" }
        );
        self.children[slot] = order;
        true
    }

    /// Consume the store and return the nodes in input order
    pub fn into_nodes(self) -> Vec<Node<T>> {
        self.nodes
    }
}

impl<T> Tree for TreeStore<T> {
    type Payload = T;

    fn root(&self) -> NodeId {
        self.nodes[self.root].id
    }

    fn get(&self, id: NodeId) -> Option<&Node<T>> {
        self.index.get(&id).map(|&slot| &self.nodes[slot])
    }

    fn children(&self, id: NodeId) -> &[NodeId] {
        match self.index.get(&id) {
            Some(&slot) => &self.children[slot],
            None => &[],
        }
    }

    fn node_count(&self) -> usize {
        self.nodes.len()
    }
}

/// Build the flat node list for a single-level table
///
/// The root gets id 0 and each record becomes a depth-0 child of the root
/// with ids counting up from 1, in iteration order.
pub fn nodes_from_records<T>(root: T, records: impl IntoIterator<Item = T>) -> Vec<Node<T>> {
    let root_id = NodeId::new(0);
    let mut nodes = vec![Node::root(root_id, root)];
    nodes.extend(
        records
            .into_iter()
            .zip(1..)
            .map(|(payload, id)| Node::child(id, root_id, 0, payload)),
    );
    nodes
}
