//! Pre-order flattening of a tree into display rows

use crate::tree::{NodeId, Tree};

/// Depth-first pre-order iterator over a tree
///
/// Starts at the given node (which is yielded first), then visits every
/// descendant with parents before children and siblings in their current
/// order. The walk uses an explicit stack, so arbitrarily deep trees do
/// not grow the call stack.
pub struct TreeWalker<'a, T: Tree + ?Sized> {
    tree: &'a T,
    stack: Vec<NodeId>,
}

impl<'a, T: Tree + ?Sized> TreeWalker<'a, T> {
    /// Create a new tree walker starting from the given node
    pub fn new(tree: &'a T, start: NodeId) -> Self {
        Self {
            tree,
            stack: vec![start],
        }
    }

    #[cfg(debug_assertions)]
    fn check_depths(&self, parent: NodeId, children: &[NodeId]) {
        let Some(parent_depth) = self.tree.get(parent).map(|n| n.depth) else {
            return;
        };
        for &child in children {
            if let Some(node) = self.tree.get(child) {
                debug_assert!(
                    node.depth > parent_depth,
                    "{} at depth {} is not deeper than its parent {} at depth {}",
                    child,
                    node.depth,
                    parent,
                    parent_depth
                );
            }
        }
    }
}

impl<'a, T: Tree + ?Sized> Iterator for TreeWalker<'a, T> {
    type Item = NodeId;

    fn next(&mut self) -> Option<Self::Item> {
        let current = self.stack.pop()?;
        let children = self.tree.children(current);

        #[cfg(debug_assertions)]
        self.check_depths(current, children);

        // Push in reverse so the first child is popped next
        self.stack.extend(children.iter().rev().copied());

        Some(current)
    }
}

/// Flatten everything below `root` into pre-order rows
///
/// The root itself is not part of the result. A root without children
/// yields an empty vector.
pub fn flatten<T: Tree + ?Sized>(tree: &T, root: NodeId) -> Vec<NodeId> {
    let mut rows = Vec::with_capacity(tree.node_count().saturating_sub(1));
    flatten_into(tree, root, &mut rows);
    rows
}

/// Like [`flatten`], but reuses an existing row buffer
///
/// The buffer is cleared before the rows are written.
pub fn flatten_into<T: Tree + ?Sized>(tree: &T, root: NodeId, rows: &mut Vec<NodeId>) {
    rows.clear();
    rows.extend(TreeWalker::new(tree, root).skip(1));
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::tree::{Node, TreeStore};
    use pretty_assertions::assert_eq;

    fn nested() -> TreeStore<&'static str> {
        // root
        //   a
        //     a1
        //       a1x
        //     a2
        //   b
        //   c
        //     c1
        TreeStore::new(vec![
            Node::root(0, "root"),
            Node::child(1, 0, 0, "a"),
            Node::child(2, 1, 1, "a1"),
            Node::child(3, 2, 2, "a1x"),
            Node::child(4, 1, 1, "a2"),
            Node::child(5, 0, 0, "b"),
            Node::child(6, 0, 0, "c"),
            Node::child(7, 6, 1, "c1"),
        ])
        .unwrap()
    }

    fn names(tree: &TreeStore<&'static str>, ids: &[NodeId]) -> Vec<&'static str> {
        ids.iter().map(|&id| tree.find(id).unwrap().payload).collect()
    }

    #[test]
    fn test_flatten_preorder() {
        let tree = nested();
        let rows = flatten(&tree, tree.root());

        assert_eq!(names(&tree, &rows), vec!["a", "a1", "a1x", "a2", "b", "c", "c1"]);
    }

    #[test]
    fn test_flatten_subtree() {
        let tree = nested();
        let rows = flatten(&tree, NodeId(1));

        assert_eq!(names(&tree, &rows), vec!["a1", "a1x", "a2"]);
    }

    #[test]
    fn test_flatten_without_children() {
        let tree = TreeStore::new(vec![Node::root(0, "root")]).unwrap();
        assert!(flatten(&tree, tree.root()).is_empty());

        let tree = nested();
        assert!(flatten(&tree, NodeId(5)).is_empty());
    }

    #[test]
    fn test_flatten_into_clears_buffer() {
        let tree = nested();
        let mut rows = vec![NodeId(99), NodeId(98)];

        flatten_into(&tree, NodeId(6), &mut rows);
        assert_eq!(rows, vec![NodeId(7)]);
    }

    #[test]
    fn test_walker_includes_start() {
        let tree = nested();
        let walked: Vec<_> = TreeWalker::new(&tree, NodeId(6)).collect();

        assert_eq!(walked, vec![NodeId(6), NodeId(7)]);
    }

    #[test]
    fn test_deep_chain() {
        let mut nodes = vec![Node::root(0, 0)];
        for id in 1..20_000 {
            nodes.push(Node::child(id, id - 1, id - 1, id));
        }
        let tree = TreeStore::new(nodes).unwrap();

        let rows = flatten(&tree, tree.root());
        assert_eq!(rows.len(), 19_999);
        assert_eq!(rows.last(), Some(&NodeId(19_999)));
    }
}
