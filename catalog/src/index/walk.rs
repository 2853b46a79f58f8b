//! Depth-first walkers over the index.
//!
//! Each walker keeps its own explicit stack, so walking a degenerate tree
//! costs heap, not call-stack depth.

use super::node::TreeNode;

/// Depth-first traversal order.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TraversalOrder {
    /// Left, node, right. Ascending key order.
    InOrder,
    /// Node, left, right. Parents before children.
    PreOrder,
    /// Left, right, node. Children before parents.
    PostOrder,
}

/// In-order node iterator.
pub struct InOrder<'a> {
    stack: Vec<&'a TreeNode>,
    current: Option<&'a TreeNode>,
}

impl<'a> InOrder<'a> {
    pub const fn new(root: Option<&'a TreeNode>) -> Self {
        Self {
            stack: Vec::new(),
            current: root,
        }
    }
}

impl<'a> Iterator for InOrder<'a> {
    type Item = &'a TreeNode;

    fn next(&mut self) -> Option<Self::Item> {
        while let Some(node) = self.current {
            self.stack.push(node);
            self.current = node.left.as_deref();
        }
        let node = self.stack.pop()?;
        self.current = node.right.as_deref();
        Some(node)
    }
}

/// Pre-order node iterator.
pub struct PreOrder<'a> {
    stack: Vec<&'a TreeNode>,
}

impl<'a> PreOrder<'a> {
    pub fn new(root: Option<&'a TreeNode>) -> Self {
        Self {
            stack: root.into_iter().collect(),
        }
    }
}

impl<'a> Iterator for PreOrder<'a> {
    type Item = &'a TreeNode;

    fn next(&mut self) -> Option<Self::Item> {
        let node = self.stack.pop()?;
        // Right first so the left subtree is visited first.
        self.stack.extend(node.right.as_deref());
        self.stack.extend(node.left.as_deref());
        Some(node)
    }
}

/// Collect nodes in post-order.
///
/// Post-order is the reverse of a (node, right, left) walk, which is
/// cheaper to produce with a single stack than a lazy post-order iterator.
pub fn post_order(root: Option<&TreeNode>) -> Vec<&TreeNode> {
    let mut stack: Vec<&TreeNode> = root.into_iter().collect();
    let mut out = Vec::new();
    while let Some(node) = stack.pop() {
        out.push(node);
        stack.extend(node.left.as_deref());
        stack.extend(node.right.as_deref());
    }
    out.reverse();
    out
}

/// Number of levels below and including `root`.
pub fn height(root: Option<&TreeNode>) -> usize {
    let mut level: Vec<&TreeNode> = root.into_iter().collect();
    let mut height = 0;
    while !level.is_empty() {
        height += 1;
        level = level
            .into_iter()
            .flat_map(|node| [node.left.as_deref(), node.right.as_deref()])
            .flatten()
            .collect();
    }
    height
}
