//! Tree nodes and slot navigation.
//!
//! Every subtree is an `Option<Box<TreeNode>>` owned by exactly one parent
//! (or by the tree root), so sharing and cycles are impossible by
//! construction. Structural edits work on *slots*: mutable references to the
//! `Option` that owns a subtree. Navigation is iterative so that a
//! degenerate (list-shaped) tree cannot overflow the call stack.

use std::cmp::Ordering;

use crate::types::{AuthorKey, CatalogRecord};

/// An owned, possibly empty subtree.
pub type Subtree = Option<Box<TreeNode>>;

/// A single index node.
#[derive(Debug)]
pub struct TreeNode {
    /// Key derived from `record.author()` when the node was created.
    /// Authors are immutable, so this never goes stale.
    pub key: AuthorKey,
    pub record: CatalogRecord,
    pub left: Subtree,
    pub right: Subtree,
}

impl TreeNode {
    /// Create a leaf holding `record`.
    #[must_use]
    pub fn leaf(key: AuthorKey, record: CatalogRecord) -> Box<Self> {
        Box::new(Self {
            key,
            record,
            left: None,
            right: None,
        })
    }

    /// Number of present children (0, 1 or 2).
    #[must_use]
    pub fn child_count(&self) -> usize {
        usize::from(self.left.is_some()) + usize::from(self.right.is_some())
    }
}

/// Walk down from `slot` to the slot where `key` lives or would be placed.
///
/// The returned slot is `Some` iff a node with exactly `key` exists.
pub fn locate<'a>(mut slot: &'a mut Subtree, key: &AuthorKey) -> &'a mut Subtree {
    while slot.as_ref().is_some_and(|node| node.key != *key) {
        if let Some(node) = slot {
            slot = if *key < node.key {
                &mut node.left
            } else {
                &mut node.right
            };
        }
    }
    slot
}

/// Find the node carrying `key`, read-only.
#[must_use]
pub fn find<'a>(mut current: Option<&'a TreeNode>, key: &AuthorKey) -> Option<&'a TreeNode> {
    while let Some(node) = current {
        current = match key.cmp(&node.key) {
            Ordering::Less => node.left.as_deref(),
            Ordering::Greater => node.right.as_deref(),
            Ordering::Equal => return Some(node),
        };
    }
    None
}

/// Detach the minimum-key node of the subtree in `slot`.
///
/// The detached node's right child takes its place, so the remaining
/// subtree keeps its ordering. The detached node comes back with both
/// child links empty.
pub fn take_min(mut slot: &mut Subtree) -> Option<Box<TreeNode>> {
    while slot.as_ref().is_some_and(|node| node.left.is_some()) {
        if let Some(node) = slot {
            slot = &mut node.left;
        }
    }
    let mut min = slot.take()?;
    *slot = min.right.take();
    Some(min)
}
