//! Ordered catalog index.
//!
//! An unbalanced binary search tree keyed by [`AuthorKey`]. Every key is
//! unique: two records whose authors share a surname collide, and the
//! second insertion is rejected.
//!
//! Failed operations never modify the tree.

use std::fmt;

use crate::index::node::{self, Subtree, TreeNode};
use crate::index::walk::{self, InOrder, PreOrder, TraversalOrder};
use crate::types::{AuthorKey, CatalogRecord};

/// Binary search tree of catalog records ordered by author surname.
#[derive(Debug, Default)]
pub struct OrderedCatalogTree {
    root: Subtree,
}

impl OrderedCatalogTree {
    /// Create an empty tree.
    #[must_use]
    pub const fn new() -> Self {
        Self { root: None }
    }

    #[must_use]
    pub const fn is_empty(&self) -> bool {
        self.root.is_none()
    }

    /// Insert a record as a new leaf.
    ///
    /// # Errors
    ///
    /// Returns `DuplicateKey` if a record with the same author key is already
    /// stored. The tree is left unchanged.
    pub fn insert(&mut self, record: CatalogRecord) -> Result<(), TreeError> {
        let key = record.author_key();
        let slot = node::locate(&mut self.root, &key);
        if slot.is_some() {
            return Err(TreeError::DuplicateKey(key));
        }
        tracing::debug!("inserting '{}' under key '{}'", record.isbn(), key);
        *slot = Some(TreeNode::leaf(key, record));
        Ok(())
    }

    /// Look up the record whose key equals `query`, ignoring case.
    ///
    /// The query is compared as given: it is not split on commas or
    /// whitespace. Returns at most one record; a blank query returns none.
    #[must_use]
    pub fn find_by_author_key(&self, query: &str) -> Vec<&CatalogRecord> {
        if query.trim().is_empty() {
            return Vec::new();
        }
        let key = AuthorKey::from_query(query);
        node::find(self.root.as_deref(), &key)
            .map(|node| &node.record)
            .into_iter()
            .collect()
    }

    /// Whether a record is stored under `query` (compared like
    /// [`find_by_author_key`](Self::find_by_author_key)).
    #[must_use]
    pub fn contains_key(&self, query: &str) -> bool {
        !self.find_by_author_key(query).is_empty()
    }

    /// Remove the record stored under `query` and return it.
    ///
    /// A node with two children is replaced by its in-order successor (the
    /// minimum of its right subtree), which is spliced out of that subtree.
    ///
    /// # Errors
    ///
    /// - `InvalidArgument` if `query` is blank.
    /// - `NotFound` if no record is stored under `query`.
    pub fn delete_by_author_key(&mut self, query: &str) -> Result<CatalogRecord, TreeError> {
        if query.trim().is_empty() {
            return Err(TreeError::InvalidArgument(
                "author query must not be empty".to_string(),
            ));
        }
        let key = AuthorKey::from_query(query);
        let slot = node::locate(&mut self.root, &key);
        let Some(mut removed) = slot.take() else {
            return Err(TreeError::NotFound(query.to_string()));
        };
        tracing::debug!(
            "removing key '{}' with {} children",
            removed.key,
            removed.child_count()
        );

        *slot = match (removed.left.take(), removed.right.take()) {
            (None, None) => None,
            (Some(child), None) | (None, Some(child)) => Some(child),
            (Some(left), Some(right)) => {
                let mut right = Some(right);
                // `right` is non-empty, so a successor always exists.
                node::take_min(&mut right).map(|mut successor| {
                    tracing::debug!(
                        "key '{}' replaced by successor '{}'",
                        removed.key,
                        successor.key
                    );
                    successor.left = Some(left);
                    successor.right = right;
                    successor
                })
            }
        };

        tracing::debug!("removed '{}' under key '{}'", removed.record.isbn(), key);
        Ok(removed.record)
    }

    /// Snapshot of all records in the given order.
    #[must_use]
    pub fn traverse(&self, order: TraversalOrder) -> Vec<&CatalogRecord> {
        let root = self.root.as_deref();
        match order {
            TraversalOrder::InOrder => InOrder::new(root).map(|n| &n.record).collect(),
            TraversalOrder::PreOrder => PreOrder::new(root).map(|n| &n.record).collect(),
            TraversalOrder::PostOrder => walk::post_order(root)
                .into_iter()
                .map(|n| &n.record)
                .collect(),
        }
    }

    /// Records in ascending key order.
    #[must_use]
    pub fn traverse_in_order(&self) -> Vec<&CatalogRecord> {
        self.traverse(TraversalOrder::InOrder)
    }

    /// Records parent-first, mirroring insertion structure.
    #[must_use]
    pub fn traverse_pre_order(&self) -> Vec<&CatalogRecord> {
        self.traverse(TraversalOrder::PreOrder)
    }

    /// Records children-first.
    #[must_use]
    pub fn traverse_post_order(&self) -> Vec<&CatalogRecord> {
        self.traverse(TraversalOrder::PostOrder)
    }

    /// Record with the alphabetically first author key.
    #[must_use]
    pub fn find_min(&self) -> Option<&CatalogRecord> {
        let mut current = self.root.as_deref()?;
        while let Some(left) = current.left.as_deref() {
            current = left;
        }
        Some(&current.record)
    }

    /// Record with the alphabetically last author key.
    #[must_use]
    pub fn find_max(&self) -> Option<&CatalogRecord> {
        let mut current = self.root.as_deref()?;
        while let Some(right) = current.right.as_deref() {
            current = right;
        }
        Some(&current.record)
    }

    #[must_use]
    pub fn count_nodes(&self) -> usize {
        PreOrder::new(self.root.as_deref()).count()
    }

    /// Number of levels; 0 for an empty tree, 1 for a single node.
    #[must_use]
    pub fn height(&self) -> usize {
        walk::height(self.root.as_deref())
    }

    /// First record (in pre-order) whose ISBN equals `isbn` after trimming.
    ///
    /// The tree is not keyed by ISBN, so this visits every node in the
    /// worst case.
    #[must_use]
    pub fn find_by_isbn(&self, isbn: &str) -> Option<&CatalogRecord> {
        let isbn = isbn.trim();
        if isbn.is_empty() {
            return None;
        }
        PreOrder::new(self.root.as_deref())
            .find(|node| node.record.isbn() == isbn)
            .map(|node| &node.record)
    }

    /// Records whose category equals `category`, ignoring case, in key order.
    ///
    /// Records with an empty category never match: a blank query returns
    /// nothing rather than the uncategorized records.
    #[must_use]
    pub fn find_by_category(&self, category: &str) -> Vec<&CatalogRecord> {
        let wanted = category.trim().to_lowercase();
        if wanted.is_empty() {
            return Vec::new();
        }
        self.filter_in_order(|record| record.category().to_lowercase() == wanted)
    }

    /// Records whose availability equals `available`, in key order.
    #[must_use]
    pub fn list_by_availability(&self, available: bool) -> Vec<&CatalogRecord> {
        self.filter_in_order(|record| record.is_available() == available)
    }

    /// Replace the first record with `isbn` by the output of `transition`.
    ///
    /// Returns `None` if no record has that ISBN. If `transition` fails, its
    /// error is returned and the stored record is left as it was.
    ///
    /// `transition` must not change the record's author key.
    pub fn replace_by_isbn<E>(
        &mut self,
        isbn: &str,
        transition: impl FnOnce(&CatalogRecord) -> Result<CatalogRecord, E>,
    ) -> Option<Result<(), E>> {
        let node = self.find_node_by_isbn_mut(isbn)?;
        Some(transition(&node.record).map(|next| {
            debug_assert_eq!(next.author_key(), node.key, "transition changed the key");
            node.record = next;
        }))
    }

    fn filter_in_order(&self, predicate: impl Fn(&CatalogRecord) -> bool) -> Vec<&CatalogRecord> {
        InOrder::new(self.root.as_deref())
            .map(|node| &node.record)
            .filter(|record| predicate(record))
            .collect()
    }

    fn find_node_by_isbn_mut(&mut self, isbn: &str) -> Option<&mut TreeNode> {
        let isbn = isbn.trim();
        if isbn.is_empty() {
            return None;
        }
        let mut stack: Vec<&mut TreeNode> = self.root.as_deref_mut().into_iter().collect();
        while let Some(node) = stack.pop() {
            if node.record.isbn() == isbn {
                return Some(node);
            }
            stack.extend(node.right.as_deref_mut());
            stack.extend(node.left.as_deref_mut());
        }
        None
    }
}

impl Drop for OrderedCatalogTree {
    // The derived drop recurses once per level, which a degenerate tree
    // turns into one frame per record.
    fn drop(&mut self) {
        let mut stack: Vec<Box<TreeNode>> = self.root.take().into_iter().collect();
        while let Some(mut node) = stack.pop() {
            stack.extend(node.left.take());
            stack.extend(node.right.take());
        }
    }
}

/// Error returned by index operations.
#[derive(Debug, PartialEq, Eq)]
pub enum TreeError {
    /// A required argument was blank.
    InvalidArgument(String),
    /// A record with the same author key is already stored.
    DuplicateKey(AuthorKey),
    /// No record is stored under the given author query.
    NotFound(String),
}

impl fmt::Display for TreeError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::InvalidArgument(message) => write!(f, "invalid argument: {message}"),
            Self::DuplicateKey(key) => write!(f, "duplicate author key: {key}"),
            Self::NotFound(query) => write!(f, "author not found: {query}"),
        }
    }
}

impl std::error::Error for TreeError {}
