//! In-memory ordered index of catalog records.
//!
//! # Structure
//!
//! An unbalanced binary search tree. Each node owns one record and its two
//! child subtrees; the tree owns the root. Nodes are ordered by the author
//! key derived from the record (see [`AuthorKey`](crate::types::AuthorKey)).
//!
//! No rebalancing is performed, so sorted insertion produces a chain whose
//! height equals its node count. All walks use explicit stacks, so such a
//! chain is slow but never overflows the call stack.
//!
//! # Usage
//!
//! ```
//! use catalog::index::OrderedCatalogTree;
//! use catalog::types::CatalogRecord;
//!
//! let mut tree = OrderedCatalogTree::new();
//! tree.insert(CatalogRecord::new("978-0-08", "Rayuela", "Cortázar, Julio", "Sudamericana", 1963, "Literatura"))
//!     .unwrap();
//! tree.insert(CatalogRecord::new("978-0-07", "Ficciones", "Borges, Jorge L.", "Sur", 1944, "Ficción"))
//!     .unwrap();
//!
//! let authors: Vec<&str> = tree.traverse_in_order().iter().map(|r| r.author()).collect();
//! assert_eq!(authors, ["Borges, Jorge L.", "Cortázar, Julio"]);
//! assert_eq!(tree.find_by_author_key("borges").len(), 1);
//! ```

mod node;
mod tree;
mod walk;

pub use tree::{OrderedCatalogTree, TreeError};
pub use walk::TraversalOrder;
