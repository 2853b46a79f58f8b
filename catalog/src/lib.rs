#![cfg_attr(test, allow(clippy::disallowed_methods))]
// Layout:
//  - types:   catalog records, their loan state machine, author keys
//  - index:   the ordered author index (unbalanced BST)
//  - library: facade naming index operations for the console
//  - console: line-oriented menu over a library
//  - config:  environment configuration for the binary
//
// Life of a menu action:
// 1. Console reads a choice and its field values
// 2. Library forwards to the index (lend/return: look up by ISBN, apply
//    the record transition, store the new record value)
// 3. Console prints the outcome; errors are printed and the menu continues

pub mod config;
pub mod console;
pub mod index;
pub mod library;
pub mod types;

#[cfg(test)]
mod testing;

pub use console::Console;
pub use index::{OrderedCatalogTree, TraversalOrder, TreeError};
pub use library::{CatalogStatistics, Library, LibraryError};
