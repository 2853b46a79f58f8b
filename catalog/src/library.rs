//! Library facade over the catalog index.
//!
//! `Library` renames the index operations for the console and adds the one
//! piece of coordination the index does not do itself: lending and returning
//! by ISBN, which looks the record up and applies its loan transition.
//!
//! # Invariants
//!
//! - Every record in the library is reachable through exactly one author key.
//! - A failed call leaves the catalog exactly as it was.

use std::fmt;

use crate::index::{OrderedCatalogTree, TraversalOrder, TreeError};
use crate::types::{CatalogRecord, LoanError};

/// Sample catalog registered by [`Library::preload_samples`].
///
/// Fields: ISBN, title, author, publisher, year, category.
pub const SAMPLE_RECORDS: [(&str, &str, &str, &str, i32, &str); 8] = [
    ("978-0-06", "Cien Años de Soledad", "García M., Gabriel", "Sudamericana", 1967, "Literatura"),
    ("978-0-07", "Ficciones", "Borges, Jorge L.", "Sur", 1944, "Ficción"),
    ("978-0-08", "Rayuela", "Cortázar, Julio", "Sudamericana", 1963, "Literatura"),
    ("978-0-09", "La Casa de los Espíritus", "Allende, Isabel", "Plaza & Janés", 1982, "Ficción"),
    ("978-0-10", "Veinte Poemas de Amor", "Neruda, Pablo", "Nascimento", 1924, "Poesía"),
    ("978-0-11", "Desolación", "Mistral, Gabriela", "Instituto Hisp.", 1922, "Poesía"),
    ("978-0-12", "La Ciudad y los Perros", "Vargas Ll., Mario", "Seix Barral", 1963, "Literatura"),
    ("978-0-13", "Pedro Páramo", "Rulfo, Juan", "FCE", 1955, "Literatura"),
];

/// Summary figures for the whole catalog.
#[derive(Debug, PartialEq, Eq, Default)]
pub struct CatalogStatistics {
    pub total: usize,
    pub height: usize,
    /// Author of the alphabetically first key, if any.
    pub first_author: Option<String>,
    /// Author of the alphabetically last key, if any.
    pub last_author: Option<String>,
    pub available: usize,
    pub lent: usize,
}

/// Error returned by library operations.
#[derive(Debug, PartialEq, Eq)]
pub enum LibraryError {
    /// Index error.
    Tree(TreeError),
    /// Loan transition error.
    Loan(LoanError),
    /// No record has the given ISBN.
    IsbnNotFound(String),
}

impl fmt::Display for LibraryError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Tree(e) => write!(f, "catalog error: {e}"),
            Self::Loan(e) => write!(f, "loan error: {e}"),
            Self::IsbnNotFound(isbn) => write!(f, "ISBN not found: {isbn}"),
        }
    }
}

impl std::error::Error for LibraryError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::Tree(e) => Some(e),
            Self::Loan(e) => Some(e),
            Self::IsbnNotFound(_) => None,
        }
    }
}

impl From<TreeError> for LibraryError {
    fn from(e: TreeError) -> Self {
        Self::Tree(e)
    }
}

impl From<LoanError> for LibraryError {
    fn from(e: LoanError) -> Self {
        Self::Loan(e)
    }
}

/// A library catalog.
#[derive(Debug, Default)]
pub struct Library {
    tree: OrderedCatalogTree,
}

impl Library {
    /// Create an empty library.
    #[must_use]
    pub const fn new() -> Self {
        Self {
            tree: OrderedCatalogTree::new(),
        }
    }

    /// Read-only access to the underlying index.
    #[must_use]
    pub const fn index(&self) -> &OrderedCatalogTree {
        &self.tree
    }

    /// Register the sample catalog.
    ///
    /// A sample that collides with an existing author key is skipped; the
    /// rest are still registered. Returns how many were added.
    pub fn preload_samples(&mut self) -> usize {
        let mut added = 0;
        for (isbn, title, author, publisher, year, category) in SAMPLE_RECORDS {
            let record = CatalogRecord::new(isbn, title, author, publisher, year, category);
            match self.tree.insert(record) {
                Ok(()) => added += 1,
                Err(e) => tracing::warn!("Skipping sample record {isbn}: {e}"),
            }
        }
        tracing::info!("Preloaded {added} sample records");
        added
    }

    /// Add a record to the catalog.
    pub fn register(&mut self, record: CatalogRecord) -> Result<(), LibraryError> {
        let isbn = record.isbn().to_string();
        self.tree.insert(record)?;
        tracing::info!("Registered record {isbn}");
        Ok(())
    }

    #[must_use]
    pub fn search_by_author(&self, surname: &str) -> Vec<&CatalogRecord> {
        self.tree.find_by_author_key(surname)
    }

    #[must_use]
    pub fn search_by_isbn(&self, isbn: &str) -> Option<&CatalogRecord> {
        self.tree.find_by_isbn(isbn)
    }

    #[must_use]
    pub fn search_by_category(&self, category: &str) -> Vec<&CatalogRecord> {
        self.tree.find_by_category(category)
    }

    /// Remove the record filed under `surname` and return it.
    pub fn remove_by_author(&mut self, surname: &str) -> Result<CatalogRecord, LibraryError> {
        let removed = self.tree.delete_by_author_key(surname)?;
        tracing::info!("Removed record {} ({})", removed.isbn(), removed.author());
        Ok(removed)
    }

    #[must_use]
    pub fn list(&self, order: TraversalOrder) -> Vec<&CatalogRecord> {
        self.tree.traverse(order)
    }

    #[must_use]
    pub fn list_in_order(&self) -> Vec<&CatalogRecord> {
        self.tree.traverse_in_order()
    }

    #[must_use]
    pub fn list_pre_order(&self) -> Vec<&CatalogRecord> {
        self.tree.traverse_pre_order()
    }

    #[must_use]
    pub fn list_post_order(&self) -> Vec<&CatalogRecord> {
        self.tree.traverse_post_order()
    }

    #[must_use]
    pub fn list_available(&self) -> Vec<&CatalogRecord> {
        self.tree.list_by_availability(true)
    }

    #[must_use]
    pub fn list_lent(&self) -> Vec<&CatalogRecord> {
        self.tree.list_by_availability(false)
    }

    /// Lend the record with `isbn` to `borrower`.
    pub fn lend(&mut self, isbn: &str, borrower: &str) -> Result<(), LibraryError> {
        self.tree
            .replace_by_isbn(isbn, |record| record.lend(borrower))
            .ok_or_else(|| LibraryError::IsbnNotFound(isbn.to_string()))??;
        tracing::info!("Lent record {} to {}", isbn.trim(), borrower.trim());
        Ok(())
    }

    /// Take back the record with `isbn`.
    pub fn give_back(&mut self, isbn: &str) -> Result<(), LibraryError> {
        self.tree
            .replace_by_isbn(isbn, CatalogRecord::give_back)
            .ok_or_else(|| LibraryError::IsbnNotFound(isbn.to_string()))??;
        tracing::info!("Record {} returned", isbn.trim());
        Ok(())
    }

    #[must_use]
    pub fn statistics(&self) -> CatalogStatistics {
        let author = |record: &CatalogRecord| record.author().to_string();
        CatalogStatistics {
            total: self.tree.count_nodes(),
            height: self.tree.height(),
            first_author: self.tree.find_min().map(author),
            last_author: self.tree.find_max().map(author),
            available: self.list_available().len(),
            lent: self.list_lent().len(),
        }
    }
}
