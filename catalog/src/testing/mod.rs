use crate::library::{Library, SAMPLE_RECORDS};
use crate::types::CatalogRecord;

/// Build a record where only the ISBN and author matter.
///
/// Every other field gets a fixed placeholder so tests can focus on keys.
pub fn record(isbn: &str, author: &str) -> CatalogRecord {
    CatalogRecord::new(isbn, format!("Title {isbn}"), author, "Editorial", 1950, "General")
}

/// A library holding the full sample catalog.
pub fn sample_library() -> Library {
    let mut library = Library::new();
    assert_eq!(library.preload_samples(), SAMPLE_RECORDS.len());
    library
}
