//! Author keys used to order the catalog index.
//!
//! A key is the author's surname, trimmed and lowercased. It is derived from
//! the free-form `author` field of a record and never stored on the record
//! itself.
//!
//! # Derivation
//!
//! - `"Borges, Jorge L."` → `"borges"` (text before the first comma)
//! - `"García M., Gabriel"` → `"garcía"` (first word before the comma)
//! - `"Gabriel García Márquez"` → `"márquez"` (last word, no comma)
//! - `""` → `""`
//!
//! # Invariants
//!
//! - A key never contains whitespace or a comma.
//! - A key is already case-folded, so plain `Ord` on keys is the
//!   case-insensitive ordinal order used by the index.

use std::fmt;

/// A normalized author surname.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Default)]
#[allow(clippy::disallowed_methods)] // Clone needed to hand keys out of errors and models
pub struct AuthorKey(String);

impl AuthorKey {
    /// Derive the key for an author string.
    ///
    /// # Examples
    ///
    /// ```
    /// use catalog::types::AuthorKey;
    ///
    /// assert_eq!(AuthorKey::from_author("Cortázar, Julio").as_str(), "cortázar");
    /// assert_eq!(AuthorKey::from_author("Juan Rulfo").as_str(), "rulfo");
    /// ```
    #[must_use]
    pub fn from_author(author: &str) -> Self {
        let author = author.trim();
        let surname = match author.split_once(',') {
            Some((before_comma, _)) => before_comma.split_whitespace().next(),
            None => author.split_whitespace().next_back(),
        };
        Self(surname.unwrap_or_default().to_lowercase())
    }

    /// Fold a lookup query into key space without re-deriving it.
    ///
    /// The query is only lowercased: commas and inner whitespace are kept,
    /// so `"García M."` never matches the key `"garcía"`.
    #[must_use]
    pub fn from_query(query: &str) -> Self {
        Self(query.to_lowercase())
    }

    /// The key as a string slice.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Whether this is the empty key.
    #[must_use]
    pub const fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl fmt::Display for AuthorKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}
