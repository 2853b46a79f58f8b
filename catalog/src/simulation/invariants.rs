//! Invariant checking for deterministic simulation testing.
//!
//! The simulator keeps an `ExpectedCatalog` (a `BTreeMap` keyed the same way
//! as the index) next to the real library. After every operation the checker
//! compares the two and verifies the structural invariants of the index.

use std::collections::BTreeMap;

use crate::library::Library;
use crate::types::{AuthorKey, CatalogRecord};

/// What the model expects to find under one key.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ExpectedRecord {
    pub isbn: String,
    pub borrower: Option<String>,
}

/// Reference model of the catalog.
#[derive(Debug, Default)]
pub struct ExpectedCatalog {
    records: BTreeMap<AuthorKey, ExpectedRecord>,
}

impl ExpectedCatalog {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Whether registering `author` should succeed.
    #[must_use]
    pub fn accepts(&self, author: &str) -> bool {
        !self.records.contains_key(&AuthorKey::from_author(author))
    }

    pub fn register(&mut self, isbn: &str, author: &str) {
        self.records.insert(
            AuthorKey::from_author(author),
            ExpectedRecord {
                isbn: isbn.to_string(),
                borrower: None,
            },
        );
    }

    /// Remove by query; `None` if the query is blank or unknown.
    pub fn remove(&mut self, query: &str) -> Option<ExpectedRecord> {
        if query.trim().is_empty() {
            return None;
        }
        self.records.remove(&AuthorKey::from_query(query))
    }

    #[must_use]
    pub fn get(&self, query: &str) -> Option<&ExpectedRecord> {
        if query.trim().is_empty() {
            return None;
        }
        self.records.get(&AuthorKey::from_query(query))
    }

    /// Mutable entry for the record with `isbn`, if any.
    pub fn by_isbn_mut(&mut self, isbn: &str) -> Option<&mut ExpectedRecord> {
        self.records.values_mut().find(|r| r.isbn == isbn)
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.records.len()
    }

    #[must_use]
    pub fn keys(&self) -> Vec<&AuthorKey> {
        self.records.keys().collect()
    }

    #[must_use]
    pub fn lent_count(&self) -> usize {
        self.records.values().filter(|r| r.borrower.is_some()).count()
    }
}

/// An invariant violation detected during simulation.
#[derive(Debug, Clone)]
pub struct InvariantViolation {
    /// Description of the violation.
    pub description: String,
    /// Operation index where it was detected.
    pub operation_index: usize,
    /// Additional context.
    pub context: String,
}

/// Checker for catalog invariants.
#[derive(Debug, Default)]
pub struct InvariantChecker {
    violations: Vec<InvariantViolation>,
}

impl InvariantChecker {
    #[must_use]
    pub const fn new() -> Self {
        Self {
            violations: Vec::new(),
        }
    }

    #[must_use]
    pub fn violations(&self) -> &[InvariantViolation] {
        &self.violations
    }

    pub fn add_violation(&mut self, description: &str, operation_index: usize, context: String) {
        self.violations.push(InvariantViolation {
            description: description.to_string(),
            operation_index,
            context,
        });
    }

    /// Run every structural and model check against `library`.
    pub fn check_all(&mut self, library: &Library, expected: &ExpectedCatalog, operation_index: usize) {
        self.check_ordering(library, expected, operation_index);
        self.check_counts(library, expected, operation_index);
        self.check_traversals_agree(library, operation_index);
        self.check_extremes(library, expected, operation_index);
    }

    /// In-order keys are strictly ascending and match the model exactly.
    fn check_ordering(&mut self, library: &Library, expected: &ExpectedCatalog, operation_index: usize) {
        let actual: Vec<AuthorKey> = library
            .list_in_order()
            .into_iter()
            .map(CatalogRecord::author_key)
            .collect();
        if let Some(pair) = actual.windows(2).find(|pair| pair[0] >= pair[1]) {
            self.add_violation(
                "in-order traversal not strictly ascending",
                operation_index,
                format!("{} then {}", pair[0], pair[1]),
            );
        }
        let expected_keys: Vec<&AuthorKey> = expected.keys();
        if actual.iter().collect::<Vec<_>>() != expected_keys {
            self.add_violation(
                "index keys differ from model",
                operation_index,
                format!("actual {actual:?}, expected {expected_keys:?}"),
            );
        }
    }

    fn check_counts(&mut self, library: &Library, expected: &ExpectedCatalog, operation_index: usize) {
        let stats = library.statistics();
        if stats.total != expected.len() {
            self.add_violation(
                "node count differs from model",
                operation_index,
                format!("actual {}, expected {}", stats.total, expected.len()),
            );
        }
        // A binary tree with n nodes has height in [ceil(log2(n + 1)), n].
        let min_height = usize::try_from(usize::BITS - stats.total.leading_zeros()).unwrap_or(0);
        if stats.height > stats.total || stats.height < min_height {
            self.add_violation(
                "height out of bounds",
                operation_index,
                format!("height {} for {} nodes", stats.height, stats.total),
            );
        }
        if stats.lent != expected.lent_count() || stats.available + stats.lent != stats.total {
            self.add_violation(
                "availability counts differ from model",
                operation_index,
                format!("{stats:?}"),
            );
        }
    }

    /// Pre- and post-order visit the same records as in-order.
    fn check_traversals_agree(&mut self, library: &Library, operation_index: usize) {
        let sorted_isbns = |records: Vec<&CatalogRecord>| {
            let mut isbns: Vec<String> = records.iter().map(|r| r.isbn().to_string()).collect();
            isbns.sort();
            isbns
        };
        let in_order = sorted_isbns(library.list_in_order());
        if sorted_isbns(library.list_pre_order()) != in_order
            || sorted_isbns(library.list_post_order()) != in_order
        {
            self.add_violation(
                "traversals visit different records",
                operation_index,
                String::new(),
            );
        }
    }

    fn check_extremes(&mut self, library: &Library, expected: &ExpectedCatalog, operation_index: usize) {
        let index = library.index();
        let keys = expected.keys();
        let actual = (
            index.find_min().map(CatalogRecord::author_key),
            index.find_max().map(CatalogRecord::author_key),
        );
        let wanted = (keys.first().copied().cloned(), keys.last().copied().cloned());
        if actual != wanted {
            self.add_violation(
                "min/max differ from model",
                operation_index,
                format!("actual {actual:?}, expected {wanted:?}"),
            );
        }
    }
}
