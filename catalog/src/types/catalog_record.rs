//! Catalog records and their loan state machine.
//!
//! A record starts out `Available`. Lending moves it to `Lent`, returning
//! moves it back. Transitions never mutate in place: they produce the next
//! record value, which the index then stores in place of the old one.
//!
//! ```text
//!              lend(borrower)
//!   Available ───────────────► Lent(borrower)
//!       ▲                            │
//!       └────────── give_back ───────┘
//! ```

use std::fmt;

use super::AuthorKey;

/// Loan state of a record.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
#[allow(clippy::disallowed_methods)] // Clone needed to produce transitioned records
pub enum LoanState {
    /// On the shelf.
    #[default]
    Available,
    /// Lent to the named borrower.
    Lent {
        /// Who has the record. Never blank.
        borrower: String,
    },
}

/// Error returned by an invalid loan transition.
#[derive(Debug, PartialEq, Eq)]
pub enum LoanError {
    /// A required argument was blank.
    InvalidArgument(String),
    /// `lend` was called on a record that is already lent.
    AlreadyLent {
        /// Current borrower.
        borrower: String,
    },
    /// `give_back` was called on a record that is not lent.
    NotLent,
}

impl fmt::Display for LoanError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::InvalidArgument(message) => write!(f, "invalid argument: {message}"),
            Self::AlreadyLent { borrower } => write!(f, "record is already lent to {borrower}"),
            Self::NotLent => write!(f, "record is not lent"),
        }
    }
}

impl std::error::Error for LoanError {}

/// A single catalog entry.
///
/// # Invariants
///
/// - `author` is fixed at construction, so the derived key never changes
///   while the record sits in the index.
#[derive(Debug, Clone, PartialEq, Eq)]
#[allow(clippy::disallowed_methods)] // Clone needed to produce transitioned records
pub struct CatalogRecord {
    isbn: String,
    title: String,
    author: String,
    publisher: String,
    year: i32,
    category: String,
    loan: LoanState,
}

impl CatalogRecord {
    /// Create an available record with no borrower.
    #[must_use]
    pub fn new(
        isbn: impl Into<String>,
        title: impl Into<String>,
        author: impl Into<String>,
        publisher: impl Into<String>,
        year: i32,
        category: impl Into<String>,
    ) -> Self {
        Self {
            isbn: isbn.into(),
            title: title.into(),
            author: author.into(),
            publisher: publisher.into(),
            year,
            category: category.into(),
            loan: LoanState::Available,
        }
    }

    #[must_use]
    pub fn isbn(&self) -> &str {
        &self.isbn
    }

    #[must_use]
    pub fn title(&self) -> &str {
        &self.title
    }

    #[must_use]
    pub fn author(&self) -> &str {
        &self.author
    }

    #[must_use]
    pub fn publisher(&self) -> &str {
        &self.publisher
    }

    #[must_use]
    pub const fn year(&self) -> i32 {
        self.year
    }

    #[must_use]
    pub fn category(&self) -> &str {
        &self.category
    }

    #[must_use]
    pub const fn loan(&self) -> &LoanState {
        &self.loan
    }

    /// Whether the record is on the shelf.
    #[must_use]
    pub const fn is_available(&self) -> bool {
        matches!(self.loan, LoanState::Available)
    }

    /// The current borrower, if lent.
    #[must_use]
    pub fn borrower(&self) -> Option<&str> {
        match &self.loan {
            LoanState::Available => None,
            LoanState::Lent { borrower } => Some(borrower),
        }
    }

    /// The index key derived from this record's author.
    #[must_use]
    pub fn author_key(&self) -> AuthorKey {
        AuthorKey::from_author(&self.author)
    }

    /// Produce the lent version of this record.
    ///
    /// The borrower name is trimmed before it is stored.
    ///
    /// # Errors
    ///
    /// - `AlreadyLent` if the record is already lent (checked first).
    /// - `InvalidArgument` if `borrower` is blank.
    #[allow(clippy::disallowed_methods)] // New record value replaces the stored one
    pub fn lend(&self, borrower: &str) -> Result<Self, LoanError> {
        if let LoanState::Lent { borrower } = &self.loan {
            return Err(LoanError::AlreadyLent {
                borrower: borrower.clone(),
            });
        }
        let borrower = borrower.trim();
        if borrower.is_empty() {
            return Err(LoanError::InvalidArgument(
                "borrower name must not be empty".to_string(),
            ));
        }
        Ok(Self {
            loan: LoanState::Lent {
                borrower: borrower.to_string(),
            },
            ..self.clone()
        })
    }

    /// Produce the returned (available) version of this record.
    ///
    /// # Errors
    ///
    /// Returns `NotLent` if the record is already available.
    #[allow(clippy::disallowed_methods)] // New record value replaces the stored one
    pub fn give_back(&self) -> Result<Self, LoanError> {
        if self.is_available() {
            return Err(LoanError::NotLent);
        }
        Ok(Self {
            loan: LoanState::Available,
            ..self.clone()
        })
    }
}

impl fmt::Display for CatalogRecord {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} | {} | {} | {} | {} | {} | ",
            self.isbn, self.title, self.author, self.publisher, self.year, self.category
        )?;
        match &self.loan {
            LoanState::Available => f.write_str("Available"),
            LoanState::Lent { borrower } => write!(f, "Lent to {borrower}"),
        }
    }
}
