mod author_key;
mod catalog_record;

pub use author_key::AuthorKey;
pub use catalog_record::{CatalogRecord, LoanError, LoanState};
