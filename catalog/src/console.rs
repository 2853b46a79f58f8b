//! Interactive text menu over a [`Library`].
//!
//! The console is line oriented: one menu choice or field value per line.
//! It works over any `BufRead`/`Write` pair, so tests drive it with
//! in-memory buffers and the binary drives it with stdin/stdout.
//!
//! Library errors are printed and the menu continues. Only I/O errors end
//! the session early. End of input ends the session like option `0`.

use std::io::{self, BufRead, Write};

use crate::library::Library;
use crate::types::CatalogRecord;

const MENU: &str = "\
============================================
   LIBRARY CATALOG
============================================
  1. Register a new record
  2. Search by author surname
  3. Search by ISBN
  4. Remove a record (by author surname)
  5. List records (in-order, alphabetical)
  6. List records (pre-order, structure)
  7. List records (post-order)
  8. Lend a record
  9. Return a record
 10. List available records
 11. List lent records
 12. Search by category
 13. Catalog statistics
  0. Exit";

/// A menu session bound to one library.
pub struct Console<'a, R, W> {
    library: &'a mut Library,
    input: R,
    output: W,
}

impl<'a, R: BufRead, W: Write> Console<'a, R, W> {
    pub const fn new(library: &'a mut Library, input: R, output: W) -> Self {
        Self {
            library,
            input,
            output,
        }
    }

    /// Run the menu until the user exits or input ends.
    pub fn run(&mut self) -> io::Result<()> {
        loop {
            writeln!(self.output, "{MENU}")?;
            let Some(line) = self.prompt("Select an option: ")? else {
                break;
            };
            let Ok(choice) = line.parse::<u32>() else {
                writeln!(self.output, "Invalid option. Enter a number.")?;
                continue;
            };
            tracing::debug!("menu option {choice}");
            if choice == 0 {
                writeln!(self.output, "Goodbye.")?;
                break;
            }
            self.dispatch(choice)?;
        }
        self.output.flush()
    }

    fn dispatch(&mut self, choice: u32) -> io::Result<()> {
        match choice {
            1 => self.register(),
            2 => self.search_by_author(),
            3 => self.search_by_isbn(),
            4 => self.remove_by_author(),
            5 => write_records(
                &mut self.output,
                &self.library.list_in_order(),
                "The catalog is empty.",
            ),
            6 => write_records(
                &mut self.output,
                &self.library.list_pre_order(),
                "The catalog is empty.",
            ),
            7 => write_records(
                &mut self.output,
                &self.library.list_post_order(),
                "The catalog is empty.",
            ),
            8 => self.lend(),
            9 => self.give_back(),
            10 => write_records(
                &mut self.output,
                &self.library.list_available(),
                "No available records.",
            ),
            11 => write_records(
                &mut self.output,
                &self.library.list_lent(),
                "No lent records.",
            ),
            12 => self.search_by_category(),
            13 => self.statistics(),
            _ => writeln!(self.output, "Unknown option."),
        }
    }

    fn register(&mut self) -> io::Result<()> {
        let isbn = self.field("ISBN: ")?;
        let title = self.field("Title: ")?;
        let author = self.field("Author (e.g. Surname, Name): ")?;
        let publisher = self.field("Publisher: ")?;
        let year = self.field("Publication year: ")?;
        let category = self.field("Category: ")?;

        let Ok(year) = year.parse::<i32>() else {
            return writeln!(self.output, "Invalid year.");
        };
        let record = CatalogRecord::new(isbn, title, author, publisher, year, category);
        match self.library.register(record) {
            Ok(()) => writeln!(self.output, "Record registered."),
            Err(e) => writeln!(self.output, "Could not register: {e}"),
        }
    }

    fn search_by_author(&mut self) -> io::Result<()> {
        let surname = self.field("Author surname: ")?;
        let results = self.library.search_by_author(&surname);
        if results.is_empty() {
            return writeln!(self.output, "No records found for author: {surname}");
        }
        writeln!(self.output, "Results:")?;
        write_records(&mut self.output, &results, "")
    }

    fn search_by_isbn(&mut self) -> io::Result<()> {
        let isbn = self.field("ISBN: ")?;
        match self.library.search_by_isbn(&isbn) {
            Some(record) => writeln!(self.output, "{record}"),
            None => writeln!(self.output, "No record found with ISBN: {isbn}"),
        }
    }

    fn remove_by_author(&mut self) -> io::Result<()> {
        let surname = self.field("Author surname to remove: ")?;
        match self.library.remove_by_author(&surname) {
            Ok(removed) => writeln!(self.output, "Removed: {removed}"),
            Err(e) => writeln!(self.output, "Could not remove: {e}"),
        }
    }

    fn lend(&mut self) -> io::Result<()> {
        let isbn = self.field("ISBN of the record to lend: ")?;
        let borrower = self.field("Borrower name: ")?;
        match self.library.lend(&isbn, &borrower) {
            Ok(()) => writeln!(self.output, "Loan registered."),
            Err(e) => writeln!(self.output, "Could not lend: {e}"),
        }
    }

    fn give_back(&mut self) -> io::Result<()> {
        let isbn = self.field("ISBN of the record to return: ")?;
        match self.library.give_back(&isbn) {
            Ok(()) => writeln!(self.output, "Return registered."),
            Err(e) => writeln!(self.output, "Could not return: {e}"),
        }
    }

    fn search_by_category(&mut self) -> io::Result<()> {
        let category = self.field("Category: ")?;
        let message = format!("No records found in category: {category}");
        write_records(
            &mut self.output,
            &self.library.search_by_category(&category),
            &message,
        )
    }

    fn statistics(&mut self) -> io::Result<()> {
        let stats = self.library.statistics();
        let or_na = |author: Option<String>| author.unwrap_or_else(|| "N/A".to_string());
        writeln!(self.output, "=== Catalog statistics ===")?;
        writeln!(self.output, "Total records: {}", stats.total)?;
        writeln!(self.output, "Tree height: {}", stats.height)?;
        writeln!(
            self.output,
            "First author (alphabetical): {}",
            or_na(stats.first_author)
        )?;
        writeln!(
            self.output,
            "Last author (alphabetical): {}",
            or_na(stats.last_author)
        )?;
        writeln!(self.output, "Available: {}", stats.available)?;
        writeln!(self.output, "Lent: {}", stats.lent)
    }

    /// Prompt for a field value; end of input reads as an empty value.
    fn field(&mut self, label: &str) -> io::Result<String> {
        Ok(self.prompt(label)?.unwrap_or_default())
    }

    /// Print `label` and read one trimmed line, or `None` at end of input.
    fn prompt(&mut self, label: &str) -> io::Result<Option<String>> {
        write!(self.output, "{label}")?;
        self.output.flush()?;
        let mut line = String::new();
        if self.input.read_line(&mut line)? == 0 {
            return Ok(None);
        }
        Ok(Some(line.trim().to_string()))
    }
}

fn write_records(
    output: &mut impl Write,
    records: &[&CatalogRecord],
    empty: &str,
) -> io::Result<()> {
    if records.is_empty() {
        return writeln!(output, "{empty}");
    }
    for record in records {
        writeln!(output, "{record}")?;
    }
    Ok(())
}
