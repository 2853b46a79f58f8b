//! Seeded operation generator.
//!
//! Produces a reproducible stream of library operations. Authors are drawn
//! from a small surname pool so that collisions, misses and two-child
//! deletions all happen often.

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

const SURNAMES: [&str; 24] = [
    "Allende", "Arguedas", "Benedetti", "Bolaño", "Borges", "Cortázar", "Darío", "Donoso",
    "Fuentes", "García", "Gallegos", "Lispector", "Mistral", "Neruda", "Onetti", "Parra", "Paz",
    "Puig", "Quiroga", "Rulfo", "Sabato", "Storni", "Vallejo", "Vargas",
];

const GIVEN_NAMES: [&str; 6] = ["Ana", "Jorge", "Julio", "Gabriela", "Juan", "Rosario"];

/// One generated library operation.
#[derive(Debug, Clone)]
pub enum Operation {
    Register { isbn: String, author: String },
    Remove { surname: String },
    Lend { isbn: String, borrower: String },
    GiveBack { isbn: String },
    Search { surname: String },
}

/// Relative weights of each operation kind.
#[derive(Debug, Clone)]
pub struct OperationMix {
    pub register: u32,
    pub remove: u32,
    pub lend: u32,
    pub give_back: u32,
    pub search: u32,
}

impl Default for OperationMix {
    fn default() -> Self {
        Self {
            register: 5,
            remove: 3,
            lend: 2,
            give_back: 2,
            search: 2,
        }
    }
}

impl OperationMix {
    const fn total(&self) -> u32 {
        self.register + self.remove + self.lend + self.give_back + self.search
    }
}

pub struct OperationGenerator {
    rng: StdRng,
    mix: OperationMix,
    next_isbn: u64,
}

impl OperationGenerator {
    #[must_use]
    pub fn new(seed: u64, mix: OperationMix) -> Self {
        Self {
            rng: StdRng::seed_from_u64(seed),
            mix,
            next_isbn: 0,
        }
    }

    pub fn next_operation(&mut self) -> Operation {
        let mut roll = self.rng.random_range(0..self.mix.total());
        if roll < self.mix.register {
            return self.register();
        }
        roll -= self.mix.register;
        if roll < self.mix.remove {
            return Operation::Remove {
                surname: self.query(),
            };
        }
        roll -= self.mix.remove;
        if roll < self.mix.lend {
            return Operation::Lend {
                isbn: self.known_isbn(),
                borrower: self.borrower(),
            };
        }
        roll -= self.mix.lend;
        if roll < self.mix.give_back {
            return Operation::GiveBack {
                isbn: self.known_isbn(),
            };
        }
        Operation::Search {
            surname: self.query(),
        }
    }

    fn register(&mut self) -> Operation {
        let isbn = format!("isbn-{}", self.next_isbn);
        self.next_isbn += 1;
        let surname = self.surname();
        let given = GIVEN_NAMES[self.rng.random_range(0..GIVEN_NAMES.len())];
        let author = if self.rng.random_bool(0.5) {
            format!("{surname}, {given}")
        } else {
            format!("{given} {surname}")
        };
        Operation::Register { isbn, author }
    }

    /// A surname in random case; occasionally blank.
    fn query(&mut self) -> String {
        if self.rng.random_bool(0.05) {
            return "  ".to_string();
        }
        let surname = self.surname();
        if self.rng.random_bool(0.3) {
            surname.to_uppercase()
        } else {
            surname.to_string()
        }
    }

    /// An ISBN that was probably issued already, or an unknown one.
    fn known_isbn(&mut self) -> String {
        let upper = self.next_isbn + 2;
        format!("isbn-{}", self.rng.random_range(0..upper))
    }

    fn borrower(&mut self) -> String {
        if self.rng.random_bool(0.05) {
            return String::new();
        }
        GIVEN_NAMES[self.rng.random_range(0..GIVEN_NAMES.len())].to_string()
    }

    fn surname(&mut self) -> &'static str {
        SURNAMES[self.rng.random_range(0..SURNAMES.len())]
    }
}
