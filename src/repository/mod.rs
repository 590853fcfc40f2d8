//! Repository layer for record storage

pub mod books;

use crate::models::book::YearRange;

/// Main repository struct holding the in-memory stores
#[derive(Clone)]
pub struct Repository {
    pub books: books::BooksRepository,
}

impl Repository {
    /// Create an empty repository enforcing the given publish year range
    pub fn new(years: YearRange) -> Self {
        Self {
            books: books::BooksRepository::new(years),
        }
    }
}
