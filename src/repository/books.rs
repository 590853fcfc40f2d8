//! In-memory book record store

use std::sync::Arc;

use parking_lot::Mutex;
use validator::Validate;

use crate::{
    error::{AppError, AppResult},
    models::book::{Book, BookFinder, BookListing, NewBook, UpdateBook, YearRange},
};

/// Ordered book records, insertion order preserved.
///
/// The lock is held for the whole of each operation, so scan-then-mutate
/// sequences (update, delete) are atomic. Cloning shares the same records.
#[derive(Clone)]
pub struct BooksRepository {
    books: Arc<Mutex<Vec<Book>>>,
    years: YearRange,
}

impl BooksRepository {
    pub fn new(years: YearRange) -> Self {
        Self {
            books: Arc::new(Mutex::new(Vec::new())),
            years,
        }
    }

    /// List every record in insertion order
    pub fn list(&self) -> BookListing {
        let books = self.books.lock();
        if books.is_empty() {
            return BookListing::Empty;
        }
        BookListing::Books(books.clone())
    }

    /// First record matching the composite key
    pub fn find(&self, finder: &BookFinder) -> AppResult<Book> {
        finder.validate()?;

        self.books
            .lock()
            .iter()
            .find(|book| book.matches(finder))
            .cloned()
            .ok_or_else(|| not_found(finder))
    }

    /// Store a copy of the book
    pub fn insert(&self, data: &NewBook) -> AppResult<Book> {
        data.validate()?;

        let publish_year = match data.publish_year {
            Some(None) => {
                return Err(AppError::Validation("publish_year must not be null".to_string()))
            }
            Some(Some(year)) => {
                self.years.check(year)?;
                Some(year)
            }
            None => None,
        };

        // title and author are present once validated
        let book = Book {
            title: data.title.clone().unwrap_or_default(),
            author: data.author.clone().unwrap_or_default(),
            publish_year,
        };

        self.books.lock().push(book.clone());
        Ok(book)
    }

    /// Overwrite the fields present in `data` on the first record matching
    /// `data.prev_book`.
    ///
    /// A supplied year is checked before the lookup: an invalid year aimed at
    /// a missing record reports a validation error, not a missing record.
    pub fn update(&self, data: &UpdateBook) -> AppResult<Book> {
        if let Some(Some(year)) = data.publish_year {
            self.years.check(year)?;
        }

        let finder = data.prev_book.clone().unwrap_or_default();
        let mut books = self.books.lock();
        let book = books
            .iter_mut()
            .find(|book| book.matches(&finder))
            .ok_or_else(|| not_found(&finder))?;

        if let Some(ref title) = data.title {
            book.title = title.clone();
        }
        if let Some(ref author) = data.author {
            book.author = author.clone();
        }
        if let Some(year) = data.publish_year {
            book.publish_year = year;
        }

        Ok(book.clone())
    }

    /// Remove the first record matching the composite key
    pub fn delete(&self, finder: &BookFinder) -> AppResult<()> {
        let mut books = self.books.lock();
        let index = books
            .iter()
            .position(|book| book.matches(finder))
            .ok_or_else(|| not_found(finder))?;
        books.remove(index);
        Ok(())
    }

    pub fn count(&self) -> usize {
        self.books.lock().len()
    }
}

fn not_found(finder: &BookFinder) -> AppError {
    AppError::NotFound(format!("Book {} not found", finder))
}
