//! Book catalog service

use crate::{
    error::AppResult,
    models::book::{Book, BookFinder, BookListing, NewBook, UpdateBook},
    repository::Repository,
};

#[derive(Clone)]
pub struct BooksService {
    repository: Repository,
}

impl BooksService {
    pub fn new(repository: Repository) -> Self {
        Self { repository }
    }

    pub fn list(&self) -> BookListing {
        let listing = self.repository.books.list();
        tracing::debug!(count = listing.len(), "Listed books");
        listing
    }

    pub fn get(&self, finder: &BookFinder) -> AppResult<Book> {
        tracing::debug!("Looking up book {}", finder);
        self.repository.books.find(finder)
    }

    pub fn create(&self, data: &NewBook) -> AppResult<Book> {
        let book = self.repository.books.insert(data)?;
        tracing::info!(
            title = %book.title,
            author = %book.author,
            publish_year = ?book.publish_year,
            "Book created"
        );
        Ok(book)
    }

    /// Apply a partial update to the book selected by `data.prev_book`
    pub fn update(&self, data: &UpdateBook) -> AppResult<Book> {
        let book = self.repository.books.update(data)?;
        tracing::info!(
            title = %book.title,
            author = %book.author,
            publish_year = ?book.publish_year,
            "Book updated"
        );
        Ok(book)
    }

    pub fn delete(&self, finder: &BookFinder) -> AppResult<()> {
        self.repository.books.delete(finder)?;
        tracing::info!("Book {} deleted", finder);
        Ok(())
    }

    /// Number of stored books
    pub fn count(&self) -> usize {
        self.repository.books.count()
    }
}
