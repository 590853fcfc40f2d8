//! Data models for the bookstore

pub mod book;

// Re-export commonly used types
pub use book::{Book, BookFinder, BookListing, NewBook, UpdateBook, YearRange};
