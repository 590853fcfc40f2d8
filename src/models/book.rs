//! Book model

use std::fmt;

use chrono::{Datelike, Utc};
use serde::{Deserialize, Serialize};
use utoipa::{IntoParams, ToSchema};
use validator::Validate;

use crate::{
    config::CatalogConfig,
    error::{AppError, AppResult},
};

/// Stored book record
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct Book {
    pub title: String,
    pub author: String,
    pub publish_year: Option<i32>,
}

impl Book {
    /// True when `(title, author)` exactly equals the finder's key.
    /// A finder with a missing field never matches.
    pub fn matches(&self, finder: &BookFinder) -> bool {
        finder.title.as_deref() == Some(self.title.as_str())
            && finder.author.as_deref() == Some(self.author.as_str())
    }
}

/// Composite key lookup (title, author)
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize, Validate, ToSchema, IntoParams)]
#[into_params(parameter_in = Query)]
pub struct BookFinder {
    #[validate(required(message = "title is required"))]
    pub title: Option<String>,
    #[validate(required(message = "author is required"))]
    pub author: Option<String>,
}

impl BookFinder {
    pub fn new(title: impl Into<String>, author: impl Into<String>) -> Self {
        Self {
            title: Some(title.into()),
            author: Some(author.into()),
        }
    }
}

impl From<&Book> for BookFinder {
    fn from(book: &Book) -> Self {
        Self::new(book.title.clone(), book.author.clone())
    }
}

impl fmt::Display for BookFinder {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "'{}' by '{}'",
            self.title.as_deref().unwrap_or("-"),
            self.author.as_deref().unwrap_or("-")
        )
    }
}

/// Create book request
#[derive(Debug, Clone, Default, Deserialize, Validate, ToSchema)]
pub struct NewBook {
    #[validate(required(message = "title is required"))]
    pub title: Option<String>,
    #[validate(required(message = "author is required"))]
    pub author: Option<String>,
    /// Absent: no year recorded. Explicit `null`: rejected.
    #[serde(default, with = "::serde_with::rust::double_option")]
    #[schema(value_type = Option<i32>)]
    pub publish_year: Option<Option<i32>>,
}

/// Update book request
///
/// `prevBook` selects the record; every other field present in the request
/// overwrites the stored value. `title` and `author` treat `null` as absent,
/// while `publish_year: null` clears the year.
#[derive(Debug, Clone, Default, Deserialize, ToSchema)]
pub struct UpdateBook {
    pub title: Option<String>,
    pub author: Option<String>,
    #[serde(default, with = "::serde_with::rust::double_option")]
    #[schema(value_type = Option<i32>)]
    pub publish_year: Option<Option<i32>>,
    #[serde(rename = "prevBook", alias = "prev_book")]
    pub prev_book: Option<BookFinder>,
}

/// Result of listing the catalog
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum BookListing {
    /// No books stored yet
    Empty,
    Books(Vec<Book>),
}

impl BookListing {
    pub fn len(&self) -> usize {
        match self {
            BookListing::Empty => 0,
            BookListing::Books(books) => books.len(),
        }
    }

    pub fn is_empty(&self) -> bool {
        matches!(self, BookListing::Empty)
    }
}

/// Accepted range of publish years
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct YearRange {
    min: i32,
    max: Option<i32>,
}

impl YearRange {
    /// `max: None` follows the current calendar year.
    pub fn new(min: i32, max: Option<i32>) -> Self {
        Self { min, max }
    }

    pub fn max(&self) -> i32 {
        self.max.unwrap_or_else(|| Utc::now().year())
    }

    pub fn check(&self, year: i32) -> AppResult<()> {
        let max = self.max();
        if year < self.min || year > max {
            return Err(AppError::Validation(format!(
                "publish_year {} is outside the accepted range {}..={}",
                year, self.min, max
            )));
        }
        Ok(())
    }
}

impl From<&CatalogConfig> for YearRange {
    fn from(config: &CatalogConfig) -> Self {
        Self::new(config.min_publish_year, config.max_publish_year)
    }
}

impl Default for YearRange {
    fn default() -> Self {
        Self::from(&CatalogConfig::default())
    }
}
