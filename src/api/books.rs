//! Book catalog endpoints

use axum::{
    extract::{Query, State},
    http::StatusCode,
    Json,
};
use axum_extra::extract::WithRejection;
use serde::Serialize;

use crate::{
    error::{AppError, AppResult},
    models::book::{Book, BookFinder, BookListing, NewBook, UpdateBook},
};

/// Body returned when the catalog holds no books
pub const NO_BOOKS_MESSAGE: &str = "There are no books yet";

/// Listing body: a JSON array of books, or a plain message when empty
#[derive(Serialize)]
#[serde(untagged)]
pub enum AllBooksResponse {
    Message(String),
    Books(Vec<Book>),
}

impl From<BookListing> for AllBooksResponse {
    fn from(listing: BookListing) -> Self {
        match listing {
            BookListing::Empty => AllBooksResponse::Message(NO_BOOKS_MESSAGE.to_string()),
            BookListing::Books(books) => AllBooksResponse::Books(books),
        }
    }
}

/// List all books in insertion order
#[utoipa::path(
    get,
    path = "/allBooks",
    tag = "books",
    responses(
        (status = 200, description = "Every stored book, or \"There are no books yet\"", body = Vec<Book>)
    )
)]
pub async fn list_books(State(state): State<crate::AppState>) -> Json<AllBooksResponse> {
    Json(state.services.books.list().into())
}

/// Get a book by title and author
#[utoipa::path(
    get,
    path = "/book",
    tag = "books",
    params(BookFinder),
    responses(
        (status = 200, description = "Book details", body = Book),
        (status = 400, description = "Title or author missing", body = crate::error::ErrorResponse),
        (status = 404, description = "Book not found", body = crate::error::ErrorResponse)
    )
)]
pub async fn get_book(
    State(state): State<crate::AppState>,
    WithRejection(Query(finder), _): WithRejection<Query<BookFinder>, AppError>,
) -> AppResult<Json<Book>> {
    let book = state.services.books.get(&finder)?;
    Ok(Json(book))
}

/// Add a new book
#[utoipa::path(
    post,
    path = "/newBook",
    tag = "books",
    request_body = NewBook,
    responses(
        (status = 201, description = "Book created", body = Book),
        (status = 400, description = "Invalid input", body = crate::error::ErrorResponse)
    )
)]
pub async fn create_book(
    State(state): State<crate::AppState>,
    WithRejection(Json(data), _): WithRejection<Json<NewBook>, AppError>,
) -> AppResult<(StatusCode, Json<Book>)> {
    let book = state.services.books.create(&data)?;
    Ok((StatusCode::CREATED, Json(book)))
}

/// Update the book selected by `prevBook`
#[utoipa::path(
    post,
    path = "/updateBook",
    tag = "books",
    request_body = UpdateBook,
    responses(
        (status = 200, description = "Book updated", body = Book),
        (status = 400, description = "Invalid publish year", body = crate::error::ErrorResponse),
        (status = 404, description = "Book not found", body = crate::error::ErrorResponse)
    )
)]
pub async fn update_book(
    State(state): State<crate::AppState>,
    WithRejection(Json(data), _): WithRejection<Json<UpdateBook>, AppError>,
) -> AppResult<Json<Book>> {
    let book = state.services.books.update(&data)?;
    Ok(Json(book))
}

/// Delete a book by title and author
#[utoipa::path(
    delete,
    path = "/deleteBook",
    tag = "books",
    request_body = BookFinder,
    responses(
        (status = 200, description = "Book deleted"),
        (status = 400, description = "Malformed request body", body = crate::error::ErrorResponse),
        (status = 404, description = "Book not found", body = crate::error::ErrorResponse)
    )
)]
pub async fn delete_book(
    State(state): State<crate::AppState>,
    WithRejection(Json(finder), _): WithRejection<Json<BookFinder>, AppError>,
) -> AppResult<StatusCode> {
    state.services.books.delete(&finder)?;
    Ok(StatusCode::OK)
}
