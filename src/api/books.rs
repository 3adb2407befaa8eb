//! Book management endpoints

use axum::{
    extract::{Path, Query, State},
    http::StatusCode,
    Json,
};
use validator::Validate;

use crate::{
    error::AppResult,
    models::book::{Book, BookPayload, BooksPage},
    pagination::PagerParams,
};

use super::BasicAuth;

/// Create a new book
#[utoipa::path(
    post,
    path = "/books",
    tag = "books",
    security(("basic_auth" = [])),
    request_body = BookPayload,
    responses(
        (status = 201, description = "Book created", body = Book),
        (status = 400, description = "Invalid input", body = crate::error::ErrorResponse),
        (status = 401, description = "Not authenticated", body = crate::error::ErrorResponse)
    )
)]
pub async fn create_book(
    State(state): State<crate::AppState>,
    _auth: BasicAuth,
    Json(book): Json<BookPayload>,
) -> AppResult<(StatusCode, Json<Book>)> {
    book.validate()?;

    let created = state.services.books.create(book).await?;
    Ok((StatusCode::CREATED, Json(created)))
}

/// Get a book by id
#[utoipa::path(
    get,
    path = "/books/{book_id}",
    tag = "books",
    security(("basic_auth" = [])),
    params(
        ("book_id" = i32, Path, description = "Book ID")
    ),
    responses(
        (status = 200, description = "Book details", body = Book),
        (status = 401, description = "Not authenticated", body = crate::error::ErrorResponse),
        (status = 404, description = "Book not found", body = crate::error::ErrorResponse)
    )
)]
pub async fn get_book(
    State(state): State<crate::AppState>,
    _auth: BasicAuth,
    Path(book_id): Path<i32>,
) -> AppResult<Json<Book>> {
    let book = state.services.books.get(book_id).await?;
    Ok(Json(book))
}

/// List books with pagination
#[utoipa::path(
    get,
    path = "/books",
    tag = "books",
    security(("basic_auth" = [])),
    params(PagerParams),
    responses(
        (status = 200, description = "Paged list of books", body = BooksPage),
        (status = 401, description = "Not authenticated", body = crate::error::ErrorResponse)
    )
)]
pub async fn list_books(
    State(state): State<crate::AppState>,
    _auth: BasicAuth,
    Query(pager): Query<PagerParams>,
) -> AppResult<Json<BooksPage>> {
    pager.validate()?;

    let books = state.services.books.list(pager.skip, pager.limit).await?;
    Ok(Json(books))
}

/// Update a book
#[utoipa::path(
    put,
    path = "/books/{book_id}",
    tag = "books",
    security(("basic_auth" = [])),
    params(
        ("book_id" = i32, Path, description = "Book ID")
    ),
    request_body = BookPayload,
    responses(
        (status = 200, description = "Book updated", body = Book),
        (status = 401, description = "Not authenticated", body = crate::error::ErrorResponse),
        (status = 404, description = "Book not found", body = crate::error::ErrorResponse)
    )
)]
pub async fn update_book(
    State(state): State<crate::AppState>,
    _auth: BasicAuth,
    Path(book_id): Path<i32>,
    Json(book): Json<BookPayload>,
) -> AppResult<Json<Book>> {
    book.validate()?;

    let updated = state.services.books.update(book_id, book).await?;
    Ok(Json(updated))
}

/// Delete a book. Deleting an unknown id succeeds.
#[utoipa::path(
    delete,
    path = "/books/{book_id}",
    tag = "books",
    security(("basic_auth" = [])),
    params(
        ("book_id" = i32, Path, description = "Book ID")
    ),
    responses(
        (status = 204, description = "Book deleted (or did not exist)"),
        (status = 401, description = "Not authenticated", body = crate::error::ErrorResponse),
        (status = 403, description = "Book still in stock", body = crate::error::ErrorResponse)
    )
)]
pub async fn delete_book(
    State(state): State<crate::AppState>,
    _auth: BasicAuth,
    Path(book_id): Path<i32>,
) -> AppResult<StatusCode> {
    state.services.books.delete(book_id).await?;
    Ok(StatusCode::NO_CONTENT)
}
