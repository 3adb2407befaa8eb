//! Author management endpoints

use axum::{
    extract::{Path, Query, State},
    http::StatusCode,
    Json,
};
use validator::Validate;

use crate::{
    error::AppResult,
    models::author::{Author, AuthorPayload, AuthorsPage},
    pagination::PagerParams,
};

use super::BasicAuth;

/// Create a new author
#[utoipa::path(
    post,
    path = "/authors",
    tag = "authors",
    security(("basic_auth" = [])),
    request_body = AuthorPayload,
    responses(
        (status = 201, description = "Author created", body = Author),
        (status = 400, description = "Invalid input", body = crate::error::ErrorResponse),
        (status = 401, description = "Not authenticated", body = crate::error::ErrorResponse)
    )
)]
pub async fn create_author(
    State(state): State<crate::AppState>,
    _auth: BasicAuth,
    Json(author): Json<AuthorPayload>,
) -> AppResult<(StatusCode, Json<Author>)> {
    author.validate()?;

    let created = state.services.authors.create(author).await?;
    Ok((StatusCode::CREATED, Json(created)))
}

/// Get an author by id
#[utoipa::path(
    get,
    path = "/authors/{author_id}",
    tag = "authors",
    security(("basic_auth" = [])),
    params(
        ("author_id" = i32, Path, description = "Author ID")
    ),
    responses(
        (status = 200, description = "Author details", body = Author),
        (status = 401, description = "Not authenticated", body = crate::error::ErrorResponse),
        (status = 404, description = "Author not found", body = crate::error::ErrorResponse)
    )
)]
pub async fn get_author(
    State(state): State<crate::AppState>,
    _auth: BasicAuth,
    Path(author_id): Path<i32>,
) -> AppResult<Json<Author>> {
    let author = state.services.authors.get(author_id).await?;
    Ok(Json(author))
}

/// List authors with pagination
#[utoipa::path(
    get,
    path = "/authors",
    tag = "authors",
    security(("basic_auth" = [])),
    params(PagerParams),
    responses(
        (status = 200, description = "Paged list of authors", body = AuthorsPage),
        (status = 401, description = "Not authenticated", body = crate::error::ErrorResponse)
    )
)]
pub async fn list_authors(
    State(state): State<crate::AppState>,
    _auth: BasicAuth,
    Query(pager): Query<PagerParams>,
) -> AppResult<Json<AuthorsPage>> {
    pager.validate()?;

    let authors = state.services.authors.list(pager.skip, pager.limit).await?;
    Ok(Json(authors))
}

/// Update an author
#[utoipa::path(
    put,
    path = "/authors/{author_id}",
    tag = "authors",
    security(("basic_auth" = [])),
    params(
        ("author_id" = i32, Path, description = "Author ID")
    ),
    request_body = AuthorPayload,
    responses(
        (status = 200, description = "Author updated", body = Author),
        (status = 401, description = "Not authenticated", body = crate::error::ErrorResponse),
        (status = 404, description = "Author not found", body = crate::error::ErrorResponse)
    )
)]
pub async fn update_author(
    State(state): State<crate::AppState>,
    _auth: BasicAuth,
    Path(author_id): Path<i32>,
    Json(author): Json<AuthorPayload>,
) -> AppResult<Json<Author>> {
    author.validate()?;

    let updated = state.services.authors.update(author_id, author).await?;
    Ok(Json(updated))
}

/// Delete an author and their books. Deleting an unknown id succeeds.
#[utoipa::path(
    delete,
    path = "/authors/{author_id}",
    tag = "authors",
    security(("basic_auth" = [])),
    params(
        ("author_id" = i32, Path, description = "Author ID")
    ),
    responses(
        (status = 204, description = "Author deleted (or did not exist)"),
        (status = 401, description = "Not authenticated", body = crate::error::ErrorResponse),
        (status = 403, description = "Author's books still in stock", body = crate::error::ErrorResponse)
    )
)]
pub async fn delete_author(
    State(state): State<crate::AppState>,
    _auth: BasicAuth,
    Path(author_id): Path<i32>,
) -> AppResult<StatusCode> {
    state.services.authors.delete(author_id).await?;
    Ok(StatusCode::NO_CONTENT)
}
