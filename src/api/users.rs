//! User (library member) management endpoints

use axum::{
    extract::{Path, Query, State},
    http::StatusCode,
    Json,
};
use validator::Validate;

use crate::{
    error::AppResult,
    models::user::{User, UserPayload, UsersPage},
    pagination::PagerParams,
};

use super::BasicAuth;

/// Create a new user
#[utoipa::path(
    post,
    path = "/users",
    tag = "users",
    security(("basic_auth" = [])),
    request_body = UserPayload,
    responses(
        (status = 201, description = "User created", body = User),
        (status = 400, description = "Invalid input", body = crate::error::ErrorResponse),
        (status = 401, description = "Not authenticated", body = crate::error::ErrorResponse)
    )
)]
pub async fn create_user(
    State(state): State<crate::AppState>,
    _auth: BasicAuth,
    Json(user): Json<UserPayload>,
) -> AppResult<(StatusCode, Json<User>)> {
    user.validate()?;

    let created = state.services.users.create(user).await?;
    Ok((StatusCode::CREATED, Json(created)))
}

/// Get a user by id
#[utoipa::path(
    get,
    path = "/users/{user_id}",
    tag = "users",
    security(("basic_auth" = [])),
    params(
        ("user_id" = i32, Path, description = "User ID")
    ),
    responses(
        (status = 200, description = "User details", body = User),
        (status = 401, description = "Not authenticated", body = crate::error::ErrorResponse),
        (status = 404, description = "User not found", body = crate::error::ErrorResponse)
    )
)]
pub async fn get_user(
    State(state): State<crate::AppState>,
    _auth: BasicAuth,
    Path(user_id): Path<i32>,
) -> AppResult<Json<User>> {
    let user = state.services.users.get(user_id).await?;
    Ok(Json(user))
}

/// List users with pagination
#[utoipa::path(
    get,
    path = "/users",
    tag = "users",
    security(("basic_auth" = [])),
    params(PagerParams),
    responses(
        (status = 200, description = "Paged list of users", body = UsersPage),
        (status = 401, description = "Not authenticated", body = crate::error::ErrorResponse)
    )
)]
pub async fn list_users(
    State(state): State<crate::AppState>,
    _auth: BasicAuth,
    Query(pager): Query<PagerParams>,
) -> AppResult<Json<UsersPage>> {
    pager.validate()?;

    let users = state.services.users.list(pager.skip, pager.limit).await?;
    Ok(Json(users))
}

/// Update a user
#[utoipa::path(
    put,
    path = "/users/{user_id}",
    tag = "users",
    security(("basic_auth" = [])),
    params(
        ("user_id" = i32, Path, description = "User ID")
    ),
    request_body = UserPayload,
    responses(
        (status = 200, description = "User updated", body = User),
        (status = 401, description = "Not authenticated", body = crate::error::ErrorResponse),
        (status = 404, description = "User not found", body = crate::error::ErrorResponse)
    )
)]
pub async fn update_user(
    State(state): State<crate::AppState>,
    _auth: BasicAuth,
    Path(user_id): Path<i32>,
    Json(user): Json<UserPayload>,
) -> AppResult<Json<User>> {
    user.validate()?;

    let updated = state.services.users.update(user_id, user).await?;
    Ok(Json(updated))
}
