//! Reservation (book loan) endpoints

use axum::{
    extract::{Path, Query, State},
    http::StatusCode,
    Json,
};
use validator::Validate;

use crate::{
    error::AppResult,
    models::reservation::{ReservationDetails, ReservationRequest, ReservationsPage},
    pagination::PagerParams,
};

use super::BasicAuth;

/// Reserve a book for a user
#[utoipa::path(
    post,
    path = "/reservations",
    tag = "reservations",
    security(("basic_auth" = [])),
    request_body = ReservationRequest,
    responses(
        (status = 201, description = "Reservation created", body = ReservationDetails),
        (status = 400, description = "Already borrowed or not in stock", body = crate::error::ErrorResponse),
        (status = 401, description = "Not authenticated", body = crate::error::ErrorResponse),
        (status = 404, description = "User or stock not found", body = crate::error::ErrorResponse)
    )
)]
pub async fn create_reservation(
    State(state): State<crate::AppState>,
    _auth: BasicAuth,
    Json(request): Json<ReservationRequest>,
) -> AppResult<(StatusCode, Json<ReservationDetails>)> {
    request.validate()?;

    let reservation = state.services.reservations.reserve(request).await?;
    Ok((StatusCode::CREATED, Json(reservation)))
}

/// Get a reservation by id
#[utoipa::path(
    get,
    path = "/reservations/{reservation_id}",
    tag = "reservations",
    security(("basic_auth" = [])),
    params(
        ("reservation_id" = i32, Path, description = "Reservation ID")
    ),
    responses(
        (status = 200, description = "Reservation details", body = ReservationDetails),
        (status = 401, description = "Not authenticated", body = crate::error::ErrorResponse),
        (status = 404, description = "Reservation not found", body = crate::error::ErrorResponse)
    )
)]
pub async fn get_reservation(
    State(state): State<crate::AppState>,
    _auth: BasicAuth,
    Path(reservation_id): Path<i32>,
) -> AppResult<Json<ReservationDetails>> {
    let reservation = state.services.reservations.get(reservation_id).await?;
    Ok(Json(reservation))
}

/// List reservations with pagination
#[utoipa::path(
    get,
    path = "/reservations",
    tag = "reservations",
    security(("basic_auth" = [])),
    params(PagerParams),
    responses(
        (status = 200, description = "Paged list of reservations", body = ReservationsPage),
        (status = 401, description = "Not authenticated", body = crate::error::ErrorResponse)
    )
)]
pub async fn list_reservations(
    State(state): State<crate::AppState>,
    _auth: BasicAuth,
    Query(pager): Query<PagerParams>,
) -> AppResult<Json<ReservationsPage>> {
    pager.validate()?;

    let reservations = state
        .services
        .reservations
        .list(pager.skip, pager.limit)
        .await?;
    Ok(Json(reservations))
}

/// Return a borrowed book
#[utoipa::path(
    put,
    path = "/reservations/{reservation_id}",
    tag = "reservations",
    security(("basic_auth" = [])),
    params(
        ("reservation_id" = i32, Path, description = "Reservation ID")
    ),
    request_body = ReservationRequest,
    responses(
        (status = 200, description = "Book returned", body = ReservationDetails),
        (status = 400, description = "No matching active reservation", body = crate::error::ErrorResponse),
        (status = 401, description = "Not authenticated", body = crate::error::ErrorResponse),
        (status = 404, description = "Stock not found", body = crate::error::ErrorResponse)
    )
)]
pub async fn return_reservation(
    State(state): State<crate::AppState>,
    _auth: BasicAuth,
    Path(reservation_id): Path<i32>,
    Json(request): Json<ReservationRequest>,
) -> AppResult<Json<ReservationDetails>> {
    request.validate()?;

    let reservation = state
        .services
        .reservations
        .return_book(reservation_id, request)
        .await?;
    Ok(Json(reservation))
}
