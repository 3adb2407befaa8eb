//! Stock management endpoints

use axum::{
    extract::{Path, Query, State},
    http::StatusCode,
    Json,
};
use validator::Validate;

use crate::{
    error::AppResult,
    models::stock::{StockDetails, StockPayload, StockQuantityAdd, StocksPage},
    pagination::PagerParams,
};

use super::BasicAuth;

/// Provision a stock row for a book
#[utoipa::path(
    post,
    path = "/stocks",
    tag = "stocks",
    security(("basic_auth" = [])),
    request_body = StockPayload,
    responses(
        (status = 201, description = "Stock created", body = StockDetails),
        (status = 401, description = "Not authenticated", body = crate::error::ErrorResponse),
        (status = 404, description = "Book not found", body = crate::error::ErrorResponse)
    )
)]
pub async fn create_stock(
    State(state): State<crate::AppState>,
    _auth: BasicAuth,
    Json(stock): Json<StockPayload>,
) -> AppResult<(StatusCode, Json<StockDetails>)> {
    stock.validate()?;

    let created = state.services.stocks.create(stock).await?;
    Ok((StatusCode::CREATED, Json(created)))
}

/// Get the stock of a book
#[utoipa::path(
    get,
    path = "/stocks/{book_id}",
    tag = "stocks",
    security(("basic_auth" = [])),
    params(
        ("book_id" = i32, Path, description = "Book ID")
    ),
    responses(
        (status = 200, description = "Stock details", body = StockDetails),
        (status = 401, description = "Not authenticated", body = crate::error::ErrorResponse),
        (status = 404, description = "Stock not found", body = crate::error::ErrorResponse)
    )
)]
pub async fn get_stock(
    State(state): State<crate::AppState>,
    _auth: BasicAuth,
    Path(book_id): Path<i32>,
) -> AppResult<Json<StockDetails>> {
    let stock = state.services.stocks.get(book_id).await?;
    Ok(Json(stock))
}

/// List stocks with pagination
#[utoipa::path(
    get,
    path = "/stocks",
    tag = "stocks",
    security(("basic_auth" = [])),
    params(PagerParams),
    responses(
        (status = 200, description = "Paged list of stocks", body = StocksPage),
        (status = 401, description = "Not authenticated", body = crate::error::ErrorResponse)
    )
)]
pub async fn list_stocks(
    State(state): State<crate::AppState>,
    _auth: BasicAuth,
    Query(pager): Query<PagerParams>,
) -> AppResult<Json<StocksPage>> {
    pager.validate()?;

    let stocks = state.services.stocks.list(pager.skip, pager.limit).await?;
    Ok(Json(stocks))
}

/// Add quantity to the existing stock of a book (restocking)
#[utoipa::path(
    put,
    path = "/stocks/{book_id}",
    tag = "stocks",
    security(("basic_auth" = [])),
    params(
        ("book_id" = i32, Path, description = "Book ID")
    ),
    request_body = StockQuantityAdd,
    responses(
        (status = 200, description = "Stock updated", body = StockDetails),
        (status = 401, description = "Not authenticated", body = crate::error::ErrorResponse),
        (status = 404, description = "Stock not found", body = crate::error::ErrorResponse)
    )
)]
pub async fn add_stock_quantity(
    State(state): State<crate::AppState>,
    _auth: BasicAuth,
    Path(book_id): Path<i32>,
    Json(add): Json<StockQuantityAdd>,
) -> AppResult<Json<StockDetails>> {
    add.validate()?;

    let stock = state.services.stocks.add_quantity(book_id, add).await?;
    Ok(Json(stock))
}
