//! Stock (available copies) model and related types

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use utoipa::ToSchema;
use validator::Validate;

use crate::pagination::PageInfo;

/// Stock row from database. One row per book, `stock_quantity` is the number
/// of copies currently on the shelf and never goes below zero.
#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct Stock {
    pub id: i32,
    pub book_id: i32,
    pub stock_quantity: i32,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

/// Stock creation request. Stock rows are provisioned explicitly, they are
/// not created automatically with the book.
#[derive(Debug, Deserialize, Validate, ToSchema)]
pub struct StockPayload {
    #[validate(range(min = 1))]
    pub book_id: i32,
    #[validate(range(min = 1))]
    pub stock_quantity: i32,
}

/// Restocking request: adds copies to an existing stock row
#[derive(Debug, Deserialize, Validate, ToSchema)]
pub struct StockQuantityAdd {
    /// Number of copies to add, must be positive
    #[validate(range(min = 1))]
    pub stock_quantity: i32,
}

/// Stock details joined with the owning book
#[derive(Debug, Clone, Serialize, FromRow, ToSchema)]
pub struct StockDetails {
    pub id: i32,
    pub book_id: i32,
    pub stock_quantity: i32,
    pub title: String,
    pub category: Option<String>,
}

/// Paged list of stocks
#[derive(Debug, Serialize, ToSchema)]
pub struct StocksPage {
    pub stocks: Vec<StockDetails>,
    pub number_of_stocks: i64,
    #[serde(flatten)]
    pub page: PageInfo,
}
