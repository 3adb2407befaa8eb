//! Book model and related types

use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use utoipa::ToSchema;
use validator::Validate;

use crate::pagination::PageInfo;

/// Full book model from database
#[derive(Debug, Clone, Serialize, Deserialize, FromRow, ToSchema)]
pub struct Book {
    pub id: i32,
    pub title: String,
    pub author_id: i32,
    pub published_date: NaiveDate,
    pub category: Option<String>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

/// Create/update book request
#[derive(Debug, Deserialize, Validate, ToSchema)]
pub struct BookPayload {
    #[validate(length(min = 1, max = 255))]
    pub title: String,
    #[validate(range(min = 1))]
    pub author_id: i32,
    pub published_date: NaiveDate,
    #[validate(length(max = 100))]
    pub category: Option<String>,
}

/// Paged list of books
#[derive(Debug, Serialize, ToSchema)]
pub struct BooksPage {
    pub books: Vec<Book>,
    pub number_of_books: i64,
    #[serde(flatten)]
    pub page: PageInfo,
}
