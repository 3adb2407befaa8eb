//! Author model and related types

use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use utoipa::ToSchema;
use validator::Validate;

use crate::pagination::PageInfo;

/// Full author model from database
#[derive(Debug, Clone, Serialize, Deserialize, FromRow, ToSchema)]
pub struct Author {
    pub id: i32,
    pub first_name: String,
    pub last_name: String,
    pub birth_date: NaiveDate,
    /// ISO 3166-1 alpha-3 country code
    pub nationality: Option<String>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

/// Create/update author request
#[derive(Debug, Deserialize, Validate, ToSchema)]
pub struct AuthorPayload {
    #[validate(length(min = 1, max = 100))]
    pub first_name: String,
    #[validate(length(min = 1, max = 100))]
    pub last_name: String,
    pub birth_date: NaiveDate,
    #[validate(length(equal = 3))]
    pub nationality: Option<String>,
}

/// Paged list of authors
#[derive(Debug, Serialize, ToSchema)]
pub struct AuthorsPage {
    pub authors: Vec<Author>,
    pub number_of_authors: i64,
    #[serde(flatten)]
    pub page: PageInfo,
}
