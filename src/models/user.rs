//! User (library member) model and related types

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use utoipa::ToSchema;
use validator::Validate;

use crate::pagination::PageInfo;

/// Full user model from database
#[derive(Debug, Clone, Serialize, Deserialize, FromRow, ToSchema)]
pub struct User {
    pub id: i32,
    pub first_name: String,
    pub last_name: String,
    pub email: String,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

/// Create/update user request
#[derive(Debug, Deserialize, Validate, ToSchema)]
pub struct UserPayload {
    #[validate(length(min = 1, max = 100))]
    pub first_name: String,
    #[validate(length(min = 1, max = 100))]
    pub last_name: String,
    #[validate(email)]
    pub email: String,
}

/// Paged list of users
#[derive(Debug, Serialize, ToSchema)]
pub struct UsersPage {
    pub users: Vec<User>,
    pub number_of_users: i64,
    #[serde(flatten)]
    pub page: PageInfo,
}

/// Administrative account used for HTTP Basic authentication
#[derive(Debug, Clone, FromRow)]
pub struct AdminUser {
    pub id: i32,
    pub login: String,
    /// SHA-256 hex digest of the password
    pub password_hash: String,
}
