//! Admin users repository for authentication lookups

use sqlx::{Pool, Postgres};

use crate::{error::AppResult, models::user::AdminUser};

#[derive(Clone)]
pub struct AdminUsersRepository {
    pool: Pool<Postgres>,
}

impl AdminUsersRepository {
    pub fn new(pool: Pool<Postgres>) -> Self {
        Self { pool }
    }

    /// Get an admin account by login, if present
    pub async fn get_by_login(&self, login: &str) -> AppResult<Option<AdminUser>> {
        let admin = sqlx::query_as::<_, AdminUser>(
            "SELECT id, login, password_hash FROM admin_users WHERE login = $1",
        )
        .bind(login)
        .fetch_optional(&self.pool)
        .await?;

        Ok(admin)
    }
}
