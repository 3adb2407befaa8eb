//! User (library member) management service

use crate::{
    error::AppResult,
    models::user::{User, UserPayload, UsersPage},
    pagination::pagination_details,
    repository::Repository,
};

#[derive(Clone)]
pub struct UsersService {
    repository: Repository,
}

impl UsersService {
    pub fn new(repository: Repository) -> Self {
        Self { repository }
    }

    pub async fn create(&self, user: UserPayload) -> AppResult<User> {
        self.repository.users.create(&user).await
    }

    pub async fn get(&self, user_id: i32) -> AppResult<User> {
        self.repository.users.get_by_id(user_id).await
    }

    pub async fn update(&self, user_id: i32, user: UserPayload) -> AppResult<User> {
        self.repository.users.update(user_id, &user).await
    }

    /// List users with pagination
    pub async fn list(&self, skip: i64, limit: i64) -> AppResult<UsersPage> {
        let count = self.repository.users.count().await?;
        let users = self.repository.users.list(skip, limit).await?;

        Ok(UsersPage {
            users,
            number_of_users: count,
            page: pagination_details(skip, limit, count),
        })
    }
}
