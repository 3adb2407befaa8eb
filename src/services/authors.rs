//! Author management service

use crate::{
    error::{AppError, AppResult},
    models::author::{Author, AuthorPayload, AuthorsPage},
    pagination::pagination_details,
    repository::Repository,
};

#[derive(Clone)]
pub struct AuthorsService {
    repository: Repository,
}

impl AuthorsService {
    pub fn new(repository: Repository) -> Self {
        Self { repository }
    }

    pub async fn create(&self, author: AuthorPayload) -> AppResult<Author> {
        self.repository.authors.create(&author).await
    }

    pub async fn get(&self, author_id: i32) -> AppResult<Author> {
        self.repository.authors.get_by_id(author_id).await
    }

    pub async fn update(&self, author_id: i32, author: AuthorPayload) -> AppResult<Author> {
        self.repository.authors.update(author_id, &author).await
    }

    /// List authors with pagination
    pub async fn list(&self, skip: i64, limit: i64) -> AppResult<AuthorsPage> {
        let count = self.repository.authors.count().await?;
        let authors = self.repository.authors.list(skip, limit).await?;

        Ok(AuthorsPage {
            authors,
            number_of_authors: count,
            page: pagination_details(skip, limit, count),
        })
    }

    /// Delete an author and all of their books. Refused while any of the
    /// books still owns a stock row; the check runs before any mutation so
    /// the delete is all-or-nothing. Deleting an unknown id is a no-op.
    pub async fn delete(&self, author_id: i32) -> AppResult<()> {
        match self.repository.authors.get_by_id(author_id).await {
            Ok(_) => {}
            Err(AppError::NotFound(_)) => return Ok(()),
            Err(e) => return Err(e),
        }

        if self.repository.stocks.exists_for_author(author_id).await? {
            return Err(AppError::Forbidden(
                "Author's books present in the stocks".to_string(),
            ));
        }

        self.repository.authors.delete_with_books(author_id).await
    }
}
