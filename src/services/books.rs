//! Book management service

use crate::{
    error::{AppError, AppResult},
    models::book::{Book, BookPayload, BooksPage},
    pagination::pagination_details,
    repository::Repository,
};

#[derive(Clone)]
pub struct BooksService {
    repository: Repository,
}

impl BooksService {
    pub fn new(repository: Repository) -> Self {
        Self { repository }
    }

    pub async fn create(&self, book: BookPayload) -> AppResult<Book> {
        self.repository.books.create(&book).await
    }

    pub async fn get(&self, book_id: i32) -> AppResult<Book> {
        self.repository.books.get_by_id(book_id).await
    }

    pub async fn update(&self, book_id: i32, book: BookPayload) -> AppResult<Book> {
        self.repository.books.update(book_id, &book).await
    }

    /// List books with pagination
    pub async fn list(&self, skip: i64, limit: i64) -> AppResult<BooksPage> {
        let count = self.repository.books.count().await?;
        let books = self.repository.books.list(skip, limit).await?;

        Ok(BooksPage {
            books,
            number_of_books: count,
            page: pagination_details(skip, limit, count),
        })
    }

    /// Delete a book. Refused while the book still owns a stock row.
    /// Deleting an unknown id is a no-op.
    pub async fn delete(&self, book_id: i32) -> AppResult<()> {
        match self.repository.books.get_by_id(book_id).await {
            Ok(_) => {}
            Err(AppError::NotFound(_)) => return Ok(()),
            Err(e) => return Err(e),
        }

        if self.repository.stocks.exists_for_book(book_id).await? {
            return Err(AppError::Forbidden(
                "Book present in the stocks".to_string(),
            ));
        }

        self.repository.books.delete(book_id).await
    }
}
