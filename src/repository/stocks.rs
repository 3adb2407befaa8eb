//! Stocks repository: the ledger of available copies per book.
//!
//! All quantity mutations are expressed as single guarded UPDATE statements
//! with rows-affected feedback, so concurrent reservations can never drive a
//! quantity below zero. In-process read-modify-write of a stock row is
//! deliberately absent from this module.

use sqlx::{PgExecutor, Pool, Postgres};

use crate::{
    error::{AppError, AppResult},
    models::stock::{Stock, StockDetails, StockPayload},
};

#[derive(Clone)]
pub struct StocksRepository {
    pool: Pool<Postgres>,
}

impl StocksRepository {
    pub fn new(pool: Pool<Postgres>) -> Self {
        Self { pool }
    }

    /// Get the stock row owned by a book
    pub async fn get_by_book_id(&self, book_id: i32) -> AppResult<Stock> {
        sqlx::query_as::<_, Stock>("SELECT * FROM stocks WHERE book_id = $1")
            .bind(book_id)
            .fetch_optional(&self.pool)
            .await?
            .ok_or_else(|| {
                AppError::NotFound(format!("Stock for book with id {} not found", book_id))
            })
    }

    /// Get stock details joined with the owning book
    pub async fn get_details_by_book_id(&self, book_id: i32) -> AppResult<StockDetails> {
        sqlx::query_as::<_, StockDetails>(
            r#"
            SELECT s.id, s.book_id, s.stock_quantity, b.title, b.category
            FROM stocks s
            JOIN books b ON s.book_id = b.id
            WHERE s.book_id = $1
            "#,
        )
        .bind(book_id)
        .fetch_optional(&self.pool)
        .await?
        .ok_or_else(|| AppError::NotFound(format!("Stock for book with id {} not found", book_id)))
    }

    /// Provision a stock row for a book
    pub async fn create(&self, stock: &StockPayload) -> AppResult<Stock> {
        let created = sqlx::query_as::<_, Stock>(
            r#"
            INSERT INTO stocks (book_id, stock_quantity)
            VALUES ($1, $2)
            RETURNING *
            "#,
        )
        .bind(stock.book_id)
        .bind(stock.stock_quantity)
        .fetch_one(&self.pool)
        .await?;

        Ok(created)
    }

    /// Count all stock rows
    pub async fn count(&self) -> AppResult<i64> {
        let count: i64 = sqlx::query_scalar("SELECT COUNT(*) FROM stocks")
            .fetch_one(&self.pool)
            .await?;
        Ok(count)
    }

    /// List stock details ordered by id with pagination
    pub async fn list_details(&self, offset: i64, limit: i64) -> AppResult<Vec<StockDetails>> {
        let stocks = sqlx::query_as::<_, StockDetails>(
            r#"
            SELECT s.id, s.book_id, s.stock_quantity, b.title, b.category
            FROM stocks s
            JOIN books b ON s.book_id = b.id
            ORDER BY s.id
            LIMIT $1 OFFSET $2
            "#,
        )
        .bind(limit)
        .bind(offset)
        .fetch_all(&self.pool)
        .await?;

        Ok(stocks)
    }

    /// Add copies to an existing stock row as one atomic increment.
    /// Returns NotFound when the book has no stock row.
    pub async fn add_quantity(&self, book_id: i32, quantity: i32) -> AppResult<()> {
        let result = sqlx::query(
            r#"
            UPDATE stocks
            SET stock_quantity = stock_quantity + $2, updated_at = NOW()
            WHERE book_id = $1
            "#,
        )
        .bind(book_id)
        .bind(quantity)
        .execute(&self.pool)
        .await?;

        if result.rows_affected() == 0 {
            return Err(AppError::NotFound(format!(
                "Stock for book with id {} not found",
                book_id
            )));
        }
        Ok(())
    }

    /// Take one copy off the shelf. The `stock_quantity > 0` guard in the
    /// statement is what makes two concurrent reservations of the last copy
    /// safe; returns false when no copy was available (or no stock row
    /// exists).
    pub async fn reserve_copy<'e>(
        &self,
        executor: impl PgExecutor<'e>,
        book_id: i32,
    ) -> AppResult<bool> {
        let result = sqlx::query(
            r#"
            UPDATE stocks
            SET stock_quantity = stock_quantity - 1, updated_at = NOW()
            WHERE book_id = $1 AND stock_quantity > 0
            "#,
        )
        .bind(book_id)
        .execute(executor)
        .await?;

        Ok(result.rows_affected() == 1)
    }

    /// Put one copy back on the shelf. There is no upper bound: returned
    /// copies may exceed any original allotment. Returns false when the book
    /// has no stock row.
    pub async fn release_copy<'e>(
        &self,
        executor: impl PgExecutor<'e>,
        book_id: i32,
    ) -> AppResult<bool> {
        let result = sqlx::query(
            r#"
            UPDATE stocks
            SET stock_quantity = stock_quantity + 1, updated_at = NOW()
            WHERE book_id = $1
            "#,
        )
        .bind(book_id)
        .execute(executor)
        .await?;

        Ok(result.rows_affected() == 1)
    }

    /// Whether a book owns a stock row (deletion guard)
    pub async fn exists_for_book(&self, book_id: i32) -> AppResult<bool> {
        let exists: bool =
            sqlx::query_scalar("SELECT EXISTS(SELECT 1 FROM stocks WHERE book_id = $1)")
                .bind(book_id)
                .fetch_one(&self.pool)
                .await?;
        Ok(exists)
    }

    /// Whether any of an author's books owns a stock row (cascade guard)
    pub async fn exists_for_author(&self, author_id: i32) -> AppResult<bool> {
        let exists: bool = sqlx::query_scalar(
            r#"
            SELECT EXISTS(
                SELECT 1 FROM stocks s
                JOIN books b ON s.book_id = b.id
                WHERE b.author_id = $1
            )
            "#,
        )
        .bind(author_id)
        .fetch_one(&self.pool)
        .await?;
        Ok(exists)
    }
}
