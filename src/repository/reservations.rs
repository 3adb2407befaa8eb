//! Reservations repository for database operations

use chrono::{DateTime, Utc};
use sqlx::{PgExecutor, Pool, Postgres};

use crate::{
    error::{AppError, AppResult},
    models::reservation::Reservation,
};

/// Name of the partial unique index enforcing one active reservation per
/// (book, user) pair. Insert conflicts on it are reported as the same
/// "already borrowed" rule violation the advisory read-check produces.
const ACTIVE_RESERVATION_IDX: &str = "uq_active_reservation_per_user_book";

#[derive(Clone)]
pub struct ReservationsRepository {
    pool: Pool<Postgres>,
}

impl ReservationsRepository {
    pub fn new(pool: Pool<Postgres>) -> Self {
        Self { pool }
    }

    /// Get reservation by ID
    pub async fn get_by_id(&self, id: i32) -> AppResult<Reservation> {
        sqlx::query_as::<_, Reservation>("SELECT * FROM reservations WHERE id = $1")
            .bind(id)
            .fetch_optional(&self.pool)
            .await?
            .ok_or_else(|| AppError::NotFound(format!("Reservation with id {} not found", id)))
    }

    /// Find the active (not yet returned) reservation for a (user, book) pair
    pub async fn find_active(
        &self,
        user_id: i32,
        book_id: i32,
    ) -> AppResult<Option<Reservation>> {
        let reservation = sqlx::query_as::<_, Reservation>(
            r#"
            SELECT * FROM reservations
            WHERE user_id = $1 AND book_id = $2 AND returned_at IS NULL
            "#,
        )
        .bind(user_id)
        .bind(book_id)
        .fetch_optional(&self.pool)
        .await?;

        Ok(reservation)
    }

    /// Find an active reservation matching the full (id, user, book) triple.
    /// A nonexistent id, a mismatched pair and an already returned loan all
    /// come back as None.
    pub async fn find_active_exact(
        &self,
        reservation_id: i32,
        user_id: i32,
        book_id: i32,
    ) -> AppResult<Option<Reservation>> {
        let reservation = sqlx::query_as::<_, Reservation>(
            r#"
            SELECT * FROM reservations
            WHERE id = $1 AND user_id = $2 AND book_id = $3 AND returned_at IS NULL
            "#,
        )
        .bind(reservation_id)
        .bind(user_id)
        .bind(book_id)
        .fetch_optional(&self.pool)
        .await?;

        Ok(reservation)
    }

    /// Insert a new reservation row and return its assigned id
    pub async fn insert<'e>(
        &self,
        executor: impl PgExecutor<'e>,
        book_id: i32,
        user_id: i32,
        status_id: i32,
        borrowed_at: DateTime<Utc>,
        due_date: DateTime<Utc>,
    ) -> AppResult<i32> {
        let id = sqlx::query_scalar::<_, i32>(
            r#"
            INSERT INTO reservations (book_id, user_id, status_id, borrowed_at, due_date, returned_at)
            VALUES ($1, $2, $3, $4, $5, NULL)
            RETURNING id
            "#,
        )
        .bind(book_id)
        .bind(user_id)
        .bind(status_id)
        .bind(borrowed_at)
        .bind(due_date)
        .fetch_one(executor)
        .await
        .map_err(|e| {
            if let sqlx::Error::Database(db) = &e {
                if db.constraint() == Some(ACTIVE_RESERVATION_IDX) {
                    return AppError::Reservation(format!(
                        "Book already borrowed book_id={} by user_id={}",
                        book_id, user_id
                    ));
                }
            }
            AppError::Database(e)
        })?;

        Ok(id)
    }

    /// Close a reservation: stamp the return time and flip the status.
    /// Guarded on `returned_at IS NULL` so a loan can only be closed once;
    /// returns false when the reservation was already returned by a
    /// concurrent request.
    pub async fn mark_returned<'e>(
        &self,
        executor: impl PgExecutor<'e>,
        reservation_id: i32,
        status_id: i32,
        returned_at: DateTime<Utc>,
    ) -> AppResult<bool> {
        let result = sqlx::query(
            r#"
            UPDATE reservations
            SET returned_at = $2, status_id = $3
            WHERE id = $1 AND returned_at IS NULL
            "#,
        )
        .bind(reservation_id)
        .bind(returned_at)
        .bind(status_id)
        .execute(executor)
        .await?;

        Ok(result.rows_affected() == 1)
    }

    /// Count all reservations
    pub async fn count(&self) -> AppResult<i64> {
        let count: i64 = sqlx::query_scalar("SELECT COUNT(*) FROM reservations")
            .fetch_one(&self.pool)
            .await?;
        Ok(count)
    }

    /// List reservations ordered by id with pagination
    pub async fn list(&self, offset: i64, limit: i64) -> AppResult<Vec<Reservation>> {
        let reservations = sqlx::query_as::<_, Reservation>(
            "SELECT * FROM reservations ORDER BY id LIMIT $1 OFFSET $2",
        )
        .bind(limit)
        .bind(offset)
        .fetch_all(&self.pool)
        .await?;

        Ok(reservations)
    }
}
