//! Reservation engine: the loan state machine.
//!
//! A reservation moves CONFIRMED -> RETURNED, decrementing the book's stock
//! on the way in and incrementing it on the way out. The two mutations of
//! each step (stock row, reservation row) commit in a single transaction.
//! Eligibility checks run before the transaction in a fixed order, since the
//! order decides which error a caller sees; the stock decrement itself is a
//! guarded atomic update, so the quantity precondition is advisory only and
//! the last copy cannot be handed out twice.

use std::sync::Arc;

use chrono::{Duration, Utc};

use crate::{
    error::{AppError, AppResult},
    models::reservation::{
        Reservation, ReservationDetails, ReservationRequest, ReservationStatus, ReservationsPage,
    },
    pagination::pagination_details,
    repository::{status_catalog::StatusCatalog, Repository},
};

/// Loan period: fixed policy, due date = borrowed_at + 15 days
const LOAN_PERIOD_DAYS: i64 = 15;

#[derive(Clone)]
pub struct ReservationsService {
    repository: Repository,
    catalog: Arc<StatusCatalog>,
}

impl ReservationsService {
    pub fn new(repository: Repository, catalog: Arc<StatusCatalog>) -> Self {
        Self {
            repository,
            catalog,
        }
    }

    /// Reserve a book for a user
    pub async fn reserve(&self, request: ReservationRequest) -> AppResult<ReservationDetails> {
        // Precondition order is part of the contract: user, active loan,
        // stock row, quantity.
        self.repository.users.get_by_id(request.user_id).await?;

        if let Some(active) = self
            .repository
            .reservations
            .find_active(request.user_id, request.book_id)
            .await?
        {
            return Err(AppError::Reservation(format!(
                "Book already borrowed book_id={} and due date {}",
                request.book_id, active.due_date
            )));
        }

        let stock = self.repository.stocks.get_by_book_id(request.book_id).await?;
        if stock.stock_quantity <= 0 {
            return Err(not_available(request.book_id));
        }

        let status_id = self.catalog.id_of(ReservationStatus::Confirmed).await?;

        // One timestamp for both the row and the response
        let borrowed_at = Utc::now();
        let due_date = borrowed_at + Duration::days(LOAN_PERIOD_DAYS);

        let mut tx = self.repository.pool.begin().await?;

        // The advisory quantity check above may be stale by now; the guarded
        // decrement is what actually protects the last copy.
        if !self
            .repository
            .stocks
            .reserve_copy(&mut *tx, request.book_id)
            .await?
        {
            tx.rollback().await?;
            return Err(not_available(request.book_id));
        }

        let id = self
            .repository
            .reservations
            .insert(
                &mut *tx,
                request.book_id,
                request.user_id,
                status_id,
                borrowed_at,
                due_date,
            )
            .await?;

        tx.commit().await?;

        tracing::info!(
            reservation_id = id,
            book_id = request.book_id,
            user_id = request.user_id,
            "Book reserved"
        );

        Ok(ReservationDetails {
            id,
            book_id: request.book_id,
            user_id: request.user_id,
            status: ReservationStatus::Confirmed,
            borrowed_at,
            due_date,
            return_date: None,
        })
    }

    /// Return a borrowed book. The (reservation, user, book) triple must
    /// jointly identify one active reservation; a nonexistent id, mismatched
    /// ids and an already returned loan all surface the same error.
    pub async fn return_book(
        &self,
        reservation_id: i32,
        request: ReservationRequest,
    ) -> AppResult<ReservationDetails> {
        let reservation = self
            .repository
            .reservations
            .find_active_exact(reservation_id, request.user_id, request.book_id)
            .await?
            .ok_or_else(|| {
                AppError::Reservation(format!(
                    "Book not borrowed or user not found book_id={}, user_id={}",
                    request.book_id, request.user_id
                ))
            })?;

        // Unreachable while stock rows are never deleted for reserved books
        self.repository.stocks.get_by_book_id(request.book_id).await?;

        let status_id = self.catalog.id_of(ReservationStatus::Returned).await?;
        let returned_at = Utc::now();

        let mut tx = self.repository.pool.begin().await?;

        if !self
            .repository
            .stocks
            .release_copy(&mut *tx, request.book_id)
            .await?
        {
            tx.rollback().await?;
            return Err(AppError::NotFound(format!(
                "Stock for book with id {} not found",
                request.book_id
            )));
        }

        // The active check above ran outside the transaction; the guarded
        // update is what keeps a concurrent duplicate return from closing
        // the loan twice and inflating the stock.
        if !self
            .repository
            .reservations
            .mark_returned(&mut *tx, reservation.id, status_id, returned_at)
            .await?
        {
            tx.rollback().await?;
            return Err(AppError::Reservation(format!(
                "Book not borrowed or user not found book_id={}, user_id={}",
                request.book_id, request.user_id
            )));
        }

        tx.commit().await?;

        tracing::info!(
            reservation_id = reservation.id,
            book_id = request.book_id,
            user_id = request.user_id,
            "Book returned"
        );

        Ok(ReservationDetails {
            id: reservation.id,
            book_id: reservation.book_id,
            user_id: reservation.user_id,
            status: ReservationStatus::Returned,
            borrowed_at: reservation.borrowed_at,
            due_date: reservation.due_date,
            return_date: Some(returned_at),
        })
    }

    /// Get a reservation by id
    pub async fn get(&self, reservation_id: i32) -> AppResult<ReservationDetails> {
        let reservation = self.repository.reservations.get_by_id(reservation_id).await?;
        self.to_details(reservation).await
    }

    /// List reservations with pagination
    pub async fn list(&self, skip: i64, limit: i64) -> AppResult<ReservationsPage> {
        let count = self.repository.reservations.count().await?;
        let rows = self.repository.reservations.list(skip, limit).await?;

        let mut reservations = Vec::with_capacity(rows.len());
        for reservation in rows {
            reservations.push(self.to_details(reservation).await?);
        }

        Ok(ReservationsPage {
            reservations,
            number_of_reservations: count,
            page: pagination_details(skip, limit, count),
        })
    }

    async fn to_details(&self, reservation: Reservation) -> AppResult<ReservationDetails> {
        let status = self.catalog.status_of(reservation.status_id).await?;
        Ok(ReservationDetails {
            id: reservation.id,
            book_id: reservation.book_id,
            user_id: reservation.user_id,
            status,
            borrowed_at: reservation.borrowed_at,
            due_date: reservation.due_date,
            return_date: reservation.returned_at,
        })
    }
}

fn not_available(book_id: i32) -> AppError {
    AppError::Reservation(format!(
        "Book with id {} not available for reservation",
        book_id
    ))
}
