//! Reservation (book loan) model and related types

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use utoipa::ToSchema;
use validator::Validate;

use crate::pagination::PageInfo;

/// Fixed reservation status catalog. PENDING and CANCELED are seeded but no
/// current flow produces them; the state machine only moves
/// CONFIRMED -> RETURNED.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "lowercase")]
pub enum ReservationStatus {
    Pending,
    Confirmed,
    Canceled,
    Returned,
}

impl ReservationStatus {
    /// Catalog name as persisted in the `reservation_status` table
    pub fn as_str(&self) -> &'static str {
        match self {
            ReservationStatus::Pending => "pending",
            ReservationStatus::Confirmed => "confirmed",
            ReservationStatus::Canceled => "canceled",
            ReservationStatus::Returned => "returned",
        }
    }

    pub fn from_name(name: &str) -> Option<Self> {
        match name {
            "pending" => Some(ReservationStatus::Pending),
            "confirmed" => Some(ReservationStatus::Confirmed),
            "canceled" => Some(ReservationStatus::Canceled),
            "returned" => Some(ReservationStatus::Returned),
            _ => None,
        }
    }
}

impl std::fmt::Display for ReservationStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Reservation row from database
#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct Reservation {
    pub id: i32,
    pub book_id: i32,
    pub user_id: i32,
    pub status_id: i32,
    pub borrowed_at: DateTime<Utc>,
    pub due_date: DateTime<Utc>,
    pub returned_at: Option<DateTime<Utc>>,
}

/// Reserve/return request body
#[derive(Debug, Clone, Copy, Deserialize, Validate, ToSchema)]
pub struct ReservationRequest {
    #[validate(range(min = 1))]
    pub book_id: i32,
    #[validate(range(min = 1))]
    pub user_id: i32,
}

/// Reservation with its status rendered as the catalog name
#[derive(Debug, Clone, Serialize, ToSchema)]
pub struct ReservationDetails {
    pub id: i32,
    pub book_id: i32,
    pub user_id: i32,
    pub status: ReservationStatus,
    pub borrowed_at: DateTime<Utc>,
    pub due_date: DateTime<Utc>,
    pub return_date: Option<DateTime<Utc>>,
}

/// Paged list of reservations
#[derive(Debug, Serialize, ToSchema)]
pub struct ReservationsPage {
    pub reservations: Vec<ReservationDetails>,
    pub number_of_reservations: i64,
    #[serde(flatten)]
    pub page: PageInfo,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn status_names_round_trip() {
        for status in [
            ReservationStatus::Pending,
            ReservationStatus::Confirmed,
            ReservationStatus::Canceled,
            ReservationStatus::Returned,
        ] {
            assert_eq!(ReservationStatus::from_name(status.as_str()), Some(status));
        }
        assert_eq!(ReservationStatus::from_name("archived"), None);
    }

    #[test]
    fn status_serializes_as_lowercase_name() {
        let json = serde_json::to_string(&ReservationStatus::Confirmed).unwrap();
        assert_eq!(json, "\"confirmed\"");
    }
}
