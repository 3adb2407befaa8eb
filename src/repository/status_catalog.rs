//! Reservation status catalog.
//!
//! The `reservation_status` table is seeded by migration and append-only for
//! the lifetime of a process, so the name<->id mapping is loaded once at
//! startup and served from memory. The catalog is constructed explicitly and
//! handed to the reservation engine by reference; `refresh` exists for test
//! setups that rebuild the database underneath a running process.

use std::collections::HashMap;

use sqlx::{Pool, Postgres, Row};
use tokio::sync::RwLock;

use crate::{
    error::{AppError, AppResult},
    models::reservation::ReservationStatus,
};

#[derive(Default)]
struct Entries {
    id_by_status: HashMap<ReservationStatus, i32>,
    status_by_id: HashMap<i32, ReservationStatus>,
}

pub struct StatusCatalog {
    pool: Pool<Postgres>,
    entries: RwLock<Entries>,
}

impl StatusCatalog {
    /// Load the catalog from the database
    pub async fn load(pool: Pool<Postgres>) -> AppResult<Self> {
        let entries = Self::fetch(&pool).await?;
        Ok(Self {
            pool,
            entries: RwLock::new(entries),
        })
    }

    /// Rebuild the cached mapping from the table. Only used at controlled
    /// points (process start, test database reset).
    pub async fn refresh(&self) -> AppResult<()> {
        let entries = Self::fetch(&self.pool).await?;
        *self.entries.write().await = entries;
        Ok(())
    }

    async fn fetch(pool: &Pool<Postgres>) -> AppResult<Entries> {
        let rows = sqlx::query("SELECT id, name FROM reservation_status")
            .fetch_all(pool)
            .await?;

        let mut entries = Entries::default();
        for row in rows {
            let id: i32 = row.get("id");
            let name: String = row.get("name");
            match ReservationStatus::from_name(&name) {
                Some(status) => {
                    entries.id_by_status.insert(status, id);
                    entries.status_by_id.insert(id, status);
                }
                None => {
                    tracing::warn!("Unknown reservation status '{}' in catalog, skipping", name);
                }
            }
        }

        Ok(entries)
    }

    /// Resolve a status to its persisted id. A miss means the catalog seed is
    /// broken, which is a deployment fault rather than a user error.
    pub async fn id_of(&self, status: ReservationStatus) -> AppResult<i32> {
        self.entries
            .read()
            .await
            .id_by_status
            .get(&status)
            .copied()
            .ok_or_else(|| {
                AppError::Internal(format!(
                    "Reservation status '{}' missing from the catalog",
                    status
                ))
            })
    }

    /// Resolve a persisted id back to its status
    pub async fn status_of(&self, id: i32) -> AppResult<ReservationStatus> {
        self.entries
            .read()
            .await
            .status_by_id
            .get(&id)
            .copied()
            .ok_or_else(|| {
                AppError::Internal(format!(
                    "Reservation status id {} missing from the catalog",
                    id
                ))
            })
    }
}
