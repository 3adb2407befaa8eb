//! Business logic services

pub mod auth;
pub mod authors;
pub mod books;
pub mod reservations;
pub mod stocks;
pub mod users;

use std::sync::Arc;

use crate::{error::AppResult, repository::status_catalog::StatusCatalog, repository::Repository};

/// Container for all services
#[derive(Clone)]
pub struct Services {
    pub repository: Repository,
    pub auth: auth::AuthService,
    pub authors: authors::AuthorsService,
    pub books: books::BooksService,
    pub users: users::UsersService,
    pub stocks: stocks::StocksService,
    pub reservations: reservations::ReservationsService,
}

impl Services {
    /// Create all services with the given repository. Loads the reservation
    /// status catalog once; every service that needs it holds a shared
    /// reference.
    pub async fn new(repository: Repository) -> AppResult<Self> {
        let catalog = Arc::new(StatusCatalog::load(repository.pool.clone()).await?);

        Ok(Self {
            auth: auth::AuthService::new(repository.clone()),
            authors: authors::AuthorsService::new(repository.clone()),
            books: books::BooksService::new(repository.clone()),
            users: users::UsersService::new(repository.clone()),
            stocks: stocks::StocksService::new(repository.clone()),
            reservations: reservations::ReservationsService::new(repository.clone(), catalog),
            repository,
        })
    }
}
