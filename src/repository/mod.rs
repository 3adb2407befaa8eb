//! Repository layer for database operations

pub mod admin_users;
pub mod authors;
pub mod books;
pub mod reservations;
pub mod status_catalog;
pub mod stocks;
pub mod users;

use sqlx::{Pool, Postgres};

/// Main repository struct holding database connection pool
#[derive(Clone)]
pub struct Repository {
    pub pool: Pool<Postgres>,
    pub authors: authors::AuthorsRepository,
    pub books: books::BooksRepository,
    pub users: users::UsersRepository,
    pub stocks: stocks::StocksRepository,
    pub reservations: reservations::ReservationsRepository,
    pub admin_users: admin_users::AdminUsersRepository,
}

impl Repository {
    /// Create a new repository with the given database pool
    pub fn new(pool: Pool<Postgres>) -> Self {
        Self {
            authors: authors::AuthorsRepository::new(pool.clone()),
            books: books::BooksRepository::new(pool.clone()),
            users: users::UsersRepository::new(pool.clone()),
            stocks: stocks::StocksRepository::new(pool.clone()),
            reservations: reservations::ReservationsRepository::new(pool.clone()),
            admin_users: admin_users::AdminUsersRepository::new(pool.clone()),
            pool,
        }
    }
}
