//! Data models for Libraria

pub mod author;
pub mod book;
pub mod reservation;
pub mod stock;
pub mod user;

// Re-export commonly used types
pub use author::Author;
pub use book::Book;
pub use reservation::{Reservation, ReservationDetails, ReservationStatus};
pub use stock::Stock;
pub use user::User;
