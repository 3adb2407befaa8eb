//! OpenAPI documentation

use axum::Router;
use utoipa::{
    openapi::security::{HttpAuthScheme, HttpBuilder, SecurityScheme},
    Modify, OpenApi,
};
use utoipa_swagger_ui::SwaggerUi;

use crate::api::{authors, books, health, reservations, stocks, users};

#[derive(OpenApi)]
#[openapi(
    info(
        title = "Libraria API",
        version = "1.0.0",
        description = "Municipal library management REST API: authors, books, users, stock and book loans",
        license(name = "AGPL-3.0", url = "https://www.gnu.org/licenses/agpl-3.0.html")
    ),
    servers(
        (url = "/api/v1", description = "API v1")
    ),
    modifiers(&SecurityAddon),
    paths(
        // Health
        health::health_check,
        health::readiness_check,
        // Authors
        authors::list_authors,
        authors::get_author,
        authors::create_author,
        authors::update_author,
        authors::delete_author,
        // Books
        books::list_books,
        books::get_book,
        books::create_book,
        books::update_book,
        books::delete_book,
        // Users
        users::list_users,
        users::get_user,
        users::create_user,
        users::update_user,
        // Stocks
        stocks::list_stocks,
        stocks::get_stock,
        stocks::create_stock,
        stocks::add_stock_quantity,
        // Reservations
        reservations::list_reservations,
        reservations::get_reservation,
        reservations::create_reservation,
        reservations::return_reservation,
    ),
    components(
        schemas(
            // Authors
            crate::models::author::Author,
            crate::models::author::AuthorPayload,
            crate::models::author::AuthorsPage,
            // Books
            crate::models::book::Book,
            crate::models::book::BookPayload,
            crate::models::book::BooksPage,
            // Users
            crate::models::user::User,
            crate::models::user::UserPayload,
            crate::models::user::UsersPage,
            // Stocks
            crate::models::stock::StockPayload,
            crate::models::stock::StockQuantityAdd,
            crate::models::stock::StockDetails,
            crate::models::stock::StocksPage,
            // Reservations
            crate::models::reservation::ReservationStatus,
            crate::models::reservation::ReservationRequest,
            crate::models::reservation::ReservationDetails,
            crate::models::reservation::ReservationsPage,
            // Shared
            crate::pagination::PageInfo,
            // Health
            health::HealthResponse,
            // Errors
            crate::error::ErrorResponse,
        )
    ),
    tags(
        (name = "health", description = "Health check endpoints"),
        (name = "authors", description = "Author management"),
        (name = "books", description = "Book catalog management"),
        (name = "users", description = "Library member management"),
        (name = "stocks", description = "Stock management"),
        (name = "reservations", description = "Book loan management")
    )
)]
pub struct ApiDoc;

struct SecurityAddon;

impl Modify for SecurityAddon {
    fn modify(&self, openapi: &mut utoipa::openapi::OpenApi) {
        if let Some(components) = openapi.components.as_mut() {
            components.add_security_scheme(
                "basic_auth",
                SecurityScheme::Http(HttpBuilder::new().scheme(HttpAuthScheme::Basic).build()),
            );
        }
    }
}

/// Create the OpenAPI documentation router
pub fn create_openapi_router() -> Router {
    Router::new()
        .merge(SwaggerUi::new("/swagger-ui").url("/api-docs/openapi.json", ApiDoc::openapi()))
}
