//! API handlers for Libraria REST endpoints

pub mod authors;
pub mod books;
pub mod health;
pub mod openapi;
pub mod reservations;
pub mod stocks;
pub mod users;

use axum::{
    async_trait,
    extract::FromRequestParts,
    http::{header::AUTHORIZATION, request::Parts},
};
use base64::Engine;

use crate::{error::AppError, AppState};

/// Extractor enforcing HTTP Basic authentication. When basic auth is disabled
/// in configuration the extractor succeeds without credentials.
pub struct BasicAuth;

#[async_trait]
impl FromRequestParts<AppState> for BasicAuth {
    type Rejection = AppError;

    async fn from_request_parts(parts: &mut Parts, state: &AppState) -> Result<Self, Self::Rejection> {
        if !state.config.auth.basic_enabled {
            return Ok(BasicAuth);
        }

        let auth_header = parts
            .headers
            .get(AUTHORIZATION)
            .and_then(|value| value.to_str().ok())
            .ok_or_else(|| AppError::Authentication("Missing authorization header".to_string()))?;

        let encoded = auth_header.strip_prefix("Basic ").ok_or_else(|| {
            AppError::Authentication("Invalid authorization header format".to_string())
        })?;

        let decoded = base64::engine::general_purpose::STANDARD
            .decode(encoded)
            .map_err(|_| AppError::Authentication("Invalid basic auth encoding".to_string()))?;
        let credentials = String::from_utf8(decoded)
            .map_err(|_| AppError::Authentication("Invalid basic auth encoding".to_string()))?;

        let (login, password) = credentials.split_once(':').ok_or_else(|| {
            AppError::Authentication("Invalid basic auth credentials".to_string())
        })?;

        state.services.auth.verify_credentials(login, password).await?;

        Ok(BasicAuth)
    }
}
