//! HTTP Basic authentication against the admin_users table

use sha2::{Digest, Sha256};

use crate::{
    error::{AppError, AppResult},
    repository::Repository,
};

#[derive(Clone)]
pub struct AuthService {
    repository: Repository,
}

impl AuthService {
    pub fn new(repository: Repository) -> Self {
        Self { repository }
    }

    /// Check a login/password pair against the stored digest. Unknown logins
    /// and wrong passwords produce the same error.
    pub async fn verify_credentials(&self, login: &str, password: &str) -> AppResult<()> {
        let admin = self
            .repository
            .admin_users
            .get_by_login(login)
            .await?
            .ok_or_else(|| {
                AppError::Authentication("Incorrect username or password".to_string())
            })?;

        if hash_password(password) != admin.password_hash {
            return Err(AppError::Authentication(
                "Incorrect username or password".to_string(),
            ));
        }

        Ok(())
    }
}

/// SHA-256 hex digest of a plain-text password
pub fn hash_password(password: &str) -> String {
    let mut hasher = Sha256::new();
    hasher.update(password.as_bytes());
    hex::encode(hasher.finalize())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn digest_is_stable_sha256_hex() {
        assert_eq!(
            hash_password("admin"),
            "8c6976e5b5410415bde908bd4dee15dfb167a9c873fc4bb8a81f6f2ab448a918"
        );
    }

    #[test]
    fn different_passwords_differ() {
        assert_ne!(hash_password("admin"), hash_password("admin1"));
    }
}
