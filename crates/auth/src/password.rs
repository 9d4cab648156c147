//! Password hashing
//!
//! bcrypt is CPU-bound, so hashing and verification run on the blocking pool.

use recipegen_core::validation::Validator;
use recipegen_core::{Error, Result};

/// Shortest accepted password
pub const MIN_PASSWORD_LEN: usize = 8;

/// bcrypt work factor for new hashes
pub const DEFAULT_COST: u32 = 10;

/// Check sign-up input: a plausible email and a long enough password
pub fn validate_credentials(email: &str, password: &str) -> Result<()> {
    Validator::new()
        .required("email", email)
        .email("email", email)
        .min_length("password", password, MIN_PASSWORD_LEN)
        .validate()
        .to_result()
}

/// Hash a password with the given bcrypt cost
pub async fn hash_password(password: &str, cost: u32) -> Result<String> {
    let password = password.to_owned();
    tokio::task::spawn_blocking(move || bcrypt::hash(password, cost))
        .await
        .map_err(|e| Error::internal(format!("Password hashing task failed: {e}")))?
        .map_err(|e| Error::internal(format!("Password hashing failed: {e}")))
}

/// True if `password` matches `hash`
pub async fn verify_password(password: &str, hash: &str) -> Result<bool> {
    let password = password.to_owned();
    let hash = hash.to_owned();
    tokio::task::spawn_blocking(move || bcrypt::verify(password, &hash))
        .await
        .map_err(|e| Error::internal(format!("Password verification task failed: {e}")))?
        .map_err(|e| Error::internal(format!("Password verification failed: {e}")))
}

#[cfg(test)]
mod tests {
    use super::*;

    const TEST_COST: u32 = 4;

    #[tokio::test]
    async fn test_hash_and_verify() {
        let hash = hash_password("correct horse", TEST_COST).await.unwrap();
        assert!(hash.starts_with("$2"));
        assert!(verify_password("correct horse", &hash).await.unwrap());
        assert!(!verify_password("battery staple", &hash).await.unwrap());
    }

    #[tokio::test]
    async fn test_malformed_hash_is_error() {
        assert!(verify_password("anything", "not-a-hash").await.is_err());
    }

    #[test]
    fn test_validate_credentials() {
        assert!(validate_credentials("cook@example.com", "longenough").is_ok());
        assert!(validate_credentials("cook@example.com", "short").is_err());
        assert!(validate_credentials("not-an-email", "longenough").is_err());
        assert!(validate_credentials("", "longenough").is_err());
    }
}
