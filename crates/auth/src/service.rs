//! Sign-up, login and request authentication over a [`UserStore`]

use crate::google::GoogleProfile;
use crate::password::{hash_password, validate_credentials, verify_password, DEFAULT_COST};
use crate::session::{bearer_token, Identity, Session};
use crate::token::TokenManager;
use recipegen_core::{Error, ErrorCode, Result};
use recipegen_store::{normalize_email, UserRecord, UserStore};
use std::sync::Arc;
use tracing::{info, instrument, warn};

/// Account operations shared by the server and CLI
#[derive(Clone)]
pub struct Authenticator {
    store: Arc<dyn UserStore>,
    tokens: TokenManager,
    bcrypt_cost: u32,
}

impl Authenticator {
    pub fn new(store: Arc<dyn UserStore>, tokens: TokenManager) -> Self {
        Self {
            store,
            tokens,
            bcrypt_cost: DEFAULT_COST,
        }
    }

    /// Use a different bcrypt work factor for new hashes
    #[must_use]
    pub fn with_bcrypt_cost(mut self, cost: u32) -> Self {
        self.bcrypt_cost = cost;
        self
    }

    pub fn tokens(&self) -> &TokenManager {
        &self.tokens
    }

    /// Register a password account
    #[instrument(skip(self, password))]
    pub async fn sign_up(&self, email: &str, password: &str) -> Result<UserRecord> {
        validate_credentials(email, password)?;

        let email = normalize_email(email);
        if self.store.find_user(&email).await?.is_some() {
            return Err(Error::conflict("User already exists"));
        }

        let hash = hash_password(password, self.bcrypt_cost).await?;
        let user = UserRecord::with_password(&email, hash);
        self.store.insert_user(user.clone()).await?;
        info!(email = %email, "User registered");
        Ok(user)
    }

    /// Check a password and open a session.
    ///
    /// Unknown accounts, OAuth-only accounts and wrong passwords all fail the
    /// same way.
    #[instrument(skip(self, password))]
    pub async fn log_in(&self, email: &str, password: &str) -> Result<Session> {
        let email = normalize_email(email);
        let user = self.store.find_user(&email).await?;

        let Some(hash) = user.as_ref().and_then(|u| u.password_hash.as_deref()) else {
            warn!(email = %email, "Login for unknown or password-less account");
            return Err(Error::invalid_credentials());
        };

        if !verify_password(password, hash).await? {
            warn!(email = %email, "Wrong password");
            return Err(Error::invalid_credentials());
        }

        let user = user.ok_or_else(Error::invalid_credentials)?;
        self.session_for(user)
    }

    /// Open a session for a Google profile, creating the account on first login
    #[instrument(skip(self, profile), fields(email = %profile.email))]
    pub async fn google_sign_in(&self, profile: GoogleProfile) -> Result<Session> {
        let email = normalize_email(&profile.email);
        if email.is_empty() {
            return Err(Error::new(ErrorCode::OAuthFailed, "Google profile has no email"));
        }

        let user = match self.store.find_user(&email).await? {
            Some(user) => user,
            None => {
                let user = UserRecord::from_google(&email, profile.name.clone(), profile.picture.clone());
                match self.store.insert_user(user.clone()).await {
                    Ok(()) => info!("Google account created"),
                    // created concurrently; the stored record is as good as ours
                    Err(e) if e.code == ErrorCode::Conflict => {}
                    Err(e) => return Err(e),
                }
                user
            }
        };

        let mut session = self.session_for(user)?;
        session.identity.name = profile.name.or(session.identity.name);
        session.identity.picture = profile.picture.or(session.identity.picture);
        Ok(session)
    }

    /// Identity behind an `Authorization` header value
    pub fn authenticate(&self, authorization: Option<&str>) -> Result<Identity> {
        let token = bearer_token(authorization)?;
        let claims = self.tokens.verify(token)?;
        Ok(Identity::from_email(claims.email))
    }

    fn session_for(&self, user: UserRecord) -> Result<Session> {
        let token = self.tokens.issue(&user.email)?;
        Ok(Session {
            token,
            identity: Identity {
                email: user.email,
                name: user.name,
                picture: user.picture,
            },
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Duration;
    use recipegen_store::{AuthProvider, MemoryStore};

    fn authenticator() -> (Arc<MemoryStore>, Authenticator) {
        let store = Arc::new(MemoryStore::new());
        let tokens = TokenManager::new("test-secret", Duration::days(7));
        let auth = Authenticator::new(store.clone(), tokens).with_bcrypt_cost(4);
        (store, auth)
    }

    #[tokio::test]
    async fn test_sign_up_then_log_in() {
        let (store, auth) = authenticator();
        let user = auth.sign_up("Cook@Example.com", "hunter22!").await.unwrap();
        assert_eq!(user.email, "cook@example.com");
        assert_ne!(user.password_hash.as_deref(), Some("hunter22!"));
        assert!(store.find_user("cook@example.com").await.unwrap().is_some());

        let session = auth.log_in("cook@example.com", "hunter22!").await.unwrap();
        let identity = auth.authenticate(Some(&session.authorization_header())).unwrap();
        assert_eq!(identity.email, "cook@example.com");
    }

    #[tokio::test]
    async fn test_duplicate_sign_up() {
        let (_, auth) = authenticator();
        auth.sign_up("cook@example.com", "hunter22!").await.unwrap();
        let err = auth.sign_up("COOK@example.com", "another-pass").await.unwrap_err();
        assert_eq!(err.code, ErrorCode::Conflict);
        assert_eq!(err.message, "User already exists");
    }

    #[tokio::test]
    async fn test_sign_up_validation() {
        let (_, auth) = authenticator();
        let err = auth.sign_up("cook@example.com", "short").await.unwrap_err();
        assert_eq!(err.code, ErrorCode::ValidationError);
        assert!(auth.sign_up("nobody", "long-enough").await.is_err());
    }

    #[tokio::test]
    async fn test_login_failures_look_the_same() {
        let (_, auth) = authenticator();
        auth.sign_up("cook@example.com", "hunter22!").await.unwrap();

        let wrong = auth.log_in("cook@example.com", "wrong-pass").await.unwrap_err();
        let unknown = auth.log_in("ghost@example.com", "hunter22!").await.unwrap_err();
        assert_eq!(wrong.message, "Invalid email or password");
        assert_eq!(wrong.message, unknown.message);
        assert_eq!(wrong.code, unknown.code);
    }

    #[tokio::test]
    async fn test_google_sign_in_creates_once() {
        let (store, auth) = authenticator();
        let profile = GoogleProfile {
            email: "Ada@Example.com".into(),
            name: Some("Ada".into()),
            picture: None,
        };

        let first = auth.google_sign_in(profile.clone()).await.unwrap();
        let second = auth.google_sign_in(profile).await.unwrap();
        assert_eq!(first.identity.email, "ada@example.com");
        assert_eq!(second.identity.name.as_deref(), Some("Ada"));

        let user = store.find_user("ada@example.com").await.unwrap().unwrap();
        assert_eq!(user.provider, AuthProvider::Google);

        // no password, so password login must fail
        assert!(auth.log_in("ada@example.com", "whatever1").await.is_err());
    }

    #[test]
    fn test_authenticate_rejects_missing_and_bad() {
        let (_, auth) = authenticator();
        assert_eq!(auth.authenticate(None).unwrap_err().message, "Missing token");
        assert_eq!(auth.authenticate(Some("Bearer nope")).unwrap_err().message, "Invalid token");
    }
}
