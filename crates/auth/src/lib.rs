//! Accounts and sessions for recipegen
//!
//! - [`password`]: bcrypt hashing on the blocking pool
//! - [`token`]: HS256 bearer tokens (`sub`, `email`, `iat`, `exp`)
//! - [`google`]: Google OAuth authorization-code flow
//! - [`session`]: [`SessionContext`] and `Authorization` header parsing
//! - [`service`]: [`Authenticator`], tying the above to a user store

pub mod google;
pub mod password;
pub mod service;
pub mod session;
pub mod token;

pub use google::{GoogleOAuth, GoogleProfile};
pub use service::Authenticator;
pub use session::{bearer_token, callback_redirect, Identity, Session, SessionContext};
pub use token::{Claims, TokenManager};
