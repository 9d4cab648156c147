//! Request extractors

use crate::error::AppError;
use crate::state::SharedState;
use axum::async_trait;
use axum::extract::{FromRequest, FromRequestParts, Request};
use axum::http::header::AUTHORIZATION;
use axum::http::request::Parts;
use axum::Json;
use recipegen_auth::Identity;
use recipegen_core::Error;
use serde::de::DeserializeOwned;

/// The caller's identity, from `Authorization: Bearer <token>`
pub struct AuthUser(pub Identity);

#[async_trait]
impl FromRequestParts<SharedState> for AuthUser {
    type Rejection = AppError;

    async fn from_request_parts(parts: &mut Parts, state: &SharedState) -> Result<Self, Self::Rejection> {
        let header = parts.headers.get(AUTHORIZATION).and_then(|value| value.to_str().ok());
        let identity = state.auth.authenticate(header)?;
        Ok(Self(identity))
    }
}

/// JSON body whose parse failures become 400 validation errors
pub struct JsonBody<T>(pub T);

#[async_trait]
impl<S, T> FromRequest<S> for JsonBody<T>
where
    T: DeserializeOwned,
    S: Send + Sync,
{
    type Rejection = AppError;

    async fn from_request(req: Request, state: &S) -> Result<Self, Self::Rejection> {
        match Json::<T>::from_request(req, state).await {
            Ok(Json(value)) => Ok(Self(value)),
            Err(rejection) => Err(Error::validation(rejection.body_text()).into()),
        }
    }
}
