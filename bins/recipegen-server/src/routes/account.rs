//! Sign-up, login and Google sign-in

use crate::error::AppResult;
use crate::extract::JsonBody;
use crate::state::SharedState;
use axum::extract::{Query, State};
use axum::http::StatusCode;
use axum::response::Redirect;
use axum::Json;
use recipegen_auth::callback_redirect;
use recipegen_core::{Error, ErrorCode};
use serde::Deserialize;
use serde_json::{json, Value};

#[derive(Debug, Deserialize)]
pub struct Credentials {
    email: Option<String>,
    password: Option<String>,
}

impl Credentials {
    fn into_parts(self) -> Result<(String, String), Error> {
        let email = self.email.ok_or_else(|| Error::missing_field("email"))?;
        let password = self.password.ok_or_else(|| Error::missing_field("password"))?;
        Ok((email, password))
    }
}

pub async fn signup(
    State(state): State<SharedState>,
    JsonBody(body): JsonBody<Credentials>,
) -> AppResult<(StatusCode, Json<Value>)> {
    let (email, password) = body.into_parts()?;
    let user = state.auth.sign_up(&email, &password).await?;
    Ok((
        StatusCode::CREATED,
        Json(json!({ "message": "User registered", "email": user.email })),
    ))
}

pub async fn login(State(state): State<SharedState>, JsonBody(body): JsonBody<Credentials>) -> AppResult<Json<Value>> {
    let (email, password) = body.into_parts()?;
    let session = state.auth.log_in(&email, &password).await?;
    Ok(Json(json!({ "token": session.token })))
}

fn google_disabled() -> Error {
    Error::new(ErrorCode::OAuthFailed, "Google sign-in is not configured")
        .with_suggestion("Set GOOGLE_CLIENT_ID and GOOGLE_CLIENT_SECRET")
}

pub async fn google_start(State(state): State<SharedState>) -> AppResult<Redirect> {
    let google = state.google.as_ref().ok_or_else(google_disabled)?;
    Ok(Redirect::to(&google.authorize_url()))
}

#[derive(Debug, Deserialize)]
pub struct CallbackQuery {
    code: Option<String>,
}

pub async fn google_callback(
    State(state): State<SharedState>,
    Query(query): Query<CallbackQuery>,
) -> AppResult<Redirect> {
    let code = query
        .code
        .filter(|code| !code.is_empty())
        .ok_or_else(|| Error::validation("No code"))?;
    let google = state.google.as_ref().ok_or_else(google_disabled)?;

    let access_token = google.exchange_code(&code).await?;
    let profile = google.profile(&access_token).await?;
    let session = state.auth.google_sign_in(profile).await?;

    Ok(Redirect::to(&callback_redirect(&state.config.server.site_url, &session)))
}
