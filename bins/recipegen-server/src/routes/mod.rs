//! HTTP routes

mod account;
mod grocery;
mod recipes;
mod saved;
mod system;

use crate::state::SharedState;
use axum::http::header::{AUTHORIZATION, CONTENT_TYPE};
use axum::http::Method;
use axum::routing::{delete, get, post};
use axum::Router;
use std::time::Duration;
use tower_http::cors::{Any, CorsLayer};
use tower_http::trace::TraceLayer;

/// Build the application router
pub fn router(state: SharedState) -> Router {
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods([Method::GET, Method::POST, Method::PUT, Method::DELETE, Method::OPTIONS])
        .allow_headers([CONTENT_TYPE, AUTHORIZATION])
        .max_age(Duration::from_secs(60 * 60));

    Router::new()
        .route("/health", get(system::health))
        .route("/metrics", get(system::metrics))
        .route("/api/signup", post(account::signup))
        .route("/api/login", post(account::login))
        .route("/api/login/google", get(account::google_start))
        .route("/api/login/google/callback", get(account::google_callback))
        .route(
            "/api/groceryList",
            get(grocery::get).post(grocery::add).put(grocery::replace),
        )
        .route("/api/groceryList/toggle", post(grocery::toggle))
        .route("/api/groceryList/remove", post(grocery::remove))
        .route("/api/groceryList/clear-completed", post(grocery::clear))
        .route("/api/save", get(saved::list).post(saved::save))
        .route("/api/save/:id", delete(saved::remove))
        .route("/api/recipes/search", get(recipes::search))
        .route("/api/recipes/random", get(recipes::random))
        .route("/api/recipes/:id", get(recipes::detail))
        .route("/api/ingredients", get(recipes::autocomplete))
        .route("/api/ingredients/suggest", get(recipes::suggest))
        .layer(TraceLayer::new_for_http())
        .layer(cors)
        .with_state(state)
}
