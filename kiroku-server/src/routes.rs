use axum::Router;
use axum::routing::{get, post};
use sqlx::SqlitePool;

use crate::handlers;

/// Shared application state: the store handle, nothing else.
#[derive(Clone)]
pub struct AppState {
    pub pool: SqlitePool,
}

/// Router for the user CRUD application.
pub fn create_router(pool: SqlitePool) -> Router {
    Router::new()
        .route(
            "/users",
            get(handlers::list_users).post(handlers::create_user),
        )
        .route(
            "/user/:id",
            get(handlers::show_user).post(handlers::update_user),
        )
        .route("/delete_user/:id", post(handlers::delete_user))
        .route("/health", get(handlers::health))
        .with_state(AppState { pool })
}

/// Router for the reporting process.
pub fn create_dashboard_router(pool: SqlitePool) -> Router {
    Router::new()
        .route("/dashboard", get(handlers::dashboard))
        .route("/health", get(handlers::health))
        .with_state(AppState { pool })
}
