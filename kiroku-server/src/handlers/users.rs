//! User CRUD endpoint handlers.

use axum::Form;
use axum::extract::{Path, State};
use axum::response::{Html, Redirect};
use log::info;
use serde::Deserialize;

use kiroku::db::models::UpdateUser;
use kiroku::db::operations;

use crate::error::AppResult;
use crate::routes::AppState;
use crate::views;

#[derive(Debug, Deserialize)]
pub struct UserForm {
    pub username: String,
    pub email: String,
}

/// GET /users
pub async fn list_users(State(state): State<AppState>) -> AppResult<Html<String>> {
    let users = operations::get_all_users(&state.pool).await?;
    Ok(Html(views::users_page(&users)))
}

/// POST /users
pub async fn create_user(
    State(state): State<AppState>,
    Form(form): Form<UserForm>,
) -> AppResult<Redirect> {
    let user = operations::create_user(&state.pool, &form.username, &form.email).await?;
    info!("Created user {}", user.id);
    Ok(Redirect::to("/users"))
}

/// GET /user/{id}
pub async fn show_user(
    State(state): State<AppState>,
    Path(user_id): Path<i64>,
) -> AppResult<Html<String>> {
    let user = operations::get_user(&state.pool, user_id).await?;
    Ok(Html(views::user_page(&user)))
}

/// POST /user/{id}
///
/// The form always submits both fields; a blank field keeps the stored
/// value, which the update operation handles.
pub async fn update_user(
    State(state): State<AppState>,
    Path(user_id): Path<i64>,
    Form(form): Form<UserForm>,
) -> AppResult<Redirect> {
    let update = UpdateUser {
        username: Some(form.username),
        email: Some(form.email),
    };
    let user = operations::update_user(&state.pool, user_id, &update).await?;
    info!("Updated user {}", user.id);
    Ok(Redirect::to("/users"))
}

/// POST /delete_user/{id}
pub async fn delete_user(
    State(state): State<AppState>,
    Path(user_id): Path<i64>,
) -> AppResult<Redirect> {
    operations::delete_user(&state.pool, user_id).await?;
    info!("Deleted user {}", user_id);
    Ok(Redirect::to("/users"))
}
