use axum::{extract::State, response::Redirect, Form, Json};
use serde::Deserialize;

use common::types::UserSummary;

use crate::errors::ApiError;
use crate::state::AppState;

pub async fn list_users(State(state): State<AppState>) -> Result<Json<Vec<UserSummary>>, ApiError> {
    let users = state
        .auth
        .list_users()
        .await
        .map_err(|e| ApiError::auth(e, "Could not list users."))?;
    Ok(Json(users.into_iter().map(|u| UserSummary { name: u.name }).collect()))
}

#[derive(Debug, Deserialize)]
pub struct DeleteUserForm {
    pub username: Option<String>,
}

/// `POST /delete-user`: removes the named account; unknown names are a no-op.
pub async fn delete_user(State(state): State<AppState>, Form(form): Form<DeleteUserForm>) -> Result<Redirect, ApiError> {
    let name = form.username.unwrap_or_default();
    state
        .auth
        .delete_user(&name)
        .await
        .map_err(|e| ApiError::auth(e, "Error deleting user."))?;
    Ok(Redirect::to("/admin"))
}
